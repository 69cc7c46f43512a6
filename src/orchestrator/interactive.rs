use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing::info;

use crate::config::Config;
use crate::models::Catalog;
use crate::services::{LlmService, TextGenerator};
use crate::utils::{logging, progress};
use crate::workflow::{BrowseFlow, GenerateFlow, GenerateOutcome};

const MENU_BROWSE: usize = 0;
const MENU_GENERATE: usize = 1;

/// 交互式会话
///
/// 持有浏览和生成两个流程，按用户选择依次执行。
/// LLM 失败只提示不退出；存储错误和终端错误直接结束会话。
/// 默认在终端输出 Markdown 原文，`html_output` 时输出渲染后的 HTML。
pub struct App<G> {
    browse: BrowseFlow,
    generate: GenerateFlow<G>,
    html_output: bool,
}

impl App<LlmService> {
    /// 初始化应用
    pub fn initialize(config: &Config) -> Self {
        logging::log_startup(config);
        Self::new(BrowseFlow::from_config(config), GenerateFlow::from_config(config))
    }
}

impl<G: TextGenerator> App<G> {
    pub fn new(browse: BrowseFlow, generate: GenerateFlow<G>) -> Self {
        Self {
            browse,
            generate,
            html_output: false,
        }
    }

    /// 输出渲染后的 HTML 而不是 Markdown 原文
    pub fn with_html_output(mut self, html_output: bool) -> Self {
        self.html_output = html_output;
        self
    }

    fn display<'a>(&self, markdown: &'a str, html: &'a str) -> &'a str {
        if self.html_output {
            html
        } else {
            markdown
        }
    }

    /// 运行主菜单循环，直到用户选择退出
    pub async fn run(&self) -> Result<()> {
        let theme = ColorfulTheme::default();
        let items = ["📚 浏览已有博客", "✨ 生成新博客", "🚪 退出"];

        loop {
            let choice = Select::with_theme(&theme)
                .with_prompt("🧠 AI 博客生成器")
                .items(&items)
                .default(0)
                .interact()?;

            match choice {
                MENU_BROWSE => self.browse(None).await?,
                MENU_GENERATE => self.generate(None, None).await?,
                _ => break,
            }
        }

        info!("👋 会话结束");
        Ok(())
    }

    /// 浏览博客；指定文件名时直接打开，否则列出供选择
    pub async fn browse(&self, filename: Option<&str>) -> Result<()> {
        let catalog = self.browse.catalog().await?;
        let entries = match &catalog {
            Catalog::Empty => {
                println!("ℹ️ 还没有任何博客，先生成一篇试试吧！");
                return Ok(());
            }
            Catalog::Documents(entries) => entries,
        };

        let document = match filename {
            Some(name) => match self.browse.open_by_name(name).await? {
                Some(document) => document,
                None => {
                    eprintln!("⚠️ 没有找到博客 '{}'，可选的有:", name);
                    for entry in entries.iter() {
                        eprintln!("  - {}", entry.filename);
                    }
                    return Ok(());
                }
            },
            None => {
                let names: Vec<&str> = entries.iter().map(|e| e.filename.as_str()).collect();
                let index = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("选择要阅读的博客")
                    .items(&names)
                    .default(0)
                    .interact()?;
                self.browse.open(&entries[index]).await?
            }
        };

        println!("📄 {}\n", document.filename);
        println!("{}", self.display(&document.markdown, &document.html));
        Ok(())
    }

    /// 生成一篇博客；未提供标题时从终端读取
    pub async fn generate(&self, title: Option<String>, brief: Option<String>) -> Result<()> {
        let theme = ColorfulTheme::default();

        let (title, brief) = match title {
            Some(title) => (title, brief),
            None => {
                let title: String = Input::with_theme(&theme)
                    .with_prompt("📝 博客标题")
                    .allow_empty(true)
                    .interact_text()?;
                let brief: String = Input::with_theme(&theme)
                    .with_prompt("💡 补充说明（可选）")
                    .allow_empty(true)
                    .interact_text()?;
                (title, Some(brief))
            }
        };

        if let Some(brief) = brief.as_deref() {
            info!("补充说明: {}", logging::truncate_text(brief, 60));
        }

        let spinner = progress::spinner("✨ 正在生成博客，请稍候...");
        let outcome = self.generate.submit(&title, brief.as_deref()).await;
        spinner.finish_and_clear();

        match outcome? {
            GenerateOutcome::Saved {
                title,
                path,
                body,
                html,
            } => {
                println!("✅ 博客 '{}' 已生成并保存至 {}", title, path.display());
                println!("{}", self.display(&body, &html));
            }
            GenerateOutcome::Invalid(e) => {
                eprintln!("⚠️ {}", e);
            }
            GenerateOutcome::Failed { cause, .. } => {
                eprintln!("❌ 生成博客时出错: {}", cause);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;
    use crate::services::BlogStore;

    struct NoopGenerator;

    impl TextGenerator for NoopGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            Err(GenerationError::Unavailable("noop".to_string()))
        }

        fn model_name(&self) -> &str {
            "noop"
        }
    }

    fn app(dir: &std::path::Path) -> App<NoopGenerator> {
        App::new(
            BrowseFlow::new(BlogStore::with_path(dir)),
            GenerateFlow::new(NoopGenerator, BlogStore::with_path(dir)),
        )
    }

    #[test]
    fn test_terminal_shows_markdown_unless_html_requested() {
        let dir = tempfile::tempdir().unwrap();

        let plain = app(dir.path());
        assert_eq!(plain.display("# Title", "<h1>Title</h1>"), "# Title");

        let html = app(dir.path()).with_html_output(true);
        assert_eq!(html.display("# Title", "<h1>Title</h1>"), "<h1>Title</h1>");
    }

    #[tokio::test]
    async fn test_browse_unknown_name_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("post.md"), "post").unwrap();

        let app = app(dir.path());
        app.browse(Some("../post.md")).await.unwrap();
        app.browse(Some("missing.md")).await.unwrap();
        app.browse(Some("post.md")).await.unwrap();
    }
}
