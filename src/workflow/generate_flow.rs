//! 单篇博客生成流程 - 流程层
//!
//! 流程顺序：
//! 1. 校验标题（空标题直接返回，不产生任何副作用）
//! 2. 构建提示词 → 调用 LLM
//! 3. 成功后写入文件并渲染正文
//!
//! LLM 调用失败会被捕获并作为结果返回，会话可以继续；
//! 存储错误不在此处处理，直接向上传递。

use std::path::PathBuf;

use tracing::{error, info};

use crate::config::Config;
use crate::error::{GenerationError, StorageError, ValidationError};
use crate::models::{validate_title, Document};
use crate::services::{build_interactive_prompt, render_html, BlogStore, LlmService, TextGenerator};

/// 生成表单的三种结果
#[derive(Debug)]
pub enum GenerateOutcome {
    /// 生成并保存成功
    Saved {
        title: String,
        path: PathBuf,
        body: String,
        html: String,
    },
    /// 输入不合法，未调用 LLM
    Invalid(ValidationError),
    /// LLM 调用失败，未写入文件
    Failed {
        title: String,
        cause: GenerationError,
    },
}

impl GenerateOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, GenerateOutcome::Saved { .. })
    }
}

/// 单篇博客生成流程
///
/// - 只依赖 `TextGenerator` 和 `BlogStore`
/// - 不读取环境变量
pub struct GenerateFlow<G> {
    generator: G,
    store: BlogStore,
}

impl GenerateFlow<LlmService> {
    /// 使用真实的 LLM 服务创建
    pub fn from_config(config: &Config) -> Self {
        Self::new(LlmService::new(config), BlogStore::new(config))
    }
}

impl<G: TextGenerator> GenerateFlow<G> {
    pub fn new(generator: G, store: BlogStore) -> Self {
        Self { generator, store }
    }

    /// 提交一次生成请求
    ///
    /// 文件名由原始标题推导（不做 trim）。
    pub async fn submit(
        &self,
        title: &str,
        brief: Option<&str>,
    ) -> Result<GenerateOutcome, StorageError> {
        if let Err(e) = validate_title(title) {
            return Ok(GenerateOutcome::Invalid(e));
        }

        info!(
            "✨ 正在生成博客: {} (模型: {})",
            title,
            self.generator.model_name()
        );

        let prompt = build_interactive_prompt(title, brief.filter(|b| !b.is_empty()));

        let body = match self.generator.generate(&prompt).await {
            Ok(body) => body,
            Err(cause) => {
                error!("❌ 生成博客失败: {}", cause);
                return Ok(GenerateOutcome::Failed {
                    title: title.to_string(),
                    cause,
                });
            }
        };

        let document = Document::interactive(title, body);
        let path = self.store.write(&document).await?;
        info!("✅ 博客 '{}' 已保存至 {}", title, path.display());

        let html = render_html(&document.body);

        Ok(GenerateOutcome::Saved {
            title: document.title,
            path,
            body: document.body,
            html,
        })
    }
}
