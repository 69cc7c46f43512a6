use std::fmt;
use std::path::PathBuf;

/// 程序配置
///
/// 只在 `main` 中构建一次，然后以引用方式传入各个服务。
/// 业务代码不直接读取环境变量。
#[derive(Clone)]
pub struct Config {
    /// 博客存放目录
    pub blog_folder: PathBuf,
    /// 批量生成时使用的主题列表文件（TOML）
    pub topics_file: Option<PathBuf>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    pub llm_temperature: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blog_folder: PathBuf::from("blog"),
            topics_file: None,
            verbose_logging: false,
            llm_api_key: String::new(),
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            llm_model_name: "gemini-2.5-flash".to_string(),
            llm_temperature: None,
        }
    }
}

impl Config {
    /// 从环境变量加载配置，未设置的项使用默认值
    ///
    /// 调用前应先执行 `dotenvy::dotenv()`，以便读取本地 `.env` 文件。
    /// API 密钥缺失时不会报错，首次调用 LLM 时才会失败。
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            blog_folder: std::env::var("BLOG_FOLDER").map(PathBuf::from).unwrap_or(default.blog_folder),
            topics_file: std::env::var("TOPICS_FILE").ok().map(PathBuf::from).or(default.topics_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            llm_api_key: std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("LLM_API_KEY"))
                .unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            llm_temperature: std::env::var("LLM_TEMPERATURE").ok().and_then(|v| v.parse().ok()).or(default.llm_temperature),
        }
    }

    /// 用命令行指定的主题文件覆盖配置
    pub fn with_topics_file(mut self, topics_file: Option<PathBuf>) -> Self {
        if topics_file.is_some() {
            self.topics_file = topics_file;
        }
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.llm_api_key.is_empty() { "<未设置>" } else { "<已隐藏>" };
        f.debug_struct("Config")
            .field("blog_folder", &self.blog_folder)
            .field("topics_file", &self.topics_file)
            .field("verbose_logging", &self.verbose_logging)
            .field("llm_api_key", &key)
            .field("llm_api_base_url", &self.llm_api_base_url)
            .field("llm_model_name", &self.llm_model_name)
            .field("llm_temperature", &self.llm_temperature)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_blog_folder() {
        let config = Config::default();
        assert_eq!(config.blog_folder, PathBuf::from("blog"));
        assert_eq!(config.llm_model_name, "gemini-2.5-flash");
        assert!(config.topics_file.is_none());
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = Config {
            llm_api_key: "secret-key-123".to_string(),
            ..Config::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret-key-123"));
    }

    #[test]
    fn test_cli_topics_file_overrides() {
        let config = Config::default().with_topics_file(Some(PathBuf::from("topics.toml")));
        assert_eq!(config.topics_file, Some(PathBuf::from("topics.toml")));

        let kept = config.clone().with_topics_file(None);
        assert_eq!(kept.topics_file, Some(PathBuf::from("topics.toml")));
    }
}
