use std::path::PathBuf;

use async_openai::error::OpenAIError;
use thiserror::Error;

/// 输入校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 标题为空或只包含空白
    #[error("请先输入博客标题再生成")]
    EmptyTitle,
}

/// LLM 生成错误
#[derive(Debug, Error)]
pub enum GenerationError {
    /// 构建请求或调用 API 失败
    #[error("LLM API 调用失败 (模型: {model}): {source}")]
    Request {
        model: String,
        #[source]
        source: OpenAIError,
    },
    /// 返回结果中没有内容
    #[error("LLM 返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
    /// 服务不可用（其他实现使用）
    #[error("生成服务不可用: {0}")]
    Unavailable(String),
}

/// 文件存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    /// 创建目录失败
    #[error("创建目录失败 ({}): {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 读取目录失败
    #[error("读取目录失败 ({}): {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 读取文件失败
    #[error("读取文件失败 ({}): {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({}): {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 主题文件读取失败
    #[error("无法读取主题文件 ({}): {source}", path.display())]
    TopicsUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 主题文件解析失败
    #[error("无法解析主题文件 ({}): {source}", path.display())]
    TopicsParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// 主题列表为空
    #[error("主题文件中没有任何主题: {}", path.display())]
    NoTopics { path: PathBuf },
}

// ========== 便捷构造函数 ==========

impl GenerationError {
    /// 创建 API 调用失败错误
    pub fn request(model: impl Into<String>, source: OpenAIError) -> Self {
        GenerationError::Request {
            model: model.into(),
            source,
        }
    }
}
