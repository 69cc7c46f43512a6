use serde::Deserialize;
use std::path::Path;
use tokio::fs;

use crate::error::ConfigError;

/// 未提供主题文件时使用的默认主题
pub const DEFAULT_TOPICS: [&str; 10] = [
    "Understanding Machine Learning Algorithms",
    "Getting Started with Python for Data Science",
    "A Beginner’s Guide to APIs and RESTful Services",
    "How to Build a Simple Web App with Flask",
    "Exploring Neural Networks with TensorFlow",
    "Introduction to Cloud Computing for Developers",
    "Version Control with Git and GitHub",
    "Understanding Prompt Engineering for AI",
    "How AI is Revolutionizing Web Development",
    "Top 10 Python Libraries Every Developer Should Know",
];

/// 主题文件格式
///
/// ```toml
/// topics = [
///     "Understanding Machine Learning Algorithms",
///     "Version Control with Git and GitHub",
/// ]
/// ```
#[derive(Debug, Deserialize)]
struct TopicList {
    topics: Vec<String>,
}

/// 默认主题列表
pub fn default_topics() -> Vec<String> {
    DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect()
}

/// 从 TOML 文件加载主题列表，保持文件中的顺序
pub async fn load_topics(path: &Path) -> Result<Vec<String>, ConfigError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::TopicsUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

    let list: TopicList = toml::from_str(&content).map_err(|source| ConfigError::TopicsParseFailed {
        path: path.to_path_buf(),
        source,
    })?;

    if list.topics.is_empty() {
        return Err(ConfigError::NoTopics {
            path: path.to_path_buf(),
        });
    }

    tracing::info!("从 {} 加载了 {} 个主题", path.display(), list.topics.len());
    Ok(list.topics)
}

/// 有主题文件则加载，否则使用默认列表
pub async fn load_topics_or_default(path: Option<&Path>) -> Result<Vec<String>, ConfigError> {
    match path {
        Some(path) => load_topics(path).await,
        None => {
            tracing::info!("未指定主题文件，使用默认的 {} 个主题", DEFAULT_TOPICS.len());
            Ok(default_topics())
        }
    }
}
