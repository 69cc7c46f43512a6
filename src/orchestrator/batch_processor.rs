use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::models::{load_topics_or_default, Document};
use crate::services::{build_batch_prompt, BlogStore, LlmService, TextGenerator};
use crate::utils::logging;

/// 批量处理统计
#[derive(Debug, Default)]
pub struct BatchStats {
    pub total: usize,
    pub written: usize,
    pub paths: Vec<PathBuf>,
}

/// 批量博客生成器
///
/// 按顺序逐个主题生成，没有任何容错：
/// 任一主题的 LLM 调用或写入失败，都会立即返回错误，剩余主题不再处理。
pub struct BatchProcessor<G> {
    generator: G,
    store: BlogStore,
}

impl BatchProcessor<LlmService> {
    pub fn from_config(config: &Config) -> Self {
        Self::new(LlmService::new(config), BlogStore::new(config))
    }
}

impl<G: TextGenerator> BatchProcessor<G> {
    pub fn new(generator: G, store: BlogStore) -> Self {
        Self { generator, store }
    }

    /// 依次处理所有主题
    pub async fn run(&self, topics: &[String]) -> Result<BatchStats> {
        self.store.ensure_folder().await?;

        let mut stats = BatchStats {
            total: topics.len(),
            ..Default::default()
        };

        logging::log_batch_start(topics.len(), self.generator.model_name());

        for (index, topic) in topics.iter().enumerate() {
            println!("正在生成博客: {}", topic);
            info!("[{}/{}] 📝 {}", index + 1, topics.len(), topic);

            let body = self
                .generator
                .generate(&build_batch_prompt(topic))
                .await
                .with_context(|| format!("生成博客失败: {}", topic))?;

            let document = Document::batch(topic, &body);
            let path = self.store.write(&document).await?;

            stats.written += 1;
            stats.paths.push(path);
        }

        println!(
            "\n✅ 所有博客已生成并保存到 {} 目录",
            self.store.folder().display()
        );

        Ok(stats)
    }
}

/// 批量模式入口：加载主题列表后运行
pub async fn run_batch(config: &Config) -> Result<BatchStats> {
    let topics = load_topics_or_default(config.topics_file.as_deref()).await?;
    let processor = BatchProcessor::from_config(config);
    let stats = processor.run(&topics).await?;
    logging::print_final_stats(stats.written, stats.total, processor.store.folder());
    Ok(stats)
}
