//! 日志工具模块
//!
//! 提供日志初始化和格式化输出的辅助函数

use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 初始化全局日志
///
/// 日志写到 stderr，stdout 只留给渲染后的文档。
/// 默认级别为 info，`verbose` 时为 debug，`RUST_LOG` 优先。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🧠 AI 博客生成器启动");
    info!("📁 博客目录: {}", config.blog_folder.display());
    info!("🤖 模型: {}", config.llm_model_name);
    info!("{}", "=".repeat(60));
}

/// 记录批量生成开始信息
pub fn log_batch_start(total: usize, model: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始批量生成: 共 {} 个主题", total);
    info!("🤖 模型: {}", model);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(written: usize, total: usize, blog_folder: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 批量生成完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 已写入: {}/{}", written, total);
    info!("{}", "=".repeat(60));
    info!("\n博客已保存至: {}", blog_folder.display());
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
