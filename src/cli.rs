use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "blog-forge")]
#[command(about = "浏览本地 Markdown 博客，或调用 LLM 生成新博客")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 在终端输出渲染后的 HTML，默认输出 Markdown 原文
    #[arg(long, global = true)]
    pub html: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 交互式会话（默认）
    Interactive,
    /// 浏览已有博客
    Browse {
        /// 直接打开的文件名，例如 Intro_to_Testing.md
        name: Option<String>,
    },
    /// 生成一篇新博客
    Generate {
        /// 博客标题，不提供时在终端输入
        #[arg(long)]
        title: Option<String>,
        /// 补充说明（可选）
        #[arg(long)]
        brief: Option<String>,
    },
    /// 按主题列表批量生成
    Batch {
        /// 主题列表文件（TOML，`topics = [...]`）
        #[arg(long)]
        topics: Option<PathBuf>,
    },
}
