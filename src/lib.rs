//! # Blog Forge
//!
//! 一个在终端里浏览本地 Markdown 博客、并调用 LLM 生成新博客的小工具
//!
//! ## 架构设计
//!
//! ### ① 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个服务只做一件事
//! - `LlmService` - 根据提示词生成正文（实现 `TextGenerator`）
//! - `BlogStore` - 存储目录下 `.md` 文件的列出、读取、写入
//! - `render_html` - Markdown 渲染为 HTML
//! - `prompt_builder` - 提示词构建
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - 定义"一篇博客"的完整处理流程
//! - `GenerateFlow` - 校验 → 提示词 → LLM → 写入 → 渲染，LLM 失败时返回结果而不是错误
//! - `BrowseFlow` - 列出 → 选择 → 读取 → 渲染
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/interactive` - 交互式会话
//! - `orchestrator/batch_processor` - 批量生成，任一失败即中止
//!
//! ## 存储约定
//!
//! 所有博客都放在 `blog/` 目录（可配置），扩展名 `.md`，UTF-8 编码。
//! 文件名由标题推导，同名即覆盖。

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{ConfigError, GenerationError, StorageError, ValidationError};
pub use models::{Catalog, Document, FilenameStyle};
pub use orchestrator::{App, BatchProcessor};
pub use services::{BlogStore, LlmService, TextGenerator};
pub use workflow::{BrowseFlow, GenerateFlow, GenerateOutcome};
