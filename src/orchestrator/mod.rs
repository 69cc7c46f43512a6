//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `interactive` - 交互式会话
//! - 主菜单循环（浏览 / 生成 / 退出）
//! - 终端输入、选择列表和忙碌提示
//! - LLM 失败只提示，会话继续
//!
//! ### `batch_processor` - 批量生成器
//! - 按主题列表顺序逐个生成
//! - 任一失败立即中止剩余主题
//!
//! ## 层次关系
//!
//! ```text
//! interactive / batch_processor
//!     ↓
//! workflow (GenerateFlow / BrowseFlow)
//!     ↓
//! services (LLM / 存储 / 渲染 / 提示词)
//! ```

pub mod batch_processor;
pub mod interactive;

pub use batch_processor::{run_batch, BatchProcessor, BatchStats};
pub use interactive::App;
