pub mod blog_store;
pub mod llm_service;
pub mod prompt_builder;
pub mod renderer;

pub use blog_store::BlogStore;
pub use llm_service::{LlmService, TextGenerator};
pub use prompt_builder::{build_batch_prompt, build_interactive_prompt};
pub use renderer::render_html;
