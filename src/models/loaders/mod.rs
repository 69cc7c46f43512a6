pub mod toml_loader;

pub use toml_loader::{default_topics, load_topics, load_topics_or_default, DEFAULT_TOPICS};
