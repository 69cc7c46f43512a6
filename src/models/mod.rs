pub mod document;
pub mod loaders;

pub use document::{
    validate_title, Catalog, Document, DocumentEntry, FilenameStyle, RenderedDocument,
    MARKDOWN_EXTENSION,
};
pub use loaders::{default_topics, load_topics, load_topics_or_default};
