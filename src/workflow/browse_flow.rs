//! 博客浏览流程 - 流程层
//!
//! 列出存储目录中的博客，读取选中的一篇并渲染为 HTML。
//! 目录为空是正常状态，返回 `Catalog::Empty`。
//! 只能打开目录列表中的博客，不接受任意路径。

use tracing::{info, warn};

use crate::config::Config;
use crate::error::StorageError;
use crate::models::{Catalog, DocumentEntry, RenderedDocument};
use crate::services::{render_html, BlogStore};

pub struct BrowseFlow {
    store: BlogStore,
}

impl BrowseFlow {
    pub fn new(store: BlogStore) -> Self {
        Self { store }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(BlogStore::new(config))
    }

    /// 列出所有博客，目录不存在时先创建
    pub async fn catalog(&self) -> Result<Catalog, StorageError> {
        self.store.ensure_folder().await?;
        let entries = self.store.list().await?;
        info!("📚 找到 {} 篇博客", entries.len());
        Ok(Catalog::from_entries(entries))
    }

    /// 读取并渲染目录中的一篇博客
    pub async fn open(&self, entry: &DocumentEntry) -> Result<RenderedDocument, StorageError> {
        let markdown = self.store.read(entry).await?;
        let html = render_html(&markdown);
        Ok(RenderedDocument {
            filename: entry.filename.clone(),
            markdown,
            html,
        })
    }

    /// 按文件名打开博客；名字不在目录列表中时返回 `None`
    pub async fn open_by_name(
        &self,
        filename: &str,
    ) -> Result<Option<RenderedDocument>, StorageError> {
        let catalog = self.catalog().await?;
        match catalog.find(filename) {
            Some(entry) => Ok(Some(self.open(entry).await?)),
            None => {
                warn!("未找到博客: {}", filename);
                Ok(None)
            }
        }
    }
}
