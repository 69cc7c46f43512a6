//! 博客存储服务 - 业务能力层
//!
//! 只负责存储目录下 `.md` 文件的列出、读取和写入。
//! 同名文件直接覆盖，不加锁，不做原子替换。

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::config::Config;
use crate::error::StorageError;
use crate::models::{Document, DocumentEntry, MARKDOWN_EXTENSION};

/// 博客存储服务
pub struct BlogStore {
    blog_folder: PathBuf,
}

impl BlogStore {
    /// 按配置中的目录创建
    pub fn new(config: &Config) -> Self {
        Self::with_path(config.blog_folder.clone())
    }

    /// 使用自定义目录创建
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            blog_folder: path.into(),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.blog_folder
    }

    /// 目录不存在时创建
    pub async fn ensure_folder(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.blog_folder)
            .await
            .map_err(|source| StorageError::CreateDir {
                path: self.blog_folder.clone(),
                source,
            })
    }

    /// 列出目录下所有 `.md` 文件，按文件名排序
    pub async fn list(&self) -> Result<Vec<DocumentEntry>, StorageError> {
        let read_dir_err = |source: std::io::Error| StorageError::ReadDir {
            path: self.blog_folder.clone(),
            source,
        };

        let mut entries = fs::read_dir(&self.blog_folder).await.map_err(read_dir_err)?;
        let mut documents = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(read_dir_err)? {
            let filename = entry.file_name().to_string_lossy().to_string();
            if !filename.ends_with(MARKDOWN_EXTENSION) {
                continue;
            }
            let file_type = entry.file_type().await.map_err(read_dir_err)?;
            if !file_type.is_file() {
                continue;
            }
            documents.push(DocumentEntry {
                filename,
                path: entry.path(),
            });
        }

        documents.sort_by(|a, b| a.filename.cmp(&b.filename));
        debug!(
            "在 {} 中找到 {} 篇博客",
            self.blog_folder.display(),
            documents.len()
        );

        Ok(documents)
    }

    /// 以 UTF-8 读取 `list` 返回的博客
    pub async fn read(&self, entry: &DocumentEntry) -> Result<String, StorageError> {
        fs::read_to_string(&entry.path)
            .await
            .map_err(|source| StorageError::Read {
                path: entry.path.clone(),
                source,
            })
    }

    /// 写入文档，必要时先创建目录；同名文件被覆盖
    pub async fn write(&self, document: &Document) -> Result<PathBuf, StorageError> {
        self.ensure_folder().await?;

        let path = self.blog_folder.join(&document.filename);
        debug!(
            "写入博客: {} ({} 字节)",
            path.display(),
            document.body.len()
        );

        fs::write(&path, document.body.as_bytes())
            .await
            .map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }
}
