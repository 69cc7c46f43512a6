//! 博客文档模型
//!
//! 文件系统是唯一的存储，这里的类型只在单次操作中存在。

use std::path::PathBuf;

use crate::error::ValidationError;

/// 博客文件扩展名
pub const MARKDOWN_EXTENSION: &str = ".md";

/// 文件名推导规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilenameStyle {
    /// 交互式生成：空格替换为下划线
    Interactive,
    /// 批量生成：转小写，空格和 `/` 替换为下划线
    Batch,
}

impl FilenameStyle {
    /// 由标题推导文件名
    ///
    /// 纯函数，不做其他字符清理，也不限制长度。
    /// 不同标题可能得到相同文件名，写入时后者覆盖前者。
    pub fn derive(self, title: &str) -> String {
        let stem = match self {
            FilenameStyle::Interactive => title.replace(' ', "_"),
            FilenameStyle::Batch => title.to_lowercase().replace(' ', "_").replace('/', "_"),
        };
        format!("{}{}", stem, MARKDOWN_EXTENSION)
    }
}

/// 校验交互式输入的标题
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}

/// 待写入磁盘的文档
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub filename: String,
    pub body: String,
}

impl Document {
    /// 交互式生成的文档，正文原样保存
    pub fn interactive(title: &str, body: String) -> Self {
        Self {
            title: title.to_string(),
            filename: FilenameStyle::Interactive.derive(title),
            body,
        }
    }

    /// 批量生成的文档，正文前加一级标题
    pub fn batch(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            filename: FilenameStyle::Batch.derive(title),
            body: format!("# {}\n\n{}\n", title, body),
        }
    }
}

/// 存储目录中的一个可浏览文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    pub filename: String,
    pub path: PathBuf,
}

/// 读取并渲染后的文档
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub filename: String,
    pub markdown: String,
    pub html: String,
}

/// 浏览目录的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Catalog {
    /// 目录中没有任何博客
    Empty,
    /// 按文件名排序的博客列表
    Documents(Vec<DocumentEntry>),
}

impl Catalog {
    pub fn from_entries(entries: Vec<DocumentEntry>) -> Self {
        if entries.is_empty() {
            Catalog::Empty
        } else {
            Catalog::Documents(entries)
        }
    }

    /// 按文件名在目录中查找，只匹配已列出的博客
    pub fn find(&self, filename: &str) -> Option<&DocumentEntry> {
        match self {
            Catalog::Empty => None,
            Catalog::Documents(entries) => entries.iter().find(|e| e.filename == filename),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_filename() {
        assert_eq!(
            FilenameStyle::Interactive.derive("Intro to Testing"),
            "Intro_to_Testing.md"
        );
    }

    #[test]
    fn test_batch_filename() {
        assert_eq!(
            FilenameStyle::Batch.derive("Version Control with Git and GitHub"),
            "version_control_with_git_and_github.md"
        );
        assert_eq!(
            FilenameStyle::Batch.derive("CI/CD Basics"),
            "ci_cd_basics.md"
        );
    }

    #[test]
    fn test_interactive_keeps_case_and_slash() {
        // 交互式规则只替换空格
        assert_eq!(FilenameStyle::Interactive.derive("A/B Tests"), "A/B_Tests.md");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        for title in ["Rust", "  padded  ", "A Beginner’s Guide", "x/y z"] {
            for style in [FilenameStyle::Interactive, FilenameStyle::Batch] {
                assert_eq!(style.derive(title), style.derive(title));
            }
        }
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Rust").is_ok());
        assert_eq!(validate_title(""), Err(ValidationError::EmptyTitle));
        assert_eq!(validate_title(" \t\n "), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_batch_document_has_heading() {
        let doc = Document::batch("Version Control with Git and GitHub", "body");
        assert!(doc
            .body
            .starts_with("# Version Control with Git and GitHub\n\n"));
        assert_eq!(doc.body, "# Version Control with Git and GitHub\n\nbody\n");
    }

    #[test]
    fn test_interactive_document_body_untouched() {
        let doc = Document::interactive("Intro to Testing", "  raw body  ".to_string());
        assert_eq!(doc.body, "  raw body  ");
        assert_eq!(doc.filename, "Intro_to_Testing.md");
    }

    #[test]
    fn test_catalog_find_only_listed_names() {
        assert_eq!(Catalog::from_entries(Vec::new()), Catalog::Empty);
        assert!(Catalog::Empty.find("a.md").is_none());

        let catalog = Catalog::from_entries(vec![DocumentEntry {
            filename: "a.md".to_string(),
            path: PathBuf::from("blog/a.md"),
        }]);
        assert_eq!(
            catalog.find("a.md").map(|e| e.path.clone()),
            Some(PathBuf::from("blog/a.md"))
        );
        assert!(catalog.find("b.md").is_none());
        assert!(catalog.find("../a.md").is_none());
        assert!(catalog.find("blog/a.md").is_none());
    }
}
