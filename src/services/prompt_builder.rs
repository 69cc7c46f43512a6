//! 提示词构建 - 业务能力层
//!
//! 标题和补充说明原样嵌入，不做转义。

/// 交互式生成的提示词
///
/// 没有补充说明时该位置为空字符串，保留两侧的空格。
pub fn build_interactive_prompt(title: &str, brief: Option<&str>) -> String {
    format!(
        "Write a detailed, well-structured technical blog post on '{}'. {} Use Markdown formatting with headers, subheaders, bullet points, and code examples where relevant.",
        title,
        brief.unwrap_or("")
    )
}

/// 批量生成的提示词
pub fn build_batch_prompt(title: &str) -> String {
    format!(
        "Write a detailed, structured, SEO-friendly blog on: {}",
        title
    )
}
