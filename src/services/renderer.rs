//! Markdown 渲染 - 业务能力层
//!
//! 使用 `pulldown-cmark` 将 Markdown 渲染为 HTML。
//! 文档中的原始 HTML 会被转义为文本，不会作为标签输出；
//! 链接和图片只保留 http / https / mailto 和相对地址，其余替换为 `#`。

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// 地址是否可以原样输出
///
/// 浏览器解析 scheme 前会去掉空白和控制字符，这里先做同样处理。
fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    match cleaned.find(|c| matches!(c, ':' | '/' | '?' | '#')) {
        Some(pos) if cleaned[pos..].starts_with(':') => {
            ALLOWED_SCHEMES.contains(&&cleaned[..pos])
        }
        _ => true,
    }
}

fn sanitize_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

fn sanitize_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

/// 渲染 Markdown 为 HTML
///
/// 接受任意输入，不会失败。
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, markdown_options()).map(sanitize_event);

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headers_and_lists() {
        let html = render_html("# Title\n\n- one\n- two\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn test_renders_code_block() {
        let html = render_html("```rust\nfn main() {}\n```\n");
        assert!(html.contains("<pre><code class=\"language-rust\">"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_html("hello <script>alert(1)</script>\n\n<div onclick=\"x\">block</div>\n");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<div"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_script_urls_are_dropped() {
        let html = render_html(
            "[click](javascript:alert(1)) ![i](javascript:alert(2)) [d](data:text/html,x) \
             [u](JavaScript:alert(3)) <javascript:alert(4)>\n\n[r]: vbscript:msgbox\n\n[ref][r]\n",
        );
        let lowered = html.to_ascii_lowercase();
        for scheme in ["javascript", "data", "vbscript"] {
            assert!(!lowered.contains(&format!("href=\"{}", scheme)));
            assert!(!lowered.contains(&format!("src=\"{}", scheme)));
        }
        assert!(html.contains("<a href=\"#\">click</a>"));
        assert!(html.contains("<img src=\"#\" alt=\"i\""));
        assert!(html.contains("<a href=\"#\">ref</a>"));
    }

    #[test]
    fn test_url_scheme_check() {
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url(" java\tscript:alert(1)"));
        assert!(!is_safe_url("DATA:text/html,x"));
        assert!(is_safe_url("https://example.com"));
        assert!(is_safe_url("notes.md"));
        assert!(is_safe_url("dir/file:v2.md"));
    }

    #[test]
    fn test_safe_urls_are_kept() {
        let html = render_html(
            "[a](https://example.com/x?y=1) [b](http://example.com) [c](mailto:me@example.com) \
             [d](../other.md) [e](#section) [f](/abs/path:with-colon)\n",
        );
        assert!(html.contains("href=\"https://example.com/x?y=1\""));
        assert!(html.contains("href=\"http://example.com\""));
        assert!(html.contains("href=\"mailto:me@example.com\""));
        assert!(html.contains("href=\"../other.md\""));
        assert!(html.contains("href=\"#section\""));
        assert!(html.contains("href=\"/abs/path:with-colon\""));
    }

    #[test]
    fn test_odd_inputs_do_not_panic() {
        for input in ["", "   ", "日本語のテキスト 🚀", "*_`[]()<>&#|~", "| a |\n|---|\n| b |"] {
            let _ = render_html(input);
        }
        assert_eq!(render_html(""), "");
    }
}
