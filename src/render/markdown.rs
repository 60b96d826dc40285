//! Markdown to HTML conversion using pulldown-cmark.
//!
//! The event stream is transformed before rendering:
//! - headings shift one level down (`#` renders as `<h2>`, capped at `<h6>`)
//! - external links open in a new window
//! - fenced code blocks keep their `language-*` class only for the
//!   highlighter's language set; anything else renders as a plain block

use crate::utils::html::escape_attr;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Languages the syntax highlighter ships grammars for. Fenced blocks in
/// other languages render without a language class.
const HIGHLIGHT_LANGUAGES: &[&str] = &[
    "bash",
    "json",
    "ts",
    "c",
    "jsx",
    "tsx",
    "cpp",
    "csharp",
    "java",
    "typescript",
    "yaml",
];

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Convert markdown text to an HTML fragment.
pub fn to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, options());

    // Tracks whether each open link was rewritten to raw HTML, so the
    // matching end event is rewritten too.
    let mut rewritten_links: Vec<bool> = Vec::new();

    let events = parser.map(move |event| match event {
        Event::Start(Tag::Heading {
            level,
            id,
            classes,
            attrs,
        }) => Event::Start(Tag::Heading {
            level: shift_heading(level),
            id,
            classes,
            attrs,
        }),
        Event::End(TagEnd::Heading(level)) => Event::End(TagEnd::Heading(shift_heading(level))),

        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => {
            if is_external(&dest_url) {
                rewritten_links.push(true);
                let mut anchor = format!("<a href=\"{}\"", escape_attr(&dest_url));
                if !title.is_empty() {
                    anchor.push_str(&format!(" title=\"{}\"", escape_attr(&title)));
                }
                anchor.push_str(" target=\"_blank\" rel=\"noopener noreferrer\">");
                Event::Html(anchor.into())
            } else {
                rewritten_links.push(false);
                Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                })
            }
        }
        Event::End(TagEnd::Link) => {
            if rewritten_links.pop().unwrap_or(false) {
                Event::Html("</a>".into())
            } else {
                Event::End(TagEnd::Link)
            }
        }

        Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
            let lang = info
                .split([' ', '\t', ','])
                .next()
                .unwrap_or_default();
            if HIGHLIGHT_LANGUAGES.contains(&lang) {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info)))
            } else {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced("".into())))
            }
        }

        other => other,
    });

    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, events);
    html
}

/// Shift a heading one level down, saturating at h6.
fn shift_heading(level: HeadingLevel) -> HeadingLevel {
    match level {
        HeadingLevel::H1 => HeadingLevel::H2,
        HeadingLevel::H2 => HeadingLevel::H3,
        HeadingLevel::H3 => HeadingLevel::H4,
        HeadingLevel::H4 => HeadingLevel::H5,
        HeadingLevel::H5 | HeadingLevel::H6 => HeadingLevel::H6,
    }
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_shift() {
        let html = to_html("# Top\n\n## Sub\n\n###### Deep");
        assert!(html.contains("<h2"));
        assert!(html.contains("<h3"));
        // h6 saturates
        assert!(html.contains("<h6"));
        assert!(!html.contains("<h1"));
        assert!(!html.contains("<h7"));
    }

    #[test]
    fn test_external_link_opens_new_window() {
        let html = to_html("[site](https://example.com)");
        assert!(html.contains("href=\"https://example.com\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains(">site</a>"));
    }

    #[test]
    fn test_internal_link_untouched() {
        let html = to_html("[about](/about)");
        assert!(html.contains("href=\"/about\""));
        assert!(!html.contains("target=\"_blank\""));
    }

    #[test]
    fn test_code_block_language_allowlist() {
        let html = to_html("```json\n{\"a\": 1}\n```");
        assert!(html.contains("language-json"));

        let html = to_html("```brainfuck\n+++\n```");
        assert!(!html.contains("language-"));
        assert!(html.contains("<pre><code>"));
    }

    #[test]
    fn test_inline_code_and_tables() {
        let html = to_html("`x = 1`\n\n| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<code>x = 1</code>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_raw_fragment_no_document_wrapper() {
        let html = to_html("plain text");
        assert!(html.contains("<p>plain text</p>"));
        assert!(!html.contains("<html"));
    }
}
