//! Markup helpers for feature cards.

use std::sync::LazyLock;

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;

// XML prolog, doctype and leading comments are dropped along with the root tag name.
static SVG_ROOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)\A\s*(?:<\?xml.*?\?>\s*)?(?:<!--.*?-->\s*|(?i:<!DOCTYPE)[^>\[]*(?:\[.*?\])?\s*>\s*)*<svg\b",
    )
    .expect("svg root pattern is valid")
});

/// Errors that can occur when rendering a description.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("Description contains a {0}, only inline markdown is allowed")]
    BlockElement(&'static str),
}

/// Render an inline markdown description to HTML without a paragraph wrapper.
///
/// The card template supplies the enclosing `<p>`: paragraph tags are dropped
/// and consecutive paragraphs are joined with `<br>`. Any other block element
/// (lists, headings, code blocks, ...) is rejected.
pub fn inline_markdown(source: &str) -> Result<String, MarkupError> {
    let mut events = Vec::new();
    let mut paragraphs = 0;

    for event in Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH) {
        match event {
            Event::Start(Tag::Paragraph) => {
                if paragraphs > 0 {
                    events.push(Event::InlineHtml("<br>".into()));
                }
                paragraphs += 1;
            }
            Event::End(TagEnd::Paragraph) => {}
            Event::Start(tag) if !is_inline(&tag) => {
                return Err(MarkupError::BlockElement(block_name(&tag)));
            }
            Event::Rule => return Err(MarkupError::BlockElement("horizontal rule")),
            event => events.push(event),
        }
    }

    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());

    Ok(html_output.trim().to_string())
}

fn is_inline(tag: &Tag) -> bool {
    matches!(
        tag,
        Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. }
    )
}

fn block_name(tag: &Tag) -> &'static str {
    match tag {
        Tag::Heading { .. } => "heading",
        Tag::BlockQuote(_) => "block quote",
        Tag::CodeBlock(_) => "code block",
        Tag::HtmlBlock => "HTML block",
        Tag::List(_) | Tag::Item => "list",
        Tag::Table(_) | Tag::TableHead | Tag::TableRow | Tag::TableCell => "table",
        _ => "block element",
    }
}

/// Split an SVG document after its root `<svg` tag name.
///
/// Returns the remainder (root attributes, children and closing tag) so the
/// caller can write its own attributes onto the root element. `None` when the
/// markup has no leading `<svg` element.
pub fn svg_after_root(markup: &str) -> Option<&str> {
    SVG_ROOT
        .find(markup)
        .map(|m| markup[m.end()..].trim_end())
}

/// Resolve an image path against the site base URL.
///
/// Only root-relative paths are rewritten; relative paths, protocol-relative and
/// absolute URLs are returned unchanged.
pub fn resolve_src(base_url: &str, src: &str) -> String {
    if src.starts_with('/') && !src.starts_with("//") {
        format!("{}{}", base_url.trim_end_matches('/'), src)
    } else {
        src.to_string()
    }
}
