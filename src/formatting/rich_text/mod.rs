// src/formatting/rich_text/mod.rs
//! Formats Notion rich text spans into inline Markdown.

mod annotations;

use crate::types::RichTextItem;
use annotations::{annotations_to_style, MarkdownStyleRenderer};

/// Formats a sequence of rich text spans into one inline Markdown string.
///
/// Spans are concatenated in order with no separators; an empty slice
/// yields an empty string.
pub fn rich_text_to_markdown(items: &[RichTextItem]) -> String {
    items.iter().map(format_single_item).collect()
}

/// Formats one span: its literal text wrapped in its annotation markers.
pub fn format_single_item(item: &RichTextItem) -> String {
    let mut style = annotations_to_style(&item.annotations);
    style.link = item.link_target().map(str::to_string);

    let text = item.text();
    if style.is_plain() {
        return text.to_string();
    }
    MarkdownStyleRenderer::apply_styles(text, &style)
}
