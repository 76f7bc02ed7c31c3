// src/formatting/block_renderer.rs
//! Block rendering engine — converts one Notion block to Markdown.
//!
//! Rendering is a pure function of the block, the [`RenderConfig`] and the
//! already-rendered text of the block's children. Every fragment ends with
//! its own line break, so fragments concatenate without separators.

use super::rich_text::rich_text_to_markdown;
use crate::constants::CHARS_PER_BLOCK_ESTIMATE;
use crate::model::*;
use crate::types::concat_plain_text;

// --- Core Types ---

/// Options that hold for one whole render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Render headings as bold lines instead of Markdown headings.
    pub flatten_headings: bool,
    /// Fetch and render nested content under container blocks.
    pub include_children: bool,
}

impl RenderConfig {
    /// Configuration for the document a report is about.
    pub fn primary() -> Self {
        Self {
            flatten_headings: false,
            include_children: true,
        }
    }

    /// Configuration for documents embedded inside another report section.
    pub fn embedded(include_children: bool) -> Self {
        Self {
            flatten_headings: true,
            include_children,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::primary()
    }
}

// --- Public API ---

/// Renders a slice of sibling blocks without nested content.
pub fn render_blocks(blocks: &[Block], config: &RenderConfig) -> String {
    let mut output = String::with_capacity(blocks.len() * CHARS_PER_BLOCK_ESTIMATE);
    for block in blocks {
        output.push_str(&render_block(block, config, ""));
    }
    output
}

/// Renders one block, appending `children_text` where the kind nests content.
pub fn render_block(block: &Block, config: &RenderConfig, children_text: &str) -> String {
    match block {
        Block::Heading1(b) => format_heading(1, b, config, children_text),
        Block::Heading2(b) => format_heading(2, b, config, children_text),
        Block::Heading3(b) => format_heading(3, b, config, children_text),
        Block::Paragraph(b) => format_paragraph(b, children_text),
        Block::ToDo(b) => {
            let marker = if b.checked { "- [x] " } else { "- [ ] " };
            format_prefixed(marker, &b.rich_text, children_text)
        }
        Block::BulletedListItem(b) => format_prefixed("- ", &b.rich_text, children_text),
        // Numbering is left to the Markdown viewer.
        Block::NumberedListItem(b) => format_prefixed("1. ", &b.rich_text, children_text),
        Block::Quote(b) => format_prefixed("> ", &b.rich_text, children_text),
        Block::Code(b) => format_code_block(b),
        Block::Divider(_) => "---\n".to_string(),
        Block::Callout(b) => format_callout(b, children_text),
        Block::Toggle(b) => format!(
            "<details>\n<summary>{}</summary>\n\n{}</details>\n",
            rich_text_to_markdown(&b.rich_text),
            children_text
        ),
        Block::Image(b) | Block::Video(b) | Block::File(b) | Block::Pdf(b) => format!(
            "![{}]({})\n",
            rich_text_to_markdown(&b.caption),
            b.source.url()
        ),
        Block::Embed(b) => bracketed("Embed", &b.url),
        Block::Bookmark(b) => {
            let caption = rich_text_to_markdown(&b.caption);
            bracketed("Bookmark", if caption.is_empty() { &b.url } else { &caption })
        }
        Block::LinkPreview(b) => bracketed("Link", &b.url),
        Block::Equation(b) => format!("$${}$$\n", b.expression),
        Block::Table(b) => bracketed("Table", &format!("{} columns", b.table_width)),
        Block::TableOfContents(_) => bracketed("Table of Contents", ""),
        Block::Breadcrumb(_) => bracketed("Breadcrumb", ""),
        Block::ColumnList(_) => bracketed("Column List", ""),
        Block::Column(_) => bracketed("Column", ""),
        Block::LinkToPage(b) => {
            let target = b
                .target
                .as_ref()
                .map(|id| id.to_hyphenated())
                .unwrap_or_default();
            bracketed("Link to Page", &target)
        }
        Block::Synced(_) => bracketed("Synced Block", ""),
        Block::Template(b) => bracketed("Template", &rich_text_to_markdown(&b.rich_text)),
        Block::ChildPage(b) => bracketed("Child Page", &b.title),
        Block::ChildDatabase(b) => bracketed("Child Database", &b.title),
        Block::Unsupported(b) => format!("[Unsupported block: {}]\n", b.block_type),
    }
}

// --- Block-type formatters ---

fn format_heading(level: usize, b: &TextBlock, config: &RenderConfig, children: &str) -> String {
    let text = rich_text_to_markdown(&b.rich_text);
    if config.flatten_headings {
        format!("**{}**\n\n{}", text, children)
    } else {
        format!("{} {}\n{}", "#".repeat(level), text, children)
    }
}

/// Empty paragraphs still produce a line, keeping the source's spacing.
fn format_paragraph(b: &TextBlock, children: &str) -> String {
    let text = rich_text_to_markdown(&b.rich_text);
    if text.is_empty() && children.is_empty() {
        return "\n".to_string();
    }
    format!("{}\n{}", text, children)
}

fn format_prefixed(prefix: &str, rich_text: &[crate::types::RichTextItem], children: &str) -> String {
    format!("{}{}\n{}", prefix, rich_text_to_markdown(rich_text), children)
}

/// Code content is emitted verbatim, without inline styling.
fn format_code_block(code: &CodeBlock) -> String {
    format!(
        "```{}\n{}\n```\n",
        code.language,
        concat_plain_text(&code.rich_text)
    )
}

fn format_callout(b: &CalloutBlock, children: &str) -> String {
    let text = rich_text_to_markdown(&b.rich_text);
    let emphasized = if text.is_empty() {
        String::new()
    } else {
        format!("**{}**", text)
    };
    let line = match b.icon.as_ref().and_then(Icon::emoji) {
        Some(emoji) if !emphasized.is_empty() => format!("{} {}", emoji, emphasized),
        Some(emoji) => emoji.to_string(),
        None => emphasized,
    };
    format!("{}\n{}", line, children)
}

/// A one-line placeholder; the text part is dropped when empty.
fn bracketed(label: &str, text: &str) -> String {
    if text.is_empty() {
        format!("[{}]\n", label)
    } else {
        format!("[{}: {}]\n", label, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Annotations, BlockId, RichTextItem};
    use pretty_assertions::assert_eq;

    fn common() -> BlockCommon {
        BlockCommon::new(BlockId::parse("0123456789abcdef0123456789abcdef").unwrap())
    }

    fn text(content: &str) -> TextBlock {
        TextBlock {
            common: common(),
            rich_text: if content.is_empty() {
                vec![]
            } else {
                vec![RichTextItem::plain_text(content)]
            },
        }
    }

    fn nested() -> RenderConfig {
        RenderConfig::embedded(true)
    }

    #[test]
    fn test_headings_by_config() {
        let h2 = Block::Heading2(text("Scope"));
        assert_eq!(render_block(&h2, &RenderConfig::primary(), ""), "## Scope\n");
        assert_eq!(render_block(&h2, &nested(), ""), "**Scope**\n\n");
    }

    #[test]
    fn test_flattened_heading_keeps_children() {
        let h1 = Block::Heading1(text("Plan"));
        assert_eq!(
            render_block(&h1, &nested(), "- step\n"),
            "**Plan**\n\n- step\n"
        );
    }

    #[test]
    fn test_empty_paragraph_is_single_newline() {
        let p = Block::Paragraph(text(""));
        assert_eq!(render_block(&p, &RenderConfig::primary(), ""), "\n");
    }

    #[test]
    fn test_list_markers() {
        let cfg = RenderConfig::primary();
        let todo = Block::ToDo(ToDoBlock {
            common: common(),
            rich_text: vec![RichTextItem::plain_text("Ship")],
            checked: true,
        });
        assert_eq!(render_block(&todo, &cfg, ""), "- [x] Ship\n");
        assert_eq!(
            render_block(&Block::NumberedListItem(text("second")), &cfg, ""),
            "1. second\n"
        );
        assert_eq!(
            render_block(&Block::BulletedListItem(text("a")), &cfg, "- b\n"),
            "- a\n- b\n"
        );
        assert_eq!(render_block(&Block::Quote(text("wise")), &cfg, ""), "> wise\n");
    }

    #[test]
    fn test_code_block_is_verbatim() {
        let code = Block::Code(CodeBlock {
            common: common(),
            language: "rust".to_string(),
            rich_text: vec![RichTextItem::styled(
                "let x = 1;",
                Annotations {
                    bold: true,
                    ..Annotations::default()
                },
                None,
            )],
        });
        assert_eq!(
            render_block(&code, &RenderConfig::primary(), "ignored"),
            "```rust\nlet x = 1;\n```\n"
        );
    }

    #[test]
    fn test_callout_with_and_without_emoji() {
        let callout = |icon: Option<Icon>| {
            Block::Callout(CalloutBlock {
                common: common(),
                icon,
                rich_text: vec![RichTextItem::plain_text("Heads up")],
            })
        };
        let cfg = RenderConfig::primary();
        assert_eq!(
            render_block(&callout(Some(Icon::Emoji("💡".to_string()))), &cfg, "body\n"),
            "💡 **Heads up**\nbody\n"
        );
        assert_eq!(
            render_block(
                &callout(Some(Icon::Image {
                    url: "https://example.com/i.png".to_string()
                })),
                &cfg,
                ""
            ),
            "**Heads up**\n"
        );
    }

    #[test]
    fn test_toggle_wraps_children() {
        let toggle = Block::Toggle(text("More"));
        assert_eq!(
            render_block(&toggle, &RenderConfig::primary(), "hidden\n"),
            "<details>\n<summary>More</summary>\n\nhidden\n</details>\n"
        );
    }

    #[test]
    fn test_placeholders() {
        let cfg = RenderConfig::primary();
        let media = Block::Image(MediaBlock {
            common: common(),
            source: FileObject::External {
                url: "https://example.com/a.png".to_string(),
            },
            caption: vec![RichTextItem::plain_text("Diagram")],
        });
        assert_eq!(
            render_block(&media, &cfg, ""),
            "![Diagram](https://example.com/a.png)\n"
        );

        let bookmark = Block::Bookmark(BookmarkBlock {
            common: common(),
            url: "https://example.com".to_string(),
            caption: vec![],
        });
        assert_eq!(
            render_block(&bookmark, &cfg, ""),
            "[Bookmark: https://example.com]\n"
        );

        let equation = Block::Equation(EquationBlock {
            common: common(),
            expression: "a^2+b^2".to_string(),
        });
        assert_eq!(render_block(&equation, &cfg, ""), "$$a^2+b^2$$\n");

        let table = Block::Table(TableBlock {
            common: common(),
            table_width: 3,
        });
        assert_eq!(render_block(&table, &cfg, ""), "[Table: 3 columns]\n");

        assert_eq!(
            render_block(&Block::Breadcrumb(MarkerBlock { common: common() }), &cfg, ""),
            "[Breadcrumb]\n"
        );
        assert_eq!(
            render_block(
                &Block::ChildPage(TitledBlock {
                    common: common(),
                    title: "Specs".to_string()
                }),
                &cfg,
                ""
            ),
            "[Child Page: Specs]\n"
        );
    }

    #[test]
    fn test_unsupported_kind_is_visible() {
        let block = Block::Unsupported(UnsupportedBlock {
            common: common(),
            block_type: "audio".to_string(),
        });
        assert_eq!(
            render_block(&block, &RenderConfig::primary(), ""),
            "[Unsupported block: audio]\n"
        );
    }

    #[test]
    fn test_render_blocks_concatenates_in_order() {
        let blocks = vec![
            Block::Heading1(text("Title")),
            Block::Paragraph(text("Hello")),
            Block::Divider(MarkerBlock { common: common() }),
        ];
        assert_eq!(
            render_blocks(&blocks, &RenderConfig::primary()),
            "# Title\nHello\n---\n"
        );
    }
}
