// src/formatting/rich_text/annotations.rs
//! Annotation processing for rich text.
//!
//! Styles are applied as nested wrappers in a fixed order so that the same
//! span always renders the same way.

use crate::types::Annotations;

/// The inline styling of one rendered span.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub code: bool,
    /// Used verbatim; targets are neither validated nor escaped.
    pub link: Option<String>,
}

impl TextStyle {
    pub fn is_plain(&self) -> bool {
        *self == TextStyle::default()
    }
}

/// Converts model annotations to text style.
pub fn annotations_to_style(annotations: &Annotations) -> TextStyle {
    TextStyle {
        bold: annotations.bold,
        italic: annotations.italic,
        strikethrough: annotations.strikethrough,
        code: annotations.code,
        link: None,
    }
}

/// Renderer for text styles to Markdown.
pub struct MarkdownStyleRenderer;

impl MarkdownStyleRenderer {
    /// Wraps `content` innermost-first: bold, italic, strikethrough, code,
    /// and finally the link around everything else.
    pub fn apply_styles(content: &str, style: &TextStyle) -> String {
        let mut result = content.to_string();

        if style.bold {
            result = format!("**{}**", result);
        }

        if style.italic {
            result = format!("*{}*", result);
        }

        if style.strikethrough {
            result = format!("~~{}~~", result);
        }

        if style.code {
            result = format!("`{}`", result);
        }

        if let Some(url) = &style.link {
            result = format!("[{}]({})", result, url);
        }

        result
    }
}
