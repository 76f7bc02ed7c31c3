use super::common::BlockCommon;
use crate::types::{NotionId, RichTextItem};
use serde::{Deserialize, Serialize};

/// A block whose payload is a single run of rich text
/// (paragraphs, headings, list items, quotes, toggles, templates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub common: BlockCommon,
    pub rich_text: Vec<RichTextItem>,
}

/// To-do block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToDoBlock {
    pub common: BlockCommon,
    pub rich_text: Vec<RichTextItem>,
    pub checked: bool,
}

/// Callout block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalloutBlock {
    pub common: BlockCommon,
    pub icon: Option<Icon>,
    pub rich_text: Vec<RichTextItem>,
}

/// Icon types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Icon {
    Emoji(String),
    Image { url: String },
}

impl Icon {
    pub fn emoji(&self) -> Option<&str> {
        match self {
            Icon::Emoji(emoji) => Some(emoji),
            Icon::Image { .. } => None,
        }
    }
}

/// Code block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub common: BlockCommon,
    pub language: String,
    pub rich_text: Vec<RichTextItem>,
}

/// Equation block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationBlock {
    pub common: BlockCommon,
    pub expression: String,
}

/// A block with no payload beyond its identity
/// (divider, breadcrumb, table of contents, column layout, synced block).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerBlock {
    pub common: BlockCommon,
}

/// Image, video, file and PDF blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaBlock {
    pub common: BlockCommon,
    pub source: FileObject,
    pub caption: Vec<RichTextItem>,
}

/// Bookmark block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkBlock {
    pub common: BlockCommon,
    pub url: String,
    pub caption: Vec<RichTextItem>,
}

/// Embed and link preview blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlBlock {
    pub common: BlockCommon,
    pub url: String,
}

/// Child page and child database blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitledBlock {
    pub common: BlockCommon,
    pub title: String,
}

/// Link to page block; the target is absent when it points at something
/// other than a page or database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkToPageBlock {
    pub common: BlockCommon,
    pub target: Option<NotionId>,
}

/// Table block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableBlock {
    pub common: BlockCommon,
    pub table_width: usize,
}

/// A block whose kind this crate does not model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsupportedBlock {
    pub common: BlockCommon,
    pub block_type: String,
}

/// File object types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FileObject {
    External {
        url: String,
    },
    Hosted {
        url: String,
    },
}

impl FileObject {
    pub fn url(&self) -> &str {
        match self {
            FileObject::External { url } | FileObject::Hosted { url } => url,
        }
    }
}
