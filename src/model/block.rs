use super::blocks::*;
use super::common::BlockCommon;
use crate::types::BlockId;
use serde::{Deserialize, Serialize};

/// Macro to reduce boilerplate in Block enum methods
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            Block::Paragraph($pattern) => $result,
            Block::Heading1($pattern) => $result,
            Block::Heading2($pattern) => $result,
            Block::Heading3($pattern) => $result,
            Block::BulletedListItem($pattern) => $result,
            Block::NumberedListItem($pattern) => $result,
            Block::ToDo($pattern) => $result,
            Block::Toggle($pattern) => $result,
            Block::Quote($pattern) => $result,
            Block::Callout($pattern) => $result,
            Block::Code($pattern) => $result,
            Block::Equation($pattern) => $result,
            Block::Divider($pattern) => $result,
            Block::Breadcrumb($pattern) => $result,
            Block::TableOfContents($pattern) => $result,
            Block::Image($pattern) => $result,
            Block::Video($pattern) => $result,
            Block::File($pattern) => $result,
            Block::Pdf($pattern) => $result,
            Block::Bookmark($pattern) => $result,
            Block::Embed($pattern) => $result,
            Block::LinkPreview($pattern) => $result,
            Block::ChildPage($pattern) => $result,
            Block::ChildDatabase($pattern) => $result,
            Block::LinkToPage($pattern) => $result,
            Block::Table($pattern) => $result,
            Block::ColumnList($pattern) => $result,
            Block::Column($pattern) => $result,
            Block::Synced($pattern) => $result,
            Block::Template($pattern) => $result,
            Block::Unsupported($pattern) => $result,
        }
    };
}

/// One node of a page's content tree.
///
/// The set of kinds is closed; anything the API returns that is not
/// modelled here arrives as [`Block::Unsupported`] carrying its raw tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(TextBlock),
    Heading1(TextBlock),
    Heading2(TextBlock),
    Heading3(TextBlock),
    BulletedListItem(TextBlock),
    NumberedListItem(TextBlock),
    ToDo(ToDoBlock),
    Toggle(TextBlock),
    Quote(TextBlock),
    Callout(CalloutBlock),
    Code(CodeBlock),
    Equation(EquationBlock),
    Divider(MarkerBlock),
    Breadcrumb(MarkerBlock),
    TableOfContents(MarkerBlock),
    Image(MediaBlock),
    Video(MediaBlock),
    File(MediaBlock),
    Pdf(MediaBlock),
    Bookmark(BookmarkBlock),
    Embed(UrlBlock),
    LinkPreview(UrlBlock),
    ChildPage(TitledBlock),
    ChildDatabase(TitledBlock),
    LinkToPage(LinkToPageBlock),
    Table(TableBlock),
    ColumnList(MarkerBlock),
    Column(MarkerBlock),
    Synced(MarkerBlock),
    Template(TextBlock),
    Unsupported(UnsupportedBlock),
}

impl Block {
    pub fn id(&self) -> &BlockId {
        match_all_blocks!(self, b => &b.common.id)
    }

    pub fn common(&self) -> &BlockCommon {
        match_all_blocks!(self, b => &b.common)
    }

    pub fn has_children(&self) -> bool {
        self.common().has_children
    }

    /// Whether nested content under this kind is part of its rendering.
    ///
    /// Every other kind is rendered from its own payload alone, even when
    /// the API reports children for it.
    pub fn supports_children(&self) -> bool {
        matches!(
            self,
            Block::Toggle(_)
                | Block::Callout(_)
                | Block::Quote(_)
                | Block::BulletedListItem(_)
                | Block::NumberedListItem(_)
                | Block::ToDo(_)
        )
    }

    /// The Notion API type tag for this block.
    pub fn block_type(&self) -> &str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading1(_) => "heading_1",
            Block::Heading2(_) => "heading_2",
            Block::Heading3(_) => "heading_3",
            Block::BulletedListItem(_) => "bulleted_list_item",
            Block::NumberedListItem(_) => "numbered_list_item",
            Block::ToDo(_) => "to_do",
            Block::Toggle(_) => "toggle",
            Block::Quote(_) => "quote",
            Block::Callout(_) => "callout",
            Block::Code(_) => "code",
            Block::Equation(_) => "equation",
            Block::Divider(_) => "divider",
            Block::Breadcrumb(_) => "breadcrumb",
            Block::TableOfContents(_) => "table_of_contents",
            Block::Image(_) => "image",
            Block::Video(_) => "video",
            Block::File(_) => "file",
            Block::Pdf(_) => "pdf",
            Block::Bookmark(_) => "bookmark",
            Block::Embed(_) => "embed",
            Block::LinkPreview(_) => "link_preview",
            Block::ChildPage(_) => "child_page",
            Block::ChildDatabase(_) => "child_database",
            Block::LinkToPage(_) => "link_to_page",
            Block::Table(_) => "table",
            Block::ColumnList(_) => "column_list",
            Block::Column(_) => "column",
            Block::Synced(_) => "synced_block",
            Block::Template(_) => "template",
            Block::Unsupported(b) => &b.block_type,
        }
    }
}
