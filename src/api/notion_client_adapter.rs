// src/api/notion_client_adapter.rs
//! Adapter layer for converting notion-client types to our domain model.
//!
//! Conversion is lenient: values the report never reads are collapsed,
//! and malformed optional data is defaulted rather than rejected.

use crate::error::AppError;
use crate::model::blocks::*;
use crate::model::common::BlockCommon;
use crate::model::{Block, Page, PropertyTypeValue, PropertyValue};
use crate::types::{
    Annotations, BlockId, DateValue, EquationData, FormulaResult, Link, NotionId, PageId,
    PropertyName, RichTextItem, RichTextType, SelectOption, User,
};
use notion_client::objects::block::BlockType;

/// Convert a notion-client Page envelope, with properties decoded separately,
/// to our domain Page.
pub fn convert_page(
    notion_page: notion_client::objects::page::Page,
    properties: Vec<(PropertyName, PropertyValue)>,
) -> Result<Page, AppError> {
    let id = PageId::parse(&notion_page.id)?;
    Ok(Page::new(id, notion_page.url, properties))
}

/// Convert notion-client Block to our domain Block.
///
/// `kind` is the raw `type` tag from the response, used to label
/// kinds this crate does not model. `media_caption` is the caption read
/// from the raw payload, used for images and videos.
pub fn convert_block(
    notion_block: notion_client::objects::block::Block,
    kind: &str,
    media_caption: Vec<notion_client::objects::rich_text::RichText>,
) -> Result<Block, AppError> {
    let common = convert_block_common(&notion_block)?;

    let block = match notion_block.block_type {
        BlockType::Paragraph { paragraph } => Block::Paragraph(TextBlock {
            common,
            rich_text: convert_rich_text_array(paragraph.rich_text),
        }),

        BlockType::Heading1 { heading_1 } => Block::Heading1(TextBlock {
            common,
            rich_text: convert_rich_text_array(heading_1.rich_text),
        }),

        BlockType::Heading2 { heading_2 } => Block::Heading2(TextBlock {
            common,
            rich_text: convert_rich_text_array(heading_2.rich_text),
        }),

        BlockType::Heading3 { heading_3 } => Block::Heading3(TextBlock {
            common,
            rich_text: convert_rich_text_array(heading_3.rich_text),
        }),

        BlockType::BulletedListItem { bulleted_list_item } => Block::BulletedListItem(TextBlock {
            common,
            rich_text: convert_rich_text_array(bulleted_list_item.rich_text),
        }),

        BlockType::NumberedListItem { numbered_list_item } => Block::NumberedListItem(TextBlock {
            common,
            rich_text: convert_rich_text_array(numbered_list_item.rich_text),
        }),

        BlockType::ToDo { to_do } => Block::ToDo(ToDoBlock {
            common,
            rich_text: convert_rich_text_array(to_do.rich_text),
            checked: to_do.checked.unwrap_or(false),
        }),

        BlockType::Toggle { toggle } => Block::Toggle(TextBlock {
            common,
            rich_text: convert_rich_text_array(toggle.rich_text),
        }),

        BlockType::Quote { quote } => Block::Quote(TextBlock {
            common,
            rich_text: convert_rich_text_array(quote.rich_text),
        }),

        BlockType::Callout { callout } => Block::Callout(CalloutBlock {
            common,
            icon: callout.icon.map(convert_icon),
            rich_text: convert_rich_text_array(callout.rich_text),
        }),

        BlockType::Code { code } => Block::Code(CodeBlock {
            common,
            language: code_language_tag(&code.language),
            rich_text: convert_rich_text_array(code.rich_text),
        }),

        BlockType::Equation { equation } => Block::Equation(EquationBlock {
            common,
            expression: equation.expression,
        }),

        BlockType::Divider { .. } => Block::Divider(MarkerBlock { common }),

        BlockType::Breadcrumb { .. } => Block::Breadcrumb(MarkerBlock { common }),

        BlockType::TableOfContents { .. } => Block::TableOfContents(MarkerBlock { common }),

        BlockType::ColumnList { .. } => Block::ColumnList(MarkerBlock { common }),

        BlockType::Column { .. } => Block::Column(MarkerBlock { common }),

        BlockType::Image { image } => Block::Image(MediaBlock {
            common,
            source: convert_file_object(image.file_type),
            caption: convert_rich_text_array(media_caption),
        }),

        BlockType::Video { video } => Block::Video(MediaBlock {
            common,
            source: convert_file_object(video.file_type),
            caption: convert_rich_text_array(media_caption),
        }),

        BlockType::File { file } => Block::File(MediaBlock {
            common,
            source: convert_file_object(file.file_type),
            caption: convert_rich_text_array(file.caption),
        }),

        BlockType::Pdf { pdf } => Block::Pdf(MediaBlock {
            common,
            source: convert_file_object(pdf.file_type),
            caption: convert_rich_text_array(pdf.caption),
        }),

        BlockType::Bookmark { bookmark } => Block::Bookmark(BookmarkBlock {
            common,
            url: bookmark.url,
            caption: convert_rich_text_array(bookmark.caption),
        }),

        BlockType::Embed { embed } => Block::Embed(UrlBlock {
            common,
            url: embed.url,
        }),

        BlockType::LinkPreview { link_preview } => Block::LinkPreview(UrlBlock {
            common,
            url: link_preview.url,
        }),

        BlockType::ChildPage { child_page } => Block::ChildPage(TitledBlock {
            common,
            title: child_page.title,
        }),

        BlockType::ChildDatabase { child_database } => Block::ChildDatabase(TitledBlock {
            common,
            title: child_database.title,
        }),

        BlockType::LinkToPage { link_to_page } => {
            use notion_client::objects::parent::Parent;

            let target = match link_to_page {
                Parent::PageId { page_id } => NotionId::parse(&page_id).ok(),
                Parent::DatabaseId { database_id } => NotionId::parse(&database_id).ok(),
                _ => None,
            };
            Block::LinkToPage(LinkToPageBlock { common, target })
        }

        BlockType::Table { table } => Block::Table(TableBlock {
            common,
            table_width: table.table_width as usize,
        }),

        BlockType::SyncedBlock { .. } => Block::Synced(MarkerBlock { common }),

        BlockType::Template { template } => Block::Template(TextBlock {
            common,
            rich_text: convert_rich_text_array(template.rich_text),
        }),

        _ => Block::Unsupported(UnsupportedBlock {
            common,
            block_type: kind.to_string(),
        }),
    };

    Ok(block)
}

/// Builds the placeholder for a block the notion-client could not decode.
pub fn unsupported_block(id: &str, kind: &str, has_children: bool) -> Result<Block, AppError> {
    let mut common = BlockCommon::new(BlockId::parse(id)?);
    common.has_children = has_children;
    Ok(Block::Unsupported(UnsupportedBlock {
        common,
        block_type: kind.to_string(),
    }))
}

fn convert_block_common(
    notion_block: &notion_client::objects::block::Block,
) -> Result<BlockCommon, AppError> {
    let raw_id = notion_block
        .id
        .as_deref()
        .ok_or_else(|| AppError::MalformedResponse("Block missing required ID field".to_string()))?;

    Ok(BlockCommon {
        id: BlockId::parse(raw_id)?,
        has_children: notion_block.has_children.unwrap_or(false),
    })
}

/// The API's language tag for a code block, e.g. `rust` or `plain text`.
fn code_language_tag(language: &notion_client::objects::block::Language) -> String {
    serde_json::to_value(language)
        .ok()
        .and_then(|value| value.as_str().map(str::to_string))
        .unwrap_or_else(|| format!("{:?}", language).to_lowercase())
}

fn convert_rich_text_array(
    rich_texts: Vec<notion_client::objects::rich_text::RichText>,
) -> Vec<RichTextItem> {
    rich_texts.into_iter().filter_map(convert_rich_text).collect()
}

/// Convert a single rich text item; unknown span kinds are dropped.
fn convert_rich_text(rich_text: notion_client::objects::rich_text::RichText) -> Option<RichTextItem> {
    use notion_client::objects::rich_text::RichText as NcRichText;

    match rich_text {
        NcRichText::Text {
            text,
            annotations,
            plain_text,
            href,
        } => Some(RichTextItem {
            plain_text: plain_text.unwrap_or_else(|| text.content.clone()),
            text_type: RichTextType::Text {
                content: text.content,
                link: text.link.map(|link| Link { url: link.url }),
            },
            annotations: convert_annotations(annotations.unwrap_or_default()),
            href,
        }),

        NcRichText::Mention {
            annotations,
            plain_text,
            href,
            ..
        } => Some(RichTextItem {
            text_type: RichTextType::Mention,
            annotations: convert_annotations(annotations),
            plain_text,
            href,
        }),

        NcRichText::Equation {
            equation,
            annotations,
            plain_text,
            href,
        } => Some(RichTextItem {
            text_type: RichTextType::Equation(EquationData {
                expression: equation.expression,
            }),
            annotations: convert_annotations(annotations),
            plain_text,
            href,
        }),

        _ => {
            log::debug!("Skipping unsupported rich text span");
            None
        }
    }
}

fn convert_annotations(annotations: notion_client::objects::rich_text::Annotations) -> Annotations {
    Annotations {
        bold: annotations.bold,
        italic: annotations.italic,
        strikethrough: annotations.strikethrough,
        code: annotations.code,
    }
}

fn convert_file_object(file: notion_client::objects::file::File) -> FileObject {
    use notion_client::objects::file::File as NcFile;

    match file {
        NcFile::External { external } => FileObject::External { url: external.url },
        NcFile::File { file } => FileObject::Hosted { url: file.url },
    }
}

fn convert_icon(icon: notion_client::objects::block::Icon) -> Icon {
    use notion_client::objects::block::Icon as NcIcon;

    match icon {
        NcIcon::Emoji(notion_client::objects::emoji::Emoji::Emoji { emoji }) => Icon::Emoji(emoji),
        NcIcon::File(file) => Icon::Image {
            url: convert_file_object(file).url().to_string(),
        },
    }
}

fn convert_user(user: notion_client::objects::user::User) -> User {
    User {
        id: user.id,
        name: user.name,
        email: None,
    }
}

// --- Shared property conversion helpers ---

fn resolve_date(dod: notion_client::objects::page::DateOrDateTime) -> chrono::NaiveDate {
    match dod {
        notion_client::objects::page::DateOrDateTime::Date(d) => d,
        notion_client::objects::page::DateOrDateTime::DateTime(dt) => dt.date_naive(),
    }
}

/// A date without a start is treated as no date at all.
fn convert_notion_date(d: notion_client::objects::page::DatePropertyValue) -> Option<DateValue> {
    let start = d.start.map(resolve_date)?;
    Some(DateValue {
        start,
        end: d.end.map(resolve_date),
        time_zone: d.time_zone,
    })
}

fn convert_select_option(s: notion_client::objects::page::SelectPropertyValue) -> SelectOption {
    SelectOption {
        id: s.id,
        name: s.name.unwrap_or_default(),
    }
}

fn convert_formula_value(
    formula: notion_client::objects::page::FormulaPropertyValue,
) -> Option<FormulaResult> {
    use notion_client::objects::page::FormulaPropertyValue;

    match formula {
        FormulaPropertyValue::String { string } => string.map(FormulaResult::String),
        FormulaPropertyValue::Number { number } => number
            .and_then(|n| n.as_f64())
            .map(FormulaResult::Number),
        FormulaPropertyValue::Boolean { boolean } => Some(FormulaResult::Boolean(boolean)),
        FormulaPropertyValue::Date { date } => {
            date.and_then(convert_notion_date).map(FormulaResult::Date)
        }
    }
}

// --- Main property dispatcher ---

/// Convert one decoded page property; types the report never reads collapse
/// to [`PropertyTypeValue::Other`].
pub fn convert_page_property(
    property: notion_client::objects::page::PageProperty,
) -> PropertyTypeValue {
    use notion_client::objects::page::PageProperty;

    let other = |property_type: &str| PropertyTypeValue::Other {
        property_type: property_type.to_string(),
    };

    match property {
        PageProperty::Title { title, .. } => PropertyTypeValue::Title {
            title: convert_rich_text_array(title),
        },
        PageProperty::RichText { rich_text, .. } => PropertyTypeValue::RichText {
            rich_text: convert_rich_text_array(rich_text),
        },
        PageProperty::Number { number, .. } => PropertyTypeValue::Number {
            number: number.and_then(|n| n.as_f64()),
        },
        PageProperty::Checkbox { checkbox, .. } => PropertyTypeValue::Checkbox { checkbox },
        PageProperty::Url { url, .. } => PropertyTypeValue::Url { url },
        PageProperty::Email { email, .. } => PropertyTypeValue::Email { email },
        PageProperty::PhoneNumber { phone_number, .. } => {
            PropertyTypeValue::PhoneNumber { phone_number }
        }
        PageProperty::Select { select, .. } => PropertyTypeValue::Select {
            select: select.map(convert_select_option),
        },
        PageProperty::MultiSelect { multi_select, .. } => PropertyTypeValue::MultiSelect {
            multi_select: multi_select
                .into_iter()
                .map(convert_select_option)
                .collect(),
        },
        PageProperty::Status { status, .. } => PropertyTypeValue::Status {
            status: status.map(convert_select_option),
        },
        PageProperty::Date { date, .. } => PropertyTypeValue::Date {
            date: date.and_then(convert_notion_date),
        },
        PageProperty::People { people, .. } => PropertyTypeValue::People {
            people: people.into_iter().map(convert_user).collect(),
        },
        PageProperty::Relation { relation, .. } => PropertyTypeValue::Relation {
            relation: relation
                .into_iter()
                .filter_map(|r| {
                    PageId::parse(&r.id)
                        .map_err(|e| {
                            log::warn!("Skipping relation with invalid ID '{}': {}", r.id, e)
                        })
                        .ok()
                })
                .collect(),
        },
        PageProperty::Formula { formula, .. } => PropertyTypeValue::Formula {
            formula: formula.and_then(convert_formula_value),
        },
        PageProperty::Files { .. } => other("files"),
        PageProperty::CreatedTime { .. } => other("created_time"),
        PageProperty::CreatedBy { .. } => other("created_by"),
        PageProperty::LastEditedTime { .. } => other("last_edited_time"),
        PageProperty::LastEditedBy { .. } => other("last_edited_by"),
        PageProperty::Rollup { .. } => other("rollup"),
        PageProperty::UniqueID { .. } => other("unique_id"),
        PageProperty::Verification { .. } => other("verification"),
        PageProperty::Button { .. } => other("button"),
    }
}
