// tests/common/mod.rs
//! In-memory workspace used in place of the Notion API.

#![allow(dead_code)]

use async_trait::async_trait;
use notion2report::{
    AppError, Block, BlockCommon, BlockId, CalloutBlock, Icon, NotionErrorCode, NotionId,
    NotionRepository, Page, PageId, PropertyName, PropertyTypeValue, PropertyValue,
    RichTextItem, SelectOption, TextBlock, ToDoBlock,
};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// A 32-hex-digit ID derived from `n`, valid as any Notion ID.
pub fn hex_id(n: u32) -> String {
    format!("{:032x}", n)
}

pub fn page_id(n: u32) -> PageId {
    PageId::parse(&hex_id(n)).unwrap()
}

pub fn block_id(n: u32) -> BlockId {
    BlockId::parse(&hex_id(n)).unwrap()
}

pub fn notion_id(n: u32) -> NotionId {
    NotionId::parse(&hex_id(n)).unwrap()
}

fn common(n: u32, has_children: bool) -> BlockCommon {
    let common = BlockCommon::new(block_id(n));
    if has_children {
        common.with_children()
    } else {
        common
    }
}

fn text(n: u32, content: &str, has_children: bool) -> TextBlock {
    TextBlock {
        common: common(n, has_children),
        rich_text: if content.is_empty() {
            vec![]
        } else {
            vec![RichTextItem::plain_text(content)]
        },
    }
}

pub fn paragraph(n: u32, content: &str) -> Block {
    Block::Paragraph(text(n, content, false))
}

pub fn paragraph_with_children(n: u32, content: &str) -> Block {
    Block::Paragraph(text(n, content, true))
}

pub fn heading_1(n: u32, content: &str) -> Block {
    Block::Heading1(text(n, content, false))
}

pub fn heading_2(n: u32, content: &str) -> Block {
    Block::Heading2(text(n, content, false))
}

pub fn bullet(n: u32, content: &str, has_children: bool) -> Block {
    Block::BulletedListItem(text(n, content, has_children))
}

pub fn toggle(n: u32, content: &str) -> Block {
    Block::Toggle(text(n, content, true))
}

pub fn to_do(n: u32, content: &str, checked: bool) -> Block {
    Block::ToDo(ToDoBlock {
        common: common(n, false),
        rich_text: vec![RichTextItem::plain_text(content)],
        checked,
    })
}

pub fn callout(n: u32, emoji: &str, content: &str, has_children: bool) -> Block {
    Block::Callout(CalloutBlock {
        common: common(n, has_children),
        icon: Some(Icon::Emoji(emoji.to_string())),
        rich_text: vec![RichTextItem::plain_text(content)],
    })
}

pub fn title_property(title: &str) -> (PropertyName, PropertyValue) {
    (
        PropertyName::from("Name"),
        PropertyValue::new(
            "title",
            PropertyTypeValue::Title {
                title: vec![RichTextItem::plain_text(title)],
            },
        ),
    )
}

pub fn relation_property(name: &str, ids: &[u32]) -> (PropertyName, PropertyValue) {
    (
        PropertyName::from(name),
        PropertyValue::new(
            name,
            PropertyTypeValue::Relation {
                relation: ids.iter().map(|n| page_id(*n)).collect(),
            },
        ),
    )
}

pub fn status_property(name: &str, status: &str) -> (PropertyName, PropertyValue) {
    (
        PropertyName::from(name),
        PropertyValue::new(
            name,
            PropertyTypeValue::Status {
                status: Some(SelectOption::named(status)),
            },
        ),
    )
}

pub fn select_property(name: &str, option: &str) -> (PropertyName, PropertyValue) {
    (
        PropertyName::from(name),
        PropertyValue::new(
            name,
            PropertyTypeValue::Select {
                select: Some(SelectOption::named(option)),
            },
        ),
    )
}

pub fn page(n: u32, properties: Vec<(PropertyName, PropertyValue)>) -> Page {
    Page::new(
        page_id(n),
        format!("https://www.notion.so/{}", hex_id(n)),
        properties,
    )
}

/// A workspace held in memory, with failure injection and a record of writes.
#[derive(Default)]
pub struct FakeWorkspace {
    pages: HashMap<NotionId, Page>,
    children: HashMap<NotionId, Vec<Block>>,
    failing: HashSet<NotionId>,
    children_requests: Mutex<Vec<NotionId>>,
    url_updates: Mutex<Vec<(PageId, String, String)>>,
    reject_url_updates: bool,
}

impl FakeWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.pages.insert(page.id.as_notion_id().clone(), page);
        self
    }

    pub fn with_children(mut self, parent: u32, blocks: Vec<Block>) -> Self {
        self.children.insert(notion_id(parent), blocks);
        self
    }

    /// Every request for `id` (page or children) fails with a service error.
    pub fn failing(mut self, id: u32) -> Self {
        self.failing.insert(notion_id(id));
        self
    }

    pub fn rejecting_url_updates(mut self) -> Self {
        self.reject_url_updates = true;
        self
    }

    /// IDs whose children were requested, in request order.
    pub fn children_requests(&self) -> Vec<NotionId> {
        self.children_requests.lock().unwrap().clone()
    }

    pub fn url_updates(&self) -> Vec<(PageId, String, String)> {
        self.url_updates.lock().unwrap().clone()
    }

    fn service_error(id: &NotionId) -> AppError {
        AppError::NotionService {
            code: NotionErrorCode::InternalError,
            message: format!("simulated failure for {}", id),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn not_found(id: &NotionId) -> AppError {
        AppError::NotionService {
            code: NotionErrorCode::ObjectNotFound,
            message: format!("Could not find {}", id),
            status: reqwest::StatusCode::NOT_FOUND,
        }
    }
}

#[async_trait]
impl NotionRepository for FakeWorkspace {
    async fn retrieve_page(&self, id: &NotionId) -> Result<Page, AppError> {
        if self.failing.contains(id) {
            return Err(Self::service_error(id));
        }
        self.pages.get(id).cloned().ok_or_else(|| Self::not_found(id))
    }

    async fn retrieve_children(&self, parent: &NotionId) -> Result<Vec<Block>, AppError> {
        self.children_requests.lock().unwrap().push(parent.clone());
        if self.failing.contains(parent) {
            return Err(Self::service_error(parent));
        }
        Ok(self.children.get(parent).cloned().unwrap_or_default())
    }

    async fn update_url_property(
        &self,
        page: &PageId,
        property: &str,
        url: &str,
    ) -> Result<(), AppError> {
        if self.reject_url_updates {
            return Err(AppError::NotionService {
                code: NotionErrorCode::ValidationFailed,
                message: format!("{} is not a property that exists.", property),
                status: reqwest::StatusCode::BAD_REQUEST,
            });
        }
        self.url_updates.lock().unwrap().push((
            page.clone(),
            property.to_string(),
            url.to_string(),
        ));
        Ok(())
    }
}
