// src/api/mod.rs
//! Notion API interaction — the ability to retrieve content from a workspace.
//!
//! Rendering code depends on [`NotionRepository`] only; the HTTP client,
//! pagination and parsing stay behind it.

pub mod client;
pub mod notion_client_adapter;
mod pagination;
pub mod parser;
mod responses;
mod types;

use crate::error::AppError;
use crate::model::{Block, Page};
use crate::types::{NotionId, PageId};

/// The ability to retrieve content from a Notion workspace.
///
/// Business logic depends on this trait, never on HTTP details.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// Fetches a page record: title and properties, without content.
    async fn retrieve_page(&self, id: &NotionId) -> Result<Page, AppError>;

    /// Fetches every direct child of a page or block, in document order.
    async fn retrieve_children(&self, parent: &NotionId) -> Result<Vec<Block>, AppError>;

    /// Writes `url` into the URL-typed property `property` of `page`.
    async fn update_url_property(
        &self,
        page: &PageId,
        property: &str,
        url: &str,
    ) -> Result<(), AppError>;
}

pub use client::NotionHttpClient;
pub use types::PaginatedResponse;
