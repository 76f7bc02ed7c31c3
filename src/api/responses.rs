// src/api/responses.rs
//! API response types backed by the notion-client object model.

use super::types::PaginatedResponse;

pub use notion_client::objects::{
    block::Block as NotionBlock, error::Error as NotionError, page::Page as NotionPage,
    page::PageProperty as NotionPageProperty, rich_text::RichText as NotionRichText,
};

/// Block children response.
///
/// Results stay as raw JSON so a block kind notion-client cannot decode
/// does not fail the whole page of results.
pub type RetrieveBlockChildrenResponse = PaginatedResponse<serde_json::Value>;
