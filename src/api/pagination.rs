// src/api/pagination.rs
//! Cursor pagination over Notion list endpoints.

use super::types::{PaginatedResponse, PaginationResult};
use crate::constants::NOTION_API_PAGE_SIZE;
use crate::error::AppError;

/// Fetches every page of a cursor-paginated endpoint, in order.
///
/// `fetch_fn` receives the page size and the cursor returned by the previous
/// page (`None` for the first request). Stops when the service reports no
/// more results or omits the next cursor.
pub async fn fetch_all_pages<T, F, Fut>(mut fetch_fn: F) -> Result<PaginationResult<T>, AppError>
where
    F: FnMut(u32, Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0u32;

    loop {
        let response = fetch_fn(NOTION_API_PAGE_SIZE, cursor).await?;

        let has_more = response.has_more;
        cursor = response.next_cursor;
        all_items.extend(response.results);
        pages_fetched += 1;

        if !has_more || cursor.is_none() {
            break;
        }
    }

    Ok(PaginationResult {
        total_fetched: all_items.len(),
        items: all_items,
        pages_fetched,
    })
}
