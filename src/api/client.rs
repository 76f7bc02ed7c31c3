// src/api/client.rs
//! Thin HTTP client wrapper for the Notion API.
//!
//! Handles authentication and the request/response round trip; decoding
//! lives in [`super::parser`].

use crate::error::AppError;
use crate::model::{Block, Page};
use crate::types::{ApiKey, NotionId, PageId};
use reqwest::{header, Client, Response};
use serde::Serialize;

const NOTION_VERSION: &str = "2022-06-28";
const API_BASE_URL: &str = "https://api.notion.com/v1";

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self { client })
    }

    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to the specified endpoint (path without base URL).
    pub async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    /// Makes a GET request with query parameters.
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        query: &Q,
    ) -> Result<Response, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("GET {} (paginated)", url);
        Ok(self.client.get(url).query(query).send().await?)
    }

    /// Makes a PATCH request with JSON body to the specified endpoint.
    pub async fn patch<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("PATCH {}", url);
        Ok(self.client.patch(url).json(body).send().await?)
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn retrieve_page(&self, id: &NotionId) -> Result<Page, AppError> {
        let endpoint = format!("pages/{}", id.to_hyphenated());
        let response = self.get(&endpoint).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_page_response(result)
    }

    async fn retrieve_children(&self, parent: &NotionId) -> Result<Vec<Block>, AppError> {
        let endpoint = format!("blocks/{}/children", parent.to_hyphenated());
        let pagination_result = super::pagination::fetch_all_pages(|page_size, cursor| {
            let client = self.clone();
            let endpoint = endpoint.clone();
            async move {
                let mut query = vec![("page_size", page_size.to_string())];
                if let Some(cursor) = cursor {
                    query.push(("start_cursor", cursor));
                }
                let response = client.get_with_query(&endpoint, &query).await?;
                let result = extract_response_text(response).await?;
                super::parser::parse_blocks_pagination(result)
            }
        })
        .await?;

        log::debug!(
            "Fetched {} children of {} in {} page(s)",
            pagination_result.total_fetched,
            parent,
            pagination_result.pages_fetched
        );
        Ok(pagination_result.items)
    }

    async fn update_url_property(
        &self,
        page: &PageId,
        property: &str,
        url: &str,
    ) -> Result<(), AppError> {
        let endpoint = format!("pages/{}", page.as_notion_id().to_hyphenated());
        let body = serde_json::json!({
            "properties": {
                (property): { "url": url }
            }
        });
        let response = self.patch(&endpoint, &body).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_api_response::<serde_json::Value>(result)?;
        Ok(())
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text along with status and URL metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
