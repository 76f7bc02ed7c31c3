// src/api/parser.rs
//! Response parsing using notion-client's serde model.
//!
//! Page properties and block children are decoded one entry at a time, so an
//! unfamiliar property type degrades to [`PropertyTypeValue::Other`] and an
//! unfamiliar block kind to [`Block::Unsupported`] instead of failing the
//! whole record.

use super::client::ApiResponse;
use super::notion_client_adapter;
use super::responses::{
    NotionBlock, NotionError, NotionPage, NotionPageProperty, NotionRichText,
    RetrieveBlockChildrenResponse,
};
use super::types::PaginatedResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::{Block, Page, PropertyTypeValue, PropertyValue};
use crate::types::PropertyName;
use reqwest::StatusCode;
use serde_json::Value;

/// Parse any Notion API response, mapping error statuses to [`AppError`].
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success_body(&result.data, &result.url)
    } else {
        parse_error_body(&result.data, result.status, &result.url)
    }
}

fn parse_success_body<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::Deserialization {
            source: e,
            body: body_preview(body),
        }
    })
}

fn parse_error_body<T>(body: &str, status: StatusCode, url: &str) -> Result<T, AppError> {
    if let Ok(notion_error) = serde_json::from_str::<NotionError>(body) {
        return Err(AppError::NotionService {
            code: NotionErrorCode::from_api_response(&notion_error.code),
            message: notion_error.message,
            status,
        });
    }

    Err(AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        status,
    })
}

fn body_preview(body: &str) -> String {
    match body.char_indices().nth(ERROR_BODY_PREVIEW_LENGTH) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// Parse a page record.
///
/// The page envelope goes through notion-client with its properties held
/// back; each property is then decoded on its own.
pub fn parse_page_response(result: ApiResponse<String>) -> Result<Page, AppError> {
    let mut value: Value = parse_api_response(result)?;

    let raw_properties = match value.get_mut("properties").map(Value::take) {
        Some(Value::Object(map)) => map,
        _ => serde_json::Map::new(),
    };
    if let Some(object) = value.as_object_mut() {
        object.insert("properties".to_string(), Value::Object(serde_json::Map::new()));
    }

    let notion_page: NotionPage = serde_json::from_value(value)?;
    let properties = raw_properties
        .into_iter()
        .map(|(name, raw)| {
            let property = parse_property_value(&name, raw);
            (PropertyName::new(name.clone()), PropertyValue::new(name, property))
        })
        .collect::<Vec<_>>();

    notion_client_adapter::convert_page(notion_page, properties)
}

fn parse_property_value(name: &str, raw: Value) -> PropertyTypeValue {
    let property_type = raw
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    match serde_json::from_value::<NotionPageProperty>(raw) {
        Ok(property) => notion_client_adapter::convert_page_property(property),
        Err(e) => {
            log::debug!(
                "notion-client could not decode property '{}' of type '{}': {}",
                name,
                property_type,
                e
            );
            PropertyTypeValue::Other { property_type }
        }
    }
}

/// Parse one page of block children.
pub fn parse_blocks_pagination(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<Block>, AppError> {
    let response: RetrieveBlockChildrenResponse = parse_api_response(result)?;

    let blocks = response
        .results
        .into_iter()
        .map(parse_block_value)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PaginatedResponse {
        object: response.object,
        results: blocks,
        next_cursor: response.next_cursor,
        has_more: response.has_more,
    })
}

/// Decode a single raw block object.
///
/// The raw `type` tag is kept so unmodelled kinds can still be named in
/// the rendered placeholder.
pub fn parse_block_value(value: Value) -> Result<Block, AppError> {
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    let id = value
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AppError::MalformedResponse(format!("Block of type '{}' has no ID", kind)))?;
    let has_children = value
        .get("has_children")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let caption = raw_caption(&value, &kind);

    match serde_json::from_value::<NotionBlock>(value) {
        Ok(notion_block) => notion_client_adapter::convert_block(notion_block, &kind, caption),
        Err(e) => {
            log::debug!(
                "notion-client could not decode block {} of type '{}': {}",
                id,
                kind,
                e
            );
            notion_client_adapter::unsupported_block(&id, &kind, has_children)
        }
    }
}

/// The caption spans under the block's payload, skipping any that fail to decode.
///
/// Image and video payloads in notion-client drop their caption, so it is
/// read from the raw object instead.
fn raw_caption(value: &Value, kind: &str) -> Vec<NotionRichText> {
    value
        .get(kind)
        .and_then(|payload| payload.get("caption"))
        .and_then(Value::as_array)
        .map(|spans| {
            spans
                .iter()
                .filter_map(|span| serde_json::from_value(span.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: StatusCode, body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status,
            url: "https://api.notion.com/v1/test".to_string(),
        }
    }

    #[test]
    fn test_error_body_maps_to_typed_code() {
        let error_json = r#"{
            "object": "error",
            "status": 404,
            "code": "object_not_found",
            "message": "Could not find page with ID: abc123",
            "request_id": "req_123"
        }"#;

        let result = parse_page_response(response(StatusCode::NOT_FOUND, error_json));

        match result {
            Err(AppError::NotionService { code, message, .. }) => {
                assert_eq!(code, NotionErrorCode::ObjectNotFound);
                assert!(message.contains("abc123"));
            }
            other => panic!("Expected NotionService error, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_error_falls_back_to_status() {
        let result = parse_page_response(response(StatusCode::BAD_GATEWAY, "<html>oops</html>"));

        match result {
            Err(AppError::NotionService { code, .. }) => {
                assert_eq!(code, NotionErrorCode::HttpStatus(502));
            }
            other => panic!("Expected NotionService error, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialization_failure_keeps_short_preview() {
        let body = "x".repeat(800);
        let result = parse_page_response(response(StatusCode::OK, &body));

        match result {
            Err(AppError::Deserialization { body, .. }) => {
                assert_eq!(body.len(), ERROR_BODY_PREVIEW_LENGTH + 3);
                assert!(body.ends_with("..."));
            }
            other => panic!("Expected Deserialization error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_block_kind_degrades_to_unsupported() {
        let value = serde_json::json!({
            "object": "block",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "type": "meeting_notes",
            "has_children": true,
            "meeting_notes": {}
        });

        let block = parse_block_value(value).unwrap();

        assert_eq!(block.block_type(), "meeting_notes");
        assert!(block.has_children());
        assert!(matches!(block, Block::Unsupported(_)));
    }

    fn page_body(properties: Value) -> String {
        serde_json::json!({
            "object": "page",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "created_time": "2024-01-01T00:00:00.000Z",
            "last_edited_time": "2024-01-01T00:00:00.000Z",
            "created_by": { "object": "user", "id": "user-id" },
            "last_edited_by": { "object": "user", "id": "user-id" },
            "parent": { "type": "database_id", "database_id": "a1b2c3d4-e5f6-7890-abcd-ef1234567890" },
            "archived": false,
            "url": "https://www.notion.so/Apollo-598337872cf94fdf8782e53db20768a5",
            "properties": properties
        })
        .to_string()
    }

    fn title_json(text: &str) -> Value {
        serde_json::json!({
            "id": "title",
            "type": "title",
            "title": [{
                "type": "text",
                "text": { "content": text, "link": null },
                "annotations": {
                    "bold": false, "italic": false, "strikethrough": false,
                    "underline": false, "code": false, "color": "default"
                },
                "plain_text": text,
                "href": null
            }]
        })
    }

    #[test]
    fn test_unknown_property_type_degrades_to_other() {
        let body = page_body(serde_json::json!({
            "Name": title_json("Apollo"),
            "Location": { "id": "loc", "type": "place", "place": null }
        }));

        let page = parse_page_response(response(StatusCode::OK, &body)).unwrap();

        assert_eq!(page.title().as_str(), "Apollo");
        assert_eq!(
            page.property("Location").map(|p| &p.type_specific_value),
            Some(&PropertyTypeValue::Other {
                property_type: "place".to_string()
            })
        );
    }

    #[test]
    fn test_malformed_title_falls_back_to_untitled() {
        let body = page_body(serde_json::json!({
            "Name": { "id": "title", "type": "title", "title": "not a list" }
        }));

        let page = parse_page_response(response(StatusCode::OK, &body)).unwrap();

        assert_eq!(page.title().as_str(), crate::model::UNTITLED);
    }

    #[test]
    fn test_image_caption_is_kept() {
        let value = serde_json::json!({
            "object": "block",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "parent": { "type": "page_id", "page_id": "216cd412-8533-8087-a989-cf37889137c3" },
            "created_time": "2024-01-01T00:00:00.000Z",
            "last_edited_time": "2024-01-01T00:00:00.000Z",
            "created_by": { "object": "user", "id": "user-id" },
            "last_edited_by": { "object": "user", "id": "user-id" },
            "has_children": false,
            "archived": false,
            "type": "image",
            "image": {
                "caption": [{
                    "type": "text",
                    "text": { "content": "Diagram", "link": null },
                    "annotations": {
                        "bold": false, "italic": false, "strikethrough": false,
                        "underline": false, "code": false, "color": "default"
                    },
                    "plain_text": "Diagram",
                    "href": null
                }],
                "type": "external",
                "external": { "url": "https://example.com/a.png" }
            }
        });

        let block = parse_block_value(value).unwrap();

        match block {
            Block::Image(media) => {
                assert_eq!(crate::types::concat_plain_text(&media.caption), "Diagram");
                assert_eq!(media.source.url(), "https://example.com/a.png");
            }
            other => panic!("Expected image block, got {:?}", other),
        }
    }

    #[test]
    fn test_block_without_id_is_malformed() {
        let value = serde_json::json!({ "object": "block", "type": "divider", "divider": {} });
        assert!(matches!(
            parse_block_value(value),
            Err(AppError::MalformedResponse(_))
        ));
    }
}
