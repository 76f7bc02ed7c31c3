// src/lib.rs
//! notion2report library — renders a Notion project page, its linked notes and
//! its tasks into one Markdown report with a table of contents.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration** — `CommandLineInput`, `PipelineConfig`, `ReportSettings`
//! - **Domain model** — `Page`, `Block` and its payload types
//! - **Domain types** — `NotionId`, `PageId`, `BlockId`, `ApiKey`, rich text values
//! - **API client** — `NotionRepository`, `NotionHttpClient`, parsers
//! - **Formatting** — `render_blocks`, `TreeWalker`, `ReportAssembler`, TOC helpers
//! - **Output** — delivery plans and report paths

#[cfg(feature = "bench")]
pub mod api;
#[cfg(not(feature = "bench"))]
mod api;

mod config;
mod constants;
mod error;

#[cfg(feature = "bench")]
pub mod formatting;
#[cfg(not(feature = "bench"))]
mod formatting;

#[cfg(feature = "bench")]
pub mod model;
#[cfg(not(feature = "bench"))]
mod model;

mod output;
mod pipeline;

#[cfg(feature = "bench")]
pub mod types;
#[cfg(not(feature = "bench"))]
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, PipelineConfig};
pub use crate::constants::API_KEY_ENV_VARS;

// --- Domain Model ---
pub use crate::model::{
    Block, BlockCommon, Page, PageTitle, PropertyTypeValue, PropertyValue, UNTITLED,
};

// --- Block Types ---
pub use crate::model::blocks::{
    BookmarkBlock, CalloutBlock, CodeBlock, EquationBlock, FileObject, Icon, LinkToPageBlock,
    MarkerBlock, MediaBlock, TableBlock, TextBlock, TitledBlock, ToDoBlock,
    UnsupportedBlock, UrlBlock,
};

// --- Domain Types ---
pub use crate::types::{
    Annotations, ApiKey, BlockId, DateValue, EquationData, FormulaResult, Link, NotionId, PageId,
    PropertyName, RichTextItem, RichTextType, SelectOption, User,
};

// --- API Client ---
pub use crate::api::{
    client::ApiResponse,
    parser::{parse_api_response, parse_block_value, parse_blocks_pagination, parse_page_response},
    NotionHttpClient, NotionRepository, PaginatedResponse,
};

// --- Formatting ---
pub use crate::formatting::{
    collect_headings, compose_task_summary, generate_table_of_contents, heading_anchor,
    render_block, render_blocks, rich_text_to_markdown, AssembledReport, RenderConfig,
    ReportAssembler, ReportSettings, TaskField, TaskProperties, TaskPropertyNames, TocEntry,
    TreeWalker,
};

// --- Output ---
pub use crate::output::{
    deliver, file_url, report_path, slugify, DeliveryTarget, OutputPlan, OutputReport,
};

// --- Pipeline Traits ---
pub use crate::pipeline::{
    plan_delivery, LocationPublisher, PipelineOutcome, ProjectReportPipeline, ReportComposer,
    ReportDelivery,
};
