// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100. We use the maximum to minimize
/// round-trips while walking a content tree.
pub const NOTION_API_PAGE_SIZE: u32 = 100;

/// Environment variables consulted for the integration token, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["NOTION_API_KEY", "NOTION_API_TOKEN"];

// ---------------------------------------------------------------------------
// Report vocabulary
// ---------------------------------------------------------------------------

/// Relation property on the project page listing its notes.
pub const DEFAULT_NOTES_RELATION: &str = "Notes";

/// Relation property on the project page listing its tasks.
pub const DEFAULT_TASKS_RELATION: &str = "Tasks";

/// URL property that receives the saved report location.
pub const DEFAULT_URL_PROPERTY: &str = "Latest PDF URL";

/// Name stamped into the closing line of every report.
pub const REPORT_GENERATOR_NAME: &str = "notion2report";

// ---------------------------------------------------------------------------
// String capacity hints (performance, not correctness)
// ---------------------------------------------------------------------------

/// Estimated characters per block, used to pre-allocate output strings.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
