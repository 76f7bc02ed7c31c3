// src/formatting/mod.rs
//! Renders Notion content into Markdown and assembles project reports.

pub mod block_renderer;
pub mod properties;
pub mod report;
mod rich_text;
pub mod toc;
pub mod tree_walker;

pub use block_renderer::{render_block, render_blocks, RenderConfig};
pub use properties::{TaskField, TaskProperties, TaskPropertyNames};
pub use report::{compose_task_summary, AssembledReport, ReportAssembler, ReportSettings};
pub use rich_text::rich_text_to_markdown;
pub use toc::{collect_headings, generate_table_of_contents, heading_anchor, TocEntry};
pub use tree_walker::TreeWalker;
