// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! Planning (paths, delivery targets) is pure; [`deliver`] performs the I/O.

mod paths;
mod types;
mod writer;

pub use paths::{file_url, report_path, slugify};
pub use types::{DeliveryTarget, OutputPlan, OutputReport};
pub use writer::deliver;
