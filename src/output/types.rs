// src/output/types.rs
//! Type definitions for output operations.
//!
//! Planning produces an [`OutputPlan`]; executing it produces an
//! [`OutputReport`]. Nothing here performs I/O.

use crate::error::AppError;
use std::path::{Path, PathBuf};

/// Represents a complete output plan.
#[derive(Debug, Clone, Default)]
pub struct OutputPlan {
    /// List of operations to perform
    pub operations: Vec<DeliveryTarget>,
}

impl OutputPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an operation to the plan.
    pub fn with_operation(mut self, operation: DeliveryTarget) -> Self {
        self.operations.push(operation);
        self
    }
}

/// Represents a single output operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryTarget {
    /// Write content to a file, creating parent directories
    WriteFile { path: PathBuf, content: String },
    /// Print to stdout
    PrintToStdout { content: String },
}

impl DeliveryTarget {
    /// The file this operation writes, if any.
    pub fn file_path(&self) -> Option<&Path> {
        match self {
            DeliveryTarget::WriteFile { path, .. } => Some(path),
            DeliveryTarget::PrintToStdout { .. } => None,
        }
    }
}

/// Result of executing an output plan.
#[derive(Debug, Clone, Default)]
pub struct OutputReport {
    /// Successfully completed operations
    pub completed: Vec<CompletedOperation>,
    /// Failed operations with errors
    pub failed: Vec<FailedOperation>,
    /// Execution statistics
    pub stats: ExecutionStats,
}

impl OutputReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a completed operation to the report.
    pub fn with_completed(mut self, operation: CompletedOperation) -> Self {
        self.stats.operations_completed += 1;
        self.stats.bytes_written += operation.bytes_written;
        self.completed.push(operation);
        self
    }

    /// Adds a failed operation to the report.
    pub fn with_failed(mut self, operation: FailedOperation) -> Self {
        self.stats.operations_failed += 1;
        self.failed.push(operation);
        self
    }

    /// Checks if all operations succeeded.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Files that were written successfully, in plan order.
    pub fn written_files(&self) -> impl Iterator<Item = &Path> {
        self.completed
            .iter()
            .filter_map(|completed| completed.operation.file_path())
    }

    /// Turns any failed operation into a [`AppError::DeliveryFailed`].
    pub fn into_result(self) -> Result<Self, AppError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(AppError::DeliveryFailed {
                failures: self.failed.into_iter().map(|f| f.error).collect(),
            })
        }
    }
}

/// A successfully completed operation.
#[derive(Debug, Clone)]
pub struct CompletedOperation {
    pub operation: DeliveryTarget,
    pub bytes_written: usize,
    pub duration_ms: u64,
}

/// A failed operation with error information.
#[derive(Debug, Clone)]
pub struct FailedOperation {
    pub operation: DeliveryTarget,
    pub error: String,
}

/// Execution statistics.
#[derive(Debug, Clone, Default)]
pub struct ExecutionStats {
    pub operations_completed: usize,
    pub operations_failed: usize,
    pub bytes_written: usize,
    pub total_duration_ms: u64,
}
