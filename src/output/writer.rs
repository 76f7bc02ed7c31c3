// src/output/writer.rs
//! Executes output operations by performing actual I/O.
//!
//! This module is the only place where report files are written.

use super::types::*;
use crate::error::AppError;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// Delivers the output plan, performing all I/O operations.
///
/// A failing operation is recorded in the report and the remaining
/// operations still run.
pub fn deliver(plan: OutputPlan) -> OutputReport {
    let mut report = OutputReport::new();
    let start_time = Instant::now();

    log::info!(
        "Executing output plan with {} operations",
        plan.operations.len()
    );

    for operation in plan.operations {
        let op_start = Instant::now();
        match execute_operation(&operation) {
            Ok(bytes_written) => {
                let duration_ms = op_start.elapsed().as_millis() as u64;
                report = report.with_completed(CompletedOperation {
                    operation,
                    bytes_written,
                    duration_ms,
                });
            }
            Err(e) => {
                log::error!("Operation failed: {}", e);
                report = report.with_failed(FailedOperation {
                    operation,
                    error: e.to_string(),
                });
            }
        }
    }

    report.stats.total_duration_ms = start_time.elapsed().as_millis() as u64;

    log::info!(
        "Output plan execution complete: {} succeeded, {} failed in {}ms",
        report.stats.operations_completed,
        report.stats.operations_failed,
        report.stats.total_duration_ms
    );

    report
}

fn execute_operation(operation: &DeliveryTarget) -> Result<usize, AppError> {
    match operation {
        DeliveryTarget::WriteFile { path, content } => write_file(path, content),
        DeliveryTarget::PrintToStdout { content } => {
            print_to_stdout(content)?;
            Ok(content.len())
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<usize, AppError> {
    log::debug!("Writing {} bytes to {}", content.len(), path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;

    log::info!("Wrote file: {}", path.display());
    Ok(content.len())
}

fn print_to_stdout(content: &str) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "notion2report-writer-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_write_file_creates_parents() {
        let dir = scratch_dir("parents");
        let path = dir.join("reports").join("abcd").join("project-x.md");

        let report = deliver(OutputPlan::new().with_operation(DeliveryTarget::WriteFile {
            path: path.clone(),
            content: "# X\n".to_string(),
        }));

        assert!(report.is_success());
        assert_eq!(report.stats.bytes_written, 4);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# X\n");
        assert_eq!(report.written_files().collect::<Vec<_>>(), vec![path.as_path()]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_failure_is_recorded_not_raised() {
        let dir = scratch_dir("blocked");
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("not-a-dir");
        fs::write(&blocker, "file").unwrap();

        let report = deliver(OutputPlan::new().with_operation(DeliveryTarget::WriteFile {
            path: blocker.join("report.md"),
            content: "text".to_string(),
        }));

        assert!(!report.is_success());
        assert_eq!(report.stats.operations_failed, 1);
        assert!(matches!(
            report.into_result(),
            Err(AppError::DeliveryFailed { failures }) if failures.len() == 1
        ));

        fs::remove_dir_all(&dir).unwrap();
    }
}
