// src/output/paths.rs
//! Pure functions for report paths and locations.

use crate::error::AppError;
use crate::types::PageId;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use url::Url;

const REPORTS_DIR: &str = "reports";
const FALLBACK_SLUG: &str = "untitled";

/// Lower-cases `title` and collapses every run of non-alphanumeric
/// characters into a single `-`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Where a report is saved under `output_dir`:
/// `reports/{first four id chars}/project-{slug}-{YYYYmmdd_HHMM}.md`.
pub fn report_path(
    output_dir: &Path,
    page_id: &PageId,
    title: &str,
    generated_at: &NaiveDateTime,
) -> PathBuf {
    let shard: String = page_id.as_str().chars().take(4).collect();
    output_dir.join(REPORTS_DIR).join(shard).join(format!(
        "project-{}-{}.md",
        slugify(title),
        generated_at.format("%Y%m%d_%H%M")
    ))
}

/// The `file://` URL of `path`, resolved against the working directory.
pub fn file_url(path: &Path) -> Result<Url, AppError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    Url::from_file_path(&absolute).map_err(|()| AppError::InternalError {
        message: format!("Cannot express {} as a file URL", absolute.display()),
        source: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Project Alpha"), "project-alpha");
        assert_eq!(slugify("  Q3 / Launch -- Plan!  "), "q3-launch-plan");
        assert_eq!(slugify("Ünïcode Straße"), "ünïcode-straße");
        assert_eq!(slugify("!!!"), "untitled");
    }

    #[test]
    fn test_report_path_layout() {
        let id = PageId::parse("abcd1234abcd1234abcd1234abcd1234").unwrap();
        let at = NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(9, 5, 42)
            .unwrap();

        let path = report_path(Path::new("out"), &id, "Project Alpha", &at);

        assert_eq!(
            path,
            Path::new("out/reports/abcd/project-project-alpha-20240517_0905.md")
        );
    }

    #[test]
    fn test_file_url_is_absolute() {
        let url = file_url(Path::new("out/report.md")).unwrap();
        assert_eq!(url.scheme(), "file");
        assert!(url.path().ends_with("/out/report.md"));
    }
}
