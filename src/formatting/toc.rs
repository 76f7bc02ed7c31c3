// src/formatting/toc.rs
//! Table of contents generation from rendered Markdown.
//!
//! Works on the final text rather than the block tree, so it sees every
//! heading the report contains, including the ones the report adds itself.

use regex::Regex;

lazy_static::lazy_static! {
    static ref HEADING_LINE: Regex =
        Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading regex is valid");
    static ref NON_ANCHOR_CHARS: Regex =
        Regex::new(r"[^\w\s-]").expect("anchor filter regex is valid");
    static ref SEPARATOR_RUNS: Regex =
        Regex::new(r"[-\s]+").expect("separator regex is valid");
}

const TOC_HEADER: &str = "## Table of Contents\n";
const TOC_FOOTER: &str = "\n\n---\n\n";

/// One heading found in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub level: usize,
    pub title: String,
    pub anchor: String,
}

/// Finds every Markdown heading line, in order.
///
/// Lines inside code fences are scanned like any other line.
pub fn collect_headings(content: &str) -> Vec<TocEntry> {
    content
        .lines()
        .filter_map(|line| HEADING_LINE.captures(line))
        .map(|captures| {
            let title = captures[2].to_string();
            TocEntry {
                level: captures[1].len(),
                anchor: heading_anchor(&title),
                title,
            }
        })
        .collect()
}

/// Derives the link anchor for a heading title.
///
/// Distinct titles can map to the same anchor; no suffix is added.
pub fn heading_anchor(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = NON_ANCHOR_CHARS.replace_all(&lowered, "");
    SEPARATOR_RUNS
        .replace_all(&stripped, "-")
        .trim_matches('-')
        .to_string()
}

/// Builds the navigation block for `content`, separator included.
pub fn generate_table_of_contents(content: &str) -> String {
    let mut lines = vec![TOC_HEADER.to_string()];
    lines.extend(collect_headings(content).into_iter().map(|entry| {
        format!(
            "{}- [{}](#{})",
            "  ".repeat(entry.level - 1),
            entry.title,
            entry.anchor
        )
    }));
    lines.join("\n") + TOC_FOOTER
}
