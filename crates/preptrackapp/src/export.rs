//! # Progress Export
//!
//! Two formats are supported:
//!
//! - **JSON**: a pretty-printed snapshot of everything: export timestamp, overall
//!   and per-category statistics, the raw completed ids and the full catalog.
//!   Suitable for backups and for feeding other tools.
//! - **Markdown**: a human-readable report. Every category appears in the
//!   "Progress by Category" section; only categories with at least one completed
//!   item appear under "Completed Items".
//!
//! Rendering is pure: callers pass the timestamp, so output is deterministic in tests.

use crate::error::{PrepError, Result};
use crate::model::{Category, CategoryProgress, ItemId, ProgressStats};
use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::{self, Write};
use std::str::FromStr;

pub const DEFAULT_EXPORT_TITLE: &str = "Coding Interview University Progress";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
const EXPORT_FILE_STEM: &str = "coding-interview-progress";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }

    /// File name used when the caller does not pick one.
    pub fn default_filename(&self) -> String {
        format!("{}.{}", EXPORT_FILE_STEM, self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            other => Err(PrepError::Api(format!(
                "Unknown export format: {} (expected json or markdown)",
                other
            ))),
        }
    }
}

/// Presentation settings for the Markdown report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub title: String,
    /// chrono strftime pattern for the export date line.
    pub date_format: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_EXPORT_TITLE.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Everything an export needs, borrowed from the tracker.
pub(crate) struct ExportInput<'a> {
    pub now: DateTime<Utc>,
    pub overall: ProgressStats,
    pub categories_progress: Vec<CategoryProgress>,
    pub completed: Vec<ItemId>,
    pub categories: &'a [Category],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    export_date: String,
    overall_progress: &'a ProgressStats,
    category_progress: &'a [CategoryProgress],
    completed_items: &'a [ItemId],
    categories: &'a [Category],
}

pub(crate) fn render_json(input: &ExportInput<'_>) -> Result<String> {
    let doc = JsonExport {
        export_date: input.now.to_rfc3339_opts(SecondsFormat::Millis, true),
        overall_progress: &input.overall,
        category_progress: &input.categories_progress,
        completed_items: &input.completed,
        categories: input.categories,
    };
    serde_json::to_string_pretty(&doc).map_err(PrepError::Serialization)
}

pub(crate) fn render_markdown(input: &ExportInput<'_>, options: &ExportOptions) -> String {
    let overall = &input.overall;
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", options.title));
    md.push_str(&format!(
        "**Export date**: {}\n",
        format_date(input.now, &options.date_format)
    ));
    md.push_str(&format!(
        "**Overall progress**: {}/{} ({}%)\n\n",
        overall.completed, overall.total, overall.percentage
    ));

    md.push_str("## Progress by Category\n\n");
    for cp in &input.categories_progress {
        md.push_str(&format!("### {}\n", cp.category_name));
        md.push_str(&format!(
            "- Progress: {}/{} ({}%)\n\n",
            cp.stats.completed, cp.stats.total, cp.stats.percentage
        ));
    }

    md.push_str("## Completed Items\n\n");
    for category in input.categories {
        let done: Vec<_> = category
            .items
            .iter()
            .filter(|item| input.completed.binary_search(&item.id).is_ok())
            .collect();
        if done.is_empty() {
            continue;
        }
        md.push_str(&format!("### {}\n", category.name));
        for item in done {
            md.push_str(&format!("- [x] {}\n", item.title));
        }
        md.push('\n');
    }

    md
}

/// Formats `now` in local time; an invalid pattern falls back to the default.
fn format_date(now: DateTime<Utc>, pattern: &str) -> String {
    let local = now.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(pattern)).is_err() {
        tracing::warn!(pattern, "Invalid date format, using default");
        out = local.format(DEFAULT_DATE_FORMAT).to_string();
    }
    out
}
