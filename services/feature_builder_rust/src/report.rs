//! JSON run report for downstream auditing of feature builds.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Per-file derivation accounting.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    /// Plays read from the file before any filtering
    pub plays: usize,
    pub rows_kept: usize,
    pub rows_dropped: usize,
}

/// Whole-run accounting, written next to the feature table.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub generated_at: DateTime<Utc>,
    pub variant: &'static str,
    pub season: Option<u16>,
    pub files: Vec<FileReport>,
    pub rows_kept: usize,
    pub rows_dropped: usize,
}

impl RunReport {
    pub fn new(variant: &'static str, season: Option<u16>, files: Vec<FileReport>) -> Self {
        let rows_kept = files.iter().map(|f| f.rows_kept).sum();
        let rows_dropped = files.iter().map(|f| f.rows_dropped).sum();
        Self {
            generated_at: Utc::now(),
            variant,
            season,
            files,
            rows_kept,
            rows_dropped,
        }
    }
}
