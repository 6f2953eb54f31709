//! High-level pipeline: load, normalize, sort, write.
//!
//! The whole cleaned dataset is held in memory between stages; at
//! dictionary scale this is a few tens of megabytes at worst, and sorting
//! needs the full set anyway.
//!
//! # Example
//!
//! ```rust,ignore
//! use sozluk::clean_dictionary;
//! use std::path::Path;
//!
//! let summary = clean_dictionary(
//!     Path::new("gts.jsonl"),
//!     Path::new("sozluk.json"),
//!     Path::new("sozluk.csv"),
//! )?;
//! println!("{} entries written", summary.entry_count);
//! ```

use serde::Serialize;
use std::path::Path;

use crate::collate::sort_entries;
use crate::error::PipelineResult;
use crate::models::CleanEntry;
use crate::normalize::normalize_entry;
use crate::parser::load_file;
use crate::writer::{write_csv, write_json};

/// Statistics from a completed run, for operator reporting.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Detected input encoding.
    pub encoding: String,
    /// Non-empty input lines.
    pub line_count: usize,
    /// Lines that parsed as entries.
    pub parsed_count: usize,
    /// Lines dropped as malformed.
    pub skipped_count: usize,
    /// Entries written to both artifacts.
    pub entry_count: usize,
    /// Parsed entries dropped for missing headword or senses.
    pub dropped_count: usize,
}

/// Run the full cleaning pipeline.
///
/// Reads `input`, writes the sorted JSON array to `json_out` and the CSV
/// to `csv_out`. The JSON artifact is written first; a CSV failure leaves
/// it on disk.
pub fn clean_dictionary(
    input: &Path,
    json_out: &Path,
    csv_out: &Path,
) -> PipelineResult<RunSummary> {
    let loaded = load_file(input)?;
    let parsed_count = loaded.entries.len();

    let mut entries: Vec<CleanEntry> =
        loaded.entries.iter().filter_map(normalize_entry).collect();
    let dropped_count = parsed_count - entries.len();

    sort_entries(&mut entries);

    write_json(json_out, &entries)?;
    write_csv(csv_out, &entries)?;

    Ok(RunSummary {
        encoding: loaded.encoding,
        line_count: loaded.line_count,
        parsed_count,
        skipped_count: loaded.skipped,
        entry_count: entries.len(),
        dropped_count,
    })
}
