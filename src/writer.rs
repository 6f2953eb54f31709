//! Output artifacts: structured JSON array and tabular CSV.
//!
//! Both writers overwrite their target file. There is no partial-write
//! recovery; if the CSV write fails after the JSON write succeeded, the
//! JSON artifact stays on disk.

use std::fs;
use std::path::Path;

use crate::error::PipelineResult;
use crate::models::CleanEntry;

/// Separator between senses in a CSV cell.
pub const SENSE_SEPARATOR: &str = " | ";

/// Write entries as a pretty-printed JSON array.
///
/// Each element carries exactly `madde` and `anlamlar`; Turkish characters
/// are written as-is, not escaped.
pub fn write_json(path: &Path, entries: &[CleanEntry]) -> PipelineResult<()> {
    let mut json = serde_json::to_string_pretty(entries)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}

/// Write entries as CSV with header `madde,anlamlar`, senses joined with
/// [`SENSE_SEPARATOR`].
///
/// Quoting of cells containing the delimiter or line breaks is handled by
/// the csv crate.
pub fn write_csv(path: &Path, entries: &[CleanEntry]) -> PipelineResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["madde", "anlamlar"])?;

    for entry in entries {
        let senses = entry.anlamlar.join(SENSE_SEPARATOR);
        writer.write_record([entry.madde.as_str(), senses.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}
