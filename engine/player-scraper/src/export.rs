//! Writing the combined box score artifact

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::types::CombinedBoxScores;

/// Write the combined table as CSV with a header row, replacing any previous
/// file at `path`. Parent directories are created as needed.
pub fn write_box_scores(path: &Path, box_scores: &CombinedBoxScores) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    if !box_scores.columns().is_empty() {
        writer.write_record(box_scores.columns())?;
    }
    for record in box_scores.records() {
        writer.write_record(&record)?;
    }
    writer.flush()?;

    info!("Saved {} game rows to {}", box_scores.row_count(), path.display());
    Ok(())
}
