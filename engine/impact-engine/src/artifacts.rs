//! Reading and writing the CSV artifacts that connect the pipeline stages

use std::fs;
use std::path::Path;

use player_scraper::{DREB, IMPACT_COLUMN, OREB, PLAYER_COLUMN, PTS, TO};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{AnalyticsError, Result};
use crate::models::{GameRecord, PlayerSummary};

const GAME_COLUMNS: [&str; 6] = [PLAYER_COLUMN, PTS, OREB, DREB, TO, IMPACT_COLUMN];

const SUMMARY_COLUMNS: [&str; 5] = [
    PLAYER_COLUMN,
    "SCORING_Ratio",
    "REBOUNDING_Ratio",
    "SCORING_Corr2Impact",
    "REBOUNDING_Corr2Impact",
];

/// Load every game row from the combined box score artifact
pub fn load_games(path: &Path) -> Result<Vec<GameRecord>> {
    let games = load_records(path, &GAME_COLUMNS)?;
    info!("Loaded {} game rows from {}", games.len(), path.display());
    Ok(games)
}

/// Load the per-player summary artifact
pub fn load_summaries(path: &Path) -> Result<Vec<PlayerSummary>> {
    let summaries = load_records(path, &SUMMARY_COLUMNS)?;
    info!("Loaded {} player summaries from {}", summaries.len(), path.display());
    Ok(summaries)
}

/// Write the per-player summary artifact, replacing any previous file.
/// Undefined correlations are written as empty cells.
pub fn write_summaries(path: &Path, summaries: &[PlayerSummary]) -> Result<()> {
    ensure_parent(path)?;

    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(SUMMARY_COLUMNS)?;
    for summary in summaries {
        writer.serialize(summary)?;
    }
    writer.flush()?;

    info!("Saved {} player summaries to {}", summaries.len(), path.display());
    Ok(())
}

/// Create the parent directory of an artifact path if it does not exist
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn load_records<T: DeserializeOwned>(path: &Path, required: &[&str]) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(AnalyticsError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    debug!("{} columns in {}", headers.len(), path.display());

    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(AnalyticsError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            });
        }
    }

    reader
        .deserialize()
        .map(|record| record.map_err(AnalyticsError::from))
        .collect()
}
