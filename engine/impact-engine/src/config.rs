use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where each pipeline stage reads and writes its artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactPaths {
    /// Combined per-game box scores with IMPACT (written by the collector)
    pub box_scores: PathBuf,

    /// Per-player ratio and correlation summary (written by the analyzer)
    pub summary: PathBuf,

    /// Impact composition chart (written by the reporter)
    pub chart: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            box_scores: PathBuf::from("data/player_box_scores_impact.csv"),
            summary: PathBuf::from("data/player_scoring_vs_rebounding_impact.csv"),
            chart: PathBuf::from("data/player_impact_composition.png"),
        }
    }
}

/// Appearance of the impact composition chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Figure width in inches
    pub width_in: f64,

    /// Figure height in inches
    pub height_in: f64,

    /// Output resolution
    pub dpi: u32,

    /// Chart title
    pub title: String,

    /// X axis description
    pub x_label: String,

    /// Y axis description
    pub y_label: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width_in: 12.0,
            height_in: 10.0,
            dpi: 300,
            title: "Who Impacts Their Team most, and How?".to_string(),
            x_label: "Average Impact per Game".to_string(),
            y_label: "Player".to_string(),
        }
    }
}

impl ChartConfig {
    /// Image size in pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        ((self.width_in * dpi).round() as u32, (self.height_in * dpi).round() as u32)
    }

    /// Convert a typographic point size into pixels at this resolution
    pub fn font_px(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / 72.0
    }
}
