use player_scraper::OREB_WEIGHT;
use serde::{Deserialize, Serialize};

/// One game row read back from the combined box score artifact.
///
/// Only the columns the analysis needs are kept; any other source columns in
/// the file are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct GameRecord {
    pub player: String,
    pub pts: f64,
    pub oreb: f64,
    pub dreb: f64,
    pub to: f64,
    /// IMPACT as the collector computed it
    pub impact: f64,
}

impl GameRecord {
    /// `1.5*OREB + DREB`, before any turnover penalty
    pub fn raw_rebounding(&self) -> f64 {
        OREB_WEIGHT * self.oreb + self.dreb
    }
}

/// Per-player summary row (the analyzer's artifact)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    #[serde(rename = "PLAYER")]
    pub player: String,

    /// Mean share of impact coming from points
    #[serde(rename = "SCORING_Ratio")]
    pub scoring_ratio: f64,

    /// Mean share of impact coming from rebounds
    #[serde(rename = "REBOUNDING_Ratio")]
    pub rebounding_ratio: f64,

    /// Pearson correlation of IMPACT with scoring impact; None when undefined
    #[serde(rename = "SCORING_Corr2Impact")]
    pub scoring_corr: Option<f64>,

    /// Pearson correlation of IMPACT with rebounding impact; None when undefined
    #[serde(rename = "REBOUNDING_Corr2Impact")]
    pub rebounding_corr: Option<f64>,
}

/// A scoring/rebounding split of one game's impact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubImpacts {
    pub scoring: f64,
    pub rebounding: f64,
}

/// Share of the turnover penalty charged to each sub-impact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnoverWeights {
    pub scoring: f64,
    pub rebounding: f64,
}

/// Per-player averages the composition chart is drawn from
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerImpact {
    pub player: String,
    /// Number of games averaged
    pub games: usize,
    /// Mean IMPACT per game
    pub impact: f64,
    /// Mean turnover-weighted scoring impact per game
    pub scoring_impact: f64,
    /// Mean turnover-weighted rebounding impact per game
    pub rebounding_impact: f64,
}
