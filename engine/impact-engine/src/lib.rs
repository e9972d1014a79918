//! Player Impact Engine
//!
//! Turns the scraped box score artifact into per-player summaries (analyzer)
//! and a turnover-weighted impact composition chart (reporter). Each stage
//! reads its inputs from disk so it can run on its own once the previous
//! stage's artifact exists.

pub mod analyzer;
pub mod artifacts;
pub mod calculator;
pub mod chart;
pub mod config;
pub mod error;
pub mod models;
pub mod reporter;


pub use analyzer::{run_analysis, summarize_players};
pub use artifacts::{load_games, load_summaries, write_summaries};
pub use chart::render_impact_chart;
pub use config::{ArtifactPaths, ChartConfig};
pub use error::{AnalyticsError, Result};
pub use models::*;
pub use reporter::{run_report, turnover_weights, weighted_player_impacts};
