//! Player Box Score Scraper
//!
//! Collects per-game box scores for every player listed on the stats index
//! page, adds the per-game impact metric and writes the combined table to CSV.
//! Pages are fetched through the [`PageSource`] trait so the network can be
//! swapped for fixtures in tests.

pub mod config;
pub mod error;
pub mod export;
pub mod names;
pub mod scraper;
pub mod types;

#[cfg(test)]
mod tests;

pub use config::ScraperConfig;
pub use error::{Result, ScrapeError};
pub use export::write_box_scores;
pub use names::parse_player_name;
pub use crate::scraper::{
    extract_player_links, fetch_player_table, parse_box_score_table, BoxScoreScraper,
    HttpPageSource, PageSource,
};
pub use types::*;
