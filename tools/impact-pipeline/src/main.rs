mod config;

use anyhow::{Context, Result};
use impact_engine::{run_analysis, run_report};
use player_scraper::{write_box_scores, BoxScoreScraper};
use tracing::info;

use crate::config::PipelineConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = PipelineConfig::default();
    info!("Starting player impact pipeline");

    // Stage 1: collect box scores
    let scraper = BoxScoreScraper::new(config.scraper.clone()).context("Failed to set up scraper")?;
    let box_scores =
        scraper.scrape_all_players().await.context("Failed to collect player box scores")?;
    write_box_scores(&config.artifacts.box_scores, &box_scores)
        .context("Failed to write box score artifact")?;

    // Stage 2: per-player summaries
    let summaries = run_analysis(&config.artifacts).context("Failed to analyze player impact")?;

    // Stage 3: weighted composition chart
    let impacts =
        run_report(&config.artifacts, &config.chart).context("Failed to report player impact")?;

    println!("\nPlayers by Average Impact per Game:");
    println!(
        "{:<4} {:<24} {:>8} {:>8} {:>10}",
        "Rank", "Player", "Impact", "Scoring", "Rebounding"
    );
    println!("{}", "-".repeat(58));
    for (rank, player) in impacts.iter().rev().enumerate() {
        println!(
            "{:<4} {:<24} {:>8.2} {:>8.2} {:>10.2}",
            rank + 1,
            player.player,
            player.impact,
            player.scoring_impact,
            player.rebounding_impact
        );
    }

    info!(
        "Pipeline completed: {} game rows, {} players, chart at {}",
        box_scores.row_count(),
        summaries.len(),
        config.artifacts.chart.display()
    );
    Ok(())
}
