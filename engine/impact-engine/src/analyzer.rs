use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::artifacts::{load_games, write_summaries};
use crate::calculator::{analysis_sub_impacts, mean_skip_nan, pearson, ratio};
use crate::config::ArtifactPaths;
use crate::error::Result;
use crate::models::{GameRecord, PlayerSummary};

/// Per-game series for one player
#[derive(Debug, Default)]
struct PlayerSeries {
    impact: Vec<f64>,
    scoring: Vec<f64>,
    rebounding: Vec<f64>,
    scoring_ratio: Vec<f64>,
    rebounding_ratio: Vec<f64>,
}

/// Summarize every player's games: mean contribution ratios and the
/// correlation of each sub-impact with total impact.
///
/// Players come out ordered by name.
pub fn summarize_players(games: &[GameRecord]) -> Vec<PlayerSummary> {
    let mut by_player: BTreeMap<&str, PlayerSeries> = BTreeMap::new();

    for game in games {
        let split = analysis_sub_impacts(game);
        let series = by_player.entry(game.player.as_str()).or_default();
        series.impact.push(game.impact);
        series.scoring.push(split.scoring);
        series.rebounding.push(split.rebounding);
        series.scoring_ratio.push(ratio(split.scoring, game.impact));
        series.rebounding_ratio.push(ratio(split.rebounding, game.impact));
    }

    by_player
        .into_iter()
        .map(|(player, series)| {
            let scoring_corr = pearson(&series.impact, &series.scoring);
            let rebounding_corr = pearson(&series.impact, &series.rebounding);
            if scoring_corr.is_none() || rebounding_corr.is_none() {
                debug!(
                    "Correlation undefined for {} ({} games, scoring: {:?}, rebounding: {:?})",
                    player,
                    series.impact.len(),
                    scoring_corr,
                    rebounding_corr
                );
            }

            PlayerSummary {
                player: player.to_string(),
                scoring_ratio: mean_skip_nan(&series.scoring_ratio),
                rebounding_ratio: mean_skip_nan(&series.rebounding_ratio),
                scoring_corr,
                rebounding_corr,
            }
        })
        .collect()
}

/// Analyzer stage: box score artifact in, summary artifact out
pub fn run_analysis(paths: &ArtifactPaths) -> Result<Vec<PlayerSummary>> {
    info!("Starting impact analysis");

    let games = load_games(&paths.box_scores)?;
    let summaries = summarize_players(&games);
    write_summaries(&paths.summary, &summaries)?;

    info!("Summarized {} players", summaries.len());
    Ok(summaries)
}
