use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info};

use crate::artifacts::{load_games, load_summaries};
use crate::calculator::{mean, weighted_sub_impacts};
use crate::chart::render_impact_chart;
use crate::config::{ArtifactPaths, ChartConfig};
use crate::error::Result;
use crate::models::{GameRecord, PlayerImpact, PlayerSummary, TurnoverWeights};

#[derive(Debug, Default)]
struct Accumulator {
    impact: Vec<f64>,
    scoring: Vec<f64>,
    rebounding: Vec<f64>,
}

/// Per-player turnover weights derived from the summary correlations.
/// Players missing from the summary are not in the map.
pub fn turnover_weights(summaries: &[PlayerSummary]) -> HashMap<&str, TurnoverWeights> {
    summaries
        .iter()
        .map(|s| {
            let weights = TurnoverWeights::from_correlations(s.scoring_corr, s.rebounding_corr);
            if weights == TurnoverWeights::EVEN {
                debug!("Even turnover split for {}", s.player);
            }
            (s.player.as_str(), weights)
        })
        .collect()
}

/// Average each player's impact and turnover-weighted sub-impacts, ordered by
/// ascending mean impact.
///
/// Games are matched to summaries by player name; a player with no summary
/// row gets the even turnover split.
pub fn weighted_player_impacts(
    games: &[GameRecord],
    summaries: &[PlayerSummary],
) -> Vec<PlayerImpact> {
    let weights = turnover_weights(summaries);
    let mut by_player: BTreeMap<&str, Accumulator> = BTreeMap::new();

    for game in games {
        let w = weights.get(game.player.as_str()).copied().unwrap_or(TurnoverWeights::EVEN);
        let split = weighted_sub_impacts(game, w);

        let acc = by_player.entry(game.player.as_str()).or_default();
        acc.impact.push(game.impact);
        acc.scoring.push(split.scoring);
        acc.rebounding.push(split.rebounding);
    }

    let mut impacts: Vec<PlayerImpact> = by_player
        .into_iter()
        .map(|(player, acc)| PlayerImpact {
            player: player.to_string(),
            games: acc.impact.len(),
            impact: mean(&acc.impact),
            scoring_impact: mean(&acc.scoring),
            rebounding_impact: mean(&acc.rebounding),
        })
        .collect();

    impacts.sort_by(|a, b| a.impact.total_cmp(&b.impact));
    impacts
}

/// Reporter stage: both artifacts in, composition chart out
pub fn run_report(paths: &ArtifactPaths, chart: &ChartConfig) -> Result<Vec<PlayerImpact>> {
    info!("Starting impact report");

    let games = load_games(&paths.box_scores)?;
    let summaries = load_summaries(&paths.summary)?;

    let impacts = weighted_player_impacts(&games, &summaries);
    if let Some(top) = impacts.last() {
        info!(
            "Top player: {} ({:.2} impact/game, {:.2} scoring, {:.2} rebounding)",
            top.player, top.impact, top.scoring_impact, top.rebounding_impact
        );
    }

    render_impact_chart(&paths.chart, &impacts, chart)?;
    Ok(impacts)
}
