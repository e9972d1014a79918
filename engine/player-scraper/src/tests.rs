//! Scenario tests for the scraper, run against in-memory pages

use std::collections::HashMap;

use async_trait::async_trait;

use crate::{
    write_box_scores, BoxScoreScraper, PageSource, Result, ScrapeError, ScraperConfig,
    IMPACT_COLUMN,
};

struct FixturePages {
    pages: HashMap<String, String>,
}

impl FixturePages {
    fn new(pages: &[(&str, String)]) -> Self {
        Self { pages: pages.iter().map(|(url, html)| (url.to_string(), html.clone())).collect() }
    }
}

#[async_trait]
impl PageSource for FixturePages {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.pages.get(url).cloned().ok_or_else(|| ScrapeError::HttpStatus {
            url: url.to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        })
    }
}

fn test_config() -> ScraperConfig {
    ScraperConfig { base_url: "https://site.test".to_string(), ..Default::default() }
}

fn player_page(games: &[(u32, u32, u32, u32)]) -> String {
    let rows: String = games
        .iter()
        .enumerate()
        .map(|(i, (pts, oreb, dreb, to))| {
            format!(
                "<tr><td>G{}</td><td>{pts}</td><td>{}</td><td>{oreb}</td><td>{dreb}</td><td>{to}</td></tr>",
                i + 1,
                oreb + dreb
            )
        })
        .collect();
    format!(
        "<table><tr><th>GAME</th><th>PTS</th><th>REB</th><th>OREB</th><th>DREB</th><th>TO</th></tr>{rows}</table>"
    )
}

fn index_page(slugs: &[&str]) -> String {
    let links: String =
        slugs.iter().map(|s| format!(r#"<li><a href="/player/{s}">{s}</a></li>"#)).collect();
    format!(r#"<ul><li><a href="/stats/team">teams</a></li>{links}</ul>"#)
}

const ANN: [(u32, u32, u32, u32); 3] = [(10, 2, 3, 1), (12, 1, 4, 2), (8, 0, 6, 3)];
const BEA: [(u32, u32, u32, u32); 3] = [(20, 3, 2, 4), (5, 0, 1, 0), (0, 0, 0, 1)];

fn two_player_site() -> FixturePages {
    FixturePages::new(&[
        ("https://site.test/stats/player", index_page(&["bea-baker-77", "ann-able"])),
        ("https://site.test/player/ann-able", player_page(&ANN)),
        ("https://site.test/player/bea-baker-77", player_page(&BEA)),
    ])
}

#[tokio::test]
async fn test_scrape_two_players_three_games_each() {
    let scraper = BoxScoreScraper::with_source(two_player_site(), test_config());
    let combined = scraper.scrape_all_players().await.unwrap();

    assert_eq!(combined.row_count(), 6);

    let players: Vec<&str> = combined.rows().map(|r| r.player.as_str()).collect();
    assert_eq!(
        players,
        vec!["Bea Baker", "Bea Baker", "Bea Baker", "Ann Able", "Ann Able", "Ann Able"]
    );

    for row in combined.rows() {
        let s = row.stats;
        let expected = s.pts + 1.5 * s.oreb + s.dreb - s.to;
        assert!((row.impact - expected).abs() < 1e-9);
    }
}

#[tokio::test]
async fn test_duplicate_links_are_fetched_twice() {
    let site = FixturePages::new(&[
        ("https://site.test/stats/player", index_page(&["ann-able", "ann-able"])),
        ("https://site.test/player/ann-able", player_page(&ANN)),
    ]);
    let scraper = BoxScoreScraper::with_source(site, test_config());
    let combined = scraper.scrape_all_players().await.unwrap();

    assert_eq!(combined.tables().len(), 2);
    assert_eq!(combined.row_count(), 6);
}

#[tokio::test]
async fn test_missing_player_page_aborts_run() {
    let site = FixturePages::new(&[
        ("https://site.test/stats/player", index_page(&["ann-able", "gone-player"])),
        ("https://site.test/player/ann-able", player_page(&ANN)),
    ]);
    let scraper = BoxScoreScraper::with_source(site, test_config());
    let err = scraper.scrape_all_players().await.unwrap_err();

    assert!(err.is_network());
}

#[tokio::test]
async fn test_unreachable_index_aborts_run() {
    let scraper = BoxScoreScraper::with_source(FixturePages::new(&[]), test_config());
    let err = scraper.discover_player_urls().await.unwrap_err();

    assert!(matches!(err, ScrapeError::HttpStatus { .. }));
}

#[tokio::test]
async fn test_written_artifact_round_trips_numeric_columns() {
    let scraper = BoxScoreScraper::with_source(two_player_site(), test_config());
    let combined = scraper.scrape_all_players().await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("box_scores.csv");
    write_box_scores(&path, &combined).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    let impact_idx = headers.iter().position(|h| h == IMPACT_COLUMN).unwrap();
    let pts_idx = headers.iter().position(|h| h == "PTS").unwrap();

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), combined.row_count());

    for (record, row) in records.iter().zip(combined.rows()) {
        let impact: f64 = record[impact_idx].parse().unwrap();
        let pts: f64 = record[pts_idx].parse().unwrap();
        assert_eq!(impact.to_bits(), row.impact.to_bits());
        assert_eq!(pts.to_bits(), row.stats.pts.to_bits());
    }
}
