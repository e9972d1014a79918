use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::names::parse_player_name;
use crate::types::{BoxScoreTable, CombinedBoxScores};

/// Anything that can turn a URL into an HTML document
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the body of `url`
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Plain HTTP GET over reqwest
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    /// Create a new HTTP page source
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ScrapeError::Client)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching data from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ScrapeError::Network { url: url.to_string(), source })?;

        if !response.status().is_success() {
            return Err(ScrapeError::HttpStatus { url: url.to_string(), status: response.status() });
        }

        let html = response
            .text()
            .await
            .map_err(|source| ScrapeError::Network { url: url.to_string(), source })?;
        info!("Successfully fetched HTML ({} bytes)", html.len());

        Ok(html)
    }
}

/// Box score scraper for the player stats site
pub struct BoxScoreScraper<S> {
    source: S,
    config: ScraperConfig,
}

impl BoxScoreScraper<HttpPageSource> {
    /// Create a scraper that talks to the live site
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let source = HttpPageSource::new(&config)?;
        Ok(Self::with_source(source, config))
    }
}

impl<S: PageSource> BoxScoreScraper<S> {
    /// Create a scraper over any page source
    pub fn with_source(source: S, config: ScraperConfig) -> Self {
        Self { source, config }
    }

    /// Resolve every player page linked from the index page, in page order
    pub async fn discover_player_urls(&self) -> Result<Vec<String>> {
        let index_url = self.config.index_url();
        let html = self.source.fetch(&index_url).await?;
        let urls = extract_player_links(&html, &self.config.base_url)?;

        info!("Found {} player links on {}", urls.len(), index_url);
        Ok(urls)
    }

    /// Scrape every player's box scores and stack them into one table.
    ///
    /// Players are fetched one after another in link order; the first failure
    /// aborts the whole run.
    pub async fn scrape_all_players(&self) -> Result<CombinedBoxScores> {
        info!("Starting to scrape player box scores");

        let urls = self.discover_player_urls().await?;
        let total = urls.len();

        let mut combined = CombinedBoxScores::new();
        for (i, url) in urls.iter().enumerate() {
            debug!("Scraping player {} of {}", i + 1, total);
            let table = fetch_player_table(&self.source, url).await?;
            combined.push(table);
        }

        info!(
            "Scraped {} game rows from {} player pages",
            combined.row_count(),
            combined.tables().len()
        );
        Ok(combined)
    }
}

/// Fetch one player page and turn it into a box score table
pub async fn fetch_player_table<S: PageSource + ?Sized>(
    source: &S,
    url: &str,
) -> Result<BoxScoreTable> {
    let player = parse_player_name(url)?;
    let html = source.fetch(url).await?;
    let table = parse_box_score_table(&html, url, &player)?;

    info!("Parsed {} games for {}", table.rows.len(), player);
    Ok(table)
}

/// Collect `base_url + href` for every anchor whose href mentions `/player/`.
///
/// Links are returned in document order and duplicates are kept.
pub fn extract_player_links(html: &str, base_url: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let anchor_selector = selector("a[href]")?;

    Ok(document
        .select(&anchor_selector)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| href.contains("/player/"))
        .map(|href| format!("{base_url}{href}"))
        .collect())
}

/// Read the first non-empty `<table>` on a player page.
///
/// The first row supplies the headers; every later row with at least one cell
/// is a game.
pub fn parse_box_score_table(html: &str, url: &str, player: &str) -> Result<BoxScoreTable> {
    let document = Html::parse_document(html);
    let table_selector = selector("table")?;
    let row_selector = selector("tr")?;
    let cell_selector = selector("th, td")?;

    let mut grid = document
        .select(&table_selector)
        .map(|table| {
            table
                .select(&row_selector)
                .map(|row| row_cells(&row, &cell_selector))
                .filter(|cells| !cells.is_empty())
                .collect::<Vec<_>>()
        })
        .find(|rows| !rows.is_empty())
        .ok_or_else(|| ScrapeError::parse(format!("No box score table found at {url}")))?
        .into_iter();

    let headers = grid
        .next()
        .ok_or_else(|| ScrapeError::parse(format!("Empty box score table at {url}")))?;

    BoxScoreTable::from_grid(url, player, headers, grid.collect())
}

/// Cell texts of one row, whitespace collapsed. A cell spanning several
/// columns is repeated once per column.
fn row_cells(row: &ElementRef, cell_selector: &Selector) -> Vec<String> {
    let mut cells = Vec::new();
    for cell in row.select(cell_selector) {
        let text = cell.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" ");
        let span = cell
            .value()
            .attr("colspan")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .max(1);
        cells.extend(std::iter::repeat(text).take(span));
    }
    cells
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::parse(format!("Failed to create {css} selector: {e}")))
}
