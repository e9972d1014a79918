use impact_engine::{ArtifactPaths, ChartConfig};
use player_scraper::ScraperConfig;
use serde::{Deserialize, Serialize};

/// Everything one pipeline run needs. The run takes no flags, so the
/// defaults are the configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Where and how to scrape
    pub scraper: ScraperConfig,

    /// Artifact locations shared by all stages
    pub artifacts: ArtifactPaths,

    /// Chart appearance
    pub chart: ChartConfig,
}
