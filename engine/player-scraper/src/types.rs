use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrapeError};

/// Column added to every row carrying the player's display name
pub const PLAYER_COLUMN: &str = "PLAYER";
/// Column added to every row carrying the per-game impact
pub const IMPACT_COLUMN: &str = "IMPACT";

pub const PTS: &str = "PTS";
pub const REB: &str = "REB";
pub const OREB: &str = "OREB";
pub const DREB: &str = "DREB";
pub const TO: &str = "TO";

/// Stat columns that must be present and numeric in every player table
pub const STAT_COLUMNS: [&str; 5] = [PTS, REB, OREB, DREB, TO];

/// Offensive rebounds count half again as much as defensive ones
pub const OREB_WEIGHT: f64 = 1.5;

/// The counting stats one game contributes to the impact metric
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CountingStats {
    /// Points
    pub pts: f64,
    /// Total rebounds (carried, not used by the metric)
    pub reb: f64,
    /// Offensive rebounds
    pub oreb: f64,
    /// Defensive rebounds
    pub dreb: f64,
    /// Turnovers
    pub to: f64,
}

impl CountingStats {
    /// `1.5*OREB + DREB`
    pub fn rebounding(&self) -> f64 {
        OREB_WEIGHT * self.oreb + self.dreb
    }

    /// `PTS + 1.5*OREB + DREB - TO`
    pub fn impact(&self) -> f64 {
        self.pts + OREB_WEIGHT * self.oreb + self.dreb - self.to
    }
}

/// One player's line for one game
#[derive(Debug, Clone, PartialEq)]
pub struct BoxScoreRow {
    /// Player name (e.g., "Paige Bueckers")
    pub player: String,
    /// Source cells, aligned with the owning table's headers
    pub cells: Vec<String>,
    /// Numeric view of the stat columns
    pub stats: CountingStats,
    /// Per-game impact
    pub impact: f64,
}

/// The box score table scraped from a single player page
#[derive(Debug, Clone, PartialEq)]
pub struct BoxScoreTable {
    /// Page the table was read from
    pub source_url: String,
    /// Header row as it appeared on the page, repeated names suffixed
    /// `.1`, `.2`, ... so every column is distinct
    pub headers: Vec<String>,
    /// Game rows in page order
    pub rows: Vec<BoxScoreRow>,
}

impl BoxScoreTable {
    /// Build a table from a raw header row and data rows, coercing the stat
    /// columns and computing impact for every game.
    ///
    /// Repeated header names are made unique first, so a stat column is
    /// always read from the first header carrying its name.
    pub fn from_grid(
        source_url: &str,
        player: &str,
        headers: Vec<String>,
        grid: Vec<Vec<String>>,
    ) -> Result<Self> {
        let headers = dedup_headers(headers);

        let mut indices = [0usize; STAT_COLUMNS.len()];
        for (slot, column) in indices.iter_mut().zip(STAT_COLUMNS) {
            *slot = headers.iter().position(|h| h == column).ok_or_else(|| {
                ScrapeError::MissingColumn {
                    column: column.to_string(),
                    url: source_url.to_string(),
                }
            })?;
        }

        let mut rows = Vec::with_capacity(grid.len());
        for cells in grid {
            if cells.len() != headers.len() {
                return Err(ScrapeError::parse(format!(
                    "row has {} cells but header has {} in table from {}",
                    cells.len(),
                    headers.len(),
                    source_url
                )));
            }

            let mut values = [0.0f64; STAT_COLUMNS.len()];
            for ((value, &idx), column) in values.iter_mut().zip(&indices).zip(STAT_COLUMNS) {
                *value = parse_stat(&cells[idx], column, source_url)?;
            }
            let [pts, reb, oreb, dreb, to] = values;
            let stats = CountingStats { pts, reb, oreb, dreb, to };

            rows.push(BoxScoreRow {
                player: player.to_string(),
                cells,
                stats,
                impact: stats.impact(),
            });
        }

        Ok(Self { source_url: source_url.to_string(), headers, rows })
    }

    /// Columns this table contributes to the combined output
    pub fn output_columns(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(String::as_str).chain([PLAYER_COLUMN, IMPACT_COLUMN])
    }
}

/// Rename repeats of a header to `NAME.1`, `NAME.2`, ... When a suffixed
/// name is already taken the suffix is applied again (`A.1.1`).
fn dedup_headers(headers: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::with_capacity(headers.len());

    for header in headers {
        let mut name = header;
        let mut seen = counts.get(&name).copied().unwrap_or(0);
        while seen > 0 {
            counts.insert(name.clone(), seen + 1);
            name = format!("{name}.{seen}");
            seen = counts.get(&name).copied().unwrap_or(0);
        }
        counts.insert(name.clone(), seen + 1);
        out.push(name);
    }

    out
}

fn parse_stat(raw: &str, column: &str, url: &str) -> Result<f64> {
    let trimmed = raw.trim();
    trimmed.parse::<f64>().map_err(|_| ScrapeError::InvalidNumber {
        column: column.to_string(),
        value: raw.to_string(),
        url: url.to_string(),
    })
}

/// Every player's table stacked into one, in scrape order.
///
/// Players whose tables carry different columns are aligned on the ordered
/// union of all column names; a player without a given column gets an empty
/// cell there.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombinedBoxScores {
    columns: Vec<String>,
    tables: Vec<BoxScoreTable>,
}

impl CombinedBoxScores {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a player's table after all previously added ones
    pub fn push(&mut self, table: BoxScoreTable) {
        for column in table.output_columns() {
            if !self.columns.iter().any(|c| c == column) {
                self.columns.push(column.to_string());
            }
        }
        self.tables.push(table);
    }

    /// Header row of the combined table
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Tables in the order they were added
    pub fn tables(&self) -> &[BoxScoreTable] {
        &self.tables
    }

    /// Total number of game rows across all players
    pub fn row_count(&self) -> usize {
        self.tables.iter().map(|t| t.rows.len()).sum()
    }

    /// All game rows, players stacked in order
    pub fn rows(&self) -> impl Iterator<Item = &BoxScoreRow> {
        self.tables.iter().flat_map(|t| t.rows.iter())
    }

    /// Output records aligned with [`columns`](Self::columns)
    pub fn records(&self) -> Vec<Vec<String>> {
        let mut out = Vec::with_capacity(self.row_count());

        for table in &self.tables {
            let positions: Vec<usize> = table
                .output_columns()
                .map(|c| self.columns.iter().position(|col| col == c).unwrap_or_default())
                .collect();

            for row in &table.rows {
                let mut record = vec![String::new(); self.columns.len()];
                let values = row
                    .cells
                    .iter()
                    .cloned()
                    .chain([row.player.clone(), row.impact.to_string()]);
                for (&pos, value) in positions.iter().zip(values) {
                    record[pos] = value;
                }
                out.push(record);
            }
        }

        out
    }
}

impl FromIterator<BoxScoreTable> for CombinedBoxScores {
    fn from_iter<I: IntoIterator<Item = BoxScoreTable>>(iter: I) -> Self {
        let mut combined = Self::new();
        for table in iter {
            combined.push(table);
        }
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_impact_formula() {
        let stats = CountingStats { pts: 12.0, reb: 5.0, oreb: 1.0, dreb: 4.0, to: 2.0 };
        assert!((stats.impact() - 15.5).abs() < 1e-9);
        assert!((stats.rebounding() - 5.5).abs() < 1e-9);
    }

    #[test]
    fn test_from_grid_computes_impact() {
        let table = BoxScoreTable::from_grid(
            "https://example.com/player/jane-doe",
            "Jane Doe",
            headers(&["DATE", "PTS", "REB", "OREB", "DREB", "TO"]),
            vec![
                row(&["1/17", "10", "5", "2", "3", "1"]),
                row(&["1/20", " 12 ", "5", "1", "4", "2"]),
            ],
        )
        .unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].impact, 15.0);
        assert_eq!(table.rows[1].impact, 15.5);
        assert_eq!(table.rows[1].stats.pts, 12.0);
        assert_eq!(table.rows[0].player, "Jane Doe");
    }

    #[test]
    fn test_from_grid_missing_column() {
        let err = BoxScoreTable::from_grid(
            "u",
            "Jane Doe",
            headers(&["PTS", "REB", "OREB", "DREB"]),
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, ScrapeError::MissingColumn { ref column, .. } if column == "TO"));
    }

    #[test]
    fn test_from_grid_non_numeric_value() {
        let err = BoxScoreTable::from_grid(
            "u",
            "Jane Doe",
            headers(&["PTS", "REB", "OREB", "DREB", "TO"]),
            vec![row(&["DNP", "0", "0", "0", "0"])],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::InvalidNumber { ref column, ref value, .. }
                if column == "PTS" && value == "DNP"
        ));
    }

    #[test]
    fn test_from_grid_ragged_row() {
        let err = BoxScoreTable::from_grid(
            "u",
            "Jane Doe",
            headers(&["PTS", "REB", "OREB", "DREB", "TO"]),
            vec![row(&["1", "2", "3"])],
        )
        .unwrap_err();
        assert!(matches!(err, ScrapeError::Parse(_)));
    }

    #[test]
    fn test_combined_column_union() {
        let a = BoxScoreTable::from_grid(
            "a",
            "Ann Able",
            headers(&["PTS", "REB", "OREB", "DREB", "TO"]),
            vec![row(&["10", "5", "2", "3", "1"])],
        )
        .unwrap();
        let b = BoxScoreTable::from_grid(
            "b",
            "Bea Baker",
            headers(&["MIN", "PTS", "REB", "OREB", "DREB", "TO"]),
            vec![row(&["31", "5", "1", "0", "1", "0"])],
        )
        .unwrap();

        let combined: CombinedBoxScores = [a, b].into_iter().collect();
        assert_eq!(
            combined.columns(),
            &headers(&["PTS", "REB", "OREB", "DREB", "TO", "PLAYER", "IMPACT", "MIN"])
        );

        let records = combined.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], row(&["10", "5", "2", "3", "1", "Ann Able", "15", ""]));
        assert_eq!(records[1], row(&["5", "1", "0", "1", "0", "Bea Baker", "6", "31"]));
    }

    #[test]
    fn test_dedup_headers_suffixes_repeats() {
        assert_eq!(
            dedup_headers(headers(&["", "", "FG", "FG", "FG", "PTS"])),
            headers(&["", ".1", "FG", "FG.1", "FG.2", "PTS"])
        );
        assert_eq!(
            dedup_headers(headers(&["A", "A.1", "A"])),
            headers(&["A", "A.1", "A.1.1"])
        );
    }

    #[test]
    fn test_repeated_headers_keep_every_cell() {
        let table = BoxScoreTable::from_grid(
            "u",
            "Jane Doe",
            headers(&["", "", "FG", "FG", "PTS", "REB", "OREB", "DREB", "TO", "PTS"]),
            vec![row(&["Jan 17", "W", "3-5", "1-2", "10", "5", "2", "3", "1", "99"])],
        )
        .unwrap();
        assert_eq!(table.rows[0].stats.pts, 10.0);
        assert_eq!(table.rows[0].impact, 15.0);

        let combined: CombinedBoxScores = [table].into_iter().collect();
        assert_eq!(
            combined.columns(),
            &headers(&[
                "", ".1", "FG", "FG.1", "PTS", "REB", "OREB", "DREB", "TO", "PTS.1", "PLAYER",
                "IMPACT",
            ])
        );
        assert_eq!(
            combined.records()[0],
            row(&["Jan 17", "W", "3-5", "1-2", "10", "5", "2", "3", "1", "99", "Jane Doe", "15"])
        );
    }
}
