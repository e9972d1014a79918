//! Horizontal stacked bar chart of per-player impact composition

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::artifacts::ensure_parent;
use crate::config::ChartConfig;
use crate::error::{AnalyticsError, Result};
use crate::models::PlayerImpact;

const SCORING_COLOR: RGBColor = RGBColor(0x5c, 0x8b, 0xc7);
const REBOUNDING_COLOR: RGBColor = RGBColor(0x5a, 0x41, 0x98);
const BAR_ALPHA: f64 = 0.8;
const GRID_ALPHA: f64 = 0.3;

/// Render one bar per player, scoring segment first with the rebounding
/// segment stacked after it. `impacts` is drawn bottom to top, so an
/// ascending order puts the biggest impact at the top.
///
/// The PNG at `path` is the only output and is overwritten on every run.
/// Nothing is shown on screen: there is no display to rely on in a batch
/// run, and the saved file carries the same picture.
pub fn render_impact_chart(
    path: &Path,
    impacts: &[PlayerImpact],
    config: &ChartConfig,
) -> Result<()> {
    ensure_parent(path)?;

    let root = BitMapBackend::new(path, config.pixel_size()).into_drawing_area();
    draw_impact_chart(&root, impacts, config).map_err(|e| AnalyticsError::chart(e.to_string()))?;
    root.present().map_err(|e| AnalyticsError::chart(e.to_string()))?;

    info!("Saved impact chart for {} players to {}", impacts.len(), path.display());
    Ok(())
}

fn draw_impact_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    impacts: &[PlayerImpact],
    config: &ChartConfig,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let (x_min, x_max) = x_bounds(impacts);
    let rows = impacts.len().max(1) as u32;
    let px = |points: f64| config.font_px(points);

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", px(14.0)).into_font().style(FontStyle::Bold))
        .margin(px(12.0) as u32)
        .x_label_area_size(px(40.0) as u32)
        .y_label_area_size(px(130.0) as u32)
        .build_cartesian_2d(x_min..x_max, (0u32..rows).into_segmented())?;

    let player_label = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(i) => player_at(impacts, *i),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_y_mesh()
        .bold_line_style(&BLACK.mix(GRID_ALPHA))
        .light_line_style(&TRANSPARENT)
        .y_labels(rows as usize)
        .y_label_formatter(&player_label)
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .axis_desc_style(("sans-serif", px(12.0)).into_font().style(FontStyle::Bold))
        .label_style(("sans-serif", px(10.0)))
        .draw()?;

    let margin = px(4.0) as u32;
    let swatch = px(5.0) as i32;

    chart
        .draw_series(impacts.iter().enumerate().map(|(i, p)| {
            bar(0.0, p.scoring_impact, i as u32, SCORING_COLOR, margin)
        }))?
        .label("Scoring")
        .legend(move |(x, y)| legend_swatch(x, y, swatch, SCORING_COLOR));

    chart
        .draw_series(impacts.iter().enumerate().map(|(i, p)| {
            bar(p.scoring_impact, p.rebounding_impact, i as u32, REBOUNDING_COLOR, margin)
        }))?
        .label("Rebounding")
        .legend(move |(x, y)| legend_swatch(x, y, swatch, REBOUNDING_COLOR));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK.mix(GRID_ALPHA))
        .label_font(("sans-serif", px(10.0)))
        .draw()?;

    Ok(())
}

/// A bar segment of length `len` starting at `start` on row `row`
fn bar(
    start: f64,
    len: f64,
    row: u32,
    color: RGBColor,
    margin: u32,
) -> Rectangle<(f64, SegmentValue<u32>)> {
    let (lo, hi) = segment_extent(start, len);
    let mut rect = Rectangle::new(
        [(lo, SegmentValue::Exact(row)), (hi, SegmentValue::Exact(row + 1))],
        color.mix(BAR_ALPHA).filled(),
    );
    rect.set_margin(margin, margin, 0, 0);
    rect
}

fn legend_swatch(x: i32, y: i32, swatch: i32, color: RGBColor) -> Rectangle<(i32, i32)> {
    Rectangle::new([(x, y - swatch), (x + 2 * swatch, y + swatch)], color.mix(BAR_ALPHA).filled())
}

fn player_at(impacts: &[PlayerImpact], row: u32) -> String {
    impacts.get(row as usize).map(|p| p.player.clone()).unwrap_or_default()
}

/// Left and right edge of a segment; negative lengths extend leftwards
fn segment_extent(start: f64, len: f64) -> (f64, f64) {
    let end = start + len;
    (start.min(end), start.max(end))
}

/// X range covering zero and every segment end, padded by 5%
fn x_bounds(impacts: &[PlayerImpact]) -> (f64, f64) {
    let (lo, hi) = impacts
        .iter()
        .flat_map(|p| [p.scoring_impact, p.scoring_impact + p.rebounding_impact])
        .filter(|v| v.is_finite())
        .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let span = hi - lo;
    if span <= 0.0 {
        return (0.0, 1.0);
    }
    let pad = span * 0.05;
    (if lo < 0.0 { lo - pad } else { lo }, hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impact(player: &str, scoring: f64, rebounding: f64) -> PlayerImpact {
        PlayerImpact {
            player: player.to_string(),
            games: 1,
            impact: scoring + rebounding,
            scoring_impact: scoring,
            rebounding_impact: rebounding,
        }
    }

    #[test]
    fn test_x_bounds_start_at_zero_for_positive_bars() {
        let (lo, hi) = x_bounds(&[impact("A", 10.0, 5.0), impact("B", 4.0, 2.0)]);
        assert_eq!(lo, 0.0);
        assert!((hi - 15.75).abs() < 1e-9);
    }

    #[test]
    fn test_x_bounds_extend_left_for_negative_segments() {
        let (lo, hi) = x_bounds(&[impact("A", -2.0, 1.0), impact("B", 8.0, 2.0)]);
        assert!(lo < -2.0);
        assert!(hi > 10.0);
    }

    #[test]
    fn test_x_bounds_empty() {
        assert_eq!(x_bounds(&[]), (0.0, 1.0));
    }

    #[test]
    fn test_segment_extent_handles_negative_length() {
        assert_eq!(segment_extent(3.0, 2.0), (3.0, 5.0));
        assert_eq!(segment_extent(3.0, -5.0), (-2.0, 3.0));
    }

    #[test]
    fn test_player_labels_follow_row_order() {
        let impacts = vec![impact("Low", 1.0, 0.0), impact("High", 9.0, 0.0)];
        assert_eq!(player_at(&impacts, 0), "Low");
        assert_eq!(player_at(&impacts, 1), "High");
        assert_eq!(player_at(&impacts, 2), "");
    }
}
