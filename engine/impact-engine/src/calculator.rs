//! Impact arithmetic shared by the analyzer and the reporter.
//!
//! The two stages split a game's impact into scoring and rebounding parts in
//! different ways and the two splits are deliberately kept apart:
//! [`analysis_sub_impacts`] ignores turnovers entirely, while
//! [`weighted_sub_impacts`] charges the turnover penalty to both parts in
//! proportion to their [`TurnoverWeights`].

use crate::models::{GameRecord, SubImpacts, TurnoverWeights};

impl TurnoverWeights {
    /// Equal split used whenever correlations cannot decide
    pub const EVEN: Self = Self { scoring: 0.5, rebounding: 0.5 };

    /// Weights proportional to the strength of each sub-impact's correlation
    /// with total impact.
    ///
    /// Falls back to [`TurnoverWeights::EVEN`] when either correlation is
    /// undefined or both are zero.
    pub fn from_correlations(scoring_corr: Option<f64>, rebounding_corr: Option<f64>) -> Self {
        match (scoring_corr, rebounding_corr) {
            (Some(s), Some(r)) => {
                let total = s.abs() + r.abs();
                if total > 0.0 && total.is_finite() {
                    Self { scoring: s.abs() / total, rebounding: r.abs() / total }
                } else {
                    Self::EVEN
                }
            }
            _ => Self::EVEN,
        }
    }
}

/// Scoring impact is raw points; rebounding impact is `1.5*OREB + DREB`.
pub fn analysis_sub_impacts(game: &GameRecord) -> SubImpacts {
    SubImpacts { scoring: game.pts, rebounding: game.raw_rebounding() }
}

/// Same split as [`analysis_sub_impacts`] with `TO * weight` taken off each part
pub fn weighted_sub_impacts(game: &GameRecord, weights: TurnoverWeights) -> SubImpacts {
    SubImpacts {
        scoring: game.pts - game.to * weights.scoring,
        rebounding: game.raw_rebounding() - game.to * weights.rebounding,
    }
}

/// `part / impact` with no guard: zero or negative impact yields inf, NaN or a
/// negative share, and that is passed on as data.
pub fn ratio(part: f64, impact: f64) -> f64 {
    part / impact
}

/// Arithmetic mean; NaN for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Arithmetic mean over the non-NaN values. Infinities are kept.
pub fn mean_skip_nan(values: &[f64]) -> f64 {
    let (sum, count) = values
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    sum / count as f64
}

/// Pearson correlation coefficient of two equally long series.
///
/// Undefined (None) for fewer than two points, mismatched lengths, or when
/// either series is constant.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 || is_constant(xs) || is_constant(ys) {
        return None;
    }

    let mean_x = mean(xs);
    let mean_y = mean(ys);

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    Some((sxy / denom).clamp(-1.0, 1.0))
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}
