//! Trend classification over the tail of a series.

use crate::datasource::Series;
use crate::view::Range;

/// Default number of trailing samples considered.
pub const DEFAULT_LOOKBACK: usize = 20;

/// Fewer samples than this always classify as [`Momentum::Flat`].
const MIN_SAMPLES: usize = 5;

/// Samples at the end of the window the delta is measured across.
const DELTA_SPAN: usize = 5;

/// Fraction of the window's value range the delta has to exceed.
const THRESHOLD_FRAC: f64 = 0.12;

/// Direction of the recent trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Momentum {
    /// Rising.
    Up,
    /// Falling.
    Down,
    /// Neither, or not enough history to tell.
    #[default]
    Flat,
}

impl Momentum {
    /// Classify the last `lookback` samples of `series`.
    ///
    /// The delta across the last five samples of the window is compared to
    /// 12% of the window's value range.
    pub fn classify(series: &Series, lookback: usize) -> Self {
        let points = series.points();
        if points.len() < MIN_SAMPLES {
            return Self::Flat;
        }
        let window = &points[points.len() - lookback.clamp(1, points.len())..];

        let Some(range) = Range::from_values(window.iter().map(|point| point.value)) else {
            return Self::Flat;
        };
        let span = range.span();
        if span == 0.0 {
            return Self::Flat;
        }

        let start = window.len().saturating_sub(DELTA_SPAN);
        let delta = window[window.len() - 1].value - window[start].value;
        let threshold = span * THRESHOLD_FRAC;
        if delta > threshold {
            Self::Up
        } else if delta < -threshold {
            Self::Down
        } else {
            Self::Flat
        }
    }
}
