//! Error types surfaced by the live chart core.
//!
//! Degenerate numeric input never produces an error; every per-frame path
//! falls back to a well-defined value instead. The variants here cover the
//! few conditions a caller has to decide about.

use thiserror::Error;

/// Errors returned by point queries against a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The series has no points to interpolate between.
    #[error("series is empty, no value can be interpolated")]
    OutOfData,
    /// The query time was NaN.
    #[error("query time is not a number")]
    NonFiniteQuery,
}

/// Errors raised while building or appending to a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// A point is older than the point before it.
    #[error("point {index} is older than its predecessor")]
    Unsorted {
        /// Index of the offending point.
        index: usize,
    },
    /// A point carries a NaN or infinite timestamp.
    #[error("point {index} has a non-finite timestamp")]
    NonFiniteTime {
        /// Index of the offending point.
        index: usize,
    },
}

/// Errors raised while loading a [`LiveChartConfig`](crate::LiveChartConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("failed to parse chart config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A field holds a value outside its valid domain.
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        /// Field name as written in the config file.
        field: &'static str,
        /// Human readable constraint that was violated.
        reason: &'static str,
    },
}
