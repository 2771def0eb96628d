//! Time-ordered series storage and range queries.
//!
//! A [`Series`] is the caller's stream buffer. It keeps its points sorted by
//! time at all times, which is what makes the binary searches behind
//! interpolation and window slicing valid.

mod interpolate;
mod window;

use crate::error::SeriesError;
use crate::geom::TimePoint;
use crate::view::Range;

/// Time-ascending sequence of samples. Equal timestamps are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    points: Vec<TimePoint>,
}

impl Series {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from points, validating the time ordering.
    pub fn from_points<I>(points: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = TimePoint>,
    {
        let points: Vec<TimePoint> = points.into_iter().collect();
        for (index, point) in points.iter().enumerate() {
            if !point.time.is_finite() {
                return Err(SeriesError::NonFiniteTime { index });
            }
            if index > 0 && point.time < points[index - 1].time {
                return Err(SeriesError::Unsorted { index });
            }
        }
        Ok(Self { points })
    }

    /// Build a series from `(time, value)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::from_points(pairs.into_iter().map(TimePoint::from))
    }

    /// Wrap points the core already knows to be sorted.
    pub(crate) fn from_sorted_unchecked(points: Vec<TimePoint>) -> Self {
        debug_assert!(!points.windows(2).any(|pair| pair[0].time > pair[1].time));
        Self { points }
    }

    /// Append a sample. Samples older than the current tail are rejected.
    pub fn push(&mut self, point: TimePoint) -> Result<usize, SeriesError> {
        let index = self.points.len();
        if !point.time.is_finite() {
            return Err(SeriesError::NonFiniteTime { index });
        }
        if let Some(last) = self.points.last() {
            if point.time < last.time {
                return Err(SeriesError::Unsorted { index });
            }
        }
        self.points.push(point);
        Ok(index)
    }

    /// Drop samples older than `time`, keeping the one sample just before it.
    ///
    /// Returns the number of samples removed.
    pub fn retain_since(&mut self, time: f64) -> usize {
        let start = lower_bound(&self.points, time).saturating_sub(1);
        self.points.drain(..start);
        start
    }

    /// Access all points as a slice.
    pub fn points(&self) -> &[TimePoint] {
        &self.points
    }

    /// First sample, if any.
    pub fn first(&self) -> Option<TimePoint> {
        self.points.first().copied()
    }

    /// Last sample, if any.
    pub fn last(&self) -> Option<TimePoint> {
        self.points.last().copied()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over sample values in time order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|point| point.value)
    }

    /// Min/max over the finite sample values.
    pub fn value_range(&self) -> Option<Range> {
        Range::from_values(self.values())
    }
}

/// First index whose time is not less than `target`.
pub(crate) fn lower_bound(points: &[TimePoint], target: f64) -> usize {
    points.partition_point(|point| point.time < target)
}

/// First index whose time is greater than `target`.
pub(crate) fn upper_bound(points: &[TimePoint], target: f64) -> usize {
    points.partition_point(|point| point.time <= target)
}
