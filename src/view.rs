//! Numeric ranges, time windows, and the visible viewport.

/// Numeric range with inclusive bounds.
///
/// Serves as the Y domain of an animation frame, the un-eased target range,
/// and the visible time window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Create a range that covers a single value.
    pub fn point(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// The time window of `length` seconds that ends at `end`.
    pub fn window_ending_at(end: f64, length: f64) -> Self {
        Self::new(end - length.max(0.0), end)
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether the range has positive span and finite bounds.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.span() > 0.0
    }

    /// Check whether a value lies inside the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Expand the range to include a value.
    pub fn expand_to_include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Build the tightest range over the finite values of an iterator.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut range: Option<Self> = None;
        for value in values.into_iter().filter(|value| value.is_finite()) {
            match range.as_mut() {
                None => range = Some(Self::point(value)),
                Some(existing) => existing.expand_to_include(value),
            }
        }
        range
    }

    /// Clamp a value into the range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Pad both sides by the same absolute amount.
    pub fn padded_by(&self, padding: f64) -> Self {
        Self {
            min: self.min - padding,
            max: self.max + padding,
        }
    }

    /// Ensure the range has at least the given span.
    pub fn with_min_span(&self, min_span: f64) -> Self {
        let span = self.span();
        if span >= min_span {
            return *self;
        }
        let center = (self.min + self.max) * 0.5;
        let half = min_span * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }
}

/// Visible data ranges: the time window on X and the value domain on Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Time window in seconds.
    pub time: Range,
    /// Value domain.
    pub value: Range,
}

impl Viewport {
    /// Create a viewport from a time window and a value domain.
    pub fn new(time: Range, value: Range) -> Self {
        Self { time, value }
    }
}
