//! Tick interval selection, grid ticks, and axis label layout.

use std::sync::Arc;

use crate::view::Range;

/// Pixel spacing band, as multiples of the minimum gap, inside which a
/// previous interval is kept.
const HYSTERESIS_BAND: (f64, f64) = (0.5, 3.0);

/// Rotations of the 2 / 2.5 / 2 stepping applied from a power of ten.
const DIVISOR_CYCLES: [[f64; 3]; 3] = [[2.0, 2.5, 2.0], [2.0, 2.0, 2.5], [2.5, 2.0, 2.0]];

/// Upper bound on divisions per cycle, so the search terminates even when the
/// gap test never fails (subnormal pixel scales).
const MAX_DIVISIONS: usize = 64;

/// Upper bound on ticks emitted for a single axis.
const MAX_TICKS: usize = 512;

/// Pick a "nice" tick interval for `value_range` spread over `pixel_extent`
/// pixels, keeping ticks at least `min_pixel_gap` apart.
///
/// `previous_interval` is the value this function returned last frame (or
/// `0.0` on the first call). It is returned unchanged while the spacing it
/// produces stays within `[0.5, 3] * min_pixel_gap`, so a gently moving
/// domain does not reflow ticks every frame.
pub fn pick_interval(
    value_range: f64,
    pixel_extent: f64,
    min_pixel_gap: f64,
    previous_interval: f64,
) -> f64 {
    if !(value_range > 0.0 && value_range.is_finite())
        || !(pixel_extent > 0.0 && pixel_extent.is_finite())
    {
        return 1.0;
    }
    let px_per_unit = pixel_extent / value_range;

    if previous_interval > 0.0 && previous_interval.is_finite() {
        let spacing = previous_interval * px_per_unit;
        if spacing >= min_pixel_gap * HYSTERESIS_BAND.0
            && spacing <= min_pixel_gap * HYSTERESIS_BAND.1
        {
            return previous_interval;
        }
    }

    if !(min_pixel_gap > 0.0 && min_pixel_gap.is_finite()) {
        return value_range / 5.0;
    }

    let top = 10_f64.powf(value_range.log10().ceil());
    let mut best = f64::INFINITY;
    for cycle in &DIVISOR_CYCLES {
        let mut span = top;
        for step in 0..MAX_DIVISIONS {
            let next = span / cycle[step % cycle.len()];
            if next * px_per_unit < min_pixel_gap {
                break;
            }
            span = next;
        }
        best = best.min(span);
    }

    if best.is_finite() && best > 0.0 {
        best
    } else {
        value_range / 5.0
    }
}

/// Human friendly grid ticks between `min` and `max` using 1/2/5 x 10^n steps.
///
/// Returns an ascending list of multiples of the chosen step that fall
/// inside `[min, max]`, or nothing for an empty or inverted domain.
pub fn grid_ticks(min: f64, max: f64, desired_count: usize) -> Vec<f64> {
    let span = max - min;
    if !(span > 0.0 && span.is_finite()) || desired_count == 0 {
        return Vec::new();
    }
    let raw_step = span / desired_count as f64;
    let magnitude = 10_f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let nice = if residual <= 1.5 {
        1.0
    } else if residual <= 3.0 {
        2.0
    } else if residual <= 7.0 {
        5.0
    } else {
        10.0
    };
    multiples_within(Range::new(min, max), nice * magnitude)
}

/// Every multiple of `step` inside `range`, ascending.
pub(crate) fn multiples_within(range: Range, step: f64) -> Vec<f64> {
    if !(step > 0.0 && step.is_finite()) || !range.is_finite() {
        return Vec::new();
    }
    let tolerance = step * 1e-9;
    let first = ((range.min - tolerance) / step).ceil();
    let last = ((range.max + tolerance) / step).floor();
    if !(first.is_finite() && last.is_finite()) || last < first {
        return Vec::new();
    }
    let steps = last - first;
    if !(steps < MAX_TICKS as f64) {
        tracing::debug!(steps, step, "tick count exceeds limit, skipping axis");
        return Vec::new();
    }
    let count = steps as usize + 1;
    (0..count)
        // `+ 0.0` turns -0.0 into 0.0.
        .map(|i| range.clamp((first + i as f64) * step) + 0.0)
        .collect()
}

/// A labeled tick at a data value and its pixel position along the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSpec {
    /// Data value of the tick.
    pub value: f64,
    /// Position along the axis in pixels.
    pub pixel_position: f32,
    /// Formatted label.
    pub label: String,
}

/// Pixel positions that an axis range maps onto.
///
/// `start` receives the range minimum and `end` the maximum, so a value axis
/// drawn bottom-up uses `start > end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSpan {
    /// Pixel position of the range minimum.
    pub start: f32,
    /// Pixel position of the range maximum.
    pub end: f32,
}

impl PixelSpan {
    /// Create a pixel span.
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Length of the span in pixels.
    pub fn extent(&self) -> f32 {
        (self.end - self.start).abs()
    }

    fn map(&self, range: Range, value: f64) -> f32 {
        let span = range.span();
        if span <= 0.0 {
            return self.start;
        }
        let norm = (value - range.min) / span;
        self.start + (norm * (self.end - self.start) as f64) as f32
    }
}

/// Tick layout for one axis, plus the interval to thread into the next frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisLayout {
    /// Interval between ticks. Pass back as `previous_interval` next frame.
    pub interval: f64,
    /// Ticks in ascending value order.
    pub ticks: Vec<TickSpec>,
}

impl AxisLayout {
    /// Lay out ticks for `range` across `pixels`.
    pub fn compute(
        range: Range,
        pixels: PixelSpan,
        min_pixel_gap: f64,
        previous_interval: f64,
        formatter: &AxisFormatter,
    ) -> Self {
        let interval = pick_interval(
            range.span(),
            pixels.extent() as f64,
            min_pixel_gap,
            previous_interval,
        );
        if interval != previous_interval {
            tracing::debug!(
                previous = previous_interval,
                interval,
                span = range.span(),
                "axis interval changed"
            );
        }
        let ticks = multiples_within(range, interval)
            .into_iter()
            .map(|value| TickSpec {
                value,
                pixel_position: pixels.map(range, value),
                label: formatter.format(value, interval),
            })
            .collect();
        Self { interval, ticks }
    }
}

/// Formatter for axis tick labels.
#[derive(Clone, Default)]
pub enum AxisFormatter {
    /// Plain number with as many decimals as the interval needs.
    #[default]
    Value,
    /// Seconds since the Unix epoch rendered as `HH:MM:SS` UTC.
    Time,
    /// Custom formatter callback receiving the value and the interval.
    Custom(Arc<dyn Fn(f64, f64) -> String + Send + Sync>),
}

impl AxisFormatter {
    /// Format a tick value drawn at the given interval.
    pub fn format(&self, value: f64, interval: f64) -> String {
        match self {
            Self::Value => {
                let decimals = decimals_for(interval);
                format!("{value:.decimals$}")
            }
            Self::Time => format_clock_time(value, interval),
            Self::Custom(formatter) => formatter(value, interval),
        }
    }
}

impl std::fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value => write!(f, "AxisFormatter::Value"),
            Self::Time => write!(f, "AxisFormatter::Time"),
            Self::Custom(_) => write!(f, "AxisFormatter::Custom(..)"),
        }
    }
}

/// Fewest decimal places that print every multiple of `interval` exactly.
fn decimals_for(interval: f64) -> usize {
    if !(interval > 0.0 && interval.is_finite()) {
        return 0;
    }
    let mut scaled = interval;
    for decimals in 0..8 {
        if (scaled - scaled.round()).abs() <= scaled.abs() * 1e-9 {
            return decimals;
        }
        scaled *= 10.0;
    }
    8
}

/// `HH:MM:SS`, with as many fractional digits (up to milliseconds) as the
/// interval needs.
fn format_clock_time(seconds: f64, interval: f64) -> String {
    if !seconds.is_finite() {
        return String::new();
    }
    let millis = (seconds * 1000.0).round() as i64;
    let Some(time) = chrono::DateTime::from_timestamp_millis(millis) else {
        return format!("{seconds:.0}s");
    };
    let clock = time.format("%H:%M:%S");
    match decimals_for(interval).min(3) {
        0 => clock.to_string(),
        digits => {
            let fraction = millis.rem_euclid(1000) / 10_i64.pow(3 - digits as u32);
            format!("{clock}.{fraction:0digits$}")
        }
    }
}
