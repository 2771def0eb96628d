//! Per-frame animation of the value domain and the live value.
//!
//! Each display tick derives a fresh [`AnimationFrame`] from the previous one.
//! The domain expands instantly so real extremes are never clipped, and
//! contracts gradually so a calming stream does not make the chart jump.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::view::Range;

/// Padding fraction applied on each side of the data range.
const PAD_FRAC: f64 = 0.15;
/// Padding fraction in tight mode.
const TIGHT_PAD_FRAC: f64 = 0.03;
/// Absolute padding used when the data range is flat.
const FLAT_PAD: f64 = 10.0;
/// Absolute flat padding in tight mode.
const TIGHT_FLAT_PAD: f64 = 0.04;

/// Source of wall-clock time for the animation loop.
pub trait Clock {
    /// Current time in milliseconds.
    fn now_ms(&self) -> f64;
}

/// Wall clock reading milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

/// Clock that only moves when told to. Used for tests and replay.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Cell<f64>,
}

impl ManualClock {
    /// Create a clock reading `now_ms`.
    pub fn new(now_ms: f64) -> Self {
        Self {
            now_ms: Cell::new(now_ms),
        }
    }

    /// Set the current time.
    pub fn set(&self, now_ms: f64) {
        self.now_ms.set(now_ms);
    }

    /// Move the clock forward.
    pub fn advance(&self, delta_ms: f64) {
        self.now_ms.set(self.now_ms.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }
}

/// Animated state at one tick of the render loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// Simulated "now" in milliseconds. Frozen while paused.
    pub simulated_now_ms: f64,
    /// Eased value domain.
    pub domain: Range,
    /// Eased live value shown by the value pointer.
    pub display_value: f64,
}

impl AnimationFrame {
    /// First frame: sits exactly on the target.
    pub fn settled(target: Range, value: f64, now_ms: f64) -> Self {
        Self {
            simulated_now_ms: now_ms,
            domain: target,
            display_value: value,
        }
    }

    /// Simulated "now" in seconds, the unit of series timestamps.
    pub fn simulated_now_secs(&self) -> f64 {
        self.simulated_now_ms / 1000.0
    }

    /// Derive the next frame.
    ///
    /// `now_ms` is ignored when `paused`. An `ease_speed` outside `(0, 1]`
    /// is treated as `1.0`. Non-finite targets leave the corresponding field
    /// where it was.
    pub fn next(
        &self,
        target: Range,
        target_value: f64,
        ease_speed: f64,
        paused: bool,
        now_ms: f64,
    ) -> Self {
        let ease = sanitize_ease(ease_speed);
        let simulated_now_ms = if paused {
            self.simulated_now_ms
        } else {
            now_ms
        };

        let min = if target.min < self.domain.min {
            target.min
        } else {
            ease_toward(self.domain.min, target.min, ease)
        };
        let max = if target.max > self.domain.max {
            target.max
        } else {
            ease_toward(self.domain.max, target.max, ease)
        };

        Self {
            simulated_now_ms,
            domain: Range { min, max },
            display_value: ease_toward(self.display_value, target_value, ease),
        }
    }
}

fn sanitize_ease(ease_speed: f64) -> f64 {
    if ease_speed > 0.0 && ease_speed <= 1.0 {
        ease_speed
    } else {
        1.0
    }
}

fn ease_toward(current: f64, target: f64, ease: f64) -> f64 {
    if !target.is_finite() {
        return current;
    }
    if ease >= 1.0 || !current.is_finite() {
        return target;
    }
    current + (target - current) * ease
}

/// Un-eased domain implied by `values` and the live value, padded on both
/// sides.
///
/// A flat range gets a fixed absolute pad instead of zero padding. Non-finite
/// values are ignored; with nothing finite left the range is centered on 0.
pub fn compute_target_range<I>(values: I, live_value: f64, tight: bool) -> Range
where
    I: IntoIterator<Item = f64>,
{
    let bounds = Range::from_values(values.into_iter().chain(std::iter::once(live_value)))
        .unwrap_or(Range::point(0.0));
    let span = bounds.span();
    let padding = if span == 0.0 {
        if tight { TIGHT_FLAT_PAD } else { FLAT_PAD }
    } else {
        span * if tight { TIGHT_PAD_FRAC } else { PAD_FRAC }
    };
    bounds.padded_by(padding)
}
