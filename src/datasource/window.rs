use crate::geom::TimePoint;
use crate::view::Range;

use super::{Series, lower_bound, upper_bound};

impl Series {
    /// Visible slice of the series for a time window, ending in a synthetic
    /// live tip at `(live_time, live_value)`.
    ///
    /// The sample immediately before `window.min` is retained so the left
    /// edge always has a bracketing pair. Samples newer than
    /// `min(window.max, live_time)` are left out so the tip stays last and
    /// the result is still time-ordered. The tip belongs to this view only
    /// and is never written back into `self`.
    pub fn slice_window(&self, window: Range, live_time: f64, live_value: f64) -> Series {
        let limit = window.max.min(live_time);
        let end = upper_bound(&self.points, limit);
        let start = lower_bound(&self.points, window.min)
            .saturating_sub(1)
            .min(end);

        let mut points = Vec::with_capacity(end - start + 1);
        points.extend_from_slice(&self.points[start..end]);
        points.push(TimePoint::new(live_time, live_value));
        Series::from_sorted_unchecked(points)
    }

    /// Rewrite the value of the last sample, which is the live tip of a view.
    pub(crate) fn set_tip_value(&mut self, value: f64) {
        if let Some(tip) = self.points.last_mut() {
            tip.value = value;
        }
    }
}
