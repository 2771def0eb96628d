use crate::error::ChartError;

use super::{Series, upper_bound};

impl Series {
    /// Value of the series at `time`, linearly interpolated between the
    /// bracketing samples.
    ///
    /// Times before the first sample or after the last one clamp to the
    /// edge values. Duplicate timestamps resolve to the later sample.
    pub fn value_at(&self, time: f64) -> Result<f64, ChartError> {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return Err(ChartError::OutOfData);
        };
        if time.is_nan() {
            return Err(ChartError::NonFiniteQuery);
        }
        if time <= first.time {
            return Ok(first.value);
        }
        if time >= last.time {
            return Ok(last.value);
        }

        // first.time < time < last.time, so 1 <= upper < len.
        let upper = upper_bound(&self.points, time);
        let p1 = self.points[upper - 1];
        let p2 = self.points[upper];
        let dt = p2.time - p1.time;
        if dt == 0.0 {
            return Ok(p1.value);
        }
        Ok(p1.value + (p2.value - p1.value) * (time - p1.time) / dt)
    }
}
