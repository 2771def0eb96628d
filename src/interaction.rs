//! Pointer queries against the current frame.
//!
//! A crosshair query is a pure read of a published snapshot; it never feeds
//! back into animation state.

use crate::datasource::Series;
use crate::error::ChartError;
use crate::geom::ScreenPoint;
use crate::transform::Transform;

/// Interpolated series value under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crosshair {
    /// Time under the pointer, in seconds.
    pub time: f64,
    /// Interpolated value at `time`.
    pub value: f64,
    /// Screen position of the interpolated point.
    pub screen: ScreenPoint,
}

/// Map a cursor position to the interpolated value of `series`.
///
/// Returns `Ok(None)` when the cursor is outside the plot rectangle and
/// [`ChartError::OutOfData`] when there is nothing to interpolate.
pub fn crosshair_at(
    series: &Series,
    transform: &Transform,
    cursor: ScreenPoint,
) -> Result<Option<Crosshair>, ChartError> {
    if !transform.screen().contains(cursor) {
        return Ok(None);
    }
    let time = transform.x_to_time(cursor.x);
    let value = series.value_at(time)?;
    Ok(Some(Crosshair {
        time,
        value,
        screen: transform.data_to_screen(time, value),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::ScreenRect;
    use crate::view::{Range, Viewport};

    fn transform() -> Transform {
        let viewport = Viewport::new(Range::new(0.0, 10.0), Range::new(0.0, 100.0));
        Transform::new(viewport, ScreenRect::from_size(200.0, 100.0)).unwrap()
    }

    #[test]
    fn interpolates_under_cursor() {
        let series = Series::from_pairs([(0.0, 0.0), (10.0, 100.0)]).unwrap();
        let hit = crosshair_at(&series, &transform(), ScreenPoint::new(100.0, 10.0))
            .unwrap()
            .unwrap();
        assert!((hit.time - 5.0).abs() < 1e-6);
        assert!((hit.value - 50.0).abs() < 1e-4);
        assert!((hit.screen.y - 50.0).abs() < 1e-3);
    }

    #[test]
    fn outside_plot_is_none() {
        let series = Series::from_pairs([(0.0, 0.0)]).unwrap();
        let hit = crosshair_at(&series, &transform(), ScreenPoint::new(-5.0, 10.0));
        assert_eq!(hit, Ok(None));
    }

    #[test]
    fn empty_series_surfaces_error() {
        let hit = crosshair_at(&Series::new(), &transform(), ScreenPoint::new(10.0, 10.0));
        assert_eq!(hit, Err(ChartError::OutOfData));
    }
}
