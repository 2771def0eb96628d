//! Coordinate transforms between data and screen space.

use crate::geom::{ScreenPoint, ScreenRect};
use crate::view::{Range, Viewport};

const MIN_SPAN: f64 = 1e-12;

/// Linear map from (time, value) into a screen rectangle.
///
/// Time grows to the right; values grow upward, so the domain minimum sits on
/// the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    viewport: Viewport,
    screen: ScreenRect,
    time_axis: Range,
    value_axis: Range,
}

impl Transform {
    /// Create a transform, or `None` if the rectangle has no area or the
    /// viewport is not finite.
    pub fn new(viewport: Viewport, screen: ScreenRect) -> Option<Self> {
        if !screen.is_valid() || !viewport.time.is_finite() || !viewport.value.is_finite() {
            return None;
        }
        Some(Self {
            viewport,
            screen,
            time_axis: viewport.time.with_min_span(MIN_SPAN),
            value_axis: viewport.value.with_min_span(MIN_SPAN),
        })
    }

    /// Access the viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Access the screen rectangle.
    pub fn screen(&self) -> ScreenRect {
        self.screen
    }

    /// Horizontal pixel position of a time.
    pub fn time_to_x(&self, time: f64) -> f32 {
        let norm = (time - self.time_axis.min) / self.time_axis.span();
        (self.screen.min.x as f64 + norm * self.screen.width() as f64) as f32
    }

    /// Vertical pixel position of a value.
    pub fn value_to_y(&self, value: f64) -> f32 {
        let norm = (value - self.value_axis.min) / self.value_axis.span();
        (self.screen.max.y as f64 - norm * self.screen.height() as f64) as f32
    }

    /// Map a data pair into screen space.
    pub fn data_to_screen(&self, time: f64, value: f64) -> ScreenPoint {
        ScreenPoint::new(self.time_to_x(time), self.value_to_y(value))
    }

    /// Time under a horizontal pixel position.
    pub fn x_to_time(&self, x: f32) -> f64 {
        let norm = (x as f64 - self.screen.min.x as f64) / self.screen.width() as f64;
        self.time_axis.min + norm * self.time_axis.span()
    }

    /// Value under a vertical pixel position.
    pub fn y_to_value(&self, y: f32) -> f64 {
        let norm = (self.screen.max.y as f64 - y as f64) / self.screen.height() as f64;
        self.value_axis.min + norm * self.value_axis.span()
    }
}
