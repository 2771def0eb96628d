//! liveplot_core computes everything a real-time line chart needs per frame,
//! independent of any UI toolkit: the eased value domain, the visible window
//! with its live tip, tick layouts with hysteresis, momentum, and crosshair
//! lookups. Drawing is left to the host.

#![forbid(unsafe_code)]

pub mod animator;
pub mod axis;
pub mod chart;
pub mod config;
pub mod datasource;
pub mod error;
pub mod geom;
pub mod interaction;
pub mod momentum;
pub mod transform;
pub mod view;

pub use animator::{AnimationFrame, Clock, ManualClock, SystemClock, compute_target_range};
pub use axis::{AxisFormatter, AxisLayout, PixelSpan, TickSpec, grid_ticks, pick_interval};
pub use chart::{LiveChart, LiveChartBuilder, LiveSnapshot};
pub use config::{LiveChartConfig, MomentumSource};
pub use datasource::Series;
pub use error::{ChartError, ConfigError, SeriesError};
pub use geom::{ScreenPoint, ScreenRect, TimePoint};
pub use interaction::{Crosshair, crosshair_at};
pub use momentum::Momentum;
pub use transform::Transform;
pub use view::{Range, Viewport};
