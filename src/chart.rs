//! Live chart entry point: the per-tick pipeline and its builder.
//!
//! [`LiveChart`] is the single writer of animation state. Every call to
//! [`LiveChart::tick`] publishes an immutable [`LiveSnapshot`] that renderers
//! and pointer queries read from.

use crate::animator::{AnimationFrame, Clock, SystemClock, compute_target_range};
use crate::axis::{AxisFormatter, AxisLayout, PixelSpan, grid_ticks};
use crate::config::{LiveChartConfig, MomentumSource};
use crate::datasource::Series;
use crate::error::ChartError;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::interaction::{Crosshair, crosshair_at};
use crate::momentum::Momentum;
use crate::transform::Transform;
use crate::view::{Range, Viewport};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveSnapshot {
    /// Eased animation state.
    pub frame: AnimationFrame,
    /// Un-eased domain the frame is moving toward.
    pub target: Range,
    /// Visible time window in seconds.
    pub window: Range,
    /// Windowed series ending in the live tip.
    pub visible: Series,
    /// Value-axis ticks over the eased domain.
    pub value_axis: AxisLayout,
    /// Time-axis ticks over the window.
    pub time_axis: AxisLayout,
    /// Grid line values over the eased domain.
    pub grid: Vec<f64>,
    /// Trend of the recent samples.
    pub momentum: Momentum,
    /// Plot area the pixel positions refer to.
    pub plot_rect: ScreenRect,
}

impl LiveSnapshot {
    /// Time window and eased domain.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.window, self.frame.domain)
    }

    /// Data-to-screen mapping for this frame, if the plot area has size.
    pub fn transform(&self) -> Option<Transform> {
        Transform::new(self.viewport(), self.plot_rect)
    }

    /// Interpolated value of the visible series at `time`.
    pub fn value_at(&self, time: f64) -> Result<f64, ChartError> {
        self.visible.value_at(time)
    }

    /// Crosshair under `cursor`, or `None` outside the plot area.
    pub fn crosshair(&self, cursor: ScreenPoint) -> Result<Option<Crosshair>, ChartError> {
        let Some(transform) = self.transform() else {
            return Ok(None);
        };
        crosshair_at(&self.visible, &transform, cursor)
    }
}

/// Streaming line chart core.
///
/// Holds the current animation frame and the hysteresis state of both axes.
/// The host calls [`tick`](Self::tick) once per display refresh.
#[derive(Debug)]
pub struct LiveChart<C = SystemClock> {
    config: LiveChartConfig,
    clock: C,
    plot_rect: ScreenRect,
    value_formatter: AxisFormatter,
    time_formatter: AxisFormatter,
    frame: Option<AnimationFrame>,
    value_interval: f64,
    time_interval: f64,
    paused: bool,
}

impl LiveChart<SystemClock> {
    /// Create a chart driven by the system clock.
    pub fn new(config: LiveChartConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Start building a chart with custom configuration.
    pub fn builder() -> LiveChartBuilder {
        LiveChartBuilder::default()
    }
}

impl<C: Clock> LiveChart<C> {
    /// Advance one frame and publish its snapshot.
    pub fn tick(&mut self, series: &Series, live_value: f64) -> LiveSnapshot {
        let now_ms = match self.frame {
            Some(frame) if self.paused => frame.simulated_now_ms,
            _ => self.clock.now_ms(),
        };
        let now = now_ms / 1000.0;
        let window = Range::window_ending_at(now, self.config.window_secs);

        let mut visible = series.slice_window(window, now, live_value);
        let target = compute_target_range(visible.values(), live_value, self.config.tight);
        let frame = match self.frame {
            None => AnimationFrame::settled(target, live_value, now_ms),
            Some(prev) => prev.next(
                target,
                live_value,
                self.config.ease_speed,
                self.paused,
                now_ms,
            ),
        };
        self.frame = Some(frame);
        visible.set_tip_value(frame.display_value);

        let (value_axis, time_axis) = self.layout_axes(frame.domain, window);
        let grid = grid_ticks(
            frame.domain.min,
            frame.domain.max,
            self.config.grid_tick_count,
        );

        let momentum = match self.config.momentum_source {
            MomentumSource::Visible => Momentum::classify(&visible, self.config.momentum_lookback),
            MomentumSource::Full => {
                let full = series.slice_window(
                    Range::new(f64::NEG_INFINITY, now),
                    now,
                    frame.display_value,
                );
                Momentum::classify(&full, self.config.momentum_lookback)
            }
        };

        tracing::trace!(
            now_ms,
            min = frame.domain.min,
            max = frame.domain.max,
            value = frame.display_value,
            visible = visible.len(),
            ?momentum,
            "tick"
        );

        LiveSnapshot {
            frame,
            target,
            window,
            visible,
            value_axis,
            time_axis,
            grid,
            momentum,
            plot_rect: self.plot_rect,
        }
    }

    fn layout_axes(&mut self, domain: Range, window: Range) -> (AxisLayout, AxisLayout) {
        let rect = self.plot_rect;
        if !rect.is_valid() {
            return (AxisLayout::default(), AxisLayout::default());
        }
        let value_axis = AxisLayout::compute(
            domain,
            PixelSpan::new(rect.max.y, rect.min.y),
            self.config.min_tick_gap_px,
            self.value_interval,
            &self.value_formatter,
        );
        let time_axis = AxisLayout::compute(
            window,
            PixelSpan::new(rect.min.x, rect.max.x),
            self.config.min_time_tick_gap_px,
            self.time_interval,
            &self.time_formatter,
        );
        self.value_interval = value_axis.interval;
        self.time_interval = time_axis.interval;
        (value_axis, time_axis)
    }

    /// Freeze or resume the simulated clock.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            tracing::debug!(paused, "live chart pause toggled");
        }
        self.paused = paused;
    }

    /// Check whether the simulated clock is frozen.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Drop animation and hysteresis state; the next tick settles on its target.
    pub fn reset(&mut self) {
        self.frame = None;
        self.value_interval = 0.0;
        self.time_interval = 0.0;
    }

    /// Set the plot area tick positions and crosshairs refer to.
    pub fn set_plot_rect(&mut self, rect: ScreenRect) {
        self.plot_rect = rect;
    }

    /// Access the most recent frame.
    pub fn frame(&self) -> Option<AnimationFrame> {
        self.frame
    }

    /// Access the configuration.
    pub fn config(&self) -> &LiveChartConfig {
        &self.config
    }

    /// Access the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl Default for LiveChart<SystemClock> {
    fn default() -> Self {
        Self::new(LiveChartConfig::default())
    }
}

/// Builder for configuring a live chart before construction.
#[derive(Debug, Default)]
pub struct LiveChartBuilder<C = SystemClock> {
    config: LiveChartConfig,
    clock: C,
    plot_rect: ScreenRect,
    value_formatter: AxisFormatter,
    time_formatter: Option<AxisFormatter>,
}

impl<C: Clock> LiveChartBuilder<C> {
    /// Set the configuration.
    pub fn config(mut self, config: LiveChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the clock driving the chart.
    pub fn clock<D: Clock>(self, clock: D) -> LiveChartBuilder<D> {
        LiveChartBuilder {
            config: self.config,
            clock,
            plot_rect: self.plot_rect,
            value_formatter: self.value_formatter,
            time_formatter: self.time_formatter,
        }
    }

    /// Set the plot area.
    pub fn plot_rect(mut self, rect: ScreenRect) -> Self {
        self.plot_rect = rect;
        self
    }

    /// Set the value-axis label formatter.
    pub fn value_formatter(mut self, formatter: AxisFormatter) -> Self {
        self.value_formatter = formatter;
        self
    }

    /// Set the time-axis label formatter. Defaults to [`AxisFormatter::Time`].
    pub fn time_formatter(mut self, formatter: AxisFormatter) -> Self {
        self.time_formatter = Some(formatter);
        self
    }

    /// Build the chart.
    pub fn build(self) -> LiveChart<C> {
        LiveChart {
            config: self.config,
            clock: self.clock,
            plot_rect: self.plot_rect,
            value_formatter: self.value_formatter,
            time_formatter: self.time_formatter.unwrap_or(AxisFormatter::Time),
            frame: None,
            value_interval: 0.0,
            time_interval: 0.0,
            paused: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::ManualClock;
    use crate::geom::TimePoint;

    fn chart(ease_speed: f64, window_secs: f64, now_ms: f64) -> LiveChart<ManualClock> {
        let config = LiveChartConfig {
            ease_speed,
            window_secs,
            ..LiveChartConfig::default()
        };
        LiveChart::builder()
            .config(config)
            .clock(ManualClock::new(now_ms))
            .plot_rect(ScreenRect::from_size(300.0, 200.0))
            .build()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{actual} != {expected}"
        );
    }

    #[test]
    fn instant_ease_snaps_to_padded_target() {
        let series = Series::from_pairs([(0.0, 10.0), (1.0, 12.0), (2.0, 11.0)]).unwrap();
        let mut chart = chart(1.0, 3.0, 2_000.0);
        chart.tick(&series, 50.0);

        chart.clock().set(3_000.0);
        let snapshot = chart.tick(&series, 13.0);

        assert_eq!(snapshot.window, Range::new(0.0, 3.0));
        assert_close(snapshot.target.min, 9.55);
        assert_close(snapshot.target.max, 13.45);
        assert_eq!(snapshot.frame.domain, snapshot.target);
        assert_eq!(snapshot.frame.display_value, 13.0);
        assert_eq!(snapshot.visible.len(), 4);
        assert_eq!(snapshot.visible.last(), Some(TimePoint::new(3.0, 13.0)));
        // Four samples are below the momentum history minimum.
        assert_eq!(snapshot.momentum, Momentum::Flat);
    }

    #[test]
    fn rising_window_with_enough_history_is_up() {
        let series =
            Series::from_pairs([(-1.0, 10.0), (0.0, 10.0), (1.0, 12.0), (2.0, 11.0)]).unwrap();
        let mut chart = chart(1.0, 3.0, 3_000.0);
        let snapshot = chart.tick(&series, 13.0);
        assert_eq!(snapshot.visible.len(), 5);
        assert_eq!(snapshot.momentum, Momentum::Up);
    }

    #[test]
    fn first_tick_settles() {
        let series = Series::from_pairs([(0.0, 1.0), (1.0, 3.0)]).unwrap();
        let mut chart = chart(0.1, 10.0, 1_000.0);
        let snapshot = chart.tick(&series, 2.0);
        assert_eq!(snapshot.frame.domain, snapshot.target);
        assert_eq!(snapshot.frame.display_value, 2.0);
    }

    #[test]
    fn contraction_is_gradual_across_ticks() {
        let series = Series::from_pairs([(0.0, 0.0), (1.0, 100.0)]).unwrap();
        let mut chart = chart(0.5, 10.0, 1_000.0);
        let wide = chart.tick(&series, 50.0);

        let calm = Series::from_pairs([(0.0, 50.0), (1.0, 51.0)]).unwrap();
        chart.clock().advance(16.0);
        let next = chart.tick(&calm, 50.0);
        assert!(next.frame.domain.max < wide.frame.domain.max);
        assert!(next.frame.domain.max > next.target.max);
        assert_close(
            next.frame.domain.max,
            wide.frame.domain.max + (next.target.max - wide.frame.domain.max) * 0.5,
        );
    }

    #[test]
    fn pause_freezes_window_and_keeps_buffered_data_out() {
        let mut series = Series::from_pairs([(0.0, 1.0), (1.0, 2.0)]).unwrap();
        let mut chart = chart(0.5, 5.0, 1_000.0);
        chart.tick(&series, 2.0);

        chart.set_paused(true);
        chart.clock().set(4_000.0);
        series.push(TimePoint::new(3.0, 9.0)).unwrap();
        let snapshot = chart.tick(&series, 9.0);

        assert!(chart.is_paused());
        assert_eq!(snapshot.frame.simulated_now_ms, 1_000.0);
        assert_eq!(snapshot.window.max, 1.0);
        assert!(snapshot.visible.points().iter().all(|p| p.time <= 1.0));

        chart.set_paused(false);
        let resumed = chart.tick(&series, 9.0);
        assert_eq!(resumed.frame.simulated_now_ms, 4_000.0);
        assert!(resumed.visible.points().iter().any(|p| p.time == 3.0));
    }

    #[test]
    fn value_interval_is_stable_across_small_changes() {
        let mut chart = chart(0.2, 10.0, 10_000.0);
        let series = Series::from_pairs([(1.0, 100.0), (5.0, 140.0)]).unwrap();
        let first = chart.tick(&series, 120.0);
        let mut interval = first.value_axis.interval;
        assert!(interval > 0.0);
        for step in 0..30 {
            chart.clock().advance(16.0);
            let wobble = if step % 2 == 0 { 121.0 } else { 119.0 };
            let snapshot = chart.tick(&series, wobble);
            assert_eq!(snapshot.value_axis.interval, interval);
            interval = snapshot.value_axis.interval;
        }
    }

    #[test]
    fn axes_and_grid_cover_domain() {
        let series = Series::from_pairs([(0.0, 0.0), (5.0, 100.0)]).unwrap();
        let mut chart = chart(1.0, 10.0, 10_000.0);
        let snapshot = chart.tick(&series, 50.0);
        let domain = snapshot.frame.domain;

        assert!(!snapshot.value_axis.ticks.is_empty());
        assert!(snapshot.value_axis.ticks.iter().all(|t| domain.contains(t.value)));
        assert!(snapshot.value_axis.ticks.iter().all(|t| {
            t.pixel_position >= 0.0 && t.pixel_position <= 200.0
        }));
        assert!(!snapshot.time_axis.ticks.is_empty());
        assert!(snapshot.time_axis.ticks.iter().all(|t| snapshot.window.contains(t.value)));
        assert!(!snapshot.grid.is_empty());
        assert!(snapshot.grid.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn zero_sized_plot_skips_axes() {
        let series = Series::from_pairs([(0.0, 0.0), (5.0, 100.0)]).unwrap();
        let mut chart = LiveChart::builder()
            .clock(ManualClock::new(10_000.0))
            .build();
        let snapshot = chart.tick(&series, 50.0);
        assert!(snapshot.value_axis.ticks.is_empty());
        assert!(snapshot.time_axis.ticks.is_empty());
        assert_eq!(snapshot.crosshair(ScreenPoint::new(0.0, 0.0)), Ok(None));
    }

    #[test]
    fn near_max_values_tick_without_value_ticks() {
        let series = Series::from_pairs([(0.0, -0.85e308), (1.0, 0.85e308)]).unwrap();
        let mut chart = chart(0.08, 30.0, 1_000.0);
        let snapshot = chart.tick(&series, 0.0);
        // Padding keeps both bounds finite but the span overflows.
        assert!(snapshot.frame.domain.is_finite());
        assert_eq!(snapshot.frame.domain.span(), f64::INFINITY);
        assert!(snapshot.value_axis.ticks.is_empty());
        assert!(snapshot.grid.is_empty());
        assert!(!snapshot.time_axis.ticks.is_empty());

        chart.clock().set(2_000.0);
        let snapshot = chart.tick(&series, 0.85e308);
        assert!(snapshot.value_axis.ticks.is_empty());
    }

    #[test]
    fn crosshair_reads_visible_series() {
        let series = Series::from_pairs([(0.0, 0.0), (10.0, 100.0)]).unwrap();
        let mut chart = chart(1.0, 10.0, 10_000.0);
        let snapshot = chart.tick(&series, 100.0);
        let hit = snapshot
            .crosshair(ScreenPoint::new(150.0, 100.0))
            .unwrap()
            .unwrap();
        assert!((hit.time - 5.0).abs() < 1e-4);
        assert!((hit.value - 50.0).abs() < 1e-2);
        let outside = snapshot.crosshair(ScreenPoint::new(400.0, 100.0));
        assert_eq!(outside, Ok(None));
    }

    #[test]
    fn full_momentum_source_sees_history_outside_window() {
        let points = (0..20).map(|i| (i as f64, if i < 15 { 0.0 } else { (i - 14) as f64 }));
        let series = Series::from_pairs(points).unwrap();
        let config = LiveChartConfig {
            window_secs: 2.0,
            ease_speed: 1.0,
            momentum_source: MomentumSource::Full,
            ..LiveChartConfig::default()
        };
        let mut chart = LiveChart::builder()
            .config(config)
            .clock(ManualClock::new(20_000.0))
            .build();
        let snapshot = chart.tick(&series, 6.0);
        // Windowed slice is four samples long, the full series is twenty-one.
        assert_eq!(snapshot.visible.len(), 4);
        assert_eq!(snapshot.momentum, Momentum::Up);
    }

    #[test]
    fn reset_resettles_next_tick() {
        let series = Series::from_pairs([(0.0, 0.0), (1.0, 100.0)]).unwrap();
        let mut chart = chart(0.1, 10.0, 1_000.0);
        chart.tick(&series, 50.0);
        chart.reset();
        assert!(chart.frame().is_none());
        let calm = Series::from_pairs([(0.0, 50.0), (1.0, 51.0)]).unwrap();
        let snapshot = chart.tick(&calm, 50.0);
        assert_eq!(snapshot.frame.domain, snapshot.target);
    }
}
