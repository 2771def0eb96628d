use std::time::{Duration, Instant};

use liveplot_core::{
    LiveChart, LiveChartConfig, ScreenPoint, ScreenRect, Series, SystemClock, TimePoint,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let duration_secs: f64 = std::env::var("DURATION_SECS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3.0);

    let config = LiveChartConfig {
        window_secs: 5.0,
        ..LiveChartConfig::default()
    };
    let mut chart = LiveChart::builder()
        .config(config)
        .clock(SystemClock)
        .plot_rect(ScreenRect::from_size(640.0, 240.0))
        .build();

    let mut series = Series::new();
    let start = Instant::now();
    let mut next_sample = Instant::now();
    let mut next_report = Instant::now();
    let mut live_value = 100.0_f64;
    let mut frames = 0_usize;

    while start.elapsed().as_secs_f64() < duration_secs {
        if next_sample.elapsed() >= Duration::from_millis(250) {
            let elapsed = start.elapsed().as_secs_f64();
            live_value = 100.0 + (elapsed * 1.7).sin() * 8.0 + elapsed;
            let now = chart_now_secs();
            if let Err(err) = series.push(TimePoint::new(now, live_value)) {
                tracing::warn!(%err, "dropped sample");
            }
            series.retain_since(now - chart.config().window_secs * 2.0);
            next_sample = Instant::now();
        }

        let snapshot = chart.tick(&series, live_value);
        frames += 1;

        if next_report.elapsed() >= Duration::from_millis(500) {
            let crosshair = snapshot
                .crosshair(ScreenPoint::new(320.0, 120.0))
                .ok()
                .flatten()
                .map(|hit| format!("{:.2}", hit.value))
                .unwrap_or_else(|| "-".to_string());
            let labels: Vec<&str> = snapshot
                .value_axis
                .ticks
                .iter()
                .map(|tick| tick.label.as_str())
                .collect();
            println!(
                "value {:>8.3}  domain [{:>8.3}, {:>8.3}]  momentum {:?}  crosshair {}  ticks {:?}",
                snapshot.frame.display_value,
                snapshot.frame.domain.min,
                snapshot.frame.domain.max,
                snapshot.momentum,
                crosshair,
                labels,
            );
            next_report = Instant::now();
        }

        std::thread::sleep(Duration::from_millis(16));
    }

    println!("live ticker complete: {frames} frames, {} samples", series.len());
}

fn chart_now_secs() -> f64 {
    use liveplot_core::Clock;
    SystemClock.now_ms() / 1000.0
}
