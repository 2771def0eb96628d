//! Chart configuration and loading.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::momentum::DEFAULT_LOOKBACK;

/// Which series momentum is classified over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentumSource {
    /// The windowed slice including the live tip.
    #[default]
    Visible,
    /// The caller's whole series followed by the live tip.
    Full,
}

/// Tunables for a [`LiveChart`](crate::LiveChart).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LiveChartConfig {
    /// Visible time window in seconds.
    pub window_secs: f64,
    /// Fraction of the remaining distance covered per frame, in `(0, 1]`.
    pub ease_speed: f64,
    /// Use tight padding around the data.
    pub tight: bool,
    /// Trailing samples considered for momentum.
    pub momentum_lookback: usize,
    /// Series momentum is classified over.
    pub momentum_source: MomentumSource,
    /// Minimum gap between value-axis ticks in pixels.
    pub min_tick_gap_px: f64,
    /// Minimum gap between time-axis ticks in pixels.
    pub min_time_tick_gap_px: f64,
    /// Desired number of grid lines.
    pub grid_tick_count: usize,
}

impl Default for LiveChartConfig {
    fn default() -> Self {
        Self {
            window_secs: 30.0,
            ease_speed: 0.08,
            tight: false,
            momentum_lookback: DEFAULT_LOOKBACK,
            momentum_source: MomentumSource::Visible,
            min_tick_gap_px: 36.0,
            min_time_tick_gap_px: 80.0,
            grid_tick_count: 5,
        }
    }
}

impl LiveChartConfig {
    /// Parse and validate a TOML document. Missing fields take defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        tracing::debug!(?config, "loaded chart config");
        Ok(config)
    }

    /// Check every field against its valid domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.window_secs > 0.0 && self.window_secs.is_finite()) {
            return Err(invalid("window_secs", "must be a positive number of seconds"));
        }
        if !(self.ease_speed > 0.0 && self.ease_speed <= 1.0) {
            return Err(invalid("ease_speed", "must be in (0, 1]"));
        }
        if self.momentum_lookback == 0 {
            return Err(invalid("momentum_lookback", "must be at least 1"));
        }
        if !(self.min_tick_gap_px > 0.0 && self.min_tick_gap_px.is_finite()) {
            return Err(invalid("min_tick_gap_px", "must be a positive pixel count"));
        }
        if !(self.min_time_tick_gap_px > 0.0 && self.min_time_tick_gap_px.is_finite()) {
            return Err(invalid(
                "min_time_tick_gap_px",
                "must be a positive pixel count",
            ));
        }
        if self.grid_tick_count == 0 {
            return Err(invalid("grid_tick_count", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(LiveChartConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = LiveChartConfig::from_toml_str(
            r#"
            window_secs = 60.0
            tight = true
            momentum_source = "full"
            "#,
        )
        .unwrap();
        assert_eq!(config.window_secs, 60.0);
        assert!(config.tight);
        assert_eq!(config.momentum_source, MomentumSource::Full);
        assert_eq!(config.ease_speed, 0.08);
        assert_eq!(config.grid_tick_count, 5);
    }

    #[test]
    fn rejects_out_of_range_ease() {
        let err = LiveChartConfig::from_toml_str("ease_speed = 1.5").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "ease_speed",
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = LiveChartConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
