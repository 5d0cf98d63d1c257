use serde::{Deserialize, Serialize};
use vitals_core::{CardError, Result};

/// Root configuration structure parsed from `vitals.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Entity-id prefix shared by every metric source
    /// (full ids are `"<prefix>_<metric-key>"`).
    pub prefix: String,
    /// History cache behaviour.
    pub history: HistoryConfig,
    /// Sparkline canvas geometry.
    pub sparkline: SparklineConfig,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            prefix: "sensor.ring".to_string(),
            history: HistoryConfig::default(),
            sparkline: SparklineConfig::default(),
        }
    }
}

impl CardConfig {
    /// Reject configurations the card cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(CardError::Config("'prefix' must not be empty".into()));
        }
        Ok(())
    }
}

/// Cache freshness and history query window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum age of a cached series before the next access refetches.
    pub ttl_secs: u64,
    /// How far back the history query reaches.
    pub lookback_hours: u64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 300,
            lookback_hours: 24,
        }
    }
}

impl HistoryConfig {
    pub fn ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.ttl_secs)
    }

    pub fn lookback(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.lookback_hours * 60 * 60)
    }
}

/// Logical canvas the sparkline polyline is normalised into.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SparklineConfig {
    pub width: f64,
    pub height: f64,
    /// Padding kept clear above and below the line.
    pub vertical_margin: f64,
}

impl Default for SparklineConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 50.0,
            vertical_margin: 2.0,
        }
    }
}
