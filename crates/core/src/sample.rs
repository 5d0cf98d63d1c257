use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observation of a metric: a timestamp and a numeric value.
///
/// Samples are produced only by converting [`RawSample`]s returned from the
/// host's history query; the engine never builds them from user input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// The wire shape the host's history query returns: the value is still the
/// raw state string and may not be numeric at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSample {
    pub timestamp: DateTime<Utc>,
    pub state: String,
}

impl RawSample {
    pub fn new(timestamp: DateTime<Utc>, state: impl Into<String>) -> Self {
        Self {
            timestamp,
            state: state.into(),
        }
    }

    /// Interpret the raw state as a [`Sample`], or `None` when the state is
    /// not a finite number. Callers drop the `None`s silently — a malformed
    /// entry is never an error, it just doesn't plot.
    pub fn to_sample(&self) -> Option<Sample> {
        let value = self.state.trim().parse::<f64>().ok()?;
        value.is_finite().then(|| Sample::new(self.timestamp, value))
    }
}

/// A normalized 2-D coordinate inside a fixed logical canvas.
///
/// Derived and stateless — recomputed from the cached series on every render,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}
