use serde::Serialize;
use vitals_config::{CardConfig, SparklineConfig};
use vitals_core::{numeric_state, PlotPoint, Sample, StateSource};
use vitals_history::{HistorySource, SeriesCache};
use vitals_sparkline::normalize;

use crate::metric::{Metric, Section};
use crate::score;

/// One displayable metric: label, formatted value and sparkline coordinates.
///
/// `sparkline` is empty when the cached series holds fewer than two samples.
#[derive(Debug, Clone, Serialize)]
pub struct MetricRow {
    pub metric: Metric,
    pub label: &'static str,
    pub value: Option<f64>,
    pub display: String,
    pub sparkline: Vec<PlotPoint>,
}

/// A titled group of metric rows.
#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub title: &'static str,
    pub rows: Vec<MetricRow>,
}

/// View model for one score ring: value, arc fraction and threshold color.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreRing {
    pub metric: Metric,
    pub label: &'static str,
    pub value: Option<f64>,
    pub color: &'static str,
    /// Filled share of the ring in `[0, 1]`.
    pub fraction: f64,
}

/// View model for one card instance.
///
/// Constructed explicitly per widget — several cards on one dashboard each
/// own their own history cache and never share hidden state. The host's
/// rendering surface consumes the row/section/ring view models; this type
/// never emits markup itself.
pub struct Card<S, H: HistorySource> {
    prefix: String,
    state: S,
    history: SeriesCache<H>,
    sparkline: SparklineConfig,
}

impl<S: StateSource, H: HistorySource> Card<S, H> {
    pub fn new(state: S, source: H, config: &CardConfig) -> Self {
        Self {
            prefix: config.prefix.clone(),
            state,
            history: SeriesCache::with_windows(
                source,
                config.history.ttl(),
                config.history.lookback(),
            ),
            sparkline: config.sparkline.clone(),
        }
    }

    /// Full state key for `metric` under this card's prefix.
    pub fn entity_id(&self, metric: Metric) -> String {
        format!("{}_{}", self.prefix, metric.key())
    }

    /// Latest numeric reading for `metric`, or `None` when the host reports
    /// nothing usable.
    pub fn current(&self, metric: Metric) -> Option<f64> {
        let entity_id = self.entity_id(metric);
        numeric_state(self.state.current_value(&entity_id).as_deref())
    }

    /// Cached (or freshly fetched) historical series for `metric`.
    pub async fn series(&mut self, metric: Metric) -> Vec<Sample> {
        let entity_id = self.entity_id(metric);
        self.history.series(&entity_id).await
    }

    /// Assemble the full row view model for `metric`.
    pub async fn row(&mut self, metric: Metric) -> MetricRow {
        let value = self.current(metric);
        let samples = self.series(metric).await;
        let sparkline = normalize(
            &samples,
            self.sparkline.width,
            self.sparkline.height,
            self.sparkline.vertical_margin,
        );
        MetricRow {
            metric,
            label: metric.label(),
            value,
            display: metric.display(value),
            sparkline,
        }
    }

    pub async fn section(&mut self, section: Section) -> SectionView {
        let mut rows = Vec::with_capacity(section.metrics().len());
        for &metric in section.metrics() {
            rows.push(self.row(metric).await);
        }
        SectionView {
            title: section.title(),
            rows,
        }
    }

    pub fn score_ring(&self, metric: Metric) -> ScoreRing {
        let value = self.current(metric);
        ScoreRing {
            metric,
            label: metric.label(),
            value,
            color: score::score_color(value),
            fraction: value.map_or(0.0, |v| (v / 100.0).clamp(0.0, 1.0)),
        }
    }

    /// The sleep / recovery / movement rings, in display order.
    pub fn score_rings(&self) -> [ScoreRing; 3] {
        [
            Metric::SleepScore,
            Metric::RecoveryIndex,
            Metric::MovementIndex,
        ]
        .map(|metric| self.score_ring(metric))
    }

    /// Drop the cached history for a single metric.
    pub fn invalidate(&mut self, metric: Metric) {
        let entity_id = self.entity_id(metric);
        self.history.invalidate(&entity_id);
    }

    /// Host signalled that the data was just refreshed at the source: drop
    /// all cached history so the next render refetches instead of masking new
    /// samples behind the TTL.
    pub fn refresh(&mut self) {
        tracing::debug!("manual refresh requested; invalidating cached history");
        self.history.invalidate_all();
    }
}
