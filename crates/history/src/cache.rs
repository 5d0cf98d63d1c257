use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use tokio::time::Instant;
use vitals_core::Sample;

use crate::source::HistorySource;

/// Default freshness window for a cached series.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Default history window requested from the source.
pub const DEFAULT_LOOKBACK: Duration = Duration::from_secs(24 * 60 * 60);

/// What happened on one cache miss, reported to the optional observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The source answered; `kept` samples were cached, `dropped` raw entries
    /// were discarded as non-numeric.
    Fetched { kept: usize, dropped: usize },
    /// The source failed. The error is swallowed and the cache left untouched.
    Failed,
}

type FetchObserver = Box<dyn Fn(&str, FetchOutcome)>;

/// One cached series. Replaced wholesale on refetch, never edited in place.
struct SeriesCacheEntry {
    samples: Vec<Sample>,
    fetched_at: Instant,
}

/// TTL-gated cache of historical samples, one entry per metric entity id.
///
/// Shields the host's history query from redundant calls: a fresh entry is
/// served without suspending, a stale or missing one triggers a refetch. A
/// failed fetch degrades to an empty series and leaves the cache untouched so
/// the next access retries instead of treating the failure as fresh data.
///
/// Staleness is checked lazily at access time; there is no background sweep.
/// Each widget instance owns its own cache — nothing here is process-global.
pub struct SeriesCache<S> {
    source: S,
    entries: HashMap<String, SeriesCacheEntry>,
    ttl: Duration,
    lookback: Duration,
    observer: Option<FetchObserver>,
}

impl<S: HistorySource> SeriesCache<S> {
    pub fn new(source: S) -> Self {
        Self::with_windows(source, DEFAULT_TTL, DEFAULT_LOOKBACK)
    }

    pub fn with_windows(source: S, ttl: Duration, lookback: Duration) -> Self {
        Self {
            source,
            entries: HashMap::new(),
            ttl,
            lookback,
            observer: None,
        }
    }

    /// Attach a hook that observes every fetch the cache performs. Lets the
    /// host add metrics or logging without changing the swallow-errors
    /// default.
    #[must_use]
    pub fn with_observer(mut self, observer: impl Fn(&str, FetchOutcome) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Recent samples for `entity_id`, from cache when fresh, otherwise
    /// refetched over the lookback window.
    ///
    /// Never fails: a source error resolves to an empty series. Exclusive
    /// access (`&mut self`) serializes lookups through one cache handle, so
    /// duplicate in-flight fetches for the same key cannot occur.
    pub async fn series(&mut self, entity_id: &str) -> Vec<Sample> {
        if let Some(entry) = self.entries.get(entity_id) {
            if entry.fetched_at.elapsed() <= self.ttl {
                return entry.samples.clone();
            }
        }
        self.refetch(entity_id).await
    }

    async fn refetch(&mut self, entity_id: &str) -> Vec<Sample> {
        let to = Utc::now();
        let from = to
            - chrono::Duration::from_std(self.lookback)
                .unwrap_or_else(|_| chrono::Duration::hours(24));

        match self.source.fetch_history(entity_id, from, to).await {
            Ok(raw) => {
                let total = raw.len();
                let samples: Vec<Sample> = raw.iter().filter_map(|r| r.to_sample()).collect();
                let outcome = FetchOutcome::Fetched {
                    kept: samples.len(),
                    dropped: total - samples.len(),
                };
                tracing::debug!(
                    entity_id,
                    kept = samples.len(),
                    dropped = total - samples.len(),
                    "history fetched"
                );
                self.notify(entity_id, outcome);
                self.entries.insert(
                    entity_id.to_string(),
                    SeriesCacheEntry {
                        samples: samples.clone(),
                        fetched_at: Instant::now(),
                    },
                );
                samples
            }
            Err(err) => {
                tracing::warn!(entity_id, %err, "history fetch failed; serving empty series");
                self.notify(entity_id, FetchOutcome::Failed);
                Vec::new()
            }
        }
    }

    fn notify(&self, entity_id: &str, outcome: FetchOutcome) {
        if let Some(observer) = &self.observer {
            observer(entity_id, outcome);
        }
    }

    /// Drop the cached entry for `entity_id`, forcing the next access to
    /// refetch. No-op when absent. Used when the host signals that the data
    /// was just refreshed at the source.
    pub fn invalidate(&mut self, entity_id: &str) {
        self.entries.remove(entity_id);
    }

    /// Drop every cached entry.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    /// Number of cached entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use chrono::{DateTime, TimeZone, Utc};
    use vitals_core::{CardError, RawSample, Result};

    /// Scripted source: pops one canned response per fetch and counts calls.
    struct ScriptedSource {
        responses: Mutex<VecDeque<Result<Vec<RawSample>>>>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<Vec<RawSample>>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl HistorySource for &ScriptedSource {
        async fn fetch_history(
            &self,
            _entity_id: &str,
            _from: DateTime<Utc>,
            _to: DateTime<Utc>,
        ) -> Result<Vec<RawSample>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn ok_series(states: &[(i64, &str)]) -> Result<Vec<RawSample>> {
        Ok(states
            .iter()
            .map(|&(t, s)| RawSample::new(at(t), s))
            .collect())
    }

    #[tokio::test(start_paused = true)]
    async fn second_access_within_ttl_serves_cache() {
        let source = ScriptedSource::new(vec![ok_series(&[(1, "10"), (2, "11")])]);
        let mut cache = SeriesCache::new(&source);

        let first = cache.series("sensor.ring_hrv").await;
        let second = cache.series("sensor.ring_hrv").await;

        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_entry_triggers_refetch() {
        let source = ScriptedSource::new(vec![
            ok_series(&[(1, "10")]),
            ok_series(&[(1, "10"), (2, "12")]),
        ]);
        let mut cache = SeriesCache::with_windows(&source, DEFAULT_TTL, DEFAULT_LOOKBACK);

        assert_eq!(cache.series("sensor.ring_hrv").await.len(), 1);
        tokio::time::advance(DEFAULT_TTL + Duration::from_secs(1)).await;
        assert_eq!(cache.series("sensor.ring_hrv").await.len(), 2);
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn invalidate_forces_refetch_inside_ttl() {
        let source = ScriptedSource::new(vec![ok_series(&[(1, "10")]), ok_series(&[(1, "10")])]);
        let mut cache = SeriesCache::new(&source);

        cache.series("sensor.ring_steps").await;
        cache.invalidate("sensor.ring_steps");
        cache.series("sensor.ring_steps").await;

        assert_eq!(source.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn invalidate_absent_key_is_noop() {
        let source = ScriptedSource::new(vec![]);
        let mut cache = SeriesCache::new(&source);

        cache.invalidate("sensor.ring_never_seen");
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn malformed_entries_dropped_order_preserved() {
        let source = ScriptedSource::new(vec![ok_series(&[(1, "12.5"), (2, "bad"), (3, "14")])]);
        let mut cache = SeriesCache::new(&source);

        let series = cache.series("sensor.ring_glucose").await;

        assert_eq!(
            series,
            vec![Sample::new(at(1), 12.5), Sample::new(at(3), 14.0)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn failed_fetch_is_empty_and_not_cached() {
        let source = ScriptedSource::new(vec![
            Err(CardError::Source("connection reset".into())),
            ok_series(&[(1, "60"), (2, "61")]),
        ]);
        let mut cache = SeriesCache::new(&source);

        assert!(cache.series("sensor.ring_heart_rate").await.is_empty());
        assert!(cache.is_empty());

        // Next access retries immediately rather than serving the failure as
        // a fresh empty entry.
        assert_eq!(cache.series("sensor.ring_heart_rate").await.len(), 2);
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_success_is_cached_as_fresh() {
        let source = ScriptedSource::new(vec![ok_series(&[])]);
        let mut cache = SeriesCache::new(&source);

        assert!(cache.series("sensor.ring_spo2").await.is_empty());
        assert!(cache.series("sensor.ring_spo2").await.is_empty());
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn observer_sees_fetches_and_failures() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let source = ScriptedSource::new(vec![
            ok_series(&[(1, "1"), (2, "x"), (3, "3")]),
            Err(CardError::Source("timeout".into())),
        ]);
        let seen: Rc<RefCell<Vec<FetchOutcome>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut cache =
            SeriesCache::new(&source).with_observer(move |_, outcome| sink.borrow_mut().push(outcome));

        cache.series("sensor.ring_hrv").await;
        cache.invalidate("sensor.ring_hrv");
        cache.series("sensor.ring_hrv").await;

        assert_eq!(
            *seen.borrow(),
            vec![
                FetchOutcome::Fetched { kept: 2, dropped: 1 },
                FetchOutcome::Failed,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn invalidate_all_clears_every_key() {
        let source = ScriptedSource::new(vec![ok_series(&[(1, "1")]), ok_series(&[(1, "2")])]);
        let mut cache = SeriesCache::new(&source);

        cache.series("sensor.ring_hrv").await;
        cache.series("sensor.ring_steps").await;
        assert_eq!(cache.len(), 2);

        cache.invalidate_all();
        assert!(cache.is_empty());
    }
}
