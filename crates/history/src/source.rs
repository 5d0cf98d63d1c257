use std::future::Future;

use chrono::{DateTime, Utc};
use vitals_core::{RawSample, Result};

/// Historical-sample query capability provided by the host environment.
///
/// Treated as an opaque async call with latency and possible failure —
/// typically a network or IPC round trip on the host's side. The engine runs
/// on a single logical thread (event-loop style), so no `Send` bound is
/// imposed on the returned future.
///
/// Implementations apply their own timeout/cancellation policy; the cache
/// adds none of its own and treats a timeout like any other failed fetch.
pub trait HistorySource {
    /// Fetch raw samples for `entity_id` over `[from, to]`, in chronological
    /// order.
    fn fetch_history(
        &self,
        entity_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<RawSample>>>;
}
