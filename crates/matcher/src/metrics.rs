//! Process-wide hook for observing ranking requests.
//!
//! Nothing is recorded until a host installs a [`MatchMetrics`] with
//! [`set_match_metrics`]. After that, [`rank_query`](crate::rank_query) and
//! every `Matcher` entry point report one event per request, tagged with the
//! [`QueryKind`] that issued it.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::QueryKind;

type Recorder = Arc<dyn MatchMetrics>;

/// Receives one call per ranking request.
pub trait MatchMetrics: Send + Sync {
    /// `latency` spans query normalization through truncation of the ranked
    /// list; `hit_count` is the length of that list.
    fn record_match(&self, kind: QueryKind, latency: Duration, hit_count: usize);
}

static RECORDER: OnceCell<RwLock<Option<Recorder>>> = OnceCell::new();

fn slot() -> &'static RwLock<Option<Recorder>> {
    RECORDER.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Recorder> {
    slot()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Replaces the installed recorder; `None` turns reporting off.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    *slot()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = recorder;
}
