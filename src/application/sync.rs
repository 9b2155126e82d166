//! Remote-authoritative reconciliation
//!
//! A cycle moves `Idle -> Fetching -> {Replaced, Unchanged} -> Idle`. A
//! successful fetch overwrites the local list; a failed one leaves it alone.
//! Cycles never overlap: one that starts while another is fetching is skipped.

use crate::application::QuoteBook;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Result of one sync cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The fetch succeeded and the local list now holds `count` remote quotes
    Replaced { count: usize },
    /// The fetch failed; local quotes untouched
    Unchanged,
    /// Another cycle was already fetching
    Skipped,
    /// The fetch was aborted before it finished; local quotes untouched
    Cancelled,
}

impl SyncOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, SyncOutcome::Replaced { .. })
    }
}

/// In-flight flag shared by every cycle against the same quote book
#[derive(Debug, Clone, Default)]
pub struct SyncGuard {
    fetching: Arc<AtomicBool>,
}

impl SyncGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching.load(Ordering::SeqCst)
    }

    /// Claim the guard; `None` if a cycle already holds it
    fn try_begin(&self) -> Option<InFlight> {
        self.fetching
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| InFlight {
                fetching: Arc::clone(&self.fetching),
            })
    }
}

/// Releases the guard when dropped, including when the cycle is aborted
struct InFlight {
    fetching: Arc<AtomicBool>,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.fetching.store(false, Ordering::SeqCst);
    }
}

/// Run one cycle against a shared quote book.
///
/// The lock is not held during the fetch, so adds made meanwhile are
/// overwritten if the fetch succeeds.
pub async fn sync_cycle(
    book: &Mutex<QuoteBook>,
    guard: &SyncGuard,
    cancel: &CancellationToken,
) -> SyncOutcome {
    let Some(_in_flight) = guard.try_begin() else {
        debug!("sync already in flight, skipping cycle");
        return SyncOutcome::Skipped;
    };

    let remote = book.lock().await.remote();
    let fetched = tokio::select! {
        _ = cancel.cancelled() => {
            info!("sync cancelled, local quotes unchanged");
            return SyncOutcome::Cancelled;
        }
        result = remote.fetch_remote() => result,
    };

    book.lock().await.reconcile(fetched)
}
