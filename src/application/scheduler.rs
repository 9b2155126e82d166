//! Recurring background sync

use crate::application::sync::{sync_cycle, SyncGuard, SyncOutcome};
use crate::application::QuoteBook;
use crate::error::{QuotebookError, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Finished cycles held for a caller that is not draining outcomes
pub const OUTCOME_BUFFER: usize = 16;

/// Runs a sync cycle on a fixed interval until cancelled
pub struct SyncScheduler;

impl SyncScheduler {
    /// Start syncing `book` every `period`, first cycle one period from now.
    ///
    /// Each tick runs its cycle in its own task, so a slow fetch does not
    /// delay the timer; ticks that land on an in-flight fetch are skipped by
    /// the guard. At most [`OUTCOME_BUFFER`] outcomes wait for
    /// [`SchedulerHandle::next_outcome`]; later ones are dropped until the
    /// caller catches up.
    pub fn spawn(book: Arc<Mutex<QuoteBook>>, period: Duration) -> Result<SchedulerHandle> {
        if period.is_zero() {
            return Err(QuotebookError::Config(
                "Sync interval must be greater than zero".to_string(),
            ));
        }

        let cancel = CancellationToken::new();
        let guard = SyncGuard::new();
        let (outcomes_tx, outcomes_rx) = mpsc::channel(OUTCOME_BUFFER);

        let task = {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                let mut ticker = interval_at(Instant::now() + period, period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                info!(period_secs = period.as_secs_f64(), "sync scheduler started");

                loop {
                    tokio::select! {
                        _ = cancel.cancelled() => break,
                        _ = ticker.tick() => {}
                    }

                    let (book, guard, cancel) = (book.clone(), guard.clone(), cancel.clone());
                    let outcomes_tx = outcomes_tx.clone();
                    tokio::spawn(async move {
                        let outcome = sync_cycle(&book, &guard, &cancel).await;
                        debug!(?outcome, "scheduled sync finished");
                        match outcomes_tx.try_send(outcome) {
                            Ok(()) | Err(TrySendError::Closed(_)) => {}
                            Err(TrySendError::Full(outcome)) => {
                                debug!(?outcome, "outcome buffer full, dropping")
                            }
                        }
                    });
                }

                info!("sync scheduler stopped");
            })
        };

        Ok(SchedulerHandle {
            cancel,
            task,
            outcomes: outcomes_rx,
        })
    }
}

/// Controls a running scheduler
pub struct SchedulerHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
    outcomes: mpsc::Receiver<SyncOutcome>,
}

impl SchedulerHandle {
    /// Stop the timer and abort any fetch in flight
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Wait for the next finished cycle; `None` once the scheduler has stopped
    /// and every cycle has reported
    pub async fn next_outcome(&mut self) -> Option<SyncOutcome> {
        self.outcomes.recv().await
    }

    /// Cancel and wait for the timer loop to exit
    pub async fn shutdown(self) {
        self.cancel();
        if let Err(e) = self.task.await {
            warn!(error = %e, "sync scheduler ended abnormally");
        }
    }
}
