//! Quote book: the session context every command runs against
//!
//! Owns the in-memory quote list, the stores it is persisted to, and the
//! remote it is reconciled with. One instance lives for the whole session and
//! is passed explicitly to whatever needs it.

use crate::application::sync::SyncOutcome;
use crate::application::transfer;
use crate::domain::{CategoryFilter, Quote, QuoteCollection};
use crate::error::Result;
use crate::infrastructure::{QuoteStore, RemoteSource};
use rand::Rng;
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub struct QuoteBook {
    quotes: QuoteCollection,
    store: QuoteStore,
    remote: Arc<dyn RemoteSource>,
}

impl QuoteBook {
    /// Start from whatever the durable store holds, without touching the remote.
    ///
    /// Falls back to the bundled defaults when no snapshot exists.
    pub fn open_local(store: QuoteStore, remote: Arc<dyn RemoteSource>) -> Self {
        let quotes = match store.load_snapshot() {
            Some(quotes) => quotes,
            None => Self::seed_defaults(&store),
        };

        QuoteBook {
            quotes: QuoteCollection::new(quotes),
            store,
            remote,
        }
    }

    /// Start from the remote collection.
    ///
    /// If the fetch fails the durable snapshot is used instead, and the bundled
    /// defaults only when there is no snapshot either.
    pub async fn open(store: QuoteStore, remote: Arc<dyn RemoteSource>) -> Self {
        let quotes = match remote.fetch_remote().await {
            Ok(fetched) => {
                info!(count = fetched.len(), "loaded quotes from remote");
                store.save_quotes(&fetched);
                fetched
            }
            Err(e) => {
                warn!(error = %e, "remote fetch failed, using local quotes");
                match store.load_snapshot() {
                    Some(quotes) => quotes,
                    None => Self::seed_defaults(&store),
                }
            }
        };

        QuoteBook {
            quotes: QuoteCollection::new(quotes),
            store,
            remote,
        }
    }

    fn seed_defaults(store: &QuoteStore) -> Vec<Quote> {
        debug!("no stored quotes, seeding defaults");
        let defaults = Quote::defaults();
        store.save_quotes(&defaults);
        defaults
    }

    pub fn quotes(&self) -> &[Quote] {
        self.quotes.quotes()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn remote(&self) -> Arc<dyn RemoteSource> {
        Arc::clone(&self.remote)
    }

    /// The durable snapshot, empty if absent or unreadable
    pub fn load(&self) -> Vec<Quote> {
        self.store.load_quotes()
    }

    /// Overwrite the durable snapshot with the current quotes
    pub fn save(&self) {
        self.store.save_quotes(self.quotes.quotes());
    }

    /// Validate, append and persist a quote, then push it to the remote.
    ///
    /// The push runs as a detached task; its outcome is only logged and never
    /// undoes the local add.
    pub fn add(&mut self, text: &str, category: &str) -> Result<PushTask> {
        let quote = Quote::new(text, category)?;

        self.quotes.push(quote.clone());
        self.save();
        info!(category = %quote.category, total = self.quotes.len(), "added quote");

        Ok(PushTask::spawn(Arc::clone(&self.remote), quote))
    }

    pub fn categories(&self) -> Vec<String> {
        self.quotes.categories()
    }

    pub fn filter_by(&self, filter: &CategoryFilter) -> Vec<Quote> {
        self.quotes.filter_by(filter)
    }

    /// Pick a random quote passing `filter` and remember the selection
    pub fn show_random(&self, filter: &CategoryFilter) -> Option<(usize, Quote)> {
        self.show_random_with(filter, &mut rand::rng())
    }

    pub fn show_random_with<R: Rng>(
        &self,
        filter: &CategoryFilter,
        rng: &mut R,
    ) -> Option<(usize, Quote)> {
        self.store.save_filter(filter);

        let (index, quote) = self.quotes.pick_random(filter, rng)?;
        self.store.save_last_index(index);
        Some((index, quote.clone()))
    }

    /// The filter selected last, `all` if none was
    pub fn last_filter(&self) -> CategoryFilter {
        self.store.load_filter()
    }

    /// The quote shown last in this session, if it is still in range
    pub fn last_viewed(&self) -> Option<&Quote> {
        self.store
            .load_last_index()
            .and_then(|index| self.quotes.get(index))
    }

    /// Fetch from the remote and reconcile
    pub async fn sync(&mut self) -> SyncOutcome {
        let remote = Arc::clone(&self.remote);
        let fetched = remote.fetch_remote().await;
        self.reconcile(fetched)
    }

    /// Apply one fetch result: a successful fetch replaces everything.
    pub(crate) fn reconcile(&mut self, fetched: Result<Vec<Quote>>) -> SyncOutcome {
        match fetched {
            Ok(quotes) => {
                let count = quotes.len();
                debug!(previous = self.quotes.len(), count, "replacing local quotes");
                self.quotes.replace_all(quotes);
                self.save();
                info!(count, "sync replaced local quotes");
                SyncOutcome::Replaced { count }
            }
            Err(e) => {
                warn!(error = %e, "sync failed, local quotes unchanged");
                SyncOutcome::Unchanged
            }
        }
    }

    /// Write every quote to `path` as an indented JSON array
    pub fn export_all(&self, path: &Path) -> Result<usize> {
        transfer::export_to_file(self.quotes.quotes(), path)?;
        info!(path = %path.display(), count = self.quotes.len(), "exported quotes");
        Ok(self.quotes.len())
    }

    /// Append every quote in the JSON array at `path` and persist.
    ///
    /// Nothing changes if the file is not a JSON array of quotes.
    pub fn import_all(&mut self, path: &Path) -> Result<usize> {
        let imported = transfer::import_from_file(path)?;
        let count = imported.len();

        self.quotes.extend(imported);
        self.save();
        info!(path = %path.display(), count, "imported quotes");
        Ok(count)
    }

    /// Clear session-scoped state
    pub fn end_session(&self) {
        self.store.end_session();
    }
}

/// Handle on a detached push.
///
/// Dropping it leaves the push running. Waiting only delays the caller until
/// the push has been logged; its outcome is never returned.
pub struct PushTask {
    handle: JoinHandle<()>,
}

impl PushTask {
    fn spawn(remote: Arc<dyn RemoteSource>, quote: Quote) -> Self {
        let handle = tokio::spawn(async move {
            match remote.push_quote(&quote).await {
                Ok(()) => info!(category = %quote.category, "pushed quote to remote"),
                Err(e) => warn!(error = %e, "failed to push quote to remote"),
            }
        });

        PushTask { handle }
    }

    pub async fn wait(self) {
        if let Err(e) = self.handle.await {
            warn!(error = %e, "push task ended abnormally");
        }
    }
}
