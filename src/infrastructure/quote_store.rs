//! Persistence of quotebook state on top of the key-value stores

use crate::domain::{CategoryFilter, Quote};
use crate::error::QuotebookError;
use crate::infrastructure::store::KeyValueStore;
use tracing::{debug, warn};

/// Durable key holding the quote list
pub const QUOTES_KEY: &str = "quotes";
/// Durable key holding the last selected category filter
pub const LAST_FILTER_KEY: &str = "lastCategoryFilter";
/// Session key holding the index of the last shown quote
pub const LAST_INDEX_KEY: &str = "lastQuoteIndex";

/// Reads and writes quotebook state through a durable and a session store
pub struct QuoteStore {
    durable: Box<dyn KeyValueStore>,
    session: Box<dyn KeyValueStore>,
}

impl QuoteStore {
    pub fn new(durable: Box<dyn KeyValueStore>, session: Box<dyn KeyValueStore>) -> Self {
        QuoteStore { durable, session }
    }

    /// The stored snapshot, or `None` when absent or unreadable
    pub fn load_snapshot(&self) -> Option<Vec<Quote>> {
        let raw = self.durable.load(QUOTES_KEY)?;

        match serde_json::from_str::<Vec<Quote>>(&raw) {
            Ok(quotes) => {
                debug!(count = quotes.len(), "loaded quote snapshot");
                Some(quotes)
            }
            Err(e) => {
                let err = QuotebookError::StorageParse(format!("{}: {}", QUOTES_KEY, e));
                warn!(error = %err, "ignoring stored quotes");
                None
            }
        }
    }

    /// The stored quotes, empty when no usable snapshot exists
    pub fn load_quotes(&self) -> Vec<Quote> {
        self.load_snapshot().unwrap_or_default()
    }

    /// Overwrite the stored snapshot
    pub fn save_quotes(&self, quotes: &[Quote]) {
        match serde_json::to_string(quotes) {
            Ok(json) => self.durable.save(QUOTES_KEY, &json),
            Err(e) => warn!(error = %e, "failed to serialize quotes"),
        }
    }

    /// The last selected filter, `All` when none was stored or it is unreadable
    pub fn load_filter(&self) -> CategoryFilter {
        let Some(raw) = self.durable.load(LAST_FILTER_KEY) else {
            return CategoryFilter::default();
        };

        match serde_json::from_str::<String>(&raw) {
            Ok(name) => name.parse().unwrap_or_default(),
            Err(e) => {
                let err = QuotebookError::StorageParse(format!("{}: {}", LAST_FILTER_KEY, e));
                warn!(error = %err, "ignoring stored category filter");
                CategoryFilter::default()
            }
        }
    }

    /// Stored as a JSON string, like every other value under `storage/`
    pub fn save_filter(&self, filter: &CategoryFilter) {
        match serde_json::to_string(&filter.to_string()) {
            Ok(json) => self.durable.save(LAST_FILTER_KEY, &json),
            Err(e) => warn!(error = %e, "failed to serialize category filter"),
        }
    }

    pub fn load_last_index(&self) -> Option<usize> {
        self.session
            .load(LAST_INDEX_KEY)
            .and_then(|raw| raw.trim().parse().ok())
    }

    pub fn save_last_index(&self, index: usize) {
        self.session.save(LAST_INDEX_KEY, &index.to_string());
    }

    /// Drop everything held in the session store
    pub fn end_session(&self) {
        self.session.clear();
    }
}
