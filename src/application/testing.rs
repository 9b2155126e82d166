//! Scripted remote used by the application tests

use crate::domain::Quote;
use crate::error::{QuotebookError, Result};
use crate::infrastructure::{MemoryStore, QuoteStore, RemoteSource};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Default)]
pub(crate) struct FakeRemote {
    /// `None` makes every fetch fail
    pub remote_quotes: Mutex<Option<Vec<Quote>>>,
    pub fail_pushes: bool,
    pub fetches: AtomicUsize,
    pub pushed: Mutex<Vec<Quote>>,
    /// When set, fetches signal `entered` and then wait on `release`
    pub gate: Option<(Arc<Notify>, Arc<Notify>)>,
}

impl FakeRemote {
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn serving(quotes: Vec<Quote>) -> Self {
        FakeRemote {
            remote_quotes: Mutex::new(Some(quotes)),
            ..Self::default()
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn pushed(&self) -> Vec<Quote> {
        self.pushed.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteSource for FakeRemote {
    async fn fetch_remote(&self) -> Result<Vec<Quote>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some((entered, release)) = &self.gate {
            entered.notify_one();
            release.notified().await;
        }

        self.remote_quotes
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| QuotebookError::Network("remote unavailable".to_string()))
    }

    async fn push_quote(&self, quote: &Quote) -> Result<()> {
        self.pushed.lock().unwrap().push(quote.clone());
        if self.fail_pushes {
            Err(QuotebookError::Network("push rejected".to_string()))
        } else {
            Ok(())
        }
    }
}

/// A store over fresh in-memory backends, plus a handle on the durable one
pub(crate) fn memory_store() -> (QuoteStore, MemoryStore) {
    let durable = MemoryStore::new();
    let store = QuoteStore::new(Box::new(durable.clone()), Box::new(MemoryStore::new()));
    (store, durable)
}

pub(crate) fn quote(text: &str, category: &str) -> Quote {
    Quote::new(text, category).unwrap()
}
