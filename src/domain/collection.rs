//! In-memory quote list

use crate::domain::{CategoryFilter, Quote};
use rand::Rng;
use std::collections::HashSet;

/// Ordered list of quotes; insertion order is kept and duplicates are allowed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteCollection {
    quotes: Vec<Quote>,
}

impl QuoteCollection {
    pub fn new(quotes: Vec<Quote>) -> Self {
        QuoteCollection { quotes }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    pub fn push(&mut self, quote: Quote) {
        self.quotes.push(quote);
    }

    pub fn extend(&mut self, quotes: impl IntoIterator<Item = Quote>) {
        self.quotes.extend(quotes);
    }

    /// Discard the current contents and take `quotes` instead
    pub fn replace_all(&mut self, quotes: Vec<Quote>) {
        self.quotes = quotes;
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.quotes
            .iter()
            .filter(|q| seen.insert(q.category.as_str()))
            .map(|q| q.category.clone())
            .collect()
    }

    /// Quotes passing `filter`, in collection order
    pub fn filter_by(&self, filter: &CategoryFilter) -> Vec<Quote> {
        self.quotes
            .iter()
            .filter(|q| filter.matches(&q.category))
            .cloned()
            .collect()
    }

    /// Pick a uniformly random quote among those passing `filter`.
    ///
    /// The returned index points into the full collection.
    pub fn pick_random<R: Rng>(
        &self,
        filter: &CategoryFilter,
        rng: &mut R,
    ) -> Option<(usize, &Quote)> {
        let candidates: Vec<usize> = self
            .quotes
            .iter()
            .enumerate()
            .filter(|(_, q)| filter.matches(&q.category))
            .map(|(i, _)| i)
            .collect();

        if candidates.is_empty() {
            return None;
        }

        let index = candidates[rng.random_range(0..candidates.len())];
        Some((index, &self.quotes[index]))
    }
}
