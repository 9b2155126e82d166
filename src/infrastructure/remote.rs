//! Remote quote source
//!
//! Fetches a JSON array of records from an HTTP endpoint and maps them onto
//! quotes, and posts newly added quotes back to the same endpoint. Every call
//! is a single attempt: no retries and no backoff.

use crate::domain::Quote;
use crate::error::{QuotebookError, Result};
use crate::infrastructure::Config;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Category given to every fetched quote unless remote categories are kept
pub const DEFAULT_REMOTE_CATEGORY: &str = "Inspiration";

/// A source of quotes that also accepts new ones
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch the remote collection as quotes
    async fn fetch_remote(&self) -> Result<Vec<Quote>>;

    /// Send one quote to the remote; the response body is ignored
    async fn push_quote(&self, quote: &Quote) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct RemoteRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

/// `RemoteSource` over HTTP
#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: Client,
    url: String,
    fetch_limit: usize,
    preserve_remote_category: bool,
}

impl HttpRemote {
    /// Build a client from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| QuotebookError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config))
    }

    /// Build with an existing reqwest client
    pub fn with_client(client: Client, config: &Config) -> Self {
        HttpRemote {
            client,
            url: config.remote_url.clone(),
            fetch_limit: config.fetch_limit,
            preserve_remote_category: config.preserve_remote_category,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RemoteSource for HttpRemote {
    async fn fetch_remote(&self) -> Result<Vec<Quote>> {
        debug!(url = %self.url, "fetching remote quotes");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuotebookError::Network(format!(
                "GET {} returned {}",
                self.url, status
            )));
        }

        let records: Vec<RemoteRecord> = response.json().await?;
        let quotes = map_records(records, self.fetch_limit, self.preserve_remote_category);

        debug!(count = quotes.len(), "mapped remote records");
        Ok(quotes)
    }

    async fn push_quote(&self, quote: &Quote) -> Result<()> {
        let response = self.client.post(&self.url).json(quote).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuotebookError::Network(format!(
                "POST {} returned {}",
                self.url, status
            )));
        }

        debug!(%status, "remote acknowledged quote");
        Ok(())
    }
}

/// Map the first `limit` records to quotes, skipping records without a title.
fn map_records(records: Vec<RemoteRecord>, limit: usize, preserve_category: bool) -> Vec<Quote> {
    records
        .into_iter()
        .take(limit)
        .filter_map(|record| {
            let text = record.title?.trim().to_string();
            if text.is_empty() {
                return None;
            }

            let category = record
                .category
                .map(|c| c.trim().to_string())
                .filter(|c| preserve_category && !c.is_empty())
                .unwrap_or_else(|| DEFAULT_REMOTE_CATEGORY.to_string());

            Some(Quote { text, category })
        })
        .collect()
}
