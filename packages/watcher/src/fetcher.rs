//! HTTP fetcher for search result pages.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::types::Query;

/// Request timeout for a single page fetch
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Trait for fetching one page of a query's search results (to allow mocking)
#[async_trait]
pub trait FetchPage: Send + Sync {
    /// Fetch the raw HTML for `page` (1-indexed) of `query`'s results.
    async fn fetch(&self, query: &Query, page: u32) -> Result<String>;
}

/// Fetches result pages over HTTP with cache-disabling headers.
pub struct ListingFetcher {
    client: reqwest::Client,
}

impl ListingFetcher {
    pub fn new() -> Result<Self> {
        let user_agent = "Mozilla/5.0 (compatible; job-alert-bot/1.0)";

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CACHE_CONTROL,
            "no-cache".parse().unwrap(),
        );
        headers.insert(reqwest::header::PRAGMA, "no-cache".parse().unwrap());

        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl FetchPage for ListingFetcher {
    async fn fetch(&self, query: &Query, page: u32) -> Result<String> {
        // Cache-buster so intermediate caches never serve a stale listing
        let cb = chrono::Utc::now().timestamp();
        let url = format!("{}&page={}&_cb={}", query.search_url(), page, cb);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP {} for {}", status, url);
        }

        response
            .text()
            .await
            .context("Failed to read response body")
    }
}
