use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;

use crate::errors::LoadError;

/// Append a cache-busting timestamp parameter so intermediaries and the
/// sheet host never serve a stale publication. Pure: the clock is passed in.
pub fn build_request_url(base: &str, now: DateTime<Utc>) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}t={}", base, separator, now.timestamp_millis())
}

/// Raw fetch result before the loader's status and payload checks.
#[derive(Debug, Clone)]
pub struct FetchedBody {
    pub status: u16,
    pub body: String,
}

/// Fetch capability seam. The loader only sees this trait, which keeps it
/// testable without network access.
#[async_trait]
pub trait SheetFetch: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<FetchedBody, LoadError>;
}

/// Production fetcher over reqwest.
pub struct SheetClient {
    client: Client,
}

impl SheetClient {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl SheetFetch for SheetClient {
    async fn fetch_text(&self, url: &str) -> Result<FetchedBody, LoadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::connection(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LoadError::connection(e.to_string()))?;

        Ok(FetchedBody { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn cache_bust_appends_query_parameter() {
        let now = Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap();
        let url = build_request_url("https://example.com/pub", now);
        assert_eq!(
            url,
            format!("https://example.com/pub?t={}", now.timestamp_millis())
        );
    }

    #[test]
    fn cache_bust_respects_existing_query() {
        let now = Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap();
        let url = build_request_url("https://example.com/pub?output=csv", now);
        assert!(url.starts_with("https://example.com/pub?output=csv&t="));
    }
}
