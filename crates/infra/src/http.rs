// crates/infra/src/http.rs
use std::{sync::Arc, time::Duration};

use f1_results_ports::{RawPage, ResponseCache, ResultsSource};
use f1_results_shared_kernel::{FetchError, FetchResult, InfraResult, InfrastructureError, PageRequest};
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::settings::FetchSettings;

/// [`ResultsSource`] backed by a blocking HTTP client and a shared cache.
pub struct HttpFetcher {
    client: Client,
    base_url: String,
    cache: Arc<dyn ResponseCache>,
    ttl: Duration,
}

impl HttpFetcher {
    pub fn new(settings: &FetchSettings, cache: Arc<dyn ResponseCache>) -> InfraResult<Self> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout)
            .build()
            .map_err(|e| InfrastructureError::HttpClient { details: e.to_string() })?;

        Ok(Self {
            client,
            base_url: settings.normalized_base_url().to_string(),
            cache,
            ttl: settings.cache_ttl,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL; also the cache key.
    pub fn page_url(&self, endpoint: &str, page: PageRequest) -> String {
        format!(
            "{}/{}.json?limit={}&offset={}",
            self.base_url,
            endpoint.trim_matches('/'),
            page.limit(),
            page.offset()
        )
    }

    fn fetch_uncached(&self, url: &str) -> FetchResult<RawPage> {
        let transport = |e: reqwest::Error| FetchError::Transport { url: url.to_string(), message: e.to_string() };

        let response = self.client.get(url).send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }

        let bytes = response.bytes().map_err(transport)?;
        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|e| FetchError::MalformedJson { url: url.to_string(), message: e.to_string() })?;

        info!(url, bytes = bytes.len(), "page fetched");
        Ok(RawPage::new(url, body))
    }
}

impl ResultsSource for HttpFetcher {
    fn fetch(&self, endpoint: &str, page: PageRequest) -> FetchResult<RawPage> {
        let url = self.page_url(endpoint, page);
        debug!(%url, "requesting page");
        self.cache.get_or_fetch(&url, self.ttl, &mut || self.fetch_uncached(&url))
    }
}
