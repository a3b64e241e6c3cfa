// crates/ports/src/results_api.rs
use std::sync::Arc;

use f1_results_shared_kernel::{FetchResult, PageRequest};
use serde_json::Value;

/// A decoded JSON payload together with the URL it was fetched from.
///
/// Cloning is cheap; the body is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPage {
    url: String,
    body: Arc<Value>,
}

impl RawPage {
    pub fn new(url: impl Into<String>, body: Value) -> Self {
        Self { url: url.into(), body: Arc::new(body) }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn body(&self) -> &Value {
        &self.body
    }
}

/// Port for fetching one page of a paginated results endpoint.
///
/// `endpoint` is a path below the API base such as `2023/results` or
/// `seasons`. Implementations report every failure as a [`FetchError`]
/// and never panic.
///
/// [`FetchError`]: f1_results_shared_kernel::FetchError
pub trait ResultsSource: Send + Sync {
    fn fetch(&self, endpoint: &str, page: PageRequest) -> FetchResult<RawPage>;
}
