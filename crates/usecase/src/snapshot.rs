use f1_results_ports::{RawPage, ResultsSource};
use f1_results_shared_kernel::{DEFAULT_SEASON, ErrorContext, PageRequest, Result};
use serde::Serialize;
use tracing::info;

/// A single raw page to be captured as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotRequest {
    pub endpoint: String,
    pub page: PageRequest,
}

impl Default for SnapshotRequest {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SEASON.results_endpoint(),
            page: PageRequest::default(),
        }
    }
}

impl SnapshotRequest {
    pub fn new(endpoint: impl Into<String>, offset: u64, limit: u32) -> Result<Self> {
        let page = PageRequest::new(offset, limit).context("building snapshot request")?;
        Ok(Self { endpoint: endpoint.into(), page })
    }
}

/// Fetches one page without interpreting it.
///
/// Unlike the season builder this surfaces fetch errors: a snapshot that
/// silently writes nothing is useless.
pub struct FetchSnapshot<'a> {
    source: &'a dyn ResultsSource,
}

impl<'a> FetchSnapshot<'a> {
    pub fn new(source: &'a dyn ResultsSource) -> Self {
        Self { source }
    }

    pub fn run(&self, request: &SnapshotRequest) -> Result<RawPage> {
        let raw = self
            .source
            .fetch(&request.endpoint, request.page)
            .with_context(|| format!("fetching snapshot of '{}'", request.endpoint))?;
        info!(url = raw.url(), "snapshot fetched");
        Ok(raw)
    }
}
