// crates/infra/src/settings.rs
use std::time::Duration;

use derive_builder::Builder;
use f1_results_shared_kernel::DEFAULT_PAGE_LIMIT;

/// Public Ergast-compatible endpoint.
pub const DEFAULT_BASE_URL: &str = "http://ergast.com/api/f1";
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = concat!("f1_results/", env!("CARGO_PKG_VERSION"));

/// Everything the HTTP adapter needs to reach the results API.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct FetchSettings {
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    pub base_url: String,
    #[builder(default = "DEFAULT_PAGE_LIMIT")]
    pub page_limit: u32,
    #[builder(default = "DEFAULT_CACHE_TTL")]
    pub cache_ttl: Duration,
    #[builder(default = "DEFAULT_TIMEOUT")]
    pub timeout: Duration,
    #[builder(default = "DEFAULT_USER_AGENT.to_string()")]
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            cache_ttl: DEFAULT_CACHE_TTL,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchSettings {
    /// Base URL without trailing slashes, so endpoints can be appended with one `/`.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
