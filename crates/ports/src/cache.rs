// crates/ports/src/cache.rs
use std::time::{Duration, Instant};

use f1_results_shared_kernel::FetchResult;

use crate::results_api::RawPage;

/// Memoising store for fetched pages.
///
/// `fetch` runs only when `key` has no entry younger than `ttl`; only
/// successful payloads are stored.
pub trait ResponseCache: Send + Sync {
    fn get_or_fetch(
        &self,
        key: &str,
        ttl: Duration,
        fetch: &mut dyn FnMut() -> FetchResult<RawPage>,
    ) -> FetchResult<RawPage>;
}

/// Source of monotonic time, swappable in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}
