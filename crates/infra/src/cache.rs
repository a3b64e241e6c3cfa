// crates/infra/src/cache.rs
//! Response caches for [`HttpFetcher`](crate::http::HttpFetcher).

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
    time::{Duration, Instant},
};

use f1_results_ports::{Clock, RawPage, ResponseCache};
use f1_results_shared_kernel::FetchResult;
use tracing::debug;

/// Wall-clock backed [`Clock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug, Clone)]
struct CachedPage {
    stored_at: Instant,
    page: RawPage,
}

/// Process-wide memo of successful pages keyed by request URL.
///
/// Entries are only replaced once older than the caller's TTL. The lock is
/// not held while fetching, so two concurrent misses on one key both fetch
/// and the last write wins.
pub struct TtlCache {
    entries: Mutex<HashMap<String, CachedPage>>,
    clock: Arc<dyn Clock>,
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TtlCache {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { entries: Mutex::new(HashMap::new()), clock }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expired entries are evicted on lookup.
    fn lookup(&self, key: &str, ttl: Duration) -> Option<RawPage> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let cached = entries.get(key)?;
        let age = self.clock.now().saturating_duration_since(cached.stored_at);
        if age < ttl {
            return Some(cached.page.clone());
        }
        entries.remove(key);
        None
    }
}

impl ResponseCache for TtlCache {
    fn get_or_fetch(
        &self,
        key: &str,
        ttl: Duration,
        fetch: &mut dyn FnMut() -> FetchResult<RawPage>,
    ) -> FetchResult<RawPage> {
        if let Some(page) = self.lookup(key, ttl) {
            debug!(key, "cache hit");
            return Ok(page);
        }

        let page = fetch()?;
        let stored_at = self.clock.now();
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), CachedPage { stored_at, page: page.clone() });
        Ok(page)
    }
}

/// Cache that never stores anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl ResponseCache for NoCache {
    fn get_or_fetch(
        &self,
        _key: &str,
        _ttl: Duration,
        fetch: &mut dyn FnMut() -> FetchResult<RawPage>,
    ) -> FetchResult<RawPage> {
        fetch()
    }
}
