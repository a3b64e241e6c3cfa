// crates/shared-kernel/src/value_objects/page.rs
use serde::Serialize;

use crate::error::FetchError;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Offset/limit pair of a paginated request. `limit` is always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageRequest {
    offset: u64,
    limit: u32,
}

impl PageRequest {
    pub fn new(offset: u64, limit: u32) -> Result<Self, FetchError> {
        if limit == 0 {
            return Err(FetchError::InvalidRequest { reason: "limit must be greater than zero".to_string() });
        }
        Ok(Self { offset, limit })
    }

    pub fn first(limit: u32) -> Result<Self, FetchError> {
        Self::new(0, limit)
    }

    #[inline]
    pub const fn offset(self) -> u64 {
        self.offset
    }

    #[inline]
    pub const fn limit(self) -> u32 {
        self.limit
    }

    /// The request for the page following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self { offset: self.offset.saturating_add(u64::from(self.limit)), limit: self.limit }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { offset: 0, limit: DEFAULT_PAGE_LIMIT }
    }
}
