use serde::Serialize;

/// Why a season's pagination loop ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// The declared total was reached.
    Exhausted,
    /// A page carried no races.
    EmptyPage,
    /// A request failed; earlier pages are kept.
    FetchFailed(String),
    /// A response lacked the expected structure; earlier pages are kept.
    DataShape(String),
}

impl StopReason {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Exhausted | Self::EmptyPage)
    }
}

/// Bookkeeping of one `BuildSeasonResults` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationReport {
    /// Number of fetch calls issued.
    pub pages: usize,
    pub stop: StopReason,
}
