use f1_results_ports::{ResultsSource, wire::SeasonPage};
use f1_results_shared_kernel::{DEFAULT_PAGE_LIMIT, DEFAULT_SEASON, FetchError, PageRequest, Season};
use tracing::{debug, warn};

const SEASONS_ENDPOINT: &str = "seasons";

/// Lists the seasons the API knows about, newest first.
///
/// Only the first page is read. When the request fails or yields nothing
/// usable the list falls back to [`DEFAULT_SEASON`].
pub struct ListSeasons<'a> {
    source: &'a dyn ResultsSource,
    page_limit: u32,
}

impl<'a> ListSeasons<'a> {
    pub fn new(source: &'a dyn ResultsSource) -> Self {
        Self { source, page_limit: DEFAULT_PAGE_LIMIT }
    }

    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit;
        self
    }

    pub fn run(&self) -> Vec<Season> {
        match self.fetch_seasons() {
            Ok(seasons) if !seasons.is_empty() => seasons,
            Ok(_) => {
                warn!(fallback = %DEFAULT_SEASON, "season list empty, using fallback");
                vec![DEFAULT_SEASON]
            }
            Err(reason) => {
                warn!(%reason, fallback = %DEFAULT_SEASON, "season list unavailable, using fallback");
                vec![DEFAULT_SEASON]
            }
        }
    }

    fn fetch_seasons(&self) -> Result<Vec<Season>, String> {
        let page = PageRequest::first(self.page_limit).map_err(|e: FetchError| e.to_string())?;
        let raw = self.source.fetch(SEASONS_ENDPOINT, page).map_err(|e| e.to_string())?;
        let decoded = SeasonPage::decode(&raw).map_err(|e| e.to_string())?;

        let mut seasons: Vec<Season> = decoded
            .seasons
            .iter()
            .filter_map(|dto| {
                let text = dto.season.as_text();
                text.parse::<Season>()
                    .inspect_err(|err| debug!(%err, raw = %text, "skipping season entry"))
                    .ok()
            })
            .collect();

        seasons.sort_unstable_by(|a, b| b.cmp(a));
        seasons.dedup();
        Ok(seasons)
    }
}
