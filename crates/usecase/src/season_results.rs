use f1_results_domain::{
    RaceResultRow, SeasonResults,
    parsing::{full_name, parse_race_date, try_parse_points, try_parse_position},
};
use f1_results_ports::{
    ResultsSource,
    wire::{RaceDto, RacePage, ResultDto},
};
use f1_results_shared_kernel::{DEFAULT_PAGE_LIMIT, DataShapeError, DataShapeResult, PageRequest, Season};
use tracing::{debug, info, warn};

use crate::dto::{PaginationReport, StopReason};

/// Collects every race result of a season by walking the paginated endpoint.
///
/// Never fails: a failed or malformed page ends pagination and the rows
/// gathered so far are returned.
pub struct BuildSeasonResults<'a> {
    source: &'a dyn ResultsSource,
    page_limit: u32,
}

impl<'a> BuildSeasonResults<'a> {
    pub fn new(source: &'a dyn ResultsSource) -> Self {
        Self { source, page_limit: DEFAULT_PAGE_LIMIT }
    }

    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit;
        self
    }

    pub fn run(&self, season: Season) -> SeasonResults {
        self.run_with_report(season).0
    }

    pub fn run_with_report(&self, season: Season) -> (SeasonResults, PaginationReport) {
        let (rows, report) = self.collect_rows(season);

        match &report.stop {
            stop if stop.is_complete() => {
                info!(%season, rows = rows.len(), pages = report.pages, "season results collected");
            }
            stop => warn!(%season, rows = rows.len(), pages = report.pages, ?stop, "pagination stopped early"),
        }

        if rows.is_empty() {
            return (SeasonResults::empty(season), report);
        }
        (SeasonResults::from_rows(season, rows), report)
    }

    fn collect_rows(&self, season: Season) -> (Vec<RaceResultRow>, PaginationReport) {
        let endpoint = season.results_endpoint();
        let mut rows = Vec::new();
        let mut pages = 0;

        let mut page = match PageRequest::first(self.page_limit) {
            Ok(page) => page,
            Err(err) => return (rows, PaginationReport { pages, stop: StopReason::FetchFailed(err.to_string()) }),
        };

        let stop = loop {
            pages += 1;
            let raw = match self.source.fetch(&endpoint, page) {
                Ok(raw) => raw,
                Err(err) => break StopReason::FetchFailed(err.to_string()),
            };

            let decoded = match RacePage::decode(&raw) {
                Ok(decoded) => decoded,
                Err(err) => break StopReason::DataShape(err.to_string()),
            };
            if decoded.races.is_empty() {
                break StopReason::EmptyPage;
            }

            match flatten_races(&decoded.races, page.offset()) {
                Ok(mut page_rows) => {
                    debug!(offset = page.offset(), rows = page_rows.len(), "page flattened");
                    rows.append(&mut page_rows);
                }
                Err(err) => break StopReason::DataShape(err.to_string()),
            }

            let next = page.next();
            let total = match decoded.total() {
                Ok(total) => total,
                Err(err) => break StopReason::DataShape(err.to_string()),
            };
            if next.offset() >= total {
                break StopReason::Exhausted;
            }
            page = next;
        };

        (rows, PaginationReport { pages, stop })
    }
}

/// Flattens one page. A page is taken whole or not at all.
fn flatten_races(races: &[RaceDto], offset: u64) -> DataShapeResult<Vec<RaceResultRow>> {
    let mut rows = Vec::with_capacity(races.iter().map(|r| r.results.len()).sum());
    for (idx, race) in races.iter().enumerate() {
        let path = format!("MRData.RaceTable.Races[{idx}]@{offset}");
        let round_text = race.round.as_text();
        let round = round_text
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&r| r > 0)
            .ok_or_else(|| DataShapeError::InvalidValue { path: format!("{path}.round"), value: round_text.to_string() })?;
        let date = parse_race_date(&race.date, &format!("{path}.date"))?;

        rows.extend(race.results.iter().map(|result| flatten_result(round, race, date, result)));
    }
    Ok(rows)
}

fn flatten_result(round: u32, race: &RaceDto, date: chrono::NaiveDate, result: &ResultDto) -> RaceResultRow {
    let driver = full_name(&result.driver.given_name, &result.driver.family_name);

    let raw_position = result.position.as_ref().map(|p| p.as_text());
    let position = try_parse_position(raw_position.as_deref()).unwrap_or_else(|warning| {
        debug!(%warning, driver = %driver, round, "position treated as absent");
        None
    });

    let raw_points = result.points.as_ref().map(|p| p.as_text());
    let points = try_parse_points(raw_points.as_deref()).unwrap_or_else(|warning| {
        debug!(%warning, driver = %driver, round, "points defaulted to zero");
        0.0
    });

    RaceResultRow {
        round,
        race: race.race_name.clone(),
        date,
        driver,
        constructor: result.constructor.name.clone(),
        position,
        points,
        status: result.status.clone().unwrap_or_default(),
    }
}
