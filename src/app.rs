// src/app.rs
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use f1_results_domain::{
    FilterCriteria, RaceResultRow, SeasonResults, SessionState,
    analytics::{Aggregator, ByKey, KpiSummary, constructor_comparison, head_to_head, points_progression},
};
use f1_results_infra::{
    FetchSettings, HttpFetcher, TtlCache,
    export::{default_export_file_name, export_csv},
    persistence::{FileWriter, write_snapshot},
};
use f1_results_shared_kernel::{ErrorContext, Season};
use f1_results_usecase::{BuildSeasonResults, FetchSnapshot, ListSeasons, SnapshotRequest};
use tracing::{info, warn};

use crate::{
    args::{Args, Command, FilterOptions, OutputOptions},
    config::resolve_fetch_settings,
    error::{AppError, Result},
    explore::Explorer,
    options::OutputFormat,
    presentation::{NO_DATA_MESSAGE, SeasonSummary, write_records, write_summary},
};

pub fn run(args: Args) -> Result<()> {
    let settings = resolve_fetch_settings(&args.global)?;
    App::new(settings)?.dispatch(args.command)
}

/// Owns the fetcher and its process-wide cache for one invocation.
pub struct App {
    fetcher: HttpFetcher,
    settings: FetchSettings,
}

impl App {
    pub fn new(settings: FetchSettings) -> Result<Self> {
        let fetcher = HttpFetcher::new(&settings, Arc::new(TtlCache::new())).context("creating HTTP client")?;
        info!(base_url = fetcher.base_url(), page_limit = settings.page_limit, "fetcher ready");
        Ok(Self { fetcher, settings })
    }

    pub fn dispatch(&self, command: Command) -> Result<()> {
        match command {
            Command::Seasons { format } => self.seasons(format),
            Command::Results { season, filter, output } => self.results(season, &filter, &output),
            Command::Summary { season, filter, output } => self.summary(season, &filter, &output),
            Command::Compare { season, drivers, filter, output } => self.compare(season, &drivers, &filter, &output),
            Command::Export { season, filter, output } => self.export(season, &filter, output),
            Command::Snapshot { season, endpoint, offset, limit, output } => {
                self.snapshot(season, &endpoint, offset, limit, &output)
            }
            Command::Explore { season } => self.explore(season),
        }
    }

    fn seasons(&self, format: OutputFormat) -> Result<()> {
        let seasons = ListSeasons::new(&self.fetcher).with_page_limit(self.settings.page_limit).run();
        with_output(None, |out| write_records(&seasons, format, out))
    }

    fn results(&self, season: Season, filter: &FilterOptions, output: &OutputOptions) -> Result<()> {
        let rows = self.filtered_rows(season, filter)?;
        with_output(output.output.as_deref(), |out| write_records(&rows, output.format, out))
    }

    fn summary(&self, season: Season, filter: &FilterOptions, output: &OutputOptions) -> Result<()> {
        let rows = self.filtered_rows(season, filter)?;
        let summary = SeasonSummary {
            season,
            kpi: KpiSummary::from_rows(&rows),
            driver_standings: Aggregator::driver_standings(&rows),
            constructor_standings: Aggregator::constructor_standings(&rows),
            podiums: Aggregator::podium_counts(&rows),
            wins: Aggregator::win_counts(&rows),
            progression: points_progression(&rows, ByKey::Driver),
        };
        with_output(output.output.as_deref(), |out| write_summary(&summary, output.format, out))
    }

    fn compare(&self, season: Season, drivers: &[String], filter: &FilterOptions, output: &OutputOptions) -> Result<()> {
        let rows = self.filtered_rows(season, filter)?;
        if drivers.is_empty() {
            let comparison = constructor_comparison(&rows);
            return with_output(output.output.as_deref(), |out| write_records(&comparison, output.format, out));
        }

        for driver in drivers {
            if !rows.iter().any(|r| &r.driver == driver) {
                warn!(%driver, "driver has no rows after filtering");
            }
        }
        let comparison = head_to_head(&rows, drivers).context("comparing drivers")?;
        with_output(output.output.as_deref(), |out| write_records(&comparison, output.format, out))
    }

    fn export(&self, season: Season, filter: &FilterOptions, output: Option<PathBuf>) -> Result<()> {
        let rows = self.filtered_rows(season, filter)?;
        let path = output.unwrap_or_else(|| PathBuf::from(default_export_file_name(season)));
        export_csv(&rows, &path).with_context(|| format!("exporting to {}", path.display()))?;
        println!("Exported {} rows to {}", rows.len(), path.display());
        Ok(())
    }

    fn snapshot(&self, season: Season, endpoint: &str, offset: u64, limit: u32, output: &Path) -> Result<()> {
        let endpoint = format!("{season}/{}", endpoint.trim_matches('/'));
        let request = SnapshotRequest::new(endpoint, offset, limit)?;
        let raw = FetchSnapshot::new(&self.fetcher).run(&request)?;
        write_snapshot(&raw, output).with_context(|| format!("writing snapshot to {}", output.display()))?;
        println!("Saved {} to {}", raw.url(), output.display());
        Ok(())
    }

    fn explore(&self, season: Season) -> Result<()> {
        let results = self.load_season(season)?;
        let stdin = io::stdin();
        let mut stdout = io::stdout().lock();
        Explorer::new(&results).run(stdin.lock(), &mut stdout)?;
        Ok(())
    }

    fn load_season(&self, season: Season) -> Result<SeasonResults> {
        let results = BuildSeasonResults::new(&self.fetcher).with_page_limit(self.settings.page_limit).run(season);
        if results.is_empty() {
            return Err(AppError::no_data(format!("No results available for season {season}")));
        }
        Ok(results)
    }

    fn filtered_rows(&self, season: Season, filter: &FilterOptions) -> Result<Vec<RaceResultRow>> {
        let results = self.load_season(season)?;
        let criteria = criteria_from(filter, &results);
        let rows = results.filter(&criteria);
        if rows.is_empty() {
            return Err(AppError::no_data(NO_DATA_MESSAGE));
        }
        Ok(rows)
    }
}

/// Flag values replace the defaults; unset flags keep them.
pub fn criteria_from(filter: &FilterOptions, results: &SeasonResults) -> FilterCriteria {
    let base =
        if filter.cover { FilterCriteria::covering(results.rows()) } else { SessionState::default().criteria() };

    let known_races = results.races();
    for race in filter.races.iter().filter(|r| !known_races.contains(*r)) {
        warn!(%race, "race not found in season");
    }
    let known_constructors = results.constructors();
    for constructor in filter.constructors.iter().filter(|c| !known_constructors.contains(*c)) {
        warn!(%constructor, "constructor not found in season");
    }

    FilterCriteria {
        points_range: filter.points.unwrap_or(base.points_range),
        position_range: filter.positions.unwrap_or(base.position_range),
        ..base
    }
    .with_races(filter.races.iter().cloned())
    .with_constructors(filter.constructors.iter().cloned())
}

fn with_output<F>(path: Option<&Path>, write: F) -> Result<()>
where
    F: FnOnce(&mut Box<dyn Write>) -> f1_results_shared_kernel::Result<()>,
{
    let mut out: Box<dyn Write> = match path {
        Some(path) => Box::new(FileWriter::create(path).with_context(|| format!("creating {}", path.display()))?),
        None => Box::new(io::stdout().lock()),
    };
    write(&mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use f1_results_domain::Range;

    use super::*;

    fn results() -> SeasonResults {
        let row = |race: &str, constructor: &str, position: Option<u32>, points: f64| RaceResultRow {
            round: 1,
            race: race.to_string(),
            date: NaiveDate::from_ymd_opt(2023, 3, 5).unwrap(),
            driver: "Driver".to_string(),
            constructor: constructor.to_string(),
            position,
            points,
            status: "Finished".to_string(),
        };
        SeasonResults::from_rows(
            Season::new(2023).unwrap(),
            vec![row("A", "Ferrari", Some(1), 25.0), row("A", "Haas", Some(22), 0.0)],
        )
    }

    #[test]
    fn default_criteria_match_slider_defaults() {
        let criteria = criteria_from(&FilterOptions::default(), &results());
        assert_eq!(criteria.points_range, Range::between(0.0, 400.0));
        assert_eq!(criteria.position_range, Range::between(1, 20));
    }

    #[test]
    fn cover_spans_observed_values() {
        let filter = FilterOptions { cover: true, ..Default::default() };
        let criteria = criteria_from(&filter, &results());
        assert_eq!(criteria.position_range, Range::between(1, 22));
        assert_eq!(criteria.points_range, Range::between(0.0, 25.0));
    }

    #[test]
    fn flags_override_and_select() {
        let filter = FilterOptions {
            positions: Some(Range::between(1, 3)),
            constructors: vec!["Ferrari".into()],
            ..Default::default()
        };
        let criteria = criteria_from(&filter, &results());
        assert_eq!(criteria.position_range, Range::between(1, 3));
        assert!(criteria.selected_constructors.contains("Ferrari"));
        assert_eq!(results().filter(&criteria).len(), 1);
    }
}
