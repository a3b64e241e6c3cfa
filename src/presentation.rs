// src/presentation.rs
use std::io::Write;

use comfy_table::{Table, presets};
use f1_results_domain::{
    ROW_COLUMNS, RaceResultRow,
    analytics::{ConstructorComparison, DriverComparison, FinishCount, KpiSummary, ProgressionStep, Standing},
};
use f1_results_infra::export::{row_cells, write_delimited_table};
use f1_results_shared_kernel::{InfrastructureError, Result, Season};
use serde::Serialize;

use crate::options::OutputFormat;

/// Printed when filters leave nothing to show.
pub const NO_DATA_MESSAGE: &str = "No data matches the selected filters";

/// Records that can be laid out as a table.
pub trait Tabular {
    fn headers() -> Vec<&'static str>;
    fn cells(&self) -> Vec<String>;
}

impl Tabular for RaceResultRow {
    fn headers() -> Vec<&'static str> {
        ROW_COLUMNS.to_vec()
    }

    fn cells(&self) -> Vec<String> {
        row_cells(self)
    }
}

impl Tabular for Season {
    fn headers() -> Vec<&'static str> {
        vec!["season"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl Tabular for Standing {
    fn headers() -> Vec<&'static str> {
        vec!["name", "points", "entries"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.points.to_string(), self.entries.to_string()]
    }
}

impl Tabular for FinishCount {
    fn headers() -> Vec<&'static str> {
        vec!["driver", "count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.driver.clone(), self.count.to_string()]
    }
}

impl Tabular for DriverComparison {
    fn headers() -> Vec<&'static str> {
        vec!["driver", "points", "avg_position", "podiums", "wins", "races"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.driver.clone(),
            self.points.to_string(),
            optional(self.avg_position),
            self.podiums.to_string(),
            self.wins.to_string(),
            self.races.to_string(),
        ]
    }
}

impl Tabular for ConstructorComparison {
    fn headers() -> Vec<&'static str> {
        vec!["constructor", "total_points", "mean_points", "mean_position", "best_position", "entries"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.constructor.clone(),
            self.total_points.to_string(),
            self.mean_points.to_string(),
            optional(self.mean_position),
            optional(self.best_position),
            self.entries.to_string(),
        ]
    }
}

/// Leader after each round, for the table view of the progression.
struct RoundLeader<'a>(&'a ProgressionStep);

impl Tabular for RoundLeader<'_> {
    fn headers() -> Vec<&'static str> {
        vec!["round", "race", "leader", "points"]
    }

    fn cells(&self) -> Vec<String> {
        let step = self.0;
        let leader = step
            .totals
            .iter()
            .max_by(|(a_name, a), (b_name, b)| a.total_cmp(b).then_with(|| b_name.cmp(a_name)));
        vec![
            step.round.to_string(),
            step.race.clone(),
            leader.map(|(name, _)| name.clone()).unwrap_or_default(),
            leader.map(|(_, points)| points.to_string()).unwrap_or_default(),
        ]
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Everything `summary` prints for one filtered row-set.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonSummary {
    pub season: Season,
    pub kpi: KpiSummary,
    pub driver_standings: Vec<Standing>,
    pub constructor_standings: Vec<Standing>,
    pub podiums: Vec<FinishCount>,
    pub wins: Vec<FinishCount>,
    pub progression: Vec<ProgressionStep>,
}

pub fn write_records<T: Tabular + Serialize>(records: &[T], format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(records, out),
        OutputFormat::Jsonl => {
            for record in records {
                serde_json::to_writer(&mut *out, record)?;
                writeln!(out)?;
            }
            Ok(())
        }
        OutputFormat::Yaml => write_yaml(records, out),
        OutputFormat::Csv | OutputFormat::Tsv => {
            let sep = format.separator().unwrap_or(',');
            write_delimited_table(&T::headers(), records.iter().map(Tabular::cells), sep, out)?;
            Ok(())
        }
        OutputFormat::Table => write_table(None, records, presets::UTF8_FULL, out),
        OutputFormat::Md => write_table(None, records, presets::ASCII_MARKDOWN, out),
    }
}

pub fn write_summary(summary: &SeasonSummary, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(summary, out),
        OutputFormat::Jsonl => {
            serde_json::to_writer(&mut *out, summary)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Yaml => write_yaml(summary, out),
        OutputFormat::Csv | OutputFormat::Tsv => {
            let sep = format.separator().unwrap_or(',');
            write_delimited_table(&Standing::headers(), summary.driver_standings.iter().map(Tabular::cells), sep, out)?;
            writeln!(out)?;
            write_delimited_table(
                &Standing::headers(),
                summary.constructor_standings.iter().map(Tabular::cells),
                sep,
                out,
            )?;
            Ok(())
        }
        OutputFormat::Table | OutputFormat::Md => {
            let (preset, heading) =
                if format == OutputFormat::Md { (presets::ASCII_MARKDOWN, "### ") } else { (presets::UTF8_FULL, "") };
            write_kpi(&summary.kpi, summary.season, out)?;
            let leaders: Vec<_> = summary.progression.iter().map(RoundLeader).collect();
            write_table(Some(&format!("{heading}Driver standings")), &summary.driver_standings, preset, out)?;
            write_table(Some(&format!("{heading}Constructor standings")), &summary.constructor_standings, preset, out)?;
            write_table(Some(&format!("{heading}Podiums")), &summary.podiums, preset, out)?;
            write_table(Some(&format!("{heading}Wins")), &summary.wins, preset, out)?;
            write_table(Some(&format!("{heading}Championship leader by round")), &leaders, preset, out)
        }
    }
}

pub fn write_kpi(kpi: &KpiSummary, season: Season, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Season {season}")?;
    writeln!(out, "  Races:        {}", kpi.races)?;
    writeln!(out, "  Drivers:      {}", kpi.drivers)?;
    writeln!(out, "  Constructors: {}", kpi.constructors)?;
    match &kpi.points_leader {
        Some(leader) => writeln!(out, "  Leader:       {} ({} pts)", leader.driver, leader.points)?,
        None => writeln!(out, "  Leader:       -")?,
    }
    writeln!(out)?;
    Ok(())
}

fn write_table<T: Tabular>(title: Option<&str>, records: &[T], preset: &str, out: &mut impl Write) -> Result<()> {
    if let Some(title) = title {
        writeln!(out, "{title}")?;
    }
    let mut table = Table::new();
    table.load_preset(preset).set_header(T::headers());
    for record in records {
        table.add_row(record.cells());
    }
    writeln!(out, "{table}")?;
    if title.is_some() {
        writeln!(out)?;
    }
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(value: &T, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_yaml<T: Serialize + ?Sized>(value: &T, out: &mut impl Write) -> Result<()> {
    serde_yaml::to_writer(&mut *out, value).map_err(InfrastructureError::from)?;
    Ok(())
}
