// src/explore.rs
//! Line-oriented interactive session over one season's rows.

use std::{
    io::{BufRead, Write},
    path::Path,
};

use f1_results_domain::{
    RaceResultRow, Range, SeasonResults, SessionState,
    analytics::{Aggregator, KpiSummary, head_to_head},
};
use f1_results_infra::export::export_csv;
use f1_results_shared_kernel::Result;
use tracing::debug;

use crate::{
    options::OutputFormat,
    presentation::{NO_DATA_MESSAGE, write_kpi, write_records},
};

const HELP: &str = "\
Commands:
  points MIN MAX        keep rows whose points fall in MIN..=MAX
  positions MIN MAX     keep rows whose finishing position falls in MIN..=MAX
  race NAME             toggle a race in the selection (none selected = all)
  constructor NAME      toggle a constructor in the selection
  driver NAME           toggle a driver for head-to-head comparison
  compare on|off        show head-to-head under `show`
  filters               list the active ranges and selections
  clear                 reset ranges and race/constructor selections
  show                  print the filtered rows
  kpi                   headline numbers of the filtered rows
  standings             driver standings of the filtered rows
  export PATH           write the filtered rows as CSV
  help                  this text
  quit                  leave";

#[derive(Debug, Clone, PartialEq)]
enum ExploreCommand {
    Points(f64, f64),
    Positions(u32, u32),
    Race(String),
    Constructor(String),
    Driver(String),
    Compare(bool),
    Filters,
    Clear,
    Show,
    Kpi,
    Standings,
    Export(String),
    Help,
    Quit,
    Nothing,
}

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Explorer<'a> {
    results: &'a SeasonResults,
    session: SessionState,
}

impl<'a> Explorer<'a> {
    pub fn new(results: &'a SeasonResults) -> Self {
        Self { results, session: SessionState::for_season(results.season()) }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Filters are re-applied to the immutable season rows on every call.
    pub fn filtered(&self) -> Vec<RaceResultRow> {
        self.results.filter(&self.session.criteria())
    }

    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        writeln!(
            out,
            "Season {}: {} results across {} races. Type `help` for commands.",
            self.results.season(),
            self.results.len(),
            self.results.races().len()
        )?;
        for line in input.lines() {
            if self.execute(&line?, out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Runs one command line. Bad input is reported to `out`, not returned.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "error: {message}")?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?command, "explore command");

        match command {
            ExploreCommand::Points(min, max) => {
                self.session.points_range = Range::between(min, max);
                writeln!(out, "points {}", self.session.points_range)?;
            }
            ExploreCommand::Positions(min, max) => {
                self.session.position_range = Range::between(min, max);
                writeln!(out, "positions {}", self.session.position_range)?;
            }
            ExploreCommand::Race(name) => {
                if self.results.races().contains(&name) {
                    let selected = self.session.toggle_race(&name);
                    writeln!(out, "race '{name}' {}", selection_word(selected))?;
                } else {
                    writeln!(out, "error: unknown race '{name}'")?;
                }
            }
            ExploreCommand::Constructor(name) => {
                if self.results.constructors().contains(&name) {
                    let selected = self.session.toggle_constructor(&name);
                    writeln!(out, "constructor '{name}' {}", selection_word(selected))?;
                } else {
                    writeln!(out, "error: unknown constructor '{name}'")?;
                }
            }
            ExploreCommand::Driver(name) => {
                if self.results.drivers().contains(&name) {
                    let selected = self.session.toggle_driver(&name);
                    writeln!(out, "driver '{name}' {}", selection_word(selected))?;
                } else {
                    writeln!(out, "error: unknown driver '{name}'")?;
                }
            }
            ExploreCommand::Compare(on) => {
                self.session.comparison_mode = on;
                writeln!(out, "comparison mode {}", if on { "on" } else { "off" })?;
            }
            ExploreCommand::Filters => self.write_filters(out)?,
            ExploreCommand::Clear => {
                self.session.reset_filters();
                writeln!(out, "filters cleared")?;
            }
            ExploreCommand::Show => self.show(out)?,
            ExploreCommand::Kpi => {
                let rows = self.filtered();
                write_kpi(&KpiSummary::from_rows(&rows), self.results.season(), out)?;
            }
            ExploreCommand::Standings => {
                let rows = self.filtered();
                if rows.is_empty() {
                    writeln!(out, "{NO_DATA_MESSAGE}")?;
                } else {
                    write_records(&Aggregator::driver_standings(&rows), OutputFormat::Table, out)?;
                }
            }
            ExploreCommand::Export(path) => {
                let rows = self.filtered();
                match export_csv(&rows, Path::new(&path)) {
                    Ok(()) => writeln!(out, "exported {} rows to {path}", rows.len())?,
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            ExploreCommand::Help => writeln!(out, "{HELP}")?,
            ExploreCommand::Quit => return Ok(Flow::Quit),
            ExploreCommand::Nothing => {}
        }
        Ok(Flow::Continue)
    }

    fn write_filters(&self, out: &mut impl Write) -> Result<()> {
        let criteria = self.session.criteria();
        writeln!(out, "points       {}", criteria.points_range)?;
        writeln!(out, "positions    {}", criteria.position_range)?;
        writeln!(out, "races        {}", selection_list(&criteria.selected_races))?;
        writeln!(out, "constructors {}", selection_list(&criteria.selected_constructors))?;
        writeln!(out, "drivers      {}", selection_list(&self.session.selected_drivers))?;
        writeln!(out, "compare      {}", if self.session.comparison_mode { "on" } else { "off" })?;
        Ok(())
    }

    fn show(&self, out: &mut impl Write) -> Result<()> {
        let rows = self.filtered();
        if rows.is_empty() {
            writeln!(out, "{NO_DATA_MESSAGE}")?;
            return Ok(());
        }
        write_records(&rows, OutputFormat::Table, out)?;

        if self.session.comparison_mode {
            match head_to_head(&rows, &self.session.selected_drivers) {
                Ok(comparison) => write_records(&comparison, OutputFormat::Table, out)?,
                Err(err) => writeln!(out, "{err}")?,
            }
        }
        Ok(())
    }
}

fn selection_word(selected: bool) -> &'static str {
    if selected { "selected" } else { "deselected" }
}

fn selection_list<'s>(names: impl IntoIterator<Item = &'s String>) -> String {
    let names: Vec<&str> = names.into_iter().map(String::as_str).collect();
    if names.is_empty() { "(all)".to_string() } else { names.join(", ") }
}

fn parse_command(line: &str) -> std::result::Result<ExploreCommand, String> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match verb.to_ascii_lowercase().as_str() {
        "" => ExploreCommand::Nothing,
        "points" => {
            let (min, max) = parse_pair::<f64>(rest)?;
            if !(min.is_finite() && max.is_finite() && min >= 0.0) {
                return Err("points bounds must be finite and non-negative".to_string());
            }
            ExploreCommand::Points(min, max)
        }
        "positions" => {
            let (min, max) = parse_pair::<u32>(rest)?;
            if min == 0 {
                return Err("positions start at 1".to_string());
            }
            ExploreCommand::Positions(min, max)
        }
        "race" => ExploreCommand::Race(required(rest, "race name")?),
        "constructor" => ExploreCommand::Constructor(required(rest, "constructor name")?),
        "driver" => ExploreCommand::Driver(required(rest, "driver name")?),
        "compare" => match rest {
            "on" => ExploreCommand::Compare(true),
            "off" => ExploreCommand::Compare(false),
            other => return Err(format!("expected `compare on` or `compare off`, got '{other}'")),
        },
        "filters" => ExploreCommand::Filters,
        "clear" => ExploreCommand::Clear,
        "show" => ExploreCommand::Show,
        "kpi" => ExploreCommand::Kpi,
        "standings" => ExploreCommand::Standings,
        "export" => ExploreCommand::Export(required(rest, "path")?),
        "help" | "?" => ExploreCommand::Help,
        "quit" | "exit" => ExploreCommand::Quit,
        other => return Err(format!("unknown command '{other}', try `help`")),
    };
    Ok(command)
}

fn required(rest: &str, what: &str) -> std::result::Result<String, String> {
    if rest.is_empty() { Err(format!("missing {what}")) } else { Ok(rest.to_string()) }
}

fn parse_pair<T>(rest: &str) -> std::result::Result<(T, T), String>
where
    T: std::str::FromStr + PartialOrd,
{
    let mut parts = rest.split_whitespace();
    let (Some(min), Some(max), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected two numbers, got '{rest}'"));
    };
    let min = min.parse::<T>().map_err(|_| format!("invalid number '{min}'"))?;
    let max = max.parse::<T>().map_err(|_| format!("invalid number '{max}'"))?;
    if min > max {
        return Err("minimum is above maximum".to_string());
    }
    Ok((min, max))
}
