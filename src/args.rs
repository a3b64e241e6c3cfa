// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueHint};
use f1_results_domain::Range;
use f1_results_infra::persistence::DEFAULT_SNAPSHOT_FILE;
use f1_results_shared_kernel::Season;

use crate::{options::OutputFormat, parsers};

#[derive(Parser, Debug)]
#[command(name = "f1_results", version, about = "Formula 1 season results from an Ergast-compatible API")]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// API base URL, e.g. http://ergast.com/api/f1
    #[arg(long, env = "F1_RESULTS_BASE_URL", global = true, value_hint = ValueHint::Url)]
    pub base_url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, env = "F1_RESULTS_TIMEOUT", global = true, value_parser = parsers::parse_positive_secs)]
    pub timeout: Option<u64>,

    /// Results requested per page
    #[arg(long, global = true, value_parser = parsers::parse_positive_u32)]
    pub page_size: Option<u32>,

    /// Settings file (YAML or JSON)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available seasons, newest first
    Seasons {
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Print a season's (filtered) race results
    Results {
        season: Season,
        #[command(flatten)]
        filter: FilterOptions,
        #[command(flatten)]
        output: OutputOptions,
    },
    /// Headline numbers, standings, podiums and wins
    Summary {
        season: Season,
        #[command(flatten)]
        filter: FilterOptions,
        #[command(flatten)]
        output: OutputOptions,
    },
    /// Head-to-head of two drivers, or a constructor comparison when no driver is given
    Compare {
        season: Season,
        /// Driver full name (repeat for head-to-head)
        #[arg(long = "driver")]
        drivers: Vec<String>,
        #[command(flatten)]
        filter: FilterOptions,
        #[command(flatten)]
        output: OutputOptions,
    },
    /// Write filtered results as CSV
    Export {
        season: Season,
        #[command(flatten)]
        filter: FilterOptions,
        /// Destination file (default: f1_{SEASON}_filtered_data.csv)
        #[arg(long, short, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
    /// Save one raw API page as pretty-printed JSON
    Snapshot {
        #[arg(long, default_value = "2023")]
        season: Season,
        /// Endpoint below the season, e.g. `results` or `qualifying`
        #[arg(long, default_value = "results")]
        endpoint: String,
        #[arg(long, default_value_t = 0)]
        offset: u64,
        #[arg(long, default_value_t = 100, value_parser = parsers::parse_positive_u32)]
        limit: u32,
        #[arg(long, short, default_value = DEFAULT_SNAPSHOT_FILE, value_hint = ValueHint::FilePath)]
        output: PathBuf,
    },
    /// Interactive filtering over one season, reading commands from stdin
    Explore { season: Season },
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct FilterOptions {
    /// Points range MIN..MAX (default 0..400)
    #[arg(long, value_parser = parsers::parse_points_range, help_heading = "Filters")]
    pub points: Option<Range<f64>>,

    /// Finishing position range MIN..MAX (default 1..20)
    #[arg(long, value_parser = parsers::parse_position_range, help_heading = "Filters")]
    pub positions: Option<Range<u32>>,

    /// Race name to keep (repeatable)
    #[arg(long = "race", help_heading = "Filters")]
    pub races: Vec<String>,

    /// Constructor name to keep (repeatable)
    #[arg(long = "constructor", help_heading = "Filters")]
    pub constructors: Vec<String>,

    /// Start from ranges spanning every observed value instead of the defaults
    #[arg(long, help_heading = "Filters")]
    pub cover: bool,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct OutputOptions {
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(long, short, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_filters_and_globals() {
        let args = Args::try_parse_from([
            "f1_results",
            "results",
            "2023",
            "--points",
            "10..",
            "--positions",
            "1..3",
            "--race",
            "Monaco Grand Prix",
            "--constructor",
            "Ferrari",
            "--constructor",
            "McLaren",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.global.verbose, 2);
        let Command::Results { season, filter, output } = args.command else {
            panic!("expected results command");
        };
        assert_eq!(season.year(), 2023);
        assert_eq!(filter.points, Some(Range::new(Some(10.0), None)));
        assert_eq!(filter.positions, Some(Range::between(1, 3)));
        assert_eq!(filter.constructors, vec!["Ferrari", "McLaren"]);
        assert_eq!(output.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_seasons_before_the_championship() {
        assert!(Args::try_parse_from(["f1_results", "results", "1949"]).is_err());
    }

    #[test]
    fn snapshot_defaults() {
        let args = Args::try_parse_from(["f1_results", "snapshot"]).unwrap();
        let Command::Snapshot { season, endpoint, offset, limit, output } = args.command else {
            panic!("expected snapshot command");
        };
        assert_eq!((season.year(), endpoint.as_str(), offset, limit), (2023, "results", 0, 100));
        assert_eq!(output, PathBuf::from("data.json"));
    }
}
