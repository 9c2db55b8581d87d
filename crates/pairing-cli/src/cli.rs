//! CLI argument definitions for the employee pair finder.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pair-employees",
    version,
    about = "Find the pair of employees who worked together the longest",
    long_about = "Find the pair of employees who spent the most days assigned to the same\n\
                  projects at the same time.\n\n\
                  Reads a CSV file with EmpID, ProjectID, DateFrom and DateTo columns.\n\
                  Dates may be written D/M/Y or Y-M-D; NULL means \"still assigned\"."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the pair that worked together the longest, one row per shared project.
    Longest(InputArgs),

    /// List every employee pair with its total overlap.
    Pairs(InputArgs),
}

#[derive(Parser)]
pub struct InputArgs {
    /// Assignment CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Date layout used by the whole file.
    #[arg(long = "date-layout", value_enum, default_value = "auto")]
    pub date_layout: DateLayoutArg,

    /// Instant that NULL dates resolve to (default: now).
    ///
    /// Accepts YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS. Pin this to make runs with
    /// open-ended assignments reproducible.
    #[arg(
        long = "reference-date",
        value_name = "DATE",
        value_parser = parse_reference_instant
    )]
    pub reference_date: Option<NaiveDateTime>,

    /// Field delimiter (a single character, or "tab").
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value = ",",
        value_parser = parse_delimiter
    )]
    pub delimiter: u8,

    /// Treat the first row as data instead of a header.
    #[arg(long = "no-headers")]
    pub no_headers: bool,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputFormatArg,
}

/// CLI date layout choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DateLayoutArg {
    /// Detect from the first start date: any '/' means D/M/Y.
    Auto,
    /// Day/month/year, e.g. 05/01/2023.
    Dmy,
    /// Year-month-day, e.g. 2023-01-05.
    Ymd,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_reference_instant(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| format!("expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS, got '{value}'"))
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(format!("delimiter must be a single ASCII character, got '{value}'")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_instant_accepts_date_or_datetime() {
        let date = parse_reference_instant("2024-03-01").unwrap();
        assert_eq!(date.to_string(), "2024-03-01 00:00:00");
        let datetime = parse_reference_instant("2024-03-01T12:30:00").unwrap();
        assert_eq!(datetime.to_string(), "2024-03-01 12:30:00");
        assert!(parse_reference_instant("01/03/2024").is_err());
    }

    #[test]
    fn delimiter_must_be_one_ascii_char() {
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter("tab"), Ok(b'\t'));
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("é").is_err());
    }

    #[test]
    fn parses_longest_command() {
        let cli = Cli::try_parse_from([
            "pair-employees",
            "longest",
            "data.csv",
            "--date-layout",
            "dmy",
            "--reference-date",
            "2024-01-01",
        ])
        .unwrap();
        match cli.command {
            Command::Longest(args) => {
                assert_eq!(args.input, PathBuf::from("data.csv"));
                assert!(matches!(args.date_layout, DateLayoutArg::Dmy));
                assert!(args.reference_date.is_some());
                assert_eq!(args.delimiter, b',');
            }
            Command::Pairs(_) => panic!("expected longest"),
        }
    }
}
