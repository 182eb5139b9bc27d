//! # pyloc
//!
//! A CLI tool for line statistics of Python source trees.
//!
//! ## Overview
//!
//! pyloc is built on top of pyloclib. It walks a directory, classifies every
//! `.py` file into code, docstring, comment and blank lines, writes one CSV row
//! per file with the file's directory levels, and can print the largest files
//! as a table.
//!
//! ## Usage
//!
//! ```bash
//! # Count a project, write code_statistics.csv
//! pyloc -p ./project
//!
//! # Look five levels deep, skip virtualenvs, show the top 10
//! pyloc -p ./project -k 5 -e venv -e .tox --print
//!
//! # Write elsewhere and dump the full report as JSON
//! pyloc -p ./project -o /tmp/stats.csv --json
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::info;
use pyloclib::{
    persist, scan, summary_line, FilterConfig, Report, ReportTable, ScanOptions,
    DEFAULT_MAX_DEPTH, DEFAULT_REPORT_FILE, DEFAULT_TOP,
};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("pyloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Statistics for .py files under a path: code, docstrings, comments and blank lines")
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .required(true)
                .help("The input path"),
        )
        .arg(
            Arg::new("depth")
                .short('k')
                .long("depth")
                .value_parser(value_parser!(usize))
                .default_value("3")
                .help("The max depth in the path; deeper directories are ignored"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Skip directories whose path contains this text (repeatable)"),
        )
        .arg(
            Arg::new("print")
                .long("print")
                .action(ArgAction::SetTrue)
                .help("Print the largest results sorted by total lines"),
        )
        .arg(
            Arg::new("top")
                .short('n')
                .long("top")
                .value_parser(value_parser!(usize))
                .default_value("10")
                .help("Number of rows shown by --print"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .default_value(DEFAULT_REPORT_FILE)
                .help("CSV file to write"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Also print the full report as JSON"),
        )
        .arg(
            Arg::new("parallel")
                .short('j')
                .long("parallel")
                .action(ArgAction::SetTrue)
                .help("Classify files in parallel"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("More log output (-v info, -vv debug)"),
        )
}

/// Set up env_logger; RUST_LOG wins over the verbosity flag
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> FilterConfig {
    let mut filter = FilterConfig::new();

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for substring in excludes {
            filter = filter.exclude(substring);
        }
    }

    filter
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let depth = matches
        .get_one::<usize>("depth")
        .copied()
        .unwrap_or(DEFAULT_MAX_DEPTH);
    let top = matches.get_one::<usize>("top").copied().unwrap_or(DEFAULT_TOP);
    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_REPORT_FILE);

    let options = ScanOptions::new()
        .max_depth(depth)
        .filter(build_filter(matches))
        .parallel(matches.get_flag("parallel"));

    info!("scanning {} (max depth {})", path, depth);
    let result = scan(path, options)?;
    let report = Report::from_scan(&result);

    persist(&report, output).with_context(|| format!("failed to write report to {}", output))?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if matches.get_flag("print") {
        let table = ReportTable::top(&report, top);
        print!("{}", table.render(console::colors_enabled()));
    }
    println!("{}", summary_line(&report));

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn defaults() {
        let matches = build_command().get_matches_from(["pyloc", "-p", "src"]);

        assert_eq!(matches.get_one::<usize>("depth"), Some(&DEFAULT_MAX_DEPTH));
        assert_eq!(matches.get_one::<usize>("top"), Some(&DEFAULT_TOP));
        assert_eq!(
            matches.get_one::<String>("output").map(String::as_str),
            Some(DEFAULT_REPORT_FILE)
        );
        assert!(!matches.get_flag("print"));
        assert!(build_filter(&matches).exclude.is_empty());
    }

    #[test]
    fn repeated_excludes() {
        let matches =
            build_command().get_matches_from(["pyloc", "-p", ".", "-e", "venv", "--exclude", "build"]);

        assert_eq!(build_filter(&matches).exclude, vec!["venv", "build"]);
    }

    #[test]
    fn path_is_required() {
        assert!(build_command().try_get_matches_from(["pyloc"]).is_err());
    }
}
