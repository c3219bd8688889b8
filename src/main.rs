// SPDX-License-Identifier: MIT
//
// xptl-plot — plot the metrics table of an experiment in the terminal.
//
//   xptl-plot INPUT [COLUMNS]
//
// INPUT is a delimited text file whose first column is the x-axis. COLUMNS
// selects the series to draw: `all` (the default) or 1-based series numbers
// such as `2,4,5`. The plot is sized to the terminal this runs in.
//
// This binary only wires things together:
//
//   args → Table::from_path → ColumnSelection::parse → discover_size
//        → xp_plot::render → stdout
//
// Diagnostics go through `log` to stderr; set RUST_LOG=debug to see the
// geometry and fallback decisions.

use std::env;
use std::process;

use xp_plot::{ColumnSelection, PlotConfig, PlotError, Table};
use xp_term::terminal;

const USAGE: &str = "\
usage: xptl-plot INPUT [COLUMNS]

  INPUT    delimited metrics file; the first column is the x-axis
  COLUMNS  `all` (default) or 1-based series numbers, e.g. 2,4,5
";

// ─── Arguments ──────────────────────────────────────────────────────────────

/// What the command line asks for.
#[derive(Debug, PartialEq, Eq)]
enum Invocation<'a> {
    /// No input given: print usage.
    Usage,
    /// Plot `input` with the `columns` selector.
    Plot { input: &'a str, columns: &'a str },
}

impl<'a> Invocation<'a> {
    /// Interpret the arguments after the program name.
    fn from_args(args: &'a [String]) -> Self {
        match args {
            [] => Self::Usage,
            [input] => Self::Plot {
                input,
                columns: "all",
            },
            [input, columns, ..] => Self::Plot { input, columns },
        }
    }
}

/// Read, select, and render. Returns the finished text block.
fn plot(input: &str, columns: &str) -> Result<String, PlotError> {
    let table = Table::from_path(input)?;
    let config = PlotConfig::new().with_columns(ColumnSelection::parse(columns)?);
    let size = terminal::discover_size();
    log::debug!("plotting {input} with columns {columns:?}");
    xp_plot::render(&table, &config, size)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() > 2 {
        log::warn!("ignoring {} extra argument(s)", args.len() - 2);
    }

    match Invocation::from_args(&args) {
        Invocation::Usage => print!("{USAGE}"),
        Invocation::Plot { input, columns } => match plot(input, columns) {
            Ok(text) => print!("{text}"),
            Err(e) => {
                eprintln!("xptl-plot: {e}");
                process::exit(1);
            }
        },
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn no_arguments_prints_usage() {
        assert_eq!(Invocation::from_args(&[]), Invocation::Usage);
    }

    #[test]
    fn columns_default_to_all() {
        let a = args(&["metrics.csv"]);
        assert_eq!(
            Invocation::from_args(&a),
            Invocation::Plot {
                input: "metrics.csv",
                columns: "all"
            }
        );
    }

    #[test]
    fn explicit_columns() {
        let a = args(&["metrics.csv", "2,4"]);
        assert_eq!(
            Invocation::from_args(&a),
            Invocation::Plot {
                input: "metrics.csv",
                columns: "2,4"
            }
        );
    }

    #[test]
    fn missing_input_is_an_error() {
        let err = plot("/nonexistent/xptl/metrics.csv", "all").unwrap_err();
        assert!(err.to_string().starts_with("cannot read input"));
    }

    #[test]
    fn bad_selector_is_an_error() {
        let path = env::temp_dir().join(format!("xptl-plot-selector-{}.csv", process::id()));
        std::fs::write(&path, "t,a\n0,1\n1,2\n").unwrap();
        let err = plot(path.to_str().unwrap(), "x").unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, PlotError::InvalidSelector(_)));
    }
}
