// SPDX-License-Identifier: MIT
//
// Everything that can stop a plot from being drawn.
//
// Each variant aborts the render for that input; there is no partial or
// degraded output. Unparseable numbers are not here on purpose: they are
// read as 0.0 where they occur.

use std::io;

use xp_term::CanvasError;

/// Which data axis a range error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

/// Errors from reading, validating, or rendering a plot.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// Fewer than two columns: there is no series next to the x-axis.
    #[error("need an x column and at least one series, found {found} column(s)")]
    InsufficientColumns { found: usize },

    /// A selected series index is not in `1..=available`.
    #[error("the provided columns are out of range: {index} is not in 1..={available}")]
    ColumnOutOfRange { index: i64, available: usize },

    /// The column selector is not a comma-separated list of integers.
    #[error("invalid column selector {0:?}: expected `all` or indices like 2,4,5")]
    InvalidSelector(String),

    /// A data row has a different number of fields than the header.
    #[error("line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The table has a header but no data rows.
    #[error("no data rows to plot")]
    EmptyTable,

    /// All samples share one value on `axis`, so it cannot be normalized.
    #[error("degenerate {axis} range: every value is {value}")]
    DegenerateRange { axis: Axis, value: f64 },

    /// The terminal is too small for even a 1×1 canvas.
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// The input could not be read.
    #[error("cannot read input: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for plotting operations.
pub type Result<T, E = PlotError> = std::result::Result<T, E>;
