// SPDX-License-Identifier: MIT
//
// xp-plot — experiment metrics as terminal line charts.
//
// Reads a delimited table whose first column is the x-axis and whose other
// columns are series, scales every selected series into one shared range,
// and draws them as colored Braille lines with tick labels, an x range, and
// a legend. The result is a plain `String`; writing it anywhere is up to the
// caller.

pub mod bounds;
pub mod config;
pub mod error;
pub mod layout;
pub mod plot;
pub mod table;

pub use bounds::Bounds;
pub use config::{ColumnSelection, PlotConfig};
pub use error::{Axis, PlotError, Result};
pub use plot::{Plot, Series, render};
pub use table::{Delimiter, Table};
