// SPDX-License-Identifier: MIT
//
// Plot configuration and the column selector.
//
// A render is configured by which series to draw and by a few layout
// constants. The selector is the user-facing part: `all`, or 1-based
// series numbers separated by commas (`2,4,5`). Series numbers count from
// the first column after the x-axis, so `1` is the second column of the
// file.
//
// | Setting         | Default | Meaning                                  |
// |-----------------|---------|------------------------------------------|
// | `columns`       | all     | which series to draw, in what order      |
// | `aspect`        | 2       | cell height ÷ cell width of the font     |
// | `precision`     | 5       | decimals on the y-axis tick labels       |

use crate::error::{PlotError, Result};

// ─── ColumnSelection ────────────────────────────────────────────────────────

/// Which series a plot draws.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColumnSelection {
    /// Every series, in file order.
    #[default]
    All,

    /// The listed series, 1-based, in the listed order. Kept signed so a
    /// negative entry reports as out of range rather than malformed.
    Only(Vec<i64>),
}

impl ColumnSelection {
    /// Parse a selector: `all`, or comma-separated 1-based series numbers.
    ///
    /// Range checking happens later, against the actual table.
    ///
    /// # Errors
    ///
    /// [`PlotError::InvalidSelector`] if an entry is not an integer, or the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use xp_plot::ColumnSelection;
    ///
    /// assert_eq!(ColumnSelection::parse("all")?, ColumnSelection::All);
    /// assert_eq!(ColumnSelection::parse("2, 4")?, ColumnSelection::Only(vec![2, 4]));
    /// # Ok::<(), xp_plot::PlotError>(())
    /// ```
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        if spec.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        let indices = spec
            .split(',')
            .map(|entry| entry.trim().parse::<i64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| PlotError::InvalidSelector(spec.to_string()))?;

        Ok(Self::Only(indices))
    }

    /// Resolve to 0-based series indices for a table with `available` series.
    ///
    /// # Errors
    ///
    /// [`PlotError::ColumnOutOfRange`] for the first index outside
    /// `1..=available`.
    pub fn resolve(&self, available: usize) -> Result<Vec<usize>> {
        match self {
            Self::All => Ok((0..available).collect()),
            Self::Only(indices) => indices
                .iter()
                .map(|&index| match usize::try_from(index) {
                    Ok(i) if (1..=available).contains(&i) => Ok(i - 1),
                    _ => Err(PlotError::ColumnOutOfRange { index, available }),
                })
                .collect(),
        }
    }
}

// ─── PlotConfig ─────────────────────────────────────────────────────────────

/// Width-to-height ratio of one character cell's dot block.
pub const DEFAULT_ASPECT: u16 = 2;

/// Decimals printed on y-axis ticks.
pub const DEFAULT_PRECISION: usize = 5;

/// Everything a render needs besides the data and the terminal size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotConfig {
    /// Series to draw.
    pub columns: ColumnSelection,
    /// Cell aspect ratio used to derive the canvas height from its width.
    pub aspect: u16,
    /// Decimals on y-axis tick labels.
    pub precision: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            columns: ColumnSelection::All,
            aspect: DEFAULT_ASPECT,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl PlotConfig {
    /// Default configuration drawing every series.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the plot to `columns`.
    #[must_use]
    pub fn with_columns(self, columns: ColumnSelection) -> Self {
        Self { columns, ..self }
    }

    /// Override the cell aspect ratio (minimum 1).
    #[must_use]
    pub fn with_aspect(self, aspect: u16) -> Self {
        Self {
            aspect: aspect.max(1),
            ..self
        }
    }

    /// Override the tick-label decimals.
    #[must_use]
    pub fn with_precision(self, precision: usize) -> Self {
        Self { precision, ..self }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
