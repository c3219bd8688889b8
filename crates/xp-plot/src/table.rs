// SPDX-License-Identifier: MIT
//
// Table — delimited text in, numeric columns out.
//
// The input is one header line followed by rows of numbers. The delimiter is
// picked from the header: `;` wins over `,`, and a header with neither is
// split on whitespace. Column 0 is the shared x-axis; every further column
// is one series.
//
// Reading is lossy on purpose. A field that is not a finite number (empty,
// `NaN`, `inf`, a typo) becomes 0.0 instead of rejecting the file, so a log
// that is still being written can be plotted mid-run. The shape is not
// negotiable though: a row with the wrong number of fields is an error.

use std::fs;
use std::path::Path;

use crate::error::{PlotError, Result};

// ─── Delimiter ──────────────────────────────────────────────────────────────

/// Field separator, detected from the header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Semicolon,
    Comma,
    /// Runs of spaces or tabs.
    Whitespace,
}

impl Delimiter {
    /// Pick the delimiter for a header line.
    #[must_use]
    pub fn detect(header: &str) -> Self {
        if header.contains(';') {
            Self::Semicolon
        } else if header.contains(',') {
            Self::Comma
        } else {
            Self::Whitespace
        }
    }

    /// Split one line into its fields.
    #[must_use]
    pub fn split(self, line: &str) -> Vec<&str> {
        match self {
            Self::Semicolon => line.split(';').collect(),
            Self::Comma => line.split(',').collect(),
            Self::Whitespace => line.split_whitespace().collect(),
        }
    }
}

/// Read one field as a number. Anything that is not a finite number is 0.0.
#[must_use]
pub fn parse_field(field: &str) -> f64 {
    match field.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            log::debug!("non-numeric field {field:?} read as 0.0");
            0.0
        }
    }
}

// ─── Table ──────────────────────────────────────────────────────────────────

/// Named numeric columns of equal length.
///
/// # Examples
///
/// ```
/// use xp_plot::Table;
///
/// let table = Table::parse("t;loss\n0;1.5\n1;0.75\n")?;
/// assert_eq!(table.headers(), ["t", "loss"]);
/// assert_eq!(table.x(), [0.0, 1.0]);
/// assert_eq!(table.series(0), Some(&[1.5, 0.75][..]));
/// # Ok::<(), xp_plot::PlotError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl Table {
    /// Parse delimited text: a header line, then data rows.
    ///
    /// Blank lines after the header are skipped. Windows line endings are
    /// accepted.
    ///
    /// # Errors
    ///
    /// [`PlotError::RaggedRow`] if a row's field count differs from the
    /// header's.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let header = lines.next().unwrap_or_default();
        let delimiter = Delimiter::detect(header);

        let headers: Vec<String> = delimiter
            .split(header)
            .into_iter()
            .map(|h| h.trim().to_string())
            .collect();
        let mut columns = vec![Vec::new(); headers.len()];

        for (n, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields = delimiter.split(line);
            if fields.len() != headers.len() {
                return Err(PlotError::RaggedRow {
                    // 1-based, and the header is line 1.
                    line: n + 2,
                    expected: headers.len(),
                    found: fields.len(),
                });
            }
            for (column, field) in columns.iter_mut().zip(fields) {
                column.push(parse_field(field));
            }
        }

        log::debug!(
            "read {} column(s) × {} row(s), delimiter {delimiter:?}",
            headers.len(),
            columns.first().map_or(0, Vec::len)
        );

        Ok(Self { headers, columns })
    }

    /// Read and parse a file.
    ///
    /// # Errors
    ///
    /// [`PlotError::Io`] if the file cannot be read, otherwise as
    /// [`Table::parse`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// All column headers, x-axis first.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of columns, including the x-axis.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Header of the x column.
    #[must_use]
    pub fn x_header(&self) -> &str {
        self.headers.first().map_or("", String::as_str)
    }

    /// Samples of the x column.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        self.columns.first().map_or(&[], Vec::as_slice)
    }

    /// Number of series (columns after the x-axis).
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.headers.len().saturating_sub(1)
    }

    /// Header of series `i` (0-based, not counting the x column).
    #[must_use]
    pub fn series_header(&self, i: usize) -> Option<&str> {
        self.headers.get(i + 1).map(String::as_str)
    }

    /// Samples of series `i` (0-based, not counting the x column).
    #[must_use]
    pub fn series(&self, i: usize) -> Option<&[f64]> {
        self.columns.get(i + 1).map(Vec::as_slice)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
