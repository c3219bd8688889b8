// SPDX-License-Identifier: MIT
//
// Canvas — a dot-addressable drawing surface on top of a cell grid.
//
// Each character cell holds a 2×4 block of dots, so a canvas of `rows × cols`
// cells is a `4·rows × 2·cols` dot grid. Callers never see dot coordinates:
// every drawing operation takes a point in the unit square (x to the right,
// y upwards) and the canvas maps it onto the grid itself.
//
// Design:
//
//   - Flat `Vec<Cell>` with row-major indexing, same as any frame buffer.
//     Rows are serialized left to right, so a row is one linear scan.
//
//   - Clipping is silent. A dot that lands outside the grid is dropped
//     before any cell is touched; a line that leaves the canvas still draws
//     its visible part because every step is bounds-checked on its own.
//
//   - Plotting is a bitwise OR into the cell's mask, so drawing the same dot
//     twice is idempotent. Only the cell color is overwritten.
//
// Coordinate mapping:
//
//   The unit square is scaled to `(2·cols − 2) × (4·rows − 4)` dots and then
//   shifted by half a dot horizontally and one dot vertically:
//
//     dot_x = round(x · width_dots + 0.5)
//     dot_y = round((1 − y) · height_dots + 1)
//
//   Rounding is half-to-even. The y axis is flipped so that y = 1 is the
//   top row. The offsets keep both ends of the range inside the grid and
//   line the first and last dot rows up with the tick labels printed beside
//   the canvas.

use std::fmt;

use crate::ansi;
use crate::cell::{Cell, DOTS_TALL, DOTS_WIDE, Dots};

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Errors from canvas construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    /// A canvas needs at least one row and one column.
    #[error("invalid canvas size {rows}×{cols}: both dimensions must be positive")]
    InvalidDimension {
        /// Requested rows.
        rows: u16,
        /// Requested columns.
        cols: u16,
    },
}

// ─── Canvas ──────────────────────────────────────────────────────────────────

/// A grid of Braille cells addressed in unit-square coordinates.
///
/// # Examples
///
/// ```
/// use xp_term::Canvas;
///
/// let mut canvas = Canvas::new(4, 10)?;
/// canvas.line(0.0, 0.0, 1.0, 1.0, 1);
///
/// let rows = canvas.render_rows();
/// assert_eq!(rows.len(), 4);
/// # Ok::<(), xp_term::CanvasError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    rows: u16,
    cols: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    // ─── Construction ────────────────────────────────────────────────────

    /// Create a blank canvas of `rows × cols` character cells.
    ///
    /// # Errors
    ///
    /// [`CanvasError::InvalidDimension`] if either dimension is zero.
    pub fn new(rows: u16, cols: u16) -> Result<Self, CanvasError> {
        if rows == 0 || cols == 0 {
            return Err(CanvasError::InvalidDimension { rows, cols });
        }
        let size = usize::from(rows) * usize::from(cols);
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::EMPTY; size],
        })
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Height in character cells.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// Width in character cells.
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> u16 {
        self.cols
    }

    /// Addressable span in dots, `(width, height)`, that the unit square is
    /// scaled to.
    #[inline]
    #[must_use]
    pub fn dot_span(&self) -> (i64, i64) {
        (
            i64::from(self.cols) * DOTS_WIDE - 2,
            i64::from(self.rows) * DOTS_TALL - 4,
        )
    }

    #[inline]
    const fn index(&self, row: u16, col: u16) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// The cell at `(row, col)`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, row: u16, col: u16) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            Some(&self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// The raw cell slice, row-major.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Total number of lit dots on the canvas.
    #[must_use]
    pub fn lit_dots(&self) -> u32 {
        self.cells.iter().map(|c| c.dots.bits().count_ones()).sum()
    }

    // ─── Clear ───────────────────────────────────────────────────────────

    /// Reset every cell to no dots and the default color.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }

    // ─── Coordinates ─────────────────────────────────────────────────────

    /// Map a unit-square point to dot-grid coordinates.
    ///
    /// Points outside the unit square map outside the grid; nothing is
    /// clamped here.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::suboptimal_flops
    )]
    pub fn transform_coords(&self, x: f64, y: f64) -> (i64, i64) {
        let (width_dots, height_dots) = self.dot_span();

        // `as` saturates for out-of-range floats.
        let dot_x = (x * width_dots as f64 + 0.5).round_ties_even() as i64;
        let dot_y = ((1.0 - y) * height_dots as f64 + 1.0).round_ties_even() as i64;
        (dot_x, dot_y)
    }

    // ─── Drawing ─────────────────────────────────────────────────────────

    /// Light the dot under the unit-square point `(x, y)`.
    ///
    /// The owning cell takes `color` (modulo 16). Points that fall outside
    /// the grid are ignored.
    pub fn set(&mut self, x: f64, y: f64, color: usize) {
        let (dot_x, dot_y) = self.transform_coords(x, y);
        self.plot(dot_x, dot_y, color);
    }

    /// Draw a straight line between two unit-square points.
    ///
    /// Steps once per dot along the longer axis (`r = max(|Δx|, |Δy|)`,
    /// `r + 1` points), interpolating the other axis and rounding, so the
    /// line has no gaps. Each step is clipped independently: a line that
    /// leaves the canvas keeps its visible part.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: usize) {
        let (x1, y1) = self.transform_coords(x1, y1);
        let (x2, y2) = self.transform_coords(x2, y2);

        let x_diff = x1.abs_diff(x2);
        let y_diff = y1.abs_diff(y2);
        let x_dir = if x1 <= x2 { 1.0 } else { -1.0 };
        let y_dir = if y1 <= y2 { 1.0 } else { -1.0 };

        let r = x_diff.max(y_diff);

        for i in 0..=r {
            let mut x = x1 as f64;
            let mut y = y1 as f64;

            // A zero delta never divides, so r == 0 plots the start dot.
            if y_diff != 0 {
                y += (i as f64 * y_diff as f64) / r as f64 * y_dir;
            }
            if x_diff != 0 {
                x += (i as f64 * x_diff as f64) / r as f64 * x_dir;
            }

            self.plot(
                x.round_ties_even() as i64,
                y.round_ties_even() as i64,
                color,
            );
        }
    }

    /// OR one dot into its owning cell. Dots outside the grid are dropped.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn plot(&mut self, dot_x: i64, dot_y: i64, color: usize) {
        let row = dot_y.div_euclid(DOTS_TALL);
        let col = dot_x.div_euclid(DOTS_WIDE);

        if row < 0 || row >= i64::from(self.rows) || col < 0 || col >= i64::from(self.cols) {
            return;
        }

        // Bounds-checked above: 0 <= row < rows, 0 <= col < cols.
        let idx = self.index(row as u16, col as u16);
        self.cells[idx].plot(Dots::at(dot_x, dot_y), color);
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Serialize the canvas to printable lines, top row first.
    ///
    /// Every cell is prefixed with its color escape; every row ends with the
    /// default-color escape. The result has exactly `rows` entries of `cols`
    /// glyphs each.
    #[must_use]
    pub fn render_rows(&self) -> Vec<String> {
        let width = usize::from(self.cols);
        self.cells
            .chunks(width)
            .map(|row| {
                // ~5 bytes of escape + 3 bytes of glyph per cell.
                let mut line = String::with_capacity(width * 8 + 5);
                for cell in row {
                    // Writing to a String cannot fail.
                    let _ = ansi::fg(&mut line, cell.cell_color());
                    line.push(cell.glyph());
                }
                let _ = ansi::default_fg(&mut line);
                line
            })
            .collect()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_rows().join("\n"))
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("lit_dots", &self.lit_dots())
            .finish()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
