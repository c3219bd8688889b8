// SPDX-License-Identifier: MIT
//
// Plot — the render pipeline from table to text block.
//
//   Table ─► validate ─► select series ─► bounds ─► canvas geometry
//         ─► draw each series as line segments ─► compose rows + decorations
//
// `Plot::new` does everything that depends only on the data (validation,
// selection, bounds), so it can be inspected before committing to a
// terminal size. `Plot::render` does the rest. Either step fails as a whole:
// a render never returns partial output.
//
// Sampling: a series with many more samples than the canvas has dot columns
// would redraw the same dots over and over. Segments are therefore drawn
// between every `stride`-th sample, with the stride chosen so the segment
// count stays proportional to the horizontal resolution.

use xp_term::canvas::Canvas;
use xp_term::color::series_color;
use xp_term::terminal::Size;

use crate::bounds::Bounds;
use crate::config::PlotConfig;
use crate::error::{PlotError, Result};
use crate::layout;
use crate::table::Table;

// ─── Series ─────────────────────────────────────────────────────────────────

/// One selected series with its assigned palette color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series<'a> {
    /// Column header, shown in the legend.
    pub header: &'a str,
    /// Y samples, parallel to the table's x column.
    pub samples: &'a [f64],
    /// Palette index, 1–15.
    pub color: usize,
}

/// Sample stride for `samples` points on a canvas `canvas_cols` wide.
#[must_use]
pub fn stride(samples: usize, canvas_cols: u16) -> usize {
    let cols = usize::from(canvas_cols).max(1);
    (samples / cols * 4).max(1)
}

// ─── Plot ───────────────────────────────────────────────────────────────────

/// A validated plot, ready to render at any terminal size.
///
/// # Examples
///
/// ```
/// use xp_plot::{Plot, PlotConfig, Table};
/// use xp_term::Size;
///
/// let table = Table::parse("t,a,b\n0,0,10\n1,5,0\n2,10,5\n")?;
/// let plot = Plot::new(&table, &PlotConfig::default())?;
///
/// assert_eq!(plot.bounds().y_max, 10.0);
/// let text = plot.render(Size::new(80, 25))?;
/// assert!(text.contains("x-axis: t"));
/// # Ok::<(), xp_plot::PlotError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Plot<'a> {
    x_header: &'a str,
    x: &'a [f64],
    series: Vec<Series<'a>>,
    bounds: Bounds,
    config: PlotConfig,
}

impl<'a> Plot<'a> {
    /// Validate `table`, select series per `config`, and compute bounds.
    ///
    /// # Errors
    ///
    /// - [`PlotError::InsufficientColumns`] without at least one series
    /// - [`PlotError::ColumnOutOfRange`] for a bad selector index
    /// - [`PlotError::EmptyTable`] without data rows
    /// - [`PlotError::DegenerateRange`] if x or y is constant
    pub fn new(table: &'a Table, config: &PlotConfig) -> Result<Self> {
        if table.column_count() < 2 {
            return Err(PlotError::InsufficientColumns {
                found: table.column_count(),
            });
        }

        let selected = config.columns.resolve(table.series_count())?;
        if table.row_count() == 0 {
            return Err(PlotError::EmptyTable);
        }

        let series: Vec<Series<'a>> = selected
            .iter()
            .enumerate()
            .filter_map(|(n, &i)| {
                Some(Series {
                    header: table.series_header(i)?,
                    samples: table.series(i)?,
                    color: series_color(n),
                })
            })
            .collect();

        let samples: Vec<&[f64]> = series.iter().map(|s| s.samples).collect();
        let bounds = Bounds::compute(table.x(), &samples)?;
        log::debug!(
            "plotting {} series, x {}..{}, y {}..{}",
            series.len(),
            bounds.x_min,
            bounds.x_max,
            bounds.y_min,
            bounds.y_max
        );

        Ok(Self {
            x_header: table.x_header(),
            x: table.x(),
            series,
            bounds,
            config: config.clone(),
        })
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Global data bounds shared by all series.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Selected series in drawing order.
    #[must_use]
    pub fn series(&self) -> &[Series<'a>] {
        &self.series
    }

    /// Width of the y-axis tick labels.
    #[must_use]
    pub fn label_width(&self) -> usize {
        layout::label_width(&self.bounds, self.config.precision)
    }

    /// Canvas `(rows, cols)` for a terminal of `size`.
    #[must_use]
    pub fn canvas_dims(&self, size: Size) -> (u16, u16) {
        layout::canvas_dims(size, self.label_width(), self.config.aspect)
    }

    // ─── Drawing ─────────────────────────────────────────────────────────

    /// Rasterize every series onto `canvas`.
    pub fn draw(&self, canvas: &mut Canvas) {
        let n = self.x.len();
        let step = stride(n, canvas.cols());
        log::debug!("{n} samples, stride {step}");

        for series in &self.series {
            let mut i = 0;
            while i + step < n {
                let (x1, y1) = self.bounds.normalize(self.x[i], series.samples[i]);
                let (x2, y2) = self.bounds.normalize(self.x[i + step], series.samples[i + step]);
                canvas.line(x1, y1, x2, y2, series.color);
                i += step;
            }
        }
    }

    /// Render the complete text block for a terminal of `size`.
    ///
    /// Canvas rows with y tick labels, the bottom border, the x range, a
    /// blank line, and the legend, each terminated by a newline.
    ///
    /// # Errors
    ///
    /// [`PlotError::Canvas`] if the terminal is too small for a canvas.
    pub fn render(&self, size: Size) -> Result<String> {
        let label_width = self.label_width();
        let (rows, cols) = self.canvas_dims(size);
        log::debug!(
            "terminal {}×{}, canvas {cols}×{rows}, labels {label_width} wide",
            size.cols,
            size.rows
        );

        let mut canvas = Canvas::new(rows, cols)?;
        self.draw(&mut canvas);

        let ticks = layout::tick_labels(&self.bounds, rows, label_width, self.config.precision);
        let mut lines: Vec<String> = ticks
            .into_iter()
            .zip(canvas.render_rows())
            .map(|(tick, row)| tick + &row)
            .collect();

        lines.push(layout::border(label_width, cols));
        lines.push(layout::x_labels(label_width, cols, &self.bounds));
        lines.push(String::new());
        lines.push(layout::legend(
            label_width,
            self.x_header,
            self.series.iter().map(|s| (s.header, s.color)),
        ));

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }
}

/// Validate, draw, and compose in one call.
///
/// # Errors
///
/// Any error of [`Plot::new`] or [`Plot::render`].
pub fn render(table: &Table, config: &PlotConfig, size: Size) -> Result<String> {
    Plot::new(table, config)?.render(size)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
