// SPDX-License-Identifier: MIT
//
// Text layout around the canvas: tick labels, border, x range, legend.
//
//     10.00000 ┤⠀⠀⠀⠀⠀⠀⠀⠀⢀⠔⠁
//      ...     ┤
//      0.00000 ┤⠤⠤⠤⠒⠒⠉⠁⠀⠀⠀⠀
//              └┬──────────┬
//                0.0              2.0
//
//                x-axis: t   y-axis: ⠒⠂a    ⠒⠂b
//
// Every line is built so its visible width matches the canvas row it sits
// under: tick labels are a fixed width derived from the magnitude of the y
// range, the border spans exactly the canvas columns, and the x-range row
// right-aligns the maximum under the last column. Widths are measured in
// terminal columns, not bytes.

use unicode_width::UnicodeWidthStr;

use xp_term::ansi;
use xp_term::cell::Dots;
use xp_term::color::PALETTE;
use xp_term::terminal::Size;

use crate::bounds::Bounds;

/// Separator between a tick label and its canvas row.
const TICK: &str = " ┤";

/// Width the x-axis minimum is padded to.
const X_MIN_WIDTH: usize = 10;

// ─── Padding ────────────────────────────────────────────────────────────────

/// Left-align `s` in `width` terminal columns.
#[must_use]
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

/// Right-align `s` in `width` terminal columns.
#[must_use]
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{s}", " ".repeat(fill))
}

/// Print a value the way a person writes it in a data file: integral values
/// keep one decimal (`2.0`), magnitudes below 1e-4 or from 1e16 up switch to
/// exponent form with a signed two-digit exponent (`1e-05`, `1.5e+20`), and
/// everything else uses the shortest exact form.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_value(v: f64) -> String {
    if v != 0.0 && !(1e-4..1e16).contains(&v.abs()) {
        scientific(v)
    } else if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

/// Shortest exponent form with the exponent signed and padded to two digits.
fn scientific(v: f64) -> String {
    let s = format!("{v:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = exp.strip_prefix('-').map_or(("+", exp), |d| ("-", d));
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

// ─── Geometry ───────────────────────────────────────────────────────────────

/// Integer digits in `|v|` minus one, or 0 below 1.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn magnitude(v: f64) -> usize {
    let v = v.abs();
    if v >= 1.0 && v.is_finite() {
        // log10 of a finite f64 is below 309.
        v.log10().trunc() as usize
    } else {
        0
    }
}

/// Width of the y-axis tick labels.
///
/// Enough for the magnitude of both ends of the y range, a leading digit,
/// the decimal point, `precision` decimals, and a sign when the range dips
/// below zero. Never narrower than either end as actually printed, since
/// rounding to `precision` decimals can carry into a new integer digit.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn label_width(bounds: &Bounds, precision: usize) -> usize {
    let mut digits = magnitude(bounds.y_max).max(1);
    if bounds.y_min != 0.0 {
        digits = digits.max(magnitude(bounds.y_min));
    }
    let sign = usize::from(bounds.y_min < 0.0);

    [bounds.y_min, bounds.y_max]
        .into_iter()
        .map(|v| format!("{v:.precision$}").width())
        .fold(digits + 2 + precision + sign, usize::max)
}

/// Canvas size `(rows, cols)` for a terminal of `size` with labels of
/// `label_width` columns.
///
/// The canvas takes what is left of the width after the labels and the
/// `" ┤"` separator. Its height follows from the width through `aspect`
/// (a cell's dot block is about twice as tall as it is wide) and is capped
/// by the terminal height. Either value may come out zero on a tiny
/// terminal; the canvas constructor rejects that.
#[must_use]
pub fn canvas_dims(size: Size, label_width: usize, aspect: u16) -> (u16, u16) {
    let cols = size.cols.saturating_sub(u16::try_from(label_width + 2).unwrap_or(u16::MAX));
    let rows = (cols / aspect.max(1).saturating_mul(2)).min(size.rows);
    (rows, cols)
}

// ─── Lines ──────────────────────────────────────────────────────────────────

/// Tick label prefixes for `rows` canvas rows, top to bottom.
///
/// Values step linearly from `y_max` on the first row to `y_min` on the
/// last.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn tick_labels(bounds: &Bounds, rows: u16, label_width: usize, precision: usize) -> Vec<String> {
    let step = if rows > 1 {
        bounds.y_span() / f64::from(rows - 1)
    } else {
        0.0
    };

    let mut y = bounds.y_max;
    (0..rows)
        .map(|_| {
            let label = format!("{y:>label_width$.precision$}{TICK}");
            y -= step;
            label
        })
        .collect()
}

/// Bottom border under a canvas of `cols` columns.
#[must_use]
pub fn border(label_width: usize, cols: u16) -> String {
    let inner = usize::from(cols).saturating_sub(2);
    format!("{} └┬{}┬", " ".repeat(label_width), "─".repeat(inner))
}

/// The x-range row: minimum under the first column, maximum flush with the
/// last.
#[must_use]
pub fn x_labels(label_width: usize, cols: u16, bounds: &Bounds) -> String {
    let left = format!(
        "  {} ",
        pad_right(&format_value(bounds.x_min), X_MIN_WIDTH)
    );
    let remain = (usize::from(cols) + 2).saturating_sub(left.width());
    format!(
        "{}{left}{}",
        " ".repeat(label_width),
        pad_left(&format_value(bounds.x_max), remain)
    )
}

/// Legend swatch: a short horizontal stroke drawn in dots.
#[must_use]
pub fn swatch() -> String {
    let mut s = String::with_capacity(6);
    s.push((Dots::R1_C0 | Dots::R1_C1).glyph());
    s.push(Dots::R1_C0.glyph());
    s
}

/// The legend row naming the x column and every drawn series in its color.
#[must_use]
pub fn legend<'a, I>(label_width: usize, x_header: &str, series: I) -> String
where
    I: IntoIterator<Item = (&'a str, usize)>,
{
    let swatch = swatch();
    let mut line = format!(
        "{}x-axis: {x_header}   y-axis: ",
        " ".repeat(label_width + 2)
    );
    for (header, color) in series {
        // Writing to a String cannot fail.
        let _ = ansi::fg(&mut line, PALETTE[color % PALETTE.len()]);
        line.push_str(&swatch);
        line.push_str(header);
        line.push_str("    ");
    }
    let _ = ansi::default_fg(&mut line);
    line
}

// ─── Tests ───────────────────────────────────────────────────────────────────
