// SPDX-License-Identifier: MIT
//
// End-to-end rendering: text in, finished plot out.

use pretty_assertions::assert_eq;

use xp_plot::{Axis, Bounds, ColumnSelection, Plot, PlotConfig, PlotError, Table, render};
use xp_term::Size;
use xp_term::ansi;

const SAMPLE: &str = "t,a,b\n0,0,10\n1,5,0\n2,10,5\n";
const TERMINAL: Size = Size::new(80, 25);

fn sample() -> Table {
    Table::parse(SAMPLE).unwrap()
}

fn select(spec: &str) -> PlotConfig {
    PlotConfig::new().with_columns(ColumnSelection::parse(spec).unwrap())
}

fn legend(text: &str) -> &str {
    text.lines().last().unwrap()
}

// ── Whole plot ──────────────────────────────────────────────────────────────

#[test_log::test]
fn sample_bounds() {
    let t = sample();
    let plot = Plot::new(&t, &PlotConfig::default()).unwrap();
    assert_eq!(
        plot.bounds(),
        Bounds {
            x_min: 0.0,
            x_max: 2.0,
            y_min: 0.0,
            y_max: 10.0
        }
    );
}

#[test_log::test]
fn sample_draws_two_colored_series() {
    let text = render(&sample(), &PlotConfig::default(), TERMINAL).unwrap();
    let canvas: String = text.lines().take(17).collect();

    assert!(canvas.contains("\x1b[31m"));
    assert!(canvas.contains("\x1b[36m"));

    let legend = ansi::strip(legend(&text));
    assert_eq!(legend.trim_end(), "          x-axis: t   y-axis: ⠒⠂a    ⠒⠂b");
}

#[test_log::test]
fn sample_layout() {
    let text = render(&sample(), &PlotConfig::default(), TERMINAL).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 21);
    assert!(lines[0].starts_with(" 10.00000 ┤"));
    assert!(lines[16].starts_with("  0.00000 ┤"));
    assert!(lines[17].starts_with("         └┬──"));
    assert!(lines[18].starts_with("          0.0 "));
    assert!(lines[18].ends_with(" 2.0"));
    assert_eq!(lines[19], "");
}

#[test_log::test]
fn rows_fill_the_terminal_width() {
    let text = render(&sample(), &PlotConfig::default(), TERMINAL).unwrap();
    for line in text.lines().take(19) {
        assert_eq!(ansi::visible_width(line), 80, "line {line:?}");
    }
}

#[test_log::test]
fn wide_terminal_is_capped_by_height() {
    let text = render(&sample(), &PlotConfig::default(), Size::new(200, 12)).unwrap();
    // 12 canvas rows + border + x labels + blank + legend.
    assert_eq!(text.lines().count(), 16);
}

// ── Selection ───────────────────────────────────────────────────────────────

#[test_log::test]
fn select_second_series_only() {
    let t = sample();
    let plot = Plot::new(&t, &select("2")).unwrap();
    let headers: Vec<&str> = plot.series().iter().map(|s| s.header).collect();
    assert_eq!(headers, vec!["b"]);

    let text = plot.render(TERMINAL).unwrap();
    let legend = ansi::strip(legend(&text));
    assert_eq!(legend.matches("⠒⠂").count(), 1);
    assert!(legend.contains("⠒⠂b"));
}

#[test_log::test]
fn selected_series_keeps_the_y_range_of_its_own_data() {
    let t = Table::parse("t,a,b\n0,0,100\n1,1,50\n").unwrap();
    let plot = Plot::new(&t, &select("1")).unwrap();
    assert_eq!(plot.bounds().y_max, 1.0);
}

#[test_log::test]
fn select_out_of_range() {
    let err = render(&sample(), &select("5"), TERMINAL).unwrap_err();
    assert!(matches!(
        err,
        PlotError::ColumnOutOfRange {
            index: 5,
            available: 2
        }
    ));
    assert_eq!(
        err.to_string(),
        "the provided columns are out of range: 5 is not in 1..=2"
    );
}

#[test_log::test]
fn select_negative_is_out_of_range() {
    let err = render(&sample(), &select("-1"), TERMINAL).unwrap_err();
    assert!(matches!(
        err,
        PlotError::ColumnOutOfRange {
            index: -1,
            available: 2
        }
    ));
}

// ── Lossy input ─────────────────────────────────────────────────────────────

#[test_log::test]
fn nan_and_empty_cells_plot_as_zero() {
    let t = Table::parse("t;a\n0;NaN\n1;\n2;4\n").unwrap();
    assert_eq!(t.series(0).unwrap(), [0.0, 0.0, 4.0]);

    let plot = Plot::new(&t, &PlotConfig::default()).unwrap();
    assert_eq!(plot.bounds().y_min, 0.0);
    assert!(plot.render(TERMINAL).is_ok());
}

#[test_log::test]
fn whitespace_separated_input() {
    let t = Table::parse("step  loss\n1  0.9\n2  0.4\n3  0.2\n").unwrap();
    let text = render(&t, &PlotConfig::default(), TERMINAL).unwrap();
    assert!(ansi::strip(legend(&text)).contains("x-axis: step"));
}

#[test_log::test]
fn negative_values_widen_the_labels() {
    let t = Table::parse("t,a\n0,-500\n1,1\n").unwrap();
    let plot = Plot::new(&t, &PlotConfig::default()).unwrap();
    assert_eq!(plot.label_width(), 10);

    let text = plot.render(TERMINAL).unwrap();
    let last_tick = text.lines().nth(usize::from(plot.canvas_dims(TERMINAL).0) - 1).unwrap();
    assert!(last_tick.starts_with("-500.00000 ┤"));
}

#[test_log::test]
fn labels_that_round_up_keep_rows_aligned() {
    let t = Table::parse("t,a\n0,0\n1,99.999999\n").unwrap();
    let text = render(&t, &PlotConfig::default(), TERMINAL).unwrap();

    assert!(text.starts_with("100.00000 ┤"));
    for line in text.lines().take(19) {
        assert_eq!(ansi::visible_width(line), 80, "line {line:?}");
    }
}

#[test_log::test]
fn tiny_x_range_prints_in_exponent_form() {
    let t = Table::parse("t,a\n0.00001,0\n0.00002,1\n").unwrap();
    let text = render(&t, &PlotConfig::default(), TERMINAL).unwrap();
    let x_row = text.lines().nth(18).unwrap();
    assert!(x_row.starts_with("          1e-05 "));
    assert!(x_row.ends_with(" 2e-05"));
}

// ── Failures ────────────────────────────────────────────────────────────────

#[test_log::test]
fn single_column_cannot_plot() {
    let t = Table::parse("t\n0\n1\n").unwrap();
    let err = render(&t, &PlotConfig::default(), TERMINAL).unwrap_err();
    assert!(matches!(err, PlotError::InsufficientColumns { found: 1 }));
}

#[test_log::test]
fn constant_series_cannot_plot() {
    let t = Table::parse("t,a\n0,3\n1,3\n2,3\n").unwrap();
    let err = render(&t, &PlotConfig::default(), TERMINAL).unwrap_err();
    assert!(matches!(
        err,
        PlotError::DegenerateRange { axis: Axis::Y, .. }
    ));
}

#[test_log::test]
fn single_row_cannot_plot() {
    let t = Table::parse("t,a\n0,3\n").unwrap();
    let err = render(&t, &PlotConfig::default(), TERMINAL).unwrap_err();
    assert!(matches!(
        err,
        PlotError::DegenerateRange { axis: Axis::X, .. }
    ));
}

#[test_log::test]
fn tiny_terminal_cannot_plot() {
    let err = render(&sample(), &PlotConfig::default(), Size::new(12, 25)).unwrap_err();
    assert!(matches!(err, PlotError::Canvas(_)));
}

#[test_log::test]
fn ragged_input_cannot_plot() {
    let err = Table::parse("t,a\n0,1\n1\n").unwrap_err();
    assert_eq!(err.to_string(), "line 3: expected 2 fields, found 1");
}
