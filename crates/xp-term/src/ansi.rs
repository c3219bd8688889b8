// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation and removal.
//
// Pure functions that write SGR color sequences to any `fmt::Write`. The
// canvas renders into `String`s (one per row), so this module writes text
// rather than bytes. The inverse direction, stripping CSI sequences back
// out, is what lets callers measure how wide a rendered row really is.

use std::fmt::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::color::CellColor;

/// Escape byte that introduces every sequence we emit.
const ESC: char = '\x1b';

// ─── Foreground Color ────────────────────────────────────────────────────────

/// Set the foreground color (SGR 30–37, 90–97, or 39 for the default).
#[inline]
pub fn fg(w: &mut impl Write, color: CellColor) -> fmt::Result {
    write!(w, "{ESC}[{}m", color.sgr_code())
}

/// Restore the terminal's default foreground color (SGR 39).
///
/// Only the foreground is touched; the user's background and text
/// attributes survive.
#[inline]
pub fn default_fg(w: &mut impl Write) -> fmt::Result {
    fg(w, CellColor::Default)
}

// ─── Stripping ───────────────────────────────────────────────────────────────

/// Remove CSI escape sequences (`ESC [ params final`) from `s`.
///
/// A lone `ESC` not followed by `[` is dropped together with the next
/// character. Truncated sequences at the end of input are dropped.
#[must_use]
pub fn strip(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        if ch != ESC {
            out.push(ch);
            continue;
        }
        if chars.next() != Some('[') {
            continue;
        }
        // Parameter and intermediate bytes until the final byte (0x40–0x7E).
        for c in chars.by_ref() {
            if ('\x40'..='\x7e').contains(&c) {
                break;
            }
        }
    }

    out
}

/// Display width of `s` in terminal columns, ignoring escape sequences.
#[must_use]
pub fn visible_width(s: &str) -> usize {
    strip(s).width()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Helper: run an ANSI function and return its output.
    fn emit<F>(f: F) -> String
    where
        F: FnOnce(&mut String) -> fmt::Result,
    {
        let mut buf = String::new();
        f(&mut buf).unwrap();
        buf
    }

    // ── Foreground Color ────────────────────────────────────────────────

    #[test]
    fn fg_default() {
        assert_eq!(emit(|w| fg(w, CellColor::Default)), "\x1b[39m");
    }

    #[test]
    fn fg_standard_red() {
        assert_eq!(emit(|w| fg(w, CellColor::Ansi(1))), "\x1b[31m");
    }

    #[test]
    fn fg_bright_white() {
        assert_eq!(emit(|w| fg(w, CellColor::Ansi(15))), "\x1b[97m");
    }

    #[test]
    fn default_fg_sequence() {
        assert_eq!(emit(|w| default_fg(w)), "\x1b[39m");
    }

    // ── Stripping ───────────────────────────────────────────────────────

    #[test]
    fn strip_plain_text_unchanged() {
        assert_eq!(strip("hello ⠒⠂"), "hello ⠒⠂");
    }

    #[test]
    fn strip_removes_sgr() {
        assert_eq!(strip("\x1b[31m⣿\x1b[39m"), "⣿");
    }

    #[test]
    fn strip_removes_multi_param_sequences() {
        assert_eq!(strip("a\x1b[1;38;5;200mb\x1b[0mc"), "abc");
    }

    #[test]
    fn strip_drops_truncated_sequence() {
        assert_eq!(strip("ab\x1b[3"), "ab");
    }

    #[test]
    fn strip_drops_bare_escape() {
        assert_eq!(strip("a\x1bXb"), "ab");
    }

    #[test]
    fn visible_width_counts_glyphs_only() {
        assert_eq!(visible_width("\x1b[36m⠁⠂⠃\x1b[39m"), 3);
        assert_eq!(visible_width(" 1.00000 ┤"), 10);
    }
}
