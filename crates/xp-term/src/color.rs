// SPDX-License-Identifier: MIT
//
// The fixed 16-entry plot palette.
//
// Plots only ever need a handful of distinguishable series colors, so the
// palette is a constant table of the 16 standard ANSI foreground colors,
// ordered so that neighbouring series get contrasting hues. Index 0 is the
// terminal's default foreground and doubles as the reset color at the end
// of every row.

use std::fmt;

// ─── CellColor ───────────────────────────────────────────────────────────────

/// Foreground color of a canvas cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellColor {
    /// One of the 16 standard ANSI colors (0–7 normal, 8–15 bright).
    Ansi(u8),

    /// Terminal default color (SGR 39).
    #[default]
    Default,
}

impl CellColor {
    /// The SGR foreground parameter for this color.
    ///
    /// `39` for the default, `30–37` for normal and `90–97` for bright
    /// ANSI colors.
    #[inline]
    #[must_use]
    pub const fn sgr_code(self) -> u8 {
        match self {
            Self::Default => 39,
            Self::Ansi(idx) if idx < 8 => 30 + idx,
            Self::Ansi(idx) => 82 + (idx & 0x0f),
        }
    }
}

impl fmt::Debug for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ansi(idx) => write!(f, "ansi({idx})"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ─── Palette ─────────────────────────────────────────────────────────────────

/// Palette index → color. Series colors start at index 1.
pub const PALETTE: [CellColor; 16] = [
    CellColor::Default,
    CellColor::Ansi(1),  // red
    CellColor::Ansi(6),  // cyan
    CellColor::Ansi(3),  // yellow
    CellColor::Ansi(2),  // green
    CellColor::Ansi(5),  // magenta
    CellColor::Ansi(4),  // blue
    CellColor::Ansi(7),  // white
    CellColor::Ansi(8),  // bright black
    CellColor::Ansi(9),  // bright red
    CellColor::Ansi(14), // bright cyan
    CellColor::Ansi(11), // bright yellow
    CellColor::Ansi(10), // bright green
    CellColor::Ansi(13), // bright magenta
    CellColor::Ansi(12), // bright blue
    CellColor::Ansi(15), // bright white
];

/// Number of palette entries available to data series (all but the default).
pub const SERIES_COLORS: usize = PALETTE.len() - 1;

/// Palette index for the `n`-th series (0-based), skipping the default.
///
/// Cycles through indices `1..=15`.
#[inline]
#[must_use]
pub const fn series_color(n: usize) -> usize {
    n % SERIES_COLORS + 1
}

// ─── Tests ───────────────────────────────────────────────────────────────────
