// SPDX-License-Identifier: MIT
//
// Cell — one character position of the canvas, holding a 2×4 dot block.
//
// The Braille Patterns block encodes every combination of eight dots as a
// single codepoint: U+2800 plus an 8-bit mask. A cell therefore stores just
// that mask and a palette index; the glyph is computed on output.
//
// Dot numbering inside one cell, with the bit each dot occupies:
//
//   ┌──────┬──────┐
//   │ 0x01 │ 0x08 │   dot row 0
//   │ 0x02 │ 0x10 │   dot row 1
//   │ 0x04 │ 0x20 │   dot row 2
//   │ 0x40 │ 0x80 │   dot row 3
//   └──────┴──────┘
//    col 0  col 1
//
// The irregular last row is historical: Braille started with six dots and
// the bottom pair was appended later as bits 6 and 7.

use crate::color::{CellColor, PALETTE};

/// First codepoint of the Braille Patterns block (the empty pattern).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Dot columns per cell.
pub const DOTS_WIDE: i64 = 2;

/// Dot rows per cell.
pub const DOTS_TALL: i64 = 4;

// ─── Dots ────────────────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// The set of lit dots in one cell.
    ///
    /// The bits are exactly the Braille pattern bits, so the glyph is
    /// `BRAILLE_BASE + bits`. Combine with bitwise OR:
    ///
    /// ```
    /// use xp_term::cell::Dots;
    ///
    /// let left_column = Dots::R0_C0 | Dots::R1_C0 | Dots::R2_C0 | Dots::R3_C0;
    /// assert_eq!(left_column.bits(), 0x47);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Dots: u8 {
        /// Row 0, left.
        const R0_C0 = 0x01;
        /// Row 1, left.
        const R1_C0 = 0x02;
        /// Row 2, left.
        const R2_C0 = 0x04;
        /// Row 0, right.
        const R0_C1 = 0x08;
        /// Row 1, right.
        const R1_C1 = 0x10;
        /// Row 2, right.
        const R2_C1 = 0x20;
        /// Row 3, left.
        const R3_C0 = 0x40;
        /// Row 3, right.
        const R3_C1 = 0x80;
    }
}

/// Bit for each sub-position, indexed `[dot_row][dot_col]`.
pub const DOT_MAP: [[Dots; 2]; 4] = [
    [Dots::R0_C0, Dots::R0_C1],
    [Dots::R1_C0, Dots::R1_C1],
    [Dots::R2_C0, Dots::R2_C1],
    [Dots::R3_C0, Dots::R3_C1],
];

impl Dots {
    /// The bit for a dot position inside a cell.
    ///
    /// Positions are reduced modulo the cell size, so any dot-grid coordinate
    /// can be passed directly.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub const fn at(dot_x: i64, dot_y: i64) -> Self {
        // rem_euclid is non-negative and below the cell size.
        let row = dot_y.rem_euclid(DOTS_TALL) as usize;
        let col = dot_x.rem_euclid(DOTS_WIDE) as usize;
        DOT_MAP[row][col]
    }

    /// The Braille character showing exactly these dots.
    #[inline]
    #[must_use]
    pub fn glyph(self) -> char {
        // Every u8 offset from U+2800 is a valid scalar value.
        char::from_u32(BRAILLE_BASE + u32::from(self.bits())).unwrap_or(' ')
    }
}

// ─── Cell ────────────────────────────────────────────────────────────────────

/// A single canvas cell: a dot mask plus a palette index.
///
/// The color is per cell, not per dot. The last write to any dot of the
/// cell decides the color of the whole glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Cell {
    /// Lit dots.
    pub dots: Dots,

    /// Index into [`PALETTE`], always below 16.
    pub color: u8,
}

impl Cell {
    /// A cell with no dots and the default color.
    pub const EMPTY: Self = Self {
        dots: Dots::empty(),
        color: 0,
    };

    /// Light `dot` and take over `color` (reduced modulo the palette size).
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn plot(&mut self, dot: Dots, color: usize) {
        self.dots |= dot;
        // Below 16 after the modulo, fits in u8.
        self.color = (color % PALETTE.len()) as u8;
    }

    /// Reset to [`Cell::EMPTY`].
    #[inline]
    pub const fn reset(&mut self) {
        *self = Self::EMPTY;
    }

    /// Whether no dot is lit.
    #[inline]
    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.dots.is_empty()
    }

    /// The Braille glyph for this cell.
    #[inline]
    #[must_use]
    pub fn glyph(self) -> char {
        self.dots.glyph()
    }

    /// The palette color this cell is drawn with.
    #[inline]
    #[must_use]
    pub const fn cell_color(self) -> CellColor {
        PALETTE[self.color as usize % PALETTE.len()]
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
