// SPDX-License-Identifier: MIT
//
// xp-term — Braille drawing surface for xptl.
//
// Every text cell of the terminal becomes a 2×4 block of individually
// addressable dots, encoded as one character from the Braille Patterns
// block (U+2800–U+28FF). The `Canvas` accepts points in the unit square,
// rasterizes them onto that dot grid, and serializes itself to printable
// rows colored from a fixed 16-entry ANSI palette.
//
// Like the rest of xptl this crate talks to the terminal directly: plain
// SGR escapes for color, one `ioctl` for the window size. No TUI framework.

pub mod ansi;
pub mod canvas;
pub mod cell;
pub mod color;
pub mod terminal;

pub use canvas::{Canvas, CanvasError};
pub use cell::{Cell, Dots};
pub use color::{CellColor, PALETTE};
pub use terminal::Size;
