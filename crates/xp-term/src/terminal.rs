// SPDX-License-Identifier: MIT
//
// Terminal geometry discovery.
//
// Safety: This module uses `unsafe` for ioctl (TIOCGWINSZ), open, and close
// on the controlling terminal. These are the standard POSIX interfaces for
// asking a tty its size; there is no safe alternative in std. Each unsafe
// block is minimal.
#![allow(unsafe_code)]
//
// The size is looked up from a chain of sources, first answer wins:
//
//   1. ioctl(TIOCGWINSZ) on stdin, stdout, stderr
//   2. ioctl(TIOCGWINSZ) on the controlling terminal (/dev/tty), which still
//      works when all three standard streams are redirected
//   3. the LINES / COLUMNS environment variables, each on its own
//   4. 25 rows × 80 columns
//
// Discovery never fails. A plot drawn for the wrong width is still a plot.

use std::env;

// ─── Size ───────────────────────────────────────────────────────────────────

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Number of columns (width in character cells).
    pub cols: u16,
    /// Number of rows (height in character cells).
    pub rows: u16,
}

impl Size {
    /// Geometry used when nothing else answers.
    pub const FALLBACK: Self = Self { cols: 80, rows: 25 };

    /// Create a size from columns and rows.
    #[inline]
    #[must_use]
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::FALLBACK
    }
}

// ─── Device Queries ─────────────────────────────────────────────────────────

/// Query the window size of the terminal behind `fd` via `ioctl(TIOCGWINSZ)`.
///
/// Returns `None` if `fd` is not a terminal, the query fails, or the
/// terminal reports a zero dimension.
#[cfg(unix)]
#[must_use]
pub fn query_fd(fd: libc::c_int) -> Option<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &raw mut ws) };

    if result == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(Size {
            cols: ws.ws_col,
            rows: ws.ws_row,
        })
    } else {
        None
    }
}

/// Query the window size of the controlling terminal through `/dev/tty`.
#[cfg(unix)]
#[must_use]
pub fn query_controlling_tty() -> Option<Size> {
    let fd = unsafe { libc::open(c"/dev/tty".as_ptr(), libc::O_RDONLY | libc::O_NOCTTY) };
    if fd < 0 {
        return None;
    }
    let size = query_fd(fd);
    unsafe {
        libc::close(fd);
    }
    size
}

/// Query the terminal device: the standard streams first, then `/dev/tty`.
#[cfg(unix)]
#[must_use]
pub fn query_device() -> Option<Size> {
    [libc::STDIN_FILENO, libc::STDOUT_FILENO, libc::STDERR_FILENO]
        .into_iter()
        .find_map(query_fd)
        .or_else(query_controlling_tty)
}

#[cfg(not(unix))]
#[must_use]
pub fn query_device() -> Option<Size> {
    None
}

// ─── Environment ────────────────────────────────────────────────────────────

/// Build a size from `LINES` / `COLUMNS` as returned by `lookup`.
///
/// Each variable falls back to [`Size::FALLBACK`] on its own when it is
/// missing, not a number, or zero. Takes the lookup as a parameter so it can
/// be exercised without touching the process environment.
#[must_use]
pub fn size_from_env<F>(lookup: F) -> Size
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str, default: u16| {
        lookup(name)
            .and_then(|v| v.trim().parse::<u16>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(default)
    };

    Size {
        cols: read("COLUMNS", Size::FALLBACK.cols),
        rows: read("LINES", Size::FALLBACK.rows),
    }
}

// ─── Discovery ──────────────────────────────────────────────────────────────

/// Determine the terminal size from the first source that answers.
///
/// Device query, then environment variables, then 25×80. Never fails.
#[must_use]
pub fn discover_size() -> Size {
    if let Some(size) = query_device() {
        log::debug!("terminal size {}×{} from tty", size.cols, size.rows);
        return size;
    }

    let size = size_from_env(|name| env::var(name).ok());
    log::debug!(
        "no tty size available, using {}×{} from environment/defaults",
        size.cols,
        size.rows
    );
    size
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    // ── Size ──────────────────────────────────────────────────────────

    #[test]
    fn default_is_25_by_80() {
        assert_eq!(Size::default(), Size { cols: 80, rows: 25 });
    }

    #[test]
    fn size_debug_format() {
        let debug = format!("{:?}", Size::new(80, 24));
        assert!(debug.contains("80"));
        assert!(debug.contains("24"));
    }

    // ── Environment ──────────────────────────────────────────────────

    #[test]
    fn env_both_set() {
        let size = size_from_env(env_of(&[("LINES", "40"), ("COLUMNS", "120")]));
        assert_eq!(size, Size::new(120, 40));
    }

    #[test]
    fn env_missing_uses_defaults() {
        assert_eq!(size_from_env(env_of(&[])), Size::FALLBACK);
    }

    #[test]
    fn env_each_variable_falls_back_alone() {
        let size = size_from_env(env_of(&[("COLUMNS", "132")]));
        assert_eq!(size, Size::new(132, 25));

        let size = size_from_env(env_of(&[("LINES", "50")]));
        assert_eq!(size, Size::new(80, 50));
    }

    #[test]
    fn env_garbage_uses_defaults() {
        let size = size_from_env(env_of(&[("LINES", "tall"), ("COLUMNS", "-3")]));
        assert_eq!(size, Size::FALLBACK);
    }

    #[test]
    fn env_zero_uses_defaults() {
        let size = size_from_env(env_of(&[("LINES", "0"), ("COLUMNS", "0")]));
        assert_eq!(size, Size::FALLBACK);
    }

    #[test]
    fn env_tolerates_whitespace() {
        let size = size_from_env(env_of(&[("LINES", " 30 "), ("COLUMNS", "100\n")]));
        assert_eq!(size, Size::new(100, 30));
    }

    // ── Discovery ────────────────────────────────────────────────────

    #[test]
    fn query_device_does_not_panic() {
        let _ = query_device();
    }

    #[test]
    fn discover_size_is_never_empty() {
        let size = discover_size();
        assert!(size.cols > 0);
        assert!(size.rows > 0);
    }
}
