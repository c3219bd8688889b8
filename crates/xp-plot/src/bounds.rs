// SPDX-License-Identifier: MIT
//
// Data bounds and the mapping from data space into the unit square.
//
// All series of one plot share a single scale: the x range comes from the
// x column, the y range from the union of every selected series. Zero is
// not forced into the y range, so a loss curve hovering around 0.3 uses the
// full height of the canvas.

use crate::error::{Axis, PlotError, Result};

/// Global `(x_min, x_max, y_min, y_max)` of a plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// `(min, max)` of a sample slice, or `None` if it is empty.
fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

impl Bounds {
    /// Compute bounds over the x column and all `series`, then check that
    /// both spans are non-zero.
    ///
    /// # Errors
    ///
    /// [`PlotError::EmptyTable`] if there are no samples and
    /// [`PlotError::DegenerateRange`] if either axis has a single value.
    pub fn compute(x: &[f64], series: &[&[f64]]) -> Result<Self> {
        let (x_min, x_max) = min_max(x).ok_or(PlotError::EmptyTable)?;
        let (y_min, y_max) = series
            .iter()
            .filter_map(|s| min_max(s))
            .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)))
            .ok_or(PlotError::EmptyTable)?;

        let bounds = Self {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        bounds.check_spans()?;
        Ok(bounds)
    }

    /// Fail if either axis collapses to a single value.
    ///
    /// # Errors
    ///
    /// [`PlotError::DegenerateRange`] naming the collapsed axis.
    #[allow(clippy::float_cmp)]
    pub fn check_spans(&self) -> Result<()> {
        if self.x_max == self.x_min {
            return Err(PlotError::DegenerateRange {
                axis: Axis::X,
                value: self.x_min,
            });
        }
        if self.y_max == self.y_min {
            return Err(PlotError::DegenerateRange {
                axis: Axis::Y,
                value: self.y_min,
            });
        }
        Ok(())
    }

    /// Width of the x range.
    #[inline]
    #[must_use]
    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the y range.
    #[inline]
    #[must_use]
    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Map a data point into the unit square. The minimum lands on 0 and the
    /// maximum on 1.
    #[inline]
    #[must_use]
    pub fn normalize(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.x_min) / self.x_span(),
            (y - self.y_min) / self.y_span(),
        )
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_over_union_of_series() {
        let a = [0.0, 5.0, 10.0];
        let b = [10.0, 0.0, 5.0];
        let bounds = Bounds::compute(&[0.0, 1.0, 2.0], &[&a, &b]).unwrap();
        assert_eq!(
            bounds,
            Bounds {
                x_min: 0.0,
                x_max: 2.0,
                y_min: 0.0,
                y_max: 10.0
            }
        );
    }

    #[test]
    fn zero_not_forced() {
        let bounds = Bounds::compute(&[1.0, 2.0], &[&[0.25, 0.5]]).unwrap();
        assert_eq!(bounds.y_min, 0.25);
        assert_eq!(bounds.y_max, 0.5);
    }

    #[test]
    fn normalize_maps_extremes() {
        let bounds = Bounds {
            x_min: -1.0,
            x_max: 3.0,
            y_min: 10.0,
            y_max: 20.0,
        };
        assert_eq!(bounds.normalize(-1.0, 10.0), (0.0, 0.0));
        assert_eq!(bounds.normalize(3.0, 20.0), (1.0, 1.0));
        assert_eq!(bounds.normalize(1.0, 15.0), (0.5, 0.5));
    }

    #[test]
    fn constant_x_is_degenerate() {
        let err = Bounds::compute(&[4.0, 4.0], &[&[1.0, 2.0]]).unwrap_err();
        assert!(matches!(
            err,
            PlotError::DegenerateRange { axis: Axis::X, .. }
        ));
    }

    #[test]
    fn constant_series_is_degenerate() {
        let err = Bounds::compute(&[0.0, 1.0], &[&[3.0, 3.0], &[3.0, 3.0]]).unwrap_err();
        assert!(matches!(
            err,
            PlotError::DegenerateRange { axis: Axis::Y, .. }
        ));
    }

    #[test]
    fn no_samples_is_empty() {
        let err = Bounds::compute(&[], &[&[]]).unwrap_err();
        assert!(matches!(err, PlotError::EmptyTable));
    }
}
