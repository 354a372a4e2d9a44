//! # Layout Helpers
//!
//! Evenly spaced positions centered on the origin, used to place peg holes.

use config::constants::MAX_LAYOUT_POSITIONS;
use glam::DVec2;

use crate::error::{PartError, PartResult};

/// Positions `spacing` apart, symmetric about zero, that fit within `span`.
///
/// The count is `1 + floor(span / spacing)`, so a span shorter than one
/// spacing still yields the single position `0`. A negative span yields
/// nothing. More than [`MAX_LAYOUT_POSITIONS`] positions is an error.
///
/// ## Example
///
/// ```rust
/// use scad_parts::layout::centered_spacing;
///
/// assert_eq!(centered_spacing(5.1, 2.0).unwrap(), vec![-2.0, 0.0, 2.0]);
/// ```
pub fn centered_spacing(span: f64, spacing: f64) -> PartResult<Vec<f64>> {
    if !(spacing.is_finite() && spacing > 0.0) {
        return Err(PartError::invalid("spacing", format!("must be positive, got {spacing}")));
    }
    if !span.is_finite() {
        return Err(PartError::invalid("span", format!("must be finite, got {span}")));
    }
    let steps = (span / spacing).floor();
    if steps < 0.0 {
        return Ok(Vec::new());
    }
    if steps >= MAX_LAYOUT_POSITIONS as f64 {
        return Err(PartError::invalid(
            "spacing",
            format!("{spacing} over {span} gives more than {MAX_LAYOUT_POSITIONS} positions"),
        ));
    }
    let count = steps as usize + 1;
    let offset = -0.5 * (count - 1) as f64 * spacing;
    Ok((0..count).map(|i| offset + i as f64 * spacing).collect())
}

/// Grid of points inside a `width` (x) by `length` (y) rectangle, inset by
/// `margin` on every side.
///
/// Points are ordered row by row: y outer, x varying fastest.
pub fn centered_grid(width: f64, length: f64, spacing: f64, margin: f64) -> PartResult<Vec<DVec2>> {
    let xs = centered_spacing(width - 2.0 * margin, spacing)?;
    let ys = centered_spacing(length - 2.0 * margin, spacing)?;
    Ok(ys
        .iter()
        .flat_map(|&y| xs.iter().map(move |&x| DVec2::new(x, y)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_all_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert_relative_eq!(*a, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_centered_spacing() {
        assert_all_close(&centered_spacing(1.8, 1.0).unwrap(), &[-0.5, 0.5]);
        assert_all_close(&centered_spacing(5.1, 2.0).unwrap(), &[-2.0, 0.0, 2.0]);
    }

    #[test]
    fn test_short_and_negative_spans() {
        assert_all_close(&centered_spacing(0.3, 1.0).unwrap(), &[0.0]);
        assert!(centered_spacing(-0.5, 1.0).unwrap().is_empty());
    }

    #[test]
    fn test_spacing_must_be_positive() {
        assert!(centered_spacing(1.0, 0.0).is_err());
        assert!(centered_spacing(1.0, -2.0).is_err());
        assert!(centered_spacing(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_huge_ratio_is_rejected() {
        assert!(centered_spacing(1.0e300, 1.0e-300).is_err());
        assert!(centered_spacing(1.0e12, 1.0e-3).is_err());
        assert!(centered_spacing(f64::MAX, f64::MIN_POSITIVE).is_err());
    }

    #[test]
    fn test_position_cap_is_inclusive() {
        let at_cap = centered_spacing((MAX_LAYOUT_POSITIONS - 1) as f64, 1.0).unwrap();
        assert_eq!(at_cap.len(), MAX_LAYOUT_POSITIONS);
        assert!(centered_spacing(MAX_LAYOUT_POSITIONS as f64, 1.0).is_err());
    }

    #[test]
    fn test_centered_grid() {
        let grid = centered_grid(2.75, 1.6, 1.0, 0.0).unwrap();
        let expected = [
            (-1.0, -0.5),
            (0.0, -0.5),
            (1.0, -0.5),
            (-1.0, 0.5),
            (0.0, 0.5),
            (1.0, 0.5),
        ]
        .map(|(x, y)| DVec2::new(x, y));
        assert_eq!(grid, expected);
    }

    #[test]
    fn test_centered_grid_with_margin() {
        let grid = centered_grid(3.25, 2.2, 1.0, 0.5).unwrap();
        let expected = [
            (-1.0, -0.5),
            (0.0, -0.5),
            (1.0, -0.5),
            (-1.0, 0.5),
            (0.0, 0.5),
            (1.0, 0.5),
        ]
        .map(|(x, y)| DVec2::new(x, y));
        assert_eq!(grid, expected);
    }
}
