// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2×3 affine helpers: apply, invert, and absolute→local conversion.
//!
//! Matrices are [`kurbo::Affine`] with coefficients `[a, b, c, d, e, f]`, i.e.
//!
//! ```text
//! x' = a*x + c*y + e
//! y' = b*x + d*y + f
//! ```

use kurbo::{Affine, Point};

use crate::error::{LayoutError, Result};

/// Apply `m` to `p`.
#[inline]
pub fn apply(m: Affine, p: Point) -> Point {
    let [a, b, c, d, e, f] = m.as_coeffs();
    Point::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
}

/// Invert `m` via the closed-form adjugate over the determinant.
///
/// Fails with [`LayoutError::DegenerateTransform`] when the determinant is zero or not finite;
/// NaN never leaks into the result.
pub fn invert(m: Affine) -> Result<Affine> {
    let [a, b, c, d, e, f] = m.as_coeffs();
    let det = a * d - b * c;
    if det == 0.0 || !det.is_finite() {
        return Err(LayoutError::DegenerateTransform { determinant: det });
    }
    let inv = det.recip();
    Ok(Affine::new([
        d * inv,
        -b * inv,
        -c * inv,
        a * inv,
        (c * f - d * e) * inv,
        (b * e - a * f) * inv,
    ]))
}

/// Convert an absolute point into the local space of a parent with absolute transform `parent`.
pub fn to_local(point: Point, parent: Affine) -> Result<Point> {
    Ok(apply(invert(parent)?, point))
}

/// The coordinate space of a border's parent, ready for absolute→local conversion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ParentSpace {
    /// The page root. Its transform is the identity, so no inversion is needed.
    Page,
    /// Any other container, carrying the inverse of its absolute transform.
    Local(Affine),
}

impl ParentSpace {
    /// Convert an absolute point into this space.
    pub fn to_local(self, point: Point) -> Point {
        match self {
            Self::Page => point,
            Self::Local(inverse) => apply(inverse, point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_3;
    use kurbo::Vec2;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn apply_matches_kurbo() {
        let m = Affine::new([2.0, 0.5, -1.0, 3.0, 7.0, -4.0]);
        let p = Point::new(3.0, -2.0);
        assert!(close(apply(m, p), m * p));
    }

    #[test]
    fn invert_round_trips() {
        let matrices = [
            Affine::IDENTITY,
            Affine::translate(Vec2::new(40.0, -12.0)),
            Affine::rotate(FRAC_PI_3).then_translate(Vec2::new(5.0, 9.0)),
            Affine::scale_non_uniform(2.0, 0.25),
            Affine::new([1.0, 0.0, 0.5, 1.0, -3.0, 2.0]),
        ];
        let points = [
            Point::ZERO,
            Point::new(1.0, 1.0),
            Point::new(-250.0, 37.5),
        ];
        for m in matrices {
            let inv = invert(m).unwrap();
            for p in points {
                let back = apply(inv, apply(m, p));
                assert!(close(back, p), "{m:?} {p:?} -> {back:?}");
            }
        }
    }

    #[test]
    fn degenerate_is_an_error_not_nan() {
        let flat = Affine::new([1.0, 2.0, 2.0, 4.0, 0.0, 0.0]);
        match invert(flat) {
            Err(LayoutError::DegenerateTransform { determinant }) => assert_eq!(determinant, 0.0),
            other => panic!("expected degenerate transform, got {other:?}"),
        }
        assert!(to_local(Point::new(1.0, 1.0), Affine::scale(0.0)).is_err());
    }

    #[test]
    fn to_local_undoes_parent_translation() {
        let parent = Affine::translate(Vec2::new(100.0, 50.0));
        let local = to_local(Point::new(105.0, 55.0), parent).unwrap();
        assert!(close(local, Point::new(5.0, 5.0)));
    }

    #[test]
    fn page_space_is_identity() {
        let p = Point::new(-10.0, 42.0);
        assert_eq!(ParentSpace::Page.to_local(p), p);
        let inv = invert(Affine::translate(Vec2::new(1.0, 2.0))).unwrap();
        assert!(close(
            ParentSpace::Local(inv).to_local(p),
            Point::new(-11.0, 40.0)
        ));
    }
}
