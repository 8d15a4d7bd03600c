// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Absolute axis-aligned bounds of transformed rectangles.

use kurbo::{Affine, Point, Rect, Size};

use crate::affine::apply;

/// Bounds of a node's `(0, 0, w, h)` rectangle under `transform`.
///
/// All four corners are transformed and the extrema taken per axis, so rotated and
/// skewed rectangles are bounded correctly. A zero-size node collapses to a point.
pub fn absolute_bounds(transform: Affine, size: Size) -> Rect {
    let corners = [
        apply(transform, Point::ZERO),
        apply(transform, Point::new(size.width, 0.0)),
        apply(transform, Point::new(0.0, size.height)),
        apply(transform, Point::new(size.width, size.height)),
    ];
    let mut min = corners[0];
    let mut max = corners[0];
    for p in &corners[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Rect::from_points(min, max)
}

/// Union of a sequence of bounds. Returns `None` if empty.
pub fn union_bounds(bounds: impl IntoIterator<Item = Rect>) -> Option<Rect> {
    bounds.into_iter().reduce(|acc, r| acc.union(r))
}
