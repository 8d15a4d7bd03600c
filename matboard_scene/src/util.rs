// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};

/// Transform the `(0, 0, w, h)` rectangle of a node by an `Affine` and return
/// the axis-aligned bounding box of the four transformed corners.
pub(crate) fn transform_size_bbox(affine: Affine, size: Size) -> Rect {
    let p0 = affine * Point::ZERO;
    let p1 = affine * Point::new(size.width, 0.0);
    let p2 = affine * Point::new(0.0, size.height);
    let p3 = affine * Point::new(size.width, size.height);
    let min_x = p0.x.min(p1.x).min(p2.x).min(p3.x);
    let min_y = p0.y.min(p1.y).min(p2.y).min(p3.y);
    let max_x = p0.x.max(p1.x).max(p2.x).max(p3.x);
    let max_y = p0.y.max(p1.y).max(p2.y).max(p3.y);
    Rect::new(min_x, min_y, max_x, max_y)
}
