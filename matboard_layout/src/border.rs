// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Border synthesis: an outward-offset rectangle that sits behind a node.
//!
//! ## Geometry
//!
//! 1. The node's absolute bounds come from [`absolute_bounds`] over its absolute transform.
//! 2. The bounds grow by `gap` on every side.
//! 3. Only the grown top-left corner is converted into the parent's local space.
//!    The size stays the absolute-space size.
//!
//! Step 3 is exact when the parent's transform carries no scale or skew relative to the page.
//! Under anisotropic parent scaling or skew the border's local size is off by that scale;
//! this is a known precision boundary of the placement, not something corrected here.
//!
//! ## Stacking
//!
//! The border and the node end up in one group, border first (behind), node second (front).

use core::fmt::Debug;

use kurbo::{Point, Rect, Size};
use tracing::warn;

use crate::affine::ParentSpace;
use crate::bounds::absolute_bounds;
use crate::cache::InverseCache;
use crate::document::{DocumentEdit, SceneRead};
use crate::error::{LayoutError, Result};
use crate::settings::Settings;

/// Name given to synthesized border rectangles.
pub const BORDER_NAME: &str = "Border";

/// One member of a border group.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GroupSlot {
    /// The synthesized border rectangle.
    Border,
    /// The original node.
    Node,
}

/// Group order, index `0` behind.
pub const GROUP_ORDER: [GroupSlot; 2] = [GroupSlot::Border, GroupSlot::Node];

/// Where a border goes, computed without touching the document.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BorderPlacement<K> {
    /// Parent the border is placed in (the node's own parent).
    pub parent: K,
    /// Top-left of the border in the parent's local space.
    pub local_position: Point,
    /// Border extents, reused from absolute space.
    pub size: Size,
    /// The grown bounds in absolute space.
    pub absolute: Rect,
    /// Group stacking order.
    pub group_order: [GroupSlot; 2],
}

/// Grow `bounds` outward by `gap` on all four sides.
pub fn expand(bounds: Rect, gap: f64) -> Rect {
    Rect::new(
        bounds.x0 - gap,
        bounds.y0 - gap,
        bounds.x1 + gap,
        bounds.y1 + gap,
    )
}

/// Check everything a border for `node` depends on, without touching the document.
///
/// Returns the node's parent and that parent's space. Fails with [`LayoutError::NoParent`]
/// for parentless nodes, [`LayoutError::MissingNode`] for stale ids,
/// [`LayoutError::DegenerateTransform`] when the parent cannot be inverted, and
/// [`LayoutError::NonFiniteGeometry`] when the node's own transform is not finite.
pub fn resolve_parent<D>(
    doc: &D,
    node: D::Id,
    cache: &mut InverseCache<D::Id>,
) -> Result<(D::Id, ParentSpace)>
where
    D: SceneRead + ?Sized,
{
    let parent = doc.parent(node).ok_or(LayoutError::NoParent)?;
    let space = cache.parent_space(doc, parent)?;
    let transform = doc
        .absolute_transform(node)
        .ok_or(LayoutError::MissingNode)?;
    if !transform.is_finite() {
        return Err(LayoutError::NonFiniteGeometry);
    }
    Ok((parent, space))
}

/// Compute the border placement for `node`.
///
/// Fails for the reasons listed on [`resolve_parent`], and with
/// [`LayoutError::NonFiniteGeometry`] when the grown bounds are not finite.
pub fn synthesize<D>(
    doc: &D,
    node: D::Id,
    settings: &Settings,
    cache: &mut InverseCache<D::Id>,
) -> Result<BorderPlacement<D::Id>>
where
    D: SceneRead + ?Sized,
{
    let (parent, space) = resolve_parent(doc, node, cache)?;
    let transform = doc
        .absolute_transform(node)
        .ok_or(LayoutError::MissingNode)?;
    let size = doc.size(node).ok_or(LayoutError::MissingNode)?;
    let grown = expand(absolute_bounds(transform, size), settings.gap);
    let local_position = space.to_local(grown.origin());
    if !grown.is_finite() || !local_position.is_finite() {
        return Err(LayoutError::NonFiniteGeometry);
    }
    Ok(BorderPlacement {
        parent,
        local_position,
        size: grown.size(),
        absolute: grown,
        group_order: GROUP_ORDER,
    })
}

impl<K: Copy + Debug> BorderPlacement<K> {
    /// Issue the document edits for this placement and return the new group.
    ///
    /// The border is inserted into the parent at the node's index (so it lands behind the node),
    /// styled from `settings` with no fill, then grouped with the node at that same index.
    /// If any edit after the border's creation fails, the border is removed again.
    pub fn apply<D>(&self, doc: &mut D, node: K, settings: &Settings) -> Result<K>
    where
        D: DocumentEdit<Id = K> + ?Sized,
    {
        let index = doc.index_in_parent(node).ok_or(LayoutError::MissingNode)?;
        let border = doc.create_rectangle()?;
        self.place(doc, border, node, index, settings)
            .inspect_err(|_| {
                if let Err(err) = doc.remove(border) {
                    warn!(?border, %err, "could not remove unplaced border");
                }
            })
    }

    fn place<D>(&self, doc: &mut D, border: K, node: K, index: usize, settings: &Settings) -> Result<K>
    where
        D: DocumentEdit<Id = K> + ?Sized,
    {
        doc.set_name(border, BORDER_NAME)?;
        doc.set_fill(border, None)?;
        doc.set_stroke(border, settings.stroke())?;
        doc.insert_child(self.parent, index, border)?;
        doc.set_position(border, self.local_position)?;
        doc.resize(border, self.size)?;
        let members = self.group_order.map(|slot| match slot {
            GroupSlot::Border => border,
            GroupSlot::Node => node,
        });
        Ok(doc.group(&members, self.parent, index)?)
    }
}
