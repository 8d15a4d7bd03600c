// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host document contract: what the engine reads and which edits it issues.
//!
//! ## Overview
//!
//! The engine never owns the document. It reads geometry through [`SceneRead`] and issues
//! edits through [`DocumentEdit`] with parameters it has computed. It does not verify that
//! edits took effect beyond the returned [`HostError`]s, which batch flows catch per item.
//!
//! The reference implementation for `matboard_scene` lives in
//! [`adapters::scene`](crate::adapters::scene) behind the `scene_adapter` feature.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Affine, Point, Size};
use serde::{Deserialize, Serialize};

use crate::error::HostError;

/// An RGB color with channels in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a color from channels.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Whether a stroke is drawn centered on, inside, or outside the outline.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StrokeAlign {
    /// Centered on the outline.
    #[default]
    Center,
    /// Inside the outline.
    Inside,
    /// Outside the outline.
    Outside,
}

impl StrokeAlign {
    /// Wire name of the alignment.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Center => "CENTER",
            Self::Inside => "INSIDE",
            Self::Outside => "OUTSIDE",
        }
    }
}

/// Stroke parameters applied to a border rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke weight.
    pub width: f64,
    /// Stroke color.
    pub color: Rgb,
    /// Stroke alignment.
    pub align: StrokeAlign,
}

/// Read access to node geometry and structure.
pub trait SceneRead {
    /// Stable node identifier. Used as a cache key for the duration of one batch.
    type Id: Copy + Eq + Hash + Debug;

    /// Containing node of `node`, or `None` if it has none.
    fn parent(&self, node: Self::Id) -> Option<Self::Id>;

    /// True if `node` is a page root, whose transform is the identity by convention.
    fn is_page(&self, node: Self::Id) -> bool;

    /// Node-local → absolute transform, or `None` if the node is gone.
    fn absolute_transform(&self, node: Self::Id) -> Option<Affine>;

    /// Non-negative extents of the node, or `None` if the node is gone.
    fn size(&self, node: Self::Id) -> Option<Size>;

    /// True if the node exposes resizable geometry.
    fn is_resizable(&self, node: Self::Id) -> bool;

    /// Position of `node` among its parent's children (index `0` is behind).
    fn index_in_parent(&self, node: Self::Id) -> Option<usize>;
}

/// Document-mutation primitives issued by the engine.
///
/// Positions are in the local space of the node's current parent.
pub trait DocumentEdit: SceneRead {
    /// Create a new rectangle on the current page.
    fn create_rectangle(&mut self) -> Result<Self::Id, HostError>;

    /// Set the display name.
    fn set_name(&mut self, node: Self::Id, name: &str) -> Result<(), HostError>;

    /// Set or clear the solid fill.
    fn set_fill(&mut self, node: Self::Id, fill: Option<Rgb>) -> Result<(), HostError>;

    /// Set the stroke.
    fn set_stroke(&mut self, node: Self::Id, stroke: StrokeStyle) -> Result<(), HostError>;

    /// Move the node's origin to `position` in its parent's space.
    fn set_position(&mut self, node: Self::Id, position: Point) -> Result<(), HostError>;

    /// Set the node's extents.
    fn resize(&mut self, node: Self::Id, size: Size) -> Result<(), HostError>;

    /// Insert `node` into `parent` at `index` in paint order.
    fn insert_child(
        &mut self,
        parent: Self::Id,
        index: usize,
        node: Self::Id,
    ) -> Result<(), HostError>;

    /// Append `node` as the topmost child of `parent`.
    fn append_child(&mut self, parent: Self::Id, node: Self::Id) -> Result<(), HostError>;

    /// Group `nodes` (first is behind) into a new group inside `parent` at `index`.
    fn group(
        &mut self,
        nodes: &[Self::Id],
        parent: Self::Id,
        index: usize,
    ) -> Result<Self::Id, HostError>;

    /// Create a fixed-size container.
    fn create_frame(&mut self, size: Size) -> Result<Self::Id, HostError>;

    /// Append `node` to the current page root.
    fn append_to_root(&mut self, node: Self::Id) -> Result<(), HostError>;

    /// Delete `node` and everything under it.
    fn remove(&mut self, node: Self::Id) -> Result<(), HostError>;
}
