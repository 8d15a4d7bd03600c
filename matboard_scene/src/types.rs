// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: node identifiers, kinds, flags, paint, and local geometry.

use alloc::string::String;
use kurbo::{Affine, Rect, Size, Vec2};

/// Identifier for a node in the scene.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// Use [`Scene::is_alive`](crate::Scene::is_alive) to check whether a `NodeId` still refers to a live node.
/// Stale `NodeId`s never alias a different live node because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling visibility and editability.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is visible.
        const VISIBLE   = 0b0000_0001;
        /// Node geometry may be resized by editing operations.
        const RESIZABLE = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::RESIZABLE
    }
}

/// What a node represents in the document.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NodeKind {
    /// A document page. Pages are roots and carry the identity transform.
    Page,
    /// A fixed-size container.
    Frame,
    /// A group of nodes; its extents are captured when it is created.
    Group,
    /// A plain rectangle (photos are rectangles with an image fill upstream).
    Rectangle,
}

/// An RGB color with channels in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Create a color from channels.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Where a stroke is drawn relative to the shape's outline.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum StrokeAlign {
    /// Centered on the outline.
    #[default]
    Center,
    /// Entirely inside the outline.
    Inside,
    /// Entirely outside the outline.
    Outside,
}

/// Stroke styling for a node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Stroke weight in local units.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
    /// Stroke alignment.
    pub align: StrokeAlign,
}

/// Local data for a node.
#[derive(Clone, Debug)]
pub struct LocalNode {
    /// Node kind.
    pub kind: NodeKind,
    /// Display name.
    pub name: String,
    /// Extents of the node's own `(0, 0, w, h)` rectangle.
    pub size: Size,
    /// Local transform relative to parent space.
    pub local_transform: Affine,
    /// Solid fill, if any.
    pub fill: Option<Color>,
    /// Stroke, if any.
    pub stroke: Option<Stroke>,
    /// Visibility and editability flags.
    pub flags: NodeFlags,
}

impl Default for LocalNode {
    fn default() -> Self {
        Self {
            kind: NodeKind::Rectangle,
            name: String::new(),
            size: Size::ZERO,
            local_transform: Affine::IDENTITY,
            fill: None,
            stroke: None,
            flags: NodeFlags::default(),
        }
    }
}

impl LocalNode {
    /// A page root.
    pub fn page(name: &str) -> Self {
        Self {
            kind: NodeKind::Page,
            name: name.into(),
            flags: NodeFlags::VISIBLE,
            ..Default::default()
        }
    }

    /// A rectangle occupying `rect` in parent space.
    pub fn rectangle(rect: Rect) -> Self {
        Self {
            size: rect.size(),
            local_transform: Affine::translate(Vec2::new(rect.x0, rect.y0)),
            ..Default::default()
        }
    }

    /// A fixed-size frame at the parent-space origin.
    pub fn frame(size: Size) -> Self {
        Self {
            kind: NodeKind::Frame,
            size,
            fill: Some(Color::WHITE),
            ..Default::default()
        }
    }
}
