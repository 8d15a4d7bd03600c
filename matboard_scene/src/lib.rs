// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Matboard Scene: a Kurbo-native retained document scene.
//!
//! Matboard Scene is the reference host document that the layout engine in `matboard_layout`
//! reads geometry from and issues edits against.
//!
//! - Represents a hierarchy of pages, frames, groups, and rectangles with local transforms.
//! - Exposes each node's absolute (page-space) transform and axis-aligned bounds.
//! - Supports the edits a layout pass needs: insert at an index, reparent, group, move, resize, and restyle.
//!
//! ## Not a layout engine
//!
//! This crate does not decide where anything goes.
//! Upstream code computes positions and sizes and then updates the scene with the results.
//! Think of this as the document, not the tool that edits it.
//!
//! ## API overview
//!
//! - [`Scene`]: container managing nodes, parent links, and paint order.
//! - [`LocalNode`]: per-node local data (kind, size, transform, paint, flags).
//! - [`NodeKind`]: page, frame, group, or rectangle.
//! - [`NodeFlags`]: visibility and resizability.
//! - [`NodeId`]: generational handle of a node.
//!
//! Key operations:
//! - [`Scene::insert`] / [`Scene::insert_at`] → [`NodeId`]
//! - [`Scene::reparent`] / [`Scene::reparent_at`] / [`Scene::group`]
//! - [`Scene::set_position`] / [`Scene::resize`] / [`Scene::set_stroke`] / [`Scene::set_fill`]
//! - [`Scene::absolute_transform`] and [`Scene::absolute_bounds`].
//!
//! ## Geometry notes
//!
//! - A node's own rectangle is `(0, 0, w, h)` in its local space; its local transform places it in
//!   the parent's space. Absolute transforms are composed on demand, so they are never stale.
//! - Absolute bounds are the axis-aligned box of the four transformed corners; they are tight for
//!   axis-aligned transforms and conservative under rotation or shear.
//! - Pages are roots and carry the identity transform.
//!
//! # Example
//!
//! ```rust
//! use matboard_scene::{LocalNode, Scene};
//! use kurbo::{Point, Rect};
//!
//! let mut scene = Scene::new();
//! let page = scene.insert(None, LocalNode::page("Page 1"));
//! let photo = scene.insert(Some(page), LocalNode::rectangle(Rect::new(10.0, 10.0, 110.0, 60.0)));
//! let border = scene.insert_at(page, 0, LocalNode::rectangle(Rect::new(0.0, 0.0, 120.0, 70.0)));
//!
//! // Group the pair; the border stays behind the photo.
//! let group = scene.group(page, 0, &[border, photo]).unwrap();
//! assert_eq!(scene.children_of(group), &[border, photo]);
//!
//! // Moving the group carries its children along.
//! scene.set_position(group, Point::new(100.0, 0.0));
//! assert_eq!(scene.absolute_bounds(photo), Some(Rect::new(110.0, 10.0, 210.0, 60.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod scene;
mod types;
mod util;

pub use scene::Scene;
pub use types::{Color, LocalNode, NodeFlags, NodeId, NodeKind, Stroke, StrokeAlign};
