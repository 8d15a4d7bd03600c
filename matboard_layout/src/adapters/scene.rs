// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for Matboard Scene.
//!
//! ## Feature
//!
//! Enable with `scene_adapter` (on by default).
//!
//! ## Notes
//!
//! [`SceneDocument`] borrows a [`Scene`] together with the page that new nodes are created on.
//! The scene silently ignores edits on stale ids; the adapter turns those into [`HostError`]s
//! so that batch flows count them as skipped items.

use kurbo::{Affine, Point, Size};
use matboard_scene::{Color, LocalNode, NodeFlags, NodeId, NodeKind, Scene, Stroke};

use crate::document::{DocumentEdit, Rgb, SceneRead, StrokeAlign, StrokeStyle};
use crate::error::HostError;

/// A [`Scene`] seen through the host document contract.
#[derive(Debug)]
pub struct SceneDocument<'a> {
    scene: &'a mut Scene,
    page: NodeId,
}

impl<'a> SceneDocument<'a> {
    /// Edit `scene`, creating new nodes on `page`.
    pub fn new(scene: &'a mut Scene, page: NodeId) -> Self {
        Self { scene, page }
    }

    /// The page new nodes land on.
    pub fn page(&self) -> NodeId {
        self.page
    }

    /// The underlying scene.
    pub fn scene(&self) -> &Scene {
        self.scene
    }

    fn live(&self, id: NodeId) -> Result<(), HostError> {
        if self.scene.is_alive(id) {
            Ok(())
        } else {
            Err(HostError::new(format!("{id:?} is not in the scene")))
        }
    }

    fn attached(&self, node: NodeId, parent: NodeId) -> Result<(), HostError> {
        if self.scene.parent_of(node) == Some(parent) {
            Ok(())
        } else {
            Err(HostError::new(format!(
                "{node:?} cannot be moved under {parent:?}"
            )))
        }
    }
}

fn color(rgb: Rgb) -> Color {
    Color::rgb(rgb.r, rgb.g, rgb.b)
}

fn stroke_align(align: StrokeAlign) -> matboard_scene::StrokeAlign {
    match align {
        StrokeAlign::Center => matboard_scene::StrokeAlign::Center,
        StrokeAlign::Inside => matboard_scene::StrokeAlign::Inside,
        StrokeAlign::Outside => matboard_scene::StrokeAlign::Outside,
    }
}

impl SceneRead for SceneDocument<'_> {
    type Id = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.scene.parent_of(node)
    }

    fn is_page(&self, node: NodeId) -> bool {
        self.scene.kind(node) == Some(NodeKind::Page)
    }

    fn absolute_transform(&self, node: NodeId) -> Option<Affine> {
        self.scene.absolute_transform(node)
    }

    fn size(&self, node: NodeId) -> Option<Size> {
        self.scene.size(node)
    }

    fn is_resizable(&self, node: NodeId) -> bool {
        self.scene
            .flags(node)
            .is_some_and(|f| f.contains(NodeFlags::RESIZABLE))
    }

    fn index_in_parent(&self, node: NodeId) -> Option<usize> {
        self.scene.index_in_parent(node)
    }
}

impl DocumentEdit for SceneDocument<'_> {
    fn create_rectangle(&mut self) -> Result<NodeId, HostError> {
        self.live(self.page)?;
        Ok(self.scene.insert(Some(self.page), LocalNode::default()))
    }

    fn set_name(&mut self, node: NodeId, name: &str) -> Result<(), HostError> {
        self.live(node)?;
        self.scene.set_name(node, name);
        Ok(())
    }

    fn set_fill(&mut self, node: NodeId, fill: Option<Rgb>) -> Result<(), HostError> {
        self.live(node)?;
        self.scene.set_fill(node, fill.map(color));
        Ok(())
    }

    fn set_stroke(&mut self, node: NodeId, stroke: StrokeStyle) -> Result<(), HostError> {
        self.live(node)?;
        self.scene.set_stroke(
            node,
            Some(Stroke {
                width: stroke.width,
                color: color(stroke.color),
                align: stroke_align(stroke.align),
            }),
        );
        Ok(())
    }

    fn set_position(&mut self, node: NodeId, position: Point) -> Result<(), HostError> {
        self.live(node)?;
        self.scene.set_position(node, position);
        Ok(())
    }

    fn resize(&mut self, node: NodeId, size: Size) -> Result<(), HostError> {
        self.live(node)?;
        self.scene.resize(node, size);
        Ok(())
    }

    fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        node: NodeId,
    ) -> Result<(), HostError> {
        self.live(parent)?;
        self.live(node)?;
        self.scene.reparent_at(node, parent, index);
        self.attached(node, parent)
    }

    fn append_child(&mut self, parent: NodeId, node: NodeId) -> Result<(), HostError> {
        self.live(parent)?;
        self.live(node)?;
        self.scene.reparent(node, Some(parent));
        self.attached(node, parent)
    }

    fn group(
        &mut self,
        nodes: &[NodeId],
        parent: NodeId,
        index: usize,
    ) -> Result<NodeId, HostError> {
        self.scene
            .group(parent, index, nodes)
            .ok_or_else(|| HostError::new("group members are not all in the scene"))
    }

    fn create_frame(&mut self, size: Size) -> Result<NodeId, HostError> {
        self.live(self.page)?;
        Ok(self.scene.insert(Some(self.page), LocalNode::frame(size)))
    }

    fn append_to_root(&mut self, node: NodeId) -> Result<(), HostError> {
        self.append_child(self.page, node)
    }

    fn remove(&mut self, node: NodeId) -> Result<(), HostError> {
        self.live(node)?;
        self.scene.remove(node);
        Ok(())
    }
}
