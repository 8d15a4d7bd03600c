// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal document used by unit tests.

use std::collections::HashMap;

use kurbo::{Affine, Point, Size};

use crate::document::{DocumentEdit, Rgb, SceneRead, StrokeStyle};
use crate::error::HostError;

#[derive(Clone, Debug)]
pub(crate) struct FakeNode {
    pub(crate) parent: Option<u32>,
    pub(crate) page: bool,
    pub(crate) transform: Affine,
    pub(crate) size: Size,
}

/// Nodes keyed by plain integers.
#[derive(Clone, Debug, Default)]
pub(crate) struct FakeScene {
    pub(crate) nodes: HashMap<u32, FakeNode>,
    fail_group: bool,
}

impl FakeScene {
    pub(crate) fn page(mut self, id: u32) -> Self {
        self.nodes.insert(
            id,
            FakeNode {
                parent: None,
                page: true,
                transform: Affine::IDENTITY,
                size: Size::ZERO,
            },
        );
        self
    }

    pub(crate) fn node(mut self, id: u32, parent: Option<u32>, transform: Affine, size: Size) -> Self {
        self.nodes.insert(
            id,
            FakeNode {
                parent,
                page: false,
                transform,
                size,
            },
        );
        self
    }
}

impl FakeScene {
    /// Make every `group` call fail on the host side.
    pub(crate) fn failing_group(mut self) -> Self {
        self.fail_group = true;
        self
    }

    fn add(&mut self, parent: Option<u32>, size: Size) -> u32 {
        let id = self.nodes.keys().max().map_or(0, |m| m + 1);
        self.nodes.insert(
            id,
            FakeNode {
                parent,
                page: false,
                transform: Affine::IDENTITY,
                size,
            },
        );
        id
    }

    fn get_mut(&mut self, id: u32) -> Result<&mut FakeNode, HostError> {
        self.nodes
            .get_mut(&id)
            .ok_or_else(|| HostError::new(format!("no node {id}")))
    }

    fn root(&self) -> Option<u32> {
        self.nodes.iter().find(|(_, n)| n.page).map(|(&id, _)| id)
    }
}

impl SceneRead for FakeScene {
    type Id = u32;

    fn parent(&self, node: u32) -> Option<u32> {
        self.nodes.get(&node)?.parent
    }

    fn is_page(&self, node: u32) -> bool {
        self.nodes.get(&node).is_some_and(|n| n.page)
    }

    fn absolute_transform(&self, node: u32) -> Option<Affine> {
        self.nodes.get(&node).map(|n| n.transform)
    }

    fn size(&self, node: u32) -> Option<Size> {
        self.nodes.get(&node).map(|n| n.size)
    }

    fn is_resizable(&self, node: u32) -> bool {
        self.nodes.get(&node).is_some_and(|n| !n.page)
    }

    fn index_in_parent(&self, _node: u32) -> Option<usize> {
        Some(0)
    }
}

impl DocumentEdit for FakeScene {
    fn create_rectangle(&mut self) -> Result<u32, HostError> {
        let root = self.root();
        Ok(self.add(root, Size::ZERO))
    }

    fn set_name(&mut self, node: u32, _name: &str) -> Result<(), HostError> {
        self.get_mut(node).map(|_| ())
    }

    fn set_fill(&mut self, node: u32, _fill: Option<Rgb>) -> Result<(), HostError> {
        self.get_mut(node).map(|_| ())
    }

    fn set_stroke(&mut self, node: u32, _stroke: StrokeStyle) -> Result<(), HostError> {
        self.get_mut(node).map(|_| ())
    }

    fn set_position(&mut self, node: u32, position: Point) -> Result<(), HostError> {
        let n = self.get_mut(node)?;
        n.transform = n.transform.with_translation(position.to_vec2());
        Ok(())
    }

    fn resize(&mut self, node: u32, size: Size) -> Result<(), HostError> {
        self.get_mut(node)?.size = size;
        Ok(())
    }

    fn insert_child(&mut self, parent: u32, _index: usize, node: u32) -> Result<(), HostError> {
        self.append_child(parent, node)
    }

    fn append_child(&mut self, parent: u32, node: u32) -> Result<(), HostError> {
        self.get_mut(parent)?;
        self.get_mut(node)?.parent = Some(parent);
        Ok(())
    }

    fn group(&mut self, nodes: &[u32], parent: u32, _index: usize) -> Result<u32, HostError> {
        if self.fail_group {
            return Err(HostError::new("grouping refused"));
        }
        let group = self.add(Some(parent), Size::ZERO);
        for &node in nodes {
            self.append_child(group, node)?;
        }
        Ok(group)
    }

    fn create_frame(&mut self, size: Size) -> Result<u32, HostError> {
        let root = self.root();
        Ok(self.add(root, size))
    }

    fn append_to_root(&mut self, node: u32) -> Result<(), HostError> {
        let root = self.root().ok_or_else(|| HostError::new("no page"))?;
        self.append_child(root, node)
    }

    fn remove(&mut self, node: u32) -> Result<(), HostError> {
        self.nodes
            .remove(&node)
            .map(|_| ())
            .ok_or_else(|| HostError::new(format!("no node {node}")))
    }
}
