// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core scene implementation: structure, edits, and geometry queries.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::types::{Color, LocalNode, NodeFlags, NodeId, NodeKind, Stroke};
use crate::util::transform_size_bbox;

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// A retained document scene.
///
/// Nodes live in generational slots. Each node knows its parent and its ordered
/// children; child order is paint order (index `0` is drawn first, i.e. behind).
pub struct Scene {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Scene {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Scene")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    local: LocalNode,
}

impl Node {
    fn new(generation: u32, local: LocalNode) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            local,
        }
    }
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a new node as the last child of `parent` (or as a root if `None`).
    pub fn insert(&mut self, parent: Option<NodeId>, local: LocalNode) -> NodeId {
        let id = self.alloc(local);
        if let Some(p) = parent.filter(|p| self.is_alive(*p)) {
            let end = self.node(p).children.len();
            self.link_parent(id, p, end);
        }
        id
    }

    /// Insert a new node as a child of `parent` at `index` in paint order.
    ///
    /// `index` is clamped to the number of children.
    pub fn insert_at(&mut self, parent: NodeId, index: usize, local: LocalNode) -> NodeId {
        let id = self.alloc(local);
        if self.is_alive(parent) {
            self.link_parent(id, parent, index);
        }
        id
    }

    /// Remove a node (and its subtree) from the scene.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        let children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Reparent `id` as the last child of `new_parent` (or detach it as a root).
    ///
    /// A stale `new_parent` is ignored and `id` stays where it is.
    /// The node's local transform is kept as is, so its absolute placement follows the new parent.
    /// Moving a node under itself or one of its descendants is ignored.
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) {
        match new_parent {
            Some(p) => {
                let Some(end) = self.node_opt(p).map(|n| n.children.len()) else {
                    return;
                };
                self.reparent_at(id, p, end);
            }
            None => {
                if !self.is_alive(id) {
                    return;
                }
                if let Some(parent) = self.node(id).parent {
                    self.unlink_parent(id, parent);
                }
            }
        }
    }

    /// Reparent `id` under `parent` at `index` in paint order.
    ///
    /// Moving a node under itself or one of its descendants is ignored.
    pub fn reparent_at(&mut self, id: NodeId, parent: NodeId, index: usize) {
        if !self.is_alive(id) || !self.is_alive(parent) {
            return;
        }
        if self.path_to_root(parent).contains(&id) {
            return;
        }
        if let Some(old) = self.node(id).parent {
            self.unlink_parent(id, old);
        }
        self.link_parent(id, parent, index);
    }

    /// Wrap `children` into a new group inserted under `parent` at `index`.
    ///
    /// The group's origin is the top-left of the children's union bounds in `parent` space
    /// and its size is that union's size. Children keep their absolute placement and are
    /// stacked in slice order (the first child is drawn behind the others).
    ///
    /// Returns `None` if `parent` is stale, `children` is empty, or any child is stale.
    pub fn group(&mut self, parent: NodeId, index: usize, children: &[NodeId]) -> Option<NodeId> {
        if !self.is_alive(parent) || children.is_empty() {
            return None;
        }
        if children.iter().any(|c| !self.is_alive(*c)) {
            return None;
        }
        let in_parent: Vec<Affine> = children
            .iter()
            .map(|&c| self.transform_in(c, parent))
            .collect::<Option<_>>()?;
        let bounds = children
            .iter()
            .zip(&in_parent)
            .map(|(&c, tf)| transform_size_bbox(*tf, self.node(c).local.size))
            .reduce(|acc, r| acc.union(r))?;
        let origin = Vec2::new(bounds.x0, bounds.y0);
        let group = self.insert_at(
            parent,
            index,
            LocalNode {
                kind: NodeKind::Group,
                name: String::from("Group"),
                size: bounds.size(),
                local_transform: Affine::translate(origin),
                ..Default::default()
            },
        );
        for (&child, tf) in children.iter().zip(in_parent) {
            if let Some(old) = self.node(child).parent {
                self.unlink_parent(child, old);
            }
            self.node_mut(child).local.local_transform = Affine::translate(-origin) * tf;
            let end = self.node(group).children.len();
            self.link_parent(child, group, end);
        }
        Some(group)
    }

    /// Update local transform.
    pub fn set_local_transform(&mut self, id: NodeId, tf: Affine) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.local_transform = tf;
        }
    }

    /// Move a node so its local origin sits at `pos` in parent space, keeping rotation, scale, and skew.
    pub fn set_position(&mut self, id: NodeId, pos: Point) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.local_transform = n.local.local_transform.with_translation(pos.to_vec2());
        }
    }

    /// Update the node's extents.
    pub fn resize(&mut self, id: NodeId, size: Size) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.size = size;
        }
    }

    /// Update the solid fill.
    pub fn set_fill(&mut self, id: NodeId, fill: Option<Color>) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.fill = fill;
        }
    }

    /// Update the stroke.
    pub fn set_stroke(&mut self, id: NodeId, stroke: Option<Stroke>) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.stroke = stroke;
        }
    }

    /// Update the display name.
    pub fn set_name(&mut self, id: NodeId, name: &str) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.name = name.into();
        }
    }

    /// Update node flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.flags = flags;
        }
    }

    // --- queries ---

    /// Returns true if `id` refers to a live node.
    ///
    /// See [`NodeId`] docs for the generational semantics.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// Local data of a live node.
    pub fn local(&self, id: NodeId) -> Option<&LocalNode> {
        self.node_opt(id).map(|n| &n.local)
    }

    /// Kind of a live node.
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.local(id).map(|l| l.kind)
    }

    /// Flags of a live node.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.local(id).map(|l| l.flags)
    }

    /// Extents of a live node.
    pub fn size(&self, id: NodeId) -> Option<Size> {
        self.local(id).map(|l| l.size)
    }

    /// Parent of a live node, or `None` for roots and stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Children of a live node in paint order. Stale ids yield an empty slice.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Position of a node among its parent's children.
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent_of(id)?;
        self.node(parent).children.iter().position(|c| *c == id)
    }

    /// Root nodes (pages, and anything detached), in slot order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, n)| match n {
            Some(n) if n.parent.is_none() =>
            {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "NodeId stores 32-bit slot indices."
                )]
                Some(NodeId::new(i as u32, n.generation))
            }
            _ => None,
        })
    }

    /// Local→absolute transform: the product of local transforms from the root down to `id`.
    pub fn absolute_transform(&self, id: NodeId) -> Option<Affine> {
        if !self.is_alive(id) {
            return None;
        }
        Some(
            self.path_to_root(id)
                .iter()
                .fold(Affine::IDENTITY, |acc, n| acc * self.node(*n).local.local_transform),
        )
    }

    /// Absolute axis-aligned bounds of a node's `(0, 0, w, h)` rectangle.
    pub fn absolute_bounds(&self, id: NodeId) -> Option<Rect> {
        let tf = self.absolute_transform(id)?;
        Some(transform_size_bbox(tf, self.node(id).local.size))
    }

    // --- internals ---

    fn alloc(&mut self, local: LocalNode) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, local));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId stores 32-bit slot indices."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, local)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId stores 32-bit slot indices."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        NodeId::new(idx, generation)
    }

    /// Transform of `id` expressed in `space`'s local coordinates.
    fn transform_in(&self, id: NodeId, space: NodeId) -> Option<Affine> {
        if self.node(id).parent == Some(space) {
            return Some(self.node(id).local.local_transform);
        }
        let space_tf = self.absolute_transform(space)?;
        if space_tf.determinant() == 0.0 {
            return None;
        }
        Some(space_tf.inverse() * self.absolute_transform(id)?)
    }

    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId, index: usize) {
        let children = &mut self.node_mut(parent).children;
        let index = index.min(children.len());
        children.insert(index, id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }

    fn path_to_root(&self, mut id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        loop {
            out.push(id);
            let parent = self.node(id).parent;
            match parent {
                Some(p) => id = p,
                None => break,
            }
        }
        out.reverse();
        out
    }
}
