// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-run cache of parent inverse transforms.

use std::collections::HashMap;
use std::hash::Hash;

use kurbo::Affine;

use crate::affine::{ParentSpace, invert};
use crate::document::SceneRead;
use crate::error::{LayoutError, Result};

/// Inverse transforms of parents, keyed by node id.
///
/// Owned by a single batch call and dropped with it. Each distinct parent is inverted at most
/// once, so many siblings under one parent share a single inversion. Page roots never reach the
/// cache since their space is the identity.
#[derive(Debug)]
pub struct InverseCache<K> {
    // `Err` holds the determinant of a parent that could not be inverted.
    entries: HashMap<K, core::result::Result<Affine, f64>>,
    inversions: usize,
}

impl<K> Default for InverseCache<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            inversions: 0,
        }
    }
}

impl<K: Copy + Eq + Hash> InverseCache<K> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Space of `parent` for absolute→local conversion, inverting its transform on first use.
    pub fn parent_space<D>(&mut self, doc: &D, parent: K) -> Result<ParentSpace>
    where
        D: SceneRead<Id = K> + ?Sized,
    {
        if doc.is_page(parent) {
            return Ok(ParentSpace::Page);
        }
        if let Some(entry) = self.entries.get(&parent) {
            return match *entry {
                Ok(inverse) => Ok(ParentSpace::Local(inverse)),
                Err(determinant) => Err(LayoutError::DegenerateTransform { determinant }),
            };
        }
        let transform = doc
            .absolute_transform(parent)
            .ok_or(LayoutError::MissingNode)?;
        self.inversions += 1;
        match invert(transform) {
            Ok(inverse) => {
                self.entries.insert(parent, Ok(inverse));
                Ok(ParentSpace::Local(inverse))
            }
            Err(LayoutError::DegenerateTransform { determinant }) => {
                self.entries.insert(parent, Err(determinant));
                Err(LayoutError::DegenerateTransform { determinant })
            }
            Err(err) => Err(err),
        }
    }

    /// Number of inversions performed so far.
    pub fn inversions(&self) -> usize {
        self.inversions
    }

    /// Number of distinct parents cached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
