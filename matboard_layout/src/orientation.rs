// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Portrait / landscape classification and fixed target sizes.

use kurbo::Size;
use tracing::debug;

use crate::document::DocumentEdit;
use crate::error::{LayoutError, Result};

/// Target size for portrait nodes.
pub const PORTRAIT_SIZE: Size = Size::new(400.0, 600.0);

/// Target size for landscape nodes.
pub const LANDSCAPE_SIZE: Size = Size::new(600.0, 400.0);

/// Aspect class of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// At least as tall as wide. Squares land here.
    Portrait,
    /// Wider than tall.
    Landscape,
}

impl Orientation {
    /// Classify `size`: portrait iff `height >= width`.
    pub fn classify(size: Size) -> Self {
        if size.height >= size.width {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }

    /// The fixed size nodes of this orientation are resized to.
    pub const fn target_size(self) -> Size {
        match self {
            Self::Portrait => PORTRAIT_SIZE,
            Self::Landscape => LANDSCAPE_SIZE,
        }
    }
}

/// Resize `node` to the target size of its orientation.
///
/// Returns `Ok(false)` without touching the document when the node has no resizable geometry.
pub fn normalize<D>(doc: &mut D, node: D::Id) -> Result<bool>
where
    D: DocumentEdit + ?Sized,
{
    if !doc.is_resizable(node) {
        debug!(?node, "not resizable; orientation left alone");
        return Ok(false);
    }
    let size = doc.size(node).ok_or(LayoutError::MissingNode)?;
    let target = Orientation::classify(size).target_size();
    doc.resize(node, target)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_is_portrait() {
        assert_eq!(
            Orientation::classify(Size::new(100.0, 100.0)),
            Orientation::Portrait
        );
    }

    #[test]
    fn wide_is_landscape() {
        let o = Orientation::classify(Size::new(300.0, 200.0));
        assert_eq!(o, Orientation::Landscape);
        assert_eq!(o.target_size(), Size::new(600.0, 400.0));
        assert_eq!(
            Orientation::classify(Size::new(10.0, 11.0)).target_size(),
            Size::new(400.0, 600.0)
        );
    }
}
