// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy row-major shelf packing across fixed-size pages.
//!
//! Items are placed in input order, left to right. A row wraps when the next item would cross
//! the usable width; a page wraps when it would cross the usable height. There is no sorting
//! and no optimality guarantee: the result is a pure function of the input order and sizes.
//!
//! ```
//! use kurbo::{Point, Size};
//! use matboard_layout::pack::{PackOptions, PackableItem, pack};
//!
//! let options = PackOptions {
//!     page_size: Size::new(250.0, 1000.0),
//!     ..PackOptions::default()
//! };
//! let items: Vec<_> = (0..3)
//!     .map(|id| PackableItem { id, size: Size::new(100.0, 40.0) })
//!     .collect();
//! let packing = pack(&items, &options);
//! assert_eq!(packing.items[1].position, Point::new(100.0, 0.0));
//! assert_eq!(packing.items[2].position, Point::new(0.0, 40.0));
//! ```

use kurbo::{Point, Size, Vec2};

/// Page geometry and spacing for a packing pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PackOptions {
    /// Full page size.
    pub page_size: Size,
    /// Margin kept free on every page edge.
    pub margin: f64,
    /// Gap between neighbouring items, both within a row and between rows.
    pub cell_gap: f64,
    /// Horizontal gap between consecutive pages.
    pub page_gap: f64,
    /// Offset of the first page from the anchor.
    pub page_offset: Vec2,
    /// Absolute point the page row hangs off.
    pub anchor: Point,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            page_size: Size::ZERO,
            margin: 0.0,
            cell_gap: 0.0,
            page_gap: 0.0,
            page_offset: Vec2::ZERO,
            anchor: Point::ORIGIN,
        }
    }
}

impl PackOptions {
    /// Page area left for items once margins are taken off both sides.
    pub fn usable(&self) -> Size {
        Size::new(
            self.page_size.width - 2.0 * self.margin,
            self.page_size.height - 2.0 * self.margin,
        )
    }

    /// Absolute origin of page `index`; pages form a single horizontal row.
    pub fn page_origin(&self, index: usize) -> Point {
        #[allow(
            clippy::cast_precision_loss,
            reason = "page counts stay far below 2^52."
        )]
        let n = index as f64;
        self.anchor
            + Vec2::new(
                self.page_offset.x + n * (self.page_size.width + self.page_gap),
                self.page_offset.y,
            )
    }
}

/// An item to pack.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PackableItem<K> {
    /// Opaque identity carried through to the placement.
    pub id: K,
    /// Item extents.
    pub size: Size,
}

/// Where an item landed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemPlacement<K> {
    /// The item's identity.
    pub id: K,
    /// Page index, starting at `0`.
    pub page: usize,
    /// Top-left of the item in the page's local space.
    pub position: Point,
}

/// A page produced by packing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PagePlacement {
    /// Page index, starting at `0`.
    pub index: usize,
    /// Absolute top-left of the page.
    pub origin: Point,
}

/// Result of a packing pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Packing<K> {
    /// Pages in order. There is always at least one.
    pub pages: Vec<PagePlacement>,
    /// One placement per input item, in input order.
    pub items: Vec<ItemPlacement<K>>,
}

/// Pack `items` onto pages.
///
/// Items wider or taller than the usable area are still placed at the cursor and overflow
/// their page. A page wrap can therefore leave an earlier page empty when its first item
/// is taller than the usable height.
pub fn pack<K: Copy>(items: &[PackableItem<K>], options: &PackOptions) -> Packing<K> {
    let usable = options.usable();
    let margin = options.margin;
    let right = margin + usable.width;
    let bottom = margin + usable.height;

    let mut x = margin;
    let mut y = margin;
    let mut row_height = 0.0_f64;
    let mut page = 0_usize;
    let mut placed = Vec::with_capacity(items.len());

    for item in items {
        let Size { width, height } = item.size;
        // Row wrap.
        if x > margin && x + width > right {
            x = margin;
            y += row_height + options.cell_gap;
            row_height = 0.0;
        }
        // Page wrap.
        if y + height > bottom {
            page += 1;
            x = margin;
            y = margin;
            row_height = 0.0;
        }
        placed.push(ItemPlacement {
            id: item.id,
            page,
            position: Point::new(x, y),
        });
        x += width + options.cell_gap;
        row_height = row_height.max(height);
    }

    let pages = (0..=page)
        .map(|index| PagePlacement {
            index,
            origin: options.page_origin(index),
        })
        .collect();
    Packing {
        pages,
        items: placed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(sizes: &[(f64, f64)]) -> Vec<PackableItem<usize>> {
        sizes
            .iter()
            .enumerate()
            .map(|(id, &(w, h))| PackableItem {
                id,
                size: Size::new(w, h),
            })
            .collect()
    }

    fn page(width: f64, height: f64) -> PackOptions {
        PackOptions {
            page_size: Size::new(width, height),
            ..PackOptions::default()
        }
    }

    #[test]
    fn row_wraps_when_width_runs_out() {
        let packing = pack(&items(&[(100.0, 30.0); 3]), &page(250.0, 1000.0));
        let pos: Vec<_> = packing.items.iter().map(|p| p.position).collect();
        assert_eq!(
            pos,
            [
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(0.0, 30.0)
            ]
        );
        assert!(packing.items.iter().all(|p| p.page == 0));
        assert_eq!(packing.pages.len(), 1);
    }

    #[test]
    fn rows_advance_by_tallest_item_plus_gap() {
        let options = PackOptions {
            margin: 10.0,
            cell_gap: 5.0,
            ..page(230.0, 1000.0)
        };
        let packing = pack(&items(&[(100.0, 20.0), (100.0, 60.0), (50.0, 10.0)]), &options);
        assert_eq!(packing.items[0].position, Point::new(10.0, 10.0));
        assert_eq!(packing.items[1].position, Point::new(115.0, 10.0));
        assert_eq!(packing.items[2].position, Point::new(10.0, 75.0));
    }

    #[test]
    fn tall_item_gets_its_own_page() {
        let options = PackOptions {
            margin: 20.0,
            ..page(200.0, 200.0)
        };
        let packing = pack(&items(&[(50.0, 500.0)]), &options);
        assert_eq!(packing.pages.len(), 2, "page count grows by exactly one");
        assert_eq!(packing.items[0].page, 1);
        assert_eq!(packing.items[0].position, Point::new(20.0, 20.0));
    }

    #[test]
    fn page_wraps_when_height_runs_out() {
        let packing = pack(&items(&[(100.0, 60.0); 5]), &page(200.0, 130.0));
        let pages: Vec<_> = packing.items.iter().map(|p| p.page).collect();
        assert_eq!(pages, [0, 0, 0, 0, 1]);
        assert_eq!(packing.items[4].position, Point::ZERO);
        assert_eq!(packing.pages.len(), 2);
    }

    #[test]
    fn wide_item_overflows_in_place() {
        let packing = pack(&items(&[(500.0, 10.0), (20.0, 10.0)]), &page(100.0, 100.0));
        assert_eq!(packing.items[0].position, Point::ZERO);
        assert_eq!(packing.items[0].page, 0);
        // The cursor is past the row end, so the next item wraps.
        assert_eq!(packing.items[1].position, Point::new(0.0, 10.0));
    }

    #[test]
    fn pages_form_a_row_off_the_anchor() {
        let options = PackOptions {
            page_gap: 100.0,
            page_offset: Vec2::new(200.0, 10.0),
            anchor: Point::new(1000.0, -50.0),
            ..page(300.0, 100.0)
        };
        let packing = pack(&items(&[(300.0, 100.0); 3]), &options);
        let origins: Vec<_> = packing.pages.iter().map(|p| p.origin).collect();
        assert_eq!(
            origins,
            [
                Point::new(1200.0, -40.0),
                Point::new(1600.0, -40.0),
                Point::new(2000.0, -40.0)
            ]
        );
    }

    #[test]
    fn packing_is_deterministic() {
        let input = items(&[
            (120.0, 80.0),
            (60.0, 200.0),
            (300.0, 40.0),
            (90.0, 90.0),
            (15.0, 400.0),
        ]);
        let options = PackOptions {
            margin: 12.0,
            cell_gap: 6.0,
            ..page(320.0, 420.0)
        };
        assert_eq!(pack(&input, &options), pack(&input, &options));
    }

    #[test]
    fn empty_input_still_has_first_page() {
        let packing = pack::<u8>(&[], &page(100.0, 100.0));
        assert_eq!(packing.pages.len(), 1);
        assert!(packing.items.is_empty());
    }
}
