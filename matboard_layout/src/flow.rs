// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end flows over a selection: borders, and the master page layout.
//!
//! Both flows run their per-node work through [`Batch`], share one [`InverseCache`] per call,
//! and end with exactly one summary notification. Nothing they do returns an error; failures
//! are counted in the returned report.

use kurbo::{Point, Size, Vec2};
use tracing::{info, warn};

use crate::batch::{Batch, BatchReport, CancelToken};
use crate::border::{resolve_parent, synthesize};
use crate::bounds::{absolute_bounds, union_bounds};
use crate::cache::InverseCache;
use crate::document::DocumentEdit;
use crate::error::{LayoutError, Result};
use crate::orientation::normalize;
use crate::pack::{PackOptions, PackableItem, pack};
use crate::settings::Settings;

/// Receives user-facing messages.
pub trait Notifier {
    /// Show `message` to the user.
    fn notify(&mut self, message: &str);
}

/// Sends notifications to the `tracing` log.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str) {
        info!(target: "matboard::notify", "{message}");
    }
}

impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}

/// Page geometry for the master layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MasterLayout {
    /// Size of each output page frame.
    pub page_size: Size,
    /// Margin inside each page.
    pub margin: f64,
    /// Gap between groups on a page.
    pub cell_gap: f64,
    /// Horizontal gap between page frames.
    pub page_gap: f64,
    /// Offset of the first page from the selection's top-right corner.
    pub page_offset: Vec2,
}

impl Default for MasterLayout {
    fn default() -> Self {
        Self {
            page_size: Size::new(1240.0, 1754.0),
            margin: 40.0,
            cell_gap: 20.0,
            page_gap: 100.0,
            page_offset: Vec2::new(200.0, 0.0),
        }
    }
}

impl MasterLayout {
    /// Packing options for pages hanging off `anchor`.
    pub fn pack_options(&self, anchor: Point) -> PackOptions {
        PackOptions {
            page_size: self.page_size,
            margin: self.margin,
            cell_gap: self.cell_gap,
            page_gap: self.page_gap,
            page_offset: self.page_offset,
            anchor,
        }
    }
}

/// Counts from a master layout run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MasterReport {
    /// The border pass over the selection.
    pub bordered: BatchReport,
    /// Groups moved onto a page.
    pub placed: usize,
    /// Page frames created.
    pub pages: usize,
}

/// Put a border behind every selected node and group each pair.
pub async fn apply_borders<D, N>(
    doc: &mut D,
    selection: &[D::Id],
    settings: &Settings,
    cancel: &CancelToken,
    notifier: &mut N,
) -> BatchReport
where
    D: DocumentEdit + ?Sized,
    N: Notifier + ?Sized,
{
    if selection.is_empty() {
        notifier.notify(&LayoutError::EmptySelection.to_string());
        return BatchReport::default();
    }
    let mut cache = InverseCache::new();
    let (_, report) = Batch::default()
        .run(selection, cancel, |&node| {
            border_one(doc, node, settings, &mut cache)
        })
        .await;
    info!(?report, inversions = cache.inversions(), "borders applied");
    notifier.notify(&border_summary(&report));
    report
}

/// Normalize, border, and pack the selection onto fresh page frames.
///
/// The pages hang off the top-right corner of the selection's union bounds, measured before
/// anything is edited.
pub async fn master_layout<D, N>(
    doc: &mut D,
    selection: &[D::Id],
    settings: &Settings,
    layout: &MasterLayout,
    cancel: &CancelToken,
    notifier: &mut N,
) -> MasterReport
where
    D: DocumentEdit + ?Sized,
    N: Notifier + ?Sized,
{
    if selection.is_empty() {
        notifier.notify(&LayoutError::EmptySelection.to_string());
        return MasterReport::default();
    }
    let anchor = union_bounds(selection.iter().filter_map(|&node| {
        Some(absolute_bounds(
            doc.absolute_transform(node)?,
            doc.size(node)?,
        ))
    }))
    .map_or(Point::ORIGIN, |r| Point::new(r.x1, r.y0));

    let mut cache = InverseCache::new();
    let batch = Batch::default();
    let (groups, bordered) = batch
        .run(selection, cancel, |&node| {
            // A node that cannot be bordered is left untouched.
            resolve_parent(&*doc, node, &mut cache)?;
            normalize(doc, node)?;
            border_one(doc, node, settings, &mut cache)
        })
        .await;

    let mut report = MasterReport {
        bordered,
        ..MasterReport::default()
    };
    let items: Vec<_> = groups
        .iter()
        .filter_map(|&id| Some(PackableItem { id, size: doc.size(id)? }))
        .collect();
    if items.is_empty() || bordered.cancelled {
        notifier.notify(&master_summary(&report));
        return report;
    }

    let options = layout.pack_options(anchor);
    let packing = pack(&items, &options);
    let mut frames = Vec::with_capacity(packing.pages.len());
    for page in &packing.pages {
        match create_page(doc, options.page_size, page.index, page.origin) {
            Ok(frame) => frames.push(Some(frame)),
            Err(err) => {
                warn!(page = page.index, %err, "could not create page frame");
                frames.push(None);
            }
        }
    }
    report.pages = frames.iter().flatten().count();

    let (_, placed) = batch
        .run(&packing.items, cancel, |placement| {
            let frame = frames[placement.page].ok_or(LayoutError::MissingNode)?;
            doc.append_child(frame, placement.id)?;
            doc.set_position(placement.id, placement.position)?;
            Ok(())
        })
        .await;
    report.placed = placed.succeeded;
    info!(?report, "master layout done");
    notifier.notify(&master_summary(&report));
    report
}

fn border_one<D>(
    doc: &mut D,
    node: D::Id,
    settings: &Settings,
    cache: &mut InverseCache<D::Id>,
) -> Result<D::Id>
where
    D: DocumentEdit + ?Sized,
{
    let placement = synthesize(&*doc, node, settings, cache)?;
    placement.apply(doc, node, settings)
}

fn create_page<D>(doc: &mut D, size: Size, index: usize, origin: Point) -> Result<D::Id>
where
    D: DocumentEdit + ?Sized,
{
    let frame = doc.create_frame(size)?;
    doc.set_name(frame, &format!("Page {}", index + 1))?;
    doc.append_to_root(frame)?;
    doc.set_position(frame, origin)?;
    Ok(frame)
}

fn border_summary(report: &BatchReport) -> String {
    let mut message = format!("Added borders to {} node(s)", report.succeeded);
    if report.skipped > 0 {
        message.push_str(&format!(", skipped {}", report.skipped));
    }
    if report.cancelled {
        message.push_str(" (cancelled)");
    }
    message
}

fn master_summary(report: &MasterReport) -> String {
    let mut message = format!(
        "Placed {} group(s) on {} page(s)",
        report.placed, report.pages
    );
    if report.bordered.skipped > 0 {
        message.push_str(&format!(", skipped {}", report.bordered.skipped));
    }
    if report.bordered.cancelled {
        message.push_str(" (cancelled)");
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_defaults() {
        let layout = MasterLayout::default();
        let options = layout.pack_options(Point::new(500.0, 20.0));
        assert_eq!(options.page_size, Size::new(1240.0, 1754.0));
        assert_eq!(options.usable(), Size::new(1160.0, 1674.0));
        assert_eq!(options.page_origin(0), Point::new(700.0, 20.0));
        assert_eq!(options.page_origin(1), Point::new(2040.0, 20.0));
    }

    #[test]
    fn summaries_report_counts() {
        let report = BatchReport {
            processed: 5,
            succeeded: 4,
            skipped: 1,
            cancelled: false,
        };
        assert_eq!(border_summary(&report), "Added borders to 4 node(s), skipped 1");
        let master = MasterReport {
            bordered: BatchReport {
                cancelled: true,
                ..report
            },
            placed: 4,
            pages: 2,
        };
        assert_eq!(
            master_summary(&master),
            "Placed 4 group(s) on 2 page(s), skipped 1 (cancelled)"
        );
    }

    #[test]
    fn vec_notifier_collects() {
        let mut sink: Vec<String> = Vec::new();
        sink.notify("hello");
        LogNotifier.notify("ignored");
        assert_eq!(sink, ["hello"]);
    }
}
