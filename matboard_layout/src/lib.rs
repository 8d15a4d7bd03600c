// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Matboard Layout: outward borders and row-major page packing for design documents.
//!
//! ## Overview
//!
//! This crate computes where things go and then issues the edits to put them there.
//! It does not own a document. It reads geometry through [`SceneRead`](crate::document::SceneRead)
//! and mutates through [`DocumentEdit`](crate::document::DocumentEdit); an implementation for
//! `matboard_scene` ships in [`adapters::scene`](crate::adapters::scene).
//!
//! ## Geometry
//!
//! - [`affine`]: apply and invert 2×3 transforms; convert absolute points into a parent's space.
//! - [`bounds`]: axis-aligned bounds of a transformed `(0, 0, w, h)` rectangle.
//! - [`border`]: grow a node's bounds by the configured gap and place a border rectangle
//!   behind it, then group the pair.
//! - [`pack`]: greedy shelf packing of item sizes onto fixed-size pages.
//! - [`orientation`]: portrait / landscape classification with fixed target sizes.
//!
//! ## Running things
//!
//! - [`batch`]: chunked cooperative execution with cancellation. Per-item failures are
//!   counted and skipped.
//! - [`flow`]: the border flow and the master layout flow, each ending in one summary
//!   notification.
//! - [`command`]: map a command id to a flow.
//! - [`settings`] and [`message`]: resolved settings, persistence, and the configuration
//!   message protocol.
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "scene_adapter")]
//! # {
//! use futures::executor::block_on;
//! use kurbo::Rect;
//! use matboard_layout::adapters::scene::SceneDocument;
//! use matboard_layout::batch::CancelToken;
//! use matboard_layout::flow::apply_borders;
//! use matboard_layout::settings::Settings;
//! use matboard_scene::{LocalNode, Scene};
//!
//! let mut scene = Scene::new();
//! let page = scene.insert(None, LocalNode::page("Page 1"));
//! let photo = scene.insert(Some(page), LocalNode::rectangle(Rect::new(10.0, 10.0, 110.0, 60.0)));
//!
//! let settings = Settings { gap: 10.0, ..Settings::default() };
//! let mut notes: Vec<String> = Vec::new();
//! let report = block_on(apply_borders(
//!     &mut SceneDocument::new(&mut scene, page),
//!     &[photo],
//!     &settings,
//!     &CancelToken::new(),
//!     &mut notes,
//! ));
//! assert_eq!(report.succeeded, 1);
//!
//! let group = scene.parent_of(photo).unwrap();
//! assert_eq!(scene.absolute_bounds(group), Some(Rect::new(0.0, 0.0, 120.0, 70.0)));
//! # }
//! ```

pub mod adapters;
pub mod affine;
pub mod batch;
pub mod border;
pub mod bounds;
pub mod cache;
pub mod command;
pub mod document;
pub mod error;
pub mod flow;
pub mod message;
pub mod orientation;
pub mod pack;
pub mod settings;

#[cfg(test)]
mod testing;

pub use error::{HostError, LayoutError, Result};
