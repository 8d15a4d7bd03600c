// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters that drive the engine against concrete documents.
//!
//! Enabled via feature flags so the engine itself stays document-agnostic.

#[cfg(feature = "scene_adapter")]
pub mod scene;
