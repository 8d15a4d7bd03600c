// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types shared by the engine and its host seams.

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, LayoutError>;

/// A failed call into the host document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("host document call failed: {message}")]
pub struct HostError {
    message: String,
}

impl HostError {
    /// Create a host error with a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The host's message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Everything that can go wrong while laying out a node or handling configuration.
///
/// Batch operations catch these per item; none of them aborts a batch.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// A transform with zero (or non-finite) determinant was inverted.
    #[error("transform is not invertible (determinant {determinant})")]
    DegenerateTransform {
        /// The offending determinant.
        determinant: f64,
    },

    /// The node's geometry contains NaN or infinite values.
    #[error("node geometry is not finite")]
    NonFiniteGeometry,

    /// The node has no containing parent, so no sibling border can be placed.
    #[error("node has no parent to place a border in")]
    NoParent,

    /// A node id no longer refers to anything in the document.
    #[error("node is no longer in the document")]
    MissingNode,

    /// A batch was started with nothing selected.
    #[error("Select at least one node first")]
    EmptySelection,

    /// The settings store could not be read or written.
    #[error("settings storage unavailable: {reason}")]
    PersistenceUnavailable {
        /// Why the store failed.
        reason: String,
    },

    /// A configuration message was not valid JSON for the protocol.
    #[error("malformed configuration message: {0}")]
    InvalidMessage(#[from] serde_json::Error),

    /// A document edit failed on the host side.
    #[error(transparent)]
    Host(#[from] HostError),
}
