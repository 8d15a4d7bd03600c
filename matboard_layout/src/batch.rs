// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cooperative, chunked, cancellable batch execution.
//!
//! A batch walks its items in chunks of at most [`CHUNK_SIZE`]. Between chunks it awaits
//! [`yield_now`] so whatever drives the future regains control, and it checks the
//! [`CancelToken`] at every chunk boundary. A failing item is logged and counted as skipped;
//! it never aborts the batch.

use core::fmt::Debug;
use core::task::Poll;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::future::poll_fn;
use tracing::{debug, info};

use crate::error::Result;

/// Default number of items processed between yields.
pub const CHUNK_SIZE: usize = 50;

/// A shared cooperative cancellation flag.
///
/// Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A token that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Takes effect at the next chunk boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// True once [`cancel`](Self::cancel) has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Counts from one batch run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Items handed to the per-item function.
    pub processed: usize,
    /// Items that succeeded.
    pub succeeded: usize,
    /// Items that failed and were skipped.
    pub skipped: usize,
    /// True if the run stopped early on cancellation.
    pub cancelled: bool,
}

/// A chunked batch runner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Batch {
    chunk_size: usize,
}

impl Default for Batch {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
        }
    }
}

impl Batch {
    /// A runner with the given chunk size, clamped to at least one.
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Items processed between yields.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Run `f` over `items`, chunk by chunk.
    ///
    /// Returns the outputs of the items that succeeded, in input order, along with counts.
    pub async fn run<I, T, F>(
        &self,
        items: &[I],
        cancel: &CancelToken,
        mut f: F,
    ) -> (Vec<T>, BatchReport)
    where
        I: Debug,
        F: FnMut(&I) -> Result<T>,
    {
        let mut outputs = Vec::with_capacity(items.len());
        let mut report = BatchReport::default();
        for (n, chunk) in items.chunks(self.chunk_size).enumerate() {
            if n > 0 {
                yield_now().await;
            }
            if cancel.is_cancelled() {
                info!(processed = report.processed, "batch cancelled");
                report.cancelled = true;
                break;
            }
            for item in chunk {
                report.processed += 1;
                match f(item) {
                    Ok(out) => {
                        report.succeeded += 1;
                        outputs.push(out);
                    }
                    Err(err) => {
                        debug!(?item, %err, "skipping item");
                        report.skipped += 1;
                    }
                }
            }
        }
        (outputs, report)
    }
}

/// Yield once to whatever is polling this future.
///
/// Pending exactly once; it wakes itself so the executor polls it again straight away.
pub async fn yield_now() {
    let mut yielded = false;
    poll_fn(|cx| {
        if yielded {
            Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    })
    .await;
}
