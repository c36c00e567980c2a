//! Error types for timeline inspection.
//!
//! Merge operations never fail: a no-op is reported as `None` and a broken
//! invariant is fatal. These errors back the defensive accessors and the
//! invariant checker.

use thiserror::Error;

/// Errors reported by the defensive timeline accessors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    /// The timeline holds no elements.
    #[error("timeline is empty")]
    Empty,

    /// A gap sits where an event is required.
    #[error("gap at boundary index {0}")]
    GapAtBoundary(usize),

    /// Two events are not in strictly descending id order.
    #[error("events out of order at index {index}: {newer} is not newer than {older}")]
    OutOfOrder {
        index: usize,
        newer: String,
        older: String,
    },

    /// A gap boundary is inconsistent with its neighbouring events.
    #[error("gap at index {index} with boundary {boundary} does not fit its neighbours")]
    GapOutOfBounds { index: usize, boundary: String },

    /// Two gaps are adjacent with no event in between.
    #[error("adjacent gaps at index {0}")]
    AdjacentGaps(usize),
}
