//! Timeline model implementation module.
//!
//! This module contains the gap-aware timeline engine together with its
//! element, diff and event contract types.

pub mod diff;
pub mod element;
pub mod engine;
pub mod types;

// Re-export the main public API
pub use diff::{Changes, Diff};
pub use element::Element;
pub use engine::Timeline;
pub use types::{FeedPost, TimelineError, TimelineEvent};
