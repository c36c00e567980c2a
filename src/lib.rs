//! # Timeline Gap - gap-aware event timeline
//!
//! An in-memory model for infinite-scroll timelines such as social feeds. Events
//! are kept newest first, and known-missing ranges are marked with explicit gaps
//! so a client can fetch them later instead of reloading everything.
//!
//! ## Features
//!
//! - **Ordered**: events are always in strictly descending id order
//! - **Gap-aware**: prepending a batch that does not touch the head opens a gap
//! - **Incremental**: every merge reports the deleted, inserted and updated rows
//! - **Identity-based**: duplicates are detected by id only, the existing copy wins
//!
//! ## Example
//!
//! ```rust
//! use timeline_gap::{Changes, Diff, Element, Timeline};
//!
//! let mut timeline = Timeline::new();
//! assert_eq!(timeline.reset([10u64, 9, 8, 7], false), Diff::Reload);
//!
//! let diff = timeline.prepend([20u64, 19, 18, 17], false);
//! assert_eq!(diff, Some(Diff::Update(Changes::insertions(0..=4))));
//! assert_eq!(timeline.elements()[4], Element::Gap(17));
//! assert_eq!(timeline.max_id(), 20);
//! ```
//!
//! Diff indices must be applied delete, then insert, then update; see
//! [`Changes::apply`].

pub mod replay;
pub mod timeline;

// Re-export the main public API from the timeline module
pub use timeline::{Changes, Diff, Element, FeedPost, Timeline, TimelineError, TimelineEvent};
