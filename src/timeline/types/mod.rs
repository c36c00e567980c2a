//! Type definitions for the timeline.
//!
//! This module contains the event contract, the bundled feed post event and
//! the error type used by the defensive accessors.

pub mod error;
pub mod event;
pub mod post;

pub use error::TimelineError;
pub use event::TimelineEvent;
pub use post::FeedPost;
