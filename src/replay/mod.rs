//! Script replay for the timeline engine.
//!
//! This module contains the replay script format and the session that applies
//! a script to a timeline, used by the `timeline-gap` binary.

pub mod script;
pub mod session;

// Re-export main replay functionality
pub use script::{ReplayScript, ReplayStep, StepOp};
pub use session::{ReplayError, ReplaySession, StepReport, ensure_well_formed};
