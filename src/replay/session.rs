//! Replay session driving a timeline from a script.
//!
//! This module applies recorded merge steps to a `Timeline<FeedPost>`, checks
//! the timeline invariants after every step and reports what each merge did.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::replay::script::{ReplayScript, ReplayStep, StepOp};
use crate::timeline::{Diff, FeedPost, Timeline, TimelineError};

/// Errors raised while replaying a script.
#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid script: {0}")]
    Json(#[from] serde_json::Error),

    #[error("step {step}: expand requires max_id")]
    MissingMaxId { step: usize },

    #[error("{count} steps left the timeline malformed")]
    Malformed { count: usize },

    #[error("step {step}: {source}")]
    Invariant {
        step: usize,
        #[source]
        source: TimelineError,
    },
}

/// What a single step did to the timeline.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StepReport {
    pub step: usize,
    pub op: StepOp,
    /// `None` when the step left the timeline untouched
    pub diff: Option<Diff>,
    pub elements: usize,
    pub gaps: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<String>,
}

/// Replay session owning the timeline under test
pub struct ReplaySession {
    timeline: Timeline<FeedPost>,
    fail_fast: bool,
    steps_applied: usize,
}

impl ReplaySession {
    /// Create a new session over an empty timeline
    pub fn new(fail_fast: bool) -> Self {
        Self {
            timeline: Timeline::new(),
            fail_fast,
            steps_applied: 0,
        }
    }

    /// The timeline as left by the steps applied so far
    pub fn timeline(&self) -> &Timeline<FeedPost> {
        &self.timeline
    }

    /// Apply every step of a script in order
    pub fn run(&mut self, script: ReplayScript) -> Result<Vec<StepReport>, ReplayError> {
        info!("Replaying {} steps", script.steps.len());

        let mut reports = Vec::with_capacity(script.steps.len());
        for step in script.steps {
            reports.push(self.apply_step(step)?);
        }

        info!(
            "Replay finished with {} elements and {} gaps",
            self.timeline.number_of_elements(),
            self.timeline.gaps().count()
        );
        Ok(reports)
    }

    /// Apply a single step and check invariants afterwards
    pub fn apply_step(&mut self, step: ReplayStep) -> Result<StepReport, ReplayError> {
        let index = self.steps_applied;
        self.steps_applied += 1;

        let batch = step.events.len();
        let diff = match step.op {
            StepOp::Reset => Some(self.timeline.reset(step.events, step.sort)),
            StepOp::Prepend => self.timeline.prepend(step.events, step.sort),
            StepOp::Append => self.timeline.append(step.events, step.sort),
            StepOp::Expand => {
                let Some(max_id) = step.max_id else {
                    return Err(ReplayError::MissingMaxId { step: index });
                };
                self.timeline.expand(step.events, max_id, step.sort)
            }
        };

        match &diff {
            Some(diff) => info!("Step {} {} ({} events): {:?}", index, step.op, batch, diff),
            None => info!("Step {} {} ({} events): no change", index, step.op, batch),
        }

        let violation = match self.timeline.check_invariants() {
            Ok(()) => None,
            Err(source) if self.fail_fast => {
                return Err(ReplayError::Invariant {
                    step: index,
                    source,
                });
            }
            Err(source) => {
                warn!("Step {} left the timeline malformed: {}", index, source);
                Some(source.to_string())
            }
        };

        Ok(StepReport {
            step: index,
            op: step.op,
            diff,
            elements: self.timeline.number_of_elements(),
            gaps: self.timeline.gaps().count(),
            violation,
        })
    }
}

/// Fails if any replayed step left the timeline malformed
pub fn ensure_well_formed(reports: &[StepReport]) -> Result<(), ReplayError> {
    let count = reports.iter().filter(|r| r.violation.is_some()).count();
    if count > 0 {
        warn!("{} steps left the timeline malformed", count);
        return Err(ReplayError::Malformed { count });
    }
    Ok(())
}
