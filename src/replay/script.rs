//! Replay script format.
//!
//! A script is a JSON document listing the batches a feed client fetched, in
//! the order they were merged into the timeline.

use serde::{Deserialize, Serialize};

use crate::timeline::FeedPost;

/// A recorded sequence of timeline merges.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ReplayScript {
    pub steps: Vec<ReplayStep>,
}

/// A single merge, tagged by operation.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ReplayStep {
    pub op: StepOp,
    #[serde(default)]
    pub events: Vec<FeedPost>,
    #[serde(default)]
    pub sort: bool,
    /// Boundary of the gap to expand, only used by `expand`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_id: Option<u64>,
}

/// The timeline operation a step performs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepOp {
    Reset,
    Prepend,
    Append,
    Expand,
}

impl StepOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepOp::Reset => "reset",
            StepOp::Prepend => "prepend",
            StepOp::Append => "append",
            StepOp::Expand => "expand",
        }
    }
}

impl std::fmt::Display for StepOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ReplayScript {
    /// Parses a script from its JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = ReplayScript::from_json(
            r#"{
                "steps": [
                    {"op": "reset", "events": [{"id": 10}, {"id": 9}]},
                    {"op": "prepend", "events": [{"id": 20}], "sort": true},
                    {"op": "expand", "events": [{"id": 15}], "max_id": 20}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(script.steps.len(), 3);
        assert_eq!(script.steps[0].op, StepOp::Reset);
        assert_eq!(script.steps[0].events.len(), 2);
        assert!(!script.steps[0].sort);
        assert!(script.steps[1].sort);
        assert_eq!(script.steps[2].max_id, Some(20));
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        let result = ReplayScript::from_json(r#"{"steps": [{"op": "truncate"}]}"#);
        assert!(result.is_err());
    }
}
