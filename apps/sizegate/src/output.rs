//! Structured (JSON) rendering of gate results and errors.

use serde::Serialize;
use sizegate_core::{GateError, GateErrorKind, GateResult, Outcome};

/// JSON body for a completed run.
#[derive(Debug, Serialize)]
pub struct ResultJson {
    pub total_size: u64,
    pub max_size: u64,
    pub outcome: Outcome,
    pub exit_code: i32,
}

impl From<&GateResult> for ResultJson {
    fn from(result: &GateResult) -> Self {
        Self {
            total_size: result.total_size,
            max_size: result.max_size,
            outcome: result.outcome,
            exit_code: result.exit_code(),
        }
    }
}

/// JSON body for a run that failed before comparison.
#[derive(Debug, Serialize)]
pub struct ErrorJson {
    pub error: String,
    pub kind: GateErrorKind,
    pub exit_code: i32,
}

impl From<&GateError> for ErrorJson {
    fn from(err: &GateError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind(),
            exit_code: err.exit_code(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
