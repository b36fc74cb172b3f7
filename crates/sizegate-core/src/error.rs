//! # Error Module
//!
//! Failures that stop a gate run before any size comparison happens.
//!
//! Exceeding the limit is NOT an error here; it is an [`Outcome`](crate::Outcome).

use crate::{EXIT_MALFORMED_OUTPUT, EXIT_TOOL_INVOCATION};
use serde::Serialize;
use thiserror::Error;

/// Errors from a gate run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// The size tool is missing, not executable, timed out or exited abnormally.
    #[error("failed to run size tool '{tool}': {reason}")]
    ToolInvocation {
        /// The tool as given on the command line.
        tool: String,
        /// What went wrong.
        reason: String,
    },

    /// The size tool's output does not have the expected shape.
    #[error("malformed size tool output: {0}")]
    MalformedOutput(String),
}

/// Stable identifier for each error variant, used in structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateErrorKind {
    ToolInvocation,
    MalformedOutput,
}

impl GateError {
    /// Shorthand for a [`GateError::ToolInvocation`].
    pub fn tool_invocation(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ToolInvocation {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// The variant without its payload.
    #[must_use]
    pub fn kind(&self) -> GateErrorKind {
        match self {
            Self::ToolInvocation { .. } => GateErrorKind::ToolInvocation,
            Self::MalformedOutput(_) => GateErrorKind::MalformedOutput,
        }
    }

    /// Process exit code for this error.
    ///
    /// Always non-zero and never equal to the fatal over-limit code.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            GateErrorKind::ToolInvocation => EXIT_TOOL_INVOCATION,
            GateErrorKind::MalformedOutput => EXIT_MALFORMED_OUTPUT,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EXIT_OK, EXIT_OVER_LIMIT};

    #[test]
    fn exit_codes_are_distinct_from_outcomes() {
        let errors = [
            GateError::tool_invocation("size", "not found"),
            GateError::MalformedOutput("3 tokens".to_string()),
        ];
        for err in &errors {
            assert_ne!(err.exit_code(), EXIT_OK);
            assert_ne!(err.exit_code(), EXIT_OVER_LIMIT);
        }
        assert_ne!(errors[0].exit_code(), errors[1].exit_code());
    }

    #[test]
    fn display_names_the_tool() {
        let err = GateError::tool_invocation("arm-none-eabi-size", "exit status: 1");
        assert_eq!(
            err.to_string(),
            "failed to run size tool 'arm-none-eabi-size': exit status: 1"
        );
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            GateError::tool_invocation("size", "x").kind(),
            GateErrorKind::ToolInvocation
        );
        assert_eq!(
            GateError::MalformedOutput(String::new()).kind(),
            GateErrorKind::MalformedOutput
        );
    }
}
