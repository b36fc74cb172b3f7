//! # Reporter Module
//!
//! The capability seam between the gate and whatever measures the artifact.
//!
//! The app layer implements [`SizeReporter`] by spawning the size tool.
//! [`FixedReporter`] returns canned text and is used wherever a real
//! subprocess is not wanted.

use crate::error::GateError;
use std::path::Path;

/// Something that can produce the raw size-tool output for an artifact.
pub trait SizeReporter {
    /// Measure `artifact` and return the tool's captured stdout.
    fn measure(&self, artifact: &Path) -> Result<String, GateError>;
}

/// A reporter with a predetermined answer.
#[derive(Debug, Clone)]
pub struct FixedReporter {
    response: Result<String, GateError>,
}

impl FixedReporter {
    /// Always return `output`.
    pub fn output(output: impl Into<String>) -> Self {
        Self {
            response: Ok(output.into()),
        }
    }

    /// Always fail with `error`.
    pub fn failing(error: GateError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl SizeReporter for FixedReporter {
    fn measure(&self, _artifact: &Path) -> Result<String, GateError> {
        self.response.clone()
    }
}
