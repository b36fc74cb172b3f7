//! # Types Module
//!
//! Transient values built once per gate invocation.

use crate::error::GateError;
use crate::{EXIT_OK, EXIT_OVER_LIMIT};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Segment sizes extracted from the size tool's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    /// Code (text) segment size in bytes.
    pub text: u64,
    /// Initialized data segment size in bytes.
    pub data: u64,
}

impl SizeReport {
    /// Create a new report.
    #[must_use]
    pub fn new(text: u64, data: u64) -> Self {
        Self { text, data }
    }

    /// Total size compared against the limit: text + data.
    ///
    /// Fails with [`GateError::MalformedOutput`] if the sum does not fit in a u64.
    pub fn total(&self) -> Result<u64, GateError> {
        self.text.checked_add(self.data).ok_or_else(|| {
            GateError::MalformedOutput(format!(
                "text size {} plus data size {} overflows",
                self.text, self.data
            ))
        })
    }
}

/// Everything the gate needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    /// Path to the size-reporting executable.
    pub size_tool: PathBuf,
    /// Path to the built artifact, passed through opaquely.
    pub artifact: PathBuf,
    /// Maximum permitted total size.
    pub max_size: u64,
    /// Whether exceeding `max_size` is fatal or advisory.
    pub fail_on_size_too_big: bool,
    /// Upper bound on the size tool's run time. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl GateConfig {
    /// Create a config with no timeout.
    pub fn new(
        size_tool: impl Into<PathBuf>,
        artifact: impl Into<PathBuf>,
        max_size: u64,
        fail_on_size_too_big: bool,
    ) -> Self {
        Self {
            size_tool: size_tool.into(),
            artifact: artifact.into(),
            max_size,
            fail_on_size_too_big,
            timeout: None,
        }
    }

    /// Set a timeout for the size tool.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Classification of a total against the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// `total <= max`.
    WithinLimit,
    /// `total > max`, advisory only.
    OverLimitWarning,
    /// `total > max`, blocks the build.
    OverLimitFatal,
}

impl Outcome {
    /// Process exit code for this outcome.
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::WithinLimit | Self::OverLimitWarning => EXIT_OK,
            Self::OverLimitFatal => EXIT_OVER_LIMIT,
        }
    }
}

/// Result of a completed gate run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateResult {
    /// Sum of the text and data segments.
    pub total_size: u64,
    /// The limit it was compared against.
    pub max_size: u64,
    /// How the comparison came out.
    pub outcome: Outcome,
}

impl GateResult {
    /// Process exit code for this result.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.outcome.exit_code()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_segments() {
        let report = SizeReport::new(100, 50);
        assert_eq!(report.total().ok(), Some(150));
    }

    #[test]
    fn total_overflow_is_malformed() {
        let report = SizeReport::new(u64::MAX, 1);
        assert!(matches!(report.total(), Err(GateError::MalformedOutput(_))));
    }

    #[test]
    fn outcome_exit_codes() {
        assert_eq!(Outcome::WithinLimit.exit_code(), 0);
        assert_eq!(Outcome::OverLimitWarning.exit_code(), 0);
        assert_eq!(Outcome::OverLimitFatal.exit_code(), 1);
    }

    #[test]
    fn config_timeout_defaults_to_none() {
        let config = GateConfig::new("size", "fw.elf", 1024, true);
        assert!(config.timeout.is_none());

        let config = config.with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
