//! # Gate Module
//!
//! One deterministic pass: measure, parse, sum, compare. No retries.

use crate::error::GateError;
use crate::parse::parse_size_output;
use crate::reporter::SizeReporter;
use crate::types::{GateConfig, GateResult, Outcome};

/// Classify `total_size` against `max_size`.
///
/// The comparison is strict: a total equal to the maximum is within limit.
#[must_use]
pub fn evaluate(total_size: u64, max_size: u64, fail_on_size_too_big: bool) -> Outcome {
    if total_size <= max_size {
        Outcome::WithinLimit
    } else if fail_on_size_too_big {
        Outcome::OverLimitFatal
    } else {
        Outcome::OverLimitWarning
    }
}

/// Run the gate against `config.artifact` using `reporter`.
///
/// Errors from the reporter propagate unchanged; output that does not
/// parse is a [`GateError::MalformedOutput`].
pub fn run_gate<R: SizeReporter + ?Sized>(
    reporter: &R,
    config: &GateConfig,
) -> Result<GateResult, GateError> {
    let raw = reporter.measure(&config.artifact)?;
    let report = parse_size_output(&raw)?;
    let total_size = report.total()?;

    Ok(GateResult {
        total_size,
        max_size: config.max_size,
        outcome: evaluate(total_size, config.max_size, config.fail_on_size_too_big),
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::FixedReporter;
    use proptest::prelude::*;

    const TOKENS: &str = "x x x x x x 100 50";

    fn config(max_size: u64, fatal: bool) -> GateConfig {
        GateConfig::new("size", "fw.elf", max_size, fatal)
    }

    #[test]
    fn within_limit() {
        let reporter = FixedReporter::output(TOKENS);
        let result = run_gate(&reporter, &config(200, false)).ok();

        assert_eq!(
            result,
            Some(GateResult {
                total_size: 150,
                max_size: 200,
                outcome: Outcome::WithinLimit,
            })
        );
    }

    #[test]
    fn over_limit_fatal() {
        let reporter = FixedReporter::output(TOKENS);
        let result = run_gate(&reporter, &config(100, true));

        assert!(matches!(
            result,
            Ok(GateResult {
                total_size: 150,
                outcome: Outcome::OverLimitFatal,
                ..
            })
        ));
    }

    #[test]
    fn over_limit_warning() {
        let reporter = FixedReporter::output(TOKENS);
        let result = run_gate(&reporter, &config(100, false));

        assert!(matches!(
            result,
            Ok(GateResult {
                total_size: 150,
                outcome: Outcome::OverLimitWarning,
                ..
            })
        ));
    }

    #[test]
    fn boundary_is_within_limit() {
        let reporter = FixedReporter::output(TOKENS);
        let result = run_gate(&reporter, &config(150, true));
        assert_eq!(result.map(|r| r.outcome), Ok(Outcome::WithinLimit));
    }

    #[test]
    fn short_output_is_malformed() {
        let reporter = FixedReporter::output("10 20 30");
        let result = run_gate(&reporter, &config(100, true));
        assert!(matches!(result, Err(GateError::MalformedOutput(_))));
    }

    #[test]
    fn reporter_error_propagates() {
        let err = GateError::tool_invocation("size", "No such file or directory");
        let reporter = FixedReporter::failing(err.clone());
        assert_eq!(run_gate(&reporter, &config(100, true)), Err(err));
    }

    #[test]
    fn zero_limit_allows_empty_artifact() {
        let reporter = FixedReporter::output("x x x x x x 0 0");
        let result = run_gate(&reporter, &config(0, true));
        assert_eq!(result.map(|r| r.outcome), Ok(Outcome::WithinLimit));
    }

    proptest! {
        #[test]
        fn outcome_follows_comparison(
            text in 0u64..1_000_000,
            data in 0u64..1_000_000,
            max in 0u64..2_000_000,
            fatal in any::<bool>(),
        ) {
            let raw = format!("text data bss dec hex filename {} {} 0 0 0 fw.elf", text, data);
            let reporter = FixedReporter::output(raw);
            let result = run_gate(&reporter, &config(max, fatal));
            let result = result.map_err(|e| TestCaseError::fail(e.to_string()))?;

            prop_assert_eq!(result.total_size, text + data);
            let expected = match (text + data > max, fatal) {
                (false, _) => Outcome::WithinLimit,
                (true, true) => Outcome::OverLimitFatal,
                (true, false) => Outcome::OverLimitWarning,
            };
            prop_assert_eq!(result.outcome, expected);
        }

        #[test]
        fn repeated_runs_are_identical(
            text in 0u64..1_000_000,
            data in 0u64..1_000_000,
            max in 0u64..2_000_000,
            fatal in any::<bool>(),
        ) {
            let reporter = FixedReporter::output(format!("a b c d e f {} {}", text, data));
            let cfg = config(max, fatal);
            prop_assert_eq!(run_gate(&reporter, &cfg), run_gate(&reporter, &cfg));
        }
    }
}
