//! # Report Module
//!
//! Human-readable report lines for a gate result.
//!
//! Enclosing build scripts grep these lines, so the wording and the
//! sentinels are a compatibility contract. Do not reword them.

use crate::types::{GateResult, Outcome};

/// Marks a fatal over-limit line, at both start and end.
pub const FATAL_SENTINEL: &str = "!FATAL ERROR!";
/// Prefixes each advisory over-limit line.
pub const WARNING_SENTINEL: &str = "!WARNING!";

/// Render the report for `result`, one entry per output line.
///
/// The first line is always `Total size is <total>`; sentinel lines follow
/// only when the limit was exceeded.
#[must_use]
pub fn render_lines(result: &GateResult) -> Vec<String> {
    let mut lines = vec![format!("Total size is {}", result.total_size)];

    match result.outcome {
        Outcome::WithinLimit => {}
        Outcome::OverLimitFatal => lines.push(format!(
            "{FATAL_SENTINEL} Firmware size is too big for updating over the mesh. \
             Max Size is {} but {} was used{FATAL_SENTINEL}",
            result.max_size, result.total_size
        )),
        Outcome::OverLimitWarning => {
            lines.push(format!(
                "{WARNING_SENTINEL} Firmware will be too big for updating over the mesh."
            ));
            lines.push(format!(
                "{WARNING_SENTINEL} To solve this, undef some things in your featureset."
            ));
        }
    }

    lines
}

// =============================================================================
// TESTS
// =============================================================================
