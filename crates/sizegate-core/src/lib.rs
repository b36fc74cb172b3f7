//! # SizeGate Core
//!
//! Deterministic logic for gating a build on the size of its artifact.
//!
//! The flow is a single pass:
//! 1. A [`SizeReporter`] produces the raw text of the size tool
//! 2. [`parse_size_output`] pulls the text and data segments out of it
//! 3. [`evaluate`] classifies the total against the configured maximum
//! 4. [`render_lines`] produces the human-readable report
//!
//! Process spawning lives in the app layer (apps/sizegate). This crate
//! never touches the filesystem or the environment.

mod error;
mod gate;
mod parse;
mod report;
mod reporter;
mod types;

pub use error::{GateError, GateErrorKind};
pub use gate::{evaluate, run_gate};
pub use parse::{DATA_TOKEN_INDEX, MIN_TOKENS, TEXT_TOKEN_INDEX, parse_size_output};
pub use report::{FATAL_SENTINEL, WARNING_SENTINEL, render_lines};
pub use reporter::{FixedReporter, SizeReporter};
pub use types::{GateConfig, GateResult, Outcome, SizeReport};

/// Exit code for a within-limit or advisory over-limit run.
pub const EXIT_OK: i32 = 0;
/// Exit code for a fatal over-limit run.
pub const EXIT_OVER_LIMIT: i32 = 1;
/// Exit code for invalid command-line arguments.
pub const EXIT_USAGE: i32 = 2;
/// Exit code when the size tool could not be run or failed.
pub const EXIT_TOOL_INVOCATION: i32 = 3;
/// Exit code when the size tool's output could not be parsed.
pub const EXIT_MALFORMED_OUTPUT: i32 = 4;
/// Exit code when the report could not be written.
pub const EXIT_IO: i32 = 5;
