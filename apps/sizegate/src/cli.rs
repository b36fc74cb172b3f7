//! # CLI Module
//!
//! Command-line surface of the size gate.
//!
//! Argument order matches what existing build scripts pass:
//! `<size_tool> <artifact> <max_size> <fail_on_size_too_big>`.

use crate::command::CommandReporter;
use crate::output::{ErrorJson, ResultJson};
use clap::Parser;
use sizegate_core::{
    EXIT_IO, EXIT_OK, EXIT_USAGE, GateConfig, GateError, GateResult, SizeReporter, render_lines,
    run_gate,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Build-size gate: fail or warn when an artifact's text + data exceeds a limit.
#[derive(Parser, Debug)]
#[command(name = "sizegate", version, about)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Size-reporting executable (e.g. arm-none-eabi-size)
    pub size_tool: PathBuf,

    /// Built artifact to measure
    pub artifact: PathBuf,

    /// Maximum permitted text + data size in bytes
    pub max_size: u64,

    /// Values greater than 0 make an oversized artifact fatal
    pub fail_on_size_too_big: i64,

    /// Print a single JSON object instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Kill the size tool after this many seconds (at least 1)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Build the gate configuration.
    ///
    /// This is the only place the integer fatality flag becomes a boolean.
    pub fn config(&self) -> GateConfig {
        let config = GateConfig::new(
            &self.size_tool,
            &self.artifact,
            self.max_size,
            self.fail_on_size_too_big > 0,
        );
        match self.timeout {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

/// Exit code for a failed argument parse.
///
/// `--help` and `--version` surface as clap errors too, but are not failures.
pub fn parse_error_exit_code(error: &clap::Error) -> i32 {
    if error.use_stderr() { EXIT_USAGE } else { EXIT_OK }
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Run the gate and write its report.
///
/// The report goes to `out`. In text mode, gate errors go to `err`; in JSON
/// mode everything goes to `out`. Returns the process exit code.
pub fn cmd_check<R, O, E>(
    reporter: &R,
    config: &GateConfig,
    json: bool,
    out: &mut O,
    err: &mut E,
) -> io::Result<i32>
where
    R: SizeReporter + ?Sized,
    O: Write,
    E: Write,
{
    tracing::info!(
        tool = %config.size_tool.display(),
        artifact = %config.artifact.display(),
        max_size = config.max_size,
        fatal = config.fail_on_size_too_big,
        "Checking artifact size"
    );

    match run_gate(reporter, config) {
        Ok(result) => {
            tracing::info!(
                total_size = result.total_size,
                outcome = ?result.outcome,
                "Size gate finished"
            );
            write_result(&result, json, out)?;
            Ok(result.exit_code())
        }
        Err(e) => {
            tracing::debug!(error = %e, "Size gate failed");
            write_error(&e, json, out, err)?;
            Ok(e.exit_code())
        }
    }
}

fn write_result<O: Write>(result: &GateResult, json: bool, out: &mut O) -> io::Result<()> {
    if json {
        let body = serde_json::to_string(&ResultJson::from(result)).map_err(io::Error::other)?;
        writeln!(out, "{}", body)?;
    } else {
        for line in render_lines(result) {
            writeln!(out, "{}", line)?;
        }
    }
    out.flush()
}

fn write_error<O: Write, E: Write>(
    error: &GateError,
    json: bool,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    if json {
        let body = serde_json::to_string(&ErrorJson::from(error)).map_err(io::Error::other)?;
        writeln!(out, "{}", body)?;
        out.flush()
    } else {
        writeln!(err, "error: {}", error)?;
        err.flush()
    }
}

/// Run against the real size tool and the process's standard streams.
pub fn run(cli: &Cli) -> i32 {
    let config = cli.config();
    let reporter = CommandReporter::from_config(&config);
    let stdout = io::stdout();
    let stderr = io::stderr();

    let result = cmd_check(&reporter, &config, cli.json, &mut stdout.lock(), &mut stderr.lock());
    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = %e, "Failed to write report");
            let _ = writeln!(io::stderr(), "error: failed to write report: {}", e);
            EXIT_IO
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
