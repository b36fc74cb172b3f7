//! SizeGate binary entry point.
//!
//! Exit codes: 0 within limit or advisory, 1 fatal over-limit, 2 bad
//! arguments, 3 size tool failure, 4 malformed tool output, 5 write failure.

use clap::Parser;
use sizegate::cli::{Cli, parse_error_exit_code, run};
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_error_exit_code(&e));
        }
    };

    // Logs go to stderr; stdout carries the report build scripts grep.
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    std::process::exit(run(&cli));
}
