//! # SizeGate Library
//!
//! This library exposes the SizeGate modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod command;
pub mod output;

// Re-export sizegate_core for convenience
pub use sizegate_core;
