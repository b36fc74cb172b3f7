//! # Parse Module
//!
//! Extraction of segment sizes from the size tool's output.
//!
//! The tool is expected to print Berkeley-format output, e.g.
//!
//! ```text
//!    text    data     bss     dec     hex filename
//!  123456    2048    8192  133696   20a40 fw.elf
//! ```
//!
//! Whitespace-split, the six header words occupy positions 0..=5, so the
//! text and data values land at positions 6 and 7. Headers are NOT checked.
//! If the upstream layout changes, this module is the only place to touch.

use crate::error::GateError;
use crate::types::SizeReport;

/// Zero-based token position of the text segment size.
pub const TEXT_TOKEN_INDEX: usize = 6;
/// Zero-based token position of the data segment size.
pub const DATA_TOKEN_INDEX: usize = 7;
/// Minimum number of tokens a usable output must contain.
pub const MIN_TOKENS: usize = DATA_TOKEN_INDEX + 1;

/// Parse the raw output of the size tool into a [`SizeReport`].
///
/// Fails with [`GateError::MalformedOutput`] if fewer than [`MIN_TOKENS`]
/// tokens are present or either size token is not a base-10 integer.
pub fn parse_size_output(raw: &str) -> Result<SizeReport, GateError> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() < MIN_TOKENS {
        return Err(GateError::MalformedOutput(format!(
            "expected at least {} whitespace-separated tokens, got {}",
            MIN_TOKENS,
            tokens.len()
        )));
    }

    let text = parse_token(&tokens, TEXT_TOKEN_INDEX, "text")?;
    let data = parse_token(&tokens, DATA_TOKEN_INDEX, "data")?;
    Ok(SizeReport::new(text, data))
}

fn parse_token(tokens: &[&str], index: usize, segment: &str) -> Result<u64, GateError> {
    let token = tokens.get(index).copied().unwrap_or_default();
    token.parse::<u64>().map_err(|_| {
        GateError::MalformedOutput(format!(
            "{} size token at position {} is not an integer: '{}'",
            segment, index, token
        ))
    })
}

// =============================================================================
// TESTS
// =============================================================================
