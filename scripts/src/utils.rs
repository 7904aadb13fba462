//! Utilities for the deployment scripts.

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::{
    constants::{DEFAULT_LOG_FILTER, HEX_PREFIX, NUM_HEX_CHARS_ADDRESS},
    errors::ScriptError,
};

/// Check that `address` is a 20-byte hex string, optionally `0x`-prefixed.
///
/// Returns the reason for rejection on failure.
pub fn check_address(address: &str) -> Result<(), String> {
    let digits = address.strip_prefix(HEX_PREFIX).unwrap_or(address);

    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(format!("invalid hex character `{}`", c));
    }

    if digits.len() != NUM_HEX_CHARS_ADDRESS {
        return Err(format!(
            "expected {} hex characters, found {}",
            NUM_HEX_CHARS_ADDRESS,
            digits.len()
        ));
    }

    Ok(())
}

/// Install the log subscriber, filtered by `RUST_LOG` when set
pub fn setup_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print `value` to stdout as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<(), ScriptError> {
    let out = serde_json::to_string_pretty(value).map_err(|e| ScriptError::Serde(e.to_string()))?;
    println!("{}", out);
    Ok(())
}
