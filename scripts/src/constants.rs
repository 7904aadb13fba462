//! Constants used in the deploy scripts

/// The embedded table of Microsponsors deployments
///
/// Each entry is one historical deployment of the `Microsponsors` contract,
/// in the order the deployments were authored.
pub const DEPLOYMENTS_JSON: &str = include_str!("../deployments/microsponsors.json");

/// The label of the most recent deployment in the deployments table
pub const LATEST_ENVIRONMENT: &str = "latest";

/// The name of the environment variable from which the target environment
/// label may be read
pub const ENVIRONMENT_ENV_VAR: &str = "MICROSPONSORS_ENV";

/// The number of bytes in an Ethereum address
pub const NUM_BYTES_ADDRESS: usize = 20;

/// The number of hex characters in an Ethereum address, excluding the prefix
pub const NUM_HEX_CHARS_ADDRESS: usize = NUM_BYTES_ADDRESS * 2;

/// The optional prefix of a hex-encoded address
pub const HEX_PREFIX: &str = "0x";

/// The conventional maximum length of a token symbol.
///
/// Longer symbols are logged, not rejected.
pub const MAX_ADVISORY_SYMBOL_LEN: usize = 10;

/// The log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
