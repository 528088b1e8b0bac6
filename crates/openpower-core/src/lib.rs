pub mod config;
pub mod error;

pub use config::{AlphaEssConfig, AmberConfig};
pub use error::{Error, Result};

/// Base URL for the AlphaESS Open API
pub const ALPHAESS_BASE_URL: &str = "https://openapi.alphaess.com/api";

/// Base URL for the Amber API
pub const AMBER_BASE_URL: &str = "https://api.amber.com.au/v1";

/// Per-request timeout ceiling in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
