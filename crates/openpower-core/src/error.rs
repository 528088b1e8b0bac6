use thiserror::Error;

/// The main error type for openpower-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Malformed caller input, raised before any network call
  #[error("Precondition failed: {0}")]
  Precondition(String),

  /// The vendor envelope is missing its status code or reports a non-success code
  #[error("Invalid API response ({message})")]
  Protocol {
    /// Vendor status code, when the envelope carried one
    code: Option<i64>,
    /// Vendor-supplied message, or a placeholder when absent
    message: String,
  },

  /// Non-2xx HTTP status from the vendor
  #[error("HTTP {status}: {body}")]
  Transport {
    /// HTTP status code
    status: u16,
    /// Raw response body
    body: String,
  },

  /// Network-level or request-building failure
  #[error("HTTP error: {0}")]
  Http(String),

  /// Serialization/Deserialization error
  #[error("Serialization error")]
  Serde(#[from] serde_json::Error),
}

/// Result type alias for openpower-* crates
pub type Result<T> = std::result::Result<T, Error>;
