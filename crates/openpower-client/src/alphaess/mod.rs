//! AlphaESS Open API client
//!
//! Every request carries `appId`/`timeStamp`/`sign` headers; the signature is
//! a SHA-512 digest bound to the same timestamp sent in the header. Responses
//! arrive wrapped in a `{code, msg, expMsg, data}` envelope that the
//! transport validates before handing the payload back.

pub mod endpoints;
pub mod transport;

use crate::alphaess::endpoints::{
  ev_charger::EvChargerEndpoints, settings::SettingsEndpoints, system::SystemEndpoints,
};
use crate::alphaess::transport::Transport;
use openpower_core::{AlphaEssConfig, Result};
use std::sync::Arc;

/// Main AlphaESS API client
///
/// Holds the signed transport plus an optional default system serial number.
/// Endpoint methods accept a per-call serial override; calls on a client with
/// neither fail with a precondition error before any I/O.
///
/// # Examples
///
/// ```ignore
/// use openpower_client::AlphaEssClient;
/// use openpower_core::AlphaEssConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = AlphaEssConfig::from_env()?;
///     let client = AlphaEssClient::new(config)?.for_device("AL1234567890");
///
///     let summary = client.system().summary(None).await?;
///     println!("System summary: {summary}");
///
///     Ok(())
/// }
/// ```
pub struct AlphaEssClient {
  transport: Arc<Transport>,
  serial: Option<String>,
}

impl AlphaEssClient {
  /// Create a new AlphaESS API client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: AlphaEssConfig) -> Result<Self> {
    let serial = config.serial.clone();
    let transport = Arc::new(Transport::new(&config)?);

    Ok(Self { transport, serial })
  }

  /// Derive a client scoped to one system serial number
  ///
  /// Pure construction: the source client keeps its own default untouched.
  pub fn for_device(&self, serial: impl Into<String>) -> Self {
    Self { transport: Arc::clone(&self.transport), serial: Some(serial.into()) }
  }

  /// The default serial number this client is scoped to, if any
  pub fn default_serial(&self) -> Option<&str> {
    self.serial.as_deref()
  }

  /// Get access to EV charger endpoints
  pub fn ev_charger(&self) -> EvChargerEndpoints {
    EvChargerEndpoints::new(self.transport.clone(), self.serial.clone())
  }

  /// Get access to system inventory, power and binding endpoints
  pub fn system(&self) -> SystemEndpoints {
    SystemEndpoints::new(self.transport.clone(), self.serial.clone())
  }

  /// Get access to charge/discharge configuration endpoints
  pub fn settings(&self) -> SettingsEndpoints {
    SettingsEndpoints::new(self.transport.clone(), self.serial.clone())
  }
}

impl std::fmt::Debug for AlphaEssClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AlphaEssClient")
      .field("transport", &self.transport)
      .field("serial", &self.serial)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn test_client() -> AlphaEssClient {
    let config = AlphaEssConfig::default_with_credentials(
      "test_id".to_string(),
      "test_secret".to_string(),
    );
    AlphaEssClient::new(config).expect("Failed to create client")
  }

  #[test]
  fn test_client_creation() {
    let client = test_client();
    assert_eq!(client.default_serial(), None);
  }

  #[test]
  fn test_for_device_does_not_mutate_source() {
    let client = test_client();
    let scoped = client.for_device("AL1234567890");

    assert_eq!(scoped.default_serial(), Some("AL1234567890"));
    assert_eq!(client.default_serial(), None);
  }

  #[test]
  fn test_for_device_replaces_existing_scope() {
    let first = test_client().for_device("ABC123");
    let second = first.for_device("DEF456");

    assert_eq!(first.default_serial(), Some("ABC123"));
    assert_eq!(second.default_serial(), Some("DEF456"));
  }
}
