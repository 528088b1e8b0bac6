//! Configuration management for the AlphaESS and Amber clients

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

fn timeout_from_env() -> Result<u64> {
  env::var("OPENPOWER_TIMEOUT_SECS")
    .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
    .parse()
    .map_err(|_| Error::Config("Invalid OPENPOWER_TIMEOUT_SECS".to_string()))
}

/// Configuration for the AlphaESS client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlphaEssConfig {
  /// AlphaESS developer application id
  pub app_id: String,

  /// AlphaESS developer application secret
  pub app_secret: String,

  /// Default inverter serial number, if any
  pub serial: Option<String>,

  /// Base URL for the AlphaESS Open API
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl AlphaEssConfig {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let app_id = env::var("ALPHAESS_APP_ID")
      .map_err(|_| Error::Config("ALPHAESS_APP_ID not set".to_string()))?;

    let app_secret = env::var("ALPHAESS_APP_SECRET")
      .map_err(|_| Error::Config("ALPHAESS_APP_SECRET not set".to_string()))?;

    let serial = env::var("ALPHAESS_SERIAL").ok();

    let base_url =
      env::var("ALPHAESS_BASE_URL").unwrap_or_else(|_| crate::ALPHAESS_BASE_URL.to_string());

    Ok(AlphaEssConfig { app_id, app_secret, serial, base_url, timeout_secs: timeout_from_env()? })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_credentials(app_id: String, app_secret: String) -> Self {
    AlphaEssConfig {
      app_id,
      app_secret,
      serial: None,
      base_url: crate::ALPHAESS_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }
}

/// Configuration for the Amber client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AmberConfig {
  /// Amber personal API token
  pub token: String,

  /// Default site identifier, if any
  pub site: Option<String>,

  /// Base URL for the Amber API
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl AmberConfig {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let token =
      env::var("AMBER_TOKEN").map_err(|_| Error::Config("AMBER_TOKEN not set".to_string()))?;

    let site = env::var("AMBER_SITE").ok();

    let base_url =
      env::var("AMBER_BASE_URL").unwrap_or_else(|_| crate::AMBER_BASE_URL.to_string());

    Ok(AmberConfig { token, site, base_url, timeout_secs: timeout_from_env()? })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_token(token: String) -> Self {
    AmberConfig {
      token,
      site: None,
      base_url: crate::AMBER_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }
}
