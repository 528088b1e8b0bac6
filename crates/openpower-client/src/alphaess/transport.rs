//! Signed HTTP transport for the AlphaESS Open API

use chrono::Utc;
use openpower_core::{AlphaEssConfig, Error, Result};
use openpower_models::alphaess::ApiEnvelope;
use reqwest::{Client, Method};
use serde_json::Value;
use sha2::{Digest, Sha512};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Compute the AlphaESS request signature.
///
/// Signature = hex-encoded SHA-512 of `app_id + app_secret + timestamp`,
/// where `timestamp` is the decimal Unix-seconds string sent in the
/// `timeStamp` header of the same request.
pub(crate) fn sign_request(app_id: &str, app_secret: &str, timestamp: &str) -> String {
  let mut hasher = Sha512::new();
  hasher.update(app_id.as_bytes());
  hasher.update(app_secret.as_bytes());
  hasher.update(timestamp.as_bytes());
  hex::encode(hasher.finalize())
}

/// Validate a vendor envelope and return its payload.
///
/// `code == 200` is the only success value; a missing `code` means the
/// response is not a well-formed envelope at all.
pub(crate) fn unwrap_envelope(envelope: ApiEnvelope) -> Result<Value> {
  match envelope.code {
    None => {
      Err(Error::Protocol { code: None, message: "missing 'code' field".to_string() })
    }
    Some(200) => Ok(envelope.data.unwrap_or(Value::Null)),
    Some(code) => Err(Error::Protocol {
      code: Some(code),
      message: envelope
        .msg
        .unwrap_or_else(|| "no error message provided by API".to_string()),
    }),
  }
}

/// HTTP transport layer for making signed requests to the AlphaESS API
pub struct Transport {
  client: Client,
  base_url: String,
  app_id: String,
  app_secret: String,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &AlphaEssConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent("openpower-client/0.1.0")
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {e}")))?;

    Ok(Self {
      client,
      base_url: config.base_url.clone(),
      app_id: config.app_id.clone(),
      app_secret: config.app_secret.clone(),
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      client: Client::new(),
      base_url: "https://mock.alphaess.com/api".to_string(),
      app_id: "test_id".to_string(),
      app_secret: "test_secret".to_string(),
    }
  }

  /// Build the full URL for an API request
  fn build_url(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
    let mut url = Url::parse(&format!("{}{}", self.base_url, path))
      .map_err(|e| Error::Http(format!("Invalid base URL: {e}")))?;

    if !query.is_empty() {
      let mut query_pairs = url.query_pairs_mut();
      for (key, value) in query {
        query_pairs.append_pair(key, value);
      }
    }

    Ok(url.to_string())
  }

  /// Make a signed request to the AlphaESS API
  ///
  /// The `timeStamp` header and the signature input use the same Unix-seconds
  /// string; vendor-side verification is timestamp-bound, so the two must
  /// never diverge within one call.
  ///
  /// # Returns
  ///
  /// Returns the envelope's `data` payload verbatim on success.
  #[instrument(skip(self, query, body), fields(path = %path))]
  pub async fn request(
    &self,
    method: Method,
    path: &str,
    query: &[(&str, String)],
    body: Option<&Value>,
  ) -> Result<Value> {
    let url = self.build_url(path, query)?;
    let timestamp = Utc::now().timestamp().to_string();
    debug!("Making request to: {}", url);

    let mut request = self
      .client
      .request(method, &url)
      .header("appId", &self.app_id)
      .header("timeStamp", &timestamp)
      .header("sign", sign_request(&self.app_id, &self.app_secret, &timestamp));

    if let Some(body) = body {
      request = request.json(body);
    }

    let response =
      request.send().await.map_err(|e| Error::Http(format!("Request failed: {e}")))?;

    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {e}")))?;

    if !status.is_success() {
      return Err(Error::Transport { status: status.as_u16(), body: text });
    }

    debug!("Response body length: {} bytes", text.len());

    let envelope: ApiEnvelope = serde_json::from_str(&text)?;
    unwrap_envelope(envelope)
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url)
      .field("app_id", &self.app_id)
      .finish_non_exhaustive()
  }
}
