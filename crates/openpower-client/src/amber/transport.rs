//! Bearer-token HTTP transport for the Amber API, with rate-limit bookkeeping

use chrono::Utc;
use openpower_core::{AmberConfig, Error, Result};
use openpower_models::amber::RateLimits;
use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// Substitute `{name}` placeholders in a path template.
///
/// Substitution happens before the query string is attached, so placeholder
/// values never leak into query encoding.
pub(crate) fn expand_path(template: &str, params: &[(&str, &str)]) -> String {
  let mut path = template.to_string();
  for (name, value) in params {
    path = path.replace(&format!("{{{name}}}"), value);
  }
  path
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
  headers.get(name).and_then(|v| v.to_str().ok())
}

fn header_u32(headers: &HeaderMap, name: &str) -> Option<u32> {
  header_str(headers, name).and_then(|v| v.parse().ok())
}

/// HTTP transport layer for making bearer-authenticated requests to Amber
///
/// Keeps the last rate-limit snapshot observed from response headers. The
/// snapshot sits behind a mutex so a client shared across tasks stays sound.
pub struct Transport {
  client: Client,
  base_url: String,
  token: String,
  rate_limits: Mutex<Option<RateLimits>>,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &AmberConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent("openpower-client/0.1.0")
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {e}")))?;

    Ok(Self {
      client,
      base_url: config.base_url.clone(),
      token: config.token.clone(),
      rate_limits: Mutex::new(None),
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      client: Client::new(),
      base_url: "https://mock.amber.com.au/v1".to_string(),
      token: "test_token".to_string(),
      rate_limits: Mutex::new(None),
    }
  }

  /// Derive a transport with the same credentials and connection pool but a
  /// fresh rate-limit cell; used when scoping a client to another site.
  pub(crate) fn fork(&self) -> Self {
    Self {
      client: self.client.clone(),
      base_url: self.base_url.clone(),
      token: self.token.clone(),
      rate_limits: Mutex::new(None),
    }
  }

  /// The last rate-limit snapshot observed, if any
  pub fn rate_limits(&self) -> Option<RateLimits> {
    match self.rate_limits.lock() {
      Ok(guard) => guard.clone(),
      Err(poisoned) => poisoned.into_inner().clone(),
    }
  }

  /// Build the full URL for an API request, omitting `None`-valued query
  /// parameters entirely
  fn build_url(&self, path: &str, query: &[(&str, Option<String>)]) -> Result<String> {
    let mut url = Url::parse(&format!("{}{}", self.base_url, path))
      .map_err(|e| Error::Http(format!("Invalid base URL: {e}")))?;

    let pairs: Vec<(&str, &str)> =
      query.iter().filter_map(|(key, value)| value.as_deref().map(|v| (*key, v))).collect();

    if !pairs.is_empty() {
      let mut query_pairs = url.query_pairs_mut();
      for (key, value) in pairs {
        query_pairs.append_pair(key, value);
      }
    }

    Ok(url.to_string())
  }

  /// Overwrite the stored snapshot from response headers, when present
  ///
  /// Runs before the HTTP status is checked, so erroring calls still update
  /// the bookkeeping.
  fn capture_rate_limits(&self, headers: &HeaderMap) {
    if header_str(headers, "ratelimit-limit").is_none() {
      return;
    }

    let parsed = header_u32(headers, "ratelimit-limit").zip(
      header_u32(headers, "ratelimit-remaining").zip(header_u32(headers, "ratelimit-reset")),
    );

    let Some((limit, (remaining, reset))) = parsed else {
      warn!("Malformed rate-limit headers, keeping previous snapshot");
      return;
    };

    let snapshot = RateLimits {
      limit,
      remaining,
      reset,
      policy: header_str(headers, "ratelimit-policy").unwrap_or_default().to_string(),
      observed_at: Utc::now(),
    };

    let mut guard = match self.rate_limits.lock() {
      Ok(guard) => guard,
      Err(poisoned) => poisoned.into_inner(),
    };
    *guard = Some(snapshot);
  }

  /// Make a GET request to the Amber API
  ///
  /// # Arguments
  ///
  /// * `path` - Request path with placeholders already substituted
  /// * `query` - Query parameters; `None` values are omitted from the URL
  #[instrument(skip(self, query), fields(path = %path))]
  pub async fn get<T>(&self, path: &str, query: &[(&str, Option<String>)]) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let url = self.build_url(path, query)?;
    debug!("Making request to: {}", url);

    let response = self
      .client
      .get(&url)
      .bearer_auth(&self.token)
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {e}")))?;

    self.capture_rate_limits(response.headers());

    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {e}")))?;

    if !status.is_success() {
      return Err(Error::Transport { status: status.as_u16(), body: text });
    }

    debug!("Response body length: {} bytes", text.len());

    serde_json::from_str(&text).map_err(Error::from)
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport").field("base_url", &self.base_url).finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use reqwest::header::{HeaderName, HeaderValue};

  fn limit_headers(entries: &[(&'static str, &str)]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in entries {
      headers.insert(
        HeaderName::from_static(name),
        HeaderValue::from_str(value).unwrap(),
      );
    }
    headers
  }

  #[test]
  fn test_expand_path() {
    assert_eq!(
      expand_path("/sites/{siteId}/prices", &[("siteId", "01ABC")]),
      "/sites/01ABC/prices"
    );
    assert_eq!(
      expand_path("/state/{state}/renewables/current", &[("state", "nsw")]),
      "/state/nsw/renewables/current"
    );
  }

  #[test]
  fn test_build_url_omits_none_params() {
    let transport = Transport::new_mock();
    let url = transport
      .build_url(
        "/sites/01ABC/prices",
        &[
          ("startDate", Some("2024-06-01".to_string())),
          ("endDate", None),
          ("resolution", Some("30".to_string())),
        ],
      )
      .unwrap();

    assert_eq!(url, "https://mock.amber.com.au/v1/sites/01ABC/prices?startDate=2024-06-01&resolution=30");
  }

  #[test]
  fn test_build_url_all_none_has_no_query_string() {
    let transport = Transport::new_mock();
    let url = transport
      .build_url("/sites/01ABC/usage", &[("startDate", None), ("endDate", None)])
      .unwrap();

    assert_eq!(url, "https://mock.amber.com.au/v1/sites/01ABC/usage");
  }

  #[test]
  fn test_capture_rate_limits() {
    let transport = Transport::new_mock();
    assert!(transport.rate_limits().is_none());

    transport.capture_rate_limits(&limit_headers(&[
      ("ratelimit-limit", "100"),
      ("ratelimit-remaining", "42"),
      ("ratelimit-reset", "60"),
      ("ratelimit-policy", "10;w=60"),
    ]));

    let limits = transport.rate_limits().unwrap();
    assert_eq!(limits.limit, 100);
    assert_eq!(limits.remaining, 42);
    assert_eq!(limits.reset, 60);
    assert_eq!(limits.window(), Some(60));
    assert_eq!(limits.estimated_reset(), limits.observed_at + chrono::Duration::seconds(60));
  }

  #[test]
  fn test_capture_retains_snapshot_when_headers_absent() {
    let transport = Transport::new_mock();

    transport.capture_rate_limits(&limit_headers(&[
      ("ratelimit-limit", "100"),
      ("ratelimit-remaining", "42"),
      ("ratelimit-reset", "60"),
      ("ratelimit-policy", "10;w=60"),
    ]));
    transport.capture_rate_limits(&HeaderMap::new());

    assert_eq!(transport.rate_limits().unwrap().remaining, 42);
  }

  #[test]
  fn test_fork_gets_fresh_rate_limit_cell() {
    let transport = Transport::new_mock();
    transport.capture_rate_limits(&limit_headers(&[
      ("ratelimit-limit", "100"),
      ("ratelimit-remaining", "42"),
      ("ratelimit-reset", "60"),
      ("ratelimit-policy", "10;w=60"),
    ]));

    let forked = transport.fork();
    assert!(forked.rate_limits().is_none());
    assert!(transport.rate_limits().is_some());
  }
}
