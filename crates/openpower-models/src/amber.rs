//! Amber rate-limit snapshot and grid-region enumeration

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Last-observed rate-limit quota reported by Amber via response headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimits {
  /// Requests allowed per window
  pub limit: u32,

  /// Requests remaining in the current window
  pub remaining: u32,

  /// Seconds until the current window resets
  pub reset: u32,

  /// Raw policy string, e.g. `"50;w=300"`
  pub policy: String,

  /// When this snapshot was taken
  pub observed_at: DateTime<Utc>,
}

impl RateLimits {
  /// Estimated instant at which the current window resets
  pub fn estimated_reset(&self) -> DateTime<Utc> {
    self.observed_at + Duration::seconds(i64::from(self.reset))
  }

  /// Window size in seconds, parsed from the `w=<seconds>` policy suffix
  pub fn window(&self) -> Option<u32> {
    self.policy.split_once("w=").and_then(|(_, w)| w.parse().ok())
  }
}

/// Australian grid region recognised by the Amber renewables endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
  /// New South Wales
  Nsw,
  /// Queensland
  Qld,
  /// South Australia
  Sa,
  /// Victoria
  Vic,
}

impl State {
  /// Lowercase abbreviation used in request paths
  pub fn as_str(self) -> &'static str {
    match self {
      State::Nsw => "nsw",
      State::Qld => "qld",
      State::Sa => "sa",
      State::Vic => "vic",
    }
  }
}

impl std::fmt::Display for State {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn snapshot(policy: &str) -> RateLimits {
    RateLimits {
      limit: 100,
      remaining: 42,
      reset: 60,
      policy: policy.to_string(),
      observed_at: Utc::now(),
    }
  }

  #[test]
  fn test_estimated_reset() {
    let limits = snapshot("10;w=60");
    assert_eq!(limits.estimated_reset(), limits.observed_at + Duration::seconds(60));
  }

  #[test]
  fn test_window_from_policy() {
    assert_eq!(snapshot("10;w=60").window(), Some(60));
    assert_eq!(snapshot("50;w=300").window(), Some(300));
    assert_eq!(snapshot("garbage").window(), None);
  }

  #[test]
  fn test_state_path_fragment() {
    assert_eq!(State::Nsw.as_str(), "nsw");
    assert_eq!(State::Vic.to_string(), "vic");
  }
}
