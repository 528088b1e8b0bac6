//! Grid renewables endpoints

use crate::amber::transport::{expand_path, Transport};
use openpower_core::Result;
use openpower_models::amber::State;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Grid renewables endpoints; these are per-state, not per-site
pub struct RenewablesEndpoints {
  transport: Arc<Transport>,
}

impl RenewablesEndpoints {
  /// Create a new renewables endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get the current percentage of renewables in a state's grid
  ///
  /// # Arguments
  ///
  /// * `state` - Grid region to query
  /// * `previous`, `next` - Number of past/forecast intervals to include
  /// * `resolution` - Interval length in minutes
  #[instrument(skip(self))]
  pub async fn current(
    &self,
    state: State,
    previous: Option<u32>,
    next: Option<u32>,
    resolution: Option<u32>,
  ) -> Result<Value> {
    let path = expand_path("/state/{state}/renewables/current", &[("state", state.as_str())]);

    self
      .transport
      .get(
        &path,
        &[
          ("previous", previous.map(|n| n.to_string())),
          ("next", next.map(|n| n.to_string())),
          ("resolution", resolution.map(|r| r.to_string())),
        ],
      )
      .await
  }
}
