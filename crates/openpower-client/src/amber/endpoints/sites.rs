//! Site inventory endpoints

use crate::amber::transport::Transport;
use openpower_core::Result;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Site inventory endpoints
pub struct SitesEndpoints {
  transport: Arc<Transport>,
}

impl SitesEndpoints {
  /// Create a new sites endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// List all sites linked to the account
  #[instrument(skip(self))]
  pub async fn list(&self) -> Result<Value> {
    self.transport.get("/sites", &[]).await
  }
}
