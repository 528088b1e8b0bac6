//! Metered-usage endpoints

use super::resolve_site;
use crate::amber::transport::{expand_path, Transport};
use chrono::NaiveDate;
use openpower_core::Result;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Metered-usage endpoints for a site
pub struct UsageEndpoints {
  transport: Arc<Transport>,
  site: Option<String>,
}

impl UsageEndpoints {
  /// Create a new usage endpoints instance
  pub fn new(transport: Arc<Transport>, site: Option<String>) -> Self {
    Self { transport, site }
  }

  /// Get all usage data between the start and end dates
  ///
  /// # Arguments
  ///
  /// * `start`, `end` - Inclusive date range
  /// * `resolution` - Interval length in minutes
  /// * `site` - Optional site identifier overriding the client default
  #[instrument(skip(self))]
  pub async fn range(
    &self,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    resolution: Option<u32>,
    site: Option<&str>,
  ) -> Result<Value> {
    let site_id = resolve_site(self.site.as_deref(), site)?;
    let path = expand_path("/sites/{siteId}/usage", &[("siteId", site_id)]);

    self
      .transport
      .get(
        &path,
        &[
          ("startDate", start.map(|d| d.format("%Y-%m-%d").to_string())),
          ("endDate", end.map(|d| d.format("%Y-%m-%d").to_string())),
          ("resolution", resolution.map(|r| r.to_string())),
        ],
      )
      .await
  }
}
