//! Price endpoints

use super::resolve_site;
use crate::amber::transport::{expand_path, Transport};
use chrono::NaiveDate;
use openpower_core::Result;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Price endpoints for a site
pub struct PricesEndpoints {
  transport: Arc<Transport>,
  site: Option<String>,
}

impl PricesEndpoints {
  /// Create a new prices endpoints instance
  pub fn new(transport: Arc<Transport>, site: Option<String>) -> Self {
    Self { transport, site }
  }

  /// Get all prices between the start and end dates
  ///
  /// Omitted arguments are left out of the request entirely and fall back to
  /// the vendor's defaults.
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
    let path = expand_path("/sites/{siteId}/prices", &[("siteId", site_id)]);

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

  /// Get the current price, optionally with surrounding intervals
  ///
  /// # Arguments
  ///
  /// * `previous`, `next` - Number of past/forecast intervals to include
  /// * `resolution` - Interval length in minutes
  /// * `site` - Optional site identifier overriding the client default
  #[instrument(skip(self))]
  pub async fn current(
    &self,
    previous: Option<u32>,
    next: Option<u32>,
    resolution: Option<u32>,
    site: Option<&str>,
  ) -> Result<Value> {
    let site_id = resolve_site(self.site.as_deref(), site)?;
    let path = expand_path("/sites/{siteId}/prices/current", &[("siteId", site_id)]);

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
