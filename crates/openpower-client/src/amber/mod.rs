//! Amber electricity-pricing API client
//!
//! Every request carries a static bearer token; responses are plain JSON with
//! no envelope. The transport records the vendor's `ratelimit-*` response
//! headers as a snapshot readable via [`AmberClient::rate_limits`].

pub mod endpoints;
pub mod transport;

use crate::amber::endpoints::{
  prices::PricesEndpoints, renewables::RenewablesEndpoints, sites::SitesEndpoints,
  usage::UsageEndpoints,
};
use crate::amber::transport::Transport;
use openpower_core::{AmberConfig, Result};
use openpower_models::amber::RateLimits;
use std::sync::Arc;

/// Main Amber API client
///
/// Holds the bearer transport plus an optional default site identifier.
/// Site-scoped endpoint methods accept a per-call site override; calls with
/// neither fail with a precondition error before any I/O.
///
/// # Examples
///
/// ```ignore
/// use openpower_client::AmberClient;
/// use openpower_core::AmberConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = AmberConfig::from_env()?;
///     let client = AmberClient::new(config)?.for_site("01F5A5CRKMZ5BCX9P1S4V990AM");
///
///     let prices = client.prices().current(None, None, None, None).await?;
///     println!("Current prices: {prices}");
///
///     if let Some(limits) = client.rate_limits() {
///         println!("{} of {} requests left", limits.remaining, limits.limit);
///     }
///
///     Ok(())
/// }
/// ```
pub struct AmberClient {
  transport: Arc<Transport>,
  site: Option<String>,
}

impl AmberClient {
  /// Create a new Amber API client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: AmberConfig) -> Result<Self> {
    let site = config.site.clone();
    let transport = Arc::new(Transport::new(&config)?);

    Ok(Self { transport, site })
  }

  /// Derive a client scoped to one site
  ///
  /// Pure construction: the source client keeps its own default untouched,
  /// and the derived client starts with a fresh rate-limit snapshot.
  pub fn for_site(&self, site: impl Into<String>) -> Self {
    Self { transport: Arc::new(self.transport.fork()), site: Some(site.into()) }
  }

  /// The default site identifier this client is scoped to, if any
  pub fn default_site(&self) -> Option<&str> {
    self.site.as_deref()
  }

  /// The last rate-limit snapshot observed from response headers
  ///
  /// Returns `None` until the first header-bearing response arrives.
  pub fn rate_limits(&self) -> Option<RateLimits> {
    self.transport.rate_limits()
  }

  /// Get access to site inventory endpoints
  pub fn sites(&self) -> SitesEndpoints {
    SitesEndpoints::new(self.transport.clone())
  }

  /// Get access to price endpoints
  pub fn prices(&self) -> PricesEndpoints {
    PricesEndpoints::new(self.transport.clone(), self.site.clone())
  }

  /// Get access to usage endpoints
  pub fn usage(&self) -> UsageEndpoints {
    UsageEndpoints::new(self.transport.clone(), self.site.clone())
  }

  /// Get access to grid renewables endpoints
  pub fn renewables(&self) -> RenewablesEndpoints {
    RenewablesEndpoints::new(self.transport.clone())
  }
}

impl std::fmt::Debug for AmberClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AmberClient")
      .field("transport", &self.transport)
      .field("site", &self.site)
      .finish()
  }
}
