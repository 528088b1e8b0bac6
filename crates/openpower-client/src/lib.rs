//! # openpower-client
//!
//! Rust clients for two energy-vendor REST APIs: AlphaESS (solar battery
//! monitoring/control) and Amber (Australian electricity pricing).
//!
//! ## Features
//!
//! - **Signed requests**: AlphaESS `appId`/`timeStamp`/`sign` authentication
//!   with timestamp-bound SHA-512 signatures
//! - **Envelope validation**: AlphaESS `{code, msg, data}` responses are
//!   unwrapped and failures surfaced as typed errors
//! - **Rate-limit bookkeeping**: Amber `ratelimit-*` response headers are
//!   tracked as a readable snapshot
//! - **Device/site scoping**: derive a client bound to one system or site
//!   without touching the original
//!
//! ## Usage
//!
//! ```rust,no_run
//! use openpower_client::{AlphaEssClient, AmberClient};
//! use openpower_core::{AlphaEssConfig, AmberConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let alpha = AlphaEssClient::new(AlphaEssConfig::from_env()?)?;
//!     let systems = alpha.system().list().await?;
//!     println!("Bound systems: {systems}");
//!
//!     let amber = AmberClient::new(AmberConfig::from_env()?)?;
//!     let sites = amber.sites().list().await?;
//!     println!("Sites: {sites}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, openpower_core::Error>`. Malformed input
//! fails with `Error::Precondition` before any network call; vendor envelope
//! failures surface as `Error::Protocol`; non-2xx responses as
//! `Error::Transport`. There is no retry or local recovery anywhere.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod alphaess;
pub mod amber;

// Re-export the main clients and common types
pub use alphaess::AlphaEssClient;
pub use amber::AmberClient;
pub use openpower_core::{AlphaEssConfig, AmberConfig, Error, Result};
pub use openpower_models::{ApiEnvelope, EvChargerStatus, RateLimits, State};

// Re-export endpoint modules for direct access if needed
pub use alphaess::endpoints::{
  ev_charger::EvChargerEndpoints, settings::SettingsEndpoints, system::SystemEndpoints,
};
pub use amber::endpoints::{
  prices::PricesEndpoints, renewables::RenewablesEndpoints, sites::SitesEndpoints,
  usage::UsageEndpoints,
};
