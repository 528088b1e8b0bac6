//! # openpower-models
//!
//! Data models shared by the AlphaESS and Amber clients.
//!
//! The vendor APIs return mostly free-form JSON, so this crate stays small:
//! the AlphaESS response envelope, the EV-charger status enumeration, the
//! Amber rate-limit snapshot and the Amber grid-region enumeration.
//!
//! ## Usage
//!
//! ```ignore
//! use openpower_models::alphaess::ApiEnvelope;
//!
//! let envelope: ApiEnvelope = serde_json::from_str(&response_json)?;
//! ```

#![warn(clippy::all)]

pub mod alphaess;
pub mod amber;

pub use alphaess::{ApiEnvelope, EvChargerStatus};
pub use amber::{RateLimits, State};
