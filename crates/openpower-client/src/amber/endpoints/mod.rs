//! Amber endpoint groups and the site-resolution helper

pub mod prices;
pub mod renewables;
pub mod sites;
pub mod usage;

use openpower_core::{Error, Result};

/// Resolve the site identifier for one call: an explicit override beats the
/// instance default; neither present is a precondition failure, never a
/// literal placeholder substitution.
pub(crate) fn resolve_site<'a>(
  default: Option<&'a str>,
  site: Option<&'a str>,
) -> Result<&'a str> {
  site
    .or(default)
    .ok_or_else(|| Error::Precondition("no site configured and none supplied".to_string()))
}
