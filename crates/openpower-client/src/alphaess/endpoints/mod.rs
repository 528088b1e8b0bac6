//! AlphaESS endpoint groups and the shared input-validation helpers

pub mod ev_charger;
pub mod settings;
pub mod system;

use chrono::{NaiveTime, Timelike};
use openpower_core::{Error, Result};

/// Resolve the serial number for one call: an explicit override beats the
/// instance default; neither present is a precondition failure.
pub(crate) fn resolve_serial<'a>(
  default: Option<&'a str>,
  serial: Option<&'a str>,
) -> Result<&'a str> {
  serial.or(default).ok_or_else(|| {
    Error::Precondition("no serial number configured and none supplied".to_string())
  })
}

/// Percentages are expressed as decimals in [0, 1]
pub(crate) fn validate_percentage(decimal: f64) -> Result<()> {
  if !(0.0..=1.0).contains(&decimal) {
    return Err(Error::Precondition(format!(
      "percentage must be expressed as a decimal between [0, 1], got {decimal}"
    )));
  }
  Ok(())
}

/// Schedule times must fall on 15-minute boundaries
pub(crate) fn validate_schedule_time(period: NaiveTime) -> Result<()> {
  if period.minute() % 15 != 0 {
    return Err(Error::Precondition(format!(
      "time must be specified in 15-minute intervals, got {}",
      period.format("%H:%M")
    )));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_resolve_serial_override_wins() {
    assert_eq!(resolve_serial(Some("DEFAULT"), Some("OVERRIDE")).unwrap(), "OVERRIDE");
  }

  #[test]
  fn test_resolve_serial_falls_back_to_default() {
    assert_eq!(resolve_serial(Some("DEFAULT"), None).unwrap(), "DEFAULT");
  }

  #[test]
  fn test_resolve_serial_missing_is_precondition() {
    assert!(matches!(resolve_serial(None, None), Err(Error::Precondition(_))));
  }

  #[test]
  fn test_percentage_bounds_inclusive() {
    assert!(validate_percentage(0.0).is_ok());
    assert!(validate_percentage(1.0).is_ok());
    assert!(validate_percentage(0.5).is_ok());
  }

  #[test]
  fn test_percentage_out_of_range() {
    assert!(matches!(validate_percentage(-0.01), Err(Error::Precondition(_))));
    assert!(matches!(validate_percentage(1.01), Err(Error::Precondition(_))));
  }

  #[test]
  fn test_schedule_time_on_boundary() {
    let time = NaiveTime::from_hms_opt(10, 15, 0).unwrap();
    assert!(validate_schedule_time(time).is_ok());
  }

  #[test]
  fn test_schedule_time_off_boundary() {
    let time = NaiveTime::from_hms_opt(10, 16, 0).unwrap();
    assert!(matches!(validate_schedule_time(time), Err(Error::Precondition(_))));
  }
}
