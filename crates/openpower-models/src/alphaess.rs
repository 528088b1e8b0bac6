//! AlphaESS response envelope and enumerations

use openpower_core::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outer JSON object wrapping every AlphaESS response
///
/// A well-formed response always carries `code`; the field is optional here
/// so the pipeline can distinguish "vendor reported a failure" from
/// "response is not an envelope at all".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
  /// Vendor status code; 200 signals success
  pub code: Option<i64>,

  /// Vendor status message
  pub msg: Option<String>,

  /// Extended vendor message, rarely populated
  #[serde(rename = "expMsg")]
  pub exp_msg: Option<String>,

  /// The real payload; shape varies per endpoint
  pub data: Option<Value>,
}

/// Status reported by an AlphaESS EV charger
///
/// Vendor integer codes 1-7, mapped 1:1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvChargerStatus {
  /// Charger is idle and available
  Available,
  /// Charger is preparing to charge
  Preparing,
  /// Actively charging
  Charging,
  /// Charging suspended by the charger
  SuspendedCharger,
  /// Charging suspended by the vehicle
  SuspendedVehicle,
  /// Charging session finishing
  Finishing,
  /// Charger fault
  Fault,
}

impl TryFrom<u8> for EvChargerStatus {
  type Error = Error;

  fn try_from(code: u8) -> Result<Self, Error> {
    match code {
      1 => Ok(EvChargerStatus::Available),
      2 => Ok(EvChargerStatus::Preparing),
      3 => Ok(EvChargerStatus::Charging),
      4 => Ok(EvChargerStatus::SuspendedCharger),
      5 => Ok(EvChargerStatus::SuspendedVehicle),
      6 => Ok(EvChargerStatus::Finishing),
      7 => Ok(EvChargerStatus::Fault),
      other => Err(Error::Protocol {
        code: None,
        message: format!("unknown EV charger status code {other}"),
      }),
    }
  }
}

impl EvChargerStatus {
  /// The vendor integer code for this status
  pub fn code(self) -> u8 {
    match self {
      EvChargerStatus::Available => 1,
      EvChargerStatus::Preparing => 2,
      EvChargerStatus::Charging => 3,
      EvChargerStatus::SuspendedCharger => 4,
      EvChargerStatus::SuspendedVehicle => 5,
      EvChargerStatus::Finishing => 6,
      EvChargerStatus::Fault => 7,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_envelope_deserializes_full() {
    let envelope: ApiEnvelope = serde_json::from_value(json!({
      "code": 200,
      "msg": "Success",
      "expMsg": null,
      "data": {"currentsetting": 16.0}
    }))
    .unwrap();

    assert_eq!(envelope.code, Some(200));
    assert_eq!(envelope.msg.as_deref(), Some("Success"));
    assert_eq!(envelope.data.unwrap()["currentsetting"], 16.0);
  }

  #[test]
  fn test_envelope_tolerates_missing_fields() {
    let envelope: ApiEnvelope = serde_json::from_value(json!({"data": []})).unwrap();
    assert_eq!(envelope.code, None);
    assert_eq!(envelope.msg, None);
  }

  #[test]
  fn test_status_roundtrip() {
    for code in 1..=7u8 {
      let status = EvChargerStatus::try_from(code).unwrap();
      assert_eq!(status.code(), code);
    }
  }

  #[test]
  fn test_status_rejects_out_of_range() {
    assert!(EvChargerStatus::try_from(0).is_err());
    assert!(EvChargerStatus::try_from(8).is_err());
  }
}
