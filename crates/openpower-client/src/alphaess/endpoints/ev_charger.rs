//! Charging-pile endpoints

use super::resolve_serial;
use crate::alphaess::transport::Transport;
use openpower_core::{Error, Result};
use openpower_models::alphaess::EvChargerStatus;
use reqwest::Method;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::instrument;

/// EV charger endpoints
pub struct EvChargerEndpoints {
  transport: Arc<Transport>,
  serial: Option<String>,
}

impl EvChargerEndpoints {
  /// Create a new EV charger endpoints instance
  pub fn new(transport: Arc<Transport>, serial: Option<String>) -> Self {
    Self { transport, serial }
  }

  /// List the charging piles configured for a system
  ///
  /// # Arguments
  ///
  /// * `serial` - Optional system serial number overriding the client default
  #[instrument(skip(self))]
  pub async fn settings(&self, serial: Option<&str>) -> Result<Value> {
    let sys_sn = resolve_serial(self.serial.as_deref(), serial)?;

    self
      .transport
      .request(
        Method::GET,
        "/getEvChargerConfigList",
        &[("sysSn", sys_sn.to_string())],
        None,
      )
      .await
  }

  /// Get the household current setting of a system's charging piles, in amps
  #[instrument(skip(self))]
  pub async fn current_draw(&self, serial: Option<&str>) -> Result<f64> {
    let sys_sn = resolve_serial(self.serial.as_deref(), serial)?;

    let data = self
      .transport
      .request(
        Method::GET,
        "/getEvChargerCurrentsBySn",
        &[("sysSn", sys_sn.to_string())],
        None,
      )
      .await?;

    data.get("currentsetting").and_then(Value::as_f64).ok_or_else(|| Error::Protocol {
      code: None,
      message: "missing 'currentsetting' field".to_string(),
    })
  }

  /// Set the household current setting of a system's charging piles, in amps
  #[instrument(skip(self))]
  pub async fn set_current_draw(&self, current_draw: f64, serial: Option<&str>) -> Result<Value> {
    let sys_sn = resolve_serial(self.serial.as_deref(), serial)?;

    self
      .transport
      .request(
        Method::GET,
        "/setEvChargerCurrentsBySn",
        &[("sysSn", sys_sn.to_string()), ("currentsetting", current_draw.to_string())],
        None,
      )
      .await
  }

  /// Get the status of one charging pile
  ///
  /// # Arguments
  ///
  /// * `charger_serial` - Serial number of the charging pile itself
  /// * `serial` - Optional system serial number overriding the client default
  #[instrument(skip(self))]
  pub async fn status(
    &self,
    charger_serial: &str,
    serial: Option<&str>,
  ) -> Result<Vec<EvChargerStatus>> {
    let sys_sn = resolve_serial(self.serial.as_deref(), serial)?;

    let data = self
      .transport
      .request(
        Method::GET,
        "/getEvChargerStatusBySn",
        &[("sysSn", sys_sn.to_string()), ("evchargerSn", charger_serial.to_string())],
        None,
      )
      .await?;

    let codes: Vec<u8> = serde_json::from_value(data)?;
    codes.into_iter().map(EvChargerStatus::try_from).collect()
  }

  /// Remotely start or stop a charging pile
  #[instrument(skip(self))]
  pub async fn control(
    &self,
    charger_serial: &str,
    charging: bool,
    serial: Option<&str>,
  ) -> Result<Value> {
    let sys_sn = resolve_serial(self.serial.as_deref(), serial)?;

    let body = json!({
      "sysSn": sys_sn,
      "evchargerSn": charger_serial,
      "controlMode": i32::from(charging),
    });

    self.transport.request(Method::POST, "/remoteControlEvCharger", &[], Some(&body)).await
  }
}
