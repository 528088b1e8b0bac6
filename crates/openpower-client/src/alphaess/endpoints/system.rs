//! System inventory, power/energy data and binding endpoints

use super::resolve_serial;
use crate::alphaess::transport::Transport;
use chrono::NaiveDate;
use openpower_core::Result;
use reqwest::Method;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::instrument;

/// System-level endpoints: inventory, power/energy data, binding
pub struct SystemEndpoints {
  transport: Arc<Transport>,
  serial: Option<String>,
}

impl SystemEndpoints {
  /// Create a new system endpoints instance
  pub fn new(transport: Arc<Transport>, serial: Option<String>) -> Self {
    Self { transport, serial }
  }

  /// List all systems bound to the developer account
  ///
  /// The only AlphaESS operation that needs no serial number.
  #[instrument(skip(self))]
  pub async fn list(&self) -> Result<Value> {
    self.transport.request(Method::GET, "/getEssList", &[], None).await
  }

  /// Get summary data for a system
  #[instrument(skip(self))]
  pub async fn summary(&self, serial: Option<&str>) -> Result<Value> {
    let sys_sn = resolve_serial(self.serial.as_deref(), serial)?;

    self
      .transport
      .request(Method::GET, "/getSumDataForCustomer", &[("sysSn", sys_sn.to_string())], None)
      .await
  }

  /// Get real-time power data for a system
  #[instrument(skip(self))]
  pub async fn realtime_power(&self, serial: Option<&str>) -> Result<Value> {
    let sys_sn = resolve_serial(self.serial.as_deref(), serial)?;

    self
      .transport
      .request(Method::GET, "/getLastPowerData", &[("sysSn", sys_sn.to_string())], None)
      .await
  }

  /// Get power data for one day
  #[instrument(skip(self))]
  pub async fn daily_power(&self, date: NaiveDate, serial: Option<&str>) -> Result<Value> {
    let sys_sn = resolve_serial(self.serial.as_deref(), serial)?;

    self
      .transport
      .request(
        Method::GET,
        "/getOneDayPowerBySn",
        &[("sysSn", sys_sn.to_string()), ("queryDate", date.format("%Y-%m-%d").to_string())],
        None,
      )
      .await
  }

  /// Get energy data for one day
  #[instrument(skip(self))]
  pub async fn daily_energy(&self, date: NaiveDate, serial: Option<&str>) -> Result<Value> {
    let sys_sn = resolve_serial(self.serial.as_deref(), serial)?;

    self
      .transport
      .request(
        Method::GET,
        "/getOneDateEnergyBySn",
        &[("sysSn", sys_sn.to_string()), ("queryDate", date.format("%Y-%m-%d").to_string())],
        None,
      )
      .await
  }

  /// Request a verification code ahead of binding a system
  #[instrument(skip(self))]
  pub async fn verification_code(&self, check_code: &str, serial: Option<&str>) -> Result<Value> {
    let sys_sn = resolve_serial(self.serial.as_deref(), serial)?;

    self
      .transport
      .request(
        Method::GET,
        "/getVerificationCode",
        &[("sysSn", sys_sn.to_string()), ("checkCode", check_code.to_string())],
        None,
      )
      .await
  }

  /// Bind a system to the developer account using a verification code
  #[instrument(skip(self))]
  pub async fn bind(&self, verification_code: &str, serial: Option<&str>) -> Result<Value> {
    let sys_sn = resolve_serial(self.serial.as_deref(), serial)?;

    let body = json!({
      "sysSn": sys_sn,
      "code": verification_code,
    });

    self.transport.request(Method::POST, "/bindSn", &[], Some(&body)).await
  }

  /// Unbind a system from the developer account
  #[instrument(skip(self))]
  pub async fn unbind(&self, serial: Option<&str>) -> Result<Value> {
    let sys_sn = resolve_serial(self.serial.as_deref(), serial)?;

    let body = json!({ "sysSn": sys_sn });

    self.transport.request(Method::POST, "/unBindSn", &[], Some(&body)).await
  }
}
