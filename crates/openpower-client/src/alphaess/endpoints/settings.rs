//! Charge/discharge configuration endpoints

use super::{resolve_serial, validate_percentage, validate_schedule_time};
use crate::alphaess::transport::Transport;
use chrono::NaiveTime;
use openpower_core::Result;
use reqwest::Method;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::instrument;

/// A scheduling window, as a (start, end) pair of times of day
pub type SchedulePeriod = (NaiveTime, NaiveTime);

fn validate_periods(first: SchedulePeriod, second: SchedulePeriod) -> Result<()> {
  validate_schedule_time(first.0)?;
  validate_schedule_time(first.1)?;
  validate_schedule_time(second.0)?;
  validate_schedule_time(second.1)?;
  Ok(())
}

fn hhmm(time: NaiveTime) -> String {
  time.format("%H:%M").to_string()
}

/// Battery charge/discharge configuration endpoints
pub struct SettingsEndpoints {
  transport: Arc<Transport>,
  serial: Option<String>,
}

impl SettingsEndpoints {
  /// Create a new settings endpoints instance
  pub fn new(transport: Arc<Transport>, serial: Option<String>) -> Self {
    Self { transport, serial }
  }

  /// Get the grid-charging configuration of a system
  #[instrument(skip(self))]
  pub async fn charging(&self, serial: Option<&str>) -> Result<Value> {
    let sys_sn = resolve_serial(self.serial.as_deref(), serial)?;

    self
      .transport
      .request(Method::GET, "/getChargeConfigInfo", &[("sysSn", sys_sn.to_string())], None)
      .await
  }

  /// Update the grid-charging configuration of a system
  ///
  /// # Arguments
  ///
  /// * `stop_level` - Battery level at which charging stops, as a decimal in [0, 1]
  /// * `use_grid` - Whether charging from the grid is enabled
  /// * `first_period`, `second_period` - Charging windows; all times must fall
  ///   on 15-minute boundaries
  /// * `serial` - Optional system serial number overriding the client default
  #[instrument(skip(self))]
  pub async fn set_charging(
    &self,
    stop_level: f64,
    use_grid: bool,
    first_period: SchedulePeriod,
    second_period: SchedulePeriod,
    serial: Option<&str>,
  ) -> Result<Value> {
    let sys_sn = resolve_serial(self.serial.as_deref(), serial)?;
    validate_percentage(stop_level)?;
    validate_periods(first_period, second_period)?;

    let body = json!({
      "sysSn": sys_sn,
      "batHighCap": stop_level,
      "gridCharge": i32::from(use_grid),
      "timeChaf1": hhmm(first_period.0),
      "timeChae1": hhmm(first_period.1),
      "timeChaf2": hhmm(second_period.0),
      "timeChae2": hhmm(second_period.1),
    });

    self.transport.request(Method::POST, "/updateChargeConfigInfo", &[], Some(&body)).await
  }

  /// Get the discharge configuration of a system
  #[instrument(skip(self))]
  pub async fn discharging(&self, serial: Option<&str>) -> Result<Value> {
    let sys_sn = resolve_serial(self.serial.as_deref(), serial)?;

    self
      .transport
      .request(Method::GET, "/getDisChargeConfigInfo", &[("sysSn", sys_sn.to_string())], None)
      .await
  }

  /// Update the discharge configuration of a system
  ///
  /// # Arguments
  ///
  /// * `stop_level` - Battery level at which discharging stops, as a decimal in [0, 1]
  /// * `enable_time_control` - Whether time-of-day discharge control is enabled
  /// * `first_period`, `second_period` - Discharge windows; all times must
  ///   fall on 15-minute boundaries
  /// * `serial` - Optional system serial number overriding the client default
  #[instrument(skip(self))]
  pub async fn set_discharging(
    &self,
    stop_level: f64,
    enable_time_control: bool,
    first_period: SchedulePeriod,
    second_period: SchedulePeriod,
    serial: Option<&str>,
  ) -> Result<Value> {
    let sys_sn = resolve_serial(self.serial.as_deref(), serial)?;
    validate_percentage(stop_level)?;
    validate_periods(first_period, second_period)?;

    let body = json!({
      "sysSn": sys_sn,
      "batUseCap": stop_level,
      "ctrDis": i32::from(enable_time_control),
      "timeDisf1": hhmm(first_period.0),
      "timeDise1": hhmm(first_period.1),
      "timeDisf2": hhmm(second_period.0),
      "timeDise2": hhmm(second_period.1),
    });

    self.transport.request(Method::POST, "/updateDisChargeConfigInfo", &[], Some(&body)).await
  }
}
