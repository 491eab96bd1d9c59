//! Battery health classification for the dashboard's battery card
//!
//! Pure classification of telemetry the shell already has; no sampling and
//! no hardware access. Thresholds are the deployed dashboard's: above 80 %
//! Good, above 50 % Warning, otherwise Critical, both bounds exclusive.

use serde::{Deserialize, Serialize};

/// Snapshot of the robot battery as reported by telemetry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatteryReading {
    /// State of charge (percent)
    pub percentage: f32,
    /// Pack voltage (volts)
    pub voltage: f32,
    /// Pack temperature (Celsius)
    pub temperature_c: f32,
}

impl BatteryReading {
    pub fn new(percentage: f32, voltage: f32, temperature_c: f32) -> Self {
        Self {
            percentage,
            voltage,
            temperature_c,
        }
    }

    /// Status lamp for this reading
    pub fn status(&self) -> BatteryStatus {
        BatteryStatus::from_percentage(self.percentage)
    }

    /// Charge as a `[0, 1]` fraction for the charge-bar width
    pub fn charge_fraction(&self) -> f32 {
        (self.percentage / 100.0).clamp(0.0, 1.0)
    }
}

/// Three-state battery status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatteryStatus {
    /// Above 80 %
    Good,
    /// Above 50 %, at most 80 %
    Warning,
    /// 50 % or below
    Critical,
}

impl BatteryStatus {
    pub fn from_percentage(percentage: f32) -> Self {
        if percentage > 80.0 {
            BatteryStatus::Good
        } else if percentage > 50.0 {
            BatteryStatus::Warning
        } else {
            BatteryStatus::Critical
        }
    }

    /// Label shown next to the status lamp
    pub fn label(&self) -> &'static str {
        match self {
            BatteryStatus::Good => "Good",
            BatteryStatus::Warning => "Warning",
            BatteryStatus::Critical => "Critical",
        }
    }

    /// Lamp color used by the dashboard
    pub fn indicator(&self) -> IndicatorColor {
        match self {
            BatteryStatus::Good => IndicatorColor::Green,
            BatteryStatus::Warning => IndicatorColor::Yellow,
            BatteryStatus::Critical => IndicatorColor::Red,
        }
    }

    /// Whether the operator should plan a recharge
    pub fn needs_attention(&self) -> bool {
        matches!(self, BatteryStatus::Warning | BatteryStatus::Critical)
    }
}

/// Status lamp colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorColor {
    Green,
    Yellow,
    Red,
}
