//! Per-location calibration
//!
//! Each mapped location carries a fixed offset measured on site against the
//! robot's actual docking pose. The entries are opaque, hand-tuned
//! constants; no rule links them, so the table is a plain keyed mapping.
//! An offset is subtracted from the raw pose exactly once at resolution
//! time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::types::Pose;

/// Static correction for one named location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationOffset {
    pub dx: f64,
    pub dy: f64,
    pub dyaw: f64,
}

impl CalibrationOffset {
    /// The identity offset (no adjustment)
    pub const IDENTITY: Self = Self {
        dx: 0.0,
        dy: 0.0,
        dyaw: 0.0,
    };

    pub fn new(dx: f64, dy: f64, dyaw: f64) -> Self {
        Self { dx, dy, dyaw }
    }

    pub fn is_identity(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0 && self.dyaw == 0.0
    }
}

impl Default for CalibrationOffset {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Keyed table of per-location calibration offsets
#[derive(Debug, Clone, Default)]
pub struct CalibrationTable {
    offsets: HashMap<String, CalibrationOffset>,
}

impl CalibrationTable {
    /// Create an empty table; every lookup yields the identity
    pub fn new() -> Self {
        Self::default()
    }

    /// Offsets measured for the six mapped hospital rooms
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert("101", CalibrationOffset::new(0.492, 0.0, 61.579));
        table.insert("102", CalibrationOffset::new(0.2, 0.3, 30.0));
        table.insert("103", CalibrationOffset::new(-0.42, 5.77, 146.296));
        table.insert("104", CalibrationOffset::new(0.0, 0.0, 0.0));
        table.insert("105", CalibrationOffset::new(0.3, 0.2, 15.0));
        table.insert("106", CalibrationOffset::new(0.4, 0.3, 10.0));
        table
    }

    pub fn insert(&mut self, location_id: impl Into<String>, offset: CalibrationOffset) {
        self.offsets.insert(location_id.into(), offset);
    }

    /// Offset for a location; unknown ids get the identity
    pub fn offset_for(&self, location_id: &str) -> CalibrationOffset {
        self.offsets
            .get(location_id)
            .copied()
            .unwrap_or(CalibrationOffset::IDENTITY)
    }

    pub fn contains(&self, location_id: &str) -> bool {
        self.offsets.contains_key(location_id)
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Apply the location's offset to a raw pose.
    ///
    /// Subtractive: `calibrated = raw - offset` on x, y and yaw. The floor
    /// is never adjusted. Must be applied exactly once per resolution; a
    /// second pass double-subtracts.
    pub fn apply(&self, raw: &Pose, location_id: &str) -> Pose {
        let offset = self.offset_for(location_id);
        Pose {
            x: raw.x - offset.dx,
            y: raw.y - offset.dy,
            floor: raw.floor,
            yaw: raw.yaw - offset.dyaw,
        }
    }
}

/// Post-calibration correction applied only to the home position
///
/// Additive, unlike the subtractive room table, and applied after the
/// nominal table pass. The sign convention difference is preserved from the
/// tuned deployment values; do not fold this into the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HomeCorrection {
    pub dx: f64,
    pub dy: f64,
    pub dyaw: f64,
}

impl HomeCorrection {
    /// Correction tuned for the deployed reception dock
    pub fn builtin() -> Self {
        Self {
            dx: -0.992,
            dy: 1.61,
            dyaw: 123.561,
        }
    }

    pub fn new(dx: f64, dy: f64, dyaw: f64) -> Self {
        Self { dx, dy, dyaw }
    }

    /// Additive application: `corrected = pose + correction` on x, y, yaw
    pub fn apply(&self, pose: &Pose) -> Pose {
        Pose {
            x: pose.x + self.dx,
            y: pose.y + self.dy,
            floor: pose.floor,
            yaw: pose.yaw + self.dyaw,
        }
    }
}

impl Default for HomeCorrection {
    fn default() -> Self {
        Self::builtin()
    }
}
