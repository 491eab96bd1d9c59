//! Resolver configuration
//!
//! The built-in tables match the deployed hospital map. A JSON file with
//! the same shape can replace them per site; `Default` yields the built-in
//! tables so the library is usable with zero configuration. Configuration
//! covers resolver tables only — map images and robot connectivity belong
//! to the shell.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithms::calibration::{CalibrationOffset, CalibrationTable, HomeCorrection};
use crate::algorithms::viewport::MapViewport;
use crate::core::constants::{DISPLAY_DECIMALS, MAP_SPAN_METERS};
use crate::core::types::Pose;
use crate::presets::{LocationPreset, PresetRegistry};

/// Configuration validation and I/O errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid parameter value
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    /// Two locations share the same id
    DuplicateLocation { location_id: String },
    /// Configuration file I/O error
    IoError { message: String },
    /// JSON serialization/deserialization error
    SerializationError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "Invalid parameter {}={}: {}", parameter, value, reason),
            ConfigError::DuplicateLocation { location_id } => {
                write!(f, "Duplicate location id: {}", location_id)
            }
            ConfigError::IoError { message } => write!(f, "Configuration I/O error: {}", message),
            ConfigError::SerializationError { message } => {
                write!(f, "Configuration serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result of validating a configuration
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the configuration is usable
    pub is_valid: bool,
    /// Hard errors; the configuration must not be used while any remain
    pub errors: Vec<ConfigError>,
    /// Non-fatal findings worth surfacing to the operator
    pub warnings: Vec<String>,
}

/// One selectable location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Opaque location id the dashboard buttons use (e.g. "101")
    pub id: String,
    /// Nominal, uncalibrated pose shown on screen
    pub pose: Pose,
    /// Operator-facing room label
    pub room: String,
    /// Offset subtracted at resolution time; omit for no adjustment
    #[serde(default)]
    pub calibration: Option<CalibrationOffset>,
}

/// Home dock: raw pose plus the additive post-calibration correction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeConfig {
    pub pose: Pose,
    pub room: String,
    pub correction: HomeCorrection,
}

/// Root configuration for the resolver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Metric span of the map viewport (meters)
    #[serde(default = "default_viewport_span")]
    pub viewport_span_m: f64,
    /// Decimal places for click-derived display coordinates
    #[serde(default = "default_display_decimals")]
    pub display_decimals: u8,
    /// Selectable locations with optional calibration
    pub locations: Vec<LocationConfig>,
    /// Home dock definition
    pub home: HomeConfig,
}

fn default_viewport_span() -> f64 {
    MAP_SPAN_METERS
}

fn default_display_decimals() -> u8 {
    DISPLAY_DECIMALS
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ResolverConfig {
    /// The deployed hospital map: six rooms, their measured offsets, and
    /// the reception dock with its tuned correction
    pub fn builtin() -> Self {
        let location = |id: &str, x: f64, y: f64, floor: u32, yaw: f64, room: &str, offset| {
            LocationConfig {
                id: id.to_string(),
                pose: Pose::new(x, y, floor, yaw),
                room: room.to_string(),
                calibration: offset,
            }
        };

        Self {
            viewport_span_m: MAP_SPAN_METERS,
            display_decimals: DISPLAY_DECIMALS,
            locations: vec![
                location("101", 2.0, 0.81, 1, 62.0, "Room No 101",
                    Some(CalibrationOffset::new(0.492, 0.0, 61.579))),
                location("102", 0.0, 0.0, 1, 0.0, "Room No 102",
                    Some(CalibrationOffset::new(0.2, 0.3, 30.0))),
                location("103", 2.3, -0.5, 1, 0.0, "Room No 103",
                    Some(CalibrationOffset::new(-0.42, 5.77, 146.296))),
                location("104", -3.0, -7.0, 3, 270.0, "Room No 104",
                    Some(CalibrationOffset::new(0.0, 0.0, 0.0))),
                location("105", 4.0, -2.0, 1, 0.0, "Room No 105",
                    Some(CalibrationOffset::new(0.3, 0.2, 15.0))),
                location("106", -6.0, 8.0, 1, 45.0, "Room No 106",
                    Some(CalibrationOffset::new(0.4, 0.3, 10.0))),
            ],
            home: HomeConfig {
                pose: Pose::new(0.2, 2.6, 1, 0.0),
                room: "home".to_string(),
                correction: HomeCorrection::builtin(),
            },
        }
    }

    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::SerializationError {
            message: e.to_string(),
        })
    }

    /// Serialize the configuration to JSON
    pub fn to_json_string(&self, pretty: bool) -> Result<String, ConfigError> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|e| ConfigError::SerializationError {
            message: e.to_string(),
        })
    }

    /// Load a configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            message: e.to_string(),
        })?;
        Self::from_json_str(&contents)
    }

    /// Write the configuration to a JSON file (pretty-printed)
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let json = self.to_json_string(true)?;
        fs::write(path, json).map_err(|e| ConfigError::IoError {
            message: e.to_string(),
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if !self.viewport_span_m.is_finite() || self.viewport_span_m <= 0.0 {
            errors.push(ConfigError::InvalidParameter {
                parameter: "viewport_span_m".to_string(),
                value: self.viewport_span_m.to_string(),
                reason: "must be finite and positive".to_string(),
            });
        }

        if self.display_decimals > 6 {
            warnings.push(format!(
                "display_decimals {} exceeds the precision the form renders",
                self.display_decimals
            ));
        }

        if self.locations.is_empty() {
            warnings.push("no selectable locations configured".to_string());
        }

        let half_span = self.viewport_span_m / 2.0;
        let mut seen_ids = HashSet::new();

        for location in &self.locations {
            if location.id.is_empty() {
                errors.push(ConfigError::InvalidParameter {
                    parameter: "locations.id".to_string(),
                    value: String::new(),
                    reason: "location id must not be empty".to_string(),
                });
            }
            if !seen_ids.insert(location.id.as_str()) {
                errors.push(ConfigError::DuplicateLocation {
                    location_id: location.id.clone(),
                });
            }

            Self::validate_pose(
                &location.pose,
                &format!("locations[{}]", location.id),
                &mut errors,
            );

            if let Some(offset) = &location.calibration {
                if !offset.dx.is_finite() || !offset.dy.is_finite() || !offset.dyaw.is_finite() {
                    errors.push(ConfigError::InvalidParameter {
                        parameter: format!("locations[{}].calibration", location.id),
                        value: format!("({}, {}, {})", offset.dx, offset.dy, offset.dyaw),
                        reason: "offsets must be finite".to_string(),
                    });
                }
            }

            if self.viewport_span_m.is_finite()
                && self.viewport_span_m > 0.0
                && (location.pose.x.abs() > half_span || location.pose.y.abs() > half_span)
            {
                warnings.push(format!(
                    "location {} lies outside the mapped viewport",
                    location.id
                ));
            }
        }

        Self::validate_pose(&self.home.pose, "home", &mut errors);

        let correction = &self.home.correction;
        if !correction.dx.is_finite() || !correction.dy.is_finite() || !correction.dyaw.is_finite()
        {
            errors.push(ConfigError::InvalidParameter {
                parameter: "home.correction".to_string(),
                value: format!("({}, {}, {})", correction.dx, correction.dy, correction.dyaw),
                reason: "correction terms must be finite".to_string(),
            });
        }

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    fn validate_pose(pose: &Pose, context: &str, errors: &mut Vec<ConfigError>) {
        if pose.floor < 1 {
            errors.push(ConfigError::InvalidParameter {
                parameter: format!("{}.pose.floor", context),
                value: pose.floor.to_string(),
                reason: "floors are 1-based".to_string(),
            });
        }
        if !pose.x.is_finite() || !pose.y.is_finite() || !pose.yaw.is_finite() {
            errors.push(ConfigError::InvalidParameter {
                parameter: format!("{}.pose", context),
                value: format!("({}, {}, {})", pose.x, pose.y, pose.yaw),
                reason: "coordinates must be finite".to_string(),
            });
        }
    }

    /// Viewport described by this configuration
    pub fn viewport(&self) -> MapViewport {
        MapViewport::new(self.viewport_span_m)
    }

    /// Preset registry described by this configuration
    pub fn registry(&self) -> PresetRegistry {
        let home = LocationPreset::new(self.home.pose, self.home.room.clone());
        let mut registry = PresetRegistry::new(home);
        for location in &self.locations {
            registry.insert(
                location.id.clone(),
                LocationPreset::new(location.pose, location.room.clone()),
            );
        }
        registry
    }

    /// Calibration table described by this configuration
    pub fn calibration_table(&self) -> CalibrationTable {
        let mut table = CalibrationTable::new();
        for location in &self.locations {
            if let Some(offset) = location.calibration {
                table.insert(location.id.clone(), offset);
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_config_is_valid() {
        let result = ResolverConfig::builtin().validate();

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let config = ResolverConfig::builtin();
        let json = config.to_json_string(false).unwrap();
        let parsed = ResolverConfig::from_json_str(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_span_and_decimals_default_when_omitted() {
        let json = r#"{
            "locations": [],
            "home": {
                "pose": { "x": 0.2, "y": 2.6, "floor": 1, "yaw": 0.0 },
                "room": "home",
                "correction": { "dx": -0.992, "dy": 1.61, "dyaw": 123.561 }
            }
        }"#;

        let config = ResolverConfig::from_json_str(json).unwrap();

        assert_eq!(config.viewport_span_m, MAP_SPAN_METERS);
        assert_eq!(config.display_decimals, DISPLAY_DECIMALS);
    }

    #[test]
    fn test_duplicate_location_ids_rejected() {
        let mut config = ResolverConfig::builtin();
        let duplicate = config.locations[0].clone();
        config.locations.push(duplicate);

        let result = config.validate();

        assert!(!result.is_valid);
        assert!(result.errors.contains(&ConfigError::DuplicateLocation {
            location_id: "101".to_string()
        }));
    }

    #[test]
    fn test_zero_floor_rejected() {
        let mut config = ResolverConfig::builtin();
        config.locations[2].pose.floor = 0;

        assert!(!config.validate().is_valid);
    }

    #[test]
    fn test_non_finite_coordinate_rejected() {
        let mut config = ResolverConfig::builtin();
        config.home.pose.y = f64::NAN;

        assert!(!config.validate().is_valid);
    }

    #[test]
    fn test_non_positive_span_rejected() {
        let mut config = ResolverConfig::builtin();
        config.viewport_span_m = 0.0;

        assert!(!config.validate().is_valid);
    }

    #[test]
    fn test_out_of_viewport_location_warns() {
        let mut config = ResolverConfig::builtin();
        config.locations[0].pose.x = 12.5;

        let result = config.validate();

        assert!(result.is_valid);
        assert!(result.warnings.iter().any(|w| w.contains("101")));
    }

    #[test]
    fn test_table_builders_match_builtin_tables() {
        let config = ResolverConfig::builtin();

        assert_eq!(config.calibration_table().len(), 6);
        assert_eq!(config.registry().len(), 6);
        assert_eq!(config.viewport().span_m, MAP_SPAN_METERS);
        assert_eq!(
            config.calibration_table().offset_for("101"),
            CalibrationOffset::new(0.492, 0.0, 61.579)
        );
    }
}
