//! Hospital Service-Robot Pose Resolution
//!
//! Core library behind the service-robot dashboard's navigation form:
//! translates map clicks and named presets into calibrated robot poses
//! and packages them as move requests for the robot-command sink.

pub mod core;
pub mod algorithms;
pub mod presets;
pub mod api;
pub mod utils;
pub mod battery;

// Re-export commonly used types
pub use core::{PointerRatio, Pose, WorldCoordinate};
pub use core::{DISPLAY_DECIMALS, HOME_LOCATION_ID, MAP_SPAN_METERS};
pub use algorithms::viewport::MapViewport;
pub use algorithms::calibration::{CalibrationOffset, CalibrationTable, HomeCorrection};
pub use presets::{LocationPreset, PresetRegistry};
pub use api::{
    CsvFormatter, FormattedMove, JsonFormatter, MoveRequest, PointerResolution, PoseResolver,
    PresetResolution, ResolutionFormatter, TextFormatter,
};
pub use utils::config::{ConfigError, HomeConfig, LocationConfig, ResolverConfig, ValidationResult};
pub use battery::{BatteryReading, BatteryStatus, IndicatorColor};
