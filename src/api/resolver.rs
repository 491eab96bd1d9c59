//! Pose resolver facade
//!
//! Single entry point for the dashboard shell: pointer clicks and preset
//! selections come in, display poses and calibrated move requests come
//! out. The resolver owns only immutable tables; every call is a pure
//! function of its inputs, and nothing here performs I/O or talks to the
//! robot. Rejecting non-numeric field input is the shell's job — this
//! module only ever sees numbers.

use crate::algorithms::calibration::{CalibrationTable, HomeCorrection};
use crate::algorithms::viewport::MapViewport;
use crate::api::types::{MoveRequest, PointerResolution, PresetResolution};
use crate::core::constants::HOME_LOCATION_ID;
use crate::core::types::{PointerRatio, Pose};
use crate::presets::{LocationPreset, PresetRegistry};
use crate::utils::config::{ConfigError, ResolverConfig};

/// Resolves pointer clicks and named locations into calibrated poses
#[derive(Debug, Clone)]
pub struct PoseResolver {
    viewport: MapViewport,
    registry: PresetRegistry,
    calibration: CalibrationTable,
    home_correction: HomeCorrection,
    display_decimals: u8,
}

impl PoseResolver {
    /// Resolver over the built-in hospital tables
    pub fn new() -> Self {
        Self::from_parts(&ResolverConfig::builtin())
    }

    /// Build a resolver from a validated configuration.
    ///
    /// Returns the first validation error if the configuration is not
    /// usable.
    pub fn from_config(config: &ResolverConfig) -> Result<Self, ConfigError> {
        let validation = config.validate();
        if let Some(error) = validation.errors.into_iter().next() {
            return Err(error);
        }
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: &ResolverConfig) -> Self {
        Self {
            viewport: config.viewport(),
            registry: config.registry(),
            calibration: config.calibration_table(),
            home_correction: config.home.correction,
            display_decimals: config.display_decimals,
        }
    }

    /// The map viewport this resolver translates against
    pub fn viewport(&self) -> &MapViewport {
        &self.viewport
    }

    /// Selectable location ids in sorted order
    pub fn location_ids(&self) -> Vec<&str> {
        self.registry.location_ids()
    }

    /// Raw preset for a location id, if registered
    pub fn preset(&self, location_id: &str) -> Option<&LocationPreset> {
        self.registry.get(location_id)
    }

    /// Translate a pointer click into world coordinates.
    ///
    /// `display` is rounded to the configured precision and is what the
    /// form fields hold; `world` keeps full precision for marker
    /// placement.
    pub fn resolve_from_pointer(&self, pointer: PointerRatio) -> PointerResolution {
        let world = self.viewport.pointer_to_world(pointer);
        PointerResolution {
            world,
            display: world.rounded(self.display_decimals),
        }
    }

    /// Apply the location's calibration offset to a raw pose.
    ///
    /// Unknown ids pass the pose through unchanged. One pass per
    /// resolution — the offset must not be applied again downstream.
    pub fn apply_calibration(&self, raw: &Pose, location_id: &str) -> Pose {
        self.calibration.apply(raw, location_id)
    }

    /// Resolve a named location into its display pose and calibrated
    /// command.
    ///
    /// Unknown ids yield `None`; the caller no-ops (and may notify the
    /// operator), nothing is sent.
    pub fn resolve_from_preset(&self, location_id: &str) -> Option<PresetResolution> {
        let preset = self.registry.get(location_id)?;
        let calibrated = self.calibration.apply(&preset.pose, location_id);
        Some(PresetResolution {
            display: preset.pose,
            command: MoveRequest::from_pose(&calibrated, Some(preset.room.clone())),
        })
    }

    /// Resolve the home dock.
    ///
    /// Home goes through the nominal table pass like any location (the
    /// shipped table has no "home" entry, so that pass is the identity)
    /// and then its own additive correction. The display pose is the
    /// table-pass result, before the correction.
    pub fn resolve_home(&self) -> PresetResolution {
        let home = self.registry.home();
        let nominal = self.calibration.apply(&home.pose, HOME_LOCATION_ID);
        let corrected = self.home_correction.apply(&nominal);
        PresetResolution {
            display: nominal,
            command: MoveRequest::from_pose(&corrected, Some(home.room.clone())),
        }
    }
}

impl Default for PoseResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::WorldCoordinate;

    #[test]
    fn test_pointer_resolution_center_and_corners() {
        let resolver = PoseResolver::new();

        let center = resolver.resolve_from_pointer(PointerRatio::new(0.5, 0.5));
        assert_eq!(center.display, WorldCoordinate::new(0.0, 0.0));

        let top_left = resolver.resolve_from_pointer(PointerRatio::new(0.0, 0.0));
        assert_eq!(top_left.display, WorldCoordinate::new(-10.0, -10.0));

        let bottom_right = resolver.resolve_from_pointer(PointerRatio::new(1.0, 1.0));
        assert_eq!(bottom_right.display, WorldCoordinate::new(10.0, 10.0));
    }

    #[test]
    fn test_pointer_resolution_rounds_display_only() {
        let resolver = PoseResolver::new();

        let result = resolver.resolve_from_pointer(PointerRatio::new(0.333, 0.667));

        assert!((result.world.x - (-3.34)).abs() < 1e-9);
        assert!((result.world.y - 3.34).abs() < 1e-9);
        assert!((result.display.x - (-3.3)).abs() < 1e-12);
        assert!((result.display.y - 3.3).abs() < 1e-12);
    }

    #[test]
    fn test_preset_101_command_is_calibrated() {
        let resolver = PoseResolver::new();

        let resolution = resolver.resolve_from_preset("101").unwrap();

        assert_eq!(resolution.display, Pose::new(2.0, 0.81, 1, 62.0));
        assert!((resolution.command.x - 1.508).abs() < 1e-9);
        assert!((resolution.command.y - 0.81).abs() < 1e-9);
        assert!((resolution.command.yaw - 0.421).abs() < 1e-9);
        assert_eq!(resolution.command.floor, 1);
        assert_eq!(resolution.command.room.as_deref(), Some("Room No 101"));
    }

    #[test]
    fn test_preset_104_command_equals_raw() {
        let resolver = PoseResolver::new();

        let resolution = resolver.resolve_from_preset("104").unwrap();

        assert_eq!(resolution.command.pose(), resolution.display);
        assert_eq!(resolution.display, Pose::new(-3.0, -7.0, 3, 270.0));
    }

    #[test]
    fn test_display_and_command_diverge_for_calibrated_rooms() {
        let resolver = PoseResolver::new();

        let resolution = resolver.resolve_from_preset("103").unwrap();

        assert_eq!(resolution.display, Pose::new(2.3, -0.5, 1, 0.0));
        assert!((resolution.command.x - 2.72).abs() < 1e-9);
        assert!((resolution.command.y - (-6.27)).abs() < 1e-9);
        assert!((resolution.command.yaw - (-146.296)).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_location_resolves_to_none() {
        let resolver = PoseResolver::new();

        assert!(resolver.resolve_from_preset("999").is_none());
        assert!(resolver.resolve_from_preset("home").is_none());
    }

    #[test]
    fn test_home_resolution() {
        let resolver = PoseResolver::new();

        let resolution = resolver.resolve_home();

        assert_eq!(resolution.display, Pose::new(0.2, 2.6, 1, 0.0));
        assert!((resolution.command.x - (-0.792)).abs() < 1e-9);
        assert!((resolution.command.y - 4.21).abs() < 1e-9);
        assert!((resolution.command.yaw - 123.561).abs() < 1e-9);
        assert_eq!(resolution.command.floor, 1);
        assert_eq!(resolution.command.room.as_deref(), Some("home"));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let resolver = PoseResolver::new();

        assert_eq!(
            resolver.resolve_from_preset("105"),
            resolver.resolve_from_preset("105")
        );
        assert_eq!(resolver.resolve_home(), resolver.resolve_home());
    }

    #[test]
    fn test_location_ids_are_sorted() {
        let resolver = PoseResolver::new();

        assert_eq!(
            resolver.location_ids(),
            vec!["101", "102", "103", "104", "105", "106"]
        );
    }

    #[test]
    fn test_from_config_rejects_invalid_tables() {
        let mut config = ResolverConfig::builtin();
        config.viewport_span_m = -1.0;

        assert!(PoseResolver::from_config(&config).is_err());
    }

    #[test]
    fn test_config_supplied_home_table_entry_participates() {
        // A site config may calibrate home through the table as well; the
        // additive correction still runs afterwards.
        let mut config = ResolverConfig::builtin();
        config.locations.push(crate::utils::config::LocationConfig {
            id: "home".to_string(),
            pose: config.home.pose,
            room: config.home.room.clone(),
            calibration: Some(crate::algorithms::calibration::CalibrationOffset::new(
                0.1, 0.0, 0.0,
            )),
        });

        let resolver = PoseResolver::from_config(&config).unwrap();
        let resolution = resolver.resolve_home();

        assert!((resolution.command.x - (0.2 - 0.1 - 0.992)).abs() < 1e-9);
        assert!((resolution.display.x - 0.1).abs() < 1e-9);
    }
}
