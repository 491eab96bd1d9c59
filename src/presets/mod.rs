//! Named-location presets
//!
//! The dashboard offers one-tap targets for the mapped rooms plus the home
//! (reception) dock. Presets store the nominal, uncalibrated pose shown on
//! screen; the calibrated command is derived separately at resolution time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::types::Pose;

/// Raw named target: nominal pose plus the operator-facing room label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPreset {
    pub pose: Pose,
    pub room: String,
}

impl LocationPreset {
    pub fn new(pose: Pose, room: impl Into<String>) -> Self {
        Self {
            pose,
            room: room.into(),
        }
    }
}

/// Registry of selectable locations
///
/// The home dock is held separately and is not a keyed preset: looking up
/// `"home"` by id yields nothing, mirroring the dashboard where the home
/// button takes a different path than the room buttons.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    presets: HashMap<String, LocationPreset>,
    home: LocationPreset,
}

impl PresetRegistry {
    /// Create an empty registry with the given home dock
    pub fn new(home: LocationPreset) -> Self {
        Self {
            presets: HashMap::new(),
            home,
        }
    }

    /// The deployed hospital map: six rooms plus the reception dock
    pub fn builtin() -> Self {
        let home = LocationPreset::new(Pose::new(0.2, 2.6, 1, 0.0), "home");
        let mut registry = Self::new(home);
        registry.insert("101", LocationPreset::new(Pose::new(2.0, 0.81, 1, 62.0), "Room No 101"));
        registry.insert("102", LocationPreset::new(Pose::new(0.0, 0.0, 1, 0.0), "Room No 102"));
        registry.insert("103", LocationPreset::new(Pose::new(2.3, -0.5, 1, 0.0), "Room No 103"));
        registry.insert("104", LocationPreset::new(Pose::new(-3.0, -7.0, 3, 270.0), "Room No 104"));
        registry.insert("105", LocationPreset::new(Pose::new(4.0, -2.0, 1, 0.0), "Room No 105"));
        registry.insert("106", LocationPreset::new(Pose::new(-6.0, 8.0, 1, 45.0), "Room No 106"));
        registry
    }

    pub fn insert(&mut self, location_id: impl Into<String>, preset: LocationPreset) {
        self.presets.insert(location_id.into(), preset);
    }

    /// Preset for a location id, if one is registered
    pub fn get(&self, location_id: &str) -> Option<&LocationPreset> {
        self.presets.get(location_id)
    }

    /// The home dock preset
    pub fn home(&self) -> &LocationPreset {
        &self.home
    }

    /// Registered location ids in sorted order, for stable button layout
    pub fn location_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_contents() {
        let registry = PresetRegistry::builtin();

        assert_eq!(registry.len(), 6);
        assert_eq!(
            registry.location_ids(),
            vec!["101", "102", "103", "104", "105", "106"]
        );
    }

    #[test]
    fn test_lookup_by_id() {
        let registry = PresetRegistry::builtin();

        let preset = registry.get("104").unwrap();
        assert_eq!(preset.pose, Pose::new(-3.0, -7.0, 3, 270.0));
        assert_eq!(preset.room, "Room No 104");

        assert!(registry.get("999").is_none());
    }

    #[test]
    fn test_home_is_not_a_keyed_preset() {
        let registry = PresetRegistry::builtin();

        assert!(registry.get("home").is_none());
        assert_eq!(registry.home().pose, Pose::new(0.2, 2.6, 1, 0.0));
        assert_eq!(registry.home().room, "home");
    }
}
