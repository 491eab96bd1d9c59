//! Core data types for pose resolution

use serde::{Deserialize, Serialize};

/// Planar position in the map's metric frame (meters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldCoordinate {
    pub x: f64,
    pub y: f64,
}

impl WorldCoordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round both axes independently to the given number of decimal places.
    ///
    /// Used to surface click-derived coordinates in the form's editable
    /// fields; preset coordinates are never rounded.
    pub fn rounded(&self, decimals: u8) -> Self {
        let scale = 10f64.powi(decimals as i32);
        Self {
            x: (self.x * scale).round() / scale,
            y: (self.y * scale).round() / scale,
        }
    }
}

/// Fractional pointer offsets within the map viewport
///
/// Both axes are normally in `[0, 1]`; clicks landing past the viewport
/// edge produce values outside that range and are passed through without
/// clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerRatio {
    pub x: f64,
    pub y: f64,
}

impl PointerRatio {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Robot pose: position, floor and heading in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// East-west position (meters)
    pub x: f64,
    /// North-south position (meters)
    pub y: f64,
    /// Building floor, 1-based
    pub floor: u32,
    /// Heading in degrees; any real value, interpreted mod 360
    pub yaw: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, floor: u32, yaw: f64) -> Self {
        Self { x, y, floor, yaw }
    }

    /// Planar position component of the pose
    pub fn world(&self) -> WorldCoordinate {
        WorldCoordinate::new(self.x, self.y)
    }

    /// Heading folded into `[0, 360)`. The stored value is kept as given.
    pub fn yaw_wrapped(&self) -> f64 {
        self.yaw.rem_euclid(360.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_to_one_decimal() {
        let coord = WorldCoordinate::new(1.2345, -7.8912);
        let rounded = coord.rounded(1);

        assert!((rounded.x - 1.2).abs() < 1e-12);
        assert!((rounded.y - (-7.9)).abs() < 1e-12);
    }

    #[test]
    fn test_rounding_leaves_exact_values() {
        let coord = WorldCoordinate::new(2.0, 0.81);

        assert_eq!(coord.rounded(2), coord);
    }

    #[test]
    fn test_yaw_wrapping() {
        assert!((Pose::new(0.0, 0.0, 1, 450.0).yaw_wrapped() - 90.0).abs() < 1e-12);
        assert!((Pose::new(0.0, 0.0, 1, -90.0).yaw_wrapped() - 270.0).abs() < 1e-12);
        assert!((Pose::new(0.0, 0.0, 1, 123.561).yaw_wrapped() - 123.561).abs() < 1e-12);
    }

    #[test]
    fn test_yaw_wrapping_does_not_mutate() {
        let pose = Pose::new(0.0, 0.0, 1, 720.0);
        let _ = pose.yaw_wrapped();

        assert_eq!(pose.yaw, 720.0);
    }
}
