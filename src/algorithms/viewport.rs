//! Map viewport transform between pointer space and world space
//!
//! The dashboard renders the hospital map inside a fixed metric window
//! centered on the map origin. Pointer events arrive as fractional offsets
//! within that window; the transform here is a pure affine map between the
//! two frames. Image resolution and zoom level only affect on-screen
//! rendering and never enter the coordinate math.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::core::constants::MAP_SPAN_METERS;
use crate::core::types::{PointerRatio, WorldCoordinate};

/// Fixed-size metric viewport centered on the map origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapViewport {
    /// Metric span covered on each axis (meters)
    pub span_m: f64,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self {
            span_m: MAP_SPAN_METERS,
        }
    }
}

impl MapViewport {
    /// Create a viewport with the given metric span
    pub fn new(span_m: f64) -> Self {
        Self { span_m }
    }

    /// Distance from the viewport center to an edge (meters)
    pub fn half_span(&self) -> f64 {
        self.span_m / 2.0
    }

    /// Map fractional pointer offsets to world coordinates.
    ///
    /// `(0.5, 0.5)` lands on the world origin; `(0, 0)` and `(1, 1)` are
    /// opposite viewport corners. Ratios outside `[0, 1]` extrapolate
    /// without clamping.
    pub fn pointer_to_world(&self, pointer: PointerRatio) -> WorldCoordinate {
        let world = Vector2::new(pointer.x, pointer.y) * self.span_m
            - Vector2::from_element(self.half_span());
        WorldCoordinate::new(world.x, world.y)
    }

    /// Inverse mapping, used to place the selection marker on screen
    pub fn world_to_pointer(&self, world: WorldCoordinate) -> PointerRatio {
        PointerRatio::new(
            (world.x + self.half_span()) / self.span_m,
            (world.y + self.half_span()) / self.span_m,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_origin() {
        let viewport = MapViewport::default();
        let world = viewport.pointer_to_world(PointerRatio::new(0.5, 0.5));

        assert!(world.x.abs() < 1e-12);
        assert!(world.y.abs() < 1e-12);
    }

    #[test]
    fn test_corners_map_to_span_extremes() {
        let viewport = MapViewport::default();

        let top_left = viewport.pointer_to_world(PointerRatio::new(0.0, 0.0));
        assert!((top_left.x - (-10.0)).abs() < 1e-12);
        assert!((top_left.y - (-10.0)).abs() < 1e-12);

        let bottom_right = viewport.pointer_to_world(PointerRatio::new(1.0, 1.0));
        assert!((bottom_right.x - 10.0).abs() < 1e-12);
        assert!((bottom_right.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_in_range_ratios_stay_within_half_span() {
        let viewport = MapViewport::default();

        for i in 0..=10 {
            for j in 0..=10 {
                let ratio = PointerRatio::new(i as f64 / 10.0, j as f64 / 10.0);
                let world = viewport.pointer_to_world(ratio);

                assert!(world.x >= -10.0 && world.x <= 10.0);
                assert!(world.y >= -10.0 && world.y <= 10.0);
            }
        }
    }

    #[test]
    fn test_out_of_range_ratios_extrapolate() {
        let viewport = MapViewport::default();
        let world = viewport.pointer_to_world(PointerRatio::new(1.5, -0.25));

        assert!((world.x - 20.0).abs() < 1e-12);
        assert!((world.y - (-15.0)).abs() < 1e-12);
    }

    #[test]
    fn test_pointer_world_round_trip() {
        let viewport = MapViewport::default();
        let original = PointerRatio::new(0.37, 0.81);

        let back = viewport.world_to_pointer(viewport.pointer_to_world(original));

        assert!((back.x - original.x).abs() < 1e-12);
        assert!((back.y - original.y).abs() < 1e-12);
    }

    #[test]
    fn test_custom_span() {
        let viewport = MapViewport::new(40.0);
        let world = viewport.pointer_to_world(PointerRatio::new(1.0, 0.0));

        assert!((world.x - 20.0).abs() < 1e-12);
        assert!((world.y - (-20.0)).abs() < 1e-12);
    }
}
