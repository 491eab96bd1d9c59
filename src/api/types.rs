//! Common API types

use serde::{Deserialize, Serialize};

use crate::core::types::{Pose, WorldCoordinate};

/// Movement command payload handed to the robot-command sink
///
/// This is the only calibrated value that leaves the library. The caller
/// forwards it verbatim; nothing here talks to the robot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub x: f64,
    pub y: f64,
    pub floor: u32,
    pub yaw: f64,
    /// Room label for operator-facing logs; absent for plain map clicks
    pub room: Option<String>,
}

impl MoveRequest {
    pub fn from_pose(pose: &Pose, room: Option<String>) -> Self {
        Self {
            x: pose.x,
            y: pose.y,
            floor: pose.floor,
            yaw: pose.yaw,
            room,
        }
    }

    /// Pose component of the command
    pub fn pose(&self) -> Pose {
        Pose::new(self.x, self.y, self.floor, self.yaw)
    }
}

/// Result of resolving a named location
///
/// `display` is the nominal preset pose shown on screen; `command` carries
/// the calibrated pose sent to the robot. The two differ by design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetResolution {
    pub display: Pose,
    pub command: MoveRequest,
}

/// Result of resolving a pointer click
///
/// `display` is rounded to the form's precision and is the authoritative
/// value for the editable fields and any command built from them; `world`
/// keeps full precision for marker placement only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerResolution {
    pub world: WorldCoordinate,
    pub display: WorldCoordinate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_request_from_pose() {
        let pose = Pose::new(1.508, 0.81, 1, 0.421);
        let request = MoveRequest::from_pose(&pose, Some("Room No 101".to_string()));

        assert_eq!(request.pose(), pose);
        assert_eq!(request.room.as_deref(), Some("Room No 101"));
    }
}
