//! Output formatting for resolved commands
//!
//! Dashboard-facing renditions of a resolution: operator text for toasts
//! and status lines, JSON for the command log, CSV for session export.
//! Formatting never alters coordinate values beyond printed precision.

use serde::{Deserialize, Serialize};

use crate::api::types::{MoveRequest, PointerResolution, PresetResolution};

/// Pose fields as printed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseFields {
    pub x: f64,
    pub y: f64,
    pub floor: u32,
    pub yaw: f64,
}

impl PoseFields {
    fn from_request(request: &MoveRequest) -> Self {
        Self {
            x: request.x,
            y: request.y,
            floor: request.floor,
            yaw: request.yaw,
        }
    }
}

/// Serializable flat view of a resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedMove {
    /// Operator-facing room label, when the command targets a named location
    pub room: Option<String>,
    /// Calibrated command fields, as handed to the robot
    pub command: PoseFields,
    /// Nominal on-screen pose when the command came from a preset
    pub display: Option<PoseFields>,
}

/// Builds [`FormattedMove`] views from resolver outputs
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolutionFormatter;

impl ResolutionFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Flatten a bare move request (e.g. one built from form fields)
    pub fn format_command(&self, request: &MoveRequest) -> FormattedMove {
        FormattedMove {
            room: request.room.clone(),
            command: PoseFields::from_request(request),
            display: None,
        }
    }

    /// Flatten a preset resolution, keeping the display pose alongside
    pub fn format_preset(&self, resolution: &PresetResolution) -> FormattedMove {
        FormattedMove {
            room: resolution.command.room.clone(),
            command: PoseFields::from_request(&resolution.command),
            display: Some(PoseFields {
                x: resolution.display.x,
                y: resolution.display.y,
                floor: resolution.display.floor,
                yaw: resolution.display.yaw,
            }),
        }
    }
}

/// Human-readable text output
pub struct TextFormatter {
    /// Single-line output when set
    pub compact: bool,
    /// Printed decimal places
    pub precision: usize,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            compact: false,
            precision: 3,
        }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self {
            compact: true,
            ..Default::default()
        }
    }

    /// Format a resolved move as operator text
    pub fn format_text(&self, formatted: &FormattedMove) -> String {
        let p = self.precision;
        let command = &formatted.command;

        if self.compact {
            let label = formatted.room.as_deref().unwrap_or("manual");
            return format!(
                "{}: ({:.p$}, {:.p$}) floor {} yaw {:.p$}°",
                label, command.x, command.y, command.floor, command.yaw,
            );
        }

        let mut text = String::new();
        if let Some(room) = &formatted.room {
            text.push_str(&format!("Target: {}\n", room));
        }
        text.push_str(&format!("  x: {:.p$} m\n", command.x));
        text.push_str(&format!("  y: {:.p$} m\n", command.y));
        text.push_str(&format!("  floor: {}\n", command.floor));
        text.push_str(&format!("  yaw: {:.p$}°\n", command.yaw));
        if let Some(display) = &formatted.display {
            text.push_str(&format!(
                "  shown as: ({:.p$}, {:.p$}) yaw {:.p$}°\n",
                display.x, display.y, display.yaw,
            ));
        }
        text
    }

    /// Format a pointer selection the way the dashboard announces it
    pub fn format_pointer(&self, resolution: &PointerResolution) -> String {
        format!(
            "Coordinates: ({}, {})",
            resolution.display.x, resolution.display.y
        )
    }
}

/// JSON formatter for the command log
pub struct JsonFormatter {
    /// Pretty print JSON
    pub pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pretty-printing JSON formatter
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Format a resolved move as a JSON string
    pub fn format_json(&self, formatted: &FormattedMove) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(formatted)
        } else {
            serde_json::to_string(formatted)
        }
    }
}

/// CSV formatter for session export
pub struct CsvFormatter {
    /// Include header row
    pub include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self {
            include_header: true,
        }
    }
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// CSV header matching [`CsvFormatter::format_csv`] rows
    pub fn header(&self) -> String {
        "room,x,y,floor,yaw,display_x,display_y,display_yaw".to_string()
    }

    /// Format a resolved move as a CSV row
    pub fn format_csv(&self, formatted: &FormattedMove) -> String {
        let command = &formatted.command;
        let (display_x, display_y, display_yaw) = match &formatted.display {
            Some(display) => (
                format!("{:.3}", display.x),
                format!("{:.3}", display.y),
                format!("{:.3}", display.yaw),
            ),
            None => (String::new(), String::new(), String::new()),
        };

        format!(
            "{},{:.3},{:.3},{},{:.3},{},{},{}",
            formatted.room.as_deref().unwrap_or(""),
            command.x,
            command.y,
            command.floor,
            command.yaw,
            display_x,
            display_y,
            display_yaw,
        )
    }
}
