//! Fixed map and display parameters

/// Metric span of the dashboard map viewport on each axis (meters)
pub const MAP_SPAN_METERS: f64 = 20.0;

/// Decimal places used when surfacing click-derived coordinates
pub const DISPLAY_DECIMALS: u8 = 1;

/// Location id of the home (reception) dock
pub const HOME_LOCATION_ID: &str = "home";
