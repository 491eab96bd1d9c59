//! Dashboard-facing API
//!
//! The resolver facade the UI shell calls into, the request/response types
//! it exchanges, and output formatting for operator text, JSON and CSV.

pub mod resolver;
pub mod types;
pub mod formatting;

pub use resolver::PoseResolver;
pub use types::{MoveRequest, PointerResolution, PresetResolution};
pub use formatting::{
    CsvFormatter, FormattedMove, JsonFormatter, PoseFields, ResolutionFormatter, TextFormatter,
};
