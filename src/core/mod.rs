//! Core types and constants for the pose resolution library

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
