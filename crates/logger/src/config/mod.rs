//! Configuration types
//!
//! This module provides configuration types for the logger, organized into:
//! - `base`: Core configuration structs (Config, Format, Level)
//! - `writer`: Output destination parsing
//! - `presets`: Pre-configured setups (development, production) and env loading

mod base;
mod presets;
mod writer;

// Re-export all public types
pub use base::{Config, Format, Level};
pub use writer::Output;
