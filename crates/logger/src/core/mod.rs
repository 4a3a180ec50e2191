//! Core types shared by the rest of the crate.
//!
//! ### [`error`] - Error handling
//! [`LogError`] and the [`LogResult`] alias returned by every fallible
//! operation in the crate.

pub mod error;

pub use error::{LogError, LogResult};
