//! Shared types for the release statistics tool.
//!
//! Holds the data model exchanged between the history and chart stages, the
//! error type, timestamp parsing and the command-line settings.

pub mod error;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{Result, StatsError};
