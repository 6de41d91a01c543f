//! Configuration module for FinTrack
//!
//! Command-line driven session settings.

pub mod settings;

pub use settings::{LogLevel, Settings, DEFAULT_SORT};
