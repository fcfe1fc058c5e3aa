//! Input/output: CLI, PNG export, progress display, and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Runtime configuration defaults
pub mod configuration;
/// Error types and the crate-wide result alias
pub mod error;
/// PNG export for completed rasters
pub mod image;
/// Progress display for a single growth run
pub mod progress;
