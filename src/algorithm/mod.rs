//! The growth loop and its configuration

/// Growth policies and validated run configuration
pub mod config;
/// Growth driver: frontier selection, color assignment, frontier extension
pub mod driver;

pub use config::{ColorPolicy, GrowthConfig, LocationPolicy, PreferencePolicy};
pub use driver::GrowthDriver;
