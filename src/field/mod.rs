//! Scalar field sources that score frontier candidates

/// Wandering goal point for location-based preference
pub mod goal;
/// Smooth noise field over pixel coordinates
pub mod perlin;

pub use goal::GoalAttractor;
pub use perlin::PerlinField;
