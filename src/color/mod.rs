//! Color values, the nearest-neighbor tree over them, and the consumable
//! palette pool

/// Nearest-neighbor index over palette colors with multiplicity accounting
pub mod kdtree;
/// Consumable color pool combining the tree with a linear vector
pub mod palette;
/// RGB color values treated as points in 3-D Euclidean space
pub mod rgb;

pub use kdtree::KdTree;
pub use palette::Palette;
pub use rgb::Color;
