//! Procedural image growth with a unique color per pixel
//!
//! Starting from one seed pixel, a frontier of candidates expands outward;
//! each iteration fills one pixel with a color popped from a pre-enumerated
//! palette, chosen to match the already-filled neighbors. The palette is
//! indexed by a k-d tree with multiplicity accounting, so every color is
//! consumed at most as often as it was enumerated.

#![forbid(unsafe_code)]

/// The growth loop and its configuration
pub mod algorithm;
/// Color values, the nearest-neighbor tree, and the palette pool
pub mod color;
/// Scalar field sources that score frontier candidates
pub mod field;
/// Input/output operations and error handling
pub mod io;
/// Spatial data structures: raster, frontier, candidate points
pub mod spatial;

pub use io::error::{GrowthError, Result};
