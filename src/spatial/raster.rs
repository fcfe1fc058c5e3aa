//! Fixed-size RGB raster with a fill-once discipline

use ndarray::Array2;

/// Output pixel grid plus the filled mask that drives the growth process
///
/// Cells transition unfilled to filled exactly once and never back; a filled
/// cell's color is immutable.
#[derive(Debug, Clone)]
pub struct Raster {
    pixels: Array2<[u8; 3]>,
    filled: Array2<bool>,
    width: usize,
    height: usize,
    count: usize,
}

impl Raster {
    /// Create an all-unfilled raster
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: Array2::from_elem((width, height), [0, 0, 0]),
            filled: Array2::from_elem((width, height), false),
            width,
            height,
            count: 0,
        }
    }

    /// Raster width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of filled cells
    pub const fn filled_count(&self) -> usize {
        self.count
    }

    /// Whether every cell has been assigned a color
    pub const fn is_complete(&self) -> bool {
        self.count == self.width * self.height
    }

    /// Whether signed coordinates land inside the raster
    pub fn in_bounds(&self, i: i32, j: i32) -> bool {
        i >= 0 && (i as usize) < self.width && j >= 0 && (j as usize) < self.height
    }

    /// Whether the cell at (i, j) has been assigned a color
    pub fn is_filled(&self, i: usize, j: usize) -> bool {
        self.filled.get([i, j]).copied().unwrap_or(false)
    }

    /// Color of a filled cell; `None` while unfilled or out of bounds
    pub fn pixel(&self, i: usize, j: usize) -> Option<[u8; 3]> {
        if self.is_filled(i, j) {
            self.pixels.get([i, j]).copied()
        } else {
            None
        }
    }

    /// Assign a color to an unfilled cell
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds or was already filled; every cell
    /// is assigned exactly once.
    pub fn fill(&mut self, i: usize, j: usize, color: [u8; 3]) {
        let cell = self
            .filled
            .get_mut([i, j])
            .expect("fill lands inside the raster");
        assert!(!*cell, "cell ({i}, {j}) filled twice");
        *cell = true;
        if let Some(pixel) = self.pixels.get_mut([i, j]) {
            *pixel = color;
        }
        self.count += 1;
    }
}
