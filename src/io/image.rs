//! PNG export for completed rasters

use image::{Rgb, RgbImage};

use crate::io::error::{GrowthError, Result};
use crate::spatial::raster::Raster;

/// Write the raster as a PNG image
///
/// Unfilled cells, possible only when a run was interrupted, export as
/// black.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_raster_as_png(raster: &Raster, output_path: &str) -> Result<()> {
    let mut img = RgbImage::new(raster.width() as u32, raster.height() as u32);

    for i in 0..raster.width() {
        for j in 0..raster.height() {
            let rgb = raster.pixel(i, j).unwrap_or([0, 0, 0]);
            img.put_pixel(i as u32, j as u32, Rgb(rgb));
        }
    }

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| GrowthError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| GrowthError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
