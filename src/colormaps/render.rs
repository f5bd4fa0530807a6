//! Colorbar rendering for visual inspection of a colormap.

use image::{ImageBuffer, RgbaImage};
use std::path::Path;
use tracing::info;

use crate::colormaps::colormap::ColorSampler;
use crate::error::{ColormapError, Result};

/// Render `sampler` as a horizontal colorbar, position 0 on the left
pub fn render_colorbar(sampler: &dyn ColorSampler, width: u32, height: u32) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(ColormapError::InvalidParameter {
            param: "size".to_string(),
            message: format!("colorbar size must be non-zero, got {}x{}", width, height),
        });
    }

    let mut img = ImageBuffer::new(width, height);
    let span = (width.max(2) - 1) as f64;

    for x in 0..width {
        let color = image::Rgba(sampler.map_normalized(x as f64 / span));
        for y in 0..height {
            img.put_pixel(x, y, color);
        }
    }

    Ok(img)
}

/// Render a colorbar and write it as PNG
pub fn save_colorbar(
    sampler: &dyn ColorSampler,
    path: impl AsRef<Path>,
    width: u32,
    height: u32,
) -> Result<()> {
    let path = path.as_ref();
    let img = render_colorbar(sampler, width, height)?;
    img.save_with_format(path, image::ImageFormat::Png)?;

    info!(
        operation = "save_colorbar",
        colormap = sampler.name(),
        path = %path.display(),
        width = width,
        height = height,
        "Colorbar written"
    );
    Ok(())
}
