use crate::error::BakeError;
use image::{ColorType, DynamicImage, GenericImageView, RgbImage};
use normal_lighting::{Channel, PixelGrid, Rgb8};
use std::path::{Path, PathBuf};

/// Channel labels of a decoded image, in storage order.
fn channel_labels(color: ColorType) -> Vec<Channel> {
    match color {
        ColorType::L8 | ColorType::L16 => vec![Channel::Luma],
        ColorType::La8 | ColorType::La16 => vec![Channel::Luma, Channel::Alpha],
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => {
            vec![Channel::Red, Channel::Green, Channel::Blue]
        }
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => {
            vec![Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha]
        }
        _ => vec![Channel::Other],
    }
}

/// Convert a decoded image to an RGB grid, dropping alpha.
///
/// The grid keeps the source channel labels so a non-RGB normal map can be
/// rejected by the renderer.
pub fn image_to_grid(img: &DynamicImage) -> Result<PixelGrid, BakeError> {
    let (width, height) = img.dimensions();
    let channels = channel_labels(img.color());
    let pixels: Vec<Rgb8> = img.to_rgb8().pixels().map(|p| p.0).collect();
    Ok(PixelGrid::with_channels(width, height, channels, pixels)?)
}

/// Load an image file into an RGB grid.
pub fn load_grid(path: &Path) -> Result<PixelGrid, BakeError> {
    let img = image::open(path).map_err(|e| BakeError::ImageDecode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let grid = image_to_grid(&img)?;
    log::info!(
        "Loaded {} ({}×{}, {:?})",
        path.display(),
        grid.width(),
        grid.height(),
        img.color()
    );
    Ok(grid)
}

/// Write a grid as an 8-bit RGB image. The format follows the file extension.
pub fn write_grid(grid: &PixelGrid, path: &Path) -> Result<(), BakeError> {
    let encode_error = |message: String| BakeError::ImageEncode {
        path: path.to_path_buf(),
        message,
    };
    let img = RgbImage::from_raw(grid.width(), grid.height(), grid.to_rgb_bytes())
        .ok_or_else(|| encode_error("pixel buffer does not match dimensions".to_string()))?;
    img.save(path).map_err(|e| encode_error(e.to_string()))
}

/// Output path for frame `index` (1-based) of `count`.
///
/// A single frame uses `output` unchanged; sweeps become `<stem>_0001.<ext>`.
pub fn frame_path(output: &Path, index: u32, count: u32) -> PathBuf {
    if count <= 1 {
        return output.to_path_buf();
    }
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    let filename = match output.extension() {
        Some(ext) => format!("{}_{:04}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}_{:04}", stem, index),
    };
    output.with_file_name(filename)
}
