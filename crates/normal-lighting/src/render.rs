//! Frame rendering: one lit grid per light vector.

use crate::cache::{CacheKey, LitColorSource, PixelLightingCache};
use crate::error::LightError;
use crate::grid::{PixelGrid, Rgb8};
use crate::lighting;
use crate::material::MaterialModel;
use crate::sweep::{LightSweep, LightVector};

#[cfg(feature = "multithreaded")]
use rayon::prelude::*;

/// Check the preconditions shared by every frame of a run.
///
/// The normal map must be RGB-ordered and both grids must have the same
/// dimensions.
pub fn validate_inputs(normal: &PixelGrid, diffuse: &PixelGrid) -> Result<(), LightError> {
    if !normal.is_rgb() {
        return Err(LightError::InvalidFormat {
            channels: normal.channels().to_vec(),
        });
    }
    if normal.dimensions() != diffuse.dimensions() {
        return Err(LightError::DimensionMismatch {
            normal: normal.dimensions(),
            diffuse: diffuse.dimensions(),
        });
    }
    Ok(())
}

/// Render one frame with a fresh [`PixelLightingCache`].
pub fn render_frame(
    normal: &PixelGrid,
    diffuse: &PixelGrid,
    light: &LightVector,
    material: &MaterialModel,
) -> Result<PixelGrid, LightError> {
    let mut cache = PixelLightingCache::new();
    let frame = render_frame_with(normal, diffuse, light, material, &mut cache)?;
    log::debug!(
        "Lit {}×{} frame: {} distinct colors, {} cache hits",
        frame.width(),
        frame.height(),
        cache.len(),
        cache.hits()
    );
    Ok(frame)
}

/// Render one frame, resolving every pixel through `source`.
///
/// `source` must not hold results from a different light vector.
pub fn render_frame_with<S: LitColorSource>(
    normal: &PixelGrid,
    diffuse: &PixelGrid,
    light: &LightVector,
    material: &MaterialModel,
    source: &mut S,
) -> Result<PixelGrid, LightError> {
    validate_inputs(normal, diffuse)?;
    let lit = light_pixels(normal.pixels(), diffuse.pixels(), 0, light, material, source)?;
    PixelGrid::new(normal.width(), normal.height(), lit)
}

/// Render one frame split into bands of `band_rows` rows.
///
/// Each band has its own [`PixelLightingCache`], so a color repeated across
/// bands is evaluated once per band rather than once per frame. Bands render
/// in parallel under the `multithreaded` feature. The output matches
/// [`render_frame`].
pub fn render_frame_banded(
    normal: &PixelGrid,
    diffuse: &PixelGrid,
    light: &LightVector,
    material: &MaterialModel,
    band_rows: u32,
) -> Result<PixelGrid, LightError> {
    validate_inputs(normal, diffuse)?;

    let band_len = (normal.width() as usize).max(1) * (band_rows as usize).max(1);
    let bands: Vec<(usize, (&[Rgb8], &[Rgb8]))> = normal
        .pixels()
        .chunks(band_len)
        .zip(diffuse.pixels().chunks(band_len))
        .enumerate()
        .collect();
    let light_band = |(band, (normal_band, diffuse_band)): (usize, (&[Rgb8], &[Rgb8]))| {
        let mut cache = PixelLightingCache::new();
        light_pixels(
            normal_band,
            diffuse_band,
            band * band_len,
            light,
            material,
            &mut cache,
        )
    };

    #[cfg(feature = "multithreaded")]
    let lit: Vec<Vec<Rgb8>> = bands
        .into_par_iter()
        .map(light_band)
        .collect::<Result<_, _>>()?;

    #[cfg(not(feature = "multithreaded"))]
    let lit: Vec<Vec<Rgb8>> = bands
        .into_iter()
        .map(light_band)
        .collect::<Result<_, _>>()?;

    PixelGrid::new(normal.width(), normal.height(), lit.concat())
}

/// Light a row-major run of pixels starting at flat index `offset`.
fn light_pixels<S: LitColorSource>(
    normal: &[Rgb8],
    diffuse: &[Rgb8],
    offset: usize,
    light: &LightVector,
    material: &MaterialModel,
    source: &mut S,
) -> Result<Vec<Rgb8>, LightError> {
    let mut lit: Vec<Rgb8> = Vec::with_capacity(normal.len());
    for (index, (&normal_color, &diffuse_color)) in normal.iter().zip(diffuse).enumerate() {
        let key = CacheKey {
            diffuse: diffuse_color,
            normal: normal_color,
        };
        let color = source
            .resolve(key, || {
                lighting::evaluate(normal_color, diffuse_color, light, material)
            })
            .map_err(|e| e.at_pixel(offset + index))?;
        lit.push(color);
    }
    Ok(lit)
}

/// Rows per band when a single frame is split for parallel rendering.
pub const BAND_ROWS: u32 = 64;

/// Render one frame per light vector, in order.
///
/// Inputs are validated once up front, so a bad run fails before any frame
/// is rendered. A single light is rendered in row bands instead of whole.
pub fn render_lights(
    normal: &PixelGrid,
    diffuse: &PixelGrid,
    lights: &[LightVector],
    material: &MaterialModel,
) -> Result<Vec<PixelGrid>, LightError> {
    validate_inputs(normal, diffuse)?;

    if let [light] = lights {
        return Ok(vec![render_frame_banded(
            normal, diffuse, light, material, BAND_ROWS,
        )?]);
    }

    #[cfg(feature = "multithreaded")]
    let frames = lights
        .par_iter()
        .map(|light| render_frame(normal, diffuse, light, material))
        .collect();

    #[cfg(not(feature = "multithreaded"))]
    let frames = lights
        .iter()
        .map(|light| render_frame(normal, diffuse, light, material))
        .collect();

    frames
}

/// Render every frame of a light sweep.
pub fn render_sweep(
    normal: &PixelGrid,
    diffuse: &PixelGrid,
    sweep: &LightSweep,
    material: &MaterialModel,
) -> Result<Vec<PixelGrid>, LightError> {
    let lights = sweep.iter().collect::<Result<Vec<_>, _>>()?;
    log::debug!(
        "Rendering {} sweep frames at z = {}",
        lights.len(),
        sweep.z()
    );
    render_lights(normal, diffuse, &lights, material)
}
