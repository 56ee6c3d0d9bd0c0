/// Error types for baking.
pub mod error;

/// Core type definitions for a bake run.
pub mod types;

/// Image decode/encode and frame file naming.
pub mod image_io;

pub use error::BakeError;
pub use types::{BakeConfig, BakedFrame, LightSetup, DEFAULT_DIFFUSE_COLOR, DEFAULT_SWEEP_Z};

use normal_lighting::{render_lights, LightSweep, LightVector, MaterialModel, PixelGrid};
use std::fs;
use std::time::Instant;

/// Resolve the configured light setup into an ordered list of light vectors.
pub fn light_vectors(setup: &LightSetup) -> Result<Vec<LightVector>, BakeError> {
    let lights = match *setup {
        LightSetup::Sweep { frames, z } => LightSweep::new(frames, z)?
            .iter()
            .collect::<Result<Vec<_>, _>>()?,
        LightSetup::Fixed(direction) => vec![LightVector::new(direction)?],
    };
    Ok(lights)
}

/// Light the configured maps and return the frames in memory, without writing.
pub fn render(config: &BakeConfig) -> Result<Vec<PixelGrid>, BakeError> {
    let material = MaterialModel::new(config.material)?;
    let lights = light_vectors(&config.lights)?;

    let normal = image_io::load_grid(&config.normal_map)?;
    let diffuse = match &config.diffuse_map {
        Some(path) => image_io::load_grid(path)?,
        None => {
            log::info!(
                "No diffuse map, using constant color {:?}",
                config.diffuse_color
            );
            PixelGrid::filled(normal.width(), normal.height(), config.diffuse_color)
        }
    };

    let start = Instant::now();
    let frames = render_lights(&normal, &diffuse, &lights, &material)?;
    log::info!(
        "Lit {} frame(s) of {}×{} in {:.3}s",
        frames.len(),
        normal.width(),
        normal.height(),
        start.elapsed().as_secs_f64()
    );
    Ok(frames)
}

/// Light the configured maps and write one image per frame.
///
/// Nothing is written if any frame fails.
pub fn bake(config: &BakeConfig) -> Result<Vec<BakedFrame>, BakeError> {
    let frames = render(config)?;

    if let Some(parent) = config.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let count = u32::try_from(frames.len())
        .map_err(|_| BakeError::Validation(format!("too many frames: {}", frames.len())))?;
    let mut baked = Vec::with_capacity(frames.len());
    for (index, frame) in (1..=count).zip(&frames) {
        let path = image_io::frame_path(&config.output, index, count);
        image_io::write_grid(frame, &path)?;
        log::info!("Wrote frame {}/{}: {}", index, count, path.display());
        baked.push(BakedFrame {
            index,
            path,
            width: frame.width(),
            height: frame.height(),
        });
    }

    Ok(baked)
}
