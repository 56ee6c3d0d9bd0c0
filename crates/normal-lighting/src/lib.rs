//! Per-pixel lighting of tangent-space normal maps.
//!
//! Takes a normal map and a diffuse map as decoded RGB grids and produces a
//! lit RGB grid per light vector. Image decoding, file handling and progress
//! reporting live in the caller.

/// Error types for lighting.
pub mod error;

/// Row-major RGB pixel grids.
pub mod grid;

/// Dot product, reflection and normalization.
pub mod math;

/// Light directions for animated sweeps.
pub mod sweep;

/// Fixed lighting coefficients.
pub mod material;

/// Single-pixel lighting evaluation.
pub mod lighting;

/// Lit color memoization.
pub mod cache;

/// Whole-frame and multi-frame rendering.
pub mod render;

pub use cache::{CacheKey, LitColorSource, PixelLightingCache, Uncached};
pub use error::LightError;
pub use grid::{Channel, PixelGrid, Rgb8, RGB_CHANNELS};
pub use material::{MaterialModel, MaterialParams};
pub use render::{
    render_frame, render_frame_banded, render_frame_with, render_lights, render_sweep,
    validate_inputs, BAND_ROWS,
};
pub use sweep::{LightSweep, LightVector};

pub use glam::DVec3;
