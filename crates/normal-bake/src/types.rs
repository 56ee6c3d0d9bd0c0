use normal_lighting::{DVec3, MaterialParams, Rgb8};
use std::path::PathBuf;

/// Material diffuse used when no diffuse map is given: round(255 · (0.31, 0.6, 0.6)).
pub const DEFAULT_DIFFUSE_COLOR: Rgb8 = [79, 153, 153];

/// How light vectors are chosen for a bake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightSetup {
    /// `frames` lights evenly spaced around the Z axis at height `z`.
    Sweep { frames: u32, z: f64 },
    /// A single light along the given direction (normalized before use).
    Fixed(DVec3),
}

/// Default sweep height when only a frame count is given.
pub const DEFAULT_SWEEP_Z: f64 = 1.0;

impl Default for LightSetup {
    /// A single light along +X.
    fn default() -> Self {
        LightSetup::Fixed(DVec3::X)
    }
}

/// Configuration for one bake run.
#[derive(Debug, Clone)]
pub struct BakeConfig {
    /// Tangent-space normal map (RGB or RGBA).
    pub normal_map: PathBuf,
    /// Diffuse map. When absent every pixel uses `diffuse_color`.
    pub diffuse_map: Option<PathBuf>,
    /// Output image path. Sweeps insert a frame number before the extension.
    pub output: PathBuf,
    pub lights: LightSetup,
    pub material: MaterialParams,
    pub diffuse_color: Rgb8,
}

impl BakeConfig {
    /// Config with default lighting and material for the given paths.
    pub fn new(normal_map: PathBuf, output: PathBuf) -> Self {
        Self {
            normal_map,
            diffuse_map: None,
            output,
            lights: LightSetup::default(),
            material: MaterialParams::default(),
            diffuse_color: DEFAULT_DIFFUSE_COLOR,
        }
    }
}

/// A frame written to disk.
#[derive(Debug, Clone)]
pub struct BakedFrame {
    /// 1-based frame index.
    pub index: u32,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}
