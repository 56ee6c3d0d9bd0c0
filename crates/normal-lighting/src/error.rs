use crate::grid::Channel;

/// Errors that can occur while lighting a normal map.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LightError {
    /// The normal map's first three channels are not R, G, B in that order.
    #[error("Normal map must start with R, G, B channels (found {channels:?})")]
    InvalidFormat { channels: Vec<Channel> },

    /// Normal and diffuse grids have different dimensions.
    #[error(
        "Dimension mismatch: normal map is {}×{}, diffuse map is {}×{}",
        .normal.0, .normal.1, .diffuse.0, .diffuse.1
    )]
    DimensionMismatch {
        normal: (u32, u32),
        diffuse: (u32, u32),
    },

    /// A zero-length vector reached normalize or reflect.
    #[error("Degenerate (zero-length) vector{}", pixel_suffix(.pixel))]
    DegenerateVector { pixel: Option<usize> },

    /// A grid was built with the wrong number of pixels for its dimensions.
    #[error("Pixel count mismatch: expected {expected}, got {actual}")]
    PixelCount { expected: usize, actual: usize },

    /// Frame index outside 1..=count, or a zero frame count.
    #[error("Invalid frame {index} of {count}")]
    InvalidFrame { index: u32, count: u32 },

    /// A material coefficient is negative or not finite.
    #[error("Invalid material: {0}")]
    InvalidMaterial(String),
}

impl LightError {
    /// Attach a flat pixel index to a degenerate-vector error.
    pub(crate) fn at_pixel(self, index: usize) -> Self {
        match self {
            LightError::DegenerateVector { .. } => LightError::DegenerateVector { pixel: Some(index) },
            other => other,
        }
    }
}

fn pixel_suffix(pixel: &Option<usize>) -> String {
    match pixel {
        Some(index) => format!(" at pixel {index}"),
        None => String::new(),
    }
}
