//! Row-major RGB pixel grids.

use crate::error::LightError;

/// One 8-bit RGB pixel.
pub type Rgb8 = [u8; 3];

/// Channel label of the image a grid was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
    Luma,
    Other,
}

/// Channel order every grid is assumed to have unless told otherwise.
pub const RGB_CHANNELS: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

/// A width×height grid of RGB pixels, top-to-bottom then left-to-right.
///
/// `channels` records the channel labels of the source image. Pixel data is
/// always stored as RGB triplets; a trailing alpha channel is dropped before
/// the grid is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    channels: Vec<Channel>,
    pixels: Vec<Rgb8>,
}

impl PixelGrid {
    /// Build an RGB grid. `pixels.len()` must equal `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb8>) -> Result<Self, LightError> {
        Self::with_channels(width, height, RGB_CHANNELS.to_vec(), pixels)
    }

    /// Build a grid that remembers the source image's channel labels.
    pub fn with_channels(
        width: u32,
        height: u32,
        channels: Vec<Channel>,
        pixels: Vec<Rgb8>,
    ) -> Result<Self, LightError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(LightError::PixelCount {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            pixels,
        })
    }

    /// Build a grid where every pixel has the same color.
    pub fn filled(width: u32, height: u32, color: Rgb8) -> Self {
        Self {
            width,
            height,
            channels: RGB_CHANNELS.to_vec(),
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Flat row-major pixel slice.
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb8]> {
        // chunks_exact panics on zero; a zero-width grid has no pixels anyway.
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    /// Flatten into packed RGB bytes, three per pixel.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// True if the first three channel labels are R, G, B in order.
    ///
    /// Only the labels that exist are compared, so a two-channel `R, G`
    /// layout passes while a luminance image fails.
    pub fn is_rgb(&self) -> bool {
        self.channels
            .iter()
            .zip(RGB_CHANNELS.iter())
            .all(|(actual, expected)| actual == expected)
    }
}
