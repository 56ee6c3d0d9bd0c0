//! Light directions for multi-frame sweeps.
//!
//! Frame `i` of `N` places the light on a circle in the XY plane at
//! `θ = (i - 1) / N · 2π` with a fixed z component, then normalizes.

use crate::error::LightError;
use crate::math;
use glam::DVec3;
use std::f64::consts::TAU;

/// A unit-length light direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightVector(DVec3);

impl LightVector {
    /// Normalize `direction` into a light vector.
    pub fn new(direction: DVec3) -> Result<Self, LightError> {
        math::normalize(direction).map(Self)
    }

    pub fn direction(&self) -> DVec3 {
        self.0
    }
}

/// Light vector for frame `frame_index` (1-based) of `frame_count`.
pub fn generate(frame_index: u32, frame_count: u32, z: f64) -> Result<LightVector, LightError> {
    if frame_count == 0 || frame_index == 0 || frame_index > frame_count {
        return Err(LightError::InvalidFrame {
            index: frame_index,
            count: frame_count,
        });
    }
    let theta = f64::from(frame_index - 1) / f64::from(frame_count) * TAU;
    LightVector::new(DVec3::new(theta.cos(), theta.sin(), z))
}

/// A finite, restartable sequence of `frame_count` sweep light vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSweep {
    frame_count: u32,
    z: f64,
}

impl LightSweep {
    pub fn new(frame_count: u32, z: f64) -> Result<Self, LightError> {
        if frame_count == 0 {
            return Err(LightError::InvalidFrame { index: 0, count: 0 });
        }
        if !z.is_finite() {
            return Err(LightError::DegenerateVector { pixel: None });
        }
        Ok(Self { frame_count, z })
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Iterate the sweep from frame 1.
    pub fn iter(&self) -> LightSweepIter {
        LightSweepIter {
            sweep: *self,
            next_index: 1,
        }
    }
}

impl IntoIterator for LightSweep {
    type Item = Result<LightVector, LightError>;
    type IntoIter = LightSweepIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`LightSweep`], yielding frames in order.
#[derive(Debug, Clone)]
pub struct LightSweepIter {
    sweep: LightSweep,
    next_index: u64,
}

impl Iterator for LightSweepIter {
    type Item = Result<LightVector, LightError>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = u32::try_from(self.next_index).ok()?;
        if index > self.sweep.frame_count {
            return None;
        }
        self.next_index += 1;
        Some(generate(index, self.sweep.frame_count, self.sweep.z))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let end = u64::from(self.sweep.frame_count) + 1;
        let remaining = end.saturating_sub(self.next_index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LightSweepIter {}
