//! Memoization of lit colors by encoded (diffuse, normal) color pair.
//!
//! A cache is only valid for a single light vector. The renderer creates a
//! fresh one per frame.

use crate::error::LightError;
use crate::grid::Rgb8;
use std::collections::HashMap;

/// Raw encoded colors that fully determine a pixel's lit result for one light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub diffuse: Rgb8,
    pub normal: Rgb8,
}

/// Source of lit colors for the frame renderer.
pub trait LitColorSource {
    /// Return the lit color for `key`, running `compute` if needed.
    fn resolve<F>(&mut self, key: CacheKey, compute: F) -> Result<Rgb8, LightError>
    where
        F: FnOnce() -> Result<Rgb8, LightError>;

    /// Number of times `compute` has been run.
    fn evaluations(&self) -> usize;
}

/// Per-frame lit color cache. Computes each key at most once.
#[derive(Debug, Default)]
pub struct PixelLightingCache {
    entries: HashMap<CacheKey, Rgb8>,
    evaluations: usize,
    hits: usize,
}

impl PixelLightingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stored value for `key`, computing and storing it on a miss.
    ///
    /// A failed computation is not stored.
    pub fn get_or_compute<F>(&mut self, key: CacheKey, compute: F) -> Result<Rgb8, LightError>
    where
        F: FnOnce() -> Result<Rgb8, LightError>,
    {
        if let Some(&color) = self.entries.get(&key) {
            self.hits += 1;
            return Ok(color);
        }
        self.evaluations += 1;
        let color = compute()?;
        self.entries.insert(key, color);
        Ok(color)
    }

    pub fn get(&self, key: &CacheKey) -> Option<Rgb8> {
        self.entries.get(key).copied()
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Drop all entries and counters, for reuse under a new light vector.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.evaluations = 0;
        self.hits = 0;
    }
}

impl LitColorSource for PixelLightingCache {
    fn resolve<F>(&mut self, key: CacheKey, compute: F) -> Result<Rgb8, LightError>
    where
        F: FnOnce() -> Result<Rgb8, LightError>,
    {
        self.get_or_compute(key, compute)
    }

    fn evaluations(&self) -> usize {
        self.evaluations
    }
}

/// Recomputes every pixel. Same output as [`PixelLightingCache`], only slower.
#[derive(Debug, Default)]
pub struct Uncached {
    evaluations: usize,
}

impl LitColorSource for Uncached {
    fn resolve<F>(&mut self, _key: CacheKey, compute: F) -> Result<Rgb8, LightError>
    where
        F: FnOnce() -> Result<Rgb8, LightError>,
    {
        self.evaluations += 1;
        compute()
    }

    fn evaluations(&self) -> usize {
        self.evaluations
    }
}
