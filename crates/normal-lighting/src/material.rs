//! Lighting coefficients fixed for one run.
//!
//! Material diffuse is not part of the model: it comes from the diffuse map,
//! one pixel at a time.

use crate::error::LightError;
use glam::DVec3;

/// Raw per-channel (R, G, B) coefficients used to build a [`MaterialModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialParams {
    pub emissive: DVec3,
    pub global_ambient: DVec3,
    pub material_ambient: DVec3,
    pub light_ambient: DVec3,
    pub light_diffuse: DVec3,
    pub light_specular: DVec3,
    pub material_specular: DVec3,
    pub shininess: f64,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            emissive: DVec3::ZERO,
            global_ambient: DVec3::splat(0.1),
            material_ambient: DVec3::splat(0.1),
            light_ambient: DVec3::splat(0.1),
            light_diffuse: DVec3::ONE,
            light_specular: DVec3::splat(0.4),
            material_specular: DVec3::ONE,
            shininess: 160.0,
        }
    }
}

/// Immutable lighting coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialModel {
    params: MaterialParams,
}

impl MaterialModel {
    /// Validate `params`: every coefficient must be finite and non-negative.
    pub fn new(params: MaterialParams) -> Result<Self, LightError> {
        let channels = [
            ("emissive", params.emissive),
            ("global ambient", params.global_ambient),
            ("material ambient", params.material_ambient),
            ("light ambient", params.light_ambient),
            ("light diffuse", params.light_diffuse),
            ("light specular", params.light_specular),
            ("material specular", params.material_specular),
        ];
        for (name, value) in channels {
            if !value.is_finite() || value.min_element() < 0.0 {
                return Err(LightError::InvalidMaterial(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if !params.shininess.is_finite() || params.shininess < 0.0 {
            return Err(LightError::InvalidMaterial(format!(
                "shininess must be finite and non-negative, got {}",
                params.shininess
            )));
        }
        Ok(Self { params })
    }

    pub fn emissive(&self) -> DVec3 {
        self.params.emissive
    }

    pub fn global_ambient(&self) -> DVec3 {
        self.params.global_ambient
    }

    pub fn material_ambient(&self) -> DVec3 {
        self.params.material_ambient
    }

    pub fn light_ambient(&self) -> DVec3 {
        self.params.light_ambient
    }

    pub fn light_diffuse(&self) -> DVec3 {
        self.params.light_diffuse
    }

    pub fn light_specular(&self) -> DVec3 {
        self.params.light_specular
    }

    pub fn material_specular(&self) -> DVec3 {
        self.params.material_specular
    }

    pub fn shininess(&self) -> f64 {
        self.params.shininess
    }

    /// Emissive plus global and light ambient, each scaled by material ambient.
    pub fn ambient(&self) -> DVec3 {
        self.params.emissive
            + self.params.global_ambient * self.params.material_ambient
            + self.params.light_ambient * self.params.material_ambient
    }
}

impl Default for MaterialModel {
    fn default() -> Self {
        Self {
            params: MaterialParams::default(),
        }
    }
}
