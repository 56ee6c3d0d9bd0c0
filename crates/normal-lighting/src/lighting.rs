//! Per-pixel ambient + diffuse + specular lighting.
//!
//! Evaluates, per channel c:
//!
//! ```text
//! ambient_c = emissive_c + (global_ambient_c + light_ambient_c) · material_ambient_c
//! lit_c     = ambient_c + light_diffuse_c · md_c · (N·L)
//!                       + light_specular_c · material_specular_c · max(0, V·R)^shininess
//! ```
//!
//! where the diffuse and specular terms only apply when `N·L >= 0`, `md_c` is
//! the diffuse map byte over 255, `V` is the viewer `(0, 0, 1)` and `R` is `L`
//! reflected about `N`.

use crate::error::LightError;
use crate::grid::Rgb8;
use crate::material::MaterialModel;
use crate::math;
use crate::sweep::LightVector;
use glam::DVec3;

/// Viewer direction, looking straight down the surface normal axis.
pub const VIEWER: DVec3 = DVec3::Z;

/// Decode a normal map color: each component is `(byte - 128) / 128`.
///
/// The result is not renormalized.
#[inline]
pub fn decode_normal(color: Rgb8) -> DVec3 {
    DVec3::new(
        decode_component(color[0]),
        decode_component(color[1]),
        decode_component(color[2]),
    )
}

#[inline]
fn decode_component(byte: u8) -> f64 {
    (f64::from(byte) - 128.0) / 128.0
}

/// Decode a diffuse map color into per-channel reflectance in [0, 1].
#[inline]
pub fn decode_diffuse(color: Rgb8) -> DVec3 {
    DVec3::new(
        f64::from(color[0]),
        f64::from(color[1]),
        f64::from(color[2]),
    ) / 255.0
}

/// Convert a lit channel value to a byte: `round(255 · min(1, c))`, ties to even.
#[inline]
pub fn channel_to_byte(value: f64) -> u8 {
    (255.0 * value.min(1.0)).round_ties_even().clamp(0.0, 255.0) as u8
}

/// Light one pixel.
///
/// Fails with [`LightError::DegenerateVector`] when the normal decodes to the
/// zero vector (all channels 128).
pub fn evaluate(
    normal_color: Rgb8,
    diffuse_color: Rgb8,
    light: &LightVector,
    material: &MaterialModel,
) -> Result<Rgb8, LightError> {
    let normal = decode_normal(normal_color);
    let material_diffuse = decode_diffuse(diffuse_color);
    let light = light.direction();

    let n_dot_l = math::dot(light, normal);
    let reflected = math::reflect(light, normal)?;

    let mut lit = material.ambient();
    if n_dot_l >= 0.0 {
        let specular = math::dot(VIEWER, reflected)
            .max(0.0)
            .powf(material.shininess());
        lit += material.light_diffuse() * material_diffuse * n_dot_l
            + material.light_specular() * material.material_specular() * specular;
    }

    Ok([
        channel_to_byte(lit.x),
        channel_to_byte(lit.y),
        channel_to_byte(lit.z),
    ])
}

/// Output of a pixel that faces away from the light.
pub fn ambient_only(material: &MaterialModel) -> Rgb8 {
    let ambient = material.ambient();
    [
        channel_to_byte(ambient.x),
        channel_to_byte(ambient.y),
        channel_to_byte(ambient.z),
    ]
}
