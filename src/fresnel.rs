//! Fresnel coefficients at the boundary between the two media.
//!
//! The angle readout is supplemented by the fraction of incident power that
//! reflects at the interface. The sliders only produce real refractive
//! indices, so the real-index form of the Fresnel equations is sufficient.

use nalgebra::Vector2;


/// Fresnel amplitude reflection coefficients for the s- and p-polarized
/// field components, as `(r_s, r_p)`.
pub fn refl(n1: f32, n2: f32, theta_i: f32, theta_t: f32) -> Vector2<f32> {
    let cti = theta_i.cos();
    let ctt = theta_t.cos();
    let r_s = (n1 * cti - n2 * ctt) / (n1 * cti + n2 * ctt);
    let r_p = (n2 * cti - n1 * ctt) / (n2 * cti + n1 * ctt);
    Vector2::new(r_s, r_p)
}

/// Fresnel amplitude transmission coefficients for the s- and p-polarized
/// field components, as `(t_s, t_p)`.
pub fn refr(n1: f32, n2: f32, theta_i: f32, theta_t: f32) -> Vector2<f32> {
    let cti = theta_i.cos();
    let ctt = theta_t.cos();
    let t_s = (2.0 * n1 * cti) / (n1 * cti + n2 * ctt);
    let t_p = (2.0 * n1 * cti) / (n2 * cti + n1 * ctt);
    Vector2::new(t_s, t_p)
}

/// Unpolarized power reflectance, the mean of the s and p reflectances.
pub fn reflectance(n1: f32, n2: f32, theta_i: f32, theta_t: f32) -> f32 {
    let r = refl(n1, n2, theta_i, theta_t);
    (r.x * r.x + r.y * r.y) / 2.0
}
