//! Snell's law at a planar boundary between two media.
//!
//! This module converts an incident ray direction and a boundary normal into
//! the incident, reflected, and refracted angles, all measured in radians
//! relative to a reference vector on the unit circle. The window is split
//! into two active quadrants on either side of the boundary, and each uses
//! its own sign convention and base formulas; the asymmetry follows from the
//! screen-space coordinate geometry and is preserved as observed rather than
//! folded into a single formula.
//!
//! Total internal reflection is data, not a fault: when the index ratio
//! exceeds 1 in the direction that would push the inverse sine outside its
//! domain, the refracted angle is reported absent.

use anyhow::Result;
use nalgebra::Vector2;


/// Which side of the ray origin the cursor occupies. Only the lower half of
/// the window is active; quadrant 1 is down-left of the origin, quadrant 2
/// down-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    One,
    Two,
}

/// Angles for a single incident ray, in radians, measured relative to the
/// reference vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayAngles {
    pub incident: f32,
    pub reflected: f32,
    /// `None` under total internal reflection.
    pub refracted: Option<f32>,
    /// Angle between the boundary normal and the reference vector.
    /// Produced in quadrant 1 only.
    pub axis: Option<f32>,
}

/// Applies Snell's law at the boundary to compute the angle set for one ray.
///
/// `ray` is the unit direction of the incident ray, `normal` the unit normal
/// of the boundary, and `reference` a unit vector on the unit circle from
/// which all angles are measured (the positive x-axis when `None`). `n1` and
/// `n2` are the refractive indices left and right of the boundary. The
/// quadrant selects the sign convention; quadrant 2 omits the axis angle.
///
/// Returns an error if the inputs put an inverse cosine outside its domain,
/// which happens for non-unit vectors.
pub fn ray_angles(
    n1: f32,
    n2: f32,
    ray: &Vector2<f32>,
    normal: &Vector2<f32>,
    reference: Option<Vector2<f32>>,
    quadrant: Quadrant,
) -> Result<RayAngles> {
    let reference = reference.unwrap_or_else(Vector2::x);
    let angles = match quadrant {
        Quadrant::One => quadrant_one(n1, n2, ray, normal, &reference),
        Quadrant::Two => quadrant_two(n1, n2, ray, normal, &reference),
    };

    if angles.incident.is_nan() || angles.reflected.is_nan() {
        Err(anyhow::anyhow!("ray angle is NaN"))
    } else {
        Ok(angles)
    }
}

fn quadrant_one(
    n1: f32,
    n2: f32,
    ray: &Vector2<f32>,
    normal: &Vector2<f32>,
    reference: &Vector2<f32>,
) -> RayAngles {
    let axis = reference.dot(normal).acos();
    let incident = ray.dot(normal).acos() - axis;
    let reflected = axis - incident;
    let refracted = if n1 / n2 > 1.0 {
        None
    } else {
        Some((n1 * incident.sin() / n2).asin())
    };

    RayAngles {
        incident,
        reflected,
        refracted,
        axis: Some(axis),
    }
}

fn quadrant_two(
    n1: f32,
    n2: f32,
    ray: &Vector2<f32>,
    normal: &Vector2<f32>,
    reference: &Vector2<f32>,
) -> RayAngles {
    // dot(-normal, -ray) == dot(normal, ray); only the axis term flips.
    let axis = (-reference.dot(normal)).acos();
    let incident = -ray.dot(normal).acos() + axis;
    let reflected = -incident;
    let refracted = if n2 / n1 > 1.0 {
        None
    } else {
        Some(-(n2 * incident.sin() / n1).asin() + std::f32::consts::PI)
    };

    RayAngles {
        incident,
        reflected,
        refracted,
        axis: None,
    }
}
