use anyhow::Result;
use nalgebra::{Point2, Vector2};

use crate::settings::VEC_LENGTH_THRESHOLD;


/// Computes the unit direction vector from `start` to `end`.
pub fn unit_vector(start: &Point2<f32>, end: &Point2<f32>) -> Result<Vector2<f32>> {
    let diff = end - start;
    let mag = diff.norm();
    if mag < VEC_LENGTH_THRESHOLD {
        return Err(anyhow::anyhow!("degenerate direction: endpoints coincide"));
    }
    Ok(diff / mag)
}

/// Computes the unit normal of the boundary running from `start` to `end`,
/// the direction vector rotated by 90 degrees.
pub fn boundary_normal(start: &Point2<f32>, end: &Point2<f32>) -> Result<Vector2<f32>> {
    let diff = end - start;
    let mag = diff.norm();
    if mag < VEC_LENGTH_THRESHOLD {
        return Err(anyhow::anyhow!("degenerate boundary: endpoints coincide"));
    }
    Ok(Vector2::new(-diff.y, diff.x) / mag)
}

/// Returns the endpoint of a ray cast from `origin` at angle `alpha`,
/// measured from the positive x-axis in screen coordinates.
pub fn ray_endpoint(origin: &Point2<f32>, alpha: f32, length: f32) -> Point2<f32> {
    Point2::new(
        origin.x + length * alpha.cos(),
        origin.y + length * alpha.sin(),
    )
}
