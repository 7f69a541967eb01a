use crate::math::{Point, Real, Vector};
use crate::query::Ray;

/// Computes the intersection between a ray and a segment.
///
/// Returns the time of impact and the unit normal of the segment, oriented toward the side
/// of the ray origin. Rays parallel to the segment never hit.
pub fn local_ray_intersection_with_segment(
    a: &Point<Real>,
    b: &Point<Real>,
    ray: &Ray,
) -> Option<(Real, Vector<Real>)> {
    let ab = b - a;
    let denom = ray.dir.perp(&ab);

    if denom == 0.0 {
        return None;
    }

    let w = a - ray.origin;
    let toi = w.perp(&ab) / denom;
    let s = w.perp(&ray.dir) / denom;

    if toi < 0.0 || s < 0.0 || s > 1.0 {
        return None;
    }

    let mut normal = Vector::new(-ab.y, ab.x);
    if normal.dot(&ray.dir) > 0.0 {
        normal = -normal;
    }

    Some((toi, normal.try_normalize(0.0).unwrap_or(normal)))
}
