use crate::math::{Point, Real, Vector};
use crate::query::Ray;

/// Computes the intersection between a ray and a triangle.
///
/// Returns the time of impact and the unit normal of the triangle, oriented toward the side
/// of the ray origin. Rays parallel to the triangle plane never hit.
pub fn local_ray_intersection_with_triangle(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    ray: &Ray,
) -> Option<(Real, Vector<Real>)> {
    let ab = *b - *a;
    let ac = *c - *a;

    // normal
    let n = ab.cross(&ac);
    let d = n.dot(&ray.dir);

    // the normal and the ray direction are parallel
    if d == 0.0 {
        return None;
    }

    let ap = ray.origin - *a;
    let t = ap.dot(&n);

    // the ray does not intersect the halfspace defined by the triangle
    if (t < 0.0 && d < 0.0) || (t > 0.0 && d > 0.0) {
        return None;
    }

    let d = d.abs();

    //
    // intersection: compute barycentric coordinates
    //
    let e = -ray.dir.cross(&ap);

    let (v, w, normal) = if t < 0.0 {
        (-ac.dot(&e), ab.dot(&e), -n)
    } else {
        (ac.dot(&e), -ab.dot(&e), n)
    };

    if v < 0.0 || v > d || w < 0.0 || v + w > d {
        return None;
    }

    let toi = t.abs() / d;
    Some((toi, normal.try_normalize(0.0).unwrap_or(normal)))
}
