use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real, Vector, SIMPLEX_VERTICES};
use crate::query::Ray;
use crate::shape::Primitive;
#[cfg(feature = "dim2")]
pub use crate::shape::Segment as Simplex;
#[cfg(feature = "dim3")]
pub use crate::shape::Triangle as Simplex;
use oorandom::Rand32;

#[cfg(feature = "dim2")]
pub fn simplex(vertices: [Point<Real>; SIMPLEX_VERTICES]) -> Simplex {
    Simplex::new(vertices[0], vertices[1])
}

#[cfg(feature = "dim3")]
pub fn simplex(vertices: [Point<Real>; SIMPLEX_VERTICES]) -> Simplex {
    Simplex::new(vertices[0], vertices[1], vertices[2])
}

pub fn random_point(rng: &mut Rand32, extent: Real) -> Point<Real> {
    Point::from(Vector::from_fn(|_, _| (rng.rand_float() * 2.0 - 1.0) * extent))
}

/// `count` simplices with a vertex in `[-extent, extent]` and edges shorter than `size`.
pub fn random_simplices(rng: &mut Rand32, count: usize, extent: Real, size: Real) -> Vec<Simplex> {
    (0..count)
        .map(|_| {
            let base = random_point(rng, extent);
            simplex(std::array::from_fn(|i| {
                if i == 0 {
                    base
                } else {
                    base + random_point(rng, size).coords
                }
            }))
        })
        .collect()
}

/// The primitive index and the distance of the closest point of `prims` in `sphere`.
pub fn closest_point_linear_scan<P: Primitive>(
    prims: &[P],
    sphere: &BoundingSphere,
) -> Option<(u32, Real)> {
    let mut best: Option<(u32, Real)> = None;

    for (i, prim) in prims.iter().enumerate() {
        if let Some((_, d2)) = prim.closest_point(sphere) {
            if best.map(|(_, best_d2)| d2 < best_d2).unwrap_or(true) {
                best = Some((i as u32, d2));
            }
        }
    }

    best.map(|(i, d2)| (i, d2.sqrt()))
}

/// The hits of `ray` on every primitive, sorted by time of impact.
pub fn ray_hits_linear_scan<P: Primitive>(prims: &[P], ray: &Ray, max_toi: Real) -> Vec<(u32, Real)> {
    let mut hits: Vec<_> = prims
        .iter()
        .enumerate()
        .filter_map(|(i, prim)| Some((i as u32, prim.cast_ray(ray, max_toi)?.0)))
        .collect();
    hits.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
    hits
}
