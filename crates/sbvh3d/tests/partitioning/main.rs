#[macro_use]
extern crate approx;

mod closest_point_differential;
mod edge_cases;
mod ray_cast;
mod two_triangles;

use rand::Rng;
use sbvh3d::bounding_volume::BoundingSphere;
use sbvh3d::na::{Point3, Vector3};
use sbvh3d::shape::{Primitive, Triangle};

pub fn random_point(rng: &mut impl Rng, extent: f32) -> Point3<f32> {
    Point3::new(
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
    )
}

pub fn random_triangles(
    rng: &mut impl Rng,
    count: usize,
    extent: f32,
    size: f32,
) -> Vec<Triangle> {
    (0..count)
        .map(|_| {
            let a = random_point(&mut *rng, extent);
            let b = a + random_point(&mut *rng, size).coords;
            let c = a + random_point(&mut *rng, size).coords;
            Triangle::new(a, b, c)
        })
        .collect()
}

pub fn unit_triangle(offset: Vector3<f32>) -> Triangle {
    Triangle::new(
        Point3::origin() + offset,
        Point3::new(1.0, 0.0, 0.0) + offset,
        Point3::new(0.0, 1.0, 0.0) + offset,
    )
}

/// The squared distances from the center of `sphere` to each triangle it contains, sorted.
pub fn sorted_distances(prims: &[Triangle], sphere: &BoundingSphere) -> Vec<(f32, u32)> {
    let mut result: Vec<_> = prims
        .iter()
        .enumerate()
        .filter_map(|(i, prim)| Some((prim.closest_point(sphere)?.1.sqrt(), i as u32)))
        .collect();
    result.sort_by(|a, b| a.0.total_cmp(&b.0));
    result
}
