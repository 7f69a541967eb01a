#[macro_use]
extern crate approx;

mod polyline;
mod segment_closest_point;

use rand::Rng;
use sbvh2d::na::Point2;
use sbvh2d::shape::Segment;

pub fn random_point(rng: &mut impl Rng, extent: f32) -> Point2<f32> {
    Point2::new(rng.gen_range(-extent..extent), rng.gen_range(-extent..extent))
}

pub fn random_segments(
    rng: &mut impl Rng,
    count: usize,
    extent: f32,
    size: f32,
) -> Vec<Segment> {
    (0..count)
        .map(|_| {
            let a = random_point(&mut *rng, extent);
            Segment::new(a, a + random_point(&mut *rng, size).coords)
        })
        .collect()
}

/// The closed polygon boundary going through `vertices`, counterclockwise.
pub fn closed_polyline(vertices: &[Point2<f32>]) -> Vec<Segment> {
    (0..vertices.len())
        .map(|i| Segment::new(vertices[i], vertices[(i + 1) % vertices.len()]))
        .collect()
}
