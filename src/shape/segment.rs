//! Definition of the segment primitive.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::point::closest_point_on_segment;
use crate::query::ray::local_ray_intersection_with_segment;
use crate::query::Ray;
use crate::shape::{split_simplex, Primitive, SimplexPrimitive};

/// A segment primitive.
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }
}

impl Primitive for Segment {
    #[inline]
    fn aabb(&self) -> Aabb {
        Aabb::from_points([self.a, self.b])
    }

    #[inline]
    fn centroid(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }

    #[inline]
    fn surface_area(&self) -> Real {
        self.length()
    }

    #[inline]
    fn signed_volume(&self) -> Real {
        self.a.coords.perp(&self.b.coords) * 0.5
    }

    #[inline]
    fn cast_ray(&self, ray: &Ray, max_toi: Real) -> Option<(Real, Vector<Real>)> {
        local_ray_intersection_with_segment(&self.a, &self.b, ray)
            .filter(|(toi, _)| *toi <= max_toi)
    }

    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        closest_point_on_segment(&self.a, &self.b, pt)
    }

    fn split(&self, axis: usize, coord: Real, bounds: &Aabb) -> (Aabb, Aabb) {
        split_simplex(&[self.a, self.b], axis, coord, bounds)
    }
}

impl SimplexPrimitive for Segment {
    #[inline]
    fn vertices(&self) -> [Point<Real>; 2] {
        [self.a, self.b]
    }
}
