//! Definition of the triangle primitive.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::point::closest_point_on_triangle;
use crate::query::ray::local_ray_intersection_with_triangle;
use crate::query::Ray;
use crate::shape::{split_simplex, Primitive, SimplexPrimitive};

/// A triangle primitive.
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// A vector normal of this triangle, with a norm equal to twice its area.
    ///
    /// The normal points such that it is collinear to `AB × AC`.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }
}

impl Primitive for Triangle {
    #[inline]
    fn aabb(&self) -> Aabb {
        Aabb::from_points([self.a, self.b, self.c])
    }

    #[inline]
    fn centroid(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    #[inline]
    fn surface_area(&self) -> Real {
        self.area()
    }

    #[inline]
    fn signed_volume(&self) -> Real {
        self.a.coords.dot(&self.b.coords.cross(&self.c.coords)) / 6.0
    }

    #[inline]
    fn cast_ray(&self, ray: &Ray, max_toi: Real) -> Option<(Real, Vector<Real>)> {
        local_ray_intersection_with_triangle(&self.a, &self.b, &self.c, ray)
            .filter(|(toi, _)| *toi <= max_toi)
    }

    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        closest_point_on_triangle(&self.a, &self.b, &self.c, pt)
    }

    fn split(&self, axis: usize, coord: Real, bounds: &Aabb) -> (Aabb, Aabb) {
        split_simplex(&[self.a, self.b, self.c], axis, coord, bounds)
    }
}

impl SimplexPrimitive for Triangle {
    #[inline]
    fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }
}
