//! Bounding sphere.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

/// A sphere given by its center and its squared radius.
///
/// This is the search region of closest-point queries. During a query, the squared radius
/// only ever shrinks: it starts at the caller's search radius (possibly infinite) and is
/// tightened every time a closer bound on the closest point is discovered.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The sphere center.
    pub center: Point<Real>,
    /// The squared sphere radius.
    pub radius2: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere {
            center,
            radius2: radius * radius,
        }
    }

    /// Creates a new bounding sphere from its squared radius.
    pub fn with_squared_radius(center: Point<Real>, radius2: Real) -> BoundingSphere {
        BoundingSphere { center, radius2 }
    }

    /// A sphere with an infinite radius, i.e., a query that accepts any point.
    pub fn unbounded(center: Point<Real>) -> BoundingSphere {
        BoundingSphere {
            center,
            radius2: Real::INFINITY,
        }
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius2.sqrt()
    }

    /// Is the radius of this sphere infinite?
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.radius2 == Real::INFINITY
    }

    /// Does this sphere contain the given point?
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) <= self.radius2
    }

    /// Does this sphere intersect the given AABB?
    #[inline]
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        aabb.distance_bounds_to_local_point(&self.center).0 <= self.radius2
    }

    /// Shrinks the squared radius to `radius2` if it is smaller than the current one.
    ///
    /// Returns `true` if the sphere was shrunk.
    #[inline]
    pub fn shrink(&mut self, radius2: Real) -> bool {
        if radius2 < self.radius2 {
            self.radius2 = radius2;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod test {
    use super::BoundingSphere;
    use crate::bounding_volume::Aabb;
    use crate::math::{Point, Vector};

    #[test]
    fn sphere_only_shrinks() {
        let mut sphere = BoundingSphere::new(Point::origin(), 2.0);
        assert_eq!(sphere.radius2, 4.0);
        assert!(!sphere.shrink(5.0));
        assert!(sphere.shrink(1.0));
        assert_eq!(sphere.radius(), 1.0);
        assert!(!BoundingSphere::new(Point::origin(), 1.0).is_unbounded());
        assert!(BoundingSphere::unbounded(Point::origin()).is_unbounded());
    }

    #[test]
    fn sphere_aabb_intersection() {
        let aabb = Aabb::new(
            Point::from(Vector::repeat(1.0)),
            Point::from(Vector::repeat(2.0)),
        );
        let sphere = BoundingSphere::new(Point::origin(), 1.0);
        assert!(!sphere.intersects_aabb(&aabb));
        assert!(BoundingSphere::unbounded(Point::origin()).intersects_aabb(&aabb));
        assert!(sphere.contains_local_point(&Point::origin()));
    }
}
