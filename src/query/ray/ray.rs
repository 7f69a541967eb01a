//! Traits and structure needed to cast rays.

use crate::math::{Point, Real, Vector};

/// A Ray starting at `origin` and travelling along the direction `dir`.
///
/// Points along the ray are `origin + dir * t` for `t ≥ 0`. The direction does not need to
/// be normalized, but times of impact only are distances if it is.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray from an origin point and direction vector.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Computes the point along the ray at parameter `t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}
