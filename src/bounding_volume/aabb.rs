//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vector, DIM};
use na;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. Every node of the hierarchies
/// of this crate, and every reference manipulated while building them, is bounded by one.
///
/// # Invariants
///
/// - A valid AABB satisfies `mins[i] ≤ maxs[i]` for every axis `i`. A single point is a
///   valid (degenerate) AABB.
/// - [`Aabb::new_invalid`] returns the "empty" AABB with `mins = +MAX` and `maxs = -MAX`.
///   It is the neutral element of [`BoundingVolume::merge`] and [`Aabb::is_valid`] returns
///   `false` for it.
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use sbvh3d::bounding_volume::{Aabb, BoundingVolume};
/// use nalgebra::Point3;
///
/// let mut aabb = Aabb::new_invalid();
/// assert!(!aabb.is_valid());
///
/// aabb.take_point(Point3::new(1.0, 2.0, 3.0));
/// assert!(aabb.is_valid());
/// assert_eq!(aabb.volume(), 0.0);
///
/// let merged = aabb.merged(&Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0)));
/// assert_eq!(merged.mins, Point3::origin());
/// assert_eq!(merged.maxs, Point3::new(1.0, 2.0, 3.0));
/// # }
/// ```
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new_invalid()
    }
}

impl Aabb {
    /// Creates a new AABB from its two corners.
    ///
    /// Each component of `mins` should be smaller than the corresponding component of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid `Aabb` with `mins` components set to `Real::MAX` and `maxs` components set to `-Real::MAX`.
    ///
    /// This is often used as the initial values of some `Aabb` merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new `Aabb` from a set of point references.
    pub fn from_points_ref<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut result = Self::new_invalid();
        for pt in pts {
            result.take_point(*pt);
        }
        result
    }

    /// Creates a new `Aabb` from a set of points.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_invalid();
        for pt in pts {
            result.take_point(pt);
        }
        result
    }

    /// Is this AABB non-empty?
    ///
    /// This is `false` for [`Aabb::new_invalid`] and for any AABB with a negative extent.
    #[inline]
    pub fn is_valid(&self) -> bool {
        na::partial_le(&self.mins, &self.maxs)
    }

    /// The center of this `Aabb`.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The axis along which this `Aabb` is the widest.
    ///
    /// Ties resolve to the axis with the smallest index.
    #[inline]
    pub fn largest_axis(&self) -> usize {
        let extents = self.extents();
        let mut axis = 0;
        for i in 1..DIM {
            if extents[i] > extents[axis] {
                axis = i;
            }
        }
        axis
    }

    /// The volume of this `Aabb` (its area in 2D).
    ///
    /// Returns zero for an invalid AABB.
    #[inline]
    pub fn volume(&self) -> Real {
        if !self.is_valid() {
            return 0.0;
        }

        let extents = self.extents();
        #[cfg(feature = "dim2")]
        return extents.x * extents.y;
        #[cfg(feature = "dim3")]
        return extents.x * extents.y * extents.z;
    }

    /// The surface area of this `Aabb` (its perimeter in 2D).
    ///
    /// Returns zero for an invalid AABB.
    #[inline]
    pub fn surface_area(&self) -> Real {
        if !self.is_valid() {
            return 0.0;
        }

        let extents = self.extents();
        #[cfg(feature = "dim2")]
        return 2.0 * (extents.x + extents.y);
        #[cfg(feature = "dim3")]
        return 2.0 * (extents.x * (extents.y + extents.z) + extents.y * extents.z);
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    #[inline]
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Does this AABB contains a point expressed in the same coordinate frame as `self`?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Computes the intersection of this `Aabb` and another one.
    ///
    /// Returns `None` if they are disjoint. Touching AABBs intersect along a degenerate box.
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let result = Aabb {
            mins: Point::from(self.mins.coords.sup(&other.mins.coords)),
            maxs: Point::from(self.maxs.coords.inf(&other.maxs.coords)),
        };

        for i in 0..DIM {
            if result.mins[i] > result.maxs[i] {
                return None;
            }
        }

        Some(result)
    }

    /// Splits this `Aabb` along the plane orthogonal to `axis` passing through `coord`.
    ///
    /// The plane coordinate is clamped to the extent of `self` so both halves are valid
    /// (possibly flat) boxes whose union is `self`.
    pub fn split_at(&self, axis: usize, coord: Real) -> (Aabb, Aabb) {
        let coord = coord.max(self.mins[axis]).min(self.maxs[axis]);
        let mut left = *self;
        let mut right = *self;
        left.maxs[axis] = coord;
        right.mins[axis] = coord;
        (left, right)
    }

    /// The squared distances from `pt` to the nearest and farthest points of this `Aabb`.
    ///
    /// The nearest distance is zero if `pt` lies inside of `self`.
    #[inline]
    pub fn distance_bounds_to_local_point(&self, pt: &Point<Real>) -> (Real, Real) {
        let near = (self.mins - pt)
            .sup(&(pt - self.maxs))
            .sup(&Vector::zeros());
        let far = (pt - self.mins).sup(&(self.maxs - pt));
        (near.norm_squared(), far.norm_squared())
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }
}
