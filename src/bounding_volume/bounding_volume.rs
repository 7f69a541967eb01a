use crate::math::{Point, Real};

/// Trait of bounding volumes.
///
/// Bounding volumes are coarse approximations of primitives. They have constant time
/// intersection and inclusion tests. Two bounding volumes must also be mergeable into a
/// bigger bounding volume.
pub trait BoundingVolume {
    /// Returns a point inside of this bounding volume. This is ideally its center.
    fn center(&self) -> Point<Real>;

    /// Checks if this bounding volume intersect with another one.
    fn intersects(&self, _: &Self) -> bool;

    /// Checks if this bounding volume contains another one.
    fn contains(&self, _: &Self) -> bool;

    /// Merges this bounding volume with another one. The merge is done in-place.
    fn merge(&mut self, _: &Self);

    /// Merges this bounding volume with another one.
    fn merged(&self, _: &Self) -> Self;
}
