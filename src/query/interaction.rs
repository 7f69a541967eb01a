use crate::math::{Point, Real, Vector};

/// The result of a query on a primitive or on a hierarchy of primitives.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interaction {
    /// The point of the primitive that answered the query.
    pub point: Point<Real>,
    /// The unit normal of the primitive at `point`.
    ///
    /// Ray casts report the primitive normal, oriented toward the ray origin. Closest-point
    /// queries leave this to `None`: no normal is computed for them.
    pub normal: Option<Vector<Real>>,
    /// For closest-point queries, the distance between the query center and `point`.
    ///
    /// For ray casts, the time of impact, i.e., `point = ray.origin + ray.dir * distance`.
    pub distance: Real,
    /// The index of the primitive that answered the query.
    pub primitive: u32,
}

impl Interaction {
    /// Creates a closest-point interaction, without normal.
    #[inline]
    pub fn new(point: Point<Real>, distance: Real, primitive: u32) -> Self {
        Self {
            point,
            normal: None,
            distance,
            primitive,
        }
    }

    /// Creates a ray-cast interaction.
    #[inline]
    pub fn with_normal(
        point: Point<Real>,
        normal: Vector<Real>,
        distance: Real,
        primitive: u32,
    ) -> Self {
        Self {
            point,
            normal: Some(normal),
            distance,
            primitive,
        }
    }
}
