use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Point, Real, Vector, MAX_CLIPPED_VERTICES, SIMPLEX_VERTICES};
use crate::query::clip::clip_halfspace_polygon;
use crate::query::Ray;

/// A geometric primitive that can be stored in a hierarchy.
///
/// Hierarchies never own their primitives: they are given a slice `&[P]` and refer to each
/// primitive by its index in that slice.
pub trait Primitive {
    /// The axis-aligned bounding box of this primitive.
    fn aabb(&self) -> Aabb;

    /// The centroid of this primitive.
    fn centroid(&self) -> Point<Real>;

    /// The surface area of this primitive (its length in 2D).
    fn surface_area(&self) -> Real;

    /// The signed volume of the solid bounded by this primitive and the origin.
    ///
    /// Summed over every primitive of a closed, consistently oriented boundary, this gives
    /// the volume (the area in 2D) enclosed by that boundary.
    fn signed_volume(&self) -> Real;

    /// Casts a ray on this primitive.
    ///
    /// Returns the time of impact and the unit normal at the hit point, or `None` if the ray
    /// misses or hits after `max_toi`.
    fn cast_ray(&self, ray: &Ray, max_toi: Real) -> Option<(Real, Vector<Real>)>;

    /// The point of this primitive closest to `pt`.
    fn project_point(&self, pt: &Point<Real>) -> Point<Real>;

    /// The point of this primitive closest to the center of `sphere`, if it lies in `sphere`.
    ///
    /// Returns that point together with its squared distance to the sphere center.
    fn closest_point(&self, sphere: &BoundingSphere) -> Option<(Point<Real>, Real)> {
        let proj = self.project_point(&sphere.center);
        let dist2 = na::distance_squared(&proj, &sphere.center);
        (dist2 <= sphere.radius2).then_some((proj, dist2))
    }

    /// Splits the part of this primitive lying in `bounds` by the plane orthogonal to `axis`
    /// at `coord`.
    ///
    /// Returns the bounding boxes of the parts on each side of the plane. A side with no
    /// part of the primitive gets an invalid box. By default, this splits `bounds` itself.
    fn split(&self, axis: usize, coord: Real, bounds: &Aabb) -> (Aabb, Aabb) {
        bounds.split_at(axis, coord)
    }
}

/// A primitive that is a simplex: a segment in 2D, a triangle in 3D.
///
/// Simplices can be packed into the leaves of a wide BVH.
pub trait SimplexPrimitive: Primitive {
    /// The vertices of this simplex.
    fn vertices(&self) -> [Point<Real>; SIMPLEX_VERTICES];
}

/// Splits the simplex with the given `vertices` by an axis-aligned plane, with exact clipping.
///
/// The simplex is first clipped by `bounds`, then by the two half-spaces delimited by the
/// plane orthogonal to `axis` at `coord`. The results are the bounding boxes of both
/// clipped polygons, restricted to `bounds`. If the simplex does not overlap `bounds`
/// numerically, `bounds` itself is split.
pub fn split_simplex(
    vertices: &[Point<Real>],
    axis: usize,
    coord: Real,
    bounds: &Aabb,
) -> (Aabb, Aabb) {
    let mut polygon = Vec::with_capacity(MAX_CLIPPED_VERTICES);
    polygon.extend_from_slice(vertices);
    let mut workspace = Vec::with_capacity(MAX_CLIPPED_VERTICES);
    bounds.clip_polygon_with_workspace(&mut polygon, &mut workspace);

    if polygon.is_empty() {
        return bounds.split_at(axis, coord);
    }

    let mut center = Point::origin();
    center[axis] = coord;
    let normal = Vector::ith(axis, 1.0);

    let mut split_side = |normal: Vector<Real>| {
        clip_halfspace_polygon(&center, &normal, &polygon, &mut workspace);
        Aabb::from_points_ref(&workspace)
            .intersection(bounds)
            .unwrap_or_else(Aabb::new_invalid)
    };

    let left = split_side(normal);
    let right = split_side(-normal);
    (left, right)
}

#[cfg(test)]
mod test {
    use super::split_simplex;
    use crate::bounding_volume::{Aabb, BoundingVolume};
    use crate::math::{Point, SIMPLEX_VERTICES};

    #[cfg(feature = "dim2")]
    fn diagonal_simplex() -> [Point<f32>; SIMPLEX_VERTICES] {
        [Point::origin(), Point::new(1.0, 1.0)]
    }

    #[cfg(feature = "dim3")]
    fn diagonal_simplex() -> [Point<f32>; SIMPLEX_VERTICES] {
        [
            Point::origin(),
            Point::new(0.0, 1.0, 1.0),
            Point::new(1.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn split_is_tighter_than_box_split() {
        let vertices = diagonal_simplex();
        let bounds = Aabb::from_points_ref(&vertices);
        let (left, right) = split_simplex(&vertices, 0, 0.5, &bounds);

        assert!(left.is_valid() && right.is_valid());
        assert!(bounds.contains(&left) && bounds.contains(&right));
        assert_relative_eq!(left.maxs[0], 0.5, epsilon = 1.0e-6);
        assert_relative_eq!(right.mins[0], 0.5, epsilon = 1.0e-6);
        assert_relative_eq!(left.merged(&right).mins, bounds.mins, epsilon = 1.0e-6);
        assert_relative_eq!(left.merged(&right).maxs, bounds.maxs, epsilon = 1.0e-6);
    }

    #[test]
    fn split_outside_of_simplex() {
        let vertices = diagonal_simplex();
        let bounds = Aabb::from_points_ref(&vertices);
        let (left, right) = split_simplex(&vertices, 0, 2.0, &bounds);

        assert_relative_eq!(left.mins, bounds.mins, epsilon = 1.0e-6);
        assert_relative_eq!(left.maxs, bounds.maxs, epsilon = 1.0e-6);
        assert!(!right.is_valid());
    }
}
