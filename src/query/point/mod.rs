//! Closest-point computations between a point and simplices.
//!
//! The scalar functions project a point on a single primitive. The `simd_` functions
//! project a point on `N::WIDTH` primitives at once, one per lane, with the same arithmetic
//! as their scalar counterpart.

#[cfg(feature = "dim2")]
pub use self::point_segment::closest_point_on_segment;
#[cfg(feature = "dim3")]
pub use self::point_triangle::closest_point_on_triangle;
#[cfg(feature = "dim2")]
pub use self::simd_point_segment::simd_closest_points_on_segments;
#[cfg(feature = "dim3")]
pub use self::simd_point_triangle::simd_closest_points_on_triangles;

use crate::math::{Point, Real, SIMPLEX_VERTICES};
use crate::utils::SimdLanes;

#[cfg(feature = "dim2")]
mod point_segment;
#[cfg(feature = "dim3")]
mod point_triangle;
#[cfg(feature = "dim2")]
mod simd_point_segment;
#[cfg(feature = "dim3")]
mod simd_point_triangle;

/// Projects `pt` on the `N::WIDTH` simplices packed lane-wise in `vertices`.
///
/// Returns, for each lane, the closest point and its squared distance to `pt`.
#[inline]
pub fn simd_closest_points_on_simplices<N: SimdLanes>(
    vertices: &[Point<N>; SIMPLEX_VERTICES],
    pt: &Point<Real>,
) -> (Point<N>, N) {
    #[cfg(feature = "dim2")]
    return simd_closest_points_on_segments(&vertices[0], &vertices[1], pt);
    #[cfg(feature = "dim3")]
    return simd_closest_points_on_triangles(&vertices[0], &vertices[1], &vertices[2], pt);
}
