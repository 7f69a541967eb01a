use crate::math::{Point, Real};
use crate::utils::SimdLanes;
use simba::simd::{SimdPartialOrd, SimdValue};

/// Projects `pt` on the `N::WIDTH` segments `[a, b]` packed lane-wise.
///
/// Returns, for each lane, the closest point and its squared distance to `pt`.
#[inline]
pub fn simd_closest_points_on_segments<N: SimdLanes>(
    a: &Point<N>,
    b: &Point<N>,
    pt: &Point<Real>,
) -> (Point<N>, N) {
    let zero = N::splat(0.0);
    let one = N::splat(1.0);
    let p = Point::splat(*pt);

    let ab = b - a;
    let ap = p - a;
    let denom = ab.norm_squared();
    let denom = denom.select(denom.simd_ne(zero), one);
    let t = (ap.dot(&ab) / denom).simd_clamp(zero, one);
    let proj = a + ab * t;

    (proj, (proj - p).norm_squared())
}
