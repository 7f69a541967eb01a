use crate::math::{Point, Real};
use crate::utils::SimdLanes;
use simba::simd::{SimdBool as _, SimdValue};

#[inline(always)]
fn safe_div<N: SimdLanes>(num: N, denom: N) -> N {
    let zero = N::splat(0.0);
    let one = N::splat(1.0);
    num / denom.select(denom.simd_ne(zero), one)
}

/// Projects `pt` on the `N::WIDTH` triangles `abc` packed lane-wise.
///
/// This evaluates the same Voronoï region tests as
/// [`closest_point_on_triangle`](super::closest_point_on_triangle) on all lanes at once. The
/// first region that matches a lane wins for that lane, and the computation stops early as
/// soon as every lane found its region.
///
/// Returns, for each lane, the closest point and its squared distance to `pt`.
pub fn simd_closest_points_on_triangles<N: SimdLanes>(
    a: &Point<N>,
    b: &Point<N>,
    c: &Point<N>,
    pt: &Point<Real>,
) -> (Point<N>, N) {
    let zero = N::splat(0.0);
    let p = Point::splat(*pt);
    let finish = |proj: Point<N>| (proj, (proj - p).norm_squared());

    let ab = b - a;
    let ac = c - a;
    let ap = p - a;

    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);

    // Voronoï region of `a`.
    let mut exit = d1.simd_le(zero) & d2.simd_le(zero);
    let mut proj = *a;
    if exit.all() {
        return finish(proj);
    }

    let bp = p - b;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);

    // Voronoï region of `b`.
    let region = d3.simd_ge(zero) & d4.simd_le(d3) & !exit;
    proj = (*b).select(region, proj);
    exit = exit | region;
    if exit.all() {
        return finish(proj);
    }

    // Voronoï region of `ab`.
    let vc = d1 * d4 - d3 * d2;
    let region = vc.simd_le(zero) & d1.simd_ge(zero) & d3.simd_le(zero) & !exit;
    let v = safe_div(d1, d1 - d3);
    proj = (a + ab * v).select(region, proj);
    exit = exit | region;
    if exit.all() {
        return finish(proj);
    }

    let cp = p - c;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);

    // Voronoï region of `c`.
    let region = d6.simd_ge(zero) & d5.simd_le(d6) & !exit;
    proj = (*c).select(region, proj);
    exit = exit | region;
    if exit.all() {
        return finish(proj);
    }

    // Voronoï region of `ac`.
    let vb = d5 * d2 - d1 * d6;
    let region = vb.simd_le(zero) & d2.simd_ge(zero) & d6.simd_le(zero) & !exit;
    let w = safe_div(d2, d2 - d6);
    proj = (a + ac * w).select(region, proj);
    exit = exit | region;
    if exit.all() {
        return finish(proj);
    }

    // Voronoï region of `bc`.
    let va = d3 * d6 - d5 * d4;
    let d43 = d4 - d3;
    let d56 = d5 - d6;
    let region = va.simd_le(zero) & d43.simd_ge(zero) & d56.simd_ge(zero) & !exit;
    let w = safe_div(d43, d43 + d56);
    proj = (b + (c - b) * w).select(region, proj);
    exit = exit | region;
    if exit.all() {
        return finish(proj);
    }

    // Voronoï region of the face.
    let denom = va + vb + vc;
    let v = safe_div(vb, denom);
    let w = safe_div(vc, denom);
    proj = (a + ab * v + ac * w).select(!exit, proj);

    finish(proj)
}
