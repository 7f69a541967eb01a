use crate::math::{Point, Real};

#[inline]
fn safe_div(num: Real, denom: Real) -> Real {
    if denom != 0.0 {
        num / denom
    } else {
        num
    }
}

/// The point of the triangle `abc` closest to `pt`.
///
/// The point is located by testing the Voronoï regions of the vertices, then the edges, then
/// the face of the triangle. Degenerate triangles are handled without dividing by zero.
pub fn closest_point_on_triangle(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    pt: &Point<Real>,
) -> Point<Real> {
    let ab = b - a;
    let ac = c - a;
    let ap = pt - a;

    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);

    if d1 <= 0.0 && d2 <= 0.0 {
        // Voronoï region of `a`.
        return *a;
    }

    let bp = pt - b;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);

    if d3 >= 0.0 && d4 <= d3 {
        // Voronoï region of `b`.
        return *b;
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        // Voronoï region of `ab`.
        let v = safe_div(d1, d1 - d3);
        return a + ab * v;
    }

    let cp = pt - c;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);

    if d6 >= 0.0 && d5 <= d6 {
        // Voronoï region of `c`.
        return *c;
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        // Voronoï region of `ac`.
        let w = safe_div(d2, d2 - d6);
        return a + ac * w;
    }

    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && d4 - d3 >= 0.0 && d5 - d6 >= 0.0 {
        // Voronoï region of `bc`.
        let w = safe_div(d4 - d3, (d4 - d3) + (d5 - d6));
        return b + (c - b) * w;
    }

    // Voronoï region of the face.
    let denom = va + vb + vc;
    let v = safe_div(vb, denom);
    let w = safe_div(vc, denom);
    a + ab * v + ac * w
}
