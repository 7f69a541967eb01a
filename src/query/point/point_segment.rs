use crate::math::{Point, Real};

/// The point of the segment `[a, b]` closest to `pt`.
///
/// A degenerate segment projects everything on `a`.
#[inline]
pub fn closest_point_on_segment(a: &Point<Real>, b: &Point<Real>, pt: &Point<Real>) -> Point<Real> {
    let ab = b - a;
    let ap = pt - a;
    let mut denom = ab.norm_squared();
    if denom == 0.0 {
        denom = 1.0;
    }

    let t = (ap.dot(&ab) / denom).clamp(0.0, 1.0);
    a + ab * t
}

#[cfg(test)]
mod test {
    use super::closest_point_on_segment;
    use crate::math::Point;

    #[test]
    fn project_on_segment() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 0.0);
        assert_eq!(closest_point_on_segment(&a, &b, &Point::new(1.0, 3.0)), Point::new(1.0, 0.0));
        assert_eq!(closest_point_on_segment(&a, &b, &Point::new(-1.0, 3.0)), a);
        assert_eq!(closest_point_on_segment(&a, &b, &Point::new(5.0, -3.0)), b);
        assert_eq!(closest_point_on_segment(&a, &a, &Point::new(5.0, -3.0)), a);
    }
}
