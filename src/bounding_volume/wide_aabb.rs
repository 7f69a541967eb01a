use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, DIM};
use crate::utils::SimdLanes;
use simba::simd::SimdValue;

/// `N::WIDTH` AABBs represented as a single SoA AABB with SIMD components.
///
/// Lane `i` of every coordinate of `mins` and `maxs` describes the `i`-th AABB, so a single
/// vector instruction tests all of them at once. Unused lanes hold [`Aabb::new_invalid`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WideAabb<N: SimdLanes> {
    /// The min coordinates of the AABBs.
    pub mins: Point<N>,
    /// The max coordinates of the AABBs.
    pub maxs: Point<N>,
}

impl<N: SimdLanes> WideAabb<N> {
    /// An invalid AABB on every lane.
    pub fn new_invalid() -> Self {
        Self::splat(Aabb::new_invalid())
    }

    /// Builds a SIMD AABB composed of `N::WIDTH` identical AABBs.
    pub fn splat(aabb: Aabb) -> Self {
        Self {
            mins: Point::splat(aabb.mins),
            maxs: Point::splat(aabb.maxs),
        }
    }

    /// Replace the `i-th` AABB of this SIMD AABB by the given value.
    pub fn replace(&mut self, i: usize, aabb: Aabb) {
        self.mins.replace(i, aabb.mins);
        self.maxs.replace(i, aabb.maxs);
    }

    /// Extracts the `i-th` AABB of this SIMD AABB.
    pub fn extract(&self, i: usize) -> Aabb {
        Aabb::new(self.mins.extract(i), self.maxs.extract(i))
    }

    /// The squared distances from `point` to the nearest and farthest points of each AABB.
    ///
    /// Returns `(d2_min, d2_max)`. On each lane, `d2_min` is zero if `point` lies inside
    /// that AABB. Both are computed for all lanes at once without branching.
    #[inline]
    pub fn distance_bounds_to_local_point(&self, point: &Point<Real>) -> (N, N) {
        let zero = N::zero();
        let point = Point::<N>::splat(*point);
        let mut d2_min = zero;
        let mut d2_max = zero;

        for i in 0..DIM {
            let below = self.mins[i] - point[i];
            let above = point[i] - self.maxs[i];
            let near = below.simd_max(above).simd_max(zero);
            let far = (point[i] - self.mins[i]).simd_max(self.maxs[i] - point[i]);
            d2_min += near * near;
            d2_max += far * far;
        }

        (d2_min, d2_max)
    }

    /// Merge all the AABB represented by `self` into a single one.
    ///
    /// Invalid lanes are ignored since they are the identity of the merge.
    pub fn to_merged_aabb(&self) -> Aabb {
        Aabb::new(
            self.mins.coords.map(|e| e.simd_horizontal_min()).into(),
            self.maxs.coords.map(|e| e.simd_horizontal_max()).into(),
        )
    }
}

impl<N: SimdLanes> From<&[Aabb]> for WideAabb<N> {
    /// Packs up to `N::WIDTH` AABBs. Missing lanes are set to invalid AABBs.
    fn from(aabbs: &[Aabb]) -> Self {
        let mut result = Self::new_invalid();
        for (i, aabb) in aabbs.iter().take(N::WIDTH).enumerate() {
            result.replace(i, *aabb);
        }
        result
    }
}

#[cfg(test)]
mod test {
    use super::WideAabb;
    use crate::bounding_volume::Aabb;
    use crate::math::{Point, SimdRealX16, SimdRealX4, SimdRealX8, Vector};
    use crate::utils::SimdLanes;
    use simba::simd::SimdValue;

    fn check_bounds<N: SimdLanes>() {
        let aabbs: Vec<_> = (0..N::WIDTH - 1)
            .map(|i| {
                let mins = Point::from(Vector::repeat(i as f32));
                Aabb::new(mins, mins + Vector::repeat(0.5))
            })
            .collect();
        let wide = WideAabb::<N>::from(&aabbs[..]);
        let query = Point::from(Vector::repeat(1.25));
        let (d2_min, d2_max) = wide.distance_bounds_to_local_point(&query);

        for (i, aabb) in aabbs.iter().enumerate() {
            let (expected_min, expected_max) = aabb.distance_bounds_to_local_point(&query);
            assert_relative_eq!(d2_min.extract(i), expected_min);
            assert_relative_eq!(d2_max.extract(i), expected_max);
            assert_eq!(wide.extract(i), *aabb);
        }

        assert!(!wide.extract(N::WIDTH - 1).is_valid());
        let expected = Aabb::from_points(aabbs.iter().flat_map(|aabb| [aabb.mins, aabb.maxs]));
        assert_eq!(wide.to_merged_aabb(), expected);
    }

    #[test]
    fn wide_distance_bounds_match_scalar() {
        check_bounds::<SimdRealX4>();
        check_bounds::<SimdRealX8>();
        check_bounds::<SimdRealX16>();
    }
}
