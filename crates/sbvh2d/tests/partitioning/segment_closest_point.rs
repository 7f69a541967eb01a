use crate::{random_point, random_segments};
use rand::{Rng, SeedableRng};
use rand_isaac::IsaacRng;
use sbvh2d::bounding_volume::BoundingSphere;
use sbvh2d::math::{SimdRealX16, SimdRealX4, SimdRealX8};
use sbvh2d::partitioning::{CostHeuristic, Sbvh, SbvhOptions, WideBvh};
use sbvh2d::shape::Primitive;
use sbvh2d::utils::SimdLanes;

const TOLERANCE: f32 = 1.0e-4;

fn segments_match_linear_scan<N: SimdLanes>() {
    let mut rng = IsaacRng::seed_from_u64(N::WIDTH as u64);

    for set in 0..100 {
        let heuristic = if set % 2 == 0 {
            CostHeuristic::SurfaceArea
        } else {
            CostHeuristic::OverlapVolume
        };
        let count = rng.gen_range(1..120);
        let prims = random_segments(&mut rng, count, 10.0, 3.0);
        let sbvh = Sbvh::new(&prims, SbvhOptions::default().with_cost_heuristic(heuristic));
        let _ = sbvh.assert_well_formed(&prims);
        let bvh = WideBvh::<N>::new(&sbvh, &prims);
        let _ = bvh.assert_well_formed(&prims);

        for _ in 0..100 {
            let center = random_point(&mut rng, 15.0);
            let mut sphere = BoundingSphere::unbounded(center);
            let found = bvh.find_closest_point(&mut sphere).unwrap();

            let expected = prims
                .iter()
                .map(|prim| sbvh2d::na::distance(&prim.project_point(&center), &center))
                .fold(f32::MAX, f32::min);
            assert_relative_eq!(found.distance, expected, epsilon = TOLERANCE);

            let owner = &prims[found.primitive as usize];
            assert_relative_eq!(owner.project_point(&center), found.point, epsilon = TOLERANCE);
        }
    }
}

#[test]
fn segments_match_linear_scan_x4() {
    segments_match_linear_scan::<SimdRealX4>();
}

#[test]
fn segments_match_linear_scan_x8() {
    segments_match_linear_scan::<SimdRealX8>();
}

#[test]
fn segments_match_linear_scan_x16() {
    segments_match_linear_scan::<SimdRealX16>();
}
