use crate::{random_point, random_triangles, sorted_distances};
use rand::{Rng, SeedableRng};
use rand_isaac::IsaacRng;
use sbvh3d::bounding_volume::BoundingSphere;
use sbvh3d::math::{SimdRealX16, SimdRealX4, SimdRealX8};
use sbvh3d::partitioning::{CostHeuristic, Sbvh, SbvhOptions, WideBvh};
use sbvh3d::utils::SimdLanes;

const SETS: usize = 100;
const QUERIES: usize = 100;
const TOLERANCE: f32 = 1.0e-4;

fn closest_point_matches_linear_scan<N: SimdLanes>() {
    let mut rng = IsaacRng::seed_from_u64(N::WIDTH as u64);
    let heuristics = [
        CostHeuristic::LongestAxisCenter,
        CostHeuristic::SurfaceArea,
        CostHeuristic::OverlapSurfaceArea,
        CostHeuristic::Volume,
        CostHeuristic::OverlapVolume,
    ];

    for set in 0..SETS {
        let count = rng.gen_range(1..150);
        let size = rng.gen_range(0.1..5.0);
        let prims = random_triangles(&mut rng, count, 10.0, size);
        let options = SbvhOptions::default()
            .with_cost_heuristic(heuristics[set % heuristics.len()])
            .with_leaf_size(rng.gen_range(1..=N::WIDTH.min(8)));
        let sbvh = Sbvh::new(&prims, options);
        let bvh = WideBvh::<N>::new(&sbvh, &prims);
        let _ = bvh.assert_well_formed(&prims);

        for _ in 0..QUERIES {
            let center = random_point(&mut rng, 15.0);
            let radius = if rng.gen_bool(0.25) {
                rng.gen_range(0.0..5.0)
            } else {
                f32::INFINITY
            };
            let initial = BoundingSphere::new(center, radius);
            let expected = sorted_distances(&prims, &initial);

            let mut sphere = initial;
            let found = bvh.find_closest_point(&mut sphere);

            let Some(found) = found else {
                assert!(expected.is_empty(), "Missed {:?}.", expected[0]);
                assert_eq!(sphere.radius2, initial.radius2);
                continue;
            };

            let (distance, primitive) = expected[0];
            assert_relative_eq!(found.distance, distance, epsilon = TOLERANCE);
            assert!(sphere.radius2 <= initial.radius2);

            // Primitives at nearly the same distance may legitimately be swapped.
            if expected.len() == 1 || expected[1].0 - distance > TOLERANCE {
                assert_eq!(found.primitive, primitive);
            }

            // The binary tree must agree.
            let mut scalar_sphere = initial;
            let scalar = sbvh.find_closest_point(&prims, &mut scalar_sphere).unwrap();
            assert_relative_eq!(scalar.distance, found.distance, epsilon = TOLERANCE);
        }
    }
}

#[test]
fn closest_point_matches_linear_scan_x4() {
    closest_point_matches_linear_scan::<SimdRealX4>();
}

#[test]
fn closest_point_matches_linear_scan_x8() {
    closest_point_matches_linear_scan::<SimdRealX8>();
}

#[test]
fn closest_point_matches_linear_scan_x16() {
    closest_point_matches_linear_scan::<SimdRealX16>();
}
