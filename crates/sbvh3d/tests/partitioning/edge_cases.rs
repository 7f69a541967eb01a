use crate::{random_point, random_triangles, unit_triangle};
use rand::SeedableRng;
use rand_isaac::IsaacRng;
use sbvh3d::bounding_volume::BoundingSphere;
use sbvh3d::na::{Point3, Vector3};
use sbvh3d::partitioning::{DynWideBvh, Sbvh, SbvhOptions, SimdWidth};
use sbvh3d::shape::{Primitive, Triangle};

const WIDTHS: [SimdWidth; 3] = [SimdWidth::X4, SimdWidth::X8, SimdWidth::X16];

fn build(prims: &[Triangle], width: SimdWidth) -> (Sbvh, DynWideBvh) {
    let sbvh = Sbvh::new(prims, SbvhOptions::default());
    let (bvh, _) = DynWideBvh::build(width, &sbvh, prims).unwrap();
    let _ = sbvh.assert_well_formed(prims);
    let _ = bvh.assert_well_formed(prims);
    (sbvh, bvh)
}

#[test]
fn empty_set_finds_nothing() {
    for width in WIDTHS {
        let (sbvh, bvh) = build(&[], width);
        assert!(sbvh.is_empty() && bvh.is_empty());

        let mut sphere = BoundingSphere::unbounded(Point3::origin());
        assert!(bvh.find_closest_point(&mut sphere).is_none());
        assert!(sphere.is_unbounded());
    }
}

#[test]
fn single_triangle_is_always_found() {
    let mut rng = IsaacRng::seed_from_u64(0);
    let prims = random_triangles(&mut rng, 1, 5.0, 2.0);

    for width in WIDTHS {
        let (_, bvh) = build(&prims, width);

        for _ in 0..100 {
            let center = random_point(&mut rng, 1.0e3);
            let mut sphere = BoundingSphere::unbounded(center);
            let found = bvh.find_closest_point(&mut sphere).unwrap();
            assert_eq!(found.primitive, 0);
            assert_eq!(found.point, prims[0].project_point(&center));
        }
    }
}

#[test]
fn coincident_triangles_are_found_at_zero_distance() {
    let point = Point3::new(1.0, -2.0, 3.0);
    let prims = vec![Triangle::new(point, point, point); 40];

    for width in WIDTHS {
        let (_, bvh) = build(&prims, width);
        let mut sphere = BoundingSphere::new(point, 1.0);
        let found = bvh.find_closest_point(&mut sphere).unwrap();
        assert_eq!(found.distance, 0.0);
        assert_eq!(found.point, point);
        assert_eq!(sphere.radius2, 0.0);
    }
}

#[test]
fn far_query_finds_the_nearest_triangle() {
    let mut rng = IsaacRng::seed_from_u64(1);
    let prims = random_triangles(&mut rng, 100, 5.0, 1.0);
    let center = Point3::new(1.0e3, 0.0, 0.0);

    for width in WIDTHS {
        let (sbvh, bvh) = build(&prims, width);
        assert!(!sbvh.bounding_box().contains_local_point(&center));

        let mut sphere = BoundingSphere::new(center, 2.0e3);
        let found = bvh.find_closest_point(&mut sphere).unwrap();
        let expected = prims
            .iter()
            .map(|prim| sbvh3d::na::distance(&prim.project_point(&center), &center))
            .fold(f32::MAX, f32::min);
        assert_relative_eq!(found.distance, expected, epsilon = 1.0e-3);

        let mut small_sphere = BoundingSphere::new(center, 10.0);
        assert!(bvh.find_closest_point(&mut small_sphere).is_none());
    }
}

#[test]
fn repeated_queries_are_idempotent() {
    let mut rng = IsaacRng::seed_from_u64(2);
    let prims = random_triangles(&mut rng, 500, 10.0, 1.0);

    for width in WIDTHS {
        let (_, bvh) = build(&prims, width);

        for _ in 0..20 {
            let center = random_point(&mut rng, 12.0);
            let mut first = BoundingSphere::unbounded(center);
            let mut second = BoundingSphere::unbounded(center);
            assert_eq!(
                bvh.find_closest_point(&mut first),
                bvh.find_closest_point(&mut second)
            );
            assert_eq!(first, second);
        }
    }
}

#[test]
fn rebuilding_is_deterministic() {
    let mut rng = IsaacRng::seed_from_u64(3);
    let prims = random_triangles(&mut rng, 300, 10.0, 4.0);
    let sbvh = Sbvh::new(&prims, SbvhOptions::default());

    for width in WIDTHS {
        let (a, stats_a) = DynWideBvh::build(width, &sbvh, &prims).unwrap();
        let (b, stats_b) = DynWideBvh::build(width, &sbvh, &prims).unwrap();
        assert_eq!(stats_a.node_count, stats_b.node_count);
        assert_eq!(stats_a.leaf_count, stats_b.leaf_count);

        match (a, b) {
            (DynWideBvh::X4(a), DynWideBvh::X4(b)) => {
                assert_eq!(a.nodes(), b.nodes());
                assert_eq!(a.leaves(), b.leaves());
            }
            (DynWideBvh::X8(a), DynWideBvh::X8(b)) => {
                assert_eq!(a.nodes(), b.nodes());
                assert_eq!(a.leaves(), b.leaves());
            }
            (DynWideBvh::X16(a), DynWideBvh::X16(b)) => {
                assert_eq!(a.nodes(), b.nodes());
                assert_eq!(a.leaves(), b.leaves());
            }
            _ => unreachable!(),
        }
    }
}

#[test]
fn far_apart_clusters_are_split() {
    let mut prims = vec![];
    for i in 0..20 {
        prims.push(unit_triangle(Vector3::new(0.0, i as f32 * 0.01, 0.0)));
        prims.push(unit_triangle(Vector3::new(50.0, i as f32 * 0.01, 0.0)));
    }

    let sbvh = Sbvh::new(&prims, SbvhOptions::default());
    let _ = sbvh.assert_well_formed(&prims);
    let root = &sbvh.nodes()[0];
    let left = &sbvh.nodes()[1];
    let right = &sbvh.nodes()[root.right_offset as usize];
    assert!(left.aabb.intersection(&right.aabb).is_none());
    assert_eq!(left.count, 20);
    assert_eq!(right.count, 20);
}
