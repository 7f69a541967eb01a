use crate::{random_point, random_triangles, unit_triangle};
use rand::SeedableRng;
use rand_isaac::IsaacRng;
use sbvh3d::na::{Point3, Vector3};
use sbvh3d::partitioning::{Sbvh, SbvhOptions};
use sbvh3d::query::Ray;
use sbvh3d::shape::Primitive;

#[test]
fn ray_cast_matches_linear_scan() {
    let mut rng = IsaacRng::seed_from_u64(10);

    for _ in 0..20 {
        let prims = random_triangles(&mut rng, 200, 10.0, 3.0);
        let sbvh = Sbvh::new(&prims, SbvhOptions::default());

        for _ in 0..50 {
            let origin = random_point(&mut rng, 20.0);
            let dir = random_point(&mut rng, 5.0) - origin;
            let ray = Ray::new(origin, dir.normalize());

            let mut expected: Vec<_> = prims
                .iter()
                .enumerate()
                .filter_map(|(i, prim)| Some((prim.cast_ray(&ray, f32::MAX)?.0, i as u32)))
                .collect();
            expected.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

            let hits = sbvh.intersect_ray_all(&prims, &ray, f32::MAX);
            let hits: Vec<_> = hits.iter().map(|hit| (hit.distance, hit.primitive)).collect();
            assert_eq!(hits, expected);

            let closest = sbvh.cast_ray(&prims, &ray, f32::MAX);
            assert_eq!(closest.map(|hit| hit.distance), expected.first().map(|e| e.0));
            assert_eq!(sbvh.intersects_ray(&prims, &ray, f32::MAX), !expected.is_empty());
        }
    }
}

#[test]
fn ray_cast_respects_max_toi() {
    let prims = vec![
        unit_triangle(Vector3::new(0.0, 0.0, 1.0)),
        unit_triangle(Vector3::new(0.0, 0.0, 5.0)),
    ];
    let sbvh = Sbvh::new(&prims, SbvhOptions::default().with_leaf_size(1));
    let ray = Ray::new(Point3::new(0.25, 0.25, 0.0), Vector3::z());

    let hit = sbvh.cast_ray(&prims, &ray, f32::MAX).unwrap();
    assert_eq!(hit.primitive, 0);
    assert_relative_eq!(hit.distance, 1.0);
    assert_relative_eq!(hit.point, Point3::new(0.25, 0.25, 1.0));
    assert_relative_eq!(hit.normal.unwrap(), -Vector3::z());

    assert_eq!(sbvh.intersect_ray_all(&prims, &ray, f32::MAX).len(), 2);
    assert_eq!(sbvh.intersect_ray_all(&prims, &ray, 2.0).len(), 1);
    assert!(!sbvh.intersects_ray(&prims, &ray, 0.5));
    assert!(sbvh.cast_ray(&prims, &ray, 0.5).is_none());
}
