use crate::unit_triangle;
use sbvh3d::bounding_volume::BoundingSphere;
use sbvh3d::math::{SimdRealX16, SimdRealX4, SimdRealX8};
use sbvh3d::na::{Point3, Vector3};
use sbvh3d::partitioning::{Sbvh, SbvhOptions, WideBvh};
use sbvh3d::shape::Triangle;
use sbvh3d::utils::SimdLanes;

fn two_far_triangles() -> Vec<Triangle> {
    vec![
        unit_triangle(Vector3::zeros()),
        unit_triangle(Vector3::new(100.0, 0.0, 0.0)),
    ]
}

fn check_vertex_query<N: SimdLanes>(leaf_size: usize) {
    let prims = two_far_triangles();
    let sbvh = Sbvh::new(&prims, SbvhOptions::default().with_leaf_size(leaf_size));
    let bvh = WideBvh::<N>::new(&sbvh, &prims);
    let _ = bvh.assert_well_formed(&prims);

    for vertex in [prims[0].a, prims[0].b, prims[0].c] {
        let mut sphere = BoundingSphere::new(vertex, 200.0);
        let found = bvh.find_closest_point(&mut sphere).unwrap();
        assert_eq!(found.primitive, 0);
        assert_eq!(found.distance, 0.0);
        assert_eq!(found.point, vertex);
        assert_eq!(found.normal, None);
    }

    let mut sphere = BoundingSphere::new(Point3::new(100.0, 0.0, 0.0), 200.0);
    let found = bvh.find_closest_point(&mut sphere).unwrap();
    assert_eq!(found.primitive, 1);
    assert_eq!(found.distance, 0.0);
}

#[test]
fn vertex_query_finds_the_near_triangle() {
    for leaf_size in [1, 2] {
        check_vertex_query::<SimdRealX4>(leaf_size);
        check_vertex_query::<SimdRealX8>(leaf_size);
        check_vertex_query::<SimdRealX16>(leaf_size);
    }
}

#[test]
fn vertex_query_on_the_binary_tree() {
    let prims = two_far_triangles();
    let sbvh = Sbvh::new(&prims, SbvhOptions::default().with_leaf_size(1));
    let mut sphere = BoundingSphere::new(Point3::origin(), 200.0);
    let found = sbvh.find_closest_point(&prims, &mut sphere).unwrap();
    assert_eq!(found.primitive, 0);
    assert_eq!(found.distance, 0.0);
}
