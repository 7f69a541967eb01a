use crate::closed_polyline;
use sbvh2d::bounding_volume::BoundingSphere;
use sbvh2d::na::{Point2, Vector2};
use sbvh2d::partitioning::{DynWideBvh, Sbvh, SbvhOptions, SimdWidth};
use sbvh2d::query::Ray;

fn square() -> Vec<Point2<f32>> {
    vec![
        Point2::new(-1.0, -1.0),
        Point2::new(1.0, -1.0),
        Point2::new(1.0, 1.0),
        Point2::new(-1.0, 1.0),
    ]
}

#[test]
fn square_boundary_aggregates() {
    let prims = closed_polyline(&square());
    let sbvh = Sbvh::new(&prims, SbvhOptions::default().with_leaf_size(1));
    let _ = sbvh.assert_well_formed(&prims);

    assert_relative_eq!(sbvh.surface_area(&prims), 8.0);
    assert_relative_eq!(sbvh.signed_volume(&prims), 4.0);
    assert_eq!(sbvh.centroid(), Some(Point2::origin()));
    assert_eq!(sbvh.bounding_box().mins, Point2::new(-1.0, -1.0));
}

#[test]
fn square_boundary_closest_point_from_inside() {
    let prims = closed_polyline(&square());
    let sbvh = Sbvh::new(&prims, SbvhOptions::default().with_leaf_size(1));
    let (bvh, _) = DynWideBvh::build(SimdWidth::X4, &sbvh, &prims).unwrap();

    let mut sphere = BoundingSphere::unbounded(Point2::new(0.75, 0.0));
    let found = bvh.find_closest_point(&mut sphere).unwrap();
    // The right edge, from (1, -1) to (1, 1).
    assert_eq!(found.primitive, 1);
    assert_relative_eq!(found.point, Point2::new(1.0, 0.0));
    assert_relative_eq!(found.distance, 0.25);
}

#[test]
fn square_boundary_ray_cast_from_inside() {
    let prims = closed_polyline(&square());
    let sbvh = Sbvh::new(&prims, SbvhOptions::default().with_leaf_size(1));
    let ray = Ray::new(Point2::origin(), Vector2::y());

    let hit = sbvh.cast_ray(&prims, &ray, f32::MAX).unwrap();
    assert_eq!(hit.primitive, 2);
    assert_relative_eq!(hit.distance, 1.0);
    assert_relative_eq!(hit.normal.unwrap(), -Vector2::y());
    assert_eq!(sbvh.intersect_ray_all(&prims, &ray, f32::MAX).len(), 1);
}
