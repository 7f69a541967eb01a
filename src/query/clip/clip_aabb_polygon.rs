use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};

impl Aabb {
    /// Clips the polygon `points` by this `Aabb`, in-place.
    #[inline]
    pub fn clip_polygon(&self, points: &mut Vec<Point<Real>>) {
        let mut workspace = Vec::new();
        self.clip_polygon_with_workspace(points, &mut workspace)
    }

    /// Clips the polygon `points` by this `Aabb`, in-place, reusing `workspace` as a buffer.
    #[inline]
    pub fn clip_polygon_with_workspace(
        &self,
        points: &mut Vec<Point<Real>>,
        workspace: &mut Vec<Point<Real>>,
    ) {
        for i in 0..DIM {
            let axis = Vector::ith(i, 1.0);
            super::clip_halfspace_polygon(&self.mins, &-axis, points, workspace);
            super::clip_halfspace_polygon(&self.maxs, &axis, workspace, points);
        }
    }
}
