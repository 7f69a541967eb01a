use super::wide_bvh_tree::{WideBvh, WideChild};
use crate::bounding_volume::BoundingSphere;
use crate::math::Real;
use crate::query::point::simd_closest_points_on_simplices;
use crate::query::Interaction;
use crate::utils::SimdLanes;
use simba::simd::{SimdBool as _, SimdValue};
use std::collections::VecDeque;

impl<N: SimdLanes> WideBvh<N> {
    /// Finds the point closest to the center of `sphere`, within `sphere`.
    ///
    /// Nodes are visited in breadth-first order. Each time a node is visited, the sphere is
    /// shrunk to the farthest distance to each of its children: a point at least that close is
    /// guaranteed to exist. Children whose nearest distance exceeds the radius are skipped, and
    /// queued nodes are discarded once the radius becomes smaller than their nearest distance.
    ///
    /// Returns `None` if no point lies in the sphere. Otherwise, the squared radius of `sphere`
    /// is the squared distance to the returned point.
    pub fn find_closest_point(&self, sphere: &mut BoundingSphere) -> Option<Interaction> {
        if self.nodes.is_empty() {
            return None;
        }

        let mut best: Option<(Interaction, Real)> = None;
        let mut queue = VecDeque::new();
        queue.push_back((0u32, Real::NEG_INFINITY));

        while let Some((id, d2_bound)) = queue.pop_front() {
            if d2_bound > sphere.radius2 {
                continue;
            }

            let node = &self.nodes[id as usize];
            let (d2_min, d2_max) = node.aabbs.distance_bounds_to_local_point(&sphere.center);

            for (lane, child) in node.children.as_ref().iter().enumerate() {
                if child.is_empty() {
                    break;
                }

                let _ = sphere.shrink(d2_max.extract(lane));
                let child_d2_min = d2_min.extract(lane);

                if child_d2_min > sphere.radius2 {
                    continue;
                }

                match *child {
                    WideChild::Node(child_id) => queue.push_back((child_id, child_d2_min)),
                    WideChild::Leaf(leaf_id) => {
                        self.closest_point_in_leaf(leaf_id, sphere, &mut best)
                    }
                    WideChild::Empty => {}
                }
            }
        }

        best.map(|(interaction, _)| interaction)
    }

    fn closest_point_in_leaf(
        &self,
        leaf_id: u32,
        sphere: &mut BoundingSphere,
        best: &mut Option<(Interaction, Real)>,
    ) {
        let leaf = &self.leaves[leaf_id as usize];
        let (points, d2) = simd_closest_points_on_simplices(&leaf.vertices, &sphere.center);
        let d2 = d2 + leaf.padding;

        let min_d2 = d2.simd_horizontal_min();
        // The lowest lane wins ties.
        let lane = d2.simd_le(N::splat(min_d2)).bitmask().trailing_zeros() as usize;

        let Some(primitive) = leaf.primitives.as_ref().get(lane).copied().flatten() else {
            return;
        };

        let improves = best.map(|(_, best_d2)| min_d2 < best_d2).unwrap_or(true);
        if min_d2 <= sphere.radius2 && improves {
            sphere.radius2 = min_d2;
            *best = Some((
                Interaction::new(points.extract(lane), min_d2.sqrt(), primitive),
                min_d2,
            ));
        }
    }
}
