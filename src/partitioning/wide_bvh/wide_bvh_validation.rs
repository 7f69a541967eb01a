use super::wide_bvh_tree::{WideBvh, WideChild};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::Point;
use crate::partitioning::assert_leaves_cover_root;
use crate::shape::SimplexPrimitive;
use crate::utils::SimdLanes;
use simba::simd::SimdValue;
use std::collections::HashSet;

impl<N: SimdLanes> WideBvh<N> {
    /// Panics if the tree isn’t well-formed.
    ///
    /// The tree is well-formed if every node and leaf is reachable exactly once from the root,
    /// if unused lanes come after the used ones with invalid AABBs and zero vertices, if the
    /// AABB of each lane contains the AABBs of its child or intersects the primitives of its
    /// leaf, if every primitive of `prims` is stored in at least one leaf, and if the leaves
    /// cover exactly the root AABB.
    ///
    /// Returns the calculated leaf count.
    pub fn assert_well_formed<P: SimplexPrimitive>(&self, prims: &[P]) -> usize {
        if self.nodes.is_empty() {
            assert!(self.leaves.is_empty());
            assert!(prims.is_empty());
            assert_eq!(self.depth, 0);
            return 0;
        }

        let mut loop_detection = HashSet::new();
        let mut visited_leaves = HashSet::new();
        let mut covered = vec![false; prims.len()];
        let mut leaf_bounds = Aabb::new_invalid();
        let depth = self.assert_well_formed_recurse(
            prims,
            0,
            &mut loop_detection,
            &mut visited_leaves,
            &mut covered,
            &mut leaf_bounds,
        );
        assert_leaves_cover_root(&leaf_bounds, &self.bounding_box());

        assert_eq!(depth, self.depth);
        assert_eq!(loop_detection.len(), self.nodes.len());
        assert_eq!(visited_leaves.len(), self.leaves.len());

        if let Some(missing) = covered.iter().position(|covered| !covered) {
            panic!("Primitive {} is not stored in any leaf.", missing);
        }

        visited_leaves.len()
    }

    /// Returns the depth of the subtree at `node_id`.
    fn assert_well_formed_recurse<P: SimplexPrimitive>(
        &self,
        prims: &[P],
        node_id: u32,
        loop_detection: &mut HashSet<u32>,
        visited_leaves: &mut HashSet<u32>,
        covered: &mut [bool],
        leaf_bounds: &mut Aabb,
    ) -> usize {
        if !loop_detection.insert(node_id) {
            panic!("Detected loop. Node {} visited twice.", node_id);
        }

        let node = &self.nodes[node_id as usize];
        let child_count = node.child_count();
        assert!(child_count >= 1);
        let mut depth = 1;

        for (lane, child) in node.children.as_ref().iter().enumerate() {
            let aabb = node.aabbs.extract(lane);

            match *child {
                WideChild::Empty => {
                    assert!(lane >= child_count, "Empty lane before a used one.");
                    assert!(!aabb.is_valid());
                }
                WideChild::Node(child_id) => {
                    let child_aabb = self.nodes[child_id as usize].aabbs.to_merged_aabb();
                    assert!(aabb.contains(&child_aabb));
                    depth = depth.max(
                        1 + self.assert_well_formed_recurse(
                            prims,
                            child_id,
                            loop_detection,
                            visited_leaves,
                            covered,
                            leaf_bounds,
                        ),
                    );
                }
                WideChild::Leaf(leaf_id) => {
                    if !visited_leaves.insert(leaf_id) {
                        panic!("Detected loop. Leaf {} visited twice.", leaf_id);
                    }

                    leaf_bounds.merge(&aabb);
                    let leaf = &self.leaves[leaf_id as usize];
                    let primitive_count = leaf.primitive_count();
                    assert!(primitive_count >= 1);

                    for (leaf_lane, primitive) in leaf.primitives.as_ref().iter().enumerate() {
                        match primitive {
                            Some(primitive) => {
                                let prim = &prims[*primitive as usize];
                                assert!(aabb.intersects(&prim.aabb()));
                                let vertices = prim.vertices();
                                for (vertex, expected) in leaf.vertices.iter().zip(vertices) {
                                    assert_eq!(vertex.extract(leaf_lane), expected);
                                }
                                covered[*primitive as usize] = true;
                            }
                            None => {
                                assert!(leaf_lane >= primitive_count);
                                for vertex in &leaf.vertices {
                                    assert_eq!(vertex.extract(leaf_lane), Point::origin());
                                }
                            }
                        }
                    }
                }
            }
        }

        depth
    }
}
