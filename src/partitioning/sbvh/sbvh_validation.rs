use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::partitioning::{assert_leaves_cover_root, Sbvh};
use crate::shape::Primitive;
use std::collections::HashSet;

impl Sbvh {
    /// Panics if the tree isn’t well-formed.
    ///
    /// The tree is well-formed if its nodes are laid out in depth-first order with consistent
    /// reference ranges, if every parent AABB contains the AABBs of its children, if every
    /// leaf holds between 1 and `leaf_size` references, and if every primitive of `prims` is
    /// referenced by at least one leaf. The leaves must also cover exactly the root AABB.
    ///
    /// Returns the calculated leaf count.
    pub fn assert_well_formed<P: Primitive>(&self, prims: &[P]) -> usize {
        if self.nodes.is_empty() {
            assert!(self.references.is_empty());
            assert!(prims.is_empty());
            return 0;
        }

        let root = &self.nodes[0];
        assert_eq!(root.start, 0);
        assert_eq!(root.count as usize, self.references.len());

        let mut loop_detection = HashSet::new();
        let mut leaf_bounds = Aabb::new_invalid();
        let (leaf_count, node_count) =
            self.assert_well_formed_recurse(prims, 0, &mut loop_detection, &mut leaf_bounds);
        assert_eq!(node_count, self.nodes.len());
        assert_leaves_cover_root(&leaf_bounds, &self.bounding_box());

        let mut covered = vec![false; prims.len()];
        for primitive in &self.references {
            covered[*primitive as usize] = true;
        }

        if let Some(missing) = covered.iter().position(|covered| !covered) {
            panic!("Primitive {} is not referenced by any leaf.", missing);
        }

        leaf_count
    }

    /// Returns the number of leaves and the number of nodes of the subtree at `node_id`.
    fn assert_well_formed_recurse<P: Primitive>(
        &self,
        prims: &[P],
        node_id: usize,
        loop_detection: &mut HashSet<usize>,
        leaf_bounds: &mut Aabb,
    ) -> (usize, usize) {
        let node = &self.nodes[node_id];

        if !loop_detection.insert(node_id) {
            panic!("Detected loop. Node {} visited twice.", node_id);
        }

        assert!(node.aabb.is_valid());
        assert!(node.count >= 1);
        assert!(node.range().end <= self.references.len());

        if node.is_leaf() {
            assert!(node.count as usize <= self.options.leaf_size);

            for primitive in self.leaf_primitives(node) {
                let prim_aabb = prims[*primitive as usize].aabb();
                assert!(
                    node.aabb.intersects(&prim_aabb),
                    "Leaf {} does not overlap its primitive {}.",
                    node_id,
                    primitive
                );
            }

            leaf_bounds.merge(&node.aabb);
            return (1, 1);
        }

        assert!(node.right_offset >= 2);
        let left_id = node_id + 1;
        let right_id = node_id + node.right_offset as usize;
        let left = &self.nodes[left_id];
        let right = &self.nodes[right_id];

        assert!(node.aabb.contains(&left.aabb));
        assert!(node.aabb.contains(&right.aabb));
        assert_eq!(left.start, node.start);
        assert_eq!(right.start, left.start + left.count);
        assert_eq!(node.count, left.count + right.count);

        let (left_leaves, left_nodes) =
            self.assert_well_formed_recurse(prims, left_id, loop_detection, leaf_bounds);
        // The left subtree is stored between the node and its right child.
        assert_eq!(left_nodes, node.right_offset as usize - 1);
        let (right_leaves, right_nodes) =
            self.assert_well_formed_recurse(prims, right_id, loop_detection, leaf_bounds);

        (left_leaves + right_leaves, 1 + left_nodes + right_nodes)
    }
}
