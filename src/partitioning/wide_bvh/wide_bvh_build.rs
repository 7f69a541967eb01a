use super::wide_bvh_tree::{WideBuildStats, WideBvh, WideChild, WideLeaf, WideNode};
use crate::bounding_volume::Aabb;
use crate::math::Real;
use crate::partitioning::{BuildError, Sbvh};
use crate::shape::SimplexPrimitive;
use crate::utils::SimdLanes;
use arrayvec::ArrayVec;
use std::time::Instant;

/// The largest number of children a wide node may have.
const MAX_WIDTH: usize = 16;

/// A binary node to convert, and the lane of the wide node it will be attached to.
#[derive(Copy, Clone, Debug)]
struct WideBuildJob {
    node: u32,
    parent: Option<(u32, usize)>,
    depth: usize,
}

impl<N: SimdLanes> WideBvh<N> {
    /// Builds a wide BVH from `sbvh`, returning it together with statistics about its
    /// construction.
    ///
    /// `prims` must be the primitives `sbvh` was built from. Fails if `sbvh` may have leaves
    /// with more than `N::WIDTH` references.
    pub fn build<P: SimplexPrimitive>(
        sbvh: &Sbvh,
        prims: &[P],
    ) -> Result<(Self, WideBuildStats), BuildError> {
        let leaf_size = sbvh.options().leaf_size;
        if leaf_size > N::WIDTH {
            return Err(BuildError::LeafSizeExceedsSimdWidth {
                leaf_size,
                width: N::WIDTH,
            });
        }

        let timer = Instant::now();
        let mut result = Self::default();

        if !sbvh.is_empty() {
            result.build_from_root(sbvh, prims);
        }

        let primitive_count = result
            .leaves
            .iter()
            .map(|leaf| leaf.primitive_count())
            .sum();
        let stats = WideBuildStats {
            node_count: result.nodes.len(),
            leaf_count: result.leaves.len(),
            primitive_count,
            average_leaf_size: if result.leaves.is_empty() {
                0.0
            } else {
                primitive_count as Real / result.leaves.len() as Real
            },
            depth: result.depth,
            build_time: timer.elapsed(),
        };

        log::info!(
            "Built {}-wide BVH ({}) in {:?}: {} nodes, {} leaves, depth {}, {:.2} primitives per leaf.",
            N::WIDTH,
            N::NAME,
            stats.build_time,
            stats.node_count,
            stats.leaf_count,
            stats.depth,
            stats.average_leaf_size,
        );

        Ok((result, stats))
    }

    fn build_from_root<P: SimplexPrimitive>(&mut self, sbvh: &Sbvh, prims: &[P]) {
        let binary_nodes = sbvh.nodes();
        let mut jobs = vec![WideBuildJob {
            node: 0,
            parent: None,
            depth: 1,
        }];

        while let Some(job) = jobs.pop() {
            let binary = &binary_nodes[job.node as usize];

            if job.parent.is_some() && binary.is_leaf() {
                let leaf_id = self.leaves.len() as u32;
                self.leaves
                    .push(WideLeaf::new(sbvh.leaf_primitives(binary), prims));
                self.attach(job.parent, WideChild::Leaf(leaf_id), &binary.aabb);
                continue;
            }

            let wide_id = self.nodes.len() as u32;
            self.nodes.push(WideNode::new(&binary.aabb));
            self.depth = self.depth.max(job.depth);
            self.attach(job.parent, WideChild::Node(wide_id), &binary.aabb);

            // Collect the descendants of `binary` that are `N::MAX_DEPTH` levels below it,
            // or shallower leaves, from left to right.
            let mut descendants = ArrayVec::<u32, MAX_WIDTH>::new();
            let mut stack = ArrayVec::<(u32, usize), MAX_WIDTH>::new();
            stack.push((job.node, 0));

            while let Some((id, level)) = stack.pop() {
                let node = &binary_nodes[id as usize];

                if !node.is_leaf() && level < N::MAX_DEPTH {
                    stack.push((id + node.right_offset, level + 1));
                    stack.push((id + 1, level + 1));
                } else {
                    descendants.push(id);
                }
            }

            // Reversed so the leftmost descendant is converted first.
            for (lane, node) in descendants.iter().enumerate().rev() {
                jobs.push(WideBuildJob {
                    node: *node,
                    parent: Some((wide_id, lane)),
                    depth: job.depth + 1,
                });
            }
        }
    }

    fn attach(&mut self, parent: Option<(u32, usize)>, child: WideChild, aabb: &Aabb) {
        if let Some((parent, lane)) = parent {
            let parent = &mut self.nodes[parent as usize];
            parent.aabbs.replace(lane, *aabb);
            parent.children.as_mut()[lane] = child;
        }
    }
}
