use super::sbvh_cost::SplitCostModel;
use super::sbvh_object_split::ObjectSplit;
use super::sbvh_spatial_split::SpatialSplit;
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::Real;
use crate::partitioning::{
    BuildError, CostHeuristic, Sbvh, SbvhBuildStats, SbvhNode, SbvhOptions, SbvhReference,
};
use crate::shape::Primitive;
use std::time::Instant;

/// From this depth on, nodes are split at their median reference without any cost search.
///
/// This bounds the depth of the recursion whatever the geometry.
const MAX_SPLIT_DEPTH: usize = 64;

struct SbvhBuilder<'a, P> {
    prims: &'a [P],
    options: SbvhOptions,
    refs: Vec<SbvhReference>,
    nodes: Vec<SbvhNode>,
    budget: usize,
    duplicated: usize,
    max_depth: usize,
}

impl Sbvh {
    /// Builds a tree over `prims`.
    ///
    /// # Panics
    ///
    /// Panics if the options are invalid. See [`Sbvh::build`] for a non-panicking version.
    pub fn new<P: Primitive>(prims: &[P], options: SbvhOptions) -> Self {
        match Self::build(prims, options) {
            Ok((sbvh, _)) => sbvh,
            Err(e) => panic!("Failed to build the SBVH: {}", e),
        }
    }

    /// Builds a tree over `prims`, returning it together with statistics about its construction.
    ///
    /// An empty slice of primitives results in an empty tree.
    pub fn build<P: Primitive>(
        prims: &[P],
        options: SbvhOptions,
    ) -> Result<(Self, SbvhBuildStats), BuildError> {
        options.validate()?;

        if prims.len() > u32::MAX as usize {
            return Err(BuildError::TooManyPrimitives(prims.len()));
        }

        let timer = Instant::now();
        let refs: Vec<_> = prims
            .iter()
            .enumerate()
            .map(|(i, prim)| SbvhReference {
                primitive: i as u32,
                aabb: prim.aabb(),
                centroid: prim.centroid(),
            })
            .collect();
        let budget = options
            .memory_budget
            .unwrap_or(prims.len())
            .min(u32::MAX as usize - prims.len());

        let mut builder = SbvhBuilder {
            prims,
            options,
            nodes: Vec::with_capacity(2 * refs.len()),
            refs,
            budget,
            duplicated: 0,
            max_depth: 0,
        };

        if !builder.refs.is_empty() {
            let len = builder.refs.len();
            let _ = builder.build_recursive(0, len, 0);
        }

        let sbvh = Sbvh {
            nodes: builder.nodes,
            references: builder.refs.iter().map(|r| r.primitive).collect(),
            options,
        };

        let leaf_count = sbvh.leaf_count();
        let stats = SbvhBuildStats {
            node_count: sbvh.nodes.len(),
            leaf_count,
            reference_count: sbvh.references.len(),
            duplicated_references: builder.duplicated,
            max_depth: builder.max_depth,
            average_leaf_size: if leaf_count == 0 {
                0.0
            } else {
                sbvh.references.len() as Real / leaf_count as Real
            },
            build_time: timer.elapsed(),
        };

        log::info!(
            "Built SBVH over {} primitives in {:?}: {} nodes, {} leaves, {} references ({} duplicated), max depth {}, {:.2} references per leaf.",
            prims.len(),
            stats.build_time,
            stats.node_count,
            stats.leaf_count,
            stats.reference_count,
            stats.duplicated_references,
            stats.max_depth,
            stats.average_leaf_size,
        );

        Ok((sbvh, stats))
    }
}

impl<P: Primitive> SbvhBuilder<'_, P> {
    /// Builds the subtree over the references `start..end`.
    ///
    /// Spatial splits may add references to that range. Returns its new end.
    fn build_recursive(&mut self, start: usize, end: usize, depth: usize) -> usize {
        let node_id = self.nodes.len();
        let aabb = self.refs[start..end]
            .iter()
            .fold(Aabb::new_invalid(), |acc, r| acc.merged(&r.aabb));
        self.nodes.push(SbvhNode {
            aabb,
            start: start as u32,
            count: (end - start) as u32,
            right_offset: 0,
        });
        self.max_depth = self.max_depth.max(depth);

        if end - start <= self.options.leaf_size {
            return end;
        }

        let (mid, end) = self.split(start, end, &aabb, depth);
        let left_end = self.build_recursive(start, mid, depth + 1);
        // The left subtree may have grown, shifting the right one.
        let right_end = end + (left_end - mid);
        let right_id = self.nodes.len();
        let right_end = self.build_recursive(left_end, right_end, depth + 1);

        let node = &mut self.nodes[node_id];
        node.right_offset = (right_id - node_id) as u32;
        node.count = (right_end - start) as u32;
        right_end
    }

    /// Partitions the references `start..end` in two non-empty halves.
    ///
    /// Returns the end of the left half and the new end of the range.
    fn split(&mut self, start: usize, end: usize, aabb: &Aabb, depth: usize) -> (usize, usize) {
        let median = start + (end - start) / 2;

        if depth >= MAX_SPLIT_DEPTH {
            log::debug!("Forcing a median split of {} references at depth {}.", end - start, depth);
            return (median, end);
        }

        let model = SplitCostModel::new(self.options.cost_heuristic, aabb);
        let refs = &self.refs[start..end];

        let object = if self.options.cost_heuristic == CostHeuristic::LongestAxisCenter {
            ObjectSplit::longest_axis_center(refs, &model)
        } else {
            ObjectSplit::find(refs, &model, self.options.n_buckets)
        };

        let Some(object) = object else {
            // Every centroid coincides.
            return (median, end);
        };

        if self.options.cost_heuristic != CostHeuristic::LongestAxisCenter {
            if let Some(split) = self.spatial_split(start, end, aabb, &object, &model) {
                return split;
            }
        }

        (start + object.partition(&mut self.refs[start..end]), end)
    }

    fn spatial_split(
        &mut self,
        start: usize,
        end: usize,
        aabb: &Aabb,
        object: &ObjectSplit,
        model: &SplitCostModel,
    ) -> Option<(usize, usize)> {
        let overlap = object.overlap()?;
        if !model.overlap_exceeds(&overlap, self.options.split_alpha) {
            return None;
        }

        let refs = &self.refs[start..end];
        let spatial = SpatialSplit::find(
            self.prims,
            refs,
            aabb,
            object.axis,
            model,
            self.options.n_bins,
        )?;

        if spatial.cost >= object.cost {
            return None;
        }

        let remaining_budget = self.budget - self.duplicated;
        let partition = spatial.partition(self.prims, refs, model, remaining_budget)?;

        if partition.unsplit_by_budget > 0 {
            log::debug!(
                "Memory budget of {} references exhausted: {} straddling references were not duplicated.",
                self.budget,
                partition.unsplit_by_budget
            );
        }

        log::debug!(
            "Spatial split of {} references on axis {} at {}: {} left, {} right, {} duplicated.",
            end - start,
            spatial.axis,
            spatial.coord,
            partition.left.len(),
            partition.right.len(),
            partition.duplicated
        );

        self.duplicated += partition.duplicated;
        let mid = start + partition.left.len();
        let new_end = mid + partition.right.len();
        let _ = self
            .refs
            .splice(start..end, partition.left.into_iter().chain(partition.right));

        Some((mid, new_end))
    }
}
