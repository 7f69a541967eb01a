use super::sbvh_cost::SplitCostModel;
use super::sbvh_object_split::bucket_index;
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::Real;
use crate::partitioning::SbvhReference;
use crate::shape::Primitive;

#[derive(Copy, Clone, Debug, Default)]
struct SbvhBin {
    aabb: Aabb,
    entries: usize,
    exits: usize,
}

/// A split of the space of a node by an axis-aligned plane.
///
/// References straddling the plane are either clipped and duplicated into both children, or
/// moved entirely to one of them.
#[derive(Copy, Clone, Debug)]
pub(super) struct SpatialSplit {
    pub cost: Real,
    pub axis: usize,
    pub coord: Real,
    left_aabb: Aabb,
    right_aabb: Aabb,
    n_left: usize,
    n_right: usize,
}

/// The references of both children of a spatial split.
pub(super) struct SpatialPartition {
    pub left: Vec<SbvhReference>,
    pub right: Vec<SbvhReference>,
    pub duplicated: usize,
    pub unsplit_by_budget: usize,
}

impl SpatialSplit {
    /// Finds the cheapest spatial split of the node bounded by `node_aabb` along `axis`.
    ///
    /// Returns `None` if the node is flat along `axis` or if no bin boundary has references
    /// on both sides.
    pub fn find<P: Primitive>(
        prims: &[P],
        refs: &[SbvhReference],
        node_aabb: &Aabb,
        axis: usize,
        model: &SplitCostModel,
        n_bins: usize,
    ) -> Option<Self> {
        let origin = node_aabb.mins[axis];
        let extent = node_aabb.maxs[axis] - origin;

        if !(extent > 0.0) {
            return None;
        }

        let scale = n_bins as Real / extent;
        let bin_width = extent / n_bins as Real;
        let mut bins = vec![SbvhBin::default(); n_bins];

        for r in refs {
            let first = bucket_index(r.aabb.mins[axis], origin, scale, n_bins);
            let last = bucket_index(r.aabb.maxs[axis], origin, scale, n_bins);
            bins[first].entries += 1;
            bins[last].exits += 1;

            let prim = &prims[r.primitive as usize];
            let mut remaining = r.aabb;

            for (i, bin) in bins.iter_mut().enumerate().take(last).skip(first) {
                let plane = origin + (i + 1) as Real * bin_width;
                let (left, right) = prim.split(axis, plane, &remaining);
                bin.aabb.merge(&left);
                remaining = right;

                if !remaining.is_valid() {
                    break;
                }
            }

            bins[last].aabb.merge(&remaining);
        }

        // For each `i`, the merge of the bins `i..` and their exit count.
        let mut right_aabbs = vec![Aabb::new_invalid(); n_bins];
        let mut right_counts = vec![0; n_bins];
        let mut right_acc = (Aabb::new_invalid(), 0);

        for i in (0..n_bins).rev() {
            right_acc.0.merge(&bins[i].aabb);
            right_acc.1 += bins[i].exits;
            right_aabbs[i] = right_acc.0;
            right_counts[i] = right_acc.1;
        }

        let mut left_aabb = Aabb::new_invalid();
        let mut n_left = 0;
        let mut best: Option<Self> = None;

        for i in 0..n_bins - 1 {
            left_aabb.merge(&bins[i].aabb);
            n_left += bins[i].entries;
            let n_right = right_counts[i + 1];

            if n_left == 0 || n_right == 0 {
                continue;
            }

            let cost = model.cost(&left_aabb, n_left, &right_aabbs[i + 1], n_right);
            if best.map(|best| cost < best.cost).unwrap_or(true) {
                best = Some(Self {
                    cost,
                    axis,
                    coord: origin + (i + 1) as Real * bin_width,
                    left_aabb,
                    right_aabb: right_aabbs[i + 1],
                    n_left,
                    n_right,
                });
            }
        }

        best
    }

    /// Distributes `refs` between both sides of this split.
    ///
    /// At most `budget` references are duplicated. Returns `None` if one of the sides would
    /// be empty or would contain every reference, since recursing on it would not progress.
    pub fn partition<P: Primitive>(
        &self,
        prims: &[P],
        refs: &[SbvhReference],
        model: &SplitCostModel,
        budget: usize,
    ) -> Option<SpatialPartition> {
        let mut result = SpatialPartition {
            left: Vec::with_capacity(self.n_left),
            right: Vec::with_capacity(self.n_right),
            duplicated: 0,
            unsplit_by_budget: 0,
        };

        for r in refs {
            if r.aabb.maxs[self.axis] <= self.coord {
                result.left.push(*r);
                continue;
            }

            if r.aabb.mins[self.axis] >= self.coord {
                result.right.push(*r);
                continue;
            }

            let prim = &prims[r.primitive as usize];
            let (left, right) = prim.split(self.axis, self.coord, &r.aabb);

            match (left.is_valid(), right.is_valid()) {
                (true, true) => {}
                (true, false) => {
                    result.left.push(clipped(r, left));
                    continue;
                }
                (false, true) => {
                    result.right.push(clipped(r, right));
                    continue;
                }
                (false, false) => {
                    result.left.push(*r);
                    continue;
                }
            }

            let (duplicate, unsplit_left, unsplit_right) = model.unsplitting_costs(
                &self.left_aabb,
                self.n_left,
                &self.right_aabb,
                self.n_right,
                &r.aabb,
            );

            if duplicate < unsplit_left.min(unsplit_right) {
                if result.duplicated < budget {
                    result.left.push(clipped(r, left));
                    result.right.push(clipped(r, right));
                    result.duplicated += 1;
                    continue;
                }

                result.unsplit_by_budget += 1;
            }

            if unsplit_left <= unsplit_right {
                result.left.push(*r);
            } else {
                result.right.push(*r);
            }
        }

        let n = refs.len();
        if result.left.is_empty()
            || result.right.is_empty()
            || result.left.len() >= n
            || result.right.len() >= n
        {
            return None;
        }

        Some(result)
    }
}

fn clipped(r: &SbvhReference, aabb: Aabb) -> SbvhReference {
    SbvhReference {
        primitive: r.primitive,
        aabb,
        centroid: aabb.center(),
    }
}
