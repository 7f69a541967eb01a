use super::sbvh_cost::SplitCostModel;
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Real, DIM};
use crate::partitioning::SbvhReference;

#[derive(Copy, Clone, Debug, Default)]
pub(super) struct SbvhBucket {
    pub aabb: Aabb,
    pub count: usize,
}

/// The index of the bucket containing `coord`, out of `n` buckets starting at `origin`.
///
/// Coordinates outside of the buckets range are clamped to the first or last bucket.
#[inline]
pub(super) fn bucket_index(coord: Real, origin: Real, scale: Real, n: usize) -> usize {
    let id = ((coord - origin) * scale).floor();
    if id <= 0.0 {
        0
    } else {
        (id as usize).min(n - 1)
    }
}

/// For each `i`, the merge of the buckets `i..`, used to sweep split planes from the left.
pub(super) fn right_merges(buckets: &[SbvhBucket]) -> Vec<SbvhBucket> {
    let mut right_merges = buckets.to_vec();
    let mut right_acc = SbvhBucket::default();

    for (merge, bucket) in right_merges.iter_mut().zip(buckets).rev() {
        right_acc.aabb.merge(&bucket.aabb);
        right_acc.count += bucket.count;
        *merge = right_acc;
    }

    right_merges
}

/// A partition of references by the bucket of their centroid.
#[derive(Copy, Clone, Debug)]
pub(super) struct ObjectSplit {
    pub cost: Real,
    pub axis: usize,
    pub left_aabb: Aabb,
    pub right_aabb: Aabb,
    left_count: usize,
    last_left_bucket: usize,
    origin: Real,
    scale: Real,
    n_buckets: usize,
}

impl ObjectSplit {
    /// Finds the cheapest bucket boundary along every axis with a non-zero centroid extent.
    ///
    /// Returns `None` if all the centroids coincide.
    pub fn find(
        refs: &[SbvhReference],
        model: &SplitCostModel,
        n_buckets: usize,
    ) -> Option<Self> {
        let centroids = Aabb::from_points(refs.iter().map(|r| r.centroid));
        let mut best: Option<Self> = None;

        for axis in 0..DIM {
            if let Some(split) = Self::find_on_axis(refs, &centroids, axis, model, n_buckets) {
                if best.map(|best| split.cost < best.cost).unwrap_or(true) {
                    best = Some(split);
                }
            }
        }

        best
    }

    /// Splits at the center of the centroid bounds along their largest axis.
    pub fn longest_axis_center(refs: &[SbvhReference], model: &SplitCostModel) -> Option<Self> {
        let centroids = Aabb::from_points(refs.iter().map(|r| r.centroid));
        // Two buckets meet exactly at the center of the centroid bounds.
        Self::find_on_axis(refs, &centroids, centroids.largest_axis(), model, 2)
    }

    fn find_on_axis(
        refs: &[SbvhReference],
        centroids: &Aabb,
        axis: usize,
        model: &SplitCostModel,
        n_buckets: usize,
    ) -> Option<Self> {
        let origin = centroids.mins[axis];
        let extent = centroids.maxs[axis] - origin;

        if !(extent > 0.0) {
            return None;
        }

        let scale = n_buckets as Real / extent;
        let mut buckets = vec![SbvhBucket::default(); n_buckets];

        for r in refs {
            let bucket = &mut buckets[bucket_index(r.centroid[axis], origin, scale, n_buckets)];
            bucket.aabb.merge(&r.aabb);
            bucket.count += 1;
        }

        let right_merges = right_merges(&buckets);
        let mut left_merge = SbvhBucket::default();
        let mut best: Option<Self> = None;

        for i in 0..n_buckets - 1 {
            left_merge.aabb.merge(&buckets[i].aabb);
            left_merge.count += buckets[i].count;
            let right = &right_merges[i + 1];

            if left_merge.count == 0 || right.count == 0 {
                continue;
            }

            let cost = model.cost(&left_merge.aabb, left_merge.count, &right.aabb, right.count);
            if best.map(|best| cost < best.cost).unwrap_or(true) {
                best = Some(Self {
                    cost,
                    axis,
                    left_aabb: left_merge.aabb,
                    right_aabb: right.aabb,
                    left_count: left_merge.count,
                    last_left_bucket: i,
                    origin,
                    scale,
                    n_buckets,
                });
            }
        }

        best
    }

    /// The intersection of the bounds of both sides, if they overlap.
    pub fn overlap(&self) -> Option<Aabb> {
        self.left_aabb.intersection(&self.right_aabb)
    }

    #[inline]
    fn goes_left(&self, r: &SbvhReference) -> bool {
        bucket_index(r.centroid[self.axis], self.origin, self.scale, self.n_buckets)
            <= self.last_left_bucket
    }

    /// Reorders `refs` in place so the references of the left side come first.
    ///
    /// Returns the number of references on the left side.
    pub fn partition(&self, refs: &mut [SbvhReference]) -> usize {
        let mid = self.left_count;
        let mut left_id = 0;
        let mut right_id = mid;

        'outer: while left_id != mid && right_id != refs.len() {
            while self.goes_left(&refs[left_id]) {
                left_id += 1;

                if left_id == mid {
                    break 'outer;
                }
            }

            while !self.goes_left(&refs[right_id]) {
                right_id += 1;

                if right_id == refs.len() {
                    break 'outer;
                }
            }

            refs.swap(left_id, right_id);
            left_id += 1;
            right_id += 1;
        }

        mid
    }
}
