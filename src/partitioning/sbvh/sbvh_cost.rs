use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::Real;
use crate::partitioning::CostHeuristic;

/// Evaluates the cost of the candidate splits of one node.
#[derive(Copy, Clone, Debug)]
pub(super) struct SplitCostModel {
    heuristic: CostHeuristic,
    use_volume: bool,
    parent_measure: Real,
}

impl SplitCostModel {
    pub fn new(heuristic: CostHeuristic, parent: &Aabb) -> Self {
        let volume = parent.volume();
        let use_volume = heuristic.measures_volume() && volume > 0.0;
        let parent_measure = if use_volume {
            volume
        } else {
            parent.surface_area()
        };

        Self {
            heuristic,
            use_volume,
            parent_measure,
        }
    }

    #[inline]
    fn measure(&self, aabb: &Aabb) -> Real {
        if self.use_volume {
            aabb.volume()
        } else {
            aabb.surface_area()
        }
    }

    /// Do the children of an object split overlap by more than `split_alpha` times the
    /// parent, measured like the costs?
    pub fn overlap_exceeds(&self, overlap: &Aabb, split_alpha: Real) -> bool {
        self.measure(overlap) > split_alpha * self.parent_measure
    }

    /// The cost of splitting the parent into `n_left` references bounded by `left` and
    /// `n_right` references bounded by `right`.
    pub fn cost(&self, left: &Aabb, n_left: usize, right: &Aabb, n_right: usize) -> Real {
        let n = (n_left + n_right) as Real;

        if self.parent_measure <= 0.0 {
            return n;
        }

        let mut cost =
            n_left as Real * self.measure(left) + n_right as Real * self.measure(right);

        if self.heuristic.penalizes_overlap() {
            if let Some(overlap) = left.intersection(right) {
                cost += n * self.measure(&overlap);
            }
        }

        cost / self.parent_measure
    }

    /// The costs of handling a reference straddling a spatial split.
    ///
    /// `left` and `right` bound the references on each side of the split, the straddling
    /// one included. Returns the costs of duplicating the reference, of moving it entirely
    /// to the left child, and of moving it entirely to the right child.
    pub fn unsplitting_costs(
        &self,
        left: &Aabb,
        n_left: usize,
        right: &Aabb,
        n_right: usize,
        reference: &Aabb,
    ) -> (Real, Real, Real) {
        let duplicate = self.cost(left, n_left, right, n_right);
        let unsplit_left = self.cost(
            &left.merged(reference),
            n_left,
            right,
            n_right.saturating_sub(1),
        );
        let unsplit_right = self.cost(
            left,
            n_left.saturating_sub(1),
            &right.merged(reference),
            n_right,
        );
        (duplicate, unsplit_left, unsplit_right)
    }
}
