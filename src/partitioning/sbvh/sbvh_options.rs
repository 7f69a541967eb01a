use crate::math::Real;
use crate::partitioning::BuildError;

/// The cost model used to rank the candidate splits of a node.
///
/// Every cost is normalized by the measure of the parent node, so the cost of a leaf with `n`
/// references is `n`. Lower is better.
#[derive(Default, Clone, Debug, Copy, PartialEq, Eq, Hash)]
pub enum CostHeuristic {
    /// Splits at the center of the centroids bounds, along their longest axis.
    ///
    /// No cost is evaluated and spatial splits are never attempted. This is the fastest to
    /// build but yields the slowest trees.
    LongestAxisCenter,
    /// The surface area heuristic: each child costs its surface area times its reference
    /// count.
    #[default]
    SurfaceArea,
    /// The surface area heuristic, plus a penalty proportional to the surface area of the
    /// overlap of both children.
    ///
    /// This favors splits separating primitives that are close in the reference order but
    /// far apart in space.
    OverlapSurfaceArea,
    /// Same as [`CostHeuristic::SurfaceArea`] but measuring the volume of the children.
    ///
    /// Falls back to surface areas for flat nodes.
    Volume,
    /// Same as [`CostHeuristic::OverlapSurfaceArea`] but measuring volumes.
    OverlapVolume,
}

impl CostHeuristic {
    /// Does this heuristic penalize overlapping children?
    pub fn penalizes_overlap(self) -> bool {
        matches!(
            self,
            CostHeuristic::OverlapSurfaceArea | CostHeuristic::OverlapVolume
        )
    }

    /// Does this heuristic measure boxes by their volume?
    pub fn measures_volume(self) -> bool {
        matches!(self, CostHeuristic::Volume | CostHeuristic::OverlapVolume)
    }
}

/// Parameters of the construction of a [`Sbvh`](crate::partitioning::Sbvh).
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use sbvh3d::partitioning::{CostHeuristic, SbvhOptions};
///
/// let options = SbvhOptions::default()
///     .with_cost_heuristic(CostHeuristic::OverlapVolume)
///     .with_leaf_size(2)
///     .with_memory_budget(Some(0));
/// assert!(options.validate().is_ok());
/// assert!(SbvhOptions::default().with_n_bins(1).validate().is_err());
/// # }
/// ```
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct SbvhOptions {
    /// The cost model ranking candidate splits.
    pub cost_heuristic: CostHeuristic,
    /// Spatial splits are only attempted when the children of the best object split overlap
    /// by more than this fraction of the measure of their parent.
    ///
    /// Setting this to `Real::INFINITY` disables spatial splits.
    pub split_alpha: Real,
    /// The maximum number of references in a leaf.
    pub leaf_size: usize,
    /// The number of centroid buckets of the object split search.
    pub n_buckets: usize,
    /// The number of spatial bins of the spatial split search.
    pub n_bins: usize,
    /// The maximum number of extra references spatial splits may create.
    ///
    /// `None` allows as many duplicates as there are primitives.
    pub memory_budget: Option<usize>,
}

impl Default for SbvhOptions {
    fn default() -> Self {
        Self {
            cost_heuristic: CostHeuristic::default(),
            split_alpha: 1.0e-5,
            leaf_size: 4,
            n_buckets: 8,
            n_bins: 8,
            memory_budget: None,
        }
    }
}

impl SbvhOptions {
    /// Sets the cost heuristic.
    pub fn with_cost_heuristic(mut self, cost_heuristic: CostHeuristic) -> Self {
        self.cost_heuristic = cost_heuristic;
        self
    }

    /// Sets the overlap fraction triggering spatial splits.
    pub fn with_split_alpha(mut self, split_alpha: Real) -> Self {
        self.split_alpha = split_alpha;
        self
    }

    /// Sets the maximum number of references per leaf.
    pub fn with_leaf_size(mut self, leaf_size: usize) -> Self {
        self.leaf_size = leaf_size;
        self
    }

    /// Sets the number of buckets of object splits.
    pub fn with_n_buckets(mut self, n_buckets: usize) -> Self {
        self.n_buckets = n_buckets;
        self
    }

    /// Sets the number of bins of spatial splits.
    pub fn with_n_bins(mut self, n_bins: usize) -> Self {
        self.n_bins = n_bins;
        self
    }

    /// Sets the maximum number of references duplicated by spatial splits.
    pub fn with_memory_budget(mut self, memory_budget: Option<usize>) -> Self {
        self.memory_budget = memory_budget;
        self
    }

    /// Checks these options are usable for a build.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.leaf_size == 0 {
            return Err(BuildError::InvalidLeafSize);
        }

        if self.n_buckets < 2 {
            return Err(BuildError::InvalidBucketCount(self.n_buckets));
        }

        if self.n_bins < 2 {
            return Err(BuildError::InvalidBinCount(self.n_bins));
        }

        if self.split_alpha.is_nan() || self.split_alpha < 0.0 {
            return Err(BuildError::InvalidSplitAlpha);
        }

        Ok(())
    }
}
