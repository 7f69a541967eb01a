/// Indicates an invalid configuration of a hierarchy build.
///
/// These are checked before any work is done.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// Leaves must be allowed to contain at least one reference.
    #[error("The leaf size must be at least 1.")]
    InvalidLeafSize,
    /// The object split search needs at least two buckets.
    #[error("At least 2 buckets are needed for object splits, got {0}.")]
    InvalidBucketCount(usize),
    /// The spatial split search needs at least two bins.
    #[error("At least 2 bins are needed for spatial splits, got {0}.")]
    InvalidBinCount(usize),
    /// The spatial split overlap fraction must be non-negative and not NaN.
    #[error("The spatial split overlap fraction must be a non-negative number.")]
    InvalidSplitAlpha,
    /// Wide BVHs only support 4, 8, or 16 lanes.
    #[error("Unsupported SIMD width {0}: expected 4, 8, or 16.")]
    InvalidSimdWidth(usize),
    /// A leaf of the binary tree must fit in a single wide leaf.
    #[error("The leaf size {leaf_size} exceeds the SIMD width {width}.")]
    LeafSizeExceedsSimdWidth {
        /// The leaf size of the binary tree.
        leaf_size: usize,
        /// The number of lanes of the wide tree.
        width: usize,
    },
    /// Primitives are referenced by `u32` indices.
    #[error("Too many primitives: {0} exceeds the maximum of {max}.", max = u32::MAX)]
    TooManyPrimitives(usize),
}
