//! Spatial partitioning tools.
//!
//! The [`Sbvh`] is a binary bounding volume hierarchy built with object and spatial splits.
//! It can be queried directly, or regrouped into a [`WideBvh`] whose nodes are laid out so
//! that all the children of a node are tested at once with SIMD instructions.

pub use self::build_error::BuildError;
pub use self::sbvh::{
    CostHeuristic, Sbvh, SbvhBuildStats, SbvhNode, SbvhOptions, SbvhReference,
};
pub use self::wide_bvh::{
    DynWideBvh, SimdWidth, WideBuildStats, WideBvh, WideChild, WideLeaf, WideNode,
};

mod build_error;
mod sbvh;
mod wide_bvh;

#[cfg(test)]
pub(crate) mod test_utils;

use crate::bounding_volume::Aabb;
use crate::math::{Real, DIM};

/// Panics if the union of the leaf AABBs of a tree differs from its root AABB.
///
/// Clipped references are recomputed from the primitive geometry, so both boxes are only
/// compared up to a rounding tolerance relative to the size of the root.
fn assert_leaves_cover_root(leaves: &Aabb, root: &Aabb) {
    let tolerance: Real = 1.0e-5 * (1.0 + root.extents().norm());

    for i in 0..DIM {
        assert!(
            (leaves.mins[i] - root.mins[i]).abs() <= tolerance
                && (leaves.maxs[i] - root.maxs[i]).abs() <= tolerance,
            "The union of the leaves {:?} does not match the root {:?}.",
            leaves,
            root
        );
    }
}
