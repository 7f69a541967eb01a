use super::wide_bvh_tree::{WideBuildStats, WideBvh};
use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{SimdRealX16, SimdRealX4, SimdRealX8};
use crate::partitioning::{BuildError, Sbvh};
use crate::query::Interaction;
use crate::shape::SimplexPrimitive;
use crate::utils::SimdLanes;

/// The number of lanes of a wide BVH.
#[derive(Default, Clone, Debug, Copy, PartialEq, Eq, Hash)]
pub enum SimdWidth {
    /// 4 lanes, e.g., SSE.
    #[default]
    X4,
    /// 8 lanes, e.g., AVX.
    X8,
    /// 16 lanes, e.g., AVX512.
    X16,
}

impl SimdWidth {
    /// The number of lanes.
    pub fn lanes(self) -> usize {
        match self {
            SimdWidth::X4 => SimdRealX4::WIDTH,
            SimdWidth::X8 => SimdRealX8::WIDTH,
            SimdWidth::X16 => SimdRealX16::WIDTH,
        }
    }

    /// The number of binary tree levels folded into each wide node.
    pub fn max_depth(self) -> usize {
        match self {
            SimdWidth::X4 => SimdRealX4::MAX_DEPTH,
            SimdWidth::X8 => SimdRealX8::MAX_DEPTH,
            SimdWidth::X16 => SimdRealX16::MAX_DEPTH,
        }
    }
}

impl TryFrom<usize> for SimdWidth {
    type Error = BuildError;

    fn try_from(lanes: usize) -> Result<Self, BuildError> {
        match lanes {
            4 => Ok(SimdWidth::X4),
            8 => Ok(SimdWidth::X8),
            16 => Ok(SimdWidth::X16),
            _ => Err(BuildError::InvalidSimdWidth(lanes)),
        }
    }
}

/// A wide BVH with a number of lanes chosen at runtime.
#[derive(Clone, Debug)]
pub enum DynWideBvh {
    /// A 4-wide BVH.
    X4(WideBvh<SimdRealX4>),
    /// An 8-wide BVH.
    X8(WideBvh<SimdRealX8>),
    /// A 16-wide BVH.
    X16(WideBvh<SimdRealX16>),
}

macro_rules! dispatch(
    ($self: ident, $bvh: ident => $e: expr) => {
        match $self {
            DynWideBvh::X4($bvh) => $e,
            DynWideBvh::X8($bvh) => $e,
            DynWideBvh::X16($bvh) => $e,
        }
    }
);

impl DynWideBvh {
    /// Builds a wide BVH with `width` lanes from `sbvh`.
    pub fn build<P: SimplexPrimitive>(
        width: SimdWidth,
        sbvh: &Sbvh,
        prims: &[P],
    ) -> Result<(Self, WideBuildStats), BuildError> {
        Ok(match width {
            SimdWidth::X4 => {
                let (bvh, stats) = WideBvh::build(sbvh, prims)?;
                (DynWideBvh::X4(bvh), stats)
            }
            SimdWidth::X8 => {
                let (bvh, stats) = WideBvh::build(sbvh, prims)?;
                (DynWideBvh::X8(bvh), stats)
            }
            SimdWidth::X16 => {
                let (bvh, stats) = WideBvh::build(sbvh, prims)?;
                (DynWideBvh::X16(bvh), stats)
            }
        })
    }

    /// The number of lanes of this tree.
    pub fn width(&self) -> SimdWidth {
        match self {
            DynWideBvh::X4(_) => SimdWidth::X4,
            DynWideBvh::X8(_) => SimdWidth::X8,
            DynWideBvh::X16(_) => SimdWidth::X16,
        }
    }

    /// See [`WideBvh::find_closest_point`].
    pub fn find_closest_point(&self, sphere: &mut BoundingSphere) -> Option<Interaction> {
        dispatch!(self, bvh => bvh.find_closest_point(sphere))
    }

    /// Does this tree contain no primitive?
    pub fn is_empty(&self) -> bool {
        dispatch!(self, bvh => bvh.is_empty())
    }

    /// The number of interior nodes.
    pub fn node_count(&self) -> usize {
        dispatch!(self, bvh => bvh.nodes().len())
    }

    /// The number of leaves.
    pub fn leaf_count(&self) -> usize {
        dispatch!(self, bvh => bvh.leaves().len())
    }

    /// The number of interior nodes on the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        dispatch!(self, bvh => bvh.depth())
    }

    /// The bounds of every primitive of this tree.
    pub fn bounding_box(&self) -> Aabb {
        dispatch!(self, bvh => bvh.bounding_box())
    }

    /// See [`WideBvh::assert_well_formed`].
    pub fn assert_well_formed<P: SimplexPrimitive>(&self, prims: &[P]) -> usize {
        dispatch!(self, bvh => bvh.assert_well_formed(prims))
    }
}

static_assertions::assert_impl_all!(Sbvh: Send, Sync);
static_assertions::assert_impl_all!(DynWideBvh: Send, Sync);
