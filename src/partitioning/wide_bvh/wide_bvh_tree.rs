use crate::bounding_volume::{Aabb, WideAabb};
use crate::math::{Point, Real, SIMPLEX_VERTICES};
use crate::partitioning::Sbvh;
use crate::shape::SimplexPrimitive;
use crate::utils::SimdLanes;
use simba::simd::SimdValue;
use std::time::Duration;

/// A child slot of a [`WideNode`].
#[derive(Default, Clone, Debug, Copy, PartialEq, Eq, Hash)]
pub enum WideChild {
    /// An unused lane.
    ///
    /// Empty lanes always come after the used ones, and their AABB is invalid.
    #[default]
    Empty,
    /// The index of an interior node in [`WideBvh::nodes`].
    Node(u32),
    /// The index of a leaf in [`WideBvh::leaves`].
    Leaf(u32),
}

impl WideChild {
    /// Is this an unused lane?
    #[inline]
    pub fn is_empty(self) -> bool {
        self == WideChild::Empty
    }
}

/// An interior node of a [`WideBvh`], with up to `N::WIDTH` children.
///
/// The AABB of the `i`-th child is stored on the `i`-th lane of `aabbs` so that the
/// distances to all the children are computed at once.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct WideNode<N: SimdLanes> {
    /// The AABBs of the children, one per lane.
    pub aabbs: WideAabb<N>,
    /// The children, one per lane.
    pub children: N::Lanes<WideChild>,
    /// The center of the AABB of the binary node this wide node was built from.
    pub centroid: Point<Real>,
}

impl<N: SimdLanes> WideNode<N> {
    pub(super) fn new(aabb: &Aabb) -> Self {
        Self {
            aabbs: WideAabb::new_invalid(),
            children: N::lanes_from_fn(|_| WideChild::Empty),
            centroid: aabb.center(),
        }
    }

    /// The number of used lanes.
    pub fn child_count(&self) -> usize {
        self.children
            .as_ref()
            .iter()
            .take_while(|child| !child.is_empty())
            .count()
    }
}

/// A leaf of a [`WideBvh`], with up to `N::WIDTH` simplices.
///
/// The `j`-th vertex of the simplex of lane `i` is stored on the `i`-th lane of
/// `vertices[j]`. Unused lanes have zero vertices and no primitive.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct WideLeaf<N: SimdLanes> {
    /// The vertices of the simplices, one simplex per lane.
    pub vertices: [Point<N>; SIMPLEX_VERTICES],
    /// The index of the primitive of each lane, `None` for unused lanes.
    pub primitives: N::Lanes<Option<u32>>,
    /// Zero on used lanes and infinity on unused lanes.
    ///
    /// Added to squared distances, this keeps unused lanes from ever being the closest.
    pub(super) padding: N,
}

impl<N: SimdLanes> WideLeaf<N> {
    pub(super) fn new<P: SimplexPrimitive>(primitives: &[u32], prims: &[P]) -> Self {
        let mut result = Self {
            vertices: [Point::splat(Point::origin()); SIMPLEX_VERTICES],
            primitives: N::lanes_from_fn(|_| None),
            padding: N::splat(Real::INFINITY),
        };

        for (lane, primitive) in primitives.iter().take(N::WIDTH).enumerate() {
            let simplex = prims[*primitive as usize].vertices();

            for (vertex, pt) in result.vertices.iter_mut().zip(simplex) {
                vertex.replace(lane, pt);
            }

            result.primitives.as_mut()[lane] = Some(*primitive);
            result.padding.replace(lane, 0.0);
        }

        result
    }

    /// The number of used lanes.
    pub fn primitive_count(&self) -> usize {
        self.primitives
            .as_ref()
            .iter()
            .take_while(|primitive| primitive.is_some())
            .count()
    }
}

/// Statistics about the construction of a [`WideBvh`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WideBuildStats {
    /// The number of interior nodes.
    pub node_count: usize,
    /// The number of leaves.
    pub leaf_count: usize,
    /// The number of primitives stored in leaves, duplicates included.
    pub primitive_count: usize,
    /// The average number of primitives per leaf.
    pub average_leaf_size: Real,
    /// The number of interior nodes on the longest path from the root to a leaf.
    pub depth: usize,
    /// The time spent building the tree.
    pub build_time: Duration,
}

/// A bounding volume hierarchy with `N::WIDTH` children per node, traversed with SIMD.
///
/// A wide BVH is built from a [`Sbvh`] by folding `N::MAX_DEPTH` levels of the binary tree
/// into each wide node. It does not depend on the binary tree afterward, and stores a copy of
/// the vertices of its simplices.
#[derive(Clone, Debug)]
pub struct WideBvh<N: SimdLanes> {
    pub(super) nodes: Vec<WideNode<N>>,
    pub(super) leaves: Vec<WideLeaf<N>>,
    pub(super) depth: usize,
}

impl<N: SimdLanes> Default for WideBvh<N> {
    fn default() -> Self {
        Self {
            nodes: vec![],
            leaves: vec![],
            depth: 0,
        }
    }
}

impl<N: SimdLanes> WideBvh<N> {
    /// The number of lanes, i.e., the maximum number of children per node.
    pub const WIDTH: usize = N::WIDTH;

    /// Builds a wide BVH from `sbvh`.
    ///
    /// # Panics
    ///
    /// Panics if the leaves of `sbvh` may not fit in a wide leaf. See [`WideBvh::build`]
    /// for a non-panicking version.
    pub fn new<P: SimplexPrimitive>(sbvh: &Sbvh, prims: &[P]) -> Self {
        match Self::build(sbvh, prims) {
            Ok((bvh, _)) => bvh,
            Err(e) => panic!("Failed to build the wide BVH: {}", e),
        }
    }

    /// Does this tree contain no primitive?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The interior nodes. The root, if any, is at index 0.
    #[inline]
    pub fn nodes(&self) -> &[WideNode<N>] {
        &self.nodes
    }

    /// The leaves.
    #[inline]
    pub fn leaves(&self) -> &[WideLeaf<N>] {
        &self.leaves
    }

    /// The number of interior nodes on the longest path from the root to a leaf.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The bounds of every primitive of this tree.
    pub fn bounding_box(&self) -> Aabb {
        self.nodes
            .first()
            .map(|root| root.aabbs.to_merged_aabb())
            .unwrap_or_else(Aabb::new_invalid)
    }
}
