use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::partitioning::SbvhOptions;
use std::time::Duration;

/// A node of a [`Sbvh`].
///
/// Nodes are stored in depth-first order: the left child of an interior node immediately
/// follows it, and its right child is at `index + right_offset`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SbvhNode {
    /// The bounds of every reference under this node.
    pub aabb: Aabb,
    /// The index of the first reference of this subtree in [`Sbvh::references`].
    pub start: u32,
    /// The number of references of this subtree.
    pub count: u32,
    /// The offset between this node and its right child. Zero for leaves.
    pub right_offset: u32,
}

impl SbvhNode {
    /// Is this node a leaf?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.right_offset == 0
    }

    /// The range of [`Sbvh::references`] covered by this node.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start as usize..(self.start + self.count) as usize
    }
}

/// A primitive reference manipulated while building a [`Sbvh`].
///
/// Spatial splits may duplicate a reference: each copy then covers a different part of the
/// same primitive, and its `aabb` is clipped accordingly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SbvhReference {
    /// The index of the referenced primitive.
    pub primitive: u32,
    /// The bounds of the part of the primitive covered by this reference.
    pub aabb: Aabb,
    /// The point used to sort this reference into buckets.
    pub centroid: Point<Real>,
}

/// Statistics about the construction of a [`Sbvh`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SbvhBuildStats {
    /// The total number of nodes.
    pub node_count: usize,
    /// The number of leaves.
    pub leaf_count: usize,
    /// The number of references, duplicates included.
    pub reference_count: usize,
    /// The number of extra references created by spatial splits.
    pub duplicated_references: usize,
    /// The depth of the deepest leaf, the root being at depth 0.
    pub max_depth: usize,
    /// The average number of references per leaf.
    pub average_leaf_size: Real,
    /// The time spent building the tree.
    pub build_time: Duration,
}

/// A binary bounding volume hierarchy built with object and spatial splits.
///
/// The tree does not own its primitives. It stores the index of each primitive in the slice
/// it was built from, and every query must be given that same slice again.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use sbvh3d::bounding_volume::BoundingSphere;
/// use sbvh3d::partitioning::{Sbvh, SbvhOptions};
/// use sbvh3d::shape::Triangle;
/// use nalgebra::Point3;
///
/// let triangles = [
///     Triangle::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)),
///     Triangle::new(
///         Point3::new(100.0, 0.0, 0.0),
///         Point3::new(101.0, 0.0, 0.0),
///         Point3::new(100.0, 1.0, 0.0),
///     ),
/// ];
/// let sbvh = Sbvh::new(&triangles, SbvhOptions::default());
///
/// let mut sphere = BoundingSphere::unbounded(Point3::new(99.0, 0.0, 0.0));
/// let closest = sbvh.find_closest_point(&triangles, &mut sphere).unwrap();
/// assert_eq!(closest.primitive, 1);
/// assert_eq!(closest.distance, 1.0);
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Sbvh {
    pub(super) nodes: Vec<SbvhNode>,
    pub(super) references: Vec<u32>,
    pub(super) options: SbvhOptions,
}

impl Sbvh {
    /// Does this tree contain no primitive?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The nodes of this tree, in depth-first order. The root, if any, is at index 0.
    #[inline]
    pub fn nodes(&self) -> &[SbvhNode] {
        &self.nodes
    }

    /// The primitive indices referenced by the leaves.
    ///
    /// A leaf covers the range [`SbvhNode::range`] of this array. The same primitive may
    /// appear several times if it was duplicated by spatial splits.
    #[inline]
    pub fn references(&self) -> &[u32] {
        &self.references
    }

    /// The options this tree was built with.
    #[inline]
    pub fn options(&self) -> &SbvhOptions {
        &self.options
    }

    /// The primitive indices of the given leaf.
    #[inline]
    pub fn leaf_primitives(&self, node: &SbvhNode) -> &[u32] {
        &self.references[node.range()]
    }

    /// The bounds of every primitive of this tree.
    ///
    /// Returns an invalid AABB for an empty tree.
    pub fn bounding_box(&self) -> Aabb {
        self.nodes
            .first()
            .map(|root| root.aabb)
            .unwrap_or_else(Aabb::new_invalid)
    }

    /// The center of [`Sbvh::bounding_box`], or `None` for an empty tree.
    pub fn centroid(&self) -> Option<Point<Real>> {
        self.nodes.first().map(|root| root.aabb.center())
    }

    /// The depth of this tree: the number of nodes on its longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }

        let mut max_depth = 0;
        let mut stack = vec![(0usize, 1usize)];

        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];
            if node.is_leaf() {
                max_depth = max_depth.max(depth);
            } else {
                stack.push((id + 1, depth + 1));
                stack.push((id + node.right_offset as usize, depth + 1));
            }
        }

        max_depth
    }

    /// The number of leaves of this tree.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }
}
