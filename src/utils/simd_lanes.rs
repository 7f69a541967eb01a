use crate::math::{Real, SimdRealX16, SimdRealX4, SimdRealX8};
use na::SimdRealField;
use std::fmt::Debug;

/// A SIMD float type usable as the lanes of a wide BVH.
///
/// The number of lanes `WIDTH` is the branching factor of the wide tree. Each wide node
/// folds `MAX_DEPTH` levels of the binary tree it is built from, so `2^MAX_DEPTH == WIDTH`.
pub trait SimdLanes: SimdRealField<Element = Real> + Copy + Send + Sync + 'static {
    /// The number of lanes.
    const WIDTH: usize;
    /// The number of binary tree levels folded into a single wide node.
    const MAX_DEPTH: usize;
    /// The name of the instruction set this width corresponds to.
    const NAME: &'static str;

    /// An array with one element per lane.
    type Lanes<T: Copy + Debug + PartialEq>: Copy + Debug + PartialEq + AsRef<[T]> + AsMut<[T]>;

    /// Builds an array with one element per lane, initialized with `f(lane_index)`.
    fn lanes_from_fn<T: Copy + Debug + PartialEq>(f: impl FnMut(usize) -> T) -> Self::Lanes<T>;
}

macro_rules! impl_simd_lanes(
    ($t: ty, $width: expr, $max_depth: expr, $name: expr) => {
        impl SimdLanes for $t {
            const WIDTH: usize = $width;
            const MAX_DEPTH: usize = $max_depth;
            const NAME: &'static str = $name;

            type Lanes<T: Copy + Debug + PartialEq> = [T; $width];

            #[inline(always)]
            fn lanes_from_fn<T: Copy + Debug + PartialEq>(f: impl FnMut(usize) -> T) -> [T; $width] {
                std::array::from_fn(f)
            }
        }
    }
);

impl_simd_lanes!(SimdRealX4, 4, 2, "SSE");
impl_simd_lanes!(SimdRealX8, 8, 3, "AVX");
impl_simd_lanes!(SimdRealX16, 16, 4, "AVX512");
