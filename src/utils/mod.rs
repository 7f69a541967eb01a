//! Various unsorted geometrical and logical operators.

pub use self::simd_lanes::SimdLanes;

mod simd_lanes;
