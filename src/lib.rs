/*!
sbvh
========

**sbvh** is a 2 and 3-dimensional spatial-split bounding volume hierarchy
written with the rust programming language. It builds a binary SBVH over a
static set of simplices (segments in 2D, triangles in 3D) and regroups it into
a wide tree traversed with SIMD lanes.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![allow(clippy::type_complexity)]
#![deny(unused_qualifications)]

#[cfg(all(feature = "dim2", feature = "dim3"))]
std::compile_error!("The `dim2` and `dim3` features are mutually exclusive.");
#[cfg(all(feature = "simd-is-enabled", not(feature = "simd-stable")))]
std::compile_error!("The `simd-is-enabled` feature should not be enabled explicitly. Please enable the `simd-stable` feature instead.");

#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;
pub extern crate simba;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;
    pub use super::simd::*;
    pub use na::{Point3, Vector3};

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The number of vertices of the simplex primitive (a triangle).
    pub const SIMPLEX_VERTICES: usize = 3;

    /// The maximum number of vertices of a simplex clipped by an axis-aligned box.
    pub const MAX_CLIPPED_VERTICES: usize = SIMPLEX_VERTICES + 2 * DIM;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim2")]
pub mod math {
    pub use super::real::*;
    pub use super::simd::*;
    pub use na::{Point2, Vector2};

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The number of vertices of the simplex primitive (a segment).
    pub const SIMPLEX_VERTICES: usize = 2;

    /// The maximum number of vertices of a simplex clipped by an axis-aligned box.
    pub const MAX_CLIPPED_VERTICES: usize = SIMPLEX_VERTICES + 2 * DIM;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;
}

#[cfg(not(feature = "simd-is-enabled"))]
mod simd {
    /// A SIMD float with 4 lanes.
    pub type SimdRealX4 = simba::simd::AutoF32x4;
    /// A SIMD float with 8 lanes.
    pub type SimdRealX8 = simba::simd::AutoF32x8;
    /// A SIMD float with 16 lanes.
    pub type SimdRealX16 = simba::simd::AutoF32x16;
}

#[cfg(feature = "simd-is-enabled")]
mod simd {
    pub use simba::simd::{WideF32x4 as SimdRealX4, WideF32x8 as SimdRealX8};

    /// A SIMD float with 16 lanes.
    ///
    /// `wide` has no 16-lanes float so this one is always emulated.
    pub type SimdRealX16 = simba::simd::AutoF32x16;
}
