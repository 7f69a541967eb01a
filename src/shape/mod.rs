//! Primitives supported by the hierarchies.

pub use self::primitive::{split_simplex, Primitive, SimplexPrimitive};
#[cfg(feature = "dim2")]
pub use self::segment::Segment;
#[cfg(feature = "dim3")]
pub use self::triangle::Triangle;

mod primitive;
#[cfg(feature = "dim2")]
mod segment;
#[cfg(feature = "dim3")]
mod triangle;
