//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::Ray;
#[cfg(feature = "dim2")]
pub use self::ray_segment::local_ray_intersection_with_segment;
#[cfg(feature = "dim3")]
pub use self::ray_triangle::local_ray_intersection_with_triangle;

#[doc(hidden)]
pub mod ray;
mod ray_aabb;
#[cfg(feature = "dim2")]
mod ray_segment;
#[cfg(feature = "dim3")]
mod ray_triangle;
