//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;
pub use crate::bounding_volume::wide_aabb::WideAabb;

#[doc(hidden)]
pub mod aabb;
#[doc(hidden)]
pub mod bounding_sphere;
#[doc(hidden)]
pub mod bounding_volume;
mod wide_aabb;
