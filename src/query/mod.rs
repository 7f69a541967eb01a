//! Non-persistent geometric queries.
//!
//! This module contains the per-primitive building blocks of the hierarchy queries:
//!
//! * [`Ray`] and the ray-casting functions of [`ray`].
//! * The scalar and SIMD closest-point kernels of [`point`].
//! * The polygon clipping used by spatial splits in [`clip`].

pub use self::interaction::Interaction;
pub use self::ray::Ray;

pub mod clip;
mod interaction;
pub mod point;
pub mod ray;
