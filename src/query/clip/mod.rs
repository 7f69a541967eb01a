//! Polygon clipping against half-spaces and axis-aligned boxes.

pub use self::clip_halfspace_polygon::clip_halfspace_polygon;

mod clip_aabb_polygon;
mod clip_halfspace_polygon;
