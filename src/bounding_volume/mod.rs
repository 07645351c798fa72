//! Bounding volumes.
//!
//! Only the axis-aligned bounding box is provided. It is what colliders report to a
//! broad-phase so that the narrow-phase SAT test only runs on pairs that may overlap.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;

#[doc(hidden)]
pub mod aabb;
mod aabb_utils;
#[doc(hidden)]
pub mod bounding_volume;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::aabb_utils::{local_point_cloud_aabb, point_cloud_aabb};
}
