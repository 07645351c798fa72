//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`minimum_translation_vector()`] to compute the smallest displacement separating two shapes.
//! * [`intersection_test()`] to determine if two shapes are penetrating.
//!
//! Both expect shapes already posed in world-space (see
//! [`Collider::update`](crate::shape::Collider::update)).
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the ones
//! described above. For example, `sat_convex_convex` only works on two convex shapes.

pub use self::intersection_test::{intersection_test, minimum_translation_vector};
pub use self::mtv::MinimumTranslationVector;

mod intersection_test;
mod mtv;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::{
        mtv_compound_shape_compound_shape, mtv_compound_shape_shape, mtv_shape_compound_shape,
    };
    pub use super::sat::{sat_convex_convex, sat_convex_convex_compute_overlap_wrt_axis};
}
