//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! # What is the Separating Axis Theorem?
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which
//! their projections do not overlap. For convex polygons, the only candidate axes worth
//! testing are the normals of the edges of both polygons.
//!
//! # How Does SAT Work Here?
//!
//! 1. **Select candidate axes**: one [`Axis`] per edge of each polygon, the first polygon's
//!    axes first, in vertex order.
//! 2. **Project both shapes onto each axis**: this yields two [`Projection`] intervals.
//! 3. **Check for overlap**: the first axis with disjoint intervals proves the shapes are
//!    separated and the test stops right away.
//! 4. **Find the minimum overlap**: if every axis overlaps, the axis with the smallest
//!    overlap gives the [`MinimumTranslationVector`](crate::query::MinimumTranslationVector).
//!    Ties keep the first axis found.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "f32")] {
//! use sat2d::math::Point;
//! use sat2d::query::sat::sat_convex_convex;
//! use sat2d::shape::ConvexShape;
//!
//! let triangle = ConvexShape::new(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(2.0, 0.0),
//!     Point::new(0.0, 2.0),
//! ])
//! .unwrap();
//! let far_away = ConvexShape::new(vec![
//!     Point::new(5.0, 5.0),
//!     Point::new(6.0, 5.0),
//!     Point::new(5.0, 6.0),
//! ])
//! .unwrap();
//!
//! assert!(!sat_convex_convex(&triangle, &far_away).is_penetrating());
//! # }
//! ```

pub use self::axis::Axis;
pub use self::projection::Projection;
pub use self::sat_convex_convex::{
    sat_convex_convex, sat_convex_convex_compute_overlap_wrt_axis,
};

mod axis;
mod projection;
mod sat_convex_convex;
