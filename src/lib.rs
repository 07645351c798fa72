/*!
sat2d
========

**sat2d** is a 2-dimensional collision detection library for convex polygons
written with the rust programming language.

Intersections are detected with the Separating Axis Theorem and reported as a
[`MinimumTranslationVector`](query::MinimumTranslationVector): the smallest
displacement that pushes the first shape out of the second one. Concave objects
are expressed as a [`CompoundShape`](shape::CompoundShape) of convex parts.

```
# #[cfg(feature = "f32")] {
use sat2d::bounding_volume::Aabb;
use sat2d::math::{Isometry, Point};
use sat2d::shape::{Collider, ConvexShape};

let a = ConvexShape::from_aabb(&Aabb::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0))).unwrap();
let b = ConvexShape::from_aabb(&Aabb::new(Point::new(0.5, 0.5), Point::new(1.5, 1.5))).unwrap();
let mut a = Collider::from(a);
let b = Collider::from(b);

let mtv = a.intersects(&b);
assert_eq!(mtv.overlap, 0.5);

// Pushing the first shape along the MTV separates the pair.
a.update_with_isometry(&Isometry::new(mtv.translation(), 0.0));
assert!(!a.intersects(&b).is_penetrating());
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Affine2, Isometry2, Matrix2, Point2, Translation2, UnitVector2, Vector2};
    use na::UnitComplex;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub type Point = Point2<Real>;

    /// The vector type.
    pub type Vector = Vector2<Real>;

    /// The unit vector type.
    pub type UnitVector = UnitVector2<Real>;

    /// The matrix type.
    pub type Matrix = Matrix2<Real>;

    /// The rigid transformation type.
    pub type Isometry = Isometry2<Real>;

    /// The affine transformation type used to pose shapes in world-space.
    ///
    /// This is a 2×3 affine map (stored as a homogeneous 3×3 matrix) so it can
    /// express scaling and shearing on top of rotations and translations.
    pub type Affine = Affine2<Real>;

    /// The rotation type.
    pub type Rotation = UnitComplex<Real>;

    /// The translation type.
    pub type Translation = Translation2<Real>;
}
