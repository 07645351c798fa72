//! Shapes supported by sat2d.

pub use self::collider::Collider;
pub use self::compound_shape::CompoundShape;
pub use self::convex_shape::{ConvexShape, ShapeError};
#[doc(inline)]
pub use self::shape::{ShapeType, TypedShape};

mod collider;
mod compound_shape;
mod convex_shape;
mod shape;
