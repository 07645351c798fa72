use crate::bounding_volume::Aabb;
use crate::query::{minimum_translation_vector, MinimumTranslationVector};
use crate::shape::{Collider, CompoundShape, ConvexShape};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A convex polygon.
    Convex = 0,
    /// A compound shape.
    Compound,
}

#[derive(Copy, Clone, Debug)]
/// Enum representing the shape with its actual type.
///
/// This is the borrowed counterpart of [`Collider`]: queries dispatch on it so that a
/// [`ConvexShape`] or a [`CompoundShape`] can be used directly, without being wrapped
/// into a `Collider` first.
pub enum TypedShape<'a> {
    /// A convex polygon.
    Convex(&'a ConvexShape),
    /// A compound shape.
    Compound(&'a CompoundShape),
}

impl TypedShape<'_> {
    /// The type of this shape.
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        match self {
            TypedShape::Convex(_) => ShapeType::Convex,
            TypedShape::Compound(_) => ShapeType::Compound,
        }
    }

    /// The world-space Aabb of this shape.
    #[inline]
    pub fn compute_aabb(&self) -> Aabb {
        match self {
            TypedShape::Convex(s) => s.compute_aabb(),
            TypedShape::Compound(s) => s.compute_aabb(),
        }
    }

    /// Computes the minimum translation vector separating this shape from `other`.
    #[inline]
    pub fn intersects<'b>(&self, other: impl Into<TypedShape<'b>>) -> MinimumTranslationVector {
        minimum_translation_vector(*self, other)
    }
}

impl<'a> From<&'a ConvexShape> for TypedShape<'a> {
    fn from(shape: &'a ConvexShape) -> Self {
        TypedShape::Convex(shape)
    }
}

impl<'a> From<&'a CompoundShape> for TypedShape<'a> {
    fn from(shape: &'a CompoundShape) -> Self {
        TypedShape::Compound(shape)
    }
}

impl<'a> From<&'a Collider> for TypedShape<'a> {
    fn from(shape: &'a Collider) -> Self {
        shape.as_typed_shape()
    }
}
