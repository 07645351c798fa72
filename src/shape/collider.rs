use crate::bounding_volume::Aabb;
use crate::math::{Affine, Isometry};
use crate::query::{minimum_translation_vector, MinimumTranslationVector};
use crate::shape::{CompoundShape, ConvexShape, ShapeType, TypedShape};

/// A shape that can take part in intersection queries.
///
/// This is a closed set: a collider is either a single convex polygon or a compound of
/// other colliders. Queries between colliders are dispatched on their variants.
///
/// The typical life of a collider is:
/// 1. build it once, from its local-space vertices,
/// 2. on every step, pose it in world-space with [`Collider::update`],
/// 3. then query it against other colliders with [`Collider::intersects`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub enum Collider {
    /// A convex polygon.
    Convex(ConvexShape),
    /// A compound shape.
    Compound(CompoundShape),
}

impl Collider {
    /// The type tag of this collider.
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Collider::Convex(_) => ShapeType::Convex,
            Collider::Compound(_) => ShapeType::Compound,
        }
    }

    /// Borrows this collider as a [`TypedShape`].
    #[inline]
    pub fn as_typed_shape(&self) -> TypedShape<'_> {
        match self {
            Collider::Convex(s) => TypedShape::Convex(s),
            Collider::Compound(s) => TypedShape::Compound(s),
        }
    }

    /// Returns the convex shape, if this collider is convex.
    pub fn as_convex(&self) -> Option<&ConvexShape> {
        match self {
            Collider::Convex(s) => Some(s),
            Collider::Compound(_) => None,
        }
    }

    /// Returns the compound shape, if this collider is a compound.
    pub fn as_compound(&self) -> Option<&CompoundShape> {
        match self {
            Collider::Convex(_) => None,
            Collider::Compound(s) => Some(s),
        }
    }

    /// Returns the compound shape mutably, if this collider is a compound.
    pub fn as_compound_mut(&mut self) -> Option<&mut CompoundShape> {
        match self {
            Collider::Convex(_) => None,
            Collider::Compound(s) => Some(s),
        }
    }

    /// The world-space Aabb of this collider.
    ///
    /// This is what a broad-phase should use to find the pairs worth an intersection query.
    #[inline]
    pub fn compute_aabb(&self) -> Aabb {
        match self {
            Collider::Convex(s) => s.compute_aabb(),
            Collider::Compound(s) => s.compute_aabb(),
        }
    }

    /// Poses this collider in world-space.
    #[inline]
    pub fn update(&mut self, transform: &Affine) {
        match self {
            Collider::Convex(s) => s.update(transform),
            Collider::Compound(s) => s.update(transform),
        }
    }

    /// Poses this collider in world-space with a rigid transformation.
    #[inline]
    pub fn update_with_isometry(&mut self, pos: &Isometry) {
        self.update(&Affine::from_matrix_unchecked(pos.to_homogeneous()))
    }

    /// Computes the minimum translation vector separating this collider from `other`.
    ///
    /// Translating `self` by the returned [`MinimumTranslationVector::translation`] pushes it
    /// out of `other`. A zero overlap means the colliders do not penetrate.
    #[inline]
    pub fn intersects<'a>(&self, other: impl Into<TypedShape<'a>>) -> MinimumTranslationVector {
        minimum_translation_vector(self, other)
    }
}

impl From<ConvexShape> for Collider {
    fn from(shape: ConvexShape) -> Self {
        Collider::Convex(shape)
    }
}

impl From<CompoundShape> for Collider {
    fn from(shape: CompoundShape) -> Self {
        Collider::Compound(shape)
    }
}
