//!
//! Shape composed from the union of convex parts.
//!

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Affine, Isometry, Point};
use crate::query::{minimum_translation_vector, MinimumTranslationVector};
use crate::shape::{Collider, TypedShape};

/// A compound shape.
///
/// A compound shape is a shape composed of the union of several colliders (convex shapes or
/// other compounds). This is the main way of creating a concave shape from convex parts.
///
/// All the children share the pose of the compound: their vertices are expressed in the
/// local frame of the compound and [`CompoundShape::update`] applies the same transform to
/// every one of them.
///
/// An empty compound is valid. It never intersects anything and its Aabb is reduced to
/// its center.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")]
/// # {
/// # use sat2d::bounding_volume::Aabb;
/// # use sat2d::math::{Isometry, Point};
/// # use sat2d::shape::{CompoundShape, ConvexShape};
/// // An L-shaped compound.
/// let mut l_shape = CompoundShape::new();
/// l_shape.push(ConvexShape::from_aabb(&Aabb::new(Point::new(0.0, 0.0), Point::new(1.0, 3.0))).unwrap());
/// l_shape.push(ConvexShape::from_aabb(&Aabb::new(Point::new(1.0, 0.0), Point::new(3.0, 1.0))).unwrap());
///
/// l_shape.update_with_isometry(&Isometry::translation(10.0, 0.0));
///
/// assert_eq!(l_shape.len(), 2);
/// assert_eq!(l_shape.center(), Point::new(10.0, 0.0));
/// assert_eq!(l_shape.compute_aabb(), Aabb::new(Point::new(10.0, 0.0), Point::new(13.0, 3.0)));
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct CompoundShape {
    children: Vec<Collider>,
    center: Point,
}

impl Default for CompoundShape {
    fn default() -> Self {
        Self::new()
    }
}

impl CompoundShape {
    /// Creates an empty compound shape centered at the origin.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            center: Point::origin(),
        }
    }

    /// Creates a compound shape from a set of children.
    pub fn with_children<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Collider>,
    {
        let mut result = Self::new();
        result.extend(children);
        result
    }

    /// Adds a child to this compound.
    ///
    /// The child is expected to be posed like the rest of the compound: call
    /// [`CompoundShape::update`] before querying the compound again.
    pub fn push(&mut self, child: impl Into<Collider>) {
        self.children.push(child.into());
    }

    /// The children of this compound.
    #[inline]
    pub fn children(&self) -> &[Collider] {
        &self.children
    }

    /// The number of children of this compound.
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Does this compound have no children?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The world-space position of the origin of this compound, as of the last update.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Poses this compound, and all its children, in world-space.
    pub fn update(&mut self, transform: &Affine) {
        self.center = transform.transform_point(&Point::origin());

        for child in &mut self.children {
            child.update(transform);
        }
    }

    /// Poses this compound in world-space with a rigid transformation.
    pub fn update_with_isometry(&mut self, pos: &Isometry) {
        self.update(&Affine::from_matrix_unchecked(pos.to_homogeneous()))
    }

    /// The world-space Aabb of this compound: the union of the Aabbs of its children.
    ///
    /// If the compound is empty, this is a zero-sized Aabb located at its center.
    pub fn compute_aabb(&self) -> Aabb {
        self.children
            .iter()
            .map(Collider::compute_aabb)
            .reduce(|acc, aabb| acc.merged(&aabb))
            .unwrap_or_else(|| Aabb::from_point(self.center))
    }

    /// Computes the minimum translation vector separating this compound from `other`.
    ///
    /// Every child is tested against `other` (and against every child of `other` if it
    /// is a compound too). The smallest penetrating result is returned.
    #[inline]
    pub fn intersects<'a>(&self, other: impl Into<TypedShape<'a>>) -> MinimumTranslationVector {
        minimum_translation_vector(self, other)
    }
}

impl<C: Into<Collider>> Extend<C> for CompoundShape {
    fn extend<I: IntoIterator<Item = C>>(&mut self, children: I) {
        self.children.extend(children.into_iter().map(Into::into));
    }
}

impl<C: Into<Collider>> FromIterator<C> for CompoundShape {
    fn from_iter<I: IntoIterator<Item = C>>(children: I) -> Self {
        Self::with_children(children)
    }
}

#[cfg(test)]
mod test {
    use crate::bounding_volume::Aabb;
    use crate::math::{Affine, Isometry, Point, Real};
    use crate::shape::{CompoundShape, ConvexShape};

    fn boxed(mins: [Real; 2], maxs: [Real; 2]) -> ConvexShape {
        ConvexShape::from_aabb(&Aabb::new(Point::from(mins), Point::from(maxs))).unwrap()
    }

    #[test]
    fn empty_compound() {
        let mut empty = CompoundShape::new();
        empty.update_with_isometry(&Isometry::translation(2.0, 3.0));

        assert!(empty.is_empty());
        assert_eq!(
            empty.compute_aabb(),
            Aabb::from_point(Point::new(2.0, 3.0))
        );
        assert!(!empty.intersects(&boxed([-10.0, -10.0], [10.0, 10.0])).is_penetrating());
        assert!(!empty.intersects(&empty).is_penetrating());
    }

    #[test]
    fn compound_aabb_is_the_union_of_children() {
        let compound: CompoundShape = [
            boxed([0.0, 0.0], [1.0, 1.0]),
            boxed([3.0, -2.0], [4.0, 0.5]),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            compound.compute_aabb(),
            Aabb::new(Point::new(0.0, -2.0), Point::new(4.0, 1.0))
        );
    }

    #[test]
    fn children_share_the_compound_transform() {
        let mut inner = CompoundShape::new();
        inner.push(boxed([0.0, 0.0], [1.0, 1.0]));
        let mut outer = CompoundShape::with_children([boxed([-1.0, -1.0], [0.0, 0.0])]);
        outer.push(inner);

        outer.update(&Affine::from_matrix_unchecked(
            Isometry::translation(5.0, 0.0).to_homogeneous(),
        ));

        assert_eq!(outer.center(), Point::new(5.0, 0.0));
        let nested = outer.children()[1].as_compound().unwrap();
        assert_eq!(nested.center(), Point::new(5.0, 0.0));
        assert_eq!(
            nested.compute_aabb(),
            Aabb::new(Point::new(5.0, 0.0), Point::new(6.0, 1.0))
        );
        assert_eq!(
            outer.compute_aabb(),
            Aabb::new(Point::new(4.0, -1.0), Point::new(6.0, 1.0))
        );
    }

    #[test]
    fn compound_keeps_the_shallowest_penetration() {
        let probe = boxed([0.0, 0.0], [1.0, 1.0]);
        let shallow = boxed([0.9, 0.0], [2.0, 1.0]);
        let deep = boxed([0.5, 0.0], [2.0, 1.0]);
        let far = boxed([5.0, 5.0], [6.0, 6.0]);
        let compound = CompoundShape::with_children([far, deep, shallow]);

        let mtv = compound.intersects(&probe);
        assert_relative_eq!(mtv.overlap, 0.1, epsilon = 1.0e-5);
        // The children are the first operand: the push goes toward +x.
        assert!(mtv.normal().x > 0.0);

        let mtv = probe.intersects(&compound);
        assert_relative_eq!(mtv.overlap, 0.1, epsilon = 1.0e-5);
        assert!(mtv.normal().x < 0.0);
    }
}
