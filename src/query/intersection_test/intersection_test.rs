use crate::query::details::{
    mtv_compound_shape_compound_shape, mtv_compound_shape_shape, mtv_shape_compound_shape,
};
use crate::query::sat::sat_convex_convex;
use crate::query::MinimumTranslationVector;
use crate::shape::TypedShape;

/// Computes the minimum translation vector between two world-space shapes.
///
/// This is the single entry point all the `intersects` methods of this crate go through.
/// The pair is dispatched on the shape types:
/// - convex vs. convex: separating axis test ([`sat_convex_convex`]),
/// - anything involving a compound: recursion over the compound's children, keeping the
///   smallest penetrating result.
///
/// The returned normal is oriented so that translating `g1` by
/// [`MinimumTranslationVector::translation`] separates it from `g2`.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use sat2d::bounding_volume::Aabb;
/// use sat2d::math::Point;
/// use sat2d::query;
/// use sat2d::shape::{CompoundShape, ConvexShape};
///
/// let ground = ConvexShape::from_aabb(&Aabb::new(Point::new(-10.0, -1.0), Point::new(10.0, 0.0))).unwrap();
/// let mut body = CompoundShape::new();
/// body.push(ConvexShape::from_aabb(&Aabb::new(Point::new(0.0, -0.25), Point::new(1.0, 1.0))).unwrap());
/// body.push(ConvexShape::from_aabb(&Aabb::new(Point::new(0.0, 5.0), Point::new(1.0, 6.0))).unwrap());
///
/// let mtv = query::minimum_translation_vector(&body, &ground);
/// assert_eq!(mtv.overlap, 0.25);
/// assert!(mtv.normal().y > 0.0);
/// # }
/// ```
pub fn minimum_translation_vector<'a, 'b>(
    g1: impl Into<TypedShape<'a>>,
    g2: impl Into<TypedShape<'b>>,
) -> MinimumTranslationVector {
    match (g1.into(), g2.into()) {
        (TypedShape::Convex(s1), TypedShape::Convex(s2)) => sat_convex_convex(s1, s2),
        (TypedShape::Compound(c1), TypedShape::Compound(c2)) => {
            mtv_compound_shape_compound_shape(c1, c2)
        }
        (TypedShape::Compound(c1), g2) => mtv_compound_shape_shape(c1, g2),
        (g1, TypedShape::Compound(c2)) => mtv_shape_compound_shape(g1, c2),
    }
}

/// Tests whether two world-space shapes penetrate each other.
///
/// Touching shapes (zero overlap) are not considered intersecting.
pub fn intersection_test<'a, 'b>(
    g1: impl Into<TypedShape<'a>>,
    g2: impl Into<TypedShape<'b>>,
) -> bool {
    minimum_translation_vector(g1, g2).is_penetrating()
}
