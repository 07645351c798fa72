use crate::query::{minimum_translation_vector, MinimumTranslationVector};
use crate::shape::{CompoundShape, TypedShape};

/// Minimum translation vector between a compound shape and any other shape.
///
/// Each child of `g1` is tested against `g2` and the smallest penetrating result is kept.
/// Children that do not penetrate `g2` contribute nothing. An empty compound never intersects.
pub fn mtv_compound_shape_shape(
    g1: &CompoundShape,
    g2: TypedShape<'_>,
) -> MinimumTranslationVector {
    let result = g1
        .children()
        .iter()
        .map(|child| minimum_translation_vector(child, g2))
        .fold(MinimumTranslationVector::zero(), MinimumTranslationVector::min_penetrating);

    log::trace!(
        "compound ({} children) vs {:?}: overlap {}",
        g1.len(),
        g2.shape_type(),
        result.overlap
    );
    result
}

/// Minimum translation vector between any shape and a compound shape.
///
/// `g1` stays the first operand of every child test, so the resulting normal always pushes
/// `g1` away from the child it penetrates the least.
pub fn mtv_shape_compound_shape(
    g1: TypedShape<'_>,
    g2: &CompoundShape,
) -> MinimumTranslationVector {
    let result = g2
        .children()
        .iter()
        .map(|child| minimum_translation_vector(g1, child))
        .fold(MinimumTranslationVector::zero(), MinimumTranslationVector::min_penetrating);

    log::trace!(
        "{:?} vs compound ({} children): overlap {}",
        g1.shape_type(),
        g2.len(),
        result.overlap
    );
    result
}

/// Minimum translation vector between two compound shapes.
///
/// Every pair of the cross product of both children lists is tested, in order, and the
/// smallest penetrating result is kept. If either compound is empty, they don't intersect.
pub fn mtv_compound_shape_compound_shape(
    g1: &CompoundShape,
    g2: &CompoundShape,
) -> MinimumTranslationVector {
    if g1.is_empty() || g2.is_empty() {
        return MinimumTranslationVector::zero();
    }

    let mut result = MinimumTranslationVector::zero();

    for child1 in g1.children() {
        for child2 in g2.children() {
            result = result.min_penetrating(minimum_translation_vector(child1, child2));
        }
    }

    log::trace!(
        "compound ({} children) vs compound ({} children): overlap {}",
        g1.len(),
        g2.len(),
        result.overlap
    );
    result
}
