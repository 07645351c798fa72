use crate::math::Real;
use crate::query::sat::{Axis, Projection};
use crate::query::MinimumTranslationVector;
use crate::shape::ConvexShape;

/// Projects both shapes on `axis` and computes how much they overlap along it.
///
/// Returns `None` if the projections are disjoint, i.e., if `axis` is a separating axis.
/// Otherwise, returns the overlap together with both projections.
#[inline]
pub fn sat_convex_convex_compute_overlap_wrt_axis(
    shape1: &ConvexShape,
    shape2: &ConvexShape,
    axis: &Axis,
) -> Option<(Real, Projection, Projection)> {
    let proj1 = shape1.project(axis);
    let proj2 = shape2.project(axis);

    if proj1.overlaps(&proj2) {
        Some((proj1.overlap(&proj2), proj1, proj2))
    } else {
        None
    }
}

/// Computes the minimum translation vector between two convex shapes in world-space.
///
/// The edge axes of `shape1` are tested first, then those of `shape2`. The test stops at the
/// first separating axis and returns [`MinimumTranslationVector::zero`]. Otherwise the axis with
/// the smallest overlap wins; on ties, the first one tested is kept.
///
/// Zero axes, left by edges that a transform collapsed to a point, carry no direction and are
/// skipped. If no axis remains, the shapes are reported as not intersecting.
///
/// The winning normal is flipped if needed so that it points from `shape2` toward `shape1`:
/// translating `shape1` by the returned vector separates the shapes.
///
/// Both shapes must have been posed with [`ConvexShape::update`] beforehand.
pub fn sat_convex_convex(shape1: &ConvexShape, shape2: &ConvexShape) -> MinimumTranslationVector {
    let mut best_overlap = Real::INFINITY;
    let mut best_axis = Axis::zero();

    let axes = shape1.axes().iter().chain(shape2.axes().iter());

    for axis in axes.filter(|axis| !axis.is_zero()) {
        let Some((overlap, proj1, proj2)) =
            sat_convex_convex_compute_overlap_wrt_axis(shape1, shape2, axis)
        else {
            return MinimumTranslationVector::zero();
        };

        if overlap < best_overlap {
            best_overlap = overlap;
            best_axis = if proj1.center() < proj2.center() {
                axis.reversed()
            } else {
                *axis
            };
        }
    }

    if best_axis.is_zero() {
        return MinimumTranslationVector::zero();
    }

    MinimumTranslationVector::new(best_overlap, best_axis)
}
