use crate::math::{Real, Vector};
use crate::query::sat::Axis;

/// The result of an intersection query between two colliders.
///
/// `overlap` is the penetration depth along `axis.normal()`. A zero `overlap` is the
/// canonical "no intersection" value: separated shapes report [`Self::zero`], and
/// shapes that merely touch report a zero overlap along the touching axis.
///
/// The normal is oriented so that moving the **first** shape of the query by
/// [`Self::translation`] pushes it out of the second one.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MinimumTranslationVector {
    /// The penetration depth. Always positive or zero.
    pub overlap: Real,
    /// The axis along which the penetration is the smallest.
    pub axis: Axis,
}

impl Default for MinimumTranslationVector {
    fn default() -> Self {
        Self::zero()
    }
}

impl MinimumTranslationVector {
    /// Creates a new minimum translation vector.
    #[inline]
    pub fn new(overlap: Real, axis: Axis) -> Self {
        Self { overlap, axis }
    }

    /// The "no intersection" value: zero overlap along the zero axis.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, Axis::zero())
    }

    /// Are the two shapes actually penetrating?
    #[inline]
    pub fn is_penetrating(&self) -> bool {
        self.overlap > 0.0
    }

    /// The unit direction the first shape has to be moved along.
    #[inline]
    pub fn normal(&self) -> Vector {
        self.axis.normal()
    }

    /// The displacement to apply to the first shape to separate it from the second one.
    #[inline]
    pub fn translation(&self) -> Vector {
        self.axis.normal() * self.overlap
    }

    /// The same penetration, seen from the second shape.
    #[inline]
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.overlap, self.axis.reversed())
    }

    /// Keeps the smallest penetrating result among `self` and `other`.
    ///
    /// Non-penetrating results never win. On ties, `self` is kept.
    #[inline]
    #[must_use]
    pub fn min_penetrating(self, other: Self) -> Self {
        if other.is_penetrating() && (!self.is_penetrating() || other.overlap < self.overlap) {
            other
        } else {
            self
        }
    }
}
