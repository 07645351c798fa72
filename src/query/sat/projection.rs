use crate::math::{Point, Real, Vector};

/// The interval `[min, max]` covered by a shape projected on an axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    /// The smallest projected value.
    pub min: Real,
    /// The largest projected value.
    pub max: Real,
}

impl Projection {
    /// Creates a new projection.
    ///
    /// `min` must not be greater than `max`.
    #[inline]
    pub fn new(min: Real, max: Real) -> Self {
        debug_assert!(min <= max, "Invalid projection: min > max.");
        Self { min, max }
    }

    /// Projects every point of `pts` on the direction `normal`.
    ///
    /// `pts` must not be empty.
    pub fn from_points<'a, I>(normal: &Vector, pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut min = Real::INFINITY;
        let mut max = -Real::INFINITY;

        for pt in pts {
            let proj = normal.dot(&pt.coords);
            min = min.min(proj);
            max = max.max(proj);
        }

        debug_assert!(min <= max, "Cannot project an empty point set.");
        Self { min, max }
    }

    /// Do these two intervals overlap?
    ///
    /// Touching intervals (`self.max == other.min`) do overlap: only a strict gap separates them.
    #[inline]
    pub fn overlaps(&self, other: &Projection) -> bool {
        !(self.max < other.min || other.max < self.min)
    }

    /// The length of the intersection of these two intervals.
    ///
    /// Only meaningful if [`Self::overlaps`] returns `true`. Otherwise the result is negative
    /// and should not be relied upon.
    #[inline]
    pub fn overlap(&self, other: &Projection) -> Real {
        self.max.min(other.max) - self.min.max(other.min)
    }

    /// The middle of this interval.
    #[inline]
    pub fn center(&self) -> Real {
        (self.min + self.max) / 2.0
    }

    /// The length of this interval.
    #[inline]
    pub fn length(&self) -> Real {
        self.max - self.min
    }

    /// Does this interval fully contain `other`?
    #[inline]
    pub fn contains(&self, other: &Projection) -> bool {
        self.min <= other.min && other.max <= self.max
    }
}
