//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vector};
use na;
use num::Bounded;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is the simplest bounding volume, defined by its minimum and maximum corners.
/// It's called "axis-aligned" because its edges are always parallel to the coordinate axes.
///
/// # Structure
///
/// - **mins**: The point with the smallest coordinates on each axis (bottom-left corner)
/// - **maxs**: The point with the largest coordinates on each axis (top-right corner)
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y`
///
/// Colliders report their Aabb so that a broad-phase can discard distant pairs before
/// the (more expensive) separating axis test runs. An Aabb can also be turned into a
/// four-vertex convex shape with [`ConvexShape::from_aabb`](crate::shape::ConvexShape::from_aabb).
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use sat2d::bounding_volume::{Aabb, BoundingVolume};
/// use sat2d::math::Point;
///
/// let a = Aabb::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
/// let b = Aabb::new(Point::new(0.5, 0.5), Point::new(2.0, 2.0));
///
/// assert!(a.intersects(&b));
/// assert_eq!(a.merged(&b), Aabb::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0)));
/// assert_eq!(a.center(), Point::new(0.5, 0.5));
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point,
    /// The point with maximum coordinates.
    ///
    /// Each component should be greater than or equal to the
    /// corresponding component in `mins`.
    pub maxs: Point,
}

impl Aabb {
    /// Creates a new Aabb from its minimum and maximum corners.
    ///
    /// Each component of `mins` should be ≤ the corresponding component of `maxs`.
    #[inline]
    pub fn new(mins: Point, maxs: Point) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid Aabb with `mins` components set to `Real::max_values` and `maxs`
    /// components set to `-Real::max_values`.
    ///
    /// This is often used as the initial values of some Aabb merging algorithms: merging
    /// anything into it yields that other Aabb.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(<Real as Bounded>::max_value()).into(),
            Vector::repeat(-<Real as Bounded>::max_value()).into(),
        )
    }

    /// Creates a new Aabb from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point, half_extents: Vector) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new Aabb with zero extents located at `point`.
    #[inline]
    pub fn from_point(point: Point) -> Self {
        Self::new(point, point)
    }

    /// Creates a new Aabb from a set of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(pts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        super::aabb_utils::local_point_cloud_aabb(pts)
    }

    /// Is this Aabb valid, i.e., are all its `mins` lower than or equal to its `maxs`?
    #[inline]
    pub fn is_valid(&self) -> bool {
        na::partial_le(&self.mins, &self.maxs)
    }

    /// The center of this Aabb.
    #[inline]
    pub fn center(&self) -> Point {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this Aabb.
    #[inline]
    pub fn half_extents(&self) -> Vector {
        (self.maxs - self.mins) / 2.0
    }

    /// The extents of this Aabb.
    #[inline]
    pub fn extents(&self) -> Vector {
        self.maxs - self.mins
    }

    /// Enlarges this Aabb so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point) {
        self.mins = self.mins.inf(&pt);
        self.maxs = self.maxs.sup(&pt);
    }

    /// Computes the Aabb bounding `self` translated by `translation`.
    #[inline]
    pub fn translated(mut self, translation: &Vector) -> Self {
        self.mins += translation;
        self.maxs += translation;
        self
    }

    /// Computes the intersection of this Aabb and another one.
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let result = Aabb {
            mins: Point::from(self.mins.coords.sup(&other.mins.coords)),
            maxs: Point::from(self.maxs.coords.inf(&other.maxs.coords)),
        };

        if result.is_valid() {
            Some(result)
        } else {
            None
        }
    }

    /// Computes the vertices of this `Aabb`.
    ///
    /// The vertices are given in counter-clockwise order, starting from the bottom-left
    /// corner, in a right-handed coordinate system:
    /// ```text
    ///    y             3 - 2
    ///    |             |   |
    ///    ___ x         0 - 1
    /// ```
    #[inline]
    pub fn vertices(&self) -> [Point; 4] {
        [
            Point::new(self.mins.x, self.mins.y),
            Point::new(self.maxs.x, self.mins.y),
            Point::new(self.maxs.x, self.maxs.y),
            Point::new(self.mins.x, self.maxs.y),
        ]
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point {
        self.center()
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.mins += Vector::repeat(-amount);
        self.maxs += Vector::repeat(amount);
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }
}
