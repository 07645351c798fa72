use crate::math::{Point, Real, Vector};

/// A candidate separating axis derived from one edge of a convex shape.
///
/// An axis stores the edge it was built from, the edge rotated by 90 degrees (`unit`), and
/// the normalized version of that perpendicular (`normal`). Shapes are projected onto
/// `normal` during the separating axis test.
///
/// The zero axis (all three vectors null) stands for "no axis". It is what a
/// [`MinimumTranslationVector`](crate::query::MinimumTranslationVector) carries when the
/// shapes do not intersect.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Axis {
    edge: Vector,
    unit: Vector,
    normal: Vector,
}

impl Default for Axis {
    fn default() -> Self {
        Self::zero()
    }
}

impl Axis {
    /// The zero axis.
    #[inline]
    pub fn zero() -> Self {
        Self {
            edge: Vector::zeros(),
            unit: Vector::zeros(),
            normal: Vector::zeros(),
        }
    }

    /// Builds the axis perpendicular to `edge`.
    ///
    /// The perpendicular is `(edge.y, -edge.x)`. Returns `None` if its length is zero (or
    /// underflows to zero) or is not finite. Any other edge, however short, has an axis.
    #[inline]
    pub fn from_edge(edge: Vector) -> Option<Self> {
        let unit = Vector::new(edge.y, -edge.x);
        let norm = unit.norm();

        if norm == 0.0 || !norm.is_finite() {
            return None;
        }

        Some(Self {
            edge,
            unit,
            normal: unit / norm,
        })
    }

    /// Builds the axis of the edge going from `b` to `a`, i.e., with `edge = a - b`.
    #[inline]
    pub fn from_segment(a: &Point, b: &Point) -> Option<Self> {
        Self::from_edge(a - b)
    }

    /// The edge this axis was computed from.
    #[inline]
    pub fn edge(&self) -> Vector {
        self.edge
    }

    /// The edge rotated by 90 degrees, not normalized.
    #[inline]
    pub fn unit(&self) -> Vector {
        self.unit
    }

    /// The unit direction shapes are projected on.
    #[inline]
    pub fn normal(&self) -> Vector {
        self.normal
    }

    /// Is this the zero axis?
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.normal == Vector::zeros()
    }

    /// This axis with all its vectors pointing the opposite way.
    #[inline]
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            edge: -self.edge,
            unit: -self.unit,
            normal: -self.normal,
        }
    }

    /// Projects a single point on this axis' normal.
    #[inline]
    pub fn project_point(&self, pt: &Point) -> Real {
        self.normal.dot(&pt.coords)
    }
}

#[cfg(test)]
mod test {
    use super::Axis;
    use crate::math::{Point, Real, Vector};

    #[test]
    fn axis_normal_is_perpendicular_to_edge() {
        let axis = Axis::from_edge(Vector::new(3.0, 4.0)).unwrap();
        assert_eq!(axis.unit(), Vector::new(4.0, -3.0));
        assert_relative_eq!(axis.normal(), Vector::new(0.8, -0.6));
        assert_relative_eq!(axis.normal().dot(&axis.edge()), 0.0);
    }

    #[test]
    fn zero_length_edge_has_no_axis() {
        assert!(Axis::from_edge(Vector::zeros()).is_none());
        assert!(Axis::from_segment(&Point::new(1.0, 1.0), &Point::new(1.0, 1.0)).is_none());
        assert!(Axis::zero().is_zero());
        assert_eq!(Axis::default(), Axis::zero());
    }

    #[test]
    fn tiny_edges_still_have_an_axis() {
        let axis = Axis::from_edge(Vector::new(1.0e-7, 0.0)).unwrap();
        assert_relative_eq!(axis.normal(), Vector::new(0.0, -1.0));

        let axis = Axis::from_segment(&Point::new(0.0, 1.0e-7), &Point::new(1.0e-7, 0.0)).unwrap();
        assert_relative_eq!(axis.normal().norm(), 1.0, epsilon = 1.0e-6);
        assert!(Axis::from_edge(Vector::new(Real::INFINITY, 0.0)).is_none());
        assert!(Axis::from_edge(Vector::new(Real::NAN, 1.0)).is_none());
    }

    #[test]
    fn reversed_axis() {
        let axis = Axis::from_segment(&Point::new(0.0, 0.0), &Point::new(1.0, 0.0)).unwrap();
        assert_eq!(axis.edge(), Vector::new(-1.0, 0.0));
        assert_eq!(axis.normal(), Vector::new(0.0, 1.0));

        let reversed = axis.reversed();
        assert_eq!(reversed.normal(), Vector::new(0.0, -1.0));
        assert_eq!(reversed.reversed(), axis);
        assert!(!reversed.is_zero());
    }
}
