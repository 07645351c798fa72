use core::cell::OnceCell;

use crate::bounding_volume::details::{local_point_cloud_aabb, point_cloud_aabb};
use crate::bounding_volume::Aabb;
use crate::math::{Affine, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::sat::{Axis, Projection};
use crate::query::{minimum_translation_vector, MinimumTranslationVector};
use crate::shape::TypedShape;
use na::RealField;

/// Indicates that a set of vertices does not describe a valid convex polygon.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// A convex polygon needs at least three vertices.
    #[error("a convex shape needs at least 3 vertices, found {0}.")]
    NotEnoughVertices(usize),
    /// One of the vertices has a NaN or infinite coordinate.
    #[error("the vertex {0} has a non-finite coordinate.")]
    NonFiniteVertex(usize),
    /// The edge starting at the given vertex has a zero length.
    #[error("the edge starting at vertex {0} has a zero length.")]
    DegenerateEdge(usize),
    /// The polygon turns the wrong way at the given vertex, or winds around more than once.
    #[error("the polygon is not convex at vertex {0}.")]
    NotConvex(usize),
    /// All the vertices lie on the same line.
    #[error("the polygon has a zero area.")]
    ZeroArea,
    /// The operation needs a shape with a specific number of vertices.
    #[error("expected a shape with {expected} vertices, found {found}.")]
    VertexCountMismatch {
        /// The number of vertices the operation needs.
        expected: usize,
        /// The number of vertices of the shape.
        found: usize,
    },
}

/// A 2D convex polygon, posed in world-space.
///
/// The polygon is described by its local-space `vertices`, in a consistent clockwise or
/// counter-clockwise order. [`ConvexShape::update`] maps them to world-space into
/// the `derived_vertices`, which are the ones all the queries work with.
///
/// The edge axes used by the separating axis test are derived from the world-space vertices.
/// They are cached and only rebuilt, on the next read, after the shape was moved.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct ConvexShape {
    vertices: Vec<Point>,
    derived_vertices: Vec<Point>,
    #[cfg_attr(feature = "serde", serde(skip))]
    axes: OnceCell<Vec<Axis>>,
}

impl ConvexShape {
    /// Creates a new convex shape from its local-space vertices.
    ///
    /// The vertices must be given in a consistent clockwise or counter-clockwise order.
    /// Collinear consecutive vertices are accepted. Until [`ConvexShape::update`] is called,
    /// the shape is posed with the identity transform.
    pub fn new(vertices: Vec<Point>) -> Result<Self, ShapeError> {
        if let Err(err) = validate_convex_polygon(&vertices) {
            log::debug!("Rejected convex shape with {} vertices: {err}", vertices.len());
            return Err(err);
        }

        Ok(Self {
            derived_vertices: vertices.clone(),
            vertices,
            axes: OnceCell::new(),
        })
    }

    /// Creates the convex shape with the same four corners as `aabb`.
    ///
    /// Fails if `aabb` has a zero width or height.
    pub fn from_aabb(aabb: &Aabb) -> Result<Self, ShapeError> {
        Self::new(aabb.vertices().to_vec())
    }

    /// Creates a rectangle centered at the origin.
    pub fn cuboid(half_extents: Vector) -> Result<Self, ShapeError> {
        Self::from_aabb(&Aabb::from_half_extents(Point::origin(), half_extents))
    }

    /// Reshapes this four-vertex shape into the corners of `aabb`.
    ///
    /// The corners become both the local-space vertices and the current world-space
    /// vertices, as if posed by the identity. Fails, leaving `self` unchanged, if this shape
    /// doesn't have exactly four vertices or if `aabb` is flat.
    pub fn set_from_aabb(&mut self, aabb: &Aabb) -> Result<(), ShapeError> {
        if self.vertices.len() != 4 {
            let err = ShapeError::VertexCountMismatch {
                expected: 4,
                found: self.vertices.len(),
            };
            log::debug!("Cannot reshape into an Aabb: {err}");
            return Err(err);
        }

        let corners = aabb.vertices();
        validate_convex_polygon(&corners)?;
        self.vertices.copy_from_slice(&corners);
        self.derived_vertices.copy_from_slice(&corners);
        self.axes = OnceCell::new();
        Ok(())
    }

    /// The local-space vertices of this polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The world-space vertices of this polygon, as computed by the last [`ConvexShape::update`].
    #[inline]
    pub fn derived_vertices(&self) -> &[Point] {
        &self.derived_vertices
    }

    /// Poses this polygon in world-space.
    ///
    /// Every local vertex is mapped by `transform`. The edge axes are invalidated.
    pub fn update(&mut self, transform: &Affine) {
        for (derived, local) in self.derived_vertices.iter_mut().zip(self.vertices.iter()) {
            *derived = transform.transform_point(local);
        }

        self.axes = OnceCell::new();
    }

    /// Are the edge axes out of date with the world-space vertices?
    ///
    /// If so, they will be rebuilt by the next call to [`ConvexShape::axes`].
    #[inline]
    pub fn axes_dirty(&self) -> bool {
        self.axes.get().is_none()
    }

    /// The separating axis candidates of this polygon: one per world-space edge.
    ///
    /// The `i`-th axis is built from the edge `derived_vertices[i] - derived_vertices[i + 1]`.
    /// If a transform collapsed an edge to a point, its axis is the zero axis, which the
    /// separating axis test skips.
    pub fn axes(&self) -> &[Axis] {
        self.axes.get_or_init(|| {
            let pts = &self.derived_vertices;
            (0..pts.len())
                .map(|i1| {
                    let i2 = (i1 + 1) % pts.len();
                    Axis::from_segment(&pts[i1], &pts[i2]).unwrap_or_default()
                })
                .collect()
        })
    }

    /// Projects the world-space vertices of this polygon on the normal of `axis`.
    #[inline]
    pub fn project(&self, axis: &Axis) -> Projection {
        Projection::from_points(&axis.normal(), &self.derived_vertices)
    }

    /// The world-space Aabb of this polygon.
    pub fn compute_aabb(&self) -> Aabb {
        local_point_cloud_aabb(self.derived_vertices.iter().copied())
            .unwrap_or_else(Aabb::new_invalid)
    }

    /// The Aabb of this polygon in its local-space.
    pub fn compute_local_aabb(&self) -> Aabb {
        local_point_cloud_aabb(self.vertices.iter().copied()).unwrap_or_else(Aabb::new_invalid)
    }

    /// The Aabb this polygon would have if it was posed by `transform`.
    ///
    /// Unlike [`ConvexShape::update`], this leaves the shape untouched.
    pub fn compute_transformed_aabb(&self, transform: &Affine) -> Aabb {
        point_cloud_aabb(transform, &self.vertices).unwrap_or_else(Aabb::new_invalid)
    }

    /// Computes the minimum translation vector separating this polygon from `other`.
    ///
    /// Against another convex shape this is [`sat_convex_convex`](crate::query::sat::sat_convex_convex).
    /// Against a compound, `self` is tested against every child.
    #[inline]
    pub fn intersects<'a>(&self, other: impl Into<TypedShape<'a>>) -> MinimumTranslationVector {
        minimum_translation_vector(self, other)
    }
}

/// Checks that `pts` describes a non-degenerate convex polygon.
fn validate_convex_polygon(pts: &[Point]) -> Result<(), ShapeError> {
    let n = pts.len();

    if n < 3 {
        return Err(ShapeError::NotEnoughVertices(n));
    }

    if let Some(i) = pts
        .iter()
        .position(|pt| !pt.coords.iter().all(|c| c.is_finite()))
    {
        return Err(ShapeError::NonFiniteVertex(i));
    }

    if let Some(i) = (0..n).find(|&i| Axis::from_segment(&pts[i], &pts[(i + 1) % n]).is_none()) {
        return Err(ShapeError::DegenerateEdge(i));
    }

    // Every turn must go the same way, and all the turns together must add up to a
    // single revolution.
    let mut orientation: Real = 0.0;
    let mut total_turn: Real = 0.0;

    for i1 in 0..n {
        let i2 = (i1 + 1) % n;
        let i3 = (i2 + 1) % n;
        let e1 = pts[i2] - pts[i1];
        let e2 = pts[i3] - pts[i2];
        let cross = e1.perp(&e2);
        total_turn += cross.atan2(e1.dot(&e2));

        if cross.abs() <= DEFAULT_EPSILON * e1.norm() * e2.norm() {
            continue;
        }

        if orientation == 0.0 {
            orientation = cross.signum();
        } else if cross.signum() != orientation {
            return Err(ShapeError::NotConvex(i2));
        }
    }

    if orientation == 0.0 {
        return Err(ShapeError::ZeroArea);
    }

    if (total_turn.abs() - Real::two_pi()).abs() > 1.0e-2 {
        return Err(ShapeError::NotConvex(0));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::{ConvexShape, ShapeError};
    use crate::bounding_volume::Aabb;
    use crate::math::{Affine, Isometry, Point, Real, Vector};
    use crate::query::sat::Axis;
    use na::{Matrix3, RealField};

    fn unit_square() -> ConvexShape {
        ConvexShape::from_aabb(&Aabb::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0))).unwrap()
    }

    #[test]
    fn reject_invalid_polygons() {
        assert_eq!(
            ConvexShape::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]).unwrap_err(),
            ShapeError::NotEnoughVertices(2)
        );
        assert_eq!(
            ConvexShape::new(vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(0.0, 1.0),
            ])
            .unwrap_err(),
            ShapeError::DegenerateEdge(1)
        );
        assert_eq!(
            ConvexShape::new(vec![
                Point::new(0.0, 0.0),
                Point::new(Real::NAN, 0.0),
                Point::new(0.0, 1.0),
            ])
            .unwrap_err(),
            ShapeError::NonFiniteVertex(1)
        );
        assert_eq!(
            ConvexShape::new(vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(2.0, 0.0),
            ])
            .unwrap_err(),
            ShapeError::ZeroArea
        );
        assert_eq!(
            ConvexShape::from_aabb(&Aabb::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0)))
                .unwrap_err(),
            ShapeError::DegenerateEdge(1)
        );
    }

    #[test]
    fn accept_tiny_polygons() {
        let tiny = ConvexShape::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0e-7, 0.0),
            Point::new(0.0, 1.0e-7),
        ])
        .unwrap();
        assert!(tiny.axes().iter().all(|axis| !axis.is_zero()));
    }

    #[test]
    fn reject_concave_polygons() {
        // An arrow head: the turn at vertex 2 goes the wrong way.
        let arrow = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(0.0, 0.5),
            Point::new(-2.0, 1.0),
        ];
        assert!(matches!(
            ConvexShape::new(arrow),
            Err(ShapeError::NotConvex(_))
        ));

        // A pentagram turns consistently but winds twice around its center.
        let pentagram = (0..5)
            .map(|i| {
                let angle = (i * 2) as Real * Real::two_pi() / 5.0;
                Point::new(angle.cos(), angle.sin())
            })
            .collect();
        assert_eq!(
            ConvexShape::new(pentagram).unwrap_err(),
            ShapeError::NotConvex(0)
        );
    }

    #[test]
    fn accept_both_orientations_and_collinear_vertices() {
        let ccw = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 1.0),
        ];
        let mut cw = ccw.clone();
        cw.reverse();

        assert!(ConvexShape::new(ccw).is_ok());
        assert!(ConvexShape::new(cw).is_ok());
    }

    #[test]
    fn axes_are_rebuilt_lazily_after_update() {
        let mut shape = unit_square();
        assert!(shape.axes_dirty());
        assert_eq!(shape.axes().len(), shape.vertices().len());
        assert!(!shape.axes_dirty());

        let first = shape.axes()[0];
        assert_eq!(first.normal(), Vector::new(0.0, 1.0));

        let rot = Isometry::rotation(Real::frac_pi_2());
        shape.update(&Affine::from_matrix_unchecked(rot.to_homogeneous()));
        assert!(shape.axes_dirty());
        assert_relative_eq!(shape.axes()[0].normal(), Vector::new(-1.0, 0.0));
        assert!(!shape.axes_dirty());
    }

    #[test]
    fn projections_are_stable_without_update() {
        let mut shape = unit_square();
        let axis = Axis::from_edge(Vector::new(1.0, 2.0)).unwrap();
        let before = shape.project(&axis);
        assert_eq!(shape.project(&axis), before);

        shape.update(&Affine::identity());
        assert_eq!(shape.derived_vertices(), shape.vertices());
        assert_eq!(shape.project(&axis), before);
    }

    #[test]
    fn affine_update_scales_the_aabb() {
        let mut shape = unit_square();
        #[rustfmt::skip]
        let scale_then_shift = Matrix3::new(
            2.0, 0.0, 1.0,
            0.0, 3.0, -1.0,
            0.0, 0.0, 1.0,
        );
        shape.update(&Affine::from_matrix_unchecked(scale_then_shift));

        let aabb = shape.compute_aabb();
        assert_eq!(aabb.mins, Point::new(1.0, -1.0));
        assert_eq!(aabb.maxs, Point::new(3.0, 2.0));
        assert_eq!(
            shape.compute_transformed_aabb(&Affine::from_matrix_unchecked(scale_then_shift)),
            aabb
        );
        assert_eq!(
            shape.compute_local_aabb(),
            Aabb::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0))
        );
        // The local vertices are left untouched.
        assert_eq!(shape.vertices()[2], Point::new(1.0, 1.0));
    }

    #[test]
    fn set_from_aabb_requires_four_vertices() {
        let mut triangle = ConvexShape::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap();
        let aabb = Aabb::new(Point::new(-1.0, -1.0), Point::new(1.0, 1.0));
        assert_eq!(
            triangle.set_from_aabb(&aabb),
            Err(ShapeError::VertexCountMismatch {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(triangle.vertices().len(), 3);

        let mut square = unit_square();
        let _ = square.axes();
        square.set_from_aabb(&aabb).unwrap();
        assert!(square.axes_dirty());
        assert_eq!(square.compute_aabb(), aabb);
        assert_eq!(square.derived_vertices(), &aabb.vertices()[..]);
    }

    #[test]
    fn collapsed_edges_yield_zero_axes() {
        let mut shape = unit_square();
        #[rustfmt::skip]
        let flatten_y = Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, 0.0, 0.0,
            0.0, 0.0, 1.0,
        );
        shape.update(&Affine::from_matrix_unchecked(flatten_y));

        let axes = shape.axes();
        assert!(axes[1].is_zero() && axes[3].is_zero());
        assert!(!axes[0].is_zero());
        assert!(axes.iter().all(|axis| axis.normal().iter().all(|c| c.is_finite())));
    }
}
