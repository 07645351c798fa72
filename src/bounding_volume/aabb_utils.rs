use crate::bounding_volume::Aabb;
use crate::math::{Affine, Point};

/// Computes the Aabb of a set of points transformed by `m`.
///
/// Returns `None` if the point cloud is empty.
pub fn point_cloud_aabb<'a, I>(m: &Affine, pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = &'a Point>,
{
    local_point_cloud_aabb(pts.into_iter().map(|pt| m.transform_point(pt)))
}

/// Computes the Aabb of a set of points.
///
/// Returns `None` if the point cloud is empty.
pub fn local_point_cloud_aabb<I>(pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = Point>,
{
    let mut it = pts.into_iter();

    let p0 = it.next()?;
    let mut min = p0;
    let mut max = p0;

    for pt in it {
        min = min.inf(&pt);
        max = max.sup(&pt);
    }

    Some(Aabb::new(min, max))
}
