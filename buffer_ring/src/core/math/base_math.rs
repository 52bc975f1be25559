use super::Vector2;
use crate::core::traits::Real;
use static_aabb2d_index::AABB;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use buffer_ring::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 { (v1, v2) } else { (v2, v1) }
}

/// Returns the point on the line segment going from `p0` to `p1` at parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Axis aligned bounding box of the segment `p0` to `p1` expanded by `epsilon` on all sides.
///
/// # Examples
///
/// ```
/// # use buffer_ring::core::math::*;
/// let bb = seg_fuzzy_extents(Vector2::new(2.0, 0.0), Vector2::new(0.0, 1.0), 0.5);
/// assert_eq!(bb.min_x, -0.5);
/// assert_eq!(bb.max_y, 1.5);
/// ```
#[inline]
pub fn seg_fuzzy_extents<T>(p0: Vector2<T>, p1: Vector2<T>, epsilon: T) -> AABB<T>
where
    T: Real,
{
    let (min_x, max_x) = min_max(p0.x, p1.x);
    let (min_y, max_y) = min_max(p0.y, p1.y);
    AABB::new(
        min_x - epsilon,
        min_y - epsilon,
        max_x + epsilon,
        max_y + epsilon,
    )
}

/// Twice the signed area of the closed polygon given by `points` (shoelace formula).
///
/// Positive for counter clockwise polygons, negative for clockwise. A closing segment from the
/// last point back to the first is always included, so it does not matter whether the first
/// point is repeated at the end. Coordinates are taken relative to the first point to limit
/// cancellation error for polygons far from the origin.
pub fn double_signed_area<T>(points: impl IntoIterator<Item = Vector2<T>>) -> T
where
    T: Real,
{
    let mut iter = points.into_iter();
    let Some(origin) = iter.next() else {
        return T::zero();
    };

    let mut double_total_area = T::zero();
    let mut prev = Vector2::zero();
    for p in iter {
        let curr = p - origin;
        double_total_area = double_total_area + prev.perp_dot(curr);
        prev = curr;
    }

    // closing segment ends at the origin which contributes zero
    double_total_area
}
