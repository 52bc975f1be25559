use super::Point2D;
use num_traits::Zero;
use num_traits::real::Real as _;
use crate::core::{
    math::{min_max, point_from_parametric, seg_fuzzy_extents},
    traits::{FuzzyEq, FuzzyOrd, Real},
};

/// Holds the result of intersecting the pending edge with a ring edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SegmentIntr<P> {
    /// Segments do not touch, or one of them has zero length.
    NoIntersect,
    /// Segments touch or cross at exactly one point (end point touches included).
    Single(P),
    /// Segments are collinear and overlap along some length, this is never acted upon.
    Overlapping,
}

impl<P> SegmentIntr<P> {
    /// Number of isolated intersect points, `Overlapping` counts as zero.
    #[inline]
    pub fn point_count(&self) -> usize {
        match self {
            SegmentIntr::Single(_) => 1,
            SegmentIntr::NoIntersect | SegmentIntr::Overlapping => 0,
        }
    }
}

/// Strategy for intersecting two line segments.
///
/// Implementations must be pure: the same inputs always give the same result.
pub trait SegmentIntersector<P>
where
    P: Point2D,
{
    /// Intersect the segment `a0->a1` with the segment `b0->b1`.
    ///
    /// When there is a single intersect the returned point lies on `a0->a1`.
    fn intersect(&self, a0: P, a1: P, b0: P, b1: P) -> SegmentIntr<P>;
}

/// Default [SegmentIntersector] solving the segments in parametric form with fuzzy comparisons.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CartesianIntersector<T>
where
    T: Real,
{
    /// Fuzzy comparison epsilon for positions and length scaled parametric values.
    pub pos_equal_eps: T,
}

impl<T> CartesianIntersector<T>
where
    T: Real,
{
    #[inline]
    pub fn new(pos_equal_eps: T) -> Self {
        Self { pos_equal_eps }
    }
}

impl<T> Default for CartesianIntersector<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new(T::fuzzy_epsilon())
    }
}

impl<P> SegmentIntersector<P> for CartesianIntersector<P::Num>
where
    P: Point2D,
{
    fn intersect(&self, a0: P, a1: P, b0: P, b1: P) -> SegmentIntr<P> {
        // Segments as P(t) = p0 + t * (p1 - p0), solved with perpendicular dot products, see
        // http://geomalgorithms.com/a05-_intersect-1.html

        use SegmentIntr::*;

        let eps = self.pos_equal_eps;
        let (v1, v2) = (a0.pos(), a1.pos());
        let (u1, u2) = (b0.pos(), b1.pos());

        if v1.fuzzy_eq_eps(v2, eps) || u1.fuzzy_eq_eps(u2, eps) {
            return NoIntersect;
        }

        if !seg_fuzzy_extents(v1, v2, eps).overlaps_aabb(&seg_fuzzy_extents(u1, u2, eps)) {
            return NoIntersect;
        }

        let v = v2 - v1;
        let u = u2 - u1;
        let w = v1 - u1;
        let v_pdot_u = v.perp_dot(u);

        // parametric values are scaled by segment length before fuzzy compare so the epsilon is
        // applied at a position scale
        let seg1_length = v.length();
        let seg2_length = u.length();
        let zero = P::Num::zero();

        // perp dot is |v| * |u| * sin(angle), compare the sine so short segments are not taken
        // as parallel
        if v_pdot_u.abs() > eps * seg1_length * seg2_length {
            let seg1_t = u.perp_dot(w) / v_pdot_u;
            let seg2_t = v.perp_dot(w) / v_pdot_u;
            if (seg1_t * seg1_length).fuzzy_in_range_eps(zero, seg1_length, eps)
                && (seg2_t * seg2_length).fuzzy_in_range_eps(zero, seg2_length, eps)
            {
                return Single(P::from_pos(point_from_parametric(
                    v1,
                    v2,
                    seg1_t.clamp_unit(),
                )));
            }

            return NoIntersect;
        }

        // parallel, collinear only if the start of each segment lies on the line of the other
        // (perp dot divided by length is the distance from the line)
        if v.perp_dot(w).abs() > eps * seg1_length || u.perp_dot(w).abs() > eps * seg2_length {
            return NoIntersect;
        }

        // collinear, project the first segment end points onto the second segment
        let w2 = v2 - u1;
        let (seg2_t0, seg2_t1) = if u.x.abs() < u.y.abs() {
            min_max(w.y / u.y, w2.y / u.y)
        } else {
            min_max(w.x / u.x, w2.x / u.x)
        };

        if !(seg2_t0 * seg2_length).fuzzy_lt_eps(seg2_length, eps)
            || !(seg2_t1 * seg2_length).fuzzy_gt_eps(zero, eps)
        {
            return NoIntersect;
        }

        let seg2_t0 = seg2_t0.clamp_unit();
        let seg2_t1 = seg2_t1.clamp_unit();

        if ((seg2_t1 - seg2_t0) * seg2_length).fuzzy_eq_zero_eps(eps) {
            // segments line up end to end
            return Single(P::from_pos(point_from_parametric(u1, u2, seg2_t0)));
        }

        Overlapping
    }
}
