use super::{Point2D, RingOrientation};
use crate::core::{math::double_signed_area, traits::Real};
use num_traits::Zero;

/// Strategy for computing the signed area of a candidate split-off loop.
///
/// The sign must agree with the winding of the ring being built: a loop that winds the same way
/// as the ring has positive area, only those are excised.
pub trait LoopAreaValidator<P>
where
    P: Point2D,
{
    /// Signed area of the closed loop `points` (first and last point equal).
    fn signed_area(&self, points: &[P]) -> P::Num;
}

/// Default [LoopAreaValidator] using the shoelace formula.
///
/// # Examples
///
/// ```
/// # use buffer_ring::ring::*;
/// # use buffer_ring::core::traits::*;
/// let clockwise_loop = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)];
/// let area = ShoelaceArea::new(RingOrientation::Clockwise).signed_area(&clockwise_loop);
/// assert!(area.fuzzy_eq(1.0));
/// let area = ShoelaceArea::new(RingOrientation::CounterClockwise).signed_area(&clockwise_loop);
/// assert!(area.fuzzy_eq(-1.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ShoelaceArea {
    pub orientation: RingOrientation,
}

impl ShoelaceArea {
    #[inline]
    pub fn new(orientation: RingOrientation) -> Self {
        Self { orientation }
    }
}

impl<P> LoopAreaValidator<P> for ShoelaceArea
where
    P: Point2D,
{
    fn signed_area(&self, points: &[P]) -> P::Num {
        // a closed loop needs at least 3 distinct points plus the repeated closing point
        if points.len() < 4 {
            return P::Num::zero();
        }

        let ccw_area = double_signed_area(points.iter().map(Point2D::pos)) / P::Num::two();
        self.orientation.normalize_area(ccw_area)
    }
}
