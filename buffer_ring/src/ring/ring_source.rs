use super::Point2D;

/// Trait representing a readonly ring of points under construction.
///
/// The ring is open while it is being built, there is no implicit segment from the last point back
/// to the first.
pub trait RingSource {
    /// Point type stored in the ring.
    type Point: Point2D;

    /// Total number of points.
    fn point_count(&self) -> usize;

    /// Get the point at given `index` position. Returns `None` if `index` out of bounds.
    fn get_point(&self, index: usize) -> Option<Self::Point>;

    /// Same as [RingSource::get_point] but panics if `index` is out of bounds.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn at(&self, index: usize) -> Self::Point;

    /// Returns true if point count is 0.
    #[inline]
    fn is_empty_ring(&self) -> bool {
        self.point_count() == 0
    }

    /// Get the last point of the ring or `None` if the ring is empty.
    #[inline]
    fn last_point(&self) -> Option<Self::Point> {
        self.point_count()
            .checked_sub(1)
            .and_then(|i| self.get_point(i))
    }

    /// Iterate over all the points of the ring in order.
    #[inline]
    fn iter_points(&self) -> impl Iterator<Item = Self::Point> + '_ {
        (0..self.point_count()).map(move |i| self.at(i))
    }
}

/// Trait representing a mutable ring of points.
///
/// Rings only ever grow at the end or get truncated, points are never inserted or removed in the
/// middle.
pub trait RingSourceMut: RingSource {
    /// Add a point to the end of the ring.
    fn push_point(&mut self, point: Self::Point);

    /// Shorten the ring to `len` points, does nothing if `len` is greater than the point count.
    fn truncate_points(&mut self, len: usize);
}

impl<P> RingSource for Vec<P>
where
    P: Point2D,
{
    type Point = P;

    #[inline]
    fn point_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get_point(&self, index: usize) -> Option<P> {
        self.as_slice().get(index).copied()
    }

    #[inline]
    fn at(&self, index: usize) -> P {
        self[index]
    }
}

impl<P> RingSourceMut for Vec<P>
where
    P: Point2D,
{
    #[inline]
    fn push_point(&mut self, point: P) {
        self.push(point);
    }

    #[inline]
    fn truncate_points(&mut self, len: usize) {
        self.truncate(len);
    }
}
