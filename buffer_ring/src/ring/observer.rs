use super::Point2D;

/// Marker carried by an append operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    BeginJoin,
    EndJoin,
    BeginHooklet,
    EndHooklet,
}

/// Observer notified of notable events while a ring is built, e.g. for plotting or diagnostics.
///
/// All methods default to doing nothing. Observers only watch, nothing they do can change the
/// ring or the tracked pieces.
pub trait RingObserver<P>
where
    P: Point2D,
{
    /// A pending point is about to be tested against the tracked pieces.
    #[inline]
    fn point_checked(&mut self, _point: &P) {}

    /// A point carrying a marker was appended at `index`.
    #[inline]
    fn marker_appended(&mut self, _kind: MarkerKind, _index: usize, _point: &P) {}

    /// A closed piece was skipped because its end index is past the end of the ring.
    #[inline]
    fn stale_piece_skipped(&mut self, _begin: usize, _end: usize, _ring_len: usize) {}

    /// A single point crossing was found but the loop it would split off does not have positive
    /// area, tracking was discarded and the ring left unchanged.
    #[inline]
    fn candidate_rejected(&mut self, _intersect: &P, _split_off: &[P], _area: P::Num) {}

    /// The ring was truncated and `intersect` appended at `ip_index`.
    #[inline]
    fn excision_accepted(&mut self, _intersect: &P, _ip_index: usize, _split_off: &[P]) {}
}

/// Observer that ignores all events.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl<P> RingObserver<P> for NoopObserver where P: Point2D {}

impl<P, O> RingObserver<P> for &mut O
where
    P: Point2D,
    O: RingObserver<P> + ?Sized,
{
    #[inline]
    fn point_checked(&mut self, point: &P) {
        (**self).point_checked(point);
    }

    #[inline]
    fn marker_appended(&mut self, kind: MarkerKind, index: usize, point: &P) {
        (**self).marker_appended(kind, index, point);
    }

    #[inline]
    fn stale_piece_skipped(&mut self, begin: usize, end: usize, ring_len: usize) {
        (**self).stale_piece_skipped(begin, end, ring_len);
    }

    #[inline]
    fn candidate_rejected(&mut self, intersect: &P, split_off: &[P], area: P::Num) {
        (**self).candidate_rejected(intersect, split_off, area);
    }

    #[inline]
    fn excision_accepted(&mut self, intersect: &P, ip_index: usize, split_off: &[P]) {
        (**self).excision_accepted(intersect, ip_index, split_off);
    }
}
