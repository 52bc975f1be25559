use super::{
    CartesianIntersector, LoopAreaValidator, MarkerKind, NoopObserver, OptionsError, Piece,
    PieceKind, Point2D, RingBuilderOptions, RingObserver, RingSource, RingSourceMut,
    SegmentIntersector, SegmentIntr, ShoelaceArea, SpanTracker,
};
use num_traits::Zero;
use tracing::{debug, trace};

/// Numeric type of the points stored in ring `R`.
pub type RingNum<R> = <<R as RingSource>::Point as Point2D>::Num;

/// Appends points to a buffer ring under construction, removing hooklets as they are traced.
///
/// Special points are marked by the driver (join and hooklet begin/end). Spans between a join and
/// the following hooklet are tracked and every later edge appended through [RingBuilder::append],
/// [RingBuilder::append_begin_join] or [RingBuilder::append_begin_hooklet] is first tested against
/// them. When the new edge crosses a tracked span at a single point and the loop closed by that
/// crossing winds the same way as the ring, the loop is cut off: the ring is truncated back to the
/// crossed edge and the intersect point appended in its place.
///
/// The ring is borrowed for the lifetime of the builder and is consistent after every call.
///
/// # Examples
///
/// ```
/// # use buffer_ring::ring::*;
/// # use buffer_ring::core::math::Vector2;
/// let mut ring = vec![Vector2::new(0.0, 8.0)];
/// let mut builder = RingBuilder::new(&mut ring);
/// builder.append_begin_join(Vector2::new(0.0, 4.0));
/// builder.append(Vector2::new(4.0, 4.0));
/// builder.append(Vector2::new(4.0, 0.0));
/// builder.append(Vector2::new(2.0, 4.0));
/// builder.append_begin_hooklet(Vector2::new(2.0, 0.0));
/// builder.append_end_hooklet(Vector2::new(0.0, 0.0));
/// // crosses back over the hooklet, the clockwise loop it closes is removed
/// builder.append(Vector2::new(6.0, 3.0));
/// assert_eq!(builder.finish(), 1);
/// assert_eq!(ring.len(), 7);
/// assert!(ring[5].fuzzy_eq(Vector2::new(2.0, 1.0)));
/// assert_eq!(ring[6], Vector2::new(6.0, 3.0));
/// ```
#[derive(Debug)]
pub struct RingBuilder<
    'a,
    R,
    I = CartesianIntersector<RingNum<R>>,
    A = ShoelaceArea,
    O = NoopObserver,
> where
    R: RingSourceMut,
{
    ring: &'a mut R,
    previous_point: Option<R::Point>,
    pieces: SpanTracker<R::Point>,
    intersector: I,
    area_validator: A,
    observer: O,
    excision_count: usize,
}

impl<'a, R> RingBuilder<'a, R>
where
    R: RingSourceMut,
{
    /// Create a builder appending to `ring` using the default intersector, clockwise ring
    /// orientation and no observer.
    pub fn new(ring: &'a mut R) -> Self {
        Self::with_strategies(
            ring,
            CartesianIntersector::default(),
            ShoelaceArea::default(),
            NoopObserver,
        )
    }

    /// Same as [RingBuilder::new] but configured by `options`.
    ///
    /// Returns an error if the options are invalid, see [RingBuilderOptions::validate].
    pub fn with_options(
        ring: &'a mut R,
        options: &RingBuilderOptions<RingNum<R>>,
    ) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self::with_strategies(
            ring,
            CartesianIntersector::new(options.pos_equal_eps),
            ShoelaceArea::new(options.orientation),
            NoopObserver,
        ))
    }
}

impl<'a, R, I, A, O> RingBuilder<'a, R, I, A, O>
where
    R: RingSourceMut,
    I: SegmentIntersector<R::Point>,
    A: LoopAreaValidator<R::Point>,
    O: RingObserver<R::Point>,
{
    /// Create a builder with the intersect, area and observer strategies given.
    ///
    /// Points already in `ring` are kept, the last one acts as the previous point for the first
    /// append.
    pub fn with_strategies(ring: &'a mut R, intersector: I, area_validator: A, observer: O) -> Self {
        let previous_point = ring.last_point();
        RingBuilder {
            ring,
            previous_point,
            pieces: SpanTracker::new(),
            intersector,
            area_validator,
            observer,
            excision_count: 0,
        }
    }

    /// Replace the observer.
    pub fn with_observer<O2>(self, observer: O2) -> RingBuilder<'a, R, I, A, O2>
    where
        O2: RingObserver<R::Point>,
    {
        RingBuilder {
            ring: self.ring,
            previous_point: self.previous_point,
            pieces: self.pieces,
            intersector: self.intersector,
            area_validator: self.area_validator,
            observer,
            excision_count: self.excision_count,
        }
    }

    /// Append `point` after testing the edge it forms against the tracked pieces.
    pub fn append(&mut self, point: R::Point) {
        self.check(point);
        self.push(point);
    }

    /// Append `point` as the start of a join and start tracking a new span from it.
    ///
    /// A span that is still open is discarded first.
    pub fn append_begin_join(&mut self, point: R::Point) {
        self.check(point);
        self.cleanup();
        let index = self.push(point);
        self.observer
            .marker_appended(MarkerKind::BeginJoin, index, &point);
        self.pieces.push(Piece::open(PieceKind::Join, index));
    }

    /// Append `point` as the end of a join without testing, joins never self intersect.
    pub fn append_end_join(&mut self, point: R::Point) {
        let index = self.push(point);
        self.observer.marker_appended(MarkerKind::EndJoin, index, &point);
    }

    /// Append `point` as the start of a hooklet after testing it, closing the open span (if any)
    /// so later edges are tested against it.
    pub fn append_begin_hooklet(&mut self, point: R::Point) {
        self.check(point);
        let index = self.push(point);
        self.observer
            .marker_appended(MarkerKind::BeginHooklet, index, &point);
        self.pieces.close_newest(index);
    }

    /// Append `point` as the end of a hooklet without testing.
    pub fn append_end_hooklet(&mut self, point: R::Point) {
        let index = self.push(point);
        self.observer
            .marker_appended(MarkerKind::EndHooklet, index, &point);
    }

    /// The ring being built.
    #[inline]
    pub fn ring(&self) -> &R {
        self.ring
    }

    /// Last point appended (or last point of the ring when the builder was created).
    #[inline]
    pub fn previous_point(&self) -> Option<R::Point> {
        self.previous_point
    }

    /// Currently tracked pieces.
    #[inline]
    pub fn pieces(&self) -> &SpanTracker<R::Point> {
        &self.pieces
    }

    /// Observer notified of builder events.
    #[inline]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Number of loops cut off the ring so far.
    #[inline]
    pub fn excision_count(&self) -> usize {
        self.excision_count
    }

    /// Release the ring borrow, returns the number of loops cut off the ring.
    #[inline]
    pub fn finish(self) -> usize {
        self.excision_count
    }

    fn push(&mut self, point: R::Point) -> usize {
        let index = self.ring.point_count();
        self.ring.push_point(point);
        self.previous_point = Some(point);
        index
    }

    fn cleanup(&mut self) {
        if self.pieces.is_newest_open() {
            self.pieces.clear();
        }
    }

    /// Test the edge from the previous point to `point` against the closed pieces, newest first.
    ///
    /// Stops at the first single point crossing whether or not it leads to an excision, the piece
    /// list is rebuilt or cleared in both cases.
    fn check(&mut self, point: R::Point) {
        let Some(previous) = self.previous_point else {
            return;
        };

        self.observer.point_checked(&point);

        let ring_len = self.ring.point_count();
        let mut crossing = None;
        for piece in self.pieces.iter_newest_to_oldest() {
            let Some(end) = piece.closed_end() else {
                continue;
            };

            if end < piece.begin {
                continue;
            }

            if end >= ring_len {
                trace!(begin = piece.begin, end, ring_len, "skipping stale piece");
                self.observer.stale_piece_skipped(piece.begin, end, ring_len);
                continue;
            }

            if let Some((seg_index, intersect)) =
                find_crossing(&*self.ring, &self.intersector, previous, point, piece.begin, end)
            {
                crossing = Some((piece.begin, seg_index, intersect));
                break;
            }
        }

        if let Some((begin, seg_index, intersect)) = crossing {
            self.split_at_crossing(begin, seg_index, intersect);
        }
    }

    /// Cut the ring at `intersect` on the edge starting at `seg_index` if the loop formed is valid.
    fn split_at_crossing(&mut self, piece_begin: usize, seg_index: usize, intersect: R::Point) {
        let split_off = self.split_off_loop(intersect, seg_index + 1);
        let area = self.area_validator.signed_area(&split_off);

        if area <= RingNum::<R>::zero() {
            debug!(seg_index, ?area, "rejecting split off loop");
            self.observer
                .candidate_rejected(&intersect, &split_off, area);
            self.pieces.clear();
            return;
        }

        self.ring.truncate_points(seg_index + 1);
        let ip_index = self.push(intersect);
        self.excision_count += 1;
        debug!(
            seg_index,
            ip_index,
            removed = split_off.len() - 2,
            ?area,
            "split off loop"
        );
        self.observer
            .excision_accepted(&intersect, ip_index, &split_off);

        self.pieces.clear();
        // the span up to the intersect can still be crossed by later edges
        self.pieces
            .push(Piece::closed(PieceKind::Finished, piece_begin, ip_index));
        self.pieces.push(
            Piece::open(PieceKind::IntersectionStart, ip_index).with_split_off(split_off),
        );
    }

    /// Closed loop `intersect, ring[from..], intersect`.
    fn split_off_loop(&self, intersect: R::Point, from: usize) -> Vec<R::Point> {
        let n = self.ring.point_count();
        let mut split_off = Vec::with_capacity(n.saturating_sub(from) + 2);
        split_off.push(intersect);
        split_off.extend((from..n).map(|j| self.ring.at(j)));
        split_off.push(intersect);
        split_off
    }
}

/// Find the first edge of `ring[begin..=end]` crossed by `p0->p1` at a single point, scanning
/// backwards from the end of the span.
///
/// Returns the index of the crossed edge start point and the intersect point.
fn find_crossing<R, I>(
    ring: &R,
    intersector: &I,
    p0: R::Point,
    p1: R::Point,
    begin: usize,
    end: usize,
) -> Option<(usize, R::Point)>
where
    R: RingSource + ?Sized,
    I: SegmentIntersector<R::Point>,
{
    // the most recently traced edges are the most likely to be crossed
    for i in (begin..end).rev() {
        match intersector.intersect(p0, p1, ring.at(i), ring.at(i + 1)) {
            SegmentIntr::Single(intersect) => return Some((i, intersect)),
            SegmentIntr::NoIntersect | SegmentIntr::Overlapping => {}
        }
    }

    None
}
