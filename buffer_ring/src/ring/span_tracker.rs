use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of span tracked by a [Piece].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// Span started by a join, closed when the following hooklet begins.
    Join,
    /// Span that was cut short by an excision, ends at the intersect point.
    Finished,
    /// Span starting at an intersect point, carries the loop that was split off.
    IntersectionStart,
}

/// End state of a [Piece].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceEnd {
    /// Span is still being traced, it is not tested for intersects.
    Open,
    /// Span ends at the ring point index given.
    Closed(usize),
}

/// A tracked span of ring point indexes which later edges may cross.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Piece<P> {
    pub kind: PieceKind,
    /// Ring index of the first point of the span.
    pub begin: usize,
    pub end: PieceEnd,
    /// Loop removed from the ring when this piece was created (closed, first point repeated at
    /// the end), only set for [PieceKind::IntersectionStart].
    pub split_off: Option<Vec<P>>,
}

impl<P> Piece<P> {
    /// Create an open piece beginning at `begin`.
    #[inline]
    pub fn open(kind: PieceKind, begin: usize) -> Self {
        Piece {
            kind,
            begin,
            end: PieceEnd::Open,
            split_off: None,
        }
    }

    /// Create a closed piece spanning `begin..=end`.
    #[inline]
    pub fn closed(kind: PieceKind, begin: usize, end: usize) -> Self {
        Piece {
            kind,
            begin,
            end: PieceEnd::Closed(end),
            split_off: None,
        }
    }

    /// Attach the loop that was split off the ring.
    #[inline]
    pub fn with_split_off(mut self, split_off: Vec<P>) -> Self {
        self.split_off = Some(split_off);
        self
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self.end, PieceEnd::Open)
    }

    /// End index if the piece is closed.
    #[inline]
    pub fn closed_end(&self) -> Option<usize> {
        match self.end {
            PieceEnd::Open => None,
            PieceEnd::Closed(end) => Some(end),
        }
    }
}

/// Ordered collection of [Piece] values, newest at the back.
///
/// At most one piece is open at any time and if there is one it is the newest.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanTracker<P> {
    pieces: VecDeque<Piece<P>>,
}

impl<P> SpanTracker<P> {
    #[inline]
    pub fn new() -> Self {
        SpanTracker {
            pieces: VecDeque::new(),
        }
    }

    /// Push a new newest piece.
    pub fn push(&mut self, piece: Piece<P>) {
        debug_assert!(
            !piece.is_open() || !self.pieces.iter().any(Piece::is_open),
            "only one piece may be open at a time"
        );
        self.pieces.push_back(piece);
    }

    /// Close the newest piece at `end` if it is open. Returns true if a piece was closed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use buffer_ring::ring::*;
    /// let mut tracker = SpanTracker::<(f64, f64)>::new();
    /// assert!(!tracker.close_newest(4));
    /// tracker.push(Piece::open(PieceKind::Join, 2));
    /// assert!(tracker.close_newest(4));
    /// assert_eq!(tracker.newest().unwrap().end, PieceEnd::Closed(4));
    /// // already closed
    /// assert!(!tracker.close_newest(6));
    /// ```
    pub fn close_newest(&mut self, end: usize) -> bool {
        match self.pieces.back_mut() {
            Some(piece) if piece.is_open() => {
                piece.end = PieceEnd::Closed(end);
                true
            }
            _ => false,
        }
    }

    /// Remove all pieces.
    #[inline]
    pub fn clear(&mut self) {
        self.pieces.clear();
    }

    /// Iterate from the newest piece to the oldest.
    #[inline]
    pub fn iter_newest_to_oldest(&self) -> impl Iterator<Item = &Piece<P>> + '_ {
        self.pieces.iter().rev()
    }

    /// Returns true if there is a newest piece and it is open.
    #[inline]
    pub fn is_newest_open(&self) -> bool {
        self.pieces.back().is_some_and(Piece::is_open)
    }

    #[inline]
    pub fn newest(&self) -> Option<&Piece<P>> {
        self.pieces.back()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

impl<P> Default for SpanTracker<P> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
