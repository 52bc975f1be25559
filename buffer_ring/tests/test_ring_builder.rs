mod test_utils;

use buffer_ring::{
    assert_fuzzy_eq,
    core::{math::Vector2, traits::FuzzyEq},
    ring,
    ring::{
        CartesianIntersector, MarkerKind, OptionsError, PieceEnd, PieceKind, RingBuilder,
        RingBuilderOptions, RingObserver, RingOrientation, ShoelaceArea,
    },
};
use test_utils::{RecordingObserver, init_tracing, points_fuzzy_eq, v};

#[test]
fn excision_truncates_ring_and_appends_intersect() {
    init_tracing();
    let mut ring = ring![(0.0, 8.0)];
    let mut recorder = RecordingObserver::default();
    let mut builder = RingBuilder::new(&mut ring).with_observer(&mut recorder);

    builder.append_begin_join(v(0.0, 4.0));
    builder.append(v(4.0, 4.0));
    builder.append(v(4.0, 0.0));
    builder.append(v(2.0, 4.0));
    builder.append_begin_hooklet(v(2.0, 0.0));
    builder.append_end_hooklet(v(0.0, 0.0));
    assert_eq!(builder.ring().len(), 7);

    builder.append(v(6.0, 3.0));

    // edge 4->5 is crossed first scanning backwards: ring[0..=4], intersect, appended point
    assert_eq!(builder.excision_count(), 1);
    assert_eq!(builder.previous_point(), Some(v(6.0, 3.0)));

    let pieces: Vec<_> = builder.pieces().iter_newest_to_oldest().cloned().collect();
    assert_eq!(pieces.len(), 2);
    assert_eq!(pieces[0].kind, PieceKind::IntersectionStart);
    assert_eq!(pieces[0].begin, 5);
    assert_eq!(pieces[0].end, PieceEnd::Open);
    let split_off = pieces[0].split_off.as_deref().unwrap();
    assert!(points_fuzzy_eq(
        split_off,
        &[v(2.0, 1.0), v(2.0, 0.0), v(0.0, 0.0), v(2.0, 1.0)]
    ));
    assert_eq!(pieces[1].kind, PieceKind::Finished);
    assert_eq!(pieces[1].begin, 1);
    assert_eq!(pieces[1].end, PieceEnd::Closed(5));

    assert_eq!(builder.finish(), 1);

    assert_eq!(ring.len(), 7);
    assert!(points_fuzzy_eq(
        &ring,
        &[
            v(0.0, 8.0),
            v(0.0, 4.0),
            v(4.0, 4.0),
            v(4.0, 0.0),
            v(2.0, 4.0),
            v(2.0, 1.0),
            v(6.0, 3.0),
        ]
    ));

    assert_eq!(recorder.accepted.len(), 1);
    assert_eq!(recorder.accepted[0].ip_index, 5);
    assert!(recorder.accepted[0].intersect.fuzzy_eq(v(2.0, 1.0)));
    assert!(recorder.rejected.is_empty());
    assert_eq!(
        recorder.markers,
        vec![
            (MarkerKind::BeginJoin, 1),
            (MarkerKind::BeginHooklet, 5),
            (MarkerKind::EndHooklet, 6),
        ]
    );
    // end markers are never checked
    assert_eq!(recorder.checked.len(), 6);
}

#[test]
fn only_first_crossing_scanning_backward_is_excised() {
    let mut ring = ring![(0.0, 8.0)];
    let mut builder = RingBuilder::new(&mut ring);
    builder.append_begin_join(v(0.0, 4.0));
    builder.append(v(4.0, 4.0));
    builder.append(v(4.0, 0.0));
    builder.append(v(2.0, 4.0));
    builder.append_begin_hooklet(v(2.0, 0.0));
    builder.append_end_hooklet(v(0.0, 0.0));
    // also crosses edge 3->4 at (3.2, 1.6) and edge 2->3 at (4, 2)
    builder.append(v(6.0, 3.0));
    builder.finish();

    assert_eq!(ring.len(), 7);
    assert_eq!(ring[3], v(4.0, 0.0));
    assert_eq!(ring[4], v(2.0, 4.0));
    assert_fuzzy_eq!(ring[5], v(2.0, 1.0));
}

#[test]
fn intersection_start_piece_can_be_crossed_again() {
    let mut ring = ring![(0.0, 8.0)];
    let mut recorder = RecordingObserver::default();
    let mut builder = RingBuilder::new(&mut ring).with_observer(&mut recorder);
    builder.append_begin_join(v(0.0, 4.0));
    builder.append(v(4.0, 4.0));
    builder.append(v(4.0, 0.0));
    builder.append(v(2.0, 4.0));
    builder.append_begin_hooklet(v(2.0, 0.0));
    builder.append_end_hooklet(v(0.0, 0.0));
    builder.append(v(6.0, 3.0));
    assert_eq!(builder.excision_count(), 1);

    builder.append(v(6.0, 0.0));
    // closes the intersection start piece at index 8
    builder.append_begin_hooklet(v(4.0, -1.0));
    assert_eq!(
        builder.pieces().newest().map(|p| (p.kind, p.begin, p.end)),
        Some((PieceKind::IntersectionStart, 5, PieceEnd::Closed(8)))
    );
    builder.append_end_hooklet(v(4.0, 2.0));
    // crosses edge 6->7 (6, 3) -> (6, 0)
    builder.append(v(7.0, 1.0));

    assert_eq!(builder.excision_count(), 2);
    let newest = builder.pieces().newest().unwrap();
    assert_eq!(newest.kind, PieceKind::IntersectionStart);
    assert_eq!(newest.begin, 7);
    assert_eq!(builder.finish(), 2);

    assert_eq!(ring.len(), 9);
    assert_eq!(ring[6], v(6.0, 3.0));
    assert_fuzzy_eq!(ring[7], v(6.0, 4.0 / 3.0));
    assert_eq!(ring[8], v(7.0, 1.0));

    assert_eq!(recorder.accepted.len(), 2);
    assert_eq!(recorder.accepted[1].ip_index, 7);
    assert_eq!(recorder.accepted[1].split_off.len(), 5);
}

/// Builds a trace whose hooklet loop winds counter clockwise, crossing edge 3->4 at (3, 0).
fn trace_counter_clockwise_hooklet<O>(
    builder: &mut RingBuilder<'_, Vec<Vector2<f64>>, CartesianIntersector<f64>, ShoelaceArea, O>,
) where
    O: RingObserver<Vector2<f64>>,
{
    builder.append_begin_join(v(4.0, 4.0));
    builder.append(v(4.0, 0.0));
    builder.append_begin_hooklet(v(2.0, 0.0));
    builder.append_end_hooklet(v(2.0, -1.0));
    builder.append(v(6.0, 3.0));
}

#[test]
fn non_positive_area_leaves_ring_unchanged() {
    let mut ring = ring![(0.0, 0.0), (0.0, 4.0)];
    let mut recorder = RecordingObserver::default();
    let mut builder = RingBuilder::new(&mut ring).with_observer(&mut recorder);
    trace_counter_clockwise_hooklet(&mut builder);

    assert_eq!(builder.excision_count(), 0);
    assert!(builder.pieces().is_empty());
    builder.finish();

    assert_eq!(
        ring,
        ring![
            (0.0, 0.0),
            (0.0, 4.0),
            (4.0, 4.0),
            (4.0, 0.0),
            (2.0, 0.0),
            (2.0, -1.0),
            (6.0, 3.0)
        ]
    );
    assert_eq!(recorder.rejected.len(), 1);
    let (intersect, area) = recorder.rejected[0];
    assert_fuzzy_eq!(intersect, v(3.0, 0.0));
    assert_fuzzy_eq!(area, -0.5);
    assert!(recorder.accepted.is_empty());
}

#[test]
fn counter_clockwise_orientation_accepts_counter_clockwise_loop() {
    let mut ring = ring![(0.0, 0.0), (0.0, 4.0)];
    let options = RingBuilderOptions {
        orientation: RingOrientation::CounterClockwise,
        ..Default::default()
    };
    let mut builder = RingBuilder::with_options(&mut ring, &options).unwrap();
    trace_counter_clockwise_hooklet(&mut builder);
    assert_eq!(builder.finish(), 1);

    assert_eq!(ring.len(), 6);
    assert_fuzzy_eq!(ring[4], v(3.0, 0.0));
    assert_eq!(ring[5], v(6.0, 3.0));
}

#[test]
fn touching_previous_edge_discards_tracking() {
    let mut ring = ring![(0.0, 0.0), (0.0, 4.0)];
    let mut recorder = RecordingObserver::default();
    let mut builder = RingBuilder::new(&mut ring).with_observer(&mut recorder);
    builder.append_begin_join(v(4.0, 4.0));
    builder.append(v(4.0, 0.0));
    builder.append_begin_hooklet(v(2.0, 0.0));
    assert_eq!(builder.pieces().len(), 1);

    // the new edge starts where the last edge of the closed span ends, the loop it closes is empty
    builder.append(v(1.0, 3.0));
    assert!(builder.pieces().is_empty());
    assert_eq!(builder.excision_count(), 0);
    builder.finish();

    assert_eq!(ring.len(), 6);
    assert_eq!(recorder.rejected.len(), 1);
    assert_eq!(recorder.rejected[0].1, 0.0);
}

#[test]
fn append_touching_hooklet_begin_is_rejected() {
    let mut ring = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)];
    let mut recorder = RecordingObserver::default();
    let mut builder = RingBuilder::new(&mut ring).with_observer(&mut recorder);
    builder.append_begin_join(v(4.0, 4.0));
    builder.append(v(3.0, 4.0));
    builder.append(v(3.0, 1.0));
    builder.append_begin_hooklet(v(1.0, 1.0));
    assert_eq!(
        builder.pieces().newest().map(|p| (p.kind, p.begin, p.end)),
        Some((PieceKind::Join, 3, PieceEnd::Closed(6)))
    );

    // (1, 1) -> (4, 2) would cross (4, 0)-(4, 4) but that edge is not tracked, the first hit
    // scanning backward is the touch at (1, 1) on edge 5->6
    builder.append(v(4.0, 2.0));
    assert_eq!(builder.excision_count(), 0);
    assert!(builder.pieces().is_empty());
    builder.finish();

    assert_eq!(
        ring,
        ring![
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (4.0, 4.0),
            (3.0, 4.0),
            (3.0, 1.0),
            (1.0, 1.0),
            (4.0, 2.0)
        ]
    );
    assert_eq!(recorder.rejected.len(), 1);
    let (intersect, area) = recorder.rejected[0];
    assert_fuzzy_eq!(intersect, v(1.0, 1.0));
    assert_eq!(area, 0.0);
    assert!(recorder.accepted.is_empty());
}

#[test]
fn appends_without_crossing_only_grow_ring() {
    let mut ring = ring![(0.0, 0.0)];
    let mut builder = RingBuilder::new(&mut ring);
    builder.append_begin_join(v(1.0, 0.0));
    assert_eq!(builder.pieces().len(), 1);
    builder.append(v(2.0, 1.0));
    builder.append(v(2.5, 3.0));
    builder.append_begin_hooklet(v(2.5, 5.0));
    assert_eq!(builder.pieces().len(), 1);
    assert_eq!(builder.pieces().newest().unwrap().end, PieceEnd::Closed(4));
    builder.append_end_hooklet(v(2.0, 7.0));
    builder.append(v(1.0, 8.0));
    builder.append_end_join(v(0.0, 8.5));
    assert_eq!(builder.pieces().len(), 1);
    builder.finish();

    assert_eq!(
        ring,
        ring![
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 1.0),
            (2.5, 3.0),
            (2.5, 5.0),
            (2.0, 7.0),
            (1.0, 8.0),
            (0.0, 8.5)
        ]
    );
}

#[test]
fn begin_join_supersedes_open_piece() {
    let mut ring = ring![(0.0, 0.0)];
    let mut builder = RingBuilder::new(&mut ring);
    builder.append_begin_join(v(1.0, 0.0));
    builder.append(v(2.0, 0.0));
    builder.append_begin_join(v(3.0, 1.0));

    let pieces = builder.pieces();
    assert_eq!(pieces.len(), 1);
    let newest = pieces.newest().unwrap();
    assert_eq!(newest.kind, PieceKind::Join);
    assert_eq!(newest.begin, 3);
    assert!(newest.is_open());
}

#[test]
fn begin_join_keeps_closed_pieces() {
    let mut ring = ring![(0.0, 0.0)];
    let mut builder = RingBuilder::new(&mut ring);
    builder.append_begin_join(v(1.0, 0.0));
    builder.append(v(2.0, 1.0));
    builder.append_begin_hooklet(v(3.0, 3.0));
    builder.append_end_hooklet(v(3.5, 5.0));
    builder.append_begin_join(v(4.0, 8.0));

    let kinds: Vec<_> = builder
        .pieces()
        .iter_newest_to_oldest()
        .map(|p| (p.kind, p.begin, p.end))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (PieceKind::Join, 5, PieceEnd::Open),
            (PieceKind::Join, 1, PieceEnd::Closed(3)),
        ]
    );
}

#[test]
fn begin_hooklet_without_open_piece_does_nothing() {
    let mut ring = ring![(0.0, 0.0)];
    let mut builder = RingBuilder::new(&mut ring);
    builder.append_begin_hooklet(v(1.0, 1.0));
    builder.append_end_hooklet(v(2.0, 1.0));
    assert!(builder.pieces().is_empty());
    assert_eq!(builder.ring().len(), 3);
}

#[test]
fn end_markers_are_never_checked() {
    let mut ring = ring![(0.0, 8.0)];
    let mut recorder = RecordingObserver::default();
    let mut builder = RingBuilder::new(&mut ring).with_observer(&mut recorder);
    builder.append_begin_join(v(0.0, 4.0));
    builder.append(v(4.0, 4.0));
    builder.append(v(4.0, 0.0));
    builder.append(v(2.0, 4.0));
    builder.append_begin_hooklet(v(2.0, 0.0));
    builder.append_end_hooklet(v(0.0, 0.0));
    // same crossing edge as an excising append, but joins are trusted
    builder.append_end_join(v(6.0, 3.0));
    assert_eq!(builder.excision_count(), 0);
    assert_eq!(builder.pieces().len(), 1);
    builder.finish();

    assert_eq!(ring.len(), 8);
    assert!(recorder.accepted.is_empty());
    assert!(recorder.rejected.is_empty());
}

#[test]
fn invalid_options_are_rejected() {
    let mut ring: Vec<Vector2<f64>> = Vec::new();
    let options = RingBuilderOptions {
        pos_equal_eps: -1e-5,
        ..Default::default()
    };
    let result = RingBuilder::with_options(&mut ring, &options);
    assert_eq!(result.err(), Some(OptionsError::NonPositiveEpsilon(-1e-5)));
}

#[test]
fn works_with_f32_array_points() {
    let mut ring: Vec<[f32; 2]> = vec![[0.0, 8.0]];
    let mut builder = RingBuilder::new(&mut ring);
    builder.append_begin_join([0.0, 4.0]);
    builder.append([4.0, 4.0]);
    builder.append([4.0, 0.0]);
    builder.append([2.0, 4.0]);
    builder.append_begin_hooklet([2.0, 0.0]);
    builder.append_end_hooklet([0.0, 0.0]);
    builder.append([6.0, 3.0]);
    assert_eq!(builder.finish(), 1);

    assert_eq!(ring.len(), 7);
    assert!(ring[5][0].fuzzy_eq(2.0));
    assert!(ring[5][1].fuzzy_eq(1.0));
}
