#![allow(dead_code)]

use buffer_ring::{
    core::math::Vector2,
    ring::{MarkerKind, RingObserver},
};

/// Install a tracing subscriber honoring `RUST_LOG`, output is captured by the test harness.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Accepted excision as seen by [RecordingObserver].
#[derive(Debug, Clone)]
pub struct AcceptedExcision {
    pub intersect: Vector2<f64>,
    pub ip_index: usize,
    pub split_off: Vec<Vector2<f64>>,
}

/// Observer that records every event for later assertions.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub checked: Vec<Vector2<f64>>,
    pub markers: Vec<(MarkerKind, usize)>,
    pub stale: Vec<(usize, usize, usize)>,
    pub rejected: Vec<(Vector2<f64>, f64)>,
    pub accepted: Vec<AcceptedExcision>,
}

impl RingObserver<Vector2<f64>> for RecordingObserver {
    fn point_checked(&mut self, point: &Vector2<f64>) {
        self.checked.push(*point);
    }

    fn marker_appended(&mut self, kind: MarkerKind, index: usize, _point: &Vector2<f64>) {
        self.markers.push((kind, index));
    }

    fn stale_piece_skipped(&mut self, begin: usize, end: usize, ring_len: usize) {
        self.stale.push((begin, end, ring_len));
    }

    fn candidate_rejected(&mut self, intersect: &Vector2<f64>, _split_off: &[Vector2<f64>], area: f64) {
        self.rejected.push((*intersect, area));
    }

    fn excision_accepted(&mut self, intersect: &Vector2<f64>, ip_index: usize, split_off: &[Vector2<f64>]) {
        self.accepted.push(AcceptedExcision {
            intersect: *intersect,
            ip_index,
            split_off: split_off.to_vec(),
        });
    }
}

/// Fuzzy compare two point sequences.
pub fn points_fuzzy_eq(a: &[Vector2<f64>], b: &[Vector2<f64>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(p, q)| p.fuzzy_eq(*q))
}

#[inline]
pub fn v(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}
