//! Feeds a hand traced buffer ring through the builder and prints what happens.
//!
//! Run with `RUST_LOG=buffer_ring=trace` to also see the builder's own log output.

use buffer_ring::{
    core::math::Vector2,
    ring::{MarkerKind, RingBuilder, RingObserver},
};

#[derive(Debug, Default)]
struct PrintObserver;

impl RingObserver<Vector2<f64>> for PrintObserver {
    fn marker_appended(&mut self, kind: MarkerKind, index: usize, point: &Vector2<f64>) {
        println!("{kind:?} at [{index}] ({}, {})", point.x, point.y);
    }

    fn candidate_rejected(&mut self, intersect: &Vector2<f64>, split_off: &[Vector2<f64>], area: f64) {
        println!(
            "kept loop of {} points at ({}, {}), area {area}",
            split_off.len(),
            intersect.x,
            intersect.y
        );
    }

    fn excision_accepted(&mut self, intersect: &Vector2<f64>, ip_index: usize, split_off: &[Vector2<f64>]) {
        println!(
            "cut loop of {} points, intersect ({}, {}) now at [{ip_index}]",
            split_off.len(),
            intersect.x,
            intersect.y
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut ring = vec![Vector2::new(0.0, 8.0)];
    let mut builder = RingBuilder::new(&mut ring).with_observer(PrintObserver);

    // offset side of a notch: join, trace down and back up, hooklet around the notch corner
    builder.append_begin_join(Vector2::new(0.0, 4.0));
    builder.append(Vector2::new(4.0, 4.0));
    builder.append(Vector2::new(4.0, 0.0));
    builder.append(Vector2::new(2.0, 4.0));
    builder.append_begin_hooklet(Vector2::new(2.0, 0.0));
    builder.append_end_hooklet(Vector2::new(0.0, 0.0));
    // continuing the trace crosses back over the hooklet
    builder.append(Vector2::new(6.0, 3.0));
    builder.append(Vector2::new(6.0, 0.0));
    builder.append_begin_hooklet(Vector2::new(4.0, -1.0));
    builder.append_end_hooklet(Vector2::new(4.0, 2.0));
    builder.append(Vector2::new(7.0, 1.0));

    let excisions = builder.finish();
    println!("{excisions} loops removed, ring:");
    for (i, p) in ring.iter().enumerate() {
        println!("  [{i}] ({:.3}, {:.3})", p.x, p.y);
    }
}
