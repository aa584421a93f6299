//! Benchmarks for the per-frame analysis pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hand_gesture::{
    analysis::HandAnalyzer,
    config::Config,
    gesture::GestureClassifier,
    landmark::{Hand, Landmark},
    orientation::estimate_orientation,
    pose_estimation::PoseEstimator,
    projection::estimate_hand_depth,
};

/// Jittered hand around frame center, simulating detector noise
fn noisy_hand() -> Hand {
    let landmarks: Vec<Landmark> = (0..21u32)
        .map(|i| {
            let t = f64::from(i) * 0.3;
            Landmark::with_z(
                0.5 + 0.1 * t.sin() + 0.005 * rand::random::<f64>(),
                0.5 + 0.1 * t.cos() + 0.005 * rand::random::<f64>(),
                0.01 * rand::random::<f64>(),
            )
        })
        .collect();
    Hand::from_slice(&landmarks).expect("21 landmarks")
}

fn benchmark_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let hand = noisy_hand();
    let classifier = GestureClassifier::default();
    let estimator = PoseEstimator::default();

    group.bench_function("classify", |b| {
        b.iter(|| {
            let hand = black_box(&hand);
            black_box((classifier.is_fist(hand), classifier.is_peace(hand), classifier.is_thumbs_up(hand)))
        });
    });
    group.bench_function("orientation", |b| b.iter(|| black_box(estimate_orientation(black_box(&hand)))));
    group.bench_function("rotation", |b| b.iter(|| black_box(estimator.estimate_rotation(black_box(&hand)))));
    group.bench_function("depth", |b| b.iter(|| black_box(estimate_hand_depth(black_box(&hand)))));

    group.finish();
}

fn benchmark_frame(c: &mut Criterion) {
    let analyzer = HandAnalyzer::new(&Config::default(), 1280.0, 720.0).expect("valid canvas");
    let hands = [noisy_hand(), noisy_hand()];

    c.bench_function("analyze_frame_two_hands", |b| {
        b.iter(|| black_box(analyzer.analyze_frame(black_box(&hands))));
    });
}

criterion_group!(benches, benchmark_stages, benchmark_frame);
criterion_main!(benches);
