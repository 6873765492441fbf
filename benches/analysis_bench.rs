//! Performance benchmarks for fingerprint analysis

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use songprint::{analyze, AnalysisConfig, SampleBuffer};

fn bench_analyze(c: &mut Criterion) {
    // 30 seconds of a 440 Hz tone at 44.1 kHz
    let samples: Vec<f32> = (0..44100 * 30)
        .map(|i| (i as f32 * 440.0 * 2.0 * std::f32::consts::PI / 44100.0).sin() * 0.5)
        .collect();
    let buffer = SampleBuffer::new(samples, 44100).unwrap();

    let config = AnalysisConfig::default();

    c.bench_function("analyze_30s", |b| {
        b.iter(|| {
            let _ = analyze(black_box(&buffer), black_box(config));
        });
    });
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
