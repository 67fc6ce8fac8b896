// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use flutter_preview::preview::{
    url, ComponentRegistry, Endpoints, LoadSequencer, PreviewTheme, SurfaceSignal, Timer, Timings,
};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn url_resolution_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("url_resolution");
    let registry = ComponentRegistry::builtin();
    let endpoints = Endpoints::default();

    group.bench_function("resolve_external", |b| {
        b.iter(|| {
            black_box(url::resolve(
                black_box(&registry),
                black_box("alert-dialog"),
                PreviewTheme::Light,
                &endpoints,
            ))
        });
    });

    group.bench_function("resolve_unknown", |b| {
        b.iter(|| {
            black_box(url::resolve(
                &registry,
                black_box("date-picker"),
                PreviewTheme::Dark,
                &endpoints,
            ))
        });
    });

    group.finish();
}

fn sequencer_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_sequencer");

    group.bench_function("full_cycle", |b| {
        let t0 = Instant::now();
        b.iter(|| {
            let mut sequencer = LoadSequencer::new(Timings::default());
            let _ = sequencer.begin(t0);
            let cycle = sequencer.cycle();
            let _ = sequencer.signal(cycle, SurfaceSignal::Load, t0 + Duration::from_millis(200));
            let _ = sequencer.timer_elapsed(cycle, Timer::MinDisplay, t0 + Duration::from_millis(800));
            let _ =
                sequencer.timer_elapsed(cycle, Timer::FadeComplete, t0 + Duration::from_millis(1100));
            black_box(sequencer.phase())
        });
    });

    group.finish();
}

criterion_group!(benches, url_resolution_benchmark, sequencer_benchmark);
criterion_main!(benches);
