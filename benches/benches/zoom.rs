// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use loupe_gesture::{FrameInput, TouchSample};
use loupe_zoom::{EngineBuilder, ProfileLibrary, ZoomEngine};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }
}

fn engine() -> ZoomEngine {
    EngineBuilder::new()
        .viewport(Rect::new(0.0, 0.0, 1280.0, 720.0))
        .content_size(Size::new(4096.0, 3072.0))
        .activate(&ProfileLibrary::new())
        .expect("default config activates")
}

fn wheel_frames(n: usize, seed: u64) -> Vec<FrameInput> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|i| {
            let anchor = Point::new(rng.next_unit() * 1280.0, rng.next_unit() * 720.0);
            let delta = rng.next_unit() * 6.0 - 3.0;
            FrameInput::at(i as f64 / 60.0).with_scroll(anchor, delta)
        })
        .collect()
}

fn pinch_frames(n: usize) -> Vec<FrameInput> {
    (0..n)
        .map(|i| {
            // Fingers breathe in and out around the viewport center.
            let phase = i as f64 * 0.1;
            let spread = 200.0 + 80.0 * phase.sin();
            let previous = 200.0 + 80.0 * (phase - 0.1).sin();
            let center = Point::new(640.0, 360.0);
            FrameInput::at(i as f64 / 60.0)
                .with_touch(TouchSample::moved(
                    Point::new(center.x - previous * 0.5, center.y),
                    Point::new(center.x - spread * 0.5, center.y),
                ))
                .with_touch(TouchSample::moved(
                    Point::new(center.x + previous * 0.5, center.y),
                    Point::new(center.x + spread * 0.5, center.y),
                ))
        })
        .collect()
}

fn bench_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("loupe_zoom");
    group.sample_size(50);

    for &n in &[60_usize, 600] {
        let frames = wheel_frames(n, 0x1005_E000_0000_0001);
        group.bench_function(format!("tick_wheel(frames={n})"), |b| {
            b.iter_batched(
                engine,
                |mut engine| {
                    for frame in &frames {
                        black_box(engine.tick(frame));
                    }
                    engine
                },
                BatchSize::SmallInput,
            );
        });

        let frames = pinch_frames(n);
        group.bench_function(format!("tick_pinch(frames={n})"), |b| {
            b.iter_batched(
                engine,
                |mut engine| {
                    for frame in &frames {
                        black_box(engine.tick(frame));
                    }
                    engine
                },
                BatchSize::SmallInput,
            );
        });
    }

    let idle = FrameInput::at(0.0);
    group.bench_function("tick_idle", |b| {
        let mut engine = engine();
        b.iter(|| black_box(engine.tick(black_box(&idle))));
    });

    group.finish();
}

criterion_group!(benches, bench_zoom);
criterion_main!(benches);
