// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use loupe_view::{ClampPolicy, FrameGeometry, clamp_pan};

fn bench_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("loupe_view");

    let viewport = Size::new(1280.0, 720.0);
    for &(label, content) in &[
        ("undersized", Size::new(640.0, 360.0)),
        ("oversized", Size::new(4096.0, 4096.0)),
        ("mixed", Size::new(640.0, 2048.0)),
    ] {
        for policy in [ClampPolicy::CenterWhenSmaller, ClampPolicy::FreeWithinSlack] {
            group.bench_function(format!("clamp_pan({label},{policy:?})"), |b| {
                b.iter(|| {
                    clamp_pan(
                        black_box(Vec2::new(900.0, -450.0)),
                        black_box(viewport),
                        black_box(content),
                        policy,
                    )
                });
            });
        }
    }

    let geometry = FrameGeometry::new(
        Rect::new(100.0, 50.0, 1380.0, 770.0),
        Size::new(4096.0, 4096.0),
    );
    group.bench_function("screen_to_content_round_trip", |b| {
        b.iter(|| {
            let local = geometry.screen_to_content_local(
                black_box(Point::new(640.0, 480.0)),
                black_box(2.5),
                black_box(Vec2::new(-120.0, 75.0)),
            );
            geometry.content_local_to_screen(local, 2.5, Vec2::new(-120.0, 75.0))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_clamp);
criterion_main!(benches);
