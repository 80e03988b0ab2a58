// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use vantage_view2d::{ContentBounds, Viewport, ViewportConfig, WheelZoom, ZoomDirection};

fn viewport(wheel_zoom: WheelZoom) -> Viewport {
    let mut viewport = Viewport::new(&ViewportConfig {
        wheel_zoom,
        ..ViewportConfig::image()
    });
    viewport.set_container(Size::new(1_280.0, 720.0));
    viewport.set_content(ContentBounds::new(4_000.0, 3_000.0));
    viewport
}

fn bench_drag(c: &mut Criterion) {
    let mut viewport = viewport(WheelZoom::Centered);
    c.bench_function("viewport/drag_1000_moves", |b| {
        b.iter(|| {
            for i in 0..1_000 {
                let d = if i % 2 == 0 { 7.5 } else { -7.0 };
                viewport.apply_delta(black_box(Vec2::new(d, -d)));
            }
            black_box(viewport.state());
        });
    });
}

fn bench_wheel(c: &mut Criterion) {
    for (name, mode) in [
        ("viewport/wheel_biased", WheelZoom::Biased { factor: 0.1 }),
        ("viewport/wheel_anchored", WheelZoom::Anchored),
    ] {
        let mut viewport = viewport(mode);
        c.bench_function(name, |b| {
            b.iter(|| {
                for i in 0..20 {
                    let direction = if i < 10 { ZoomDirection::In } else { ZoomDirection::Out };
                    viewport.zoom_at(direction, black_box(Point::new(900.0, 200.0)));
                }
                black_box(viewport.state());
            });
        });
    }
}

criterion_group!(benches, bench_drag, bench_wheel);
criterion_main!(benches);
