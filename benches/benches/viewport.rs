// Copyright 2025 the Atelier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use builder_canvas::{CanvasController, CanvasEvent, WheelDelta, WheelInput};
use builder_view::{ViewportTransform, ZoomDirection};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use ui_events::keyboard::Modifiers;
use ui_events::pointer::PointerButton;

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder_view");

    group.bench_function("zoom_about_point", |b| {
        let mut view = ViewportTransform::new();
        let mut sign = 1.0;
        b.iter(|| {
            view.zoom_about_point(black_box(Point::new(320.0, 240.0)), 0.05 * sign);
            sign = -sign;
            black_box(view.state())
        })
    });

    group.bench_function("zoom_step_round_trip", |b| {
        let mut view = ViewportTransform::new();
        b.iter(|| {
            view.zoom_step(ZoomDirection::In);
            view.zoom_step(ZoomDirection::Out);
            black_box(view.scale())
        })
    });

    group.bench_function("screen_to_content_rect", |b| {
        let mut view = ViewportTransform::new();
        view.pan(40.0, -25.0);
        view.zoom_about_point(Point::new(100.0, 100.0), 0.4);
        let rect = Rect::new(0.0, 0.0, 800.0, 600.0);
        b.iter(|| black_box(view.screen_to_content_rect(black_box(rect))))
    });

    group.finish();
}

fn drag_events(pointer_id: u64, moves: usize) -> Vec<CanvasEvent> {
    let mut events = Vec::with_capacity(moves + 2);
    events.push(CanvasEvent::PointerDown {
        pointer_id,
        button: PointerButton::Primary,
        position: Point::ZERO,
    });
    for i in 0..moves {
        let t = i as f64;
        events.push(CanvasEvent::PointerMove {
            pointer_id,
            position: Point::new(t, t * 0.5),
        });
    }
    events.push(CanvasEvent::PointerUp { pointer_id });
    events
}

fn bench_canvas(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder_canvas");

    for moves in [16_usize, 256] {
        let events = drag_events(1, moves);
        group.bench_function(BenchmarkId::new("drag", moves), |b| {
            let mut canvas = CanvasController::new();
            b.iter(|| {
                for event in &events {
                    canvas.handle(event);
                }
                black_box(canvas.state())
            })
        });
    }

    group.bench_function("ctrl_wheel", |b| {
        let mut canvas = CanvasController::new();
        let mut sign = 1.0;
        b.iter(|| {
            let event = CanvasEvent::Wheel(WheelInput::new(
                WheelDelta::Pixels(Vec2::new(0.0, 120.0 * sign)),
                Point::new(400.0, 300.0),
                Modifiers::CONTROL,
            ));
            sign = -sign;
            canvas.handle(black_box(&event));
            black_box(canvas.state())
        })
    });

    group.bench_function("css_transform", |b| {
        let mut canvas = CanvasController::new();
        canvas.handle(&CanvasEvent::ZoomIn);
        b.iter(|| black_box(canvas.css_transform()))
    });

    group.finish();
}

criterion_group!(benches, bench_viewport, bench_canvas);
criterion_main!(benches);
