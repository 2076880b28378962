// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_drawer::{
    ControllerConfig, Drawer, DrawerConfig, DrawerController, DrawerSide, InputSnapshot,
    InteractionState,
};

const SCREEN: Size = Size::new(1920.0, 1080.0);
const FRAME: f64 = 1.0 / 120.0;

fn controller(len: usize) -> DrawerController {
    let drawers = (0..len).map(|i| {
        let side = DrawerSide::EDGES[i % DrawerSide::EDGES.len()];
        let (hide, size) = match side {
            DrawerSide::Left => (Point::new(-400.0, 0.0), Size::new(400.0, 1080.0)),
            DrawerSide::Right => (Point::new(400.0, 0.0), Size::new(400.0, 1080.0)),
            DrawerSide::Top => (Point::new(0.0, 300.0), Size::new(1920.0, 300.0)),
            _ => (Point::new(0.0, -300.0), Size::new(1920.0, 300.0)),
        };
        Drawer::new(DrawerConfig::new(side, hide, Point::ORIGIN), size)
    });
    DrawerController::new(drawers, ControllerConfig::default())
}

fn bench_tick_animating(c: &mut Criterion) {
    let mut group = c.benchmark_group("drawer/tick_animating");
    let idle = InputSnapshot::idle(Point::new(960.0, 540.0), SCREEN);

    for len in [4usize, 16, 64] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut controller = controller(len);
            b.iter(|| {
                // Keep one drawer in flight so every tick does animation work.
                if controller.state() != InteractionState::Animating {
                    controller.toggle_drawer(len - 1);
                }
                controller.tick(FRAME, black_box(&idle));
            });
        });
    }
    group.finish();
}

fn bench_drag_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("drawer/drag_gesture");
    let press = InputSnapshot::press(Point::new(10.0, 540.0), SCREEN);
    let release = InputSnapshot::release(Point::new(160.0, 540.0), SCREEN);
    let frames: Vec<InputSnapshot> = core::iter::once(press)
        .chain((1..=30).map(|i| {
            InputSnapshot::hold(Point::new(10.0 + f64::from(i) * 5.0, 540.0), SCREEN)
        }))
        .chain(core::iter::once(release))
        .collect();

    for len in [4usize, 64] {
        group.throughput(Throughput::Elements(frames.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| {
                let mut controller = controller(len);
                for input in &frames {
                    controller.tick(FRAME, input);
                }
                black_box(controller.any_visible());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tick_animating, bench_drag_gesture);
criterion_main!(benches);
