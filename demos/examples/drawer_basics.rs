// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer basics.
//!
//! Drive a left and a bottom drawer with scripted pointer input and print the
//! positions a renderer would apply each frame.
//!
//! Run:
//! - `cargo run -p understory_demos --example drawer_basics`
//! - `RUST_LOG=understory_drawer=debug cargo run -p understory_demos --example drawer_basics`

use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;
use understory_demos::ScriptedPointer;
use understory_drawer::{
    ControllerConfig, Drawer, DrawerConfig, DrawerController, DrawerSide, EdgeZones,
};

const FRAME: f64 = 1.0 / 60.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let screen = Size::new(1280.0, 720.0);
    let left = DrawerConfig::new(DrawerSide::Left, Point::new(-320.0, 0.0), Point::ORIGIN)
        .with_thresholds(0.4, 0.3)
        .with_speed(12.0);
    let bottom = DrawerConfig::new(DrawerSide::Bottom, Point::new(0.0, -240.0), Point::ORIGIN)
        .with_thresholds(0.5, 0.5)
        .with_speed(8.0);
    let mut controller = DrawerController::new(
        [
            Drawer::new(left, Size::new(320.0, 720.0)),
            Drawer::new(bottom, Size::new(1280.0, 240.0)),
        ],
        ControllerConfig {
            zones: EdgeZones::new(0.04, 0.06),
        },
    );

    // Pull the left drawer open, tap to dismiss it, then open the bottom one.
    let script = ScriptedPointer::new(screen, Point::new(640.0, 360.0))
        .press(Point::new(12.0, 360.0))
        .drag_to(Point::new(150.0, 360.0), 6)
        .release()
        .wait(20)
        .press(Point::new(900.0, 360.0))
        .release()
        .wait(20)
        .press(Point::new(640.0, 10.0))
        .drag_to(Point::new(640.0, 60.0), 4)
        .release()
        .wait(30);

    for (frame, input) in script.frames().iter().enumerate() {
        controller.tick(FRAME, input);
        let positions: Vec<String> = controller
            .drawers()
            .iter()
            .map(|d| {
                let p = d.position();
                format!(
                    "{:?}=({:7.1}, {:7.1}){}",
                    d.side(),
                    p.x,
                    p.y,
                    if d.is_visible() { " open" } else { "" }
                )
            })
            .collect();
        println!(
            "frame {frame:3} {:?} {}",
            controller.state(),
            positions.join("  ")
        );
    }

    // Buttons can drive drawers by index, too.
    controller.toggle_drawer(0);
    println!("toggle left: state {:?}", controller.state());
}
