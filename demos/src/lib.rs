// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory demos.
//!
//! Demos stand in for a real windowing host: they script pointer input as a
//! sequence of per-frame [`InputSnapshot`]s and print what a renderer would
//! apply.

use kurbo::{Point, Size};
use understory_drawer::InputSnapshot;

/// Builds per-frame pointer input for a scripted gesture.
#[derive(Clone, Debug)]
pub struct ScriptedPointer {
    screen: Size,
    pointer: Point,
    frames: Vec<InputSnapshot>,
}

impl ScriptedPointer {
    /// Starts a script with the pointer resting at `pointer`.
    pub fn new(screen: Size, pointer: Point) -> Self {
        Self {
            screen,
            pointer,
            frames: Vec::new(),
        }
    }

    /// Presses the pointer at `at`.
    pub fn press(mut self, at: Point) -> Self {
        self.pointer = at;
        self.frames.push(InputSnapshot::press(at, self.screen));
        self
    }

    /// Moves the held pointer to `to` over `steps` frames.
    pub fn drag_to(mut self, to: Point, steps: u32) -> Self {
        let from = self.pointer;
        for step in 1..=steps {
            let t = f64::from(step) / f64::from(steps);
            self.frames.push(InputSnapshot::hold(from.lerp(to, t), self.screen));
        }
        self.pointer = to;
        self
    }

    /// Releases the pointer where it is.
    pub fn release(mut self) -> Self {
        self.frames.push(InputSnapshot::release(self.pointer, self.screen));
        self
    }

    /// Leaves the pointer untouched for `frames` frames.
    pub fn wait(mut self, frames: u32) -> Self {
        for _ in 0..frames {
            self.frames.push(InputSnapshot::idle(self.pointer, self.screen));
        }
        self
    }

    /// Returns the scripted frames.
    pub fn frames(&self) -> &[InputSnapshot] {
        &self.frames
    }
}
