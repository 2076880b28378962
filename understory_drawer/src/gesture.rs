// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge-gesture bookkeeping: pointer tracking along one axis and the gesture phase.
//!
//! ## Usage
//!
//! 1) When a gesture engages, start from a freshly reset [`PointerTracker`].
//! 2) On each drag step, call [`PointerTracker::sample`] with the pointer
//!    position and the axis of the engaged edge. The first sample only primes
//!    the tracker; later samples return the delta to forward to the drawer.
//! 3) On release, call [`PointerTracker::reset`].
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_drawer::{Axis, PointerTracker};
//!
//! let mut tracker = PointerTracker::default();
//! assert!(tracker.sample(Point::new(10.0, 300.0), Some(Axis::X)).is_none());
//!
//! let sample = tracker.sample(Point::new(14.0, 301.0), Some(Axis::X)).unwrap();
//! assert_eq!(sample.delta, Vec2::new(4.0, 0.0));
//! ```

use kurbo::{Point, Vec2};

use crate::side::Axis;

/// Minimum mismatch between the tracked delta and the raw pointer movement
/// that promotes an engaged gesture to a real drag.
pub const DRAG_DEADZONE: f64 = 0.1;

/// Phase of the controller's edge gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The pointer went down in an edge zone; drag steps are forwarded.
    Engaged,
    /// Pointer movement exceeded the deadzone; external show/hide requests are refused.
    Dragging,
}

impl GesturePhase {
    /// Returns `true` unless the phase is [`GesturePhase::Idle`].
    #[must_use]
    pub fn can_drag(self) -> bool {
        self != Self::Idle
    }

    /// Returns `true` for [`GesturePhase::Dragging`].
    #[must_use]
    pub fn is_dragging(self) -> bool {
        self == Self::Dragging
    }
}

/// One drag step reported by [`PointerTracker::sample`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    /// Delta to forward to the drawer. Only the tracked axis changes between samples.
    pub delta: Vec2,
    /// `true` if the step's movement exceeded [`DRAG_DEADZONE`].
    pub beyond_deadzone: bool,
}

/// Tracks pointer positions for an edge drag.
///
/// A zero `last_pos` means "not primed yet": the next sample records the
/// position without producing a delta.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTracker {
    /// Pointer position at the previous sample.
    pub last_pos: Point,
    /// Pointer position at the latest sample.
    pub current_pos: Point,
    /// Accumulated per-axis delta forwarded to the drawer.
    pub delta: Vec2,
}

impl PointerTracker {
    /// Records a pointer position and returns the drag step, if primed.
    ///
    /// Only the `axis` component of [`Self::delta`] is updated; with `None`
    /// the delta is left unchanged. The deadzone test compares the absolute
    /// tracked delta against the raw pointer movement since the last sample.
    pub fn sample(&mut self, pos: Point, axis: Option<Axis>) -> Option<DragSample> {
        self.current_pos = pos;
        let movement = pos - self.last_pos;
        if let Some(axis) = axis {
            self.delta = axis.with_vec(self.delta, axis.of_vec(movement));
        }

        let sample = (self.last_pos != Point::ORIGIN).then(|| {
            let magnitude = Vec2::new(self.delta.x.abs(), self.delta.y.abs());
            DragSample {
                delta: self.delta,
                beyond_deadzone: (magnitude - movement).hypot() > DRAG_DEADZONE,
            }
        });
        self.last_pos = pos;
        sample
    }

    /// Clears all tracked positions.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
