// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tick input snapshot and edge hit-zone classification.
//!
//! Pointer positions are in screen coordinates with the origin at the
//! bottom-left corner, so `y` grows upward: the top hit zone lies near
//! `screen.height` and the bottom zone near `0`.

use kurbo::{Point, Size};

use crate::DrawerSide;

/// Pointer and screen state for a single tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    /// The primary pointer went down during this tick.
    pub pointer_down: bool,
    /// The primary pointer is held down during this tick.
    pub pointer_held: bool,
    /// The primary pointer was released during this tick.
    pub pointer_up: bool,
    /// Current pointer position in screen coordinates.
    pub pointer: Point,
    /// Screen extent.
    pub screen: Size,
}

impl InputSnapshot {
    /// A snapshot with no pointer activity.
    #[must_use]
    pub fn idle(pointer: Point, screen: Size) -> Self {
        Self {
            pointer,
            screen,
            ..Self::default()
        }
    }

    /// A snapshot where the pointer goes down (and is held) at `pointer`.
    #[must_use]
    pub fn press(pointer: Point, screen: Size) -> Self {
        Self {
            pointer_down: true,
            pointer_held: true,
            ..Self::idle(pointer, screen)
        }
    }

    /// A snapshot where the pointer stays down at `pointer`.
    #[must_use]
    pub fn hold(pointer: Point, screen: Size) -> Self {
        Self {
            pointer_held: true,
            ..Self::idle(pointer, screen)
        }
    }

    /// A snapshot where the pointer is released at `pointer`.
    #[must_use]
    pub fn release(pointer: Point, screen: Size) -> Self {
        Self {
            pointer_up: true,
            ..Self::idle(pointer, screen)
        }
    }
}

/// Width of the edge hit-zones as fractions of the screen extent.
///
/// `x` applies to the left and right zones (fraction of the screen width) and
/// `y` to the top and bottom zones (fraction of the screen height). Both are
/// expected in `[0, 0.5]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeZones {
    /// Horizontal zone fraction.
    pub x: f64,
    /// Vertical zone fraction.
    pub y: f64,
}

impl Default for EdgeZones {
    fn default() -> Self {
        Self { x: 0.05, y: 0.05 }
    }
}

impl EdgeZones {
    /// Creates hit-zones from horizontal and vertical fractions.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        debug_assert!(
            (0.0..=0.5).contains(&x) && (0.0..=0.5).contains(&y),
            "edge zone fractions ({x}, {y}) outside [0, 0.5]"
        );
        Self { x, y }
    }
}

/// Classifies a pointer position into an edge hit-zone.
///
/// Zones are tested in priority order: left, right, top, bottom. A point in
/// a corner therefore resolves to the horizontal edge. Returns
/// [`DrawerSide::Neutral`] when the point lies in none of them.
#[must_use]
pub fn classify_edge(point: Point, screen: Size, zones: EdgeZones) -> DrawerSide {
    let zone_x = zones.x * screen.width;
    let zone_y = zones.y * screen.height;
    if point.x < zone_x {
        DrawerSide::Left
    } else if point.x > screen.width - zone_x {
        DrawerSide::Right
    } else if point.y > screen.height - zone_y {
        DrawerSide::Top
    } else if point.y < zone_y {
        DrawerSide::Bottom
    } else {
        DrawerSide::Neutral
    }
}
