// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drawer --heading-base-level=0

//! Understory Drawer: edge-anchored drawer primitives for UI.
//!
//! A drawer is a panel anchored to one screen edge that slides between a
//! hidden and a shown resting position. This crate models the state behind
//! it, without owning any widgets or rendering:
//!
//! - [`Drawer`]: one panel's live position, visibility and show/hide animation.
//!   Drags are clamped between the two anchors, and on release the drawer snaps
//!   to the shown or hidden anchor depending on how far it travelled relative to
//!   a threshold fraction of the panel extent.
//! - [`DrawerController`]: a set of drawers driven by per-tick pointer input.
//!   It classifies pointer-downs into edge hit-zones, forwards drag deltas to
//!   the engaged drawer, dismisses an open drawer on tap, and keeps at most one
//!   drawer open when drawers are shown by index.
//! - [`DrawerSide`] and [`SideRule`]: the per-edge axis and sign convention
//!   shared by clamping and threshold checks.
//! - [`VisibilityObserver`]: the notification sink a drawer reports to when an
//!   animation settles.
//!
//! Hosts are expected to:
//!
//! - Call [`DrawerController::tick`] once per frame with the elapsed time and an
//!   [`InputSnapshot`] of the primary pointer.
//! - Read [`Drawer::position`] for each drawer and apply it to the panel.
//! - Report panel size changes through [`DrawerController::set_drawer_size`].
//! - Wire buttons or shortcuts to [`DrawerController::toggle_drawer`],
//!   [`DrawerController::show_drawer`] and [`DrawerController::hide_drawer`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_drawer::{
//!     ControllerConfig, Drawer, DrawerConfig, DrawerController, DrawerSide, EdgeZones,
//!     InputSnapshot,
//! };
//!
//! let screen = Size::new(1000.0, 600.0);
//! let left = DrawerConfig::new(DrawerSide::Left, Point::new(-200.0, 0.0), Point::ORIGIN)
//!     .with_thresholds(0.5, 0.5)
//!     .with_speed(20.0);
//! let mut controller = DrawerController::new(
//!     [Drawer::new(left, Size::new(200.0, 600.0))],
//!     ControllerConfig { zones: EdgeZones::new(0.05, 0.05) },
//! );
//!
//! // Press in the left hit-zone and drag 150 units to the right.
//! controller.tick(0.016, &InputSnapshot::press(Point::new(10.0, 300.0), screen));
//! controller.tick(0.016, &InputSnapshot::hold(Point::new(160.0, 300.0), screen));
//! assert_eq!(controller.drawer(0).unwrap().position(), Point::new(-50.0, 0.0));
//!
//! // Release: 150 units is past the 100 unit threshold, so the drawer opens.
//! controller.tick(0.016, &InputSnapshot::release(Point::new(160.0, 300.0), screen));
//! let idle = InputSnapshot::idle(Point::new(160.0, 300.0), screen);
//! while controller.drawer(0).unwrap().is_animating() {
//!     controller.tick(0.016, &idle);
//! }
//! assert!(controller.any_visible());
//! assert_eq!(controller.drawer(0).unwrap().position(), Point::ORIGIN);
//! ```
//!
//! ## Coordinates
//!
//! Anchored positions are in whatever space the host applies them in. Pointer
//! positions are screen coordinates with a bottom-left origin, so the top
//! hit-zone lies near `screen.height`.
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with the standard library.
//! - `libm`: build Kurbo's float functions on `libm` for `no_std` targets.
//! - `tracing`: emit `tracing` events for gesture and animation transitions.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

mod animation;
mod controller;
mod drawer;
mod gesture;
mod input;
mod observer;
mod side;

pub use animation::{Animation, SPEED_SCALE, Step};
pub use controller::{ControllerConfig, DrawerController, InteractionState};
pub use drawer::{Drawer, DrawerConfig};
pub use gesture::{DRAG_DEADZONE, DragSample, GesturePhase, PointerTracker};
pub use input::{EdgeZones, InputSnapshot, classify_edge};
pub use observer::{Settled, VisibilityObserver};
pub use side::{Axis, DrawerSide, SideRule};
