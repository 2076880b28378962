// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single edge-anchored drawer: position, clamping, snapping and animation.
//!
//! ## Usage
//!
//! 1) Create a [`Drawer`] from a [`DrawerConfig`] and the panel size reported by
//!    your layout host. It starts hidden, resting at its hide position.
//! 2) While the user drags, forward pointer deltas to [`Drawer::move_by`]. The
//!    position is clamped between the two anchors.
//! 3) When the drag ends, call [`Drawer::check_visibility`] to snap to the shown
//!    or hidden anchor depending on how far the drawer travelled.
//! 4) Call [`Drawer::advance`] once per frame and write [`Drawer::position`]
//!    back to the panel.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use understory_drawer::{Drawer, DrawerConfig, DrawerSide, Settled};
//!
//! let config = DrawerConfig::new(DrawerSide::Left, Point::new(-200.0, 0.0), Point::ORIGIN)
//!     .with_thresholds(0.5, 0.5);
//! let mut drawer = Drawer::new(config, Size::new(200.0, 600.0));
//!
//! // Drag 110 units into the screen, past the 100 unit show threshold.
//! drawer.move_by(Vec2::new(110.0, 0.0));
//! drawer.check_visibility();
//!
//! let mut settled = Vec::new();
//! while drawer.is_animating() {
//!     drawer.advance(1.0 / 60.0, &mut settled);
//! }
//! assert!(drawer.is_visible());
//! assert_eq!(drawer.position(), Point::ORIGIN);
//! assert_eq!(settled, vec![Settled { side: DrawerSide::Left, visible: true }]);
//! ```

use kurbo::{Point, Size, Vec2};

use crate::animation::{Animation, Step};
use crate::observer::{Settled, VisibilityObserver};
use crate::side::DrawerSide;

/// Static configuration of a [`Drawer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerConfig {
    /// The edge the drawer slides in from.
    pub side: DrawerSide,
    /// Anchored position when fully hidden.
    ///
    /// Only the component on the side's axis is compared; the whole point is
    /// applied when the drawer snaps to it.
    pub hide_position: Point,
    /// Anchored position when fully shown.
    pub show_position: Point,
    /// Fraction of the panel extent a shown drawer must be dragged back
    /// before it hides, in `[0, 1]`.
    pub hide_threshold: f64,
    /// Fraction of the panel extent a hidden drawer must be dragged out
    /// before it shows, in `[0, 1]`.
    pub show_threshold: f64,
    /// Animation speed, in hundreds of units per second. Must be positive.
    pub speed: f64,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            side: DrawerSide::Neutral,
            hide_position: Point::ORIGIN,
            show_position: Point::ORIGIN,
            hide_threshold: 0.5,
            show_threshold: 0.5,
            speed: 10.0,
        }
    }
}

impl DrawerConfig {
    /// Creates a configuration with default thresholds and speed.
    #[must_use]
    pub fn new(side: DrawerSide, hide_position: Point, show_position: Point) -> Self {
        Self {
            side,
            hide_position,
            show_position,
            ..Self::default()
        }
    }

    /// Returns this configuration with the given hide and show threshold fractions.
    #[must_use]
    pub fn with_thresholds(mut self, hide_threshold: f64, show_threshold: f64) -> Self {
        self.hide_threshold = hide_threshold;
        self.show_threshold = show_threshold;
        self
    }

    /// Returns this configuration with the given animation speed.
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    fn debug_validate(&self) {
        debug_assert!(
            (0.0..=1.0).contains(&self.hide_threshold),
            "hide threshold {} outside [0, 1]",
            self.hide_threshold
        );
        debug_assert!(
            (0.0..=1.0).contains(&self.show_threshold),
            "show threshold {} outside [0, 1]",
            self.show_threshold
        );
        debug_assert!(
            self.speed.is_finite() && self.speed > 0.0,
            "drawer speed must be positive and finite, got {}",
            self.speed
        );
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Motion {
    Resting,
    Animating(Animation),
}

/// An edge-anchored panel that can be dragged and animated between two anchors.
///
/// The drawer owns its live anchored position; the host reads
/// [`Drawer::position`] every frame and applies it to the panel. The panel
/// extent is owned by the host and mirrored here through [`Drawer::set_size`].
///
/// While an animation is in flight, drag input is rejected. Starting a new
/// animation replaces the current one.
#[derive(Clone, Debug)]
pub struct Drawer {
    config: DrawerConfig,
    size: Size,
    position: Point,
    visible: bool,
    motion: Motion,
}

impl Drawer {
    /// Creates a hidden drawer resting at its hide position.
    #[must_use]
    pub fn new(config: DrawerConfig, size: Size) -> Self {
        config.debug_validate();
        Self {
            config,
            size,
            position: config.hide_position,
            visible: false,
            motion: Motion::Resting,
        }
    }

    /// Returns the drawer configuration.
    #[must_use]
    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// Returns the edge this drawer is anchored to.
    #[must_use]
    pub fn side(&self) -> DrawerSide {
        self.config.side
    }

    /// Returns the live anchored position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the panel extent used for threshold checks.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Updates the panel extent after a layout change.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Returns `true` once a show animation has completed, until a hide completes.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `true` while a show or hide animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.motion, Motion::Animating(_))
    }

    /// Returns `true` while animating towards the show anchor.
    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.animation().is_some_and(Animation::reveals)
    }

    /// Returns the in-flight animation, if any.
    #[must_use]
    pub fn animation(&self) -> Option<&Animation> {
        match &self.motion {
            Motion::Animating(animation) => Some(animation),
            Motion::Resting => None,
        }
    }

    /// Moves the drawer by `delta` and clamps it between its anchors.
    ///
    /// Returns `false` without moving if an animation is in flight.
    pub fn move_by(&mut self, delta: Vec2) -> bool {
        if self.is_animating() {
            return false;
        }
        self.position += delta;
        self.clamp();
        true
    }

    /// Snaps the position to whichever anchor it has reached or passed.
    fn clamp(&mut self) {
        let Some(rule) = self.config.side.rule() else {
            return;
        };
        let value = rule.axis.of_point(self.position);
        if rule.reached_show(value, rule.axis.of_point(self.config.show_position)) {
            self.position = self.config.show_position;
        } else if rule.reached_hide(value, rule.axis.of_point(self.config.hide_position)) {
            self.position = self.config.hide_position;
        }
    }

    /// Decides whether the drawer should flip state and starts the matching animation.
    ///
    /// The distance travelled from the current resting anchor is compared, on the
    /// side's axis and in absolute values, against the relevant threshold fraction
    /// of the panel extent:
    ///
    /// - A hidden drawer that travelled at least `show_threshold * extent` from the
    ///   hide anchor shows; otherwise it snaps back to hidden.
    /// - A shown drawer that travelled at least `hide_threshold * extent` from the
    ///   show anchor hides; otherwise it snaps back to shown.
    ///
    /// If an animation is already in flight its target is the pending decision
    /// and it is left to finish. A tap on an open drawer hides it and then
    /// checks visibility in the same step; re-evaluating the untouched position
    /// there would turn the hide straight back into a show.
    pub fn check_visibility(&mut self) {
        if self.is_animating() {
            return;
        }
        let axis = self.config.side.axis();
        let extent = axis.of_size(self.size).abs();
        let current = axis.of_point(self.position).abs();

        let (anchor, fraction) = if self.visible {
            (self.config.show_position, self.config.hide_threshold)
        } else {
            (self.config.hide_position, self.config.show_threshold)
        };
        let travelled = (axis.of_point(anchor).abs() - current).abs();
        let crossed = travelled >= extent * fraction.abs();

        // Crossing flips the state; otherwise snap back to where we were.
        if crossed != self.visible {
            self.show();
        } else {
            self.hide();
        }
    }

    /// Starts animating towards the show anchor, replacing any in-flight animation.
    pub fn show(&mut self) {
        self.animate_to(self.config.show_position, true);
    }

    /// Starts animating towards the hide anchor, replacing any in-flight animation.
    pub fn hide(&mut self) {
        self.animate_to(self.config.hide_position, false);
    }

    fn animate_to(&mut self, target: Point, reveal: bool) {
        let animation = Animation::new(self.position, target, self.config.speed, reveal);
        debug_event!(
            side = ?self.config.side,
            reveal,
            duration = animation.duration(),
            "drawer animation started"
        );
        self.motion = Motion::Animating(animation);
    }

    /// Advances an in-flight animation by `dt` seconds.
    ///
    /// When the animation completes the drawer lands exactly on its target,
    /// takes on the animation's visibility and reports a [`Settled`] to
    /// `observer`. Does nothing while resting.
    pub fn advance(&mut self, dt: f64, mut observer: impl VisibilityObserver) {
        let Motion::Animating(animation) = &mut self.motion else {
            return;
        };
        match animation.step(dt) {
            Step::Moving(position) => self.position = position,
            Step::Finished(target) => {
                let visible = animation.reveals();
                self.position = target;
                self.motion = Motion::Resting;
                self.visible = visible;
                debug_event!(side = ?self.config.side, visible, "drawer settled");
                observer.drawer_settled(Settled {
                    side: self.config.side,
                    visible,
                });
            }
        }
    }
}
