// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routes edge gestures to a set of drawers and keeps at most one of them open.

use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::drawer::Drawer;
use crate::gesture::{GesturePhase, PointerTracker};
use crate::input::{EdgeZones, InputSnapshot, classify_edge};
use crate::observer::{Settled, VisibilityObserver};
use crate::side::DrawerSide;

/// Static configuration of a [`DrawerController`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControllerConfig {
    /// Edge hit-zones that can start a drag gesture.
    pub zones: EdgeZones,
}

/// Coarse summary of what the controller is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionState {
    /// Nothing engaged and nothing moving.
    Idle,
    /// A pointer went down in an edge zone and drag steps are being forwarded.
    Engaged,
    /// The gesture became a real drag.
    Dragging,
    /// The engaged drawer (or, with none engaged, any drawer) is animating.
    Animating,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Engagement {
    phase: GesturePhase,
    current: Option<usize>,
    side: DrawerSide,
    any_visible: bool,
}

/// Applies a drawer's settle notification to the controller's engagement state.
struct SettleNotifier<'a> {
    index: usize,
    engagement: &'a mut Engagement,
}

impl VisibilityObserver for SettleNotifier<'_> {
    fn drawer_settled(&mut self, settled: Settled) {
        // A hide finishing on some other drawer must not clear the current one.
        if !settled.visible
            && self
                .engagement
                .current
                .is_some_and(|current| current != self.index)
        {
            return;
        }
        self.engagement.any_visible = settled.visible;
        self.engagement.current = settled.visible.then_some(self.index);
        self.engagement.side = if settled.visible {
            settled.side
        } else {
            DrawerSide::Neutral
        };
    }
}

/// Owns the drawers of a scene and drives them from per-tick input.
///
/// Call [`DrawerController::tick`] once per frame with the elapsed time and an
/// [`InputSnapshot`]. The controller:
///
/// - engages the drawer of an edge when the pointer goes down in that edge's
///   hit-zone while no drawer is open,
/// - forwards drag deltas along the edge's axis to the engaged drawer,
/// - on release, dismisses a tapped open drawer or lets the drawer snap
///   according to its thresholds,
/// - advances every drawer's animation and tracks which one is open.
///
/// Drawers can also be opened and closed by index with
/// [`DrawerController::show_drawer`], [`DrawerController::hide_drawer`] and
/// [`DrawerController::toggle_drawer`].
///
/// ```
/// use kurbo::{Point, Size};
/// use understory_drawer::{
///     ControllerConfig, Drawer, DrawerConfig, DrawerController, DrawerSide, InputSnapshot,
/// };
///
/// let left = DrawerConfig::new(DrawerSide::Left, Point::new(-200.0, 0.0), Point::ORIGIN);
/// let mut controller = DrawerController::new(
///     [Drawer::new(left, Size::new(200.0, 600.0))],
///     ControllerConfig::default(),
/// );
///
/// controller.toggle_drawer(0);
/// let idle = InputSnapshot::idle(Point::new(500.0, 300.0), Size::new(1000.0, 600.0));
/// for _ in 0..120 {
///     controller.tick(1.0 / 60.0, &idle);
/// }
/// assert!(controller.any_visible());
/// assert_eq!(controller.current_drawer(), Some(0));
/// assert_eq!(controller.active_side(), DrawerSide::Left);
/// ```
#[derive(Clone, Debug)]
pub struct DrawerController {
    drawers: Vec<Drawer>,
    config: ControllerConfig,
    engagement: Engagement,
    tracker: PointerTracker,
}

impl DrawerController {
    /// Creates a controller over `drawers`, in index order.
    #[must_use]
    pub fn new(drawers: impl IntoIterator<Item = Drawer>, config: ControllerConfig) -> Self {
        let zones = config.zones;
        debug_assert!(
            (0.0..=0.5).contains(&zones.x) && (0.0..=0.5).contains(&zones.y),
            "edge zone fractions ({}, {}) outside [0, 0.5]",
            zones.x,
            zones.y
        );
        Self {
            drawers: drawers.into_iter().collect(),
            config,
            engagement: Engagement::default(),
            tracker: PointerTracker::default(),
        }
    }

    /// Returns the drawers in configuration order.
    #[must_use]
    pub fn drawers(&self) -> &[Drawer] {
        &self.drawers
    }

    /// Returns the drawer at `index`, if any.
    #[must_use]
    pub fn drawer(&self, index: usize) -> Option<&Drawer> {
        self.drawers.get(index)
    }

    /// Returns the number of drawers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drawers.len()
    }

    /// Returns `true` if no drawers are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drawers.is_empty()
    }

    /// Updates the panel extent of the drawer at `index`.
    ///
    /// Returns `false` if there is no such drawer.
    pub fn set_drawer_size(&mut self, index: usize, size: Size) -> bool {
        let Some(drawer) = self.drawers.get_mut(index) else {
            return false;
        };
        drawer.set_size(size);
        true
    }

    /// Returns the edge hit-zones.
    #[must_use]
    pub fn zones(&self) -> EdgeZones {
        self.config.zones
    }

    /// Index of the drawer engaged by the current gesture or currently open.
    #[must_use]
    pub fn current_drawer(&self) -> Option<usize> {
        self.engagement.current
    }

    /// The engaged edge, or [`DrawerSide::Neutral`].
    #[must_use]
    pub fn active_side(&self) -> DrawerSide {
        self.engagement.side
    }

    /// Returns `true` while a drawer is open.
    #[must_use]
    pub fn any_visible(&self) -> bool {
        self.engagement.any_visible
    }

    /// Returns the gesture phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.engagement.phase
    }

    /// Returns `true` while an edge gesture is engaged.
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.engagement.phase.can_drag()
    }

    /// Returns `true` once the engaged gesture became a real drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.engagement.phase.is_dragging()
    }

    /// Returns the pointer tracker used for drag steps.
    #[must_use]
    pub fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    /// Summarizes the gesture phase and animation state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        let animating = match self.engagement.current {
            Some(index) => self.drawers.get(index).is_some_and(Drawer::is_animating),
            None => self.drawers.iter().any(Drawer::is_animating),
        };
        if animating {
            return InteractionState::Animating;
        }
        match self.engagement.phase {
            GesturePhase::Idle => InteractionState::Idle,
            GesturePhase::Engaged => InteractionState::Engaged,
            GesturePhase::Dragging => InteractionState::Dragging,
        }
    }

    /// Processes one frame of input, then advances animations by `dt` seconds.
    pub fn tick(&mut self, dt: f64, input: &InputSnapshot) {
        if self.drawers.is_empty() {
            return;
        }
        self.process_input(input);
        self.advance(dt);
    }

    fn process_input(&mut self, input: &InputSnapshot) {
        if input.pointer_down && !self.engagement.any_visible && !self.is_dragging() {
            self.engage(classify_edge(input.pointer, input.screen, self.config.zones));
        }

        let phase_before_release = self.engagement.phase;
        if input.pointer_up {
            self.release();
        }

        let Some(current) = self.engagement.current else {
            return;
        };

        // At most one drag step per tick.
        let mut stepped = false;
        if self.is_engaged() {
            self.drag_step(current, input.pointer);
            stepped = true;
        }

        if input.pointer_up {
            let Some(drawer) = self.drawers.get_mut(current) else {
                return;
            };
            if !phase_before_release.is_dragging() && self.engagement.any_visible {
                drawer.hide();
            }
            drawer.check_visibility();
            if drawer.is_revealing() {
                self.hide_revealed(Some(current));
            }
        }

        if input.pointer_held && self.engagement.any_visible && !stepped {
            self.drag_step(current, input.pointer);
        }
    }

    fn engage(&mut self, side: DrawerSide) {
        if !side.is_edge() {
            return;
        }
        if self.drawers.iter().any(Drawer::is_revealing) {
            debug_event!(?side, "edge gesture ignored: a drawer is opening");
            return;
        }
        let Some(index) = self.drawers.iter().position(|d| d.side() == side) else {
            debug_event!(?side, "edge gesture ignored: no drawer for edge");
            return;
        };
        debug_event!(?side, index, "edge gesture engaged");
        self.engagement.phase = GesturePhase::Engaged;
        self.engagement.side = side;
        self.engagement.current = Some(index);
    }

    fn release(&mut self) {
        self.engagement.phase = GesturePhase::Idle;
        self.engagement.side = DrawerSide::Neutral;
        self.tracker.reset();
    }

    fn drag_step(&mut self, current: usize, pointer: Point) {
        let axis = self.engagement.side.rule().map(|rule| rule.axis);
        let Some(sample) = self.tracker.sample(pointer, axis) else {
            return;
        };
        if sample.beyond_deadzone && !self.engagement.phase.is_dragging() {
            debug_event!(index = current, "edge gesture became a drag");
            self.engagement.phase = GesturePhase::Dragging;
        }
        if let Some(drawer) = self.drawers.get_mut(current) {
            trace_event!(index = current, dx = sample.delta.x, dy = sample.delta.y, "drag step");
            drawer.move_by(sample.delta);
        }
    }

    fn advance(&mut self, dt: f64) {
        for (index, drawer) in self.drawers.iter_mut().enumerate() {
            drawer.advance(
                dt,
                SettleNotifier {
                    index,
                    engagement: &mut self.engagement,
                },
            );
        }
    }

    /// Shows the drawer at `index` if hidden, hides it if shown.
    ///
    /// Returns `false` without effect for an unknown index or during a drag.
    pub fn toggle_drawer(&mut self, index: usize) -> bool {
        let Some(drawer) = self.drawers.get(index) else {
            debug_event!(index, "toggle ignored: no such drawer");
            return false;
        };
        if drawer.is_visible() {
            self.hide_drawer(index)
        } else {
            self.show_drawer(index)
        }
    }

    /// Hides every other open drawer, then shows the drawer at `index`.
    ///
    /// Drawers already animating towards their shown position are hidden too,
    /// so at most one drawer is open once animations settle. An engaged edge
    /// gesture that has not become a drag is cancelled and its drawer snaps
    /// back. Returns `false` without effect for an unknown index or during a
    /// drag.
    pub fn show_drawer(&mut self, index: usize) -> bool {
        if !self.accepts_request(index) {
            return false;
        }
        if self.is_engaged() {
            // The request takes over from an edge gesture that has not become a drag yet.
            debug_event!(index, "edge gesture cancelled by show request");
            if let Some(drawer) = self.engagement.current.and_then(|i| self.drawers.get_mut(i)) {
                drawer.hide();
            }
            self.release();
        }
        self.hide_revealed(Some(index));
        match self.drawers.get_mut(index) {
            Some(drawer) => {
                drawer.show();
                true
            }
            None => false,
        }
    }

    /// Hides the drawer at `index`.
    ///
    /// Returns `false` without effect for an unknown index or during a drag.
    pub fn hide_drawer(&mut self, index: usize) -> bool {
        if !self.accepts_request(index) {
            return false;
        }
        match self.drawers.get_mut(index) {
            Some(drawer) => {
                drawer.hide();
                true
            }
            None => false,
        }
    }

    /// Hides every drawer other than `keep` that is shown or animating towards shown.
    fn hide_revealed(&mut self, keep: Option<usize>) {
        for (index, drawer) in self.drawers.iter_mut().enumerate() {
            if Some(index) != keep && (drawer.is_visible() || drawer.is_revealing()) {
                drawer.hide();
            }
        }
    }

    fn accepts_request(&self, index: usize) -> bool {
        if index >= self.drawers.len() {
            debug_event!(index, "drawer request ignored: no such drawer");
            return false;
        }
        if self.is_dragging() {
            debug_event!(index, "drawer request ignored: drag in progress");
            return false;
        }
        true
    }
}
