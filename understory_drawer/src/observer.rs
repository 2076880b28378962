// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility notifications emitted when a drawer finishes animating.

use alloc::vec::Vec;

use crate::DrawerSide;

/// A drawer came to rest after a show or hide animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Settled {
    /// The edge of the drawer that settled.
    pub side: DrawerSide,
    /// Whether the drawer is now shown.
    pub visible: bool,
}

/// A sink for [`Settled`] notifications.
///
/// [`Drawer::advance`](crate::Drawer::advance) reports to an observer each
/// time an animation completes. [`DrawerController`](crate::DrawerController)
/// uses this to track which drawer is open; standalone drawers can pass `()`
/// to ignore notifications or a `Vec<Settled>` to record them.
pub trait VisibilityObserver {
    /// Called once when a drawer's animation completes.
    fn drawer_settled(&mut self, settled: Settled);
}

impl VisibilityObserver for () {
    fn drawer_settled(&mut self, _settled: Settled) {}
}

impl VisibilityObserver for Vec<Settled> {
    fn drawer_settled(&mut self, settled: Settled) {
        self.push(settled);
    }
}

impl<O: VisibilityObserver + ?Sized> VisibilityObserver for &mut O {
    fn drawer_settled(&mut self, settled: Settled) {
        (**self).drawer_settled(settled);
    }
}
