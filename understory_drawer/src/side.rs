// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen edges and the per-edge rules used for clamping and threshold checks.

use kurbo::{Point, Size, Vec2};

/// The screen edge a drawer is anchored to.
///
/// [`DrawerSide::Neutral`] is the "no edge" value: it is what a controller
/// reports when no gesture is engaged, and a drawer configured with it never
/// clamps and never matches an edge gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DrawerSide {
    /// Not anchored to any edge.
    #[default]
    Neutral,
    /// Slides in from the left edge.
    Left,
    /// Slides in from the right edge.
    Right,
    /// Slides in from the top edge.
    Top,
    /// Slides in from the bottom edge.
    Bottom,
}

/// A single coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl Axis {
    /// Returns this axis' component of `point`.
    #[must_use]
    pub fn of_point(self, point: Point) -> f64 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
        }
    }

    /// Returns this axis' component of `vec`.
    #[must_use]
    pub fn of_vec(self, vec: Vec2) -> f64 {
        match self {
            Self::X => vec.x,
            Self::Y => vec.y,
        }
    }

    /// Returns this axis' extent of `size` (width for `X`, height for `Y`).
    #[must_use]
    pub fn of_size(self, size: Size) -> f64 {
        match self {
            Self::X => size.width,
            Self::Y => size.height,
        }
    }

    /// Returns `vec` with this axis' component replaced by `value`.
    #[must_use]
    pub fn with_vec(self, vec: Vec2, value: f64) -> Vec2 {
        match self {
            Self::X => Vec2::new(value, vec.y),
            Self::Y => Vec2::new(vec.x, value),
        }
    }
}

/// Sign convention of an edge: which direction along the axis reveals the drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SideRule {
    /// The axis the drawer travels along.
    pub axis: Axis,
    /// `true` if the shown anchor has the greater coordinate on [`Self::axis`].
    pub show_is_greater: bool,
}

impl SideRule {
    /// Returns `true` if `value` has reached or passed `show` in the reveal direction.
    #[must_use]
    pub fn reached_show(&self, value: f64, show: f64) -> bool {
        if self.show_is_greater {
            value >= show
        } else {
            value <= show
        }
    }

    /// Returns `true` if `value` has reached or passed `hide` in the conceal direction.
    #[must_use]
    pub fn reached_hide(&self, value: f64, hide: f64) -> bool {
        if self.show_is_greater {
            value <= hide
        } else {
            value >= hide
        }
    }
}

impl DrawerSide {
    /// All anchored edges, in hit-zone priority order.
    pub const EDGES: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Returns the clamping rule for this edge, or `None` for [`DrawerSide::Neutral`].
    #[must_use]
    pub fn rule(self) -> Option<SideRule> {
        let (axis, show_is_greater) = match self {
            Self::Neutral => return None,
            Self::Left => (Axis::X, true),
            Self::Right => (Axis::X, false),
            Self::Top => (Axis::Y, false),
            Self::Bottom => (Axis::Y, true),
        };
        Some(SideRule {
            axis,
            show_is_greater,
        })
    }

    /// Returns the axis used for drag deltas and visibility distances.
    ///
    /// Left and right drawers use `X`; every other side, including
    /// [`DrawerSide::Neutral`], uses `Y`.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::X,
            Self::Neutral | Self::Top | Self::Bottom => Axis::Y,
        }
    }

    /// Returns `true` for any side other than [`DrawerSide::Neutral`].
    #[must_use]
    pub fn is_edge(self) -> bool {
        self != Self::Neutral
    }
}
