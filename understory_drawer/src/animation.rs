// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resumable linear travel between two anchored positions.
//!
//! An [`Animation`] carries everything needed to resume a move on the next
//! tick: where it started, where it is going, how long it has run and how long
//! it will run in total. The owner calls [`Animation::step`] once per tick with
//! the elapsed frame time.

use kurbo::Point;

/// Speed units are scaled by this factor: a speed of `1.0` travels 100 units per second.
pub const SPEED_SCALE: f64 = 100.0;

/// Outcome of advancing an [`Animation`] by one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Still travelling; the position to apply this tick.
    Moving(Point),
    /// Arrived; the exact target position.
    Finished(Point),
}

/// A linear move from `start` to `target` at a fixed speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    start: Point,
    target: Point,
    elapsed: f64,
    total: f64,
    reveal: bool,
}

impl Animation {
    /// Creates an animation towards `target`.
    ///
    /// Travel time is `distance(start, target) / (speed * 100)`. A zero distance
    /// yields a zero travel time, so the animation finishes on its first step.
    /// `reveal` is the visibility the drawer takes on once the move completes.
    #[must_use]
    pub fn new(start: Point, target: Point, speed: f64, reveal: bool) -> Self {
        let distance = start.distance(target);
        let total = if distance == 0.0 {
            0.0
        } else {
            distance / (speed * SPEED_SCALE)
        };
        Self {
            start,
            target,
            elapsed: 0.0,
            total,
            reveal,
        }
    }

    /// The position the animation started from.
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The position the animation ends at.
    #[must_use]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Total travel time in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.total
    }

    /// Time accumulated so far, in seconds.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Visibility the drawer will have once this animation finishes.
    #[must_use]
    pub fn reveals(&self) -> bool {
        self.reveal
    }

    /// Advances by `dt` seconds and reports the position to apply.
    pub fn step(&mut self, dt: f64) -> Step {
        if self.elapsed >= self.total {
            return Step::Finished(self.target);
        }
        self.elapsed += dt;
        if self.elapsed >= self.total {
            return Step::Finished(self.target);
        }
        let t = (self.elapsed / self.total).min(1.0);
        Step::Moving(self.start.lerp(self.target, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_scales_with_speed() {
        let anim = Animation::new(Point::new(-200.0, 0.0), Point::ORIGIN, 2.0, true);
        // 200 units at 200 units/s.
        assert!((anim.duration() - 1.0).abs() < 1e-12);
        assert!(anim.reveals());
        assert_eq!(anim.elapsed(), 0.0);
    }

    #[test]
    fn zero_distance_finishes_on_first_step() {
        let p = Point::new(5.0, 5.0);
        let mut anim = Animation::new(p, p, 1.0, false);
        assert_eq!(anim.duration(), 0.0);
        assert_eq!(anim.step(0.016), Step::Finished(p));
    }

    #[test]
    fn zero_distance_finishes_even_with_zero_dt() {
        let mut anim = Animation::new(Point::ORIGIN, Point::ORIGIN, 1.0, true);
        assert_eq!(anim.step(0.0), Step::Finished(Point::ORIGIN));
    }

    #[test]
    fn interpolates_linearly() {
        let mut anim = Animation::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 1.0, true);
        // One second total; a quarter of the way after 0.25s.
        match anim.step(0.25) {
            Step::Moving(p) => assert!((p.x - 25.0).abs() < 1e-9),
            other => panic!("expected movement, got {other:?}"),
        }
        match anim.step(0.25) {
            Step::Moving(p) => assert!((p.x - 50.0).abs() < 1e-9),
            other => panic!("expected movement, got {other:?}"),
        }
        assert_eq!(anim.step(0.5), Step::Finished(Point::new(100.0, 0.0)));
    }

    #[test]
    fn large_step_lands_exactly_on_target() {
        let target = Point::new(0.0, 300.0);
        let mut anim = Animation::new(Point::ORIGIN, target, 1.0, false);
        assert_eq!(anim.step(10.0), Step::Finished(target));
        // Further steps stay finished.
        assert_eq!(anim.step(1.0), Step::Finished(target));
    }
}
