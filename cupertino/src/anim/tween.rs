// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use crate::anim::Easing;

/// Interpolates a single value from a start to a target over a fixed duration.
///
/// A tween doesn't know about wall-clock time: it is advanced explicitly with the
/// interval between animation frames.
/// Its target can be changed mid-flight with [`retarget`](Self::retarget),
/// which keeps the current progress.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Tween {
    /// Creates a tween from `from` to `to`.
    ///
    /// A zero `duration` creates a tween which is already finished.
    pub fn new(from: f64, to: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Advances the tween by `interval` and returns the new value.
    pub fn advance(&mut self, interval: Duration) -> f64 {
        self.elapsed = self.elapsed.saturating_add(interval).min(self.duration);
        self.value()
    }

    /// Linear progress through the tween, in `0..=1`.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// The current value.
    ///
    /// This is exactly the target once the tween is finished.
    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// The value the tween started from.
    pub fn start(&self) -> f64 {
        self.from
    }

    /// The value the tween ends at.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Changes the value the tween ends at, keeping its start and progress.
    pub fn retarget(&mut self, to: f64) {
        self.to = to;
    }

    /// Returns `true` once the whole duration has elapsed.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
