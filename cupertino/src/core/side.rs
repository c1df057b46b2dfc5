// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

/// The edge of a swipeable row an action is anchored to.
///
/// Left actions are revealed by dragging the row content to the right,
/// right actions by dragging it to the left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    /// Anchored to the left edge; revealed by a positive content offset.
    #[default]
    Left,
    /// Anchored to the right edge; revealed by a negative content offset.
    Right,
}

impl Side {
    /// Returns the side a horizontal drag of `delta` would reveal.
    ///
    /// Returns `None` for a zero (or NaN) delta.
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::Left)
        } else if delta < 0.0 {
            Some(Self::Right)
        } else {
            None
        }
    }

    /// Returns the side currently revealed by a content offset.
    ///
    /// Returns `None` when the row is closed.
    pub fn from_offset(offset: f64) -> Option<Self> {
        Self::from_delta(offset)
    }

    /// Returns the other side.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Clamps `offset` to the range this side may occupy, given its maximum reveal distance.
    ///
    /// That range is `0..=max_reveal` for [`Side::Left`] and `-max_reveal..=0` for [`Side::Right`].
    pub fn clamp_offset(self, offset: f64, max_reveal: f64) -> f64 {
        let max_reveal = max_reveal.max(0.0);
        match self {
            Self::Left => offset.clamp(0.0, max_reveal),
            Self::Right => offset.clamp(-max_reveal, 0.0),
        }
    }

    /// Returns the content offset at which this side is fully revealed.
    pub fn open_offset(self, max_reveal: f64) -> f64 {
        match self {
            Self::Left => max_reveal,
            Self::Right => -max_reveal,
        }
    }
}
