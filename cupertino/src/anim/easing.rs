// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

/// Easing curves, mapping linear progress in `0..=1` to eased progress.
///
/// All curves map `0` to `0` and `1` to `1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Accelerates from rest.
    InQuad,
    /// Decelerates to rest.
    OutQuad,
    /// Accelerates, then decelerates.
    InOutQuad,
    /// Decelerates to rest, more sharply than [`Easing::OutQuad`].
    OutCubic,
    /// Quarter-circle deceleration; fast start, long soft landing.
    ///
    /// This is the curve iOS table rows use when settling.
    #[default]
    OutCirc,
}

impl Easing {
    /// Applies the curve to `t`, which is clamped to `0..=1` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => t * (2.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::OutCubic => {
                let p = t - 1.0;
                p * p * p + 1.0
            }
            Self::OutCirc => {
                let p = t - 1.0;
                (1.0 - p * p).sqrt()
            }
        }
    }
}
