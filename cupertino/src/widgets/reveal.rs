// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

//! Geometry of the action panels behind a swipeable row.

use kurbo::Rect;

use crate::core::Side;
use crate::widgets::SwipeAction;

/// How far a side is revealed, in `0..=1`.
///
/// A side with nothing to reveal is always at `0`.
pub(crate) fn reveal_fraction(offset: f64, max_reveal: f64) -> f64 {
    if max_reveal <= 0.0 || !max_reveal.is_finite() {
        return 0.0;
    }
    (offset.abs() / max_reveal).clamp(0.0, 1.0)
}

/// Positions the actions of one side of a row.
///
/// `total_width` is the summed width of `actions`, and `fraction` how far this side is revealed.
/// The action at index `i` travels `(total_width - width_before_i) * fraction` inwards from the
/// row edge: the first action stays glued to the edge of the content, and actions further out
/// lag behind it, so that they tile the revealed strip exactly once fully open.
/// At `fraction == 0.0` every action sits just outside the row.
pub(crate) fn place_actions(
    actions: &mut [SwipeAction],
    side: Side,
    bounds: Rect,
    total_width: f64,
    fraction: f64,
) {
    let mut width_before = 0.0;
    for action in actions {
        let width = action.resolved_width();
        let travel = (total_width - width_before) * fraction;
        let frame = match side {
            Side::Left => {
                let x1 = bounds.x0 + travel;
                Rect::new(x1 - width, bounds.y0, x1, bounds.y1)
            }
            Side::Right => {
                let x0 = bounds.x1 - travel;
                Rect::new(x0, bounds.y0, x0 + width, bounds.y1)
            }
        };
        action.set_frame(frame);
        width_before += width;
    }
}
