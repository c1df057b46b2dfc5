// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

//! Whole-row tests, driven through [`SwipeHarness`](crate::testing::SwipeHarness).

mod mutate;
mod settle;

use kurbo::Rect;

use crate::widgets::{ActionWidth, Swipe, SwipeAction};

pub(crate) const ROW: Rect = Rect::new(0.0, 0.0, 320.0, 44.0);

/// A row with fixed-width actions on each side, in insertion order.
pub(crate) fn row_with(left: &[f64], right: &[f64]) -> Swipe {
    let row = left.iter().fold(Swipe::new().with_bounds(ROW), |row, w| {
        row.with_action(SwipeAction::left(ActionWidth::Fixed(*w)))
    });
    right.iter().fold(row, |row, w| {
        row.with_action(SwipeAction::right(ActionWidth::Fixed(*w)))
    })
}
