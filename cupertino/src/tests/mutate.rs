// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

use assert_matches::assert_matches;
use float_cmp::assert_approx_eq;
use kurbo::{Point, Rect};

use super::{ROW, row_with};
use crate::core::{Side, SwipeError};
use crate::testing::{HostRecord, SwipeHarness};
use crate::widgets::{ActionWidth, Swipe, SwipeAction};

fn frames(harness: &SwipeHarness, side: Side) -> Vec<Rect> {
    harness.swipe().actions(side).map(|a| a.frame()).collect()
}

#[test]
fn recompute_is_idempotent() {
    let mut harness = SwipeHarness::create(row_with(&[60.0, 40.0], &[50.0]));
    harness.press_at((10.0, 22.0));
    harness.drag_by(33.0);

    let before = (frames(&harness, Side::Left), frames(&harness, Side::Right));
    harness.edit(|swipe, host| swipe.recompute_geometry(host));
    let once = (frames(&harness, Side::Left), frames(&harness, Side::Right));
    harness.edit(|swipe, host| swipe.recompute_geometry(host));
    let twice = (frames(&harness, Side::Left), frames(&harness, Side::Right));

    assert_eq!(before, once);
    assert_eq!(once, twice);
    assert_eq!(harness.swipe().content_offset(), 33.0);
}

#[test]
fn explicit_recompute_requests_render() {
    let mut harness = SwipeHarness::create(row_with(&[60.0], &[]));
    harness.edit(|swipe, host| swipe.recompute_geometry(host));
    assert_eq!(harness.host_mut().take_records(), [HostRecord::Render]);
}

#[test]
fn adding_to_half_open_side_reflows_panels() {
    let mut harness = SwipeHarness::create(row_with(&[60.0, 40.0], &[]));
    harness.press_at((10.0, 22.0));
    harness.drag_by(50.0);
    harness.release();

    let id = harness.edit(|swipe, host| {
        swipe.add_action(host, SwipeAction::left(ActionWidth::Fixed(100.0)))
    });

    let swipe = harness.swipe();
    assert_eq!(swipe.max_reveal(Side::Left), 200.0);
    assert_approx_eq!(f64, swipe.reveal_fraction(), 0.25);
    // The new action is furthest out, so it lags the most.
    let new_frame = swipe.action(id).unwrap().frame();
    assert_eq!(new_frame.x1, 25.0);
    assert_eq!(new_frame.width(), 100.0);
}

#[test]
fn mutations_request_render() {
    let mut harness = SwipeHarness::create(row_with(&[60.0], &[]));
    let id = harness.edit(|swipe, host| {
        swipe.add_action(host, SwipeAction::right(ActionWidth::Fixed(70.0)))
    });
    assert_eq!(harness.host_mut().take_records(), [HostRecord::Render]);

    harness.edit(|swipe, host| swipe.set_bounds(host, Rect::new(0.0, 50.0, 320.0, 94.0)));
    assert_eq!(harness.host_mut().take_records(), [HostRecord::Render]);
    assert_eq!(harness.swipe().action(id).unwrap().frame().y0, 50.0);

    // Same bounds again is a no-op.
    harness.edit(|swipe, host| swipe.set_bounds(host, Rect::new(0.0, 50.0, 320.0, 94.0)));
    assert!(harness.host_mut().take_records().is_empty());
}

#[test]
fn removing_missing_action_is_non_fatal() {
    let mut harness = SwipeHarness::create(row_with(&[60.0], &[]));
    let stray = SwipeAction::left(ActionWidth::Fixed(10.0));
    let stray_id = stray.id();

    let result = harness.edit(|swipe, host| swipe.remove_action(host, stray_id));
    assert_matches!(result, Err(SwipeError::ActionNotFound(id)) if id == stray_id);
    assert_eq!(harness.swipe().max_reveal(Side::Left), 60.0);
    assert_eq!(
        SwipeError::ActionNotFound(stray_id).to_string(),
        format!("swipe row has no action with id {stray_id}")
    );
    let result = harness.edit(|swipe, _| swipe.activate_action(stray_id));
    assert_eq!(result, Err(SwipeError::ActionNotFound(stray_id)));
}

#[test]
fn non_positive_width_is_excluded_from_reveal() {
    let mut harness = SwipeHarness::create(row_with(&[60.0], &[]));
    let id = harness.edit(|swipe, host| {
        swipe.add_action(host, SwipeAction::left(ActionWidth::Fixed(-20.0)))
    });
    assert_eq!(harness.swipe().max_reveal(Side::Left), 60.0);

    harness.press_at((10.0, 22.0));
    harness.drag_by(200.0);
    assert_eq!(harness.swipe().content_offset(), 60.0);
    // Zero-width actions can't be tapped.
    assert_eq!(harness.swipe().action(id).unwrap().frame().width(), 0.0);
    assert_ne!(harness.swipe().action_at(Point::new(0.0, 22.0)), Some(id));
}

#[test]
fn edit_action_changes_side_and_text() {
    let mut harness = SwipeHarness::create(row_with(&[60.0], &[50.0]));
    let id = harness.swipe().actions(Side::Left).next().unwrap().id();

    let old_text = harness
        .edit(|swipe, host| {
            swipe.edit_action(host, id, |action| {
                let old = action.text().to_owned();
                action.set_text("Pin");
                action.configure(Side::Right, ActionWidth::Fixed(30.0));
                old
            })
        })
        .unwrap();
    assert_eq!(old_text, "");

    let swipe = harness.swipe();
    assert_eq!(swipe.max_reveal(Side::Left), 0.0);
    assert_eq!(swipe.max_reveal(Side::Right), 80.0);
    // Moved actions go after the ones already there.
    let right: Vec<_> = swipe.actions(Side::Right).map(|a| a.id()).collect();
    assert_eq!(right.last(), Some(&id));
    assert_eq!(swipe.action(id).unwrap().text(), "Pin");
}

#[test]
fn shrinking_row_clamps_fractional_reveal() {
    let row = Swipe::new()
        .with_bounds(ROW)
        .with_action(SwipeAction::right(ActionWidth::Fraction(0.5)));
    let mut harness = SwipeHarness::create(row);
    harness.press_at((300.0, 22.0));
    harness.drag_by(-300.0);
    harness.release();
    assert_eq!(harness.swipe().content_offset(), -160.0);

    harness.edit(|swipe, host| swipe.set_bounds(host, Rect::new(0.0, 0.0, 200.0, 44.0)));
    assert_eq!(harness.swipe().content_offset(), -100.0);
    assert_eq!(harness.swipe().reveal_fraction(), 1.0);

    harness.edit(|swipe, host| swipe.set_bounds(host, Rect::ZERO));
    assert!(harness.swipe().is_collapsed());
    assert_eq!(harness.swipe().reveal_fraction(), 0.0);
}
