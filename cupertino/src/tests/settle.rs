// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use super::row_with;
use crate::anim::Easing;
use crate::core::Side;
use crate::testing::{HostRecord, SwipeHarness};
use crate::widgets::SnapPolicy;

#[test]
fn release_leaves_row_in_place_by_default() {
    let mut harness = SwipeHarness::create(row_with(&[], &[90.0]));
    harness.press_at((300.0, 22.0));
    harness.drag_by(-20.0);
    harness.release();
    harness.animate_ms(1000);
    assert_eq!(harness.swipe().content_offset(), -20.0);
    assert_eq!(harness.swipe().current_snap_policy(), SnapPolicy::Off);
}

#[test]
fn threshold_snaps_right_side_open() {
    let row = row_with(&[], &[90.0]).snap_policy(SnapPolicy::Threshold(0.3));
    let mut harness = SwipeHarness::create(row);
    harness.press_at((300.0, 22.0));
    harness.drag_by(-30.0);
    harness.release();

    assert!(harness.swipe().is_settling());
    assert_eq!(harness.host_mut().take_records().last(), Some(&HostRecord::AnimFrame));
    harness.animate_ms(250);
    let midway = harness.swipe().content_offset();
    assert!(midway < -30.0 && midway > -90.0, "midway offset was {midway}");
    harness.animate_ms(250);
    assert_eq!(harness.swipe().content_offset(), -90.0);
    assert!(!harness.swipe().is_settling());
    assert!(!harness.host().anim_frame_requested());
}

#[test]
fn threshold_snaps_closed_below_threshold() {
    let row = row_with(&[100.0], &[])
        .snap_policy(SnapPolicy::Threshold(0.5))
        .settle_easing(Easing::Linear)
        .settle_duration(Duration::from_millis(200));
    let mut harness = SwipeHarness::create(row);
    harness.press_at((10.0, 22.0));
    harness.drag_by(40.0);
    harness.release();

    harness.animate_ms(100);
    assert_eq!(harness.swipe().content_offset(), 20.0);
    harness.animate_ms(100);
    assert!(harness.swipe().is_collapsed());
}

#[test]
fn threshold_is_clamped() {
    let row = row_with(&[100.0], &[]).snap_policy(SnapPolicy::Threshold(4.0));
    assert_eq!(row.current_snap_policy(), SnapPolicy::Threshold(1.0));
}

#[test]
fn new_drag_interrupts_settle() {
    let row = row_with(&[100.0], &[]).snap_policy(SnapPolicy::Threshold(0.5));
    let mut harness = SwipeHarness::create(row);
    harness.press_at((10.0, 22.0));
    harness.drag_by(80.0);
    harness.release();
    harness.animate_ms(48);
    assert!(harness.swipe().is_settling());

    harness.press_at((200.0, 22.0));
    assert!(!harness.swipe().is_settling());
    let held = harness.swipe().content_offset();
    harness.drag_by(-10.0);
    assert_eq!(harness.swipe().content_offset(), held - 10.0);
}

#[test]
fn collapse_and_expand_programmatically() {
    let row = row_with(&[60.0], &[70.0]).settle_duration(Duration::from_millis(160));
    let mut harness = SwipeHarness::create(row);

    harness.edit(|swipe, host| swipe.expand(host, Side::Right));
    harness.animate_ms(160);
    assert_eq!(harness.swipe().content_offset(), -70.0);
    assert_eq!(harness.swipe().revealed_side(), Some(Side::Right));

    // Expanding the other side passes through closed.
    harness.edit(|swipe, host| swipe.expand(host, Side::Left));
    harness.animate_ms(160);
    assert_eq!(harness.swipe().content_offset(), 60.0);

    harness.edit(|swipe, host| swipe.collapse(host));
    harness.animate_ms(160);
    assert!(harness.swipe().is_collapsed());

    // Collapsing a closed row does nothing.
    harness.host_mut().clear();
    harness.edit(|swipe, host| swipe.collapse(host));
    assert!(!harness.swipe().is_settling());
    assert_eq!(harness.host_mut().next_record(), None);
}

#[test]
fn removing_actions_mid_settle_retargets() {
    let row = row_with(&[60.0, 40.0], &[]);
    let mut harness = SwipeHarness::create(row);
    let outer = harness.swipe().actions(Side::Left).nth(1).unwrap().id();

    harness.edit(|swipe, host| swipe.expand(host, Side::Left));
    harness.animate_ms(32);
    harness
        .edit(|swipe, host| swipe.remove_action(host, outer))
        .unwrap();
    harness.animate_ms(1000);
    assert_eq!(harness.swipe().content_offset(), 60.0);
}
