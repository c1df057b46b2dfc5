// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

//! A mail-style row with "Pin" on the left and "Archive"/"Delete" on the right,
//! driven by a scripted touch gesture instead of a real window.
//!
//! Run with `RUST_LOG=cupertino=trace` to see every gesture decision.

use std::time::Duration;

use cupertino::app::try_init_tracing;
use cupertino::core::{PointerId, Side, SwipeHost};
use cupertino::kurbo::{Point, Rect};
use cupertino::widgets::{ActionWidth, SnapPolicy, Swipe, SwipeAction};
use tracing::{info, warn};

/// A host which owns a 60Hz frame clock and logs what it would repaint.
#[derive(Debug, Default)]
struct ConsoleHost {
    captured: Option<PointerId>,
    frame_pending: bool,
    dirty: bool,
}

impl SwipeHost for ConsoleHost {
    fn capture_pointer(&mut self, pointer: PointerId) {
        self.captured = Some(pointer);
    }

    fn release_pointer(&mut self, pointer: PointerId) {
        if self.captured == Some(pointer) {
            self.captured = None;
        }
    }

    fn request_anim_frame(&mut self) {
        self.frame_pending = true;
    }

    fn request_render(&mut self) {
        self.dirty = true;
    }
}

impl ConsoleHost {
    fn paint(&mut self, row: &Swipe) {
        if !std::mem::take(&mut self.dirty) {
            return;
        }
        let content = row.content_frame();
        info!(
            "content at x={:>7.2} ({:>3.0}% revealed)",
            content.x0,
            row.reveal_fraction() * 100.0
        );
        for side in [Side::Left, Side::Right] {
            for action in row.actions(side) {
                let visible = action.frame().intersect(row.bounds()).width();
                if visible > 0.0 {
                    info!("  {:<8} {visible:>6.2}px visible", action.text());
                }
            }
        }
    }

    fn run_frames(&mut self, row: &mut Swipe) {
        const FRAME_NS: u64 = 16_666_667;
        while std::mem::take(&mut self.frame_pending) {
            row.on_anim_frame(self, FRAME_NS);
            self.paint(row);
        }
    }
}

fn build_row() -> Swipe {
    Swipe::new()
        .with_bounds(Rect::new(0.0, 0.0, 375.0, 64.0))
        .snap_policy(SnapPolicy::Threshold(0.4))
        .settle_duration(Duration::from_millis(250))
        .with_action(
            SwipeAction::left(ActionWidth::Fixed(74.0))
                .with_text("Pin")
                .with_symbol("pin_fill")
                .on_activate(|id| info!("pinned by action {id}")),
        )
        .with_action(
            SwipeAction::right(ActionWidth::Fraction(0.2))
                .with_text("Archive")
                .with_symbol("archivebox_fill")
                .on_activate(|id| info!("archived by action {id}")),
        )
        .with_action(
            SwipeAction::right(ActionWidth::Fraction(0.2))
                .with_text("Delete")
                .with_symbol("trash_fill")
                .on_activate(|id| info!("deleted by action {id}")),
        )
}

fn main() {
    let _ = try_init_tracing();

    let mut host = ConsoleHost::default();
    let mut row = build_row();
    let pointer = PointerId::PRIMARY;

    info!("dragging left by 120px");
    row.pointer_down(&mut host, pointer, Point::new(300.0, 32.0));
    for step in 1..=6 {
        let x = 300.0 - 20.0 * f64::from(step);
        row.pointer_move(&mut host, pointer, Point::new(x, 32.0));
        host.paint(&row);
    }
    row.pointer_up(&mut host, pointer);
    host.run_frames(&mut row);

    let tap = Point::new(row.bounds().x1 - 10.0, 32.0);
    match row.action_at(tap) {
        Some(id) => match row.activate_action(id) {
            Ok(true) => {}
            Ok(false) => warn!("action {id} is disabled"),
            Err(err) => warn!("{err}"),
        },
        None => warn!("nothing to tap at {tap:?}"),
    }

    info!("closing");
    row.collapse(&mut host);
    host.run_frames(&mut row);
}
