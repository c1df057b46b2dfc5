// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use dpi::PhysicalPosition;
use kurbo::Point;
use tracing::debug;
use ui_events::pointer::{
    PointerButton, PointerButtonEvent, PointerEvent, PointerId, PointerInfo, PointerState,
    PointerType, PointerUpdate,
};

use crate::app::try_init_test_tracing;
use crate::testing::RecordingHost;
use crate::widgets::Swipe;

/// A [`PointerInfo`] for the primary touch point, for testing.
pub const PRIMARY_TOUCH: PointerInfo = PointerInfo {
    pointer_id: Some(PointerId::PRIMARY),
    persistent_device_id: None,
    pointer_type: PointerType::Touch,
};

/// The interval between simulated animation frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// A headless environment to test a [`Swipe`] row in.
///
/// The harness sends real [`PointerEvent`]s for [`PRIMARY_TOUCH`] through
/// [`Swipe::on_pointer_event`], and delivers animation frames when the row asks for them.
///
/// ```
/// use cupertino::kurbo::{Point, Rect};
/// use cupertino::testing::SwipeHarness;
/// use cupertino::widgets::{ActionWidth, Swipe, SwipeAction};
///
/// let row = Swipe::new()
///     .with_bounds(Rect::new(0.0, 0.0, 320.0, 44.0))
///     .with_action(SwipeAction::right(ActionWidth::Fixed(80.0)));
/// let mut harness = SwipeHarness::create(row);
///
/// harness.press_at(Point::new(300.0, 20.0));
/// harness.drag_by(-50.0);
/// harness.release();
/// assert_eq!(harness.swipe().content_offset(), -50.0);
/// ```
#[derive(Debug)]
pub struct SwipeHarness {
    swipe: Swipe,
    host: RecordingHost,
    pointer_state: PointerState,
}

impl SwipeHarness {
    /// Builds a harness around `swipe`.
    ///
    /// This also sets up test logging, if no subscriber is set yet.
    pub fn create(swipe: Swipe) -> Self {
        let _ = try_init_test_tracing();
        Self {
            swipe,
            host: RecordingHost::new(),
            pointer_state: PointerState::default(),
        }
    }

    // --- MARK: EVENT HELPERS

    /// Sends a pointer event to the row, and returns whether it was handled.
    pub fn process_pointer_event(&mut self, event: PointerEvent) -> bool {
        self.swipe.on_pointer_event(&mut self.host, &event)
    }

    /// Moves the touch point to `pos` and presses it.
    pub fn press_at(&mut self, pos: impl Into<Point>) -> bool {
        let Point { x, y } = pos.into();
        self.pointer_state.position = PhysicalPosition { x, y };
        debug!("Harness touch down at {x}, {y}");
        self.process_pointer_event(PointerEvent::Down(PointerButtonEvent {
            button: Some(PointerButton::Primary),
            pointer: PRIMARY_TOUCH,
            state: self.pointer_state.clone(),
        }))
    }

    /// Moves the touch point to `pos`.
    pub fn drag_to(&mut self, pos: impl Into<Point>) -> bool {
        let Point { x, y } = pos.into();
        self.pointer_state.position = PhysicalPosition { x, y };
        self.process_pointer_event(PointerEvent::Move(PointerUpdate {
            pointer: PRIMARY_TOUCH,
            current: self.pointer_state.clone(),
            coalesced: vec![],
            predicted: vec![],
        }))
    }

    /// Moves the touch point horizontally by `dx`.
    pub fn drag_by(&mut self, dx: f64) -> bool {
        let PhysicalPosition { x, y } = self.pointer_state.position;
        self.drag_to((x + dx, y))
    }

    /// Lifts the touch point.
    pub fn release(&mut self) -> bool {
        self.process_pointer_event(PointerEvent::Up(PointerButtonEvent {
            button: Some(PointerButton::Primary),
            pointer: PRIMARY_TOUCH,
            state: self.pointer_state.clone(),
        }))
    }

    /// Cancels the touch point, as a host does when the system takes over the gesture.
    pub fn cancel(&mut self) -> bool {
        self.process_pointer_event(PointerEvent::Cancel(PRIMARY_TOUCH))
    }

    /// Delivers animation frames covering `ms` milliseconds, for as long as the row asks for them.
    pub fn animate_ms(&mut self, ms: u64) {
        let mut remaining = Duration::from_millis(ms);
        while !remaining.is_zero() && self.host.take_anim_frame_request() {
            let interval = remaining.min(FRAME_INTERVAL);
            remaining -= interval;
            let interval_ns = u64::try_from(interval.as_nanos()).unwrap_or(u64::MAX);
            self.swipe.on_anim_frame(&mut self.host, interval_ns);
        }
    }

    // --- MARK: GETTERS

    /// The row under test.
    pub fn swipe(&self) -> &Swipe {
        &self.swipe
    }

    /// The row under test, mutably.
    ///
    /// For mutations which talk to the host, use [`parts_mut`](Self::parts_mut)
    /// or [`edit`](Self::edit).
    pub fn swipe_mut(&mut self) -> &mut Swipe {
        &mut self.swipe
    }

    /// The recording host.
    pub fn host(&self) -> &RecordingHost {
        &self.host
    }

    /// The recording host, mutably.
    pub fn host_mut(&mut self) -> &mut RecordingHost {
        &mut self.host
    }

    /// The row and its host, borrowed together.
    pub fn parts_mut(&mut self) -> (&mut Swipe, &mut RecordingHost) {
        (&mut self.swipe, &mut self.host)
    }

    /// Runs `f` with the row and its host.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut Swipe, &mut RecordingHost) -> R) -> R {
        f(&mut self.swipe, &mut self.host)
    }
}
