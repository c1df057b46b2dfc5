// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Point, Rect};
use ui_events::pointer::PointerId;

/// The services a host framework provides to a swipeable row.
///
/// Every method of [`Swipe`](crate::widgets::Swipe) which may change what is on screen
/// takes a `&mut dyn SwipeHost`, and reports through it what the host needs to do next.
///
/// All methods are called synchronously from the thread dispatching events.
pub trait SwipeHost {
    /// Returns `true` if `pos` should be considered inside a row with the given `bounds`.
    ///
    /// The default implementation is a plain point-in-rect test.
    /// Hosts which clip rows (e.g. inside a scroll view) can override this.
    fn hit_test(&self, bounds: Rect, pos: Point) -> bool {
        bounds.contains(pos)
    }

    /// Routes all further events of `pointer` to the row, until it is released.
    fn capture_pointer(&mut self, pointer: PointerId);

    /// Ends a capture started with [`capture_pointer`](Self::capture_pointer).
    fn release_pointer(&mut self, pointer: PointerId);

    /// Asks the host to call [`Swipe::on_anim_frame`](crate::widgets::Swipe::on_anim_frame)
    /// on the next frame.
    fn request_anim_frame(&mut self);

    /// Notifies the host that the content layer or an action panel moved.
    ///
    /// The host should read back the new frames before painting.
    fn request_render(&mut self);
}
