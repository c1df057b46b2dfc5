// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;
use tracing::{debug, trace, trace_span};

use crate::anim::{Easing, Tween};
use crate::core::{
    ActionId, PointerEvent, PointerId, Side, SwipeError, SwipeEvent, SwipeHost,
    swipe_event_from_pointer,
};
use crate::widgets::{ActionWidth, SwipeAction};
use crate::widgets::reveal::{place_actions, reveal_fraction};

/// What a [`Swipe`] row does when the pointer dragging it is released.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SnapPolicy {
    /// The row stays exactly where it was dropped.
    #[default]
    Off,
    /// The row settles fully open if the revealed side is open by more than
    /// this fraction (in `0..=1`) of its width, and settles closed otherwise.
    Threshold(f64),
}

/// A row which can be dragged sideways to reveal actions hidden behind its edges.
///
/// The row has a single content layer, and two ordered lists of [`SwipeAction`]s:
/// one anchored to its left edge, one to its right edge.
/// In each list, the first action added is the one closest to the content.
///
/// Dragging the content to the right reveals the left actions, and vice versa.
/// The row can't be dragged further than the summed width of the actions being revealed,
/// and can't switch sides without closing first.
/// A side without actions can't be revealed at all.
///
/// The row doesn't draw anything. After each call which may move things, it calls
/// [`SwipeHost::request_render`], and the host reads back [`content_frame`](Self::content_frame)
/// and the [`frame`](SwipeAction::frame) of each action.
#[derive(Debug)]
pub struct Swipe {
    bounds: Rect,
    content_offset: f64,
    left: SmallVec<[SwipeAction; 2]>,
    right: SmallVec<[SwipeAction; 2]>,
    max_left_reveal: f64,
    max_right_reveal: f64,
    gesture: Gesture,
    settle: Option<Settle>,
    snap_policy: SnapPolicy,
    settle_duration: Duration,
    settle_easing: Easing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Gesture {
    Idle,
    Tracking {
        pointer: PointerId,
        /// Position of the last processed event; moves are applied relative to it.
        reference_x: f64,
        /// `None` until the gesture moves the content away from the closed position.
        side: Option<Side>,
    },
}

#[derive(Clone, Debug, PartialEq)]
struct Settle {
    tween: Tween,
    /// The side being opened, or `None` when closing.
    target: Option<Side>,
}

// --- MARK: BUILDERS
impl Swipe {
    /// The default duration of settle animations.
    pub const DEFAULT_SETTLE_DURATION: Duration = Duration::from_millis(500);

    /// Creates an empty, closed row.
    pub fn new() -> Self {
        Self {
            bounds: Rect::ZERO,
            content_offset: 0.0,
            left: SmallVec::new(),
            right: SmallVec::new(),
            max_left_reveal: 0.0,
            max_right_reveal: 0.0,
            gesture: Gesture::Idle,
            settle: None,
            snap_policy: SnapPolicy::Off,
            settle_duration: Self::DEFAULT_SETTLE_DURATION,
            settle_easing: Easing::OutCirc,
        }
    }

    /// Builder-style method to set the bounds of the row.
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self.update_geometry();
        self
    }

    /// Builder-style method to add an action.
    pub fn with_action(mut self, action: SwipeAction) -> Self {
        self.insert_action(action);
        self.update_geometry();
        self
    }

    /// Builder-style method to set what happens when the row is released.
    ///
    /// Threshold values are clamped to `0.0..=1.0`.
    /// The default is [`SnapPolicy::Off`].
    pub fn snap_policy(mut self, policy: SnapPolicy) -> Self {
        self.snap_policy = sanitize_policy(policy);
        self
    }

    /// Builder-style method to set how long the row takes to settle open or closed.
    ///
    /// The default is [`DEFAULT_SETTLE_DURATION`](Self::DEFAULT_SETTLE_DURATION).
    pub fn settle_duration(mut self, duration: Duration) -> Self {
        self.settle_duration = duration;
        self
    }

    /// Builder-style method to set the easing curve of settle animations.
    ///
    /// The default is [`Easing::OutCirc`].
    pub fn settle_easing(mut self, easing: Easing) -> Self {
        self.settle_easing = easing;
        self
    }
}

impl Default for Swipe {
    fn default() -> Self {
        Self::new()
    }
}

fn sanitize_policy(policy: SnapPolicy) -> SnapPolicy {
    match policy {
        SnapPolicy::Threshold(threshold) if threshold.is_nan() => SnapPolicy::Threshold(0.5),
        SnapPolicy::Threshold(threshold) => SnapPolicy::Threshold(threshold.clamp(0.0, 1.0)),
        SnapPolicy::Off => SnapPolicy::Off,
    }
}

// --- MARK: GETTERS
impl Swipe {
    /// The bounds of the row, as last set by the host's layout pass.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The horizontal displacement of the content from its closed position.
    ///
    /// Positive while left actions are revealed, negative while right actions are revealed.
    pub fn content_offset(&self) -> f64 {
        self.content_offset
    }

    /// The frame of the content layer, in the same coordinate space as [`bounds`](Self::bounds).
    pub fn content_frame(&self) -> Rect {
        self.bounds + Vec2::new(self.content_offset, 0.0)
    }

    /// How far the content can move to reveal `side`: the summed width of its actions.
    pub fn max_reveal(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.max_left_reveal,
            Side::Right => self.max_right_reveal,
        }
    }

    /// The side currently revealed, if the row isn't closed.
    pub fn revealed_side(&self) -> Option<Side> {
        Side::from_offset(self.content_offset)
    }

    /// How far the revealed side is open, from `0.0` (closed) to `1.0` (fully open).
    pub fn reveal_fraction(&self) -> f64 {
        match self.revealed_side() {
            Some(side) => reveal_fraction(self.content_offset, self.max_reveal(side)),
            None => 0.0,
        }
    }

    /// Returns `true` if no action is visible.
    pub fn is_collapsed(&self) -> bool {
        self.content_offset == 0.0
    }

    /// The pointer currently dragging the row, if any.
    pub fn gesture_owner(&self) -> Option<PointerId> {
        match self.gesture {
            Gesture::Idle => None,
            Gesture::Tracking { pointer, .. } => Some(pointer),
        }
    }

    /// The side the current gesture is revealing.
    ///
    /// `None` when no pointer is down, or when the gesture hasn't moved the row open yet.
    pub fn dragging_side(&self) -> Option<Side> {
        match self.gesture {
            Gesture::Idle => None,
            Gesture::Tracking { side, .. } => side,
        }
    }

    /// Returns `true` while a settle animation is running.
    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// The current snap policy.
    pub fn current_snap_policy(&self) -> SnapPolicy {
        self.snap_policy
    }

    /// The actions of one side, starting with the one closest to the content.
    pub fn actions(&self, side: Side) -> impl Iterator<Item = &SwipeAction> + '_ {
        self.side_list(side).iter()
    }

    /// Returns the action with the given id.
    pub fn action(&self, id: ActionId) -> Option<&SwipeAction> {
        self.left.iter().chain(&self.right).find(|a| a.id() == id)
    }

    /// Returns the visible action under `pos`, if any.
    ///
    /// Actions of a side are painted in the order they were added, so while a side is
    /// partially open, outer actions cover the inner ones they overlap.
    /// Hit-testing follows the same order: the topmost action wins.
    ///
    /// Hosts use this to route taps to [`activate_action`](Self::activate_action).
    pub fn action_at(&self, pos: Point) -> Option<ActionId> {
        if !self.bounds.contains(pos) {
            return None;
        }
        self.left
            .iter()
            .rev()
            .chain(self.right.iter().rev())
            .find(|a| a.resolved_width() > 0.0 && a.frame().contains(pos))
            .map(SwipeAction::id)
    }
}

// --- MARK: MUTATORS
impl Swipe {
    /// Sets what happens when the row is released.
    pub fn set_snap_policy(&mut self, policy: SnapPolicy) {
        self.snap_policy = sanitize_policy(policy);
    }

    /// Sets how long the row takes to settle open or closed.
    ///
    /// Settle animations already running keep their duration.
    pub fn set_settle_duration(&mut self, duration: Duration) {
        self.settle_duration = duration;
    }

    /// Sets the easing curve of settle animations.
    pub fn set_settle_easing(&mut self, easing: Easing) {
        self.settle_easing = easing;
    }

    /// Sets the bounds of the row.
    ///
    /// Hosts call this from their layout pass, whenever the row is moved or resized.
    pub fn set_bounds(&mut self, host: &mut dyn SwipeHost, bounds: Rect) {
        if self.bounds == bounds {
            return;
        }
        self.bounds = bounds;
        self.update_geometry();
        host.request_render();
    }

    /// Adds an action to the row.
    ///
    /// The action is placed after the actions already on its side,
    /// i.e. further away from the content.
    pub fn add_action(&mut self, host: &mut dyn SwipeHost, action: SwipeAction) -> ActionId {
        let id = action.id();
        trace!(id = id.trace(), side = ?action.side(), "Swipe adding action");
        self.insert_action(action);
        self.update_geometry();
        host.request_render();
        id
    }

    /// Removes an action from the row and returns it.
    ///
    /// If the row was open further than it can be without this action, it is closed accordingly.
    pub fn remove_action(
        &mut self,
        host: &mut dyn SwipeHost,
        id: ActionId,
    ) -> Result<SwipeAction, SwipeError> {
        let Some((side, index)) = self.locate(id) else {
            debug!(id = id.trace(), "Swipe can't remove unknown action");
            return Err(SwipeError::ActionNotFound(id));
        };
        let action = self.side_list_mut(side).remove(index);
        trace!(id = id.trace(), ?side, "Swipe removed action");
        self.update_geometry();
        host.request_render();
        Ok(action)
    }

    /// Sets the side and width of one of the row's actions.
    ///
    /// An action moved to the other side is placed after the actions already there.
    pub fn configure_action(
        &mut self,
        host: &mut dyn SwipeHost,
        id: ActionId,
        side: Side,
        width: ActionWidth,
    ) -> Result<(), SwipeError> {
        self.edit_action(host, id, |action| action.configure(side, width))
    }

    /// Runs `f` on one of the row's actions, then updates the row's geometry.
    ///
    /// Any change `f` makes (including calling [`SwipeAction::configure`]) is taken into account.
    pub fn edit_action<R>(
        &mut self,
        host: &mut dyn SwipeHost,
        id: ActionId,
        f: impl FnOnce(&mut SwipeAction) -> R,
    ) -> Result<R, SwipeError> {
        let Some((side, index)) = self.locate(id) else {
            return Err(SwipeError::ActionNotFound(id));
        };
        let result = f(&mut self.side_list_mut(side)[index]);

        let new_side = self.side_list(side)[index].side();
        if new_side != side {
            trace!(id = id.trace(), from = ?side, to = ?new_side, "Swipe action changed side");
            let action = self.side_list_mut(side).remove(index);
            self.insert_action(action);
        }
        self.update_geometry();
        host.request_render();
        Ok(result)
    }

    /// Runs the activation callback of one of the row's actions.
    ///
    /// Returns `Ok(false)` if the action is disabled or has no callback.
    pub fn activate_action(&mut self, id: ActionId) -> Result<bool, SwipeError> {
        let (side, index) = self.locate(id).ok_or(SwipeError::ActionNotFound(id))?;
        Ok(self.side_list_mut(side)[index].activate())
    }

    /// Recomputes the widths of all actions, how far each side can be revealed,
    /// and where each action sits given the current content offset, then requests a render.
    ///
    /// Every mutator of `Swipe` does this already; it's idempotent.
    pub fn recompute_geometry(&mut self, host: &mut dyn SwipeHost) {
        self.update_geometry();
        host.request_render();
    }

    fn update_geometry(&mut self) {
        let row_width = self.bounds.width().max(0.0);
        self.max_left_reveal = self
            .left
            .iter_mut()
            .map(|action| action.resolve_width(row_width))
            .sum();
        self.max_right_reveal = self
            .right
            .iter_mut()
            .map(|action| action.resolve_width(row_width))
            .sum();

        let clamped = self.clamp_to_range(self.content_offset);
        if clamped != self.content_offset {
            debug!(
                from = self.content_offset,
                to = clamped,
                "Swipe offset clamped after geometry change"
            );
            self.content_offset = clamped;
            self.sync_gesture_side();
        }

        if let Some(settle) = &mut self.settle {
            let to = match settle.target {
                Some(Side::Left) => self.max_left_reveal,
                Some(Side::Right) => -self.max_right_reveal,
                None => 0.0,
            };
            settle.tween.retarget(to);
        }

        self.layout_actions();
        debug!(
            max_left = self.max_left_reveal,
            max_right = self.max_right_reveal,
            offset = self.content_offset,
            "Swipe geometry recomputed"
        );
    }
}

// --- MARK: SETTLE
impl Swipe {
    /// Animates the row to fully reveal `side`.
    ///
    /// Expanding a side without actions closes the row.
    pub fn expand(&mut self, host: &mut dyn SwipeHost, side: Side) {
        self.start_settle(host, Some(side));
    }

    /// Animates the row to its closed position.
    pub fn collapse(&mut self, host: &mut dyn SwipeHost) {
        self.start_settle(host, None);
    }

    /// Advances the running settle animation.
    ///
    /// Hosts call this on each animation frame requested through
    /// [`SwipeHost::request_anim_frame`], with the time elapsed since the previous frame.
    pub fn on_anim_frame(&mut self, host: &mut dyn SwipeHost, interval_ns: u64) {
        let Some(settle) = &mut self.settle else {
            return;
        };
        let value = settle.tween.advance(Duration::from_nanos(interval_ns));
        let finished = settle.tween.is_finished();
        let target = settle.target;

        self.content_offset = self.clamp_to_range(value);
        self.sync_gesture_side();
        if finished {
            debug!(?target, offset = self.content_offset, "Swipe settled");
            self.settle = None;
        } else {
            host.request_anim_frame();
        }
        self.layout_actions();
        host.request_render();
    }

    fn start_settle(&mut self, host: &mut dyn SwipeHost, target: Option<Side>) {
        let target = target.filter(|side| self.max_reveal(*side) > 0.0);
        let to = match target {
            Some(side) => side.open_offset(self.max_reveal(side)),
            None => 0.0,
        };
        if self.content_offset == to {
            self.settle = None;
            return;
        }

        let tween = Tween::new(
            self.content_offset,
            to,
            self.settle_duration,
            self.settle_easing,
        );
        if tween.is_finished() {
            self.settle = None;
            self.content_offset = to;
            self.sync_gesture_side();
            self.layout_actions();
            host.request_render();
            return;
        }

        debug!(?target, from = self.content_offset, to, "Swipe settling");
        self.settle = Some(Settle { tween, target });
        host.request_anim_frame();
    }

    fn cancel_settle(&mut self) {
        if let Some(settle) = self.settle.take() {
            debug!(
                target = ?settle.target,
                offset = self.content_offset,
                "Swipe settle interrupted by pointer"
            );
        }
    }

    fn apply_snap_policy(&mut self, host: &mut dyn SwipeHost) {
        let SnapPolicy::Threshold(threshold) = self.snap_policy else {
            return;
        };
        match self.revealed_side() {
            Some(side) if self.reveal_fraction() > threshold => self.expand(host, side),
            Some(_) => self.collapse(host),
            None => {}
        }
    }
}

// --- MARK: EVENTS
impl Swipe {
    /// Handles a pointer event from the host.
    ///
    /// Returns `true` if the row handled the event.
    pub fn on_pointer_event(&mut self, host: &mut dyn SwipeHost, event: &PointerEvent) -> bool {
        match swipe_event_from_pointer(event) {
            Some(event) => self.handle_event(host, event),
            None => false,
        }
    }

    /// Handles a [`SwipeEvent`].
    ///
    /// Returns `true` if the row handled the event.
    pub fn handle_event(&mut self, host: &mut dyn SwipeHost, event: SwipeEvent) -> bool {
        match event {
            SwipeEvent::Down { pointer, position } => self.pointer_down(host, pointer, position),
            SwipeEvent::Move { pointer, position } => self.pointer_move(host, pointer, position),
            SwipeEvent::Up { pointer } => self.pointer_up(host, pointer),
            SwipeEvent::Cancel { pointer } => self.pointer_cancel(host, pointer),
        }
    }

    /// Starts a gesture if `pos` is inside the row and no other pointer owns it.
    ///
    /// Returns `true` if the row now owns `pointer`.
    pub fn pointer_down(
        &mut self,
        host: &mut dyn SwipeHost,
        pointer: PointerId,
        pos: Point,
    ) -> bool {
        let _span = trace_span!("Swipe::pointer_down").entered();
        if let Some(owner) = self.gesture_owner()
            && owner != pointer
        {
            trace!("ignoring {pointer:?}, gesture owned by {owner:?}");
            return false;
        }
        if !host.hit_test(self.bounds, pos) {
            return false;
        }

        self.cancel_settle();
        host.capture_pointer(pointer);
        self.gesture = Gesture::Tracking {
            pointer,
            reference_x: pos.x,
            side: self.revealed_side(),
        };
        trace!("{pointer:?} pressed at {pos:?}");
        true
    }

    /// Drags the row by how far `pointer` moved since its previous event.
    ///
    /// Does nothing unless `pointer` owns the gesture.
    /// Returns `true` if the event was consumed.
    pub fn pointer_move(
        &mut self,
        host: &mut dyn SwipeHost,
        pointer: PointerId,
        pos: Point,
    ) -> bool {
        let Gesture::Tracking {
            pointer: owner,
            reference_x,
            ..
        } = self.gesture
        else {
            return false;
        };
        if owner != pointer {
            return false;
        }
        if !pos.x.is_finite() {
            return true;
        }

        let delta = pos.x - reference_x;
        let old_offset = self.content_offset;
        // Off the closed position, the side is whatever is already open.
        let side = if old_offset == 0.0 {
            Side::from_delta(delta)
        } else {
            Side::from_offset(old_offset)
        };
        let new_offset = match side {
            Some(side) => side.clamp_offset(old_offset + delta, self.max_reveal(side)),
            None => old_offset,
        };

        self.gesture = Gesture::Tracking {
            pointer,
            reference_x: pos.x,
            side: Side::from_offset(new_offset),
        };

        if new_offset != old_offset {
            self.cancel_settle();
            self.content_offset = new_offset;
            self.layout_actions();
            host.request_render();
            trace!(delta, offset = new_offset, "Swipe dragged");
        }
        true
    }

    /// Ends the gesture of `pointer`, then applies the [`SnapPolicy`].
    ///
    /// Does nothing unless `pointer` owns the gesture.
    /// Returns `true` if the event was consumed.
    pub fn pointer_up(&mut self, host: &mut dyn SwipeHost, pointer: PointerId) -> bool {
        if self.gesture_owner() != Some(pointer) {
            return false;
        }
        host.release_pointer(pointer);
        self.gesture = Gesture::Idle;
        trace!(offset = self.content_offset, "{pointer:?} released");
        self.apply_snap_policy(host);
        true
    }

    /// Handles the host losing track of `pointer`, exactly like [`pointer_up`](Self::pointer_up).
    pub fn pointer_cancel(&mut self, host: &mut dyn SwipeHost, pointer: PointerId) -> bool {
        self.pointer_up(host, pointer)
    }
}

// --- MARK: HELPERS
impl Swipe {
    fn side_list(&self, side: Side) -> &SmallVec<[SwipeAction; 2]> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn side_list_mut(&mut self, side: Side) -> &mut SmallVec<[SwipeAction; 2]> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn insert_action(&mut self, action: SwipeAction) {
        self.side_list_mut(action.side()).push(action);
    }

    fn locate(&self, id: ActionId) -> Option<(Side, usize)> {
        [Side::Left, Side::Right].into_iter().find_map(|side| {
            self.side_list(side)
                .iter()
                .position(|a| a.id() == id)
                .map(|index| (side, index))
        })
    }

    /// Keeps the side of a held gesture in line with an offset moved by a settle or a
    /// geometry change.
    fn sync_gesture_side(&mut self) {
        if let Gesture::Tracking { side, .. } = &mut self.gesture {
            *side = Side::from_offset(self.content_offset);
        }
    }

    /// Clamps `offset` into the range of the side it's on.
    fn clamp_to_range(&self, offset: f64) -> f64 {
        match Side::from_offset(offset) {
            Some(side) => side.clamp_offset(offset, self.max_reveal(side)),
            None => 0.0,
        }
    }

    fn layout_actions(&mut self) {
        let fraction = self.reveal_fraction();
        let (left_fraction, right_fraction) = match self.revealed_side() {
            Some(Side::Left) => (fraction, 0.0),
            Some(Side::Right) => (0.0, fraction),
            None => (0.0, 0.0),
        };
        place_actions(
            &mut self.left,
            Side::Left,
            self.bounds,
            self.max_left_reveal,
            left_fraction,
        );
        place_actions(
            &mut self.right,
            Side::Right,
            self.bounds,
            self.max_right_reveal,
            right_fraction,
        );
    }
}
