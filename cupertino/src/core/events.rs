// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer input, as seen by a swipeable row.

use kurbo::Point;
use ui_events::pointer::{
    PointerButtonEvent, PointerEvent, PointerId, PointerInfo, PointerState, PointerUpdate,
};

/// The subset of pointer input a swipeable row reacts to.
///
/// Positions are in the same coordinate space as the row's bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeEvent {
    /// A pointer was pressed.
    Down {
        /// The pointer that was pressed.
        pointer: PointerId,
        /// Where it was pressed.
        position: Point,
    },
    /// A pointer moved.
    Move {
        /// The pointer that moved.
        pointer: PointerId,
        /// Its new position.
        position: Point,
    },
    /// A pointer was released.
    Up {
        /// The pointer that was released.
        pointer: PointerId,
    },
    /// The host lost track of a pointer, e.g. because it left the window.
    ///
    /// Rows handle this exactly like [`SwipeEvent::Up`].
    Cancel {
        /// The pointer that disappeared.
        pointer: PointerId,
    },
}

impl SwipeEvent {
    /// Returns the pointer this event is about.
    pub fn pointer(&self) -> PointerId {
        match self {
            Self::Down { pointer, .. }
            | Self::Move { pointer, .. }
            | Self::Up { pointer }
            | Self::Cancel { pointer } => *pointer,
        }
    }
}

// Pointers without an id (e.g. some mice) are treated as the primary pointer.
fn pointer_id(info: &PointerInfo) -> PointerId {
    info.pointer_id.unwrap_or(PointerId::PRIMARY)
}

// TODO: Account for the scale factor once hosts report logical positions.
fn position(state: &PointerState) -> Point {
    Point::new(state.position.x, state.position.y)
}

/// Converts a [`ui-events`](ui_events) pointer event into a [`SwipeEvent`].
///
/// Returns `None` for events a row doesn't react to (hover, scroll, gestures).
pub fn swipe_event_from_pointer(event: &PointerEvent) -> Option<SwipeEvent> {
    match event {
        PointerEvent::Down(PointerButtonEvent { pointer, state, .. }) => Some(SwipeEvent::Down {
            pointer: pointer_id(pointer),
            position: position(state),
        }),
        PointerEvent::Move(PointerUpdate {
            pointer, current, ..
        }) => Some(SwipeEvent::Move {
            pointer: pointer_id(pointer),
            position: position(current),
        }),
        PointerEvent::Up(PointerButtonEvent { pointer, .. }) => Some(SwipeEvent::Up {
            pointer: pointer_id(pointer),
        }),
        PointerEvent::Cancel(pointer) => Some(SwipeEvent::Cancel {
            pointer: pointer_id(pointer),
        }),
        _ => None,
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use dpi::PhysicalPosition;
    use ui_events::pointer::{PointerButton, PointerType};

    use super::*;

    const TOUCH: PointerInfo = PointerInfo {
        pointer_id: Some(PointerId::PRIMARY),
        persistent_device_id: None,
        pointer_type: PointerType::Touch,
    };

    fn state_at(x: f64, y: f64) -> PointerState {
        PointerState {
            position: PhysicalPosition::new(x, y),
            ..PointerState::default()
        }
    }

    #[test]
    fn down_move_up_are_converted() {
        let down = PointerEvent::Down(PointerButtonEvent {
            button: Some(PointerButton::Primary),
            pointer: TOUCH,
            state: state_at(10.0, 4.0),
        });
        assert_eq!(
            swipe_event_from_pointer(&down),
            Some(SwipeEvent::Down {
                pointer: PointerId::PRIMARY,
                position: Point::new(10.0, 4.0),
            })
        );

        let moved = PointerEvent::Move(PointerUpdate {
            pointer: TOUCH,
            current: state_at(25.0, 4.0),
            coalesced: vec![],
            predicted: vec![],
        });
        assert_matches!(
            swipe_event_from_pointer(&moved),
            Some(SwipeEvent::Move { position, .. }) if position.x == 25.0
        );

        let up = PointerEvent::Up(PointerButtonEvent {
            button: Some(PointerButton::Primary),
            pointer: TOUCH,
            state: state_at(25.0, 4.0),
        });
        assert_matches!(swipe_event_from_pointer(&up), Some(SwipeEvent::Up { .. }));
    }

    #[test]
    fn cancel_and_missing_ids() {
        let anonymous = PointerInfo {
            pointer_id: None,
            ..TOUCH
        };
        let cancel = PointerEvent::Cancel(anonymous);
        let event = swipe_event_from_pointer(&cancel);
        assert_matches!(event, Some(SwipeEvent::Cancel { .. }));
        assert_eq!(event.map(|e| e.pointer()), Some(PointerId::PRIMARY));

        assert_eq!(swipe_event_from_pointer(&PointerEvent::Leave(TOUCH)), None);
    }
}
