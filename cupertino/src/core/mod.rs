// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

//! Basic types and traits shared between Cupertino and its host framework.

mod action_id;
mod error;
mod events;
mod host;
mod side;

pub use action_id::ActionId;
pub use error::SwipeError;
pub use events::{SwipeEvent, swipe_event_from_pointer};
pub use host::SwipeHost;
pub use side::Side;

pub use ui_events::pointer::{
    PointerButton, PointerButtonEvent, PointerEvent, PointerId, PointerInfo, PointerState,
    PointerType, PointerUpdate,
};
