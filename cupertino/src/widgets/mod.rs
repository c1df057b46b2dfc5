// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

//! The swipeable row and its actions.

mod reveal;
mod swipe;
mod swipe_action;

pub use swipe::{SnapPolicy, Swipe};
pub use swipe_action::{ActionWidth, SwipeAction};
