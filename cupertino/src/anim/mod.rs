// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

//! Frame-driven animation primitives.
//!
//! Animations never sleep or spawn threads. The host calls `on_anim_frame` with the time
//! elapsed since the previous frame, and the animation advances by that much.

mod easing;
mod tween;

pub use easing::Easing;
pub use tween::Tween;
