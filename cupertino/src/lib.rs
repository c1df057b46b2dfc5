// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

//! Cupertino provides iOS-style interaction widgets for retained-mode GUIs.
//!
//! The centrepiece is [`Swipe`][widgets::Swipe], the swipeable row found in iOS table views:
//! dragging the row sideways reveals [`SwipeAction`][widgets::SwipeAction] panels tucked
//! behind its left or right edge.
//!
//! Cupertino does not own a window, a renderer or a widget tree.
//! It is meant to be embedded in a host framework, which talks to it through:
//!
//! - [`SwipeHost`][core::SwipeHost], the trait the host implements so the row can
//!   capture pointers, hit-test and schedule animation frames.
//! - Pointer events, either as [`ui-events`][ui_events] [`PointerEvent`][core::PointerEvent]s
//!   or through the primitive `pointer_down`/`pointer_move`/`pointer_up` methods.
//! - [`Swipe::set_bounds`][widgets::Swipe::set_bounds], called from the host's layout pass.
//!
//! After every call, the host reads back the frames of the content layer and of each action
//! panel and positions its own widgets accordingly.
//!
//! # Gesture model
//!
//! A row has one gesture at a time, owned by the pointer that pressed it.
//! Pointer moves are tracked incrementally: each move is applied relative to the previous one,
//! so a drag that hits the fully-open limit reverses immediately.
//! The first movement away from the closed position picks the side being revealed;
//! the other side is unreachable until the row is closed again.
//!
//! Releasing the pointer leaves the row where it is, unless a [`SnapPolicy`][widgets::SnapPolicy]
//! asks it to settle open or closed.
//! Settling is animated through the [`anim`] module, driven by the host's animation frames.
//!
//! # Testing
//!
//! With the `testing` feature, the `testing` module provides a `SwipeHarness` which drives a row
//! headlessly and records every request the row makes to its host.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use {dpi, kurbo, ui_events};

pub mod anim;
pub mod app;
pub mod core;
#[cfg(any(test, feature = "testing"))]
#[cfg_attr(docsrs, doc(cfg(feature = "testing")))]
pub mod testing;
pub mod widgets;

#[cfg(test)]
mod tests;
