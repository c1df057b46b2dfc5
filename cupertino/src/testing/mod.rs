// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

//! Helpers for testing swipeable rows without a real host.
//!
//! [`SwipeHarness`] owns a [`Swipe`](crate::widgets::Swipe) and a [`RecordingHost`],
//! and simulates a single touch pointer pressing, dragging and releasing the row.

mod harness;
mod recording_host;

pub use harness::{PRIMARY_TOUCH, SwipeHarness};
pub use recording_host::{HostRecord, RecordingHost};
