// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

use std::collections::VecDeque;

use ui_events::pointer::PointerId;

use crate::core::SwipeHost;

/// A call a row made on its [`SwipeHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostRecord {
    /// [`SwipeHost::capture_pointer`].
    Capture(PointerId),
    /// [`SwipeHost::release_pointer`].
    Release(PointerId),
    /// [`SwipeHost::request_anim_frame`].
    AnimFrame,
    /// [`SwipeHost::request_render`].
    Render,
}

/// A [`SwipeHost`] which records every call made on it.
///
/// It tracks pointer capture like a real host would, and whether an animation
/// frame is pending.
#[derive(Debug, Default)]
pub struct RecordingHost {
    records: VecDeque<HostRecord>,
    captured: Option<PointerId>,
    anim_frame_requested: bool,
}

impl RecordingHost {
    /// Creates a host with no records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the oldest record not yet consumed.
    pub fn next_record(&mut self) -> Option<HostRecord> {
        self.records.pop_front()
    }

    /// Consumes all pending records.
    pub fn take_records(&mut self) -> Vec<HostRecord> {
        self.records.drain(..).collect()
    }

    /// Discards all pending records.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// The pointer currently captured by the row, if any.
    pub fn captured_pointer(&self) -> Option<PointerId> {
        self.captured
    }

    /// Returns `true` if the row holds a pointer capture.
    pub fn is_captured(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns `true` if the row asked for an animation frame which wasn't delivered yet.
    pub fn anim_frame_requested(&self) -> bool {
        self.anim_frame_requested
    }

    /// Marks the pending animation frame as delivered, and returns whether there was one.
    pub(crate) fn take_anim_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.anim_frame_requested)
    }
}

impl SwipeHost for RecordingHost {
    fn capture_pointer(&mut self, pointer: PointerId) {
        self.captured = Some(pointer);
        self.records.push_back(HostRecord::Capture(pointer));
    }

    fn release_pointer(&mut self, pointer: PointerId) {
        if self.captured == Some(pointer) {
            self.captured = None;
        }
        self.records.push_back(HostRecord::Release(pointer));
    }

    fn request_anim_frame(&mut self) {
        self.anim_frame_requested = true;
        self.records.push_back(HostRecord::AnimFrame);
    }

    fn request_render(&mut self) {
        self.records.push_back(HostRecord::Render);
    }
}
