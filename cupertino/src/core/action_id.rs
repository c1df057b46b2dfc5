// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::field::DisplayValue;

/// A unique identifier for a single [`SwipeAction`](crate::widgets::SwipeAction).
///
/// Ids are allocated when the action is created, and stay the same
/// when the action is moved from one side of a row to the other.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ActionId(NonZeroU64);

impl ActionId {
    /// Allocates a new, unique `ActionId`.
    pub(crate) fn next() -> Self {
        static ACTION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);
        let id = ACTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        // The counter starts at one and would need 2^64 allocations to wrap.
        Self(NonZeroU64::new(id).unwrap_or(NonZeroU64::MIN))
    }

    /// Returns the integer value of this id.
    pub fn to_raw(self) -> u64 {
        self.0.get()
    }

    /// A serialized representation of the `ActionId` for debugging purposes.
    pub fn trace(self) -> DisplayValue<Self> {
        tracing::field::display(self)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
