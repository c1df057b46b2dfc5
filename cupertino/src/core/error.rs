// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;

use crate::core::ActionId;

/// Errors returned by the [`Swipe`](crate::widgets::Swipe) mutation API.
///
/// None of these are fatal: the operation that returned them left the row untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeError {
    /// The row has no action with this id.
    ActionNotFound(ActionId),
}

impl fmt::Display for SwipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActionNotFound(id) => write!(f, "swipe row has no action with id {id}"),
        }
    }
}

impl Error for SwipeError {}
