// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

//! Process-level setup for hosts embedding swipeable rows.

mod tracing_backend;

pub use tracing_backend::{
    TracingSubscriberHasBeenSetError, default_tracing_subscriber, try_init_test_tracing,
    try_init_tracing,
};
