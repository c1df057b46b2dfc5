// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

//! Configures a default [`tracing`] subscriber for hosts of swipeable rows.
//!
//! Rows log gesture decisions at [`TRACE`](tracing::Level::TRACE), and geometry
//! and settle changes at [`DEBUG`](tracing::Level::DEBUG).
//! The default filter shows `DEBUG` messages in debug builds and `INFO` messages in
//! release builds. It can be overridden with `RUST_LOG`, e.g. `RUST_LOG=cupertino=trace`.
//!
//! Setting `CUPERTINO_LOG_FILE` to a path also writes every message, unfiltered, to that file.
//!
//! If a `tracing` subscriber is already set, these functions leave it in place.

use std::error::Error;
use std::fmt;
use std::fs::File;

use time::macros::format_description;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

/// Environment variable naming a file which receives unfiltered logs.
const LOG_FILE_VAR: &str = "CUPERTINO_LOG_FILE";

/// Constructs a default tracing subscriber with a given `default_level` filter.
///
/// Returns the subscriber, and the error in case of a (recoverable) error
/// such as an unparsable `RUST_LOG` or an unwritable log file.
pub fn default_tracing_subscriber(
    default_level: LevelFilter,
) -> (impl Subscriber, Option<Box<dyn Error>>) {
    let mut errors: Vec<String> = Vec::new();

    let env_filter_builder = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("RUST_LOG");
    if let Err(err) = env_filter_builder.from_env() {
        errors.push(format!("failed to parse RUST_LOG environment variable: {err:#}"));
    }
    let env_filter = env_filter_builder.from_env_lossy();

    // Gesture sessions are short: time of day with millisecond precision is enough.
    let timer = UtcTime::new(format_description!(
        "[hour repr:24]:[minute]:[second].[subsecond digits:3]Z"
    ));
    let console_layer = tracing_subscriber::fmt::layer()
        .with_timer(timer.clone())
        .with_target(false)
        .with_filter(env_filter);

    let log_file_layer = match std::env::var_os(LOG_FILE_VAR) {
        Some(path) => match File::create(&path) {
            Ok(file) => Some(
                tracing_subscriber::fmt::layer()
                    .with_timer(timer)
                    .with_writer(file)
                    .with_ansi(false),
            ),
            Err(err) => {
                errors.push(format!(
                    "failed to create log file {}: {err}",
                    path.to_string_lossy()
                ));
                None
            }
        },
        None => None,
    };

    let registry = tracing_subscriber::registry()
        .with(console_layer)
        .with(log_file_layer);

    let err: Option<Box<dyn Error>> = (!errors.is_empty()).then(|| errors.join("; ").into());
    (registry, err)
}

/// An Error indicating that a tracing subscriber has been set before.
#[derive(Debug)]
pub struct TracingSubscriberHasBeenSetError;

impl fmt::Display for TracingSubscriberHasBeenSetError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.pad("A tracing subscriber has been set before.")
    }
}

impl Error for TracingSubscriberHasBeenSetError {}

fn verify_subscriber_has_not_been_set() -> Result<(), TracingSubscriberHasBeenSetError> {
    // `has_been_set` is doc(hidden), but tracing itself relies on it for the whole 0.1 series.
    if tracing_core::dispatcher::has_been_set() {
        return Err(TracingSubscriberHasBeenSetError);
    }
    Ok(())
}

fn init_with_level(default_level: LevelFilter) -> Result<(), TracingSubscriberHasBeenSetError> {
    verify_subscriber_has_not_been_set()?;

    let (subscriber, err) = default_tracing_subscriber(default_level);

    // Another thread may have won the race since the check above; that's fine.
    let _ = tracing::subscriber::set_global_default(subscriber);
    if let Some(err) = err {
        tracing::error!(err, "Logging init had recoverable error");
    }
    Ok(())
}

/// Initialise tracing with a default subscriber for a unit test.
///
/// Only warnings and errors reach the console, unless `RUST_LOG` says otherwise.
pub fn try_init_test_tracing() -> Result<(), TracingSubscriberHasBeenSetError> {
    init_with_level(LevelFilter::WARN)
}

/// Initialise tracing with a default subscriber for an application.
pub fn try_init_tracing() -> Result<(), TracingSubscriberHasBeenSetError> {
    // DEBUG logs a handful of lines per gesture; INFO only noteworthy events.
    let default_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    init_with_level(default_level)
}
