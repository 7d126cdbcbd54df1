// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Screen-facing façades.
//!
//! Each façade combines store state, API calls and its own `is_loading` /
//! `error` flags. Flags are per instance and never shared.

pub mod auth;
pub mod resource;

pub use auth::AuthFacade;
pub use resource::{ClientsFacade, PlansFacade, ResourceFacade};

use crate::error::{ApiError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Counts one in-flight call for its lifetime. Dropping it releases the
/// count on every exit path, including cancellation.
struct LoadingGuard<'a>(&'a AtomicUsize);

impl<'a> LoadingGuard<'a> {
    fn start(in_flight: &'a AtomicUsize) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self(in_flight)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Per-instance transient flags.
#[derive(Default)]
struct Status {
    /// Calls currently running; loading while non-zero.
    in_flight: AtomicUsize,
    error: Mutex<Option<String>>,
}

impl Status {
    fn begin(&self) -> LoadingGuard<'_> {
        self.set_error(None);
        LoadingGuard::start(&self.in_flight)
    }

    fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    fn error(&self) -> Option<String> {
        self.error
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_error(&self, message: Option<String>) {
        *self
            .error
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = message;
    }

    /// Record a failure's message (or `fallback`) and hand the failure back.
    fn record<T>(&self, result: Result<T>, fallback: &str) -> Result<T> {
        result.map_err(|e: ApiError| {
            let message = e.own_message().unwrap_or_else(|| fallback.to_string());
            tracing::debug!(error = %e, message = %message, "Operation failed");
            self.set_error(Some(message));
            e
        })
    }
}
