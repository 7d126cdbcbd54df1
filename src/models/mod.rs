// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Domain entities exchanged with the ConnectHealth API.
//!
//! Entities are plain value structs. Ids and timestamps are assigned by the
//! backend and treated as opaque strings; the client never fabricates them.

pub mod client;
pub mod exercise;
pub mod plan;
pub mod user;

pub use client::{Client, ClientProfile, ClientUpdate, NewClient};
pub use exercise::{Exercise, NewExercise};
pub use plan::{NewPlan, Plan, PlanUpdate};
pub use user::{AuthUser, Role, User};

use serde::{de::DeserializeOwned, Serialize};

/// Anything carrying a server-assigned id. Identity is equality of ids.
pub trait Entity {
    fn id(&self) -> &str;

    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// An entity exposed as a CRUD collection by the REST API.
pub trait Resource: Entity + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Create payload: every field except id and timestamps.
    type New: Serialize + Send + Sync;
    /// Partial update payload.
    type Update: Serialize + Send + Sync;

    /// Collection path relative to the API base URL, e.g. `/clients`.
    const COLLECTION: &'static str;

    /// Path of one entity. The id is percent-encoded as a single segment.
    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::COLLECTION, urlencoding::encode(id))
    }
}
