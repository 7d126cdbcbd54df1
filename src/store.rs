// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication store.
//!
//! Holds the in-memory session and keeps the shared [`ApiClient`] bearer
//! token in step with it. State is published through a `watch` channel so
//! the navigation guard can react to every change. Nothing is persisted.

use crate::api::ApiClient;
use crate::models::AuthUser;
use std::fmt;
use tokio::sync::watch;

/// Snapshot of the session.
///
/// `is_authenticated` is true exactly when `access_token` is set; both
/// mutators on [`AuthStore`] replace the whole value at once.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub is_authenticated: bool,
}

impl fmt::Debug for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |token: &Option<String>| token.as_ref().map(|_| "<redacted>");
        f.debug_struct("AuthState")
            .field("user", &self.user)
            .field("access_token", &redact(&self.access_token))
            .field("refresh_token", &redact(&self.refresh_token))
            .field("is_authenticated", &self.is_authenticated)
            .finish()
    }
}

/// Process-wide session state, owned by the application context.
pub struct AuthStore {
    client: ApiClient,
    state: watch::Sender<AuthState>,
}

impl AuthStore {
    pub fn new(client: ApiClient) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self { client, state }
    }

    /// Start a session: attach the bearer token to the shared client, then
    /// replace the state.
    pub fn set_auth(&self, user: AuthUser, access_token: String, refresh_token: String) {
        self.client.set_auth_token(Some(&access_token));
        tracing::info!(user_id = %user.id, "Session started");

        self.state.send_replace(AuthState {
            user: Some(user),
            access_token: Some(access_token),
            refresh_token: Some(refresh_token),
            is_authenticated: true,
        });
    }

    /// End the session: drop the bearer token, then reset the state.
    pub fn clear_auth(&self) {
        self.client.set_auth_token(None);
        self.state.send_replace(AuthState::default());
        tracing::info!("Session cleared");
    }

    /// Current state.
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.state.borrow().refresh_token.clone()
    }

    /// Receiver notified on every `set_auth` / `clear_auth`.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }
}
