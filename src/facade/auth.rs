// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication façade used by the sign-in and sign-up screens.

use super::Status;
use crate::api::{AuthApi, SignInRequest, SignUpRequest};
use crate::error::{ApiError, Result};
use crate::models::AuthUser;
use crate::store::AuthStore;
use std::sync::Arc;
use validator::Validate;

const SIGN_IN_FAILED: &str = "Failed to sign in";
const SIGN_UP_FAILED: &str = "Failed to sign up";
const REFRESH_FAILED: &str = "Failed to refresh session";

/// Sign-in / sign-up / sign-out over the shared [`AuthStore`].
///
/// Failures are reported twice: the message is kept in [`error`](Self::error)
/// and the error is returned to the caller.
pub struct AuthFacade {
    api: AuthApi,
    store: Arc<AuthStore>,
    status: Status,
}

impl AuthFacade {
    pub fn new(api: AuthApi, store: Arc<AuthStore>) -> Self {
        Self {
            api,
            store,
            status: Status::default(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.status.error()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.store.state().user
    }

    /// Sign in. Blank fields are rejected without touching the network.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<()> {
        let _loading = self.status.begin();

        let request = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let result = match request.validate() {
            Ok(()) => self.api.sign_in(&request).await,
            Err(e) => Err(e.into()),
        };

        let response = self.status.record(result, SIGN_IN_FAILED)?;
        self.store.set_auth(
            response.user,
            response.tokens.access_token,
            response.tokens.refresh_token,
        );
        Ok(())
    }

    /// Register a new account. Name and email are trimmed; the password is
    /// sent as typed.
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<()> {
        let _loading = self.status.begin();

        let request = SignUpRequest {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let result = match request.validate() {
            Ok(()) => self.api.sign_up(&request).await,
            Err(e) => Err(e.into()),
        };

        let response = self.status.record(result, SIGN_UP_FAILED)?;
        self.store.set_auth(
            response.user,
            response.tokens.access_token,
            response.tokens.refresh_token,
        );
        Ok(())
    }

    /// Exchange the stored refresh token for a new token pair.
    pub async fn refresh(&self) -> Result<()> {
        let _loading = self.status.begin();

        let state = self.store.state();
        let result = match state.refresh_token.as_deref() {
            Some(token) => self.api.refresh(token).await,
            None => Err(ApiError::NotAuthenticated),
        };
        let response = self.status.record(result, REFRESH_FAILED)?;

        let user = self.status.record(
            response
                .user
                .or(state.user)
                .ok_or(ApiError::NotAuthenticated),
            REFRESH_FAILED,
        )?;
        self.store.set_auth(
            user,
            response.tokens.access_token,
            response.tokens.refresh_token,
        );
        Ok(())
    }

    pub fn sign_out(&self) {
        self.store.clear_auth();
    }
}
