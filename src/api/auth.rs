// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication endpoints.
//!
//! Unlike the CRUD collections, the auth routes live under `/auth/*` and
//! wrap every payload in a `{ "data": ... }` envelope.

use super::http::ApiClient;
use crate::error::Result;
use crate::models::AuthUser;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

const SIGN_IN_PATH: &str = "/auth/login";
const SIGN_UP_PATH: &str = "/auth/register";
const REFRESH_PATH: &str = "/auth/refresh";

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct SignInRequest {
    #[validate(custom(function = "not_blank"))]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct SignUpRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// Token pair issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: u64,
}

/// Payload of a successful sign-in or sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub user: AuthUser,
    pub tokens: AuthTokens,
}

/// Payload of a successful refresh. The user may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefreshResponse {
    #[serde(default)]
    pub user: Option<AuthUser>,
    pub tokens: AuthTokens,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

fn not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Client for the `/auth` routes.
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn sign_in(&self, request: &SignInRequest) -> Result<AuthResponse> {
        let envelope: Envelope<AuthResponse> =
            self.client.post_json(SIGN_IN_PATH, request).await?;
        Ok(envelope.data)
    }

    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthResponse> {
        let envelope: Envelope<AuthResponse> =
            self.client.post_json(SIGN_UP_PATH, request).await?;
        Ok(envelope.data)
    }

    /// Exchange a refresh token for a new token pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse> {
        let envelope: Envelope<RefreshResponse> = self
            .client
            .post_json(REFRESH_PATH, &RefreshRequest { refresh_token })
            .await?;
        Ok(envelope.data)
    }
}
