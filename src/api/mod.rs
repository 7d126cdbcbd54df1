// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Infrastructure layer: HTTP adapters for the ConnectHealth REST API.

pub mod auth;
pub mod crud;
pub mod http;

pub use auth::{AuthApi, AuthResponse, AuthTokens, RefreshResponse, SignInRequest, SignUpRequest};
pub use crud::{ClientApi, CrudApi, PlanApi};
pub use http::ApiClient;
