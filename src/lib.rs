// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! ConnectHealth: client library for the ConnectHealth coaching platform.
//!
//! Connects personal trainers to their clients: authentication, client
//! management and training plans over the ConnectHealth REST API, plus the
//! session store and route guard the app shell is built on.

pub mod api;
pub mod config;
pub mod error;
pub mod facade;
pub mod models;
pub mod navigation;
pub mod query;
pub mod repository;
pub mod store;

use api::{ApiClient, AuthApi, ClientApi, PlanApi};
use config::Config;
use facade::{AuthFacade, ClientsFacade, PlansFacade};
use navigation::{Navigator, Route};
use query::QueryPolicy;
use std::sync::Arc;
use store::AuthStore;

/// Shared application context, built once at startup.
///
/// Owns the single [`ApiClient`] (and so the bearer token) and the
/// [`AuthStore`]. Façades and the navigator are created from it.
pub struct AppContext {
    pub config: Config,
    pub api: ApiClient,
    pub auth_store: Arc<AuthStore>,
    pub auth_api: AuthApi,
    pub clients: ClientApi,
    pub plans: PlanApi,
}

impl AppContext {
    pub fn new(config: Config) -> error::Result<Self> {
        let api = ApiClient::new(&config)?;
        tracing::debug!(base_url = api.base_url(), "API client ready");

        Ok(Self {
            auth_store: Arc::new(AuthStore::new(api.clone())),
            auth_api: AuthApi::new(api.clone()),
            clients: ClientApi::new(api.clone()),
            plans: PlanApi::new(api.clone()),
            api,
            config,
        })
    }

    pub fn auth(&self) -> AuthFacade {
        AuthFacade::new(self.auth_api.clone(), self.auth_store.clone())
    }

    pub fn clients_facade(&self) -> ClientsFacade {
        ClientsFacade::new(
            Arc::new(self.clients.clone()),
            QueryPolicy::from_config(&self.config),
        )
    }

    pub fn plans_facade(&self) -> PlansFacade {
        PlansFacade::new(
            Arc::new(self.plans.clone()),
            QueryPolicy::from_config(&self.config),
        )
    }

    /// Navigator starting at `initial`, already reconciled against the
    /// current session.
    pub fn navigator(&self, initial: Route) -> Navigator {
        Navigator::new(self.auth_store.subscribe(), initial)
    }
}
