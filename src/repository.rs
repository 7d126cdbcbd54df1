// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Repository ports for the CRUD resources.
//!
//! The application layer depends on these traits; [`CrudApi`] is the one
//! concrete adapter. No retry policy is declared here; callers decide.

use crate::api::CrudApi;
use crate::error::{ApiError, Result};
use crate::models::{Client, Plan, Resource};
use async_trait::async_trait;

/// CRUD contract over one resource collection.
#[async_trait]
pub trait Repository<E: Resource>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<E>>;

    /// `Ok(None)` when the backend reports the id as unknown.
    async fn find_by_id(&self, id: &str) -> Result<Option<E>>;

    async fn create(&self, data: &E::New) -> Result<E>;

    async fn update(&self, id: &str, data: &E::Update) -> Result<E>;

    async fn delete(&self, id: &str) -> Result<()>;
}

/// Port for client management.
pub trait ClientRepository: Repository<Client> {}
impl<T: Repository<Client> + ?Sized> ClientRepository for T {}

/// Port for training plans.
pub trait PlanRepository: Repository<Plan> {}
impl<T: Repository<Plan> + ?Sized> PlanRepository for T {}

#[async_trait]
impl<R: Resource> Repository<R> for CrudApi<R> {
    async fn find_all(&self) -> Result<Vec<R>> {
        self.get_all().await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<R>> {
        match self.get_by_id(id).await {
            Ok(entity) => Ok(Some(entity)),
            Err(ApiError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create(&self, data: &R::New) -> Result<R> {
        CrudApi::create(self, data).await
    }

    async fn update(&self, id: &str, data: &R::Update) -> Result<R> {
        CrudApi::update(self, id, data).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        CrudApi::delete(self, id).await
    }
}
