// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! List/detail/mutation façade for the client and plan screens.

use super::Status;
use crate::error::Result;
use crate::models::{Client, Plan, Resource};
use crate::query::{QueryCache, QueryPolicy};
use crate::repository::Repository;
use std::sync::{Arc, Mutex};

/// Façade over one repository port.
///
/// Reads go through the [`QueryPolicy`]; the list is served from cache
/// while fresh. Mutations run once and invalidate the cached list.
pub struct ResourceFacade<E: Resource> {
    repo: Arc<dyn Repository<E>>,
    policy: QueryPolicy,
    cache: Mutex<QueryCache<Vec<E>>>,
    status: Status,
}

/// Clients screen.
pub type ClientsFacade = ResourceFacade<Client>;

/// Plans screen.
pub type PlansFacade = ResourceFacade<Plan>;

impl<E: Resource> ResourceFacade<E> {
    pub fn new(repo: Arc<dyn Repository<E>>, policy: QueryPolicy) -> Self {
        Self {
            repo,
            policy,
            cache: Mutex::new(QueryCache::default()),
            status: Status::default(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.status.error()
    }

    fn cache(&self) -> std::sync::MutexGuard<'_, QueryCache<Vec<E>>> {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn label() -> &'static str {
        E::COLLECTION.trim_start_matches('/')
    }

    /// The list, from cache when fresh.
    pub async fn items(&self) -> Result<Vec<E>> {
        let cached = self.cache().fresh(self.policy.stale_time);
        match cached {
            Some(items) => Ok(items),
            None => self.refetch().await,
        }
    }

    /// Fetch the list from the backend, bypassing the cache.
    pub async fn refetch(&self) -> Result<Vec<E>> {
        let _loading = self.status.begin();

        let repo = &self.repo;
        let result = self.policy.run(|| repo.find_all()).await;
        let items = self
            .status
            .record(result, &format!("Failed to load {}", Self::label()))?;

        tracing::debug!(resource = Self::label(), count = items.len(), "List fetched");
        self.cache().store(items.clone());
        Ok(items)
    }

    /// One entity; `None` when the backend does not know the id.
    pub async fn find(&self, id: &str) -> Result<Option<E>> {
        let _loading = self.status.begin();

        let repo = &self.repo;
        let result = self.policy.run(|| repo.find_by_id(id)).await;
        self.status
            .record(result, &format!("Failed to load {}", Self::label()))
    }

    pub async fn create(&self, data: &E::New) -> Result<E> {
        let _loading = self.status.begin();

        let result = self.repo.create(data).await;
        let created = self
            .status
            .record(result, &format!("Failed to create {}", Self::label()))?;
        self.cache().invalidate();
        Ok(created)
    }

    pub async fn update(&self, id: &str, data: &E::Update) -> Result<E> {
        let _loading = self.status.begin();

        let result = self.repo.update(id, data).await;
        let updated = self
            .status
            .record(result, &format!("Failed to update {}", Self::label()))?;
        self.cache().invalidate();
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let _loading = self.status.begin();

        let result = self.repo.delete(id).await;
        self.status
            .record(result, &format!("Failed to delete {}", Self::label()))?;
        self.cache().invalidate();
        Ok(())
    }
}
