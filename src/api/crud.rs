// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CRUD adapters for the resource collections (`/clients`, `/plans`).
//!
//! Each operation is exactly one HTTP call. Bodies are returned as the
//! server sent them; there is no envelope on these routes.

use super::http::ApiClient;
use crate::error::Result;
use crate::models::{Exercise, NewExercise, Plan, Resource};
use std::marker::PhantomData;

/// REST adapter for one resource collection.
pub struct CrudApi<R> {
    client: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for CrudApi<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> CrudApi<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    /// `GET /<collection>`
    pub async fn get_all(&self) -> Result<Vec<R>> {
        self.client.get_json(R::COLLECTION).await
    }

    /// `GET /<collection>/:id`. A 404 is an error here, not `None`.
    pub async fn get_by_id(&self, id: &str) -> Result<R> {
        self.client.get_json(&R::item_path(id)).await
    }

    /// `POST /<collection>`
    pub async fn create(&self, data: &R::New) -> Result<R> {
        self.client.post_json(R::COLLECTION, data).await
    }

    /// `PUT /<collection>/:id`
    pub async fn update(&self, id: &str, data: &R::Update) -> Result<R> {
        self.client.put_json(&R::item_path(id), data).await
    }

    /// `DELETE /<collection>/:id`
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&R::item_path(id)).await
    }
}

impl CrudApi<Plan> {
    /// `GET /plans/:id/exercises`, in server order.
    pub async fn get_exercises(&self, plan_id: &str) -> Result<Vec<Exercise>> {
        self.client
            .get_json(&Plan::exercises_path(plan_id))
            .await
    }

    /// `POST /plans/:id/exercises`
    pub async fn add_exercise(&self, plan_id: &str, data: &NewExercise) -> Result<Exercise> {
        self.client
            .post_json(&Plan::exercises_path(plan_id), data)
            .await
    }
}

/// Adapter for `/clients`.
pub type ClientApi = CrudApi<crate::models::Client>;

/// Adapter for `/plans`.
pub type PlanApi = CrudApi<Plan>;
