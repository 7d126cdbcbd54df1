// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise model. Exercises belong to a plan and have no repository of
//! their own; they are reached through `/plans/:id/exercises`.

use super::Entity;
use serde::{Deserialize, Serialize};

/// A single exercise within a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub muscle_group: String,
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: u32,
    /// Load in kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Position within the plan
    pub order: u32,
    /// Owning plan
    pub plan_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Entity for Exercise {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body for `POST /plans/:id/exercises`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub muscle_group: String,
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub order: u32,
}

/// Sort exercises into execution order. Stable, so equal positions keep
/// server order.
pub fn sort_by_order(exercises: &mut [Exercise]) {
    exercises.sort_by_key(|e| e.order);
}
