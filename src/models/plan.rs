// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Training plan model.

use super::{Entity, Resource};
use serde::{Deserialize, Serialize};

/// Training plan assigned by a trainer to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub client_id: String,
    pub personal_id: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub is_active: bool,
    /// Exercise references; order is significant.
    #[serde(default)]
    pub exercise_ids: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Entity for Plan {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Plan {
    type New = NewPlan;
    type Update = PlanUpdate;

    const COLLECTION: &'static str = "/plans";
}

impl Plan {
    /// Path of the exercise sub-collection of a plan.
    pub fn exercises_path(plan_id: &str) -> String {
        format!("{}/exercises", Self::item_path(plan_id))
    }
}

/// Body for `POST /plans`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlan {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub client_id: String,
    pub personal_id: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub exercise_ids: Vec<String>,
}

/// Body for `PUT /plans/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_ids: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_ids_keep_order() {
        let plan: Plan = serde_json::from_value(serde_json::json!({
            "id": "p1",
            "name": "Strength",
            "clientId": "c1",
            "personalId": "u1",
            "startDate": "2026-03-01",
            "isActive": true,
            "exerciseIds": ["e3", "e1", "e2"],
            "createdAt": "t0",
            "updatedAt": "t0"
        }))
        .unwrap();

        assert_eq!(plan.exercise_ids, vec!["e3", "e1", "e2"]);
        assert_eq!(Plan::exercises_path(&plan.id), "/plans/p1/exercises");
    }
}
