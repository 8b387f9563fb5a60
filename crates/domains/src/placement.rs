//! Student placement records shown on the public site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub id: Uuid,
    pub student_name: String,
    pub course: String,
    pub company: String,
    pub position: String,
    /// Inactive records stay in the store but are hidden by the public UI.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlacement {
    pub student_name: String,
    pub course: String,
    pub company: String,
    pub position: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Partial update: absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlacementUpdate {
    pub student_name: Option<String>,
    pub course: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub is_active: Option<bool>,
}
