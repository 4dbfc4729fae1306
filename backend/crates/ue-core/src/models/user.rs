//! User entity - a person record enriched with predicted demographics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored user.
///
/// `id` and `created_at` are assigned by the store. `age`, `gender` and
/// `country_id` come from enrichment at creation time and are only changed
/// afterwards through an explicit patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub age: i32,
    pub gender: String,
    /// ISO 3166-1 alpha-2 code, e.g. "GB"
    pub country_id: String,
    pub created_at: DateTime<Utc>,
    /// None until the first successful update
    pub updated_at: Option<DateTime<Utc>>,
}
