//! Partial update descriptor built from a sparse [`UserPatch`].

use crate::{FieldAssignment, User, UserPatch};

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

/// Concrete mutation applied through [`UserStore::update`](crate::UserStore::update).
///
/// Always stamps `updated_at`, even when the patch carries no usable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMutation {
    id: Uuid,
    updated_at: DateTime<Utc>,
    assignments: Vec<FieldAssignment>,
}

impl UserMutation {
    /// Build the mutation for `current` from `patch`.
    ///
    /// A field is assigned only when the patch value is non-empty (strings)
    /// or non-zero (age). The new `updated_at` never precedes `created_at`
    /// and is strictly later than the previous `updated_at`.
    pub fn build(current: &User, patch: &UserPatch, now: DateTime<Utc>) -> Self {
        let mut assignments = Vec::new();

        if let Some(name) = non_empty(&patch.name) {
            assignments.push(FieldAssignment::Name(name));
        }
        if let Some(surname) = non_empty(&patch.surname) {
            assignments.push(FieldAssignment::Surname(surname));
        }
        if let Some(patronymic) = non_empty(&patch.patronymic) {
            assignments.push(FieldAssignment::Patronymic(patronymic));
        }
        if let Some(age) = patch.age.filter(|age| *age != 0) {
            assignments.push(FieldAssignment::Age(age));
        }
        if let Some(gender) = non_empty(&patch.gender) {
            assignments.push(FieldAssignment::Gender(gender));
        }
        if let Some(country_id) = non_empty(&patch.country_id) {
            assignments.push(FieldAssignment::CountryId(country_id));
        }

        // Stored at millisecond resolution: a repeat update must land at least
        // one millisecond after the previous one to be observable.
        let floor = match current.updated_at {
            Some(prev) => (prev + TimeDelta::milliseconds(1)).max(current.created_at),
            None => current.created_at,
        };

        Self {
            id: current.id,
            updated_at: truncate_to_millis(now).max(floor),
            assignments,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn assignments(&self) -> &[FieldAssignment] {
        &self.assignments
    }

    /// True when only `updated_at` changes
    pub fn is_touch_only(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Apply to an in-memory copy, producing the post-mutation user
    pub fn apply_to(&self, user: &mut User) {
        for assignment in &self.assignments {
            assignment.apply_to(user);
        }
        user.updated_at = Some(self.updated_at);
    }
}

fn truncate_to_millis(at: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(at.timestamp_millis()).unwrap_or(at)
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
