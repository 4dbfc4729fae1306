//! Injection-safe ordering descriptor for user listings.
//!
//! Client-supplied field and direction text is only ever used to pick a
//! variant of [`SortField`] / [`SortDirection`]; the rendered clause is built
//! from their static tokens.

use crate::{SortDirection, SortField};

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    field: SortField,
    direction: SortDirection,
}

impl SortSpec {
    /// Resolve untrusted input. Unknown or missing values fall back to
    /// `created_at` and ascending, independently of each other.
    pub fn resolve(field: Option<&str>, direction: Option<&str>) -> Self {
        let field = field
            .map(str::trim)
            .and_then(|f| SortField::from_str(f).ok())
            .unwrap_or_default();
        let direction = direction
            .map(str::trim)
            .and_then(|d| SortDirection::from_str(d).ok())
            .unwrap_or_default();

        Self { field, direction }
    }

    /// Render the ORDER BY body, e.g. `age DESC, id ASC`.
    ///
    /// `id` is appended as a tie-breaker so equal keys list deterministically.
    pub fn order_by(&self) -> String {
        match self.field {
            SortField::Id => format!("id {}", self.direction.as_sql()),
            field => format!("{} {}, id ASC", field.column(), self.direction.as_sql()),
        }
    }
}
