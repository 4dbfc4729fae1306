use serde::Deserialize;

/// Query parameters for listing users. Unknown values fall back to
/// `created_at` ascending.
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}
