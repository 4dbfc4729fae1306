use crate::{NewUser, Result as CoreResult, SortSpec, User, UserMutation};

use async_trait::async_trait;
use uuid::Uuid;

/// Persistence port for users. The only component touching storage.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user. The store assigns `id` and `created_at`.
    async fn create(&self, user: NewUser) -> CoreResult<User>;

    /// All users ordered per `sort`. Empty when none exist.
    async fn find_all(&self, sort: &SortSpec) -> CoreResult<Vec<User>>;

    /// Load a single user; `CoreError::NotFound` if absent.
    async fn find_one(&self, id: Uuid) -> CoreResult<User>;

    /// Apply the mutation and return the post-mutation row;
    /// `CoreError::NotFound` if no row matches.
    async fn update(&self, mutation: &UserMutation) -> CoreResult<User>;

    /// Permanently remove the row; `CoreError::NotFound` if absent.
    async fn delete(&self, id: Uuid) -> CoreResult<()>;
}
