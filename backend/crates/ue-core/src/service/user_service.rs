//! User use cases composed from the persistence and enrichment ports.

use crate::{
    CoreError, CreateUser, Enricher, NewUser, Result as CoreResult, SortSpec, User, UserMutation,
    UserPatch, UserStore,
};

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    enricher: Arc<dyn Enricher>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, enricher: Arc<dyn Enricher>) -> Self {
        Self { store, enricher }
    }

    /// Enrich and persist a new user.
    ///
    /// Nothing is written unless all three predictions succeed.
    pub async fn create(&self, input: CreateUser) -> CoreResult<User> {
        if input.name.trim().is_empty() {
            return Err(CoreError::validation("name is required", Some("name")));
        }

        let enrichment = self
            .enricher
            .enrich(&input.name)
            .await
            .map_err(|e| e.context(&format!("enrich name '{}'", input.name)))?;
        debug!(
            "Enriched '{}': age={}, gender={}, country={}",
            input.name, enrichment.age, enrichment.gender, enrichment.country_id
        );

        let user = self
            .store
            .create(NewUser::from_enrichment(input, enrichment))
            .await
            .map_err(|e| e.context("create user"))?;

        info!("Created user {}", user.id);
        Ok(user)
    }

    /// List users ordered by the resolved client sort request
    pub async fn list(
        &self,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
    ) -> CoreResult<Vec<User>> {
        let sort = SortSpec::resolve(sort_by, sort_order);
        debug!("Listing users ordered by {}", sort.order_by());

        self.store
            .find_all(&sort)
            .await
            .map_err(|e| e.context("list users"))
    }

    pub async fn get(&self, id: Uuid) -> CoreResult<User> {
        self.store
            .find_one(id)
            .await
            .map_err(|e| e.context(&format!("get user {id}")))
    }

    /// Apply a sparse patch. `updated_at` advances even for an empty patch.
    pub async fn update(&self, id: Uuid, patch: UserPatch) -> CoreResult<User> {
        if let Some(age) = patch.age
            && age < 0
        {
            return Err(CoreError::validation(
                format!("age must be non-negative, got {age}"),
                Some("age"),
            ));
        }

        let current = self
            .store
            .find_one(id)
            .await
            .map_err(|e| e.context(&format!("load user {id} for update")))?;

        let mutation = UserMutation::build(&current, &patch, Utc::now());
        if mutation.is_touch_only() {
            debug!("Update of user {} carries no fields; touching updated_at only", id);
        }
        let updated = self
            .store
            .update(&mutation)
            .await
            .map_err(|e| e.context(&format!("update user {id}")))?;

        info!(
            "Updated user {} ({} field(s))",
            id,
            mutation.assignments().len()
        );
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> CoreResult<()> {
        self.store
            .find_one(id)
            .await
            .map_err(|e| e.context(&format!("load user {id} for delete")))?;

        self.store
            .delete(id)
            .await
            .map_err(|e| e.context(&format!("delete user {id}")))?;

        info!("Deleted user {}", id);
        Ok(())
    }
}
