//! User repository backed by SQLite.
//!
//! Timestamps are stored as Unix milliseconds. Ordering and patch statements
//! are assembled with `QueryBuilder`: column names come from closed enums in
//! `ue-core`, every value is bound.

use crate::Result as DbErrorResult;
use crate::repositories::user_row::{USER_COLUMNS, UserRow};

use ue_core::{
    CoreError, FieldAssignment, NewUser, Result as CoreResult, SortSpec, User, UserMutation,
    UserStore,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user, assigning a fresh id and `created_at`.
    pub async fn insert(&self, user: &NewUser) -> DbErrorResult<User> {
        let id = Uuid::new_v4();
        let created_at_ms = Utc::now().timestamp_millis();

        debug!("Inserting user {}", id);

        sqlx::query(
            r#"
                INSERT INTO users (
                    id, name, surname, patronymic, age, gender, country_id,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, NULL)
            "#,
        )
        .bind(id.to_string())
        .bind(&user.name)
        .bind(&user.surname)
        .bind(&user.patronymic)
        .bind(user.age)
        .bind(&user.gender)
        .bind(&user.country_id)
        .bind(created_at_ms)
        .execute(&self.pool)
        .await?;

        Ok(User {
            id,
            name: user.name.clone(),
            surname: user.surname.clone(),
            patronymic: user.patronymic.clone(),
            age: user.age,
            gender: user.gender.clone(),
            country_id: user.country_id.clone(),
            created_at: DateTime::from_timestamp_millis(created_at_ms).unwrap_or_else(Utc::now),
            updated_at: None,
        })
    }

    pub async fn list_sorted(&self, sort: &SortSpec) -> DbErrorResult<Vec<User>> {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT ");
        query
            .push(USER_COLUMNS)
            .push(" FROM users ORDER BY ")
            .push(sort.order_by());

        debug!("SQL Query: {}", query.sql());

        let rows = query
            .build_query_as::<UserRow>()
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    /// Apply a mutation, returning the post-mutation row or None if the id is gone.
    pub async fn apply(&self, mutation: &UserMutation) -> DbErrorResult<Option<User>> {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE users SET updated_at = ");
        query.push_bind(mutation.updated_at().timestamp_millis());

        for assignment in mutation.assignments() {
            query.push(", ").push(assignment.column()).push(" = ");
            match assignment {
                FieldAssignment::Age(age) => query.push_bind(*age),
                FieldAssignment::Name(value)
                | FieldAssignment::Surname(value)
                | FieldAssignment::Patronymic(value)
                | FieldAssignment::Gender(value)
                | FieldAssignment::CountryId(value) => query.push_bind(value.clone()),
            };
        }

        query
            .push(" WHERE id = ")
            .push_bind(mutation.id().to_string())
            .push(" RETURNING ")
            .push(USER_COLUMNS);

        debug!("SQL Query: {}", query.sql());

        let row = query
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    /// Delete by id. Returns true if a row was removed.
    pub async fn delete_by_id(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, user: NewUser) -> CoreResult<User> {
        Ok(self.insert(&user).await?)
    }

    async fn find_all(&self, sort: &SortSpec) -> CoreResult<Vec<User>> {
        Ok(self.list_sorted(sort).await?)
    }

    async fn find_one(&self, id: Uuid) -> CoreResult<User> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(format!("User {} not found", id)))
    }

    async fn update(&self, mutation: &UserMutation) -> CoreResult<User> {
        self.apply(mutation)
            .await?
            .ok_or_else(|| CoreError::not_found(format!("User {} not found", mutation.id())))
    }

    async fn delete(&self, id: Uuid) -> CoreResult<()> {
        if self.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(CoreError::not_found(format!("User {} not found", id)))
        }
    }
}
