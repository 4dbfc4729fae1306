use crate::DbError;

use ue_core::User;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use uuid::Uuid;

/// Column list shared by every statement that returns users
pub(crate) const USER_COLUMNS: &str =
    "id, name, surname, patronymic, age, gender, country_id, created_at, updated_at";

/// Raw `users` row as stored by SQLite
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UserRow {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub age: i64,
    pub gender: String,
    pub country_id: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(r: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: Uuid::parse_str(&r.id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in users.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            name: r.name,
            surname: r.surname,
            patronymic: r.patronymic,
            age: i32::try_from(r.age).map_err(|_| DbError::Initialization {
                message: format!("Out of range value in users.age: {}", r.age),
                location: ErrorLocation::from(Location::caller()),
            })?,
            gender: r.gender,
            country_id: r.country_id,
            created_at: DateTime::from_timestamp_millis(r.created_at).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in users.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            updated_at: r
                .updated_at
                .map(|ts| {
                    DateTime::from_timestamp_millis(ts).ok_or_else(|| DbError::Initialization {
                        message: "Invalid timestamp in users.updated_at".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    })
                })
                .transpose()?,
        })
    }
}
