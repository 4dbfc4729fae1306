use crate::{CreateUser, Enrichment};

/// A fully populated user that has not been persisted yet.
///
/// Carries no id or timestamps: the store assigns those on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub age: i32,
    pub gender: String,
    pub country_id: String,
}

impl NewUser {
    pub fn from_enrichment(input: CreateUser, enrichment: Enrichment) -> Self {
        Self {
            name: input.name,
            surname: input.surname,
            patronymic: input.patronymic,
            age: enrichment.age,
            gender: enrichment.gender,
            country_id: enrichment.country_id,
        }
    }
}
