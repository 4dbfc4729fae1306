use ue_core::UserPatch;

use serde::Deserialize;

/// Sparse update body. Omitted, empty and zero-valued fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub patronymic: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub country_id: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            name: req.name,
            surname: req.surname,
            patronymic: req.patronymic,
            age: req.age,
            gender: req.gender,
            country_id: req.country_id,
        }
    }
}
