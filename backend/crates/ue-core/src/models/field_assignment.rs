use crate::User;

/// One column assignment inside a [`UserMutation`](crate::UserMutation).
///
/// The set of assignable columns is closed: column names come from this enum,
/// values are always bound as query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAssignment {
    Name(String),
    Surname(String),
    Patronymic(String),
    Age(i32),
    Gender(String),
    CountryId(String),
}

impl FieldAssignment {
    /// Database column this assignment writes
    pub fn column(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Surname(_) => "surname",
            Self::Patronymic(_) => "patronymic",
            Self::Age(_) => "age",
            Self::Gender(_) => "gender",
            Self::CountryId(_) => "country_id",
        }
    }

    /// Apply the assignment to an in-memory user
    pub fn apply_to(&self, user: &mut User) {
        match self {
            Self::Name(v) => user.name = v.clone(),
            Self::Surname(v) => user.surname = v.clone(),
            Self::Patronymic(v) => user.patronymic = v.clone(),
            Self::Age(v) => user.age = *v,
            Self::Gender(v) => user.gender = v.clone(),
            Self::CountryId(v) => user.country_id = v.clone(),
        }
    }
}
