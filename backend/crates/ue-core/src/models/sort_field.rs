use std::str::FromStr;

/// Columns a user listing may be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    Id,
    Name,
    Surname,
    Patronymic,
    Age,
    Gender,
    CountryId,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Trusted column token
    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Surname => "surname",
            Self::Patronymic => "patronymic",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::CountryId => "country_id",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "surname" => Ok(Self::Surname),
            "patronymic" => Ok(Self::Patronymic),
            "age" => Ok(Self::Age),
            "gender" => Ok(Self::Gender),
            "country_id" => Ok(Self::CountryId),
            "created_at" => Ok(Self::CreatedAt),
            "updated_at" => Ok(Self::UpdatedAt),
            _ => Err(()),
        }
    }
}
