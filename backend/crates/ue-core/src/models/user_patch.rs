/// Sparse update request.
///
/// An empty string or a zero age is treated the same as an omitted field,
/// so a patch cannot clear a text field or set the age to 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub patronymic: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub country_id: Option<String>,
}
