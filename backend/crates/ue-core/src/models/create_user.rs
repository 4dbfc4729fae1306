/// Client input for creating a user. Surname and patronymic may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    pub name: String,
    pub surname: String,
    pub patronymic: String,
}
