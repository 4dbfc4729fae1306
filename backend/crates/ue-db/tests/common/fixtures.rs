use ue_core::NewUser;

/// Creates a NewUser with sensible defaults
pub fn create_test_new_user(name: &str, age: i32) -> NewUser {
    NewUser {
        name: name.to_string(),
        surname: "Lovelace".to_string(),
        patronymic: String::new(),
        age,
        gender: "female".to_string(),
        country_id: "GB".to_string(),
    }
}
