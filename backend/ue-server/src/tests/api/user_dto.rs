use crate::{CreateUserRequest, UpdateUserRequest, UserDto};

use ue_core::{CreateUser, User, UserPatch};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;
use uuid::Uuid;

fn stored_user() -> User {
    User {
        id: Uuid::nil(),
        name: "Ada".into(),
        surname: "Lovelace".into(),
        patronymic: String::new(),
        age: 34,
        gender: "female".into(),
        country_id: "GB".into(),
        created_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        updated_at: None,
    }
}

#[test]
fn given_never_updated_user_when_serialized_then_updated_at_is_null() {
    let json = serde_json::to_value(UserDto::from(stored_user())).unwrap();

    assert_that!(json["updated_at"].is_null(), eq(true));
    assert_that!(json["created_at"].as_str(), some(eq("2026-01-02T03:04:05+00:00")));
    assert_that!(json["id"].as_str(), some(eq("00000000-0000-0000-0000-000000000000")));
}

#[test]
fn given_updated_user_when_serialized_then_updated_at_is_rfc3339() {
    let mut user = stored_user();
    user.updated_at = Some(Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap());

    let json = serde_json::to_value(UserDto::from(user)).unwrap();

    assert_that!(json["updated_at"].as_str(), some(eq("2026-02-01T00:00:00+00:00")));
    assert_that!(json["age"].as_i64(), some(eq(34)));
}

#[test]
fn given_create_body_with_name_only_when_converted_then_other_names_are_empty() {
    let req: CreateUserRequest = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();

    let create = CreateUser::from(req);

    assert_that!(create.name.as_str(), eq("Ada"));
    assert_that!(create.surname.as_str(), eq(""));
    assert_that!(create.patronymic.as_str(), eq(""));
}

#[test]
fn given_sparse_update_body_when_converted_then_omitted_fields_are_none() {
    let req: UpdateUserRequest = serde_json::from_str(r#"{"age":35}"#).unwrap();

    let patch = UserPatch::from(req);

    assert_eq!(patch, UserPatch { age: Some(35), ..UserPatch::default() });
}
