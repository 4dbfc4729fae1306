use crate::tests::fakes::sample_user;
use crate::{FieldAssignment, UserMutation, UserPatch};

use chrono::{Duration, Utc};

#[test]
fn test_empty_patch_only_touches_updated_at() {
    let user = sample_user();
    let now = user.created_at + Duration::seconds(5);

    let mutation = UserMutation::build(&user, &UserPatch::default(), now);

    assert!(mutation.is_touch_only());
    assert_eq!(mutation.id(), user.id);
    assert_eq!(mutation.updated_at(), now);
}

#[test]
fn test_zero_and_empty_values_are_treated_as_absent() {
    let user = sample_user();
    let patch = UserPatch {
        name: Some(String::new()),
        age: Some(0),
        ..UserPatch::default()
    };

    let mutation = UserMutation::build(&user, &patch, Utc::now());

    assert!(mutation.is_touch_only());
}

#[test]
fn test_present_values_become_assignments_in_column_order() {
    let user = sample_user();
    let patch = UserPatch {
        name: Some("Augusta".into()),
        surname: None,
        patronymic: Some("Byron".into()),
        age: Some(36),
        gender: Some(String::new()),
        country_id: Some("IE".into()),
    };

    let mutation = UserMutation::build(&user, &patch, Utc::now());

    assert_eq!(
        mutation.assignments(),
        &[
            FieldAssignment::Name("Augusta".into()),
            FieldAssignment::Patronymic("Byron".into()),
            FieldAssignment::Age(36),
            FieldAssignment::CountryId("IE".into()),
        ]
    );
}

#[test]
fn test_assignment_columns() {
    assert_eq!(FieldAssignment::Name(String::new()).column(), "name");
    assert_eq!(FieldAssignment::Surname(String::new()).column(), "surname");
    assert_eq!(FieldAssignment::Patronymic(String::new()).column(), "patronymic");
    assert_eq!(FieldAssignment::Age(1).column(), "age");
    assert_eq!(FieldAssignment::Gender(String::new()).column(), "gender");
    assert_eq!(FieldAssignment::CountryId(String::new()).column(), "country_id");
}

#[test]
fn test_updated_at_never_precedes_created_at() {
    let user = sample_user();
    let clock_skewed = user.created_at - Duration::minutes(10);

    let mutation = UserMutation::build(&user, &UserPatch::default(), clock_skewed);

    assert_eq!(mutation.updated_at(), user.created_at);
}

#[test]
fn test_updated_at_is_monotonic() {
    let mut user = sample_user();
    let previous = user.created_at + Duration::hours(1);
    user.updated_at = Some(previous);

    let mutation = UserMutation::build(&user, &UserPatch::default(), previous - Duration::seconds(1));

    assert_eq!(mutation.updated_at(), previous + Duration::milliseconds(1));
}

#[test]
fn test_updated_at_advances_within_the_same_millisecond() {
    let mut user = sample_user();
    let previous = user.created_at + Duration::hours(1);
    user.updated_at = Some(previous);

    let same_millisecond = previous + Duration::microseconds(300);
    let mutation = UserMutation::build(&user, &UserPatch::default(), same_millisecond);

    assert_eq!(mutation.updated_at(), previous + Duration::milliseconds(1));
}

#[test]
fn test_updated_at_is_truncated_to_whole_milliseconds() {
    let user = sample_user();
    let now = user.created_at + Duration::seconds(2) + Duration::microseconds(750);

    let mutation = UserMutation::build(&user, &UserPatch::default(), now);

    assert_eq!(mutation.updated_at(), user.created_at + Duration::seconds(2));
}

#[test]
fn test_apply_to_leaves_absent_fields_untouched() {
    let user = sample_user();
    let patch = UserPatch {
        gender: Some("male".into()),
        ..UserPatch::default()
    };
    let now = user.created_at + Duration::seconds(1);
    let mutation = UserMutation::build(&user, &patch, now);

    let mut patched = user.clone();
    mutation.apply_to(&mut patched);

    assert_eq!(patched.gender, "male");
    assert_eq!(patched.name, user.name);
    assert_eq!(patched.surname, user.surname);
    assert_eq!(patched.patronymic, user.patronymic);
    assert_eq!(patched.age, user.age);
    assert_eq!(patched.country_id, user.country_id);
    assert_eq!(patched.created_at, user.created_at);
    assert_eq!(patched.updated_at, Some(now));
}
