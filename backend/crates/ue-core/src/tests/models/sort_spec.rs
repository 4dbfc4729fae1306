use crate::{SortDirection, SortField, SortSpec};

use std::str::FromStr;

#[test]
fn test_sort_spec_defaults_when_nothing_supplied() {
    let spec = SortSpec::resolve(None, None);
    assert_eq!(spec, SortSpec::default());
    assert_eq!(spec.order_by(), "created_at ASC, id ASC");
}

#[test]
fn test_sort_spec_known_field_and_direction() {
    let spec = SortSpec::resolve(Some("age"), Some("desc"));
    assert_eq!(spec.order_by(), "age DESC, id ASC");
}

#[test]
fn test_sort_spec_direction_is_case_insensitive() {
    assert_eq!(
        SortSpec::resolve(Some("name"), Some("DESC")).order_by(),
        "name DESC, id ASC"
    );
    assert_eq!(
        SortSpec::resolve(Some("name"), Some("Asc")).order_by(),
        "name ASC, id ASC"
    );
}

#[test]
fn test_sort_spec_unknown_field_falls_back_to_created_at() {
    let spec = SortSpec::resolve(Some("password"), Some("desc"));
    assert_eq!(spec.order_by(), "created_at DESC, id ASC");
}

#[test]
fn test_sort_spec_empty_field_falls_back_to_created_at() {
    let spec = SortSpec::resolve(Some(""), Some("asc"));
    assert_eq!(spec, SortSpec::default());
}

#[test]
fn test_sort_spec_unknown_direction_falls_back_to_ascending() {
    let spec = SortSpec::resolve(Some("surname"), Some("sideways"));
    assert_eq!(spec.order_by(), "surname ASC, id ASC");
}

#[test]
fn test_sort_spec_both_unknown_equals_base_case() {
    assert_eq!(
        SortSpec::resolve(Some("nope"), Some("nope")),
        SortSpec::resolve(None, None)
    );
}

#[test]
fn test_sort_spec_injection_attempt_never_reaches_clause() {
    let spec = SortSpec::resolve(Some("name; DROP TABLE users; --"), Some("asc; DELETE"));
    let clause = spec.order_by();

    assert_eq!(clause, "created_at ASC, id ASC");
    assert!(!clause.contains("DROP"));
}

#[test]
fn test_sort_spec_id_has_no_redundant_tie_breaker() {
    assert_eq!(SortSpec::resolve(Some("id"), Some("desc")).order_by(), "id DESC");
}

#[test]
fn test_sort_field_from_str_is_exact() {
    assert_eq!(SortField::from_str("country_id"), Ok(SortField::CountryId));
    assert!(SortField::from_str("Country_Id").is_err());
    assert!(SortField::from_str("countryId").is_err());
}

#[test]
fn test_sort_direction_as_sql() {
    assert_eq!(SortDirection::Asc.as_sql(), "ASC");
    assert_eq!(SortDirection::Desc.as_sql(), "DESC");
    assert_eq!(SortDirection::default(), SortDirection::Asc);
}
