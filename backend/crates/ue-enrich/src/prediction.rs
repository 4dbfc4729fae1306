//! Interpretation of prediction-service response bodies.
//!
//! Bodies are read as untyped JSON so that a single malformed candidate in
//! the nationality list can be skipped instead of failing the whole parse.

use crate::{EnrichError, EnrichResult};

use log::warn;
use serde_json::Value;

pub(crate) const AGE_SOURCE: &str = "age source";
pub(crate) const GENDER_SOURCE: &str = "gender source";
pub(crate) const COUNTRY_SOURCE: &str = "country source";

/// Extract `age` from `{"age": <number|null>}`.
///
/// Fractional ages are truncated. Null, negative or non-numeric values fail.
pub fn parse_age(body: &Value) -> EnrichResult<i32> {
    body.get("age")
        .and_then(Value::as_f64)
        .filter(|age| age.is_finite() && *age >= 0.0 && *age <= f64::from(i32::MAX))
        .map(|age| age.trunc() as i32)
        .ok_or_else(|| EnrichError::missing_field(AGE_SOURCE, "age"))
}

/// Extract `gender` from `{"gender": <string|null>}`
pub fn parse_gender(body: &Value) -> EnrichResult<String> {
    body.get("gender")
        .and_then(Value::as_str)
        .filter(|gender| !gender.is_empty())
        .map(String::from)
        .ok_or_else(|| EnrichError::missing_field(GENDER_SOURCE, "gender"))
}

/// Pick the most probable country from
/// `{"country": [{"country_id": <string>, "probability": <number>}, ...]}`.
///
/// Scans in order and keeps the first candidate with the strictly greatest
/// probability, so a later tie never replaces the leader. Candidates without
/// a country code or a probability in [0, 1] are skipped.
pub fn select_country(body: &Value) -> EnrichResult<String> {
    let candidates = body
        .get("country")
        .and_then(Value::as_array)
        .ok_or_else(|| EnrichError::missing_field(COUNTRY_SOURCE, "country"))?;

    let mut leader: Option<(&str, f64)> = None;

    for candidate in candidates {
        let code = candidate
            .get("country_id")
            .and_then(Value::as_str)
            .filter(|code| !code.is_empty());
        let probability = candidate
            .get("probability")
            .and_then(Value::as_f64)
            .filter(|p| (0.0..=1.0).contains(p));

        let (Some(code), Some(probability)) = (code, probability) else {
            warn!("Skipping unusable country candidate: {}", candidate);
            continue;
        };

        if leader.is_none_or(|(_, best)| probability > best) {
            leader = Some((code, probability));
        }
    }

    leader
        .map(|(code, _)| code.to_string())
        .ok_or_else(|| EnrichError::missing_field(COUNTRY_SOURCE, "country"))
}
