use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AGE_URL, DEFAULT_COUNTRY_URL, DEFAULT_GENDER_URL,
};

use std::time::Duration;

use serde::Deserialize;

// Upstream request constraints
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Base URLs of the age, gender and nationality prediction services
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    pub age_url: String,
    pub gender_url: String,
    pub country_url: String,
    /// Per-request timeout for each prediction call
    pub timeout_secs: u64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            age_url: String::from(DEFAULT_AGE_URL),
            gender_url: String::from(DEFAULT_GENDER_URL),
            country_url: String::from(DEFAULT_COUNTRY_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl EnrichmentConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (key, url) in [
            ("age_url", &self.age_url),
            ("gender_url", &self.gender_url),
            ("country_url", &self.country_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::enrichment(format!(
                    "enrichment.{key} must be an http(s) URL, got '{url}'"
                )));
            }
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::enrichment(format!(
                "enrichment.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
