//! HTTP client for the three prediction services

use crate::prediction::{AGE_SOURCE, COUNTRY_SOURCE, GENDER_SOURCE};
use crate::{EnrichError, EnrichResult, parse_age, parse_gender, select_country};

use ue_core::{Enricher, Enrichment, Result as CoreResult};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, Url};
use serde_json::Value;

/// Base URLs of the prediction services, e.g. "https://api.agify.io"
#[derive(Debug, Clone)]
pub struct EnrichmentSources {
    pub age_url: String,
    pub gender_url: String,
    pub country_url: String,
}

pub struct EnrichmentClient {
    sources: EnrichmentSources,
    client: ReqwestClient,
}

impl EnrichmentClient {
    /// Create a client whose every request is bounded by `timeout`
    #[track_caller]
    pub fn new(sources: EnrichmentSources, timeout: Duration) -> EnrichResult<Self> {
        // Closures cannot inherit #[track_caller]; resolve the caller here.
        let location = ErrorLocation::from(Location::caller());
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EnrichError::Client {
                message: e.to_string(),
                location,
            })?;

        Ok(Self { sources, client })
    }

    pub async fn predict_age(&self, name: &str) -> EnrichResult<i32> {
        let body = self.fetch(AGE_SOURCE, &self.sources.age_url, name).await?;
        parse_age(&body)
    }

    pub async fn predict_gender(&self, name: &str) -> EnrichResult<String> {
        let body = self
            .fetch(GENDER_SOURCE, &self.sources.gender_url, name)
            .await?;
        parse_gender(&body)
    }

    pub async fn predict_country(&self, name: &str) -> EnrichResult<String> {
        let body = self
            .fetch(COUNTRY_SOURCE, &self.sources.country_url, name)
            .await?;
        select_country(&body)
    }

    /// GET `<base>?name=<name>` and decode the JSON body
    async fn fetch(&self, upstream: &'static str, base: &str, name: &str) -> EnrichResult<Value> {
        let url = Url::parse_with_params(base, &[("name", name)]).map_err(|e| {
            EnrichError::InvalidUrl {
                upstream,
                url: base.to_string(),
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        debug!("Querying {}: {}", upstream, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| EnrichError::http(upstream, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichError::Status {
                upstream,
                status: status.as_u16(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| EnrichError::http(upstream, e))
    }
}

#[async_trait]
impl Enricher for EnrichmentClient {
    /// Query all three sources concurrently; the first failure cancels the
    /// others and fails the whole enrichment.
    async fn enrich(&self, name: &str) -> CoreResult<Enrichment> {
        let (age, gender, country_id) = tokio::try_join!(
            self.predict_age(name),
            self.predict_gender(name),
            self.predict_country(name),
        )?;

        Ok(Enrichment {
            age,
            gender,
            country_id,
        })
    }
}
