use crate::{Enrichment, Result as CoreResult};

use async_trait::async_trait;

/// Derives age, gender and country from a first name.
///
/// Any failure is reported as `CoreError::UpstreamData`; partial results are
/// never returned.
#[async_trait]
pub trait Enricher: Send + Sync {
    async fn enrich(&self, name: &str) -> CoreResult<Enrichment>;
}
