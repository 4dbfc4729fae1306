//! Name-based enrichment against the age, gender and nationality
//! prediction services.

pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod prediction;


pub use client::{EnrichmentClient, EnrichmentSources};
pub use error::{EnrichError, Result as EnrichResult};
pub use prediction::{parse_age, parse_gender, select_country};
