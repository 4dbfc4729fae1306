pub mod enricher;
pub mod user_store;
