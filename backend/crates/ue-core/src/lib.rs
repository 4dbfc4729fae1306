pub mod error;
pub mod models;
pub mod ports;
pub mod service;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::create_user::CreateUser;
pub use models::enrichment::Enrichment;
pub use models::field_assignment::FieldAssignment;
pub use models::new_user::NewUser;
pub use models::sort_direction::SortDirection;
pub use models::sort_field::SortField;
pub use models::sort_spec::SortSpec;
pub use models::user::User;
pub use models::user_mutation::UserMutation;
pub use models::user_patch::UserPatch;
pub use ports::enricher::Enricher;
pub use ports::user_store::UserStore;
pub use service::user_service::UserService;
