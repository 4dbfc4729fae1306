pub mod create_user_request;
pub mod list_users_query;
pub mod update_user_request;
pub mod user_dto;
#[allow(clippy::module_inception)]
pub mod users;
