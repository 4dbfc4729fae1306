pub mod user_repository;
mod user_row;
