mod error;
mod user_dto;
