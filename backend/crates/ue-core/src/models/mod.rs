pub mod create_user;
pub mod enrichment;
pub mod field_assignment;
pub mod new_user;
pub mod sort_direction;
pub mod sort_field;
pub mod sort_spec;
pub mod user;
pub mod user_mutation;
pub mod user_patch;
