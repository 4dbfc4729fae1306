mod sort_spec;
mod user_mutation;
