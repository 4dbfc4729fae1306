/// Demographics predicted from a first name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub age: i32,
    pub gender: String,
    pub country_id: String,
}
