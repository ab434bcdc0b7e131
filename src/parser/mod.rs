// Parser module: turns raw quote lines into structured records.

pub mod quote;

// QuoteRecord matches one object in the intermediate JSON document.
// Field order here is the key order written to disk.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuoteRecord {
    pub quote: String,
    pub author: String,
    pub author_bio: String,
}
