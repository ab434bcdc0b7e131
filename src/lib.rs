// quotes-import: migrate a plain-text quotes collection into SQL.
// Stage one parses quote lines into a JSON document, stage two turns that
// document into INSERT statements for the thought table.

pub mod document;
pub mod error;
pub mod logger;
pub mod parser;
pub mod progress;
pub mod sql;

pub use document::ImportRecord;
pub use error::{ImportError, Result};
pub use parser::quote::{ParseStats, QuoteLineParser};
pub use parser::QuoteRecord;
pub use sql::InsertGenerator;
