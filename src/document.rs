// Intermediate JSON document shared by the two stages.
// Written with three-space indentation; non-ASCII text is kept verbatim.

use crate::error::{ImportError, Result};
use crate::logger;
use crate::parser::QuoteRecord;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;

const INDENT: &[u8] = b"   ";

// One document entry as seen by the SQL generator.
// `quote` and `author` are required; `author_bio` and `status` may be absent or null.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ImportRecord {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub author_bio: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

// Serialize records as a pretty-printed JSON array into any writer.
pub fn write_quotes_to<W: Write>(out: W, records: &[QuoteRecord]) -> serde_json::Result<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(out, formatter);
    records.serialize(&mut ser)
}

pub fn write_quotes(filename: &str, records: &[QuoteRecord]) -> Result<()> {
    let mut buf = Vec::new();
    write_quotes_to(&mut buf, records).map_err(|e| ImportError::Document {
        path: filename.to_string(),
        source: e,
    })?;
    fs::write(filename, buf).map_err(|e| ImportError::write(filename, e))?;
    logger::debug(&format!(
        "WriteQuotes: wrote {} records to {}",
        records.len(),
        filename
    ));
    Ok(())
}

pub fn read_quotes(filename: &str) -> Result<Vec<QuoteRecord>> {
    read_document(filename)
}

pub fn read_import_records(filename: &str) -> Result<Vec<ImportRecord>> {
    read_document(filename)
}

fn read_document<T: DeserializeOwned>(filename: &str) -> Result<Vec<T>> {
    logger::debug(&format!("ReadDocument: Opening file {}", filename));
    let text = fs::read_to_string(filename).map_err(|e| ImportError::read(filename, e))?;
    let records: Vec<T> = serde_json::from_str(&text).map_err(|e| ImportError::Document {
        path: filename.to_string(),
        source: e,
    })?;
    logger::debug(&format!(
        "ReadDocument: {} records in {}",
        records.len(),
        filename
    ));
    Ok(records)
}
