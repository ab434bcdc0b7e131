// SQL generation: one INSERT per quote, values inlined as escaped string literals.
// Counters are literal 0 and timestamps are left to the database (CURRENT_TIMESTAMP).

use crate::document::ImportRecord;
use crate::logger;
use std::io::{self, Write};

pub const DEFAULT_TABLE: &str = "thought";
pub const DEFAULT_STATUS: &str = "APPROVED";
pub const MISSING_BIO: &str = "Unknown";

const COLUMNS: &str =
    "content, author, authorBio, status, thumbsUp, thumbsDown, createdAt, updatedAt";

// Double every single quote so the text stays inside its SQL literal.
pub fn escape_literal(val: &str) -> String {
    val.replace('\'', "''")
}

pub struct InsertGenerator {
    table: String,
    default_status: String,
}

impl Default for InsertGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE, DEFAULT_STATUS)
    }
}

impl InsertGenerator {
    pub fn new(table: &str, default_status: &str) -> Self {
        Self {
            table: table.to_string(),
            default_status: default_status.to_string(),
        }
    }

    // Build the INSERT statement for one record (two lines, no trailing newline).
    pub fn build_insert(&self, record: &ImportRecord) -> String {
        let content = escape_literal(&record.quote);
        let author = escape_literal(&record.author);
        let author_bio = match record.author_bio.as_deref() {
            Some(bio) if !bio.is_empty() => escape_literal(bio),
            _ => MISSING_BIO.to_string(),
        };
        let status = record.status.as_deref().unwrap_or(&self.default_status);
        format!(
            "INSERT INTO {} ({})\nVALUES ('{}', '{}', '{}', '{}', 0, 0, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP);",
            self.table, COLUMNS, content, author, author_bio, status
        )
    }

    // Write the comment header, then each statement followed by a blank line.
    // If a progress bar is provided, it advances once per statement.
    pub fn generate<W: Write>(
        &self,
        records: &[ImportRecord],
        source_name: &str,
        out: &mut W,
        bar: Option<&indicatif::ProgressBar>,
    ) -> io::Result<usize> {
        logger::debug(&format!(
            "GenerateSql: {} records into table {}",
            records.len(),
            self.table
        ));
        writeln!(out, "-- Import quotes from {}", source_name)?;
        writeln!(out, "-- Generated SQL INSERT statements")?;
        writeln!(out)?;

        let mut written = 0usize;
        for record in records {
            if record.author_bio.is_none() {
                logger::debug(&format!(
                    "GenerateSql: no bio for {:?}, using {}",
                    record.author, MISSING_BIO
                ));
            }
            writeln!(out, "{}", self.build_insert(record))?;
            writeln!(out)?;
            written += 1;
            if let Some(b) = bar {
                b.inc(1);
            }
        }

        if let Some(b) = bar {
            b.finish();
        }
        out.flush()?;
        Ok(written)
    }
}
