// Quote line parser: extracts quote, author and bio from loosely formatted lines
// such as `12:“Be yourself.” —Oscar Wilde, Playwright,`.
// Lines without a curly-quoted segment are skipped, never reported as errors.

use crate::error::{ImportError, Result};
use crate::logger;
use crate::parser::QuoteRecord;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};

// Counters collected while parsing a whole file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    pub lines: usize,
    pub records: usize,
    pub skipped: usize,
}

pub struct QuoteLineParser {
    quoted_re: Regex,
    separator_re: Regex,
}

impl Default for QuoteLineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteLineParser {
    // Build regexes once for reuse.
    pub fn new() -> Self {
        // Leftmost “ up to the first ” after it.
        let quoted_re = Regex::new(r"“([^”]*)”").expect("valid quoted segment regex");
        // Em dash (U+2014) and horizontal bar (U+2015), plus trailing whitespace.
        let separator_re = Regex::new(r"^[—―\s]+").expect("valid separator regex");
        Self {
            quoted_re,
            separator_re,
        }
    }

    // Parse a single line. Returns None for blank lines and lines without a quote.
    pub fn parse_line(&self, line: &str) -> Option<QuoteRecord> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let cap = self.quoted_re.captures(line)?;
        let whole = cap.get(0)?;
        let quote = cap.get(1)?.as_str().to_string();

        // Everything after the first closing mark is attribution, quotes included.
        let attribution = line[whole.end()..].trim();
        let attribution = self.separator_re.replace(attribution, "");

        let (author, author_bio) = match attribution.split_once(',') {
            Some((author, bio)) => (author.trim(), bio.trim()),
            None => (attribution.trim(), ""),
        };

        Some(QuoteRecord {
            quote,
            author: author.to_string(),
            author_bio: author_bio.trim_end_matches(',').to_string(),
        })
    }

    // Parse every line of an in-memory document, keeping input order.
    pub fn parse_str(&self, text: &str) -> Vec<QuoteRecord> {
        text.lines().filter_map(|l| self.parse_line(l)).collect()
    }

    // Parse a quotes file line by line.
    // If a progress bar is provided, we increment it by bytes read.
    pub fn parse_file(
        &self,
        filename: &str,
        bar: Option<&indicatif::ProgressBar>,
    ) -> Result<(Vec<QuoteRecord>, ParseStats)> {
        logger::debug(&format!("ParseFile: Opening file {}", filename));
        let file = File::open(filename).map_err(|e| ImportError::read(filename, e))?;
        let mut reader = BufReader::new(file);

        let mut records = Vec::new();
        let mut stats = ParseStats::default();

        let mut line = String::new();
        while reader
            .read_line(&mut line)
            .map_err(|e| ImportError::read(filename, e))?
            > 0
        {
            stats.lines += 1;
            if let Some(b) = bar {
                b.inc(line.len() as u64);
            }

            match self.parse_line(&line) {
                Some(record) => {
                    records.push(record);
                    stats.records += 1;
                }
                None => {
                    stats.skipped += 1;
                    if logger::is_debug() && !line.trim().is_empty() {
                        logger::debug(&format!(
                            "ParseFile: line {} has no quoted segment, skipping",
                            stats.lines
                        ));
                    }
                }
            }

            line.clear();
        }

        if let Some(b) = bar {
            b.finish();
        }

        logger::debug(&format!(
            "ParseFile: {} lines read, {} records, {} skipped",
            stats.lines, stats.records, stats.skipped
        ));
        Ok((records, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(quote: &str, author: &str, bio: &str) -> QuoteRecord {
        QuoteRecord {
            quote: quote.to_string(),
            author: author.to_string(),
            author_bio: bio.to_string(),
        }
    }

    #[test]
    fn numbered_line_with_trailing_comma() {
        let parser = QuoteLineParser::new();
        assert_eq!(
            parser.parse_line("12:“Be yourself.” —Oscar Wilde, Playwright,"),
            Some(record("Be yourself.", "Oscar Wilde", "Playwright"))
        );
    }

    #[test]
    fn em_dash_and_horizontal_bar_are_equivalent() {
        let parser = QuoteLineParser::new();
        let em = parser.parse_line("“Stay hungry.” —Steve Jobs, Apple co-founder");
        let bar = parser.parse_line("“Stay hungry.” ―Steve Jobs, Apple co-founder");
        assert_eq!(em, bar);
        assert_eq!(em, Some(record("Stay hungry.", "Steve Jobs", "Apple co-founder")));
    }

    #[test]
    fn dash_run_and_spacing_are_stripped() {
        let parser = QuoteLineParser::new();
        assert_eq!(
            parser.parse_line("“Less is more.”   ——  Mies van der Rohe"),
            Some(record("Less is more.", "Mies van der Rohe", ""))
        );
    }

    #[test]
    fn lines_without_curly_quotes_are_skipped() {
        let parser = QuoteLineParser::new();
        assert_eq!(parser.parse_line("Just a note."), None);
        assert_eq!(parser.parse_line("\"Straight quotes\" —Nobody"), None);
        assert_eq!(parser.parse_line("“never closed —Someone"), None);
        assert_eq!(parser.parse_line("   "), None);
        assert_eq!(parser.parse_line(""), None);
    }

    #[test]
    fn quote_without_attribution() {
        let parser = QuoteLineParser::new();
        assert_eq!(
            parser.parse_line("7:“Alone at last.”"),
            Some(record("Alone at last.", "", ""))
        );
    }

    #[test]
    fn only_first_comma_splits_author_from_bio() {
        let parser = QuoteLineParser::new();
        assert_eq!(
            parser.parse_line("“Veni, vidi, vici.” —Julius Caesar, Roman general, statesman,,"),
            Some(record(
                "Veni, vidi, vici.",
                "Julius Caesar",
                "Roman general, statesman"
            ))
        );
    }

    #[test]
    fn first_quote_pair_wins() {
        let parser = QuoteLineParser::new();
        let parsed = parser
            .parse_line("“One.” —A, wrote “Two.” later")
            .expect("record");
        assert_eq!(parsed.quote, "One.");
        assert_eq!(parsed.author, "A");
        assert_eq!(parsed.author_bio, "wrote “Two.” later");
    }

    #[test]
    fn parse_str_keeps_order_and_drops_noise() {
        let parser = QuoteLineParser::new();
        let text = "1:“First.” —A, one\nJust a note.\n\n2:“Second.” ―B\n";
        assert_eq!(
            parser.parse_str(text),
            vec![record("First.", "A", "one"), record("Second.", "B", "")]
        );
    }

    #[test]
    fn parse_file_counts_lines() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            "1:“Be yourself.” —Oscar Wilde, Playwright,\nheader line\n\n2:“Hi.” —B\n"
        )
        .expect("write");

        let parser = QuoteLineParser::new();
        let path = file.path().to_str().expect("utf-8 path");
        let (records, stats) = parser.parse_file(path, None).expect("parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], record("Be yourself.", "Oscar Wilde", "Playwright"));
        assert_eq!(
            stats,
            ParseStats {
                lines: 4,
                records: 2,
                skipped: 2
            }
        );
    }

    #[test]
    fn parse_file_missing_input_is_read_error() {
        let parser = QuoteLineParser::new();
        let err = parser
            .parse_file("/definitely/not/here/quotes.txt", None)
            .unwrap_err();
        assert!(matches!(err, ImportError::Read { .. }));
    }
}
