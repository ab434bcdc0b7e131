// transform-quotes: parse a quotes text file into the intermediate JSON document.
// Each line like `12:“quote” —Author, bio` becomes one record; other lines are skipped.

use clap::{CommandFactory, Parser};
use quotes_import::progress::{self, ProgressManager};
use quotes_import::{document, logger, QuoteLineParser};
use std::io::{self, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Parse a quotes text file into a JSON document")]
struct Args {
    /// Enable debug logging (disables progress bars).
    #[arg(long)]
    debug: bool,

    /// Raw quotes text file, one quote per line.
    #[arg(env = "QUOTES_INPUT")]
    input: String,

    /// JSON document to write.
    #[arg(env = "QUOTES_OUTPUT")]
    output: String,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if std::env::args().len() == 1 && std::env::var_os("QUOTES_INPUT").is_none() {
        Args::command().print_help()?;
        eprintln!();
        std::process::exit(1);
    }
    let args = Args::parse();
    logger::set_debug(args.debug);

    let start = Instant::now();
    logger::debug(&format!("main: Input file: {}", args.input));
    logger::debug(&format!("main: Output file: {}", args.output));

    let progress = ProgressManager::new(!args.debug);
    let bar = progress.new_file_bar(&args.input, "Parse");

    let parser = QuoteLineParser::new();
    let (records, stats) = match parser.parse_file(&args.input, bar.as_ref()) {
        Ok(parsed) => parsed,
        Err(e) => {
            logger::error(&e.to_string());
            return Err(e.into());
        }
    };

    if let Err(e) = document::write_quotes(&args.output, &records) {
        logger::error(&e.to_string());
        return Err(e.into());
    }
    logger::debug(&format!("Timing: transform took {:?}", start.elapsed()));

    let sep = "=".repeat(60);
    let mut stderr = io::stderr();
    writeln!(stderr, "\n{}\nSUMMARY\n{}", sep, sep)?;
    writeln!(stderr, "Lines:    {}", stats.lines)?;
    writeln!(stderr, "Quotes:   {}", stats.records)?;
    writeln!(stderr, "Skipped:  {}", stats.skipped)?;
    writeln!(stderr, "Output:   {}", progress::basename(&args.output))?;
    writeln!(stderr, "{}", sep)?;

    logger::info(&format!(
        "Wrote {} quotes to {}",
        records.len(),
        args.output
    ));
    Ok(())
}
