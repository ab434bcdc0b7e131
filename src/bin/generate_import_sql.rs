// generate-import-sql: print INSERT statements for every quote in a JSON document.
// SQL goes to stdout; redirect it to a file to keep it.

use clap::{CommandFactory, Parser};
use quotes_import::progress::{self, ProgressManager};
use quotes_import::sql::{DEFAULT_STATUS, DEFAULT_TABLE};
use quotes_import::{document, logger, InsertGenerator};
use std::io::{self, BufWriter, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate SQL INSERT statements from a quotes JSON document")]
struct Args {
    /// Enable debug logging (disables progress bars).
    #[arg(long)]
    debug: bool,

    /// Target table name.
    #[arg(long, env = "QUOTES_TABLE", default_value = DEFAULT_TABLE)]
    table: String,

    /// Status used for records that carry none.
    #[arg(long, env = "QUOTES_DEFAULT_STATUS", default_value = DEFAULT_STATUS)]
    default_status: String,

    /// JSON document produced by transform-quotes.
    #[arg(env = "QUOTES_JSON")]
    input: String,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if std::env::args().len() == 1 && std::env::var_os("QUOTES_JSON").is_none() {
        Args::command().print_help()?;
        eprintln!();
        std::process::exit(1);
    }
    let args = Args::parse();
    logger::set_debug(args.debug);

    let start = Instant::now();
    logger::debug(&format!("main: Input file: {}", args.input));

    let records = match document::read_import_records(&args.input) {
        Ok(records) => records,
        Err(e) => {
            logger::error(&e.to_string());
            return Err(e.into());
        }
    };

    let progress = ProgressManager::new(!args.debug);
    let bar = progress.new_record_bar(records.len() as u64, "SQL statements");

    let generator = InsertGenerator::new(&args.table, &args.default_status);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = generator.generate(
        &records,
        &progress::basename(&args.input),
        &mut out,
        bar.as_ref(),
    )?;
    drop(out);
    logger::debug(&format!("Timing: generation took {:?}", start.elapsed()));

    let missing_bio = records.iter().filter(|r| r.author_bio.is_none()).count();
    let sep = "=".repeat(60);
    let mut stderr = io::stderr();
    writeln!(stderr, "\n{}\nSUMMARY\n{}", sep, sep)?;
    writeln!(stderr, "Inserts:     {}", written)?;
    writeln!(stderr, "Missing bio: {}", missing_bio)?;
    writeln!(stderr, "Table:       {}", args.table)?;
    writeln!(stderr, "{}", sep)?;
    Ok(())
}
