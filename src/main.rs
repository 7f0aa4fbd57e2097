//! `mqsort` command line: sort a record file by one field.

use clap::Parser;
use mqsort::record::{self, Field, RecordError};
use mqsort::{Algorithm, SortOptions};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "mqsort", version, about = "Sort a record file by one field")]
struct Cli {
    /// Input file, one `id,string,integer,float` record per line.
    input: PathBuf,

    /// Output file for the sorted records.
    output: PathBuf,

    /// `merge` (1) or `quick` (2).
    #[arg(short, long, default_value = "merge")]
    algorithm: Algorithm,

    /// `string` (1), `integer` (2) or `float` (3).
    #[arg(short, long, default_value = "string")]
    field: Field,

    /// Fixed pivot seed for quicksort.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mqsort: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), RecordError> {
    if cli.input == cli.output {
        return Err(mqsort::SortError::InvalidArgument(
            "input file and output file cannot be the same".to_string(),
        )
        .into());
    }

    info!(path = %cli.input.display(), "loading records");
    let input = BufReader::new(File::open(&cli.input)?);
    let records = record::load_records(input)?;

    let mut refs: Vec<&record::Record> = records.iter().collect();
    let options = SortOptions {
        algorithm: cli.algorithm,
        seed: cli.seed,
    };

    let start = Instant::now();
    record::sort_records(&mut refs, cli.field, options)?;
    info!(
        count = refs.len(),
        algorithm = %cli.algorithm,
        field = %cli.field,
        elapsed = ?start.elapsed(),
        "sorted records"
    );

    info!(path = %cli.output.display(), "writing records");
    let output = BufWriter::new(File::create(&cli.output)?);
    record::write_records(output, &refs)?;
    Ok(())
}
