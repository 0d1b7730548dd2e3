use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use schema2ld::catalog;
use schema2ld::emitter::Format;
use schema2ld::generator::write_term_file;

/// Project dataset archive record types to JSON-LD term graphs.
#[derive(Parser)]
#[command(name = "schema2ld", version, about)]
struct Cli {
    /// Output directory for term documents.
    #[arg(short, long, value_name = "DIR", default_value = "terms")]
    output: PathBuf,

    /// Output format: yaml, json.
    #[arg(short, long, value_name = "FORMAT", default_value = "yaml")]
    format: String,

    /// Generate only the named record types (repeatable).
    #[arg(short = 't', long = "type", value_name = "NAME")]
    types: Vec<String>,

    /// List available record types and exit.
    #[arg(long)]
    list: bool,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let records = catalog::all();

    if cli.list {
        for record in &records {
            println!("{}", record.name);
        }
        return Ok(());
    }

    let format = Format::from_name(&cli.format)
        .ok_or_else(|| format!("Unknown format: {}. Use 'yaml' or 'json'.", cli.format))?;

    let selected: Vec<_> = if cli.types.is_empty() {
        records
    } else {
        for name in &cli.types {
            if !records.iter().any(|r| r.name == name) {
                return Err(format!(
                    "Unknown record type: {name}. Use --list to see available types."
                )
                .into());
            }
        }
        records
            .into_iter()
            .filter(|r| cli.types.iter().any(|name| name == r.name))
            .collect()
    };

    fs::create_dir_all(&cli.output)?;

    for record in &selected {
        let path = write_term_file(record, &cli.output, format)?;
        if cli.verbose {
            eprintln!("Wrote {}", path.display());
        }
    }

    if !cli.quiet {
        eprintln!(
            "Generated {} term documents in {}",
            selected.len(),
            cli.output.display()
        );
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
