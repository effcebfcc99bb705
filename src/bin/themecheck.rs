use clap::Parser;
use failure::Error;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;
use themecheck::session::{self, MemoryStore, Session};
use themecheck::{theme, to_json_schema};

/// Check a theme config document against the fixed contract.
#[derive(Debug, Parser)]
#[command(name = "themecheck", version, about)]
struct Args {
    /// Document to check; reads stdin when omitted.
    file: Option<PathBuf>,

    /// Print the JSON-Schema export of the contract and exit.
    #[arg(long, conflicts_with = "format")]
    export_schema: bool,

    /// Pretty-print the document instead of checking it (valid JSON only).
    #[arg(long)]
    format: bool,
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Args::parse();

    if args.export_schema {
        let exported = to_json_schema(&theme::theme_config());
        println!("{}", serde_json::to_string_pretty(&exported)?);
        return Ok(());
    }

    let text = match &args.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if args.format {
        match session::format_document(&text) {
            Some(pretty) => println!("{}", pretty),
            None => {
                eprintln!("{}", session::INVALID_JSON_MESSAGE);
                process::exit(1);
            }
        }
        return Ok(());
    }

    let session = Session::new(MemoryStore::default());
    let report = session.review(&text);
    println!("{}", report.to_display());
    if !report.is_valid() {
        process::exit(1);
    }

    Ok(())
}
