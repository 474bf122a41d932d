use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{LevelFilter, info};
use utf8_tables::{EmitConfig, TableGenerator};

/// Generate sorted Unicode category and case-mapping tables as C source.
#[derive(Debug, Parser)]
#[command(name = "utf8-tables", version)]
struct Args {
    /// Path to UnicodeData.txt
    db: PathBuf,

    /// Unicode version of the database, e.g. 15.1.0
    univer: String,

    /// Write the tables to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Year printed in the license header
    #[arg(long, value_name = "YEAR")]
    copyright_year: Option<u16>,

    /// Prefix for every generated array name
    #[arg(long, value_name = "PREFIX", default_value = "M_utf8_table_")]
    prefix: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = EmitConfig {
        copyright_year: args.copyright_year,
        table_prefix: args.prefix.clone(),
        ..EmitConfig::default()
    };
    let generator = TableGenerator::new(config);

    let rendered = match generator.generate_from_path(&args.db, &args.univer) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("ERROR: Failed to generate tables from {}", args.db.display());
            eprintln!("  {}", e);
            return ExitCode::FAILURE;
        }
    };

    let written = match &args.output {
        Some(path) => {
            info!("Writing tables to {}", path.display());
            fs::write(path, rendered.as_bytes())
        }
        None => io::Write::write_all(&mut io::stdout().lock(), rendered.as_bytes()),
    };
    if let Err(e) = written {
        eprintln!("ERROR: Failed to write tables");
        eprintln!("  {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
