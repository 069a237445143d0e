// Module declarations
mod cli;
mod combinations;
mod config;
mod error;
mod export;
mod manifest;
mod pattern;
mod table;
mod types;

use clap::Parser;
use env_logger::{Builder, Env};

use crate::cli::Cli;

fn main() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    match export::run(&cli) {
        Ok(summary) => {
            println!(
                "Done: {} images indexed in {} ({} of {} combinations missing)",
                summary.copied,
                summary.csv_path.display(),
                summary.skipped,
                summary.visited
            );
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}
