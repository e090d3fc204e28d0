//! Command-line unifier
//!
//! ```bash
//! mgu                 # reads default.in
//! mgu problems.in
//! ```

use clap::Parser;
use mgu::{run, MguConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "mgu", version)]
#[command(about = "Find most general unifiers for sets of term equations", long_about = None)]
struct Cli {
    /// Input file; sets are opened by a line containing `#`
    input: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = MguConfig::with_input(cli.input);

    match run(&config) {
        Ok(output) => {
            print!("{}", output.echo);
            print!("{}", output.report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("\n!!! {}", e);
            ExitCode::FAILURE
        }
    }
}
