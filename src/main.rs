//! pdfops - Merge, split, and compress PDF files from the command line.

use clap::Parser;
use std::process;

use pdfops::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = pdfops::run(cli) {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}
