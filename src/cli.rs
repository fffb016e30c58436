//! CLI argument parsing for pdfops.
//!
//! Defines the command-line surface using `clap` derive: a single binary with
//! `merge`, `split`, and `compress` subcommands.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::{CompressConfig, MergeConfig, SortKey};
use crate::error::{PdfOpsError, Result};

/// Command-line operations over PDF files.
#[derive(Parser, Debug)]
#[command(name = "pdfops")]
#[command(version)]
#[command(about = "Merge, split, and compress PDF files", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge a list of PDF files into one PDF file
    Merge(MergeArgs),

    /// Split a PDF file into multiple PDF files
    Split,

    /// Compress a PDF file
    Compress(CompressArgs),
}

/// Arguments for the `merge` subcommand.
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Input PDF files to merge (in order)
    ///
    /// Each file is looked up relative to --dir. When no files are given,
    /// --from-list or --pattern selects the inputs instead.
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Directory containing PDF files to merge
    ///
    /// Defaults to the current working directory.
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Filename pattern to match. Wildcards (*, ?, [ranges]) are accepted
    #[arg(short, long, value_name = "GLOB", default_value = "*.pdf")]
    pub pattern: String,

    /// File containing a list of PDF files to merge
    ///
    /// One path per line; lines not ending in .pdf are ignored.
    #[arg(short = 'L', long, value_name = "PATH")]
    pub from_list: Option<PathBuf>,

    /// Sort PDFs by a given option
    ///
    /// One of: name, date, size. Prefix with ^ for descending order.
    #[arg(short, long, value_name = "KEY", value_parser = SortKey::from_str)]
    pub sort: Option<SortKey>,

    /// Output filename
    #[arg(short, long, value_name = "PATH", default_value = "merged.pdf")]
    pub output: PathBuf,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl MergeArgs {
    /// Convert merge arguments into a validated [`MergeConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined, if
    /// `--dir` is not an existing directory, or if the `--from-list` file
    /// does not exist.
    pub fn into_config(self) -> Result<MergeConfig> {
        let dir = match self.dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(PdfOpsError::Io)?,
        };

        let config = MergeConfig {
            files: self.files,
            dir,
            pattern: self.pattern,
            from_list: self.from_list,
            sort: self.sort,
            output: self.output,
            assume_yes: self.yes,
        };

        config.validate()?;
        Ok(config)
    }
}

/// Arguments for the `compress` subcommand.
#[derive(Args, Debug)]
pub struct CompressArgs {
    /// Input PDF file to compress
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output filename
    #[arg(short, long, value_name = "PATH", default_value = "compressed.pdf")]
    pub output: PathBuf,
}

impl CompressArgs {
    /// Convert compress arguments into a validated [`CompressConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the input file does not exist or is not a
    /// regular file.
    pub fn into_config(self) -> Result<CompressConfig> {
        let config = CompressConfig {
            input: self.file,
            output: self.output,
        };

        config.validate()?;
        Ok(config)
    }
}
