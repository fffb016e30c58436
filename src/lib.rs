//! pdfops - Command-line operations over PDF files.
//!
//! This library backs the `pdfops` binary and provides:
//!
//! - Merging multiple PDFs into one, with per-file skip on failure
//! - Candidate discovery from explicit files, a list-file, or a glob pattern
//! - Optional ordering by name, modification time, or size
//! - Content-stream compression of a single PDF
//!
//! The PDF page model, object graph, and stream encoding are delegated to
//! `lopdf`; this crate is discovery, ordering, and reporting around it.
//!
//! # Examples
//!
//! ```no_run
//! use pdfops::merge::Merger;
//! use pdfops::output::OutputFormatter;
//! use std::path::{Path, PathBuf};
//!
//! # fn example() -> pdfops::Result<()> {
//! let inputs = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let formatter = OutputFormatter::plain_only();
//!
//! let report = Merger::new().merge(&inputs, Path::new("merged.pdf"), &formatter)?;
//! println!("Merged {} file(s)", report.merged_count());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod compress;
pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod resolve;
pub mod sort;
pub mod validate;

pub use error::{PdfOpsError, Result};

use crate::cli::{Cli, Command};
use crate::config::{CompressConfig, MergeConfig};
use crate::merge::Merger;
use crate::output::OutputFormatter;

/// Run the parsed command line to completion.
///
/// # Errors
///
/// Returns the first unrecovered error; the caller maps it to a process
/// exit code via [`PdfOpsError::exit_code`].
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Merge(args) => run_merge(args.into_config()?),
        Command::Split => {
            run_split();
            Ok(())
        }
        Command::Compress(args) => run_compress(args.into_config()?),
    }
}

/// The `merge` command body: resolve, validate, sort, preview, confirm,
/// merge, report.
fn run_merge(config: MergeConfig) -> Result<()> {
    let formatter = OutputFormatter::new();

    let candidates = resolve::resolve_candidates(&config)?;
    let mut pdfs = validate::filter_existing_pdfs(candidates);

    if let Some(key) = &config.sort {
        formatter.notice(&format!(
            "Sorting PDFs by {} in {} order.",
            key.field.as_str(),
            key.order.as_str()
        ));
        sort::sort_pdfs(&mut pdfs, key);
    }

    output::display_candidates(&formatter, &pdfs);

    if pdfs.is_empty() {
        formatter.error("No PDFs found.");
        return Ok(());
    }

    if !config.assume_yes && !formatter.confirm("Are you sure you want to merge these PDFs?")? {
        return Err(PdfOpsError::Cancelled);
    }

    let report = Merger::new().merge(&pdfs, &config.output, &formatter)?;

    if report.merged_count() > 0 {
        formatter.info(&format!(
            "Merged {} PDFs to `{}`.",
            report.merged_count(),
            report.output.display()
        ));
    } else {
        formatter.error("No valid PDFs found to merge.");
    }

    Ok(())
}

/// The `split` command body: stub only, always succeeds.
fn run_split() {
    let formatter = OutputFormatter::new();
    formatter.notice("PDF split not yet implemented.");
}

/// The `compress` command body: compress and print before/after sizes.
fn run_compress(config: CompressConfig) -> Result<()> {
    let formatter = OutputFormatter::new();

    let report = compress::compress_pdf(&config.input, &config.output)?;

    formatter.info(&format!(
        "Compressed `{}` to `{}`.",
        report.input.display(),
        report.output.display()
    ));
    formatter.info(&format!("File size before: {} bytes", report.size_before));
    formatter.info(&format!(
        "File size after: {} bytes ({:.2}%)",
        report.size_after,
        report.reduction_percent()
    ));

    Ok(())
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
