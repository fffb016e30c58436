//! User-facing console output.

mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use std::path::PathBuf;

/// Display the numbered preview list of merge candidates.
///
/// The numbering matches the order the files will be merged in, so it is
/// printed after any sorting has been applied.
pub fn display_candidates(formatter: &OutputFormatter, pdfs: &[PathBuf]) {
    formatter.info(&format!("Found {} PDFs to merge:", pdfs.len()));
    for (index, pdf) in pdfs.iter().enumerate() {
        formatter.plain(&format!("{:>3} {}", index + 1, pdf.display()));
    }
}
