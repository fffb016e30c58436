//! PDF content-stream compression.
//!
//! Re-encodes a document's streams in a lossless, size-reducing form. The
//! actual algorithm is delegated to `lopdf::Document::compress`, which
//! Flate-encodes every uncompressed stream; rendered output is unchanged.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::io::{PdfReader, PdfWriter};

/// Result of a compress operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressReport {
    /// Input PDF path.
    pub input: PathBuf,

    /// Output PDF path.
    pub output: PathBuf,

    /// Input size in bytes, measured before compression.
    pub size_before: u64,

    /// Output size in bytes, measured after the write.
    pub size_after: u64,
}

impl CompressReport {
    /// Percentage size reduction, `(before - after) / before * 100`.
    ///
    /// A zero-byte input reports 0% rather than dividing by zero. The value
    /// is negative when the output grew, which can happen for inputs whose
    /// streams were already compressed.
    pub fn reduction_percent(&self) -> f64 {
        if self.size_before == 0 {
            return 0.0;
        }
        (self.size_before as f64 - self.size_after as f64) / self.size_before as f64 * 100.0
    }
}

/// Compress a PDF's streams and write the result to `output`.
///
/// Unlike the merge fold there is no per-page recovery: any read or write
/// failure is fatal for the whole operation and propagates to the caller.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, or if the output
/// cannot be written.
pub fn compress_pdf(input: &Path, output: &Path) -> Result<CompressReport> {
    let size_before = fs::metadata(input)?.len();

    let mut doc = PdfReader::load(input)?;
    doc.compress();
    PdfWriter::write(&mut doc, output)?;

    let size_after = fs::metadata(output)?.len();

    Ok(CompressReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        size_before,
        size_after,
    })
}
