//! PDF loading.

use std::path::Path;

use crate::error::{PdfOpsError, Result};

/// Loads PDF documents from disk with typed errors.
pub struct PdfReader;

impl PdfReader {
    /// Load a PDF document from a file.
    ///
    /// # Errors
    ///
    /// Returns [`PdfOpsError::FileNotFound`] when the path does not exist and
    /// [`PdfOpsError::FailedToLoadPdf`] when the library cannot parse it
    /// (corrupt data, encrypted documents, truncated files).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<lopdf::Document> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PdfOpsError::file_not_found(path.to_path_buf()));
        }

        lopdf::Document::load(path)
            .map_err(|err| PdfOpsError::failed_to_load_pdf(path.to_path_buf(), err.to_string()))
    }
}
