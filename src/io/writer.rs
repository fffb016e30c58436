//! PDF saving.

use std::io::{BufWriter, Write};
use std::path::Path;

use lopdf::Document;

use crate::error::{PdfOpsError, Result};

/// Serializes PDF documents to disk.
pub struct PdfWriter;

impl PdfWriter {
    /// Write the given PDF [`Document`] to the specified file path.
    ///
    /// Creates any missing parent directories first and writes through a
    /// buffered writer. An existing file at the path is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`PdfOpsError::FailedToCreateOutput`] if the file (or its
    /// parent directories) cannot be created and [`PdfOpsError::FailedToWrite`]
    /// if serialization or flushing fails.
    pub fn write<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| {
                PdfOpsError::FailedToCreateOutput {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        }

        let file =
            std::fs::File::create(path).map_err(|source| PdfOpsError::FailedToCreateOutput {
                path: path.to_path_buf(),
                source,
            })?;
        let mut writer = BufWriter::new(file);

        doc.save_to(&mut writer)
            .map_err(|err| PdfOpsError::FailedToWrite {
                path: path.to_path_buf(),
                source: std::io::Error::other(err),
            })?;

        writer.flush().map_err(|source| PdfOpsError::FailedToWrite {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }
}
