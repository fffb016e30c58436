//! Core PDF merging implementation.
//!
//! The merge is a fold over the validated inputs: each file either has its
//! pages spliced into the accumulated document or is skipped with a reason,
//! and a single bad file never aborts the whole operation. The output file
//! is only written when at least one source was appended.

use lopdf::{Document, Object, ObjectId};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{PdfOpsError, Result};
use crate::io::{PdfReader, PdfWriter};
use crate::output::OutputFormatter;

/// Why a source file was skipped during a merge.
///
/// Closed set of per-file failure modes; the underlying library's errors are
/// folded into these variants instead of being caught open-endedly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "detail")]
pub enum SkipReason {
    /// The file disappeared between validation and append time.
    NotFound,
    /// The file could not be parsed or its pages could not be spliced in.
    ReadError(String),
    /// Intermediate data for the file could not be written.
    WriteError(String),
}

impl From<PdfOpsError> for SkipReason {
    fn from(err: PdfOpsError) -> Self {
        match err {
            PdfOpsError::FileNotFound { .. } => Self::NotFound,
            PdfOpsError::FailedToCreateOutput { source, .. }
            | PdfOpsError::FailedToWrite { source, .. } => Self::WriteError(source.to_string()),
            other => Self::ReadError(other.to_string()),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::ReadError(detail) => write!(f, "{detail}"),
            Self::WriteError(detail) => write!(f, "{detail}"),
        }
    }
}

/// Per-file result of the merge fold.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AppendOutcome {
    /// The file's pages were appended to the accumulated document.
    Appended {
        /// Source file.
        path: PathBuf,
        /// Number of pages the file contributed.
        pages: usize,
    },
    /// The file was skipped; the merge continued without it.
    Skipped {
        /// Source file.
        path: PathBuf,
        /// Why it was skipped.
        reason: SkipReason,
    },
}

/// Result of a merge operation.
///
/// `merged_count` counts files, not pages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeReport {
    /// Output path the merged document was (or would have been) written to.
    pub output: PathBuf,

    /// One outcome per input, in input order.
    pub outcomes: Vec<AppendOutcome>,

    /// Page count of the written document; zero when nothing was written.
    pub total_pages: usize,

    /// Whether the output file was actually produced.
    pub written: bool,
}

impl MergeReport {
    /// Number of source files successfully appended.
    pub fn merged_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, AppendOutcome::Appended { .. }))
            .count()
    }

    /// Number of source files skipped.
    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.merged_count()
    }
}

/// PDF merger that appends documents in order.
pub struct Merger;

impl Merger {
    /// Create a new merger.
    pub fn new() -> Self {
        Self
    }

    /// Append each input's pages, in order, into a single output document.
    ///
    /// Files that cannot be loaded or spliced are skipped with a console
    /// warning and recorded in the report. The output file is written only
    /// when at least one file was appended; an existing file at the output
    /// path is overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error only for the final write; per-file failures are
    /// skips, not errors.
    pub fn merge(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        formatter: &OutputFormatter,
    ) -> Result<MergeReport> {
        let mut merged: Option<Document> = None;
        let mut max_id = 0;
        let mut outcomes = Vec::with_capacity(inputs.len());

        for path in inputs {
            match append_document(&mut merged, &mut max_id, path) {
                Ok(pages) => {
                    formatter.success(&format!("Appended `{}`", path.display()));
                    outcomes.push(AppendOutcome::Appended {
                        path: path.clone(),
                        pages,
                    });
                }
                Err(err) => {
                    let reason = SkipReason::from(err);
                    match &reason {
                        SkipReason::NotFound => formatter.warning(&format!(
                            "File `{}` not found. Skipping",
                            path.display()
                        )),
                        other => formatter.warning(&format!(
                            "Error appending `{}`: {other}. Skipping",
                            path.display()
                        )),
                    }
                    outcomes.push(AppendOutcome::Skipped {
                        path: path.clone(),
                        reason,
                    });
                }
            }
        }

        let mut report = MergeReport {
            output: output.to_path_buf(),
            outcomes,
            total_pages: 0,
            written: false,
        };

        if let Some(mut doc) = merged
            && report.merged_count() > 0
        {
            doc.renumber_objects();
            report.total_pages = doc.get_pages().len();
            PdfWriter::write(&mut doc, output)?;
            report.written = true;
        }

        Ok(report)
    }
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}

/// Load one document and splice its pages into the accumulated document.
///
/// The first successful load becomes the base; later documents are
/// renumbered past `max_id`, their objects moved across, and their page ids
/// pushed onto the base page tree.
fn append_document(
    merged: &mut Option<Document>,
    max_id: &mut u32,
    path: &Path,
) -> Result<usize> {
    let mut doc = PdfReader::load(path)?;
    let pages = doc.get_pages().len();

    match merged {
        None => {
            *max_id = doc.max_id;
            *merged = Some(doc);
        }
        Some(base) => {
            // Shift object ids past the accumulated document to avoid clashes.
            doc.renumber_objects_with(*max_id + 1);
            *max_id = doc.max_id;

            let doc_pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
            base.objects.extend(doc.objects);

            add_pages_to_tree(base, &doc_pages, path)?;
        }
    }

    Ok(pages)
}

/// Push page references onto the base document's page tree and bump `Count`.
fn add_pages_to_tree(merged: &mut Document, page_ids: &[ObjectId], path: &Path) -> Result<()> {
    let catalog = merged.catalog_mut().map_err(|err| {
        PdfOpsError::append_failed(path.to_path_buf(), format!("failed to get catalog: {err}"))
    })?;

    let pages_id = catalog
        .get(b"Pages")
        .and_then(|pages| pages.as_reference())
        .map_err(|err| {
            PdfOpsError::append_failed(
                path.to_path_buf(),
                format!("failed to get pages reference: {err}"),
            )
        })?;

    let pages_obj = merged.get_object_mut(pages_id).map_err(|err| {
        PdfOpsError::append_failed(path.to_path_buf(), format!("failed to get pages object: {err}"))
    })?;

    let Object::Dictionary(dict) = pages_obj else {
        return Err(PdfOpsError::append_failed(
            path.to_path_buf(),
            "pages object is not a dictionary",
        ));
    };

    let kids = dict.get_mut(b"Kids").map_err(|_| {
        PdfOpsError::append_failed(path.to_path_buf(), "pages dictionary missing Kids array")
    })?;

    if let Object::Array(kids_array) = kids {
        for &page_id in page_ids {
            kids_array.push(Object::Reference(page_id));
        }
    } else {
        return Err(PdfOpsError::append_failed(
            path.to_path_buf(),
            "Kids is not an array",
        ));
    }

    let current_count = dict.get(b"Count").and_then(|count| count.as_i64()).unwrap_or(0);
    dict.set("Count", Object::Integer(current_count + page_ids.len() as i64));

    Ok(())
}
