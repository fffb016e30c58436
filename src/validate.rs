//! Candidate validation for the merge command.
//!
//! Filters resolved candidates down to paths that exist on disk, are regular
//! files, and carry the exact `.pdf` suffix. Non-matching entries are
//! silently dropped; input order is preserved.
//!
//! Encrypted-PDF detection is a known gap: such files pass validation here
//! and fail later at append time, where they are skipped with a warning.

use std::path::{Path, PathBuf};

/// Keep the candidates that are existing `.pdf` regular files.
pub fn filter_existing_pdfs(candidates: Vec<PathBuf>) -> Vec<PathBuf> {
    candidates
        .into_iter()
        .filter(|path| is_existing_pdf(path))
        .collect()
}

/// Check one candidate: regular file with a case-sensitive `.pdf` suffix.
pub fn is_existing_pdf(path: &Path) -> bool {
    path.is_file() && path.to_string_lossy().ends_with(".pdf")
}
