//! Candidate path resolution for the merge command.
//!
//! Turns CLI input into an ordered sequence of candidate paths. The three
//! input modes are mutually exclusive; the first non-empty one wins:
//! explicit file arguments, then the list-file, then the glob pattern.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::config::MergeConfig;
use crate::error::{PdfOpsError, Result};

/// Resolve the merge candidate set for a configuration.
///
/// Order reflects discovery order: argument order for explicit files,
/// line order for a list-file, and glob iteration order for a pattern.
///
/// # Errors
///
/// Returns an error if the list-file cannot be read, the pattern is not a
/// valid glob, or a glob entry cannot be processed.
pub fn resolve_candidates(config: &MergeConfig) -> Result<Vec<PathBuf>> {
    if !config.files.is_empty() {
        return Ok(config
            .files
            .iter()
            .map(|file| config.dir.join(file))
            .collect());
    }

    if let Some(list) = &config.from_list {
        return read_list_file(list);
    }

    expand_pattern(&config.dir, &config.pattern)
}

/// Read candidate paths from a list-file, one per line.
///
/// Keeps lines whose trimmed text ends with `.pdf`; everything else
/// (comments, blank lines, stray notes) is ignored. Lines are used verbatim
/// as paths and are NOT resolved against `--dir`; relative entries are
/// relative to the process working directory.
pub fn read_list_file(path: &Path) -> Result<Vec<PathBuf>> {
    let file = File::open(path).map_err(|source| PdfOpsError::FailedToReadListFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut candidates = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| PdfOpsError::FailedToReadListFile {
            path: path.to_path_buf(),
            source,
        })?;

        let line = line.trim();
        if line.ends_with(".pdf") {
            candidates.push(PathBuf::from(line));
        }
    }

    Ok(candidates)
}

/// Expand a glob pattern rooted at `dir`.
fn expand_pattern(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full_pattern = dir.join(pattern);
    let paths = glob::glob(&full_pattern.to_string_lossy())?;

    let mut candidates = Vec::new();
    for entry in paths {
        candidates.push(entry?);
    }

    Ok(candidates)
}
