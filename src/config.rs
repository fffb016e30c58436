//! Configuration module for pdfops.
//!
//! Transforms CLI arguments into validated, normalized configuration that
//! drives each subcommand. Required path arguments (`--dir`, `--from-list`,
//! the compress input) are checked here, before any command body runs.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{PdfOpsError, Result};

/// Attribute of a PDF path that a sort compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Case-insensitive lexicographic order on the full path string.
    Name,
    /// Filesystem modification time.
    Date,
    /// File size in bytes.
    Size,
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest key first (default).
    #[default]
    Ascending,
    /// Largest key first, selected with a leading `^` on the sort key.
    Descending,
}

/// A parsed `--sort` value: field plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    /// Attribute to compare.
    pub field: SortField,
    /// Direction to order in.
    pub order: SortOrder,
}

impl FromStr for SortKey {
    type Err = PdfOpsError;

    /// Parse a sort key from string.
    ///
    /// Accepts `name`, `date`, `size`, optionally prefixed with `^` for
    /// descending order. Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let (order, field) = match s.strip_prefix('^') {
            Some(rest) => (SortOrder::Descending, rest),
            None => (SortOrder::Ascending, s),
        };

        let field = match field.to_lowercase().as_str() {
            "name" => SortField::Name,
            "date" => SortField::Date,
            "size" => SortField::Size,
            _ => {
                return Err(PdfOpsError::InvalidSortKey {
                    value: s.to_string(),
                });
            }
        };

        Ok(Self { field, order })
    }
}

impl SortField {
    /// Human-readable field name used in console notices.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Date => "date",
            Self::Size => "size",
        }
    }
}

impl SortOrder {
    /// Human-readable direction used in console notices.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Complete configuration for a merge operation.
///
/// Derived and validated from CLI arguments. The three input modes
/// (`files`, `from_list`, `pattern`) are mutually exclusive with precedence
/// explicit files > list-file > pattern.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Explicit input files, joined onto `dir` by the resolver.
    pub files: Vec<PathBuf>,

    /// Base directory for explicit files and pattern expansion.
    pub dir: PathBuf,

    /// Glob pattern expanded under `dir` when no other input mode is used.
    pub pattern: String,

    /// Optional list-file naming one PDF path per line.
    pub from_list: Option<PathBuf>,

    /// Optional ordering applied after validation.
    pub sort: Option<SortKey>,

    /// Output PDF path, created or overwritten on a successful merge.
    pub output: PathBuf,

    /// Skip the confirmation prompt.
    pub assume_yes: bool,
}

impl MergeConfig {
    /// Validate path arguments before the command body runs.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` is not an existing directory or if the
    /// list-file named by `from_list` is not an existing regular file.
    pub fn validate(&self) -> Result<()> {
        if !self.dir.is_dir() {
            return Err(PdfOpsError::DirNotFound {
                path: self.dir.clone(),
            });
        }

        if let Some(list) = &self.from_list {
            if !list.exists() {
                return Err(PdfOpsError::file_not_found(list.clone()));
            }
            if !list.is_file() {
                return Err(PdfOpsError::not_a_file(list.clone()));
            }
        }

        Ok(())
    }
}

/// Complete configuration for a compress operation.
#[derive(Debug, Clone)]
pub struct CompressConfig {
    /// Input PDF path.
    pub input: PathBuf,

    /// Output PDF path, created or overwritten.
    pub output: PathBuf,
}

impl CompressConfig {
    /// Validate the input path before the command body runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the input does not exist or is not a regular file.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(PdfOpsError::file_not_found(self.input.clone()));
        }
        if !self.input.is_file() {
            return Err(PdfOpsError::not_a_file(self.input.clone()));
        }
        Ok(())
    }
}
