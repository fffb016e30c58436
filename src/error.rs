//! Error types for pdfops.
//!
//! All failures use the closed [`PdfOpsError`] set. Recoverable errors (a bad
//! candidate inside a merge) are swallowed at the component boundary and
//! surfaced as console warnings; everything else propagates to the process
//! boundary and terminates the command with [`PdfOpsError::exit_code`].

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfops operations.
pub type Result<T> = std::result::Result<T, PdfOpsError>;

/// Main error type for pdfops operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfOpsError {
    /// A required input path does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// A required input path exists but is not a regular file.
    #[error("Not a file: {}", path.display())]
    NotAFile {
        /// Path that is not a regular file.
        path: PathBuf,
    },

    /// The `--dir` option does not name an existing directory.
    #[error("Directory not found: {}", path.display())]
    DirNotFound {
        /// Path that is not an existing directory.
        path: PathBuf,
    },

    /// A PDF could not be parsed by the underlying library.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason reported by the PDF library.
        reason: String,
    },

    /// Splicing a document's pages into the merged output failed.
    #[error("Failed to append PDF: {}\n  Reason: {reason}", path.display())]
    AppendFailed {
        /// Path to the PDF being appended.
        path: PathBuf,
        /// Description of what went wrong.
        reason: String,
    },

    /// The list-file named by `--from-list` could not be read.
    #[error("Failed to read list file: {}\n  Reason: {source}", path.display())]
    FailedToReadListFile {
        /// Path to the list file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The `--pattern` value is not a valid glob.
    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    /// A matched glob entry could not be read.
    #[error("Failed to process glob entry: {0}")]
    GlobEntry(#[from] glob::GlobError),

    /// The `--sort` value is not one of the documented keys.
    #[error("Invalid sort key: {value}. Must be one of: name, date, size, ^name, ^date, ^size")]
    InvalidSortKey {
        /// The rejected value.
        value: String,
    },

    /// The output file could not be created.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing the output file failed part-way.
    #[error("Failed to write output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// User declined the confirmation prompt.
    #[error("Operation cancelled by user")]
    Cancelled,

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl PdfOpsError {
    /// Create a `FileNotFound` error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a `NotAFile` error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create a `FailedToLoadPdf` error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create an `AppendFailed` error.
    pub fn append_failed(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::AppendFailed {
            path,
            reason: reason.into(),
        }
    }

    /// Check if this error is recoverable inside the merge fold.
    ///
    /// Recoverable errors turn into per-file skips; the merge continues.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. } | Self::FailedToLoadPdf { .. } | Self::AppendFailed { .. }
        )
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } => 2,
            Self::NotAFile { .. } => 2,
            Self::DirNotFound { .. } => 2,
            Self::FailedToReadListFile { .. } => 2,
            Self::FailedToLoadPdf { .. } => 3,
            Self::AppendFailed { .. } => 3,
            Self::InvalidPattern(_) => 1,
            Self::GlobEntry(_) => 1,
            Self::InvalidSortKey { .. } => 1,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::Io(_) => 5,
            Self::Cancelled => 130, // Standard exit code for SIGINT
        }
    }
}
