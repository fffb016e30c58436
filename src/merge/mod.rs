//! PDF merging: per-file append fold and report types.

mod merger;

pub use merger::{AppendOutcome, MergeReport, Merger, SkipReason};
