//! Merge behavior around missing and invalid inputs.

use std::fs;
use tempfile::TempDir;

use pdfops::io::PdfReader;
use pdfops::merge::{AppendOutcome, Merger, SkipReason};
use pdfops::output::OutputFormatter;

use crate::common::create_test_pdf;

#[test]
fn test_missing_file_is_skipped_and_rest_merged() {
    let temp = TempDir::new().unwrap();
    let a = create_test_pdf(temp.path(), "a.pdf", 1);
    let missing = temp.path().join("missing.pdf");
    let b = create_test_pdf(temp.path(), "b.pdf", 1);
    let output = temp.path().join("merged.pdf");

    let report = Merger::new()
        .merge(
            &[a.clone(), missing.clone(), b.clone()],
            &output,
            &OutputFormatter::plain_only(),
        )
        .unwrap();

    assert_eq!(report.merged_count(), 2);
    assert_eq!(report.skipped_count(), 1);
    assert!(output.exists());

    let merged = PdfReader::load(&output).unwrap();
    assert_eq!(merged.get_pages().len(), 2);

    match &report.outcomes[1] {
        AppendOutcome::Skipped { path, reason } => {
            assert_eq!(path, &missing);
            assert_eq!(reason, &SkipReason::NotFound);
        }
        other => panic!("expected skip for missing file, got {other:?}"),
    }
}

#[test]
fn test_corrupt_file_is_skipped_with_read_error() {
    let temp = TempDir::new().unwrap();
    let a = create_test_pdf(temp.path(), "a.pdf", 2);
    let corrupt = temp.path().join("corrupt.pdf");
    fs::write(&corrupt, b"%PDF-1.4 truncated nonsense").unwrap();
    let output = temp.path().join("merged.pdf");

    let report = Merger::new()
        .merge(&[a, corrupt], &output, &OutputFormatter::plain_only())
        .unwrap();

    assert_eq!(report.merged_count(), 1);
    assert_eq!(report.total_pages, 2);
    assert!(matches!(
        report.outcomes[1],
        AppendOutcome::Skipped {
            reason: SkipReason::ReadError(_),
            ..
        }
    ));
}

#[test]
fn test_all_invalid_inputs_produce_no_output() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.pdf");
    let corrupt = temp.path().join("corrupt.pdf");
    fs::write(&corrupt, b"junk").unwrap();
    let output = temp.path().join("merged.pdf");

    let report = Merger::new()
        .merge(&[missing, corrupt], &output, &OutputFormatter::plain_only())
        .unwrap();

    assert_eq!(report.merged_count(), 0);
    assert!(!report.written);
    assert!(!output.exists());
}

#[test]
fn test_merged_count_counts_files_not_pages() {
    let temp = TempDir::new().unwrap();
    let a = create_test_pdf(temp.path(), "a.pdf", 5);
    let b = create_test_pdf(temp.path(), "b.pdf", 3);
    let output = temp.path().join("merged.pdf");

    let report = Merger::new()
        .merge(&[a, b], &output, &OutputFormatter::plain_only())
        .unwrap();

    assert_eq!(report.merged_count(), 2);
    assert_eq!(report.total_pages, 8);
}
