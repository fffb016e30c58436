//! Compression behavior on real files.

use std::fs;
use tempfile::TempDir;

use pdfops::compress::compress_pdf;
use pdfops::io::PdfReader;

use crate::common::{create_compressible_pdf, create_test_pdf};

#[test]
fn test_compress_reports_accurate_sizes() {
    let temp = TempDir::new().unwrap();
    let input = create_compressible_pdf(temp.path(), "input.pdf");
    let output = temp.path().join("compressed.pdf");

    let report = compress_pdf(&input, &output).unwrap();

    assert_eq!(report.size_before, fs::metadata(&input).unwrap().len());
    assert_eq!(report.size_after, fs::metadata(&output).unwrap().len());
}

#[test]
fn test_compress_never_increases_page_count() {
    let temp = TempDir::new().unwrap();
    let input = create_test_pdf(temp.path(), "input.pdf", 4);
    let output = temp.path().join("compressed.pdf");

    compress_pdf(&input, &output).unwrap();

    let before = PdfReader::load(&input).unwrap().get_pages().len();
    let after = PdfReader::load(&output).unwrap().get_pages().len();
    assert_eq!(before, 4);
    assert_eq!(after, 4);
}

#[test]
fn test_compress_shrinks_uncompressed_streams() {
    let temp = TempDir::new().unwrap();
    let input = create_compressible_pdf(temp.path(), "input.pdf");
    let output = temp.path().join("compressed.pdf");

    let report = compress_pdf(&input, &output).unwrap();

    assert!(report.size_after < report.size_before);
    let percent = format!("{:.2}", report.reduction_percent());
    assert!(percent.parse::<f64>().unwrap() > 0.0);
}

#[test]
fn test_compress_overwrites_existing_output() {
    let temp = TempDir::new().unwrap();
    let input = create_compressible_pdf(temp.path(), "input.pdf");
    let output = temp.path().join("compressed.pdf");
    fs::write(&output, b"stale").unwrap();

    compress_pdf(&input, &output).unwrap();

    assert!(fs::read(&output).unwrap().starts_with(b"%PDF"));
}
