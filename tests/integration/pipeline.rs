//! End-to-end resolve → validate → sort → merge pipeline tests.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use pdfops::config::{MergeConfig, SortKey};
use pdfops::io::PdfReader;
use pdfops::merge::Merger;
use pdfops::output::OutputFormatter;
use pdfops::{resolve, sort, validate};

use crate::common::create_test_pdf;

fn glob_config(temp: &TempDir, output: PathBuf) -> MergeConfig {
    MergeConfig {
        files: vec![],
        dir: temp.path().to_path_buf(),
        pattern: "*.pdf".to_string(),
        from_list: None,
        sort: None,
        output,
        assume_yes: true,
    }
}

#[test]
fn test_glob_pipeline_merges_all_pdfs_in_dir() {
    let temp = TempDir::new().unwrap();
    create_test_pdf(temp.path(), "a.pdf", 1);
    create_test_pdf(temp.path(), "b.pdf", 2);
    fs::write(temp.path().join("notes.txt"), b"ignored").unwrap();

    let output = temp.path().join("out").join("merged.pdf");
    let config = glob_config(&temp, output.clone());

    let candidates = resolve::resolve_candidates(&config).unwrap();
    let pdfs = validate::filter_existing_pdfs(candidates);
    assert_eq!(pdfs.len(), 2);

    let report = Merger::new()
        .merge(&pdfs, &config.output, &OutputFormatter::plain_only())
        .unwrap();

    assert_eq!(report.merged_count(), 2);
    assert_eq!(report.total_pages, 3);
    assert!(output.exists());
}

#[test]
fn test_explicit_files_pipeline_preserves_argument_order() {
    let temp = TempDir::new().unwrap();
    create_test_pdf(temp.path(), "z.pdf", 1);
    create_test_pdf(temp.path(), "a.pdf", 1);

    let mut config = glob_config(&temp, temp.path().join("merged.pdf"));
    config.files = vec![PathBuf::from("z.pdf"), PathBuf::from("a.pdf")];

    let candidates = resolve::resolve_candidates(&config).unwrap();
    let pdfs = validate::filter_existing_pdfs(candidates);

    assert_eq!(
        pdfs,
        vec![temp.path().join("z.pdf"), temp.path().join("a.pdf")]
    );
}

#[test]
fn test_list_file_pipeline_skips_non_pdf_lines() {
    let temp = TempDir::new().unwrap();
    let a = create_test_pdf(temp.path(), "a.pdf", 1);
    let b = create_test_pdf(temp.path(), "b.pdf", 1);

    let list = temp.path().join("inputs.txt");
    fs::write(
        &list,
        format!("{}\nREADME.md\n{}\n", a.display(), b.display()),
    )
    .unwrap();

    let mut config = glob_config(&temp, temp.path().join("merged.pdf"));
    config.from_list = Some(list);

    let candidates = resolve::resolve_candidates(&config).unwrap();
    let pdfs = validate::filter_existing_pdfs(candidates);
    assert_eq!(pdfs, vec![a, b]);

    let report = Merger::new()
        .merge(&pdfs, &config.output, &OutputFormatter::plain_only())
        .unwrap();
    assert_eq!(report.merged_count(), 2);
}

#[test]
fn test_sorted_pipeline_merges_in_size_order() {
    let temp = TempDir::new().unwrap();
    // Page counts give the files distinct sizes: more pages, more bytes.
    create_test_pdf(temp.path(), "big.pdf", 9);
    create_test_pdf(temp.path(), "small.pdf", 1);
    create_test_pdf(temp.path(), "mid.pdf", 4);

    let config = glob_config(&temp, temp.path().join("merged.pdf"));
    let candidates = resolve::resolve_candidates(&config).unwrap();
    let mut pdfs = validate::filter_existing_pdfs(candidates);

    let key: SortKey = "size".parse().unwrap();
    sort::sort_pdfs(&mut pdfs, &key);
    assert_eq!(
        pdfs,
        vec![
            temp.path().join("small.pdf"),
            temp.path().join("mid.pdf"),
            temp.path().join("big.pdf"),
        ]
    );

    let descending: SortKey = "^size".parse().unwrap();
    sort::sort_pdfs(&mut pdfs, &descending);
    assert_eq!(
        pdfs,
        vec![
            temp.path().join("big.pdf"),
            temp.path().join("mid.pdf"),
            temp.path().join("small.pdf"),
        ]
    );

    let report = Merger::new()
        .merge(&pdfs, &config.output, &OutputFormatter::plain_only())
        .unwrap();
    assert_eq!(report.merged_count(), 3);
    assert_eq!(report.total_pages, 14);

    let merged = PdfReader::load(&config.output).unwrap();
    assert_eq!(merged.get_pages().len(), 14);
}

#[test]
fn test_empty_dir_resolves_to_no_candidates() {
    let temp = TempDir::new().unwrap();
    let config = glob_config(&temp, temp.path().join("merged.pdf"));

    let candidates = resolve::resolve_candidates(&config).unwrap();
    let pdfs = validate::filter_existing_pdfs(candidates);
    assert!(pdfs.is_empty());
}
