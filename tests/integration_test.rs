//! Integration tests for dirtag
//!
//! These tests verify end-to-end functionality by creating temporary database
//! files and running the complete command workflows through the public API.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use dirtag::{
    Record,
    cli::Cli,
    commands,
    config::DirtagConfig,
    db::{Database, DbError, WriteMode, parse, serialize},
    DirtagError,
};
use clap::Parser;

/// Helper function to create a database file with the given contents
fn setup_db_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".dirtag");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

fn find(path: &Path, query: &str) -> Vec<String> {
    let db = Database::open(path).unwrap();
    let mut out = Vec::new();
    commands::find_tag(&db, query, "\n", &mut out).unwrap();
    String::from_utf8(out).unwrap().lines().map(str::to_string).collect()
}

#[test]
fn test_tagging_workflow() {
    let (_dir, path) = setup_db_file("");

    commands::new_file(&Database::open(&path).unwrap(), "report.pdf", None).unwrap();
    commands::new_file(&Database::open(&path).unwrap(), "notes.md", Some("home")).unwrap();
    commands::add_tag(&Database::open(&path).unwrap(), "report.pdf", "work").unwrap();
    commands::add_tag(&Database::open(&path).unwrap(), "report.pdf", "urgent").unwrap();

    assert_eq!(read(&path), "report.pdf all:work:urgent\nnotes.md all:home\n");
    assert_eq!(find(&path, "work:urgent"), vec!["report.pdf"]);
    assert_eq!(find(&path, "all"), vec!["report.pdf", "notes.md"]);
    assert!(find(&path, "work:home").is_empty());

    commands::clear_tag(&Database::open(&path).unwrap(), "report.pdf").unwrap();
    assert_eq!(read(&path), "report.pdf all\nnotes.md all:home\n");

    commands::remove_file(&Database::open(&path).unwrap(), "notes.md").unwrap();
    assert_eq!(read(&path), "report.pdf all\n");
}

#[test]
fn test_add_tag_example() {
    let (_dir, path) = setup_db_file("a.txt all\n");
    Database::open(&path).unwrap().add_tag("a.txt", "x").unwrap();

    let records = Database::open(&path).unwrap().records().to_vec();
    assert_eq!(records, vec![Record::new("a.txt".into(), vec!["all".into(), "x".into()])]);
}

#[test]
fn test_clear_tag_example() {
    let (_dir, path) = setup_db_file("a.txt work:urgent\n");
    Database::open(&path).unwrap().clear_tag("a.txt").unwrap();

    let records = Database::open(&path).unwrap().records().to_vec();
    assert_eq!(records, vec![Record::unregistered("a.txt")]);
}

#[test]
fn test_remove_file_example() {
    let (_dir, path) = setup_db_file("a.txt all\nb.txt all\n");
    Database::open(&path).unwrap().remove_file("a.txt").unwrap();

    let records = Database::open(&path).unwrap().records().to_vec();
    assert_eq!(records, vec![Record::unregistered("b.txt")]);
}

#[test]
fn test_find_tag_example() {
    let (_dir, path) = setup_db_file("a.txt work:urgent\nb.txt home\n");
    let db = Database::open(&path).unwrap();

    let mut out = Vec::new();
    db.find_tag("urgent", ";", &mut out).unwrap();
    assert_eq!(out, b"a.txt;");
}

#[test]
fn test_missing_database_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let err = Database::open(dir.path().join(".dirtag")).unwrap_err();
    assert!(matches!(err, DbError::ConfigOpen { .. }));

    let err: DirtagError = err.into();
    assert!(err.to_string().starts_with("could not open file "));
}

#[test]
fn test_malformed_database_fails_to_load() {
    let (_dir, path) = setup_db_file("a.txt all\nbroken");
    let err = Database::open(&path).unwrap_err();
    assert!(matches!(err, DbError::Format { line: 2, .. }));
    assert_eq!(read(&path), "a.txt all\nbroken");
}

#[test]
fn test_unknown_path_leaves_file_byte_identical() {
    let original = "a.txt work\nb.txt home:x\n";
    let (_dir, path) = setup_db_file(original);
    let db = Database::open(&path).unwrap();

    db.add_tag("nope", "x").unwrap();
    db.clear_tag("nope").unwrap();
    db.remove_file("nope").unwrap();
    assert_eq!(read(&path), original);
}

#[test]
fn test_atomic_mode_matches_truncate_mode() {
    let contents = "a.txt all\nb.txt work\na.txt home\n";
    let (_dir_a, truncate_path) = setup_db_file(contents);
    let (_dir_b, atomic_path) = setup_db_file(contents);

    Database::open(&truncate_path).unwrap().add_tag("a.txt", "x").unwrap();
    Database::open(&atomic_path)
        .unwrap()
        .with_write_mode(WriteMode::Atomic)
        .add_tag("a.txt", "x")
        .unwrap();

    assert_eq!(read(&truncate_path), read(&atomic_path));
    assert_eq!(read(&atomic_path), "a.txt all:x\nb.txt work\na.txt home:x\n");
}

#[test]
fn test_serialize_parse_roundtrip() {
    let records = vec![
        Record::new("src/main.rs".into(), vec!["all".into(), "code".into()]),
        Record::new("a.txt".into(), vec!["x".into()]),
        Record::unregistered("b.txt"),
    ];
    let text: String = records.iter().map(serialize).collect();
    assert_eq!(parse(&text).unwrap(), records);
}

#[test]
fn test_cli_options_select_database_and_delimiter() {
    let (_dir, path) = setup_db_file("a.txt x\nb.txt x\n");
    let path_arg = path.to_str().unwrap();

    let cli = Cli::parse_from(["dirtag", "-c", path_arg, "-d", "\\0", "find-tag", "x"]);
    let resolved = cli.resolve(&DirtagConfig::default());
    assert_eq!(resolved.database, path);

    let db = Database::open(&resolved.database).unwrap();
    let mut out = Vec::new();
    commands::find_tag(&db, "x", &resolved.delimiter, &mut out).unwrap();
    assert_eq!(out, b"a.txt\0b.txt\0");
}
