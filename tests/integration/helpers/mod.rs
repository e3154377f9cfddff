//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use ansi2svg::{ColorDepth, LineInterpreter, Span};

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Write `contents` to a file in a fresh temporary directory
pub fn temp_input(name: &str, contents: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write temp input");
    (temp_dir, path)
}

/// Interpret a single line from the default style
pub fn spans_of(line: &str) -> Vec<Span> {
    LineInterpreter::new(ColorDepth::TrueColor)
        .interpret_line(line)
        .spans
}
