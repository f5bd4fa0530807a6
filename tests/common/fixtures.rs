//! Palette fixtures written to temporary files.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Black, white, black: three flat stops
pub const GRAY_PEAK: &str = "\
color: 0 0 0 0
color: 50 255 255 255
color: 100 0 0 0
";

/// A precipitation-style palette with transition stops, deliberately unsorted
pub const PRECIP: &str = "\
; precipitation rate
Product: precip
COLOR: 10 0 120 255 0 200 255
COLOR: 0 255 255 255
COLOR: 25 0 255 0 255 255 0
COLOR: 50 255 128 0 255 0 0
COLOR: 100 128 0 128
";

/// Write `contents` to `name` inside a fresh temporary directory
pub fn write_palette(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write palette");
    (dir, path)
}
