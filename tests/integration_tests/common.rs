// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn setup_output_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    Ok(temp_dir)
}

pub fn assert_is_png(path: &Path) {
    let bytes = fs::read(path).expect("figure file should exist");
    assert!(
        bytes.len() > 8,
        "figure file is empty: {}",
        path.display()
    );
    assert_eq!(
        &bytes[..8],
        b"\x89PNG\r\n\x1a\n",
        "file is not a PNG: {}",
        path.display()
    );
}
