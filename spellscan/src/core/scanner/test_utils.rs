use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

/// Tree with matches in `a` and `b/c`, plus files that must not qualify.
pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "a/x.go", "package a")?;
    create_test_file(&dir, "a/readme.txt", "Not source")?;
    create_test_file(&dir, "b/c/y.go", "package c")?;
    create_test_file(&dir, "b/notes.md", "Just notes")?;
    create_test_file(&dir, "d/archive.go.bak", "Backup")?;

    Ok(dir)
}
