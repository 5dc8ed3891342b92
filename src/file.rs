// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Ensure the target directory exists (create it if missing).
pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write one rendered page into `dir`, returning the full path.
pub fn write_page(
    dir: &Path,
    filename: &str,
    contents: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = dir.join(filename);
    fs::write(&path, contents)?;
    Ok(path)
}
