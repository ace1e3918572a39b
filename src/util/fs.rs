//! Filesystem utilities.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::glob;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path.display()))
}

/// Write a string to a file, creating parent directories if needed.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }
    fs::write(path, contents)
        .with_context(|| format!("failed to write file: {}", path.display()))
}

/// Find `*.h` files directly under `dir` (non-recursive), sorted for a
/// deterministic include order.
pub fn glob_headers(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join("*.h");
    let pattern_str = pattern.to_string_lossy();

    let mut headers = Vec::new();
    for entry in glob(&pattern_str)
        .with_context(|| format!("invalid glob pattern: {}", pattern_str))?
    {
        match entry {
            Ok(path) => {
                if path.is_file() {
                    headers.push(path);
                }
            }
            Err(e) => {
                tracing::warn!("glob error: {}", e);
            }
        }
    }

    headers.sort();
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_glob_headers_finds_only_top_level_headers() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.h"), "").unwrap();
        fs::write(tmp.path().join("a.h"), "").unwrap();
        fs::write(tmp.path().join("notes.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("src")).unwrap();
        fs::write(tmp.path().join("src/nested.h"), "").unwrap();

        let headers = glob_headers(tmp.path()).unwrap();
        let names: Vec<String> = headers
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.h", "b.h"]);
    }

    #[test]
    fn test_glob_headers_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(glob_headers(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_write_string_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("deep/nested/out.txt");
        write_string(&path, "hi").unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "hi");
    }
}
