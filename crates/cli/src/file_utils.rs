use std::path::{Path, PathBuf};

use anyhow::Result;
use walkdir::WalkDir;

/// Collect the files to analyze under a directory.
///
/// Only regular files are returned. Symlinks are never followed, and the
/// `.git` directory is skipped entirely.
pub fn get_files(directory: &str) -> Result<Vec<PathBuf>> {
    let mut files_to_return: Vec<PathBuf> = vec![];

    let git_directory = Path::new(directory).join(".git");

    for entry in WalkDir::new(directory) {
        let dir_entry = entry?;
        let entry = dir_entry.path();

        if entry.starts_with(&git_directory) {
            continue;
        }

        if entry.is_file() && !entry.is_symlink() {
            files_to_return.push(entry.to_path_buf());
        }
    }

    files_to_return.sort();
    Ok(files_to_return)
}
