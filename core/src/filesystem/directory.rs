use super::error::FileSystemError;
use log::error;
use std::{fs::read_dir, path::Path};

/// Check if path is a directory
pub(crate) fn is_directory(path: &str) -> bool {
    let dir = Path::new(path);
    if dir.is_dir() {
        return true;
    }
    false
}

/// Get a list of all immediate subdirectories in a provided directory
pub(crate) fn list_directories(path: &str) -> Result<Vec<String>, FileSystemError> {
    if !is_directory(path) {
        return Err(FileSystemError::NotDirectory);
    }
    let dir_result = read_dir(path);
    let dir = match dir_result {
        Ok(result) => result,
        Err(err) => {
            error!("[hostinv-core] Failed to get directory contents: {err:?}");
            return Err(FileSystemError::ReadDirectory);
        }
    };

    let mut dirs: Vec<String> = Vec::new();
    for entry_result in dir {
        let entry = match entry_result {
            Ok(result) => result,
            Err(err) => {
                error!("[hostinv-core] Failed to get directory entry: {err:?}");
                continue;
            }
        };

        let full_path = entry.path().display().to_string();
        if !is_directory(&full_path) {
            continue;
        }
        dirs.push(full_path);
    }

    Ok(dirs)
}

/// Get the final component of a path
pub(crate) fn get_filename(path: &str) -> String {
    let entry = Path::new(path);
    if let Some(filename) = entry.file_name() {
        return filename.to_str().unwrap_or_default().to_string();
    }
    path.to_string()
}
