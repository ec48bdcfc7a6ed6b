use std::fs;
use std::path::Path;

use crate::error::AppError;

/// Names of the immediate subdirectories of `backup_dir`, in the order the
/// directory listing yields them.
///
/// Plain files are skipped. Symlinks count when they point at a directory.
/// Entries whose names are not valid UTF-8 are logged and skipped.
pub fn scan_repos(backup_dir: &Path) -> Result<Vec<String>, AppError> {
    let mut names = Vec::new();

    for entry in fs::read_dir(backup_dir)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => log::warn!("Skipping directory with non UTF-8 name: {:?}", raw),
        }
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lists_only_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("alpha")).unwrap();
        fs::create_dir(tmp.path().join("beta")).unwrap();
        fs::write(tmp.path().join("radicle_urns.json"), "{}").unwrap();

        let mut names = scan_repos(tmp.path()).unwrap();
        names.sort();

        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_does_not_recurse() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("alpha").join("nested")).unwrap();

        assert_eq!(scan_repos(tmp.path()).unwrap(), vec!["alpha"]);
    }

    #[test]
    fn test_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(scan_repos(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_dir_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = scan_repos(&tmp.path().join("missing"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_counts() {
        let tmp = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        std::os::unix::fs::symlink(target.path(), tmp.path().join("linked")).unwrap();

        assert_eq!(scan_repos(tmp.path()).unwrap(), vec!["linked"]);
    }
}
