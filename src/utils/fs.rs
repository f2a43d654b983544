//! File system utilities.

use crate::Result;
use std::path::Path;

/// Check if a path exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(crate::Error::NotADirectory(path.display().to_string()));
    }
    Ok(())
}

/// Rename a file without replacing an existing one.
///
/// `std::fs::rename` silently overwrites on Unix, so the target is checked
/// first.
pub fn rename_no_clobber(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(crate::Error::PathNotFound(from.display().to_string()));
    }
    if to.exists() {
        return Err(crate::Error::FileAlreadyExists(to.display().to_string()));
    }

    std::fs::rename(from, to)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.mkv");
        std::fs::write(&file, "fake").unwrap();

        assert!(ensure_directory(temp_dir.path()).is_ok());
        assert!(matches!(
            ensure_directory(&file),
            Err(crate::Error::NotADirectory(_))
        ));
        assert!(matches!(
            ensure_directory(&temp_dir.path().join("missing")),
            Err(crate::Error::PathNotFound(_))
        ));
    }

    #[test]
    fn test_rename_no_clobber() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.mkv");
        let b = temp_dir.path().join("b.mkv");
        std::fs::write(&a, "a").unwrap();
        std::fs::write(&b, "b").unwrap();

        assert!(matches!(
            rename_no_clobber(&a, &b),
            Err(crate::Error::FileAlreadyExists(_))
        ));
        assert_eq!(std::fs::read_to_string(&b).unwrap(), "b");

        let c = temp_dir.path().join("c.mkv");
        rename_no_clobber(&a, &c).unwrap();
        assert!(!a.exists());
        assert_eq!(std::fs::read_to_string(&c).unwrap(), "a");
    }
}
