//! Destination directory claiming.

use std::{io::ErrorKind, path::Path};

use eyre::{Context, Result};

/// Outcome of claiming a destination directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirClaim {
    /// The directory did not exist and was created by this call.
    Created,
    /// The directory already existed. Nothing was changed.
    Existing,
}

impl DirClaim {
    pub fn is_created(&self) -> bool {
        matches!(self, DirClaim::Created)
    }
}

/// Create `path` exclusively.
///
/// Parents are created as needed, then the leaf is created with a single
/// `create_dir`, so existence check and creation are one atomic step. Two
/// concurrent claims of the same path yield exactly one [`DirClaim::Created`].
pub fn claim_dir(path: &Path) -> Result<DirClaim> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    match std::fs::create_dir(path) {
        Ok(()) => Ok(DirClaim::Created),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(DirClaim::Existing),
        Err(e) => Err(e).wrap_err_with(|| format!("Failed to create directory '{}'", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_claim_creates_missing_dir_and_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src").join("structures").join("CBWidget");

        assert_eq!(claim_dir(&path).unwrap(), DirClaim::Created);
        assert!(path.is_dir());
    }

    #[test]
    fn test_claim_reports_existing_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CBWidget");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("notes.txt"), "keep").unwrap();

        assert_eq!(claim_dir(&path).unwrap(), DirClaim::Existing);
        assert_eq!(fs::read_to_string(path.join("notes.txt")).unwrap(), "keep");
    }

    #[test]
    fn test_second_claim_is_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CBWidget");

        assert!(claim_dir(&path).unwrap().is_created());
        assert!(!claim_dir(&path).unwrap().is_created());
    }

    #[test]
    fn test_claim_fails_when_path_is_a_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CBWidget");
        fs::write(&path, "not a directory").unwrap();

        assert!(claim_dir(&path).is_err());
    }
}
