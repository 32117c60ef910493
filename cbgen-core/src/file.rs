use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// A file that cbgen renders and writes below a destination directory.
///
/// Writing always replaces an existing file at the same path; whether that
/// is allowed is decided before, when the destination is claimed.
pub trait GeneratedFile {
    /// Full path of the file inside `base`.
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content. Content is written verbatim.
    fn render(&self) -> String;

    /// Write the file to disk.
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("Failed to write '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Greeting;

    impl GeneratedFile for Greeting {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("CBGreeting").join("CBGreeting.h")
        }

        fn render(&self) -> String {
            "#endif".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.h");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.c");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_generated_file_write_returns_path() {
        let temp = TempDir::new().unwrap();

        let written = Greeting.write(temp.path()).unwrap();

        assert_eq!(written, temp.path().join("CBGreeting").join("CBGreeting.h"));
        assert_eq!(fs::read_to_string(written).unwrap(), "#endif");
    }

    #[test]
    fn test_write_into_missing_parent_of_file_fails() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("CBGreeting"), "a file, not a directory").unwrap();

        assert!(Greeting.write(temp.path()).is_err());
    }
}
