//! Generator configuration loaded from `cbgen.toml`.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result};

/// Name of the configuration file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "cbgen.toml";

/// How the generated constructor treats a failing initialiser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructorMode {
    /// Reproduce the historical template: the initialiser's result is ignored.
    #[default]
    Legacy,
    /// Return `NULL` when allocation or initialisation fails.
    Checked,
}

/// Project-wide settings stamped into every generated structure.
///
/// All keys are optional; missing keys take the cbitcoin defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Project name written into the license header.
    pub project: String,
    /// Copyright line without the `Copyright (c)` prefix.
    pub copyright: String,
    /// Directory, relative to the project root, that holds one directory per structure.
    pub output_dir: PathBuf,
    pub constructor: ConstructorMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project: "cbitcoin".to_string(),
            copyright: "2012 Matthew Mitchell".to_string(),
            output_dir: PathBuf::from("src/structures/CBObject"),
            constructor: ConstructorMode::Legacy,
        }
    }
}

impl FromStr for GeneratorConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE_NAME)
    }
}

impl GeneratorConfig {
    /// Parse a configuration file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Load `cbgen.toml` from `root`, or the defaults when there is none.
    pub fn discover(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Directory that receives the files for `file_base`.
    pub fn destination(&self, root: &Path, file_base: &str) -> PathBuf {
        root.join(&self.output_dir).join(file_base)
    }
}

fn parse_config(content: &str, filename: &str) -> Result<GeneratorConfig> {
    toml::from_str(content).map_err(|e| Error::config_parse(content, filename, e))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: GeneratorConfig = "".parse().unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.project, "cbitcoin");
        assert_eq!(config.constructor, ConstructorMode::Legacy);
    }

    #[test]
    fn test_partial_config() {
        let config: GeneratorConfig = r#"
            project = "cbcoin"
            constructor = "checked"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.project, "cbcoin");
        assert_eq!(config.constructor, ConstructorMode::Checked);
        assert_eq!(config.copyright, "2012 Matthew Mitchell");
        assert_eq!(config.output_dir, PathBuf::from("src/structures/CBObject"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "base = \"CBMessage\"".parse::<GeneratorConfig>().unwrap_err();
        assert!(matches!(*err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_bad_constructor_mode() {
        assert!("constructor = \"strict\"".parse::<GeneratorConfig>().is_err());
    }

    #[test]
    fn test_destination() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.destination(Path::new("repo"), "CBWidget"),
            PathBuf::from("repo/src/structures/CBObject/CBWidget")
        );
    }

    #[test]
    fn test_discover() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            GeneratorConfig::discover(temp.path()).unwrap(),
            GeneratorConfig::default()
        );

        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "output_dir = \"gen\"").unwrap();
        let config = GeneratorConfig::discover(temp.path()).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("gen"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = GeneratorConfig::from_file("/nonexistent/cbgen.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
