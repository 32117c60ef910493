use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::naming::NameProblem;

/// Result type for cbgen-codegen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration")]
    #[diagnostic(code(cbgen::config_parse))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid structure name '{name}': {problem}")]
    #[diagnostic(
        code(cbgen::invalid_name),
        help("use letters, digits and underscores only, without the CB prefix (e.g. 'BlockHeader')")
    )]
    InvalidName { name: String, problem: NameProblem },
}

impl Error {
    pub(crate) fn config_parse(src: &str, filename: &str, source: toml::de::Error) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_message() {
        let err = Error::InvalidName {
            name: "my-widget".to_string(),
            problem: NameProblem::InvalidChar { ch: '-', index: 2 },
        };
        assert_eq!(
            err.to_string(),
            "invalid structure name 'my-widget': '-' at position 2 is not allowed in a C identifier"
        );
    }
}
