//! Per-invocation input to the generator.

use chrono::NaiveDate;

use crate::{Error, Result, naming::{ObjectSymbols, validate_short_name}};

/// Date format stamped into license headers (`DD/MM/YYYY`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// What the user asked for: one new CBObject subtype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Structure name without the `CB` prefix, used verbatim.
    pub short_name: String,
    /// Author's full name.
    pub author: String,
    /// One-line description, spliced into the `@brief` comment.
    pub description: String,
    /// Creation date (UTC).
    pub date: NaiveDate,
}

impl GenerationRequest {
    pub fn new(
        short_name: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            short_name: short_name.into(),
            author: author.into(),
            description: description.into(),
            date,
        }
    }

    /// Create a request stamped with today's UTC date.
    pub fn today(
        short_name: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(short_name, author, description, chrono::Utc::now().date_naive())
    }

    pub fn symbols(&self) -> ObjectSymbols {
        ObjectSymbols::derive(&self.short_name)
    }

    /// The creation date as written in license headers.
    pub fn date_stamp(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Reject short names that would produce invalid C identifiers.
    pub fn validate(&self) -> Result<()> {
        validate_short_name(&self.short_name).map_err(|problem| {
            Box::new(Error::InvalidName {
                name: self.short_name.clone(),
                problem,
            })
        })
    }
}
