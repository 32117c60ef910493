//! The two artifacts generated for every structure.

mod header_h;
mod license;
mod source_c;

pub use header_h::HeaderFile;
pub use license::LicenseHeader;
pub use source_c::SourceFile;

use crate::{ConstructorMode, GenerationRequest, GeneratorConfig, ObjectSymbols};

/// Everything the renderers need, resolved once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    pub symbols: ObjectSymbols,
    /// Symbols of the embedded base type (`CBObject`).
    pub base: ObjectSymbols,
    pub author: String,
    pub description: String,
    /// Creation date, already formatted.
    pub date_stamp: String,
    pub project: String,
    pub copyright: String,
    pub constructor: ConstructorMode,
}

impl Structure {
    pub fn new(request: &GenerationRequest, config: &GeneratorConfig) -> Self {
        Self {
            symbols: request.symbols(),
            base: ObjectSymbols::base(),
            author: request.author.clone(),
            description: request.description.clone(),
            date_stamp: request.date_stamp(),
            project: config.project.clone(),
            copyright: config.copyright.clone(),
            constructor: config.constructor,
        }
    }
}
