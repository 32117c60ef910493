//! Code generation for cbitcoin `CBObject` subtypes.
//!
//! A structure is described by a [`GenerationRequest`]. Its short name is
//! turned into an [`ObjectSymbols`] set, and the [`Generator`] renders the
//! interface (`.h`) and implementation (`.c`) files from those symbols.
//!
//! # Module Organization
//!
//! - [`naming`] - Symbol derivation and short name validation
//! - [`files`] - The header and source renderers
//! - [`builder`] - Tab-indented C code building
//! - [`lints`] - Non-fatal request checks

pub mod builder;
pub mod files;
pub mod lints;
pub mod naming;

mod config;
mod diagnostic;
mod error;
mod generator;
mod lint;
mod request;

pub use builder::CodeBuilder;
pub use config::{CONFIG_FILE_NAME, ConstructorMode, GeneratorConfig};
pub use diagnostic::Diagnostic;
pub use error::{Error, Result};
pub use generator::{Generator, PreviewFile, RenderedPair, render};
pub use lint::{Lint, default_lints, lint_request};
pub use naming::{NameProblem, ObjectSymbols, validate_short_name};
pub use request::{DATE_FORMAT, GenerationRequest};
