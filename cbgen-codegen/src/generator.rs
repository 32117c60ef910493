//! Renders and writes the header/source pair for one structure.

use std::path::{Path, PathBuf};

use cbgen_core::GeneratedFile;
use eyre::Result;

use crate::{
    GenerationRequest, GeneratorConfig, ObjectSymbols,
    files::{HeaderFile, SourceFile, Structure},
};

/// Both artifacts of one structure, ready to be written verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPair {
    /// Interface artifact (`.h`).
    pub header: String,
    /// Implementation artifact (`.c`).
    pub source: String,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the destination directory
    pub path: String,
    pub content: String,
}

/// Render both artifacts for `request`.
pub fn render(request: &GenerationRequest, config: &GeneratorConfig) -> RenderedPair {
    Generator::new(request, config).render()
}

/// Generator for a single CBObject subtype.
pub struct Generator {
    structure: Structure,
}

impl Generator {
    pub fn new(request: &GenerationRequest, config: &GeneratorConfig) -> Self {
        Self {
            structure: Structure::new(request, config),
        }
    }

    pub fn symbols(&self) -> &ObjectSymbols {
        &self.structure.symbols
    }

    pub fn render(&self) -> RenderedPair {
        RenderedPair {
            header: HeaderFile::new(&self.structure).render(),
            source: SourceFile::new(&self.structure).render(),
        }
    }

    /// Preview generated files without writing to disk
    pub fn preview(&self) -> Vec<PreviewFile> {
        let sym = &self.structure.symbols;
        let pair = self.render();
        vec![
            PreviewFile {
                path: sym.header_file(),
                content: pair.header,
            },
            PreviewFile {
                path: sym.source_file(),
                content: pair.source,
            },
        ]
    }

    /// Write both files into `dir`, returning the written paths.
    ///
    /// `dir` must already be claimed; other files in it are left untouched.
    pub fn write(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        Ok(vec![
            HeaderFile::new(&self.structure).write(dir)?,
            SourceFile::new(&self.structure).write(dir)?,
        ])
    }
}
