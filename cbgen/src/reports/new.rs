//! New command report data structures.

use std::path::PathBuf;

use cbgen_codegen::PreviewFile;

use super::output::{Output, Report};

/// Report data from generating one structure.
#[derive(Debug)]
pub struct NewReport {
    /// Generated type name, e.g. `CBWidget`.
    pub type_name: String,
    /// Directory that holds (or would hold) the files.
    pub destination: PathBuf,
    /// Lint warnings about the request.
    pub warnings: Vec<String>,
    pub result: NewResult,
}

/// What happened on disk.
#[derive(Debug)]
pub enum NewResult {
    /// Both files were written.
    Written {
        /// Whether the destination directory was created by this run.
        created_dir: bool,
        files: Vec<PathBuf>,
    },
    /// The destination existed and the user declined to overwrite it.
    Declined,
    /// Dry-run preview.
    Preview { files: Vec<PreviewFile> },
}

impl Report for NewReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            NewResult::Written { created_dir, files } => {
                out.section(&format!("Generated {}", self.type_name));
                for file in files {
                    out.added_item(&file.display().to_string());
                }
                if !created_dir {
                    out.newline();
                    out.key_value("Overwrote", &self.destination.display().to_string());
                }
            }
            NewResult::Declined => {
                out.preformatted("Aborted, nothing was written.");
            }
            NewResult::Preview { files } => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} files would be generated in {}",
                    files.len(),
                    self.destination.display()
                ));
            }
        }
    }
}
