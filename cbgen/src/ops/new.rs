//! New operation - render a structure and write it into its own directory.

use std::path::Path;

use cbgen_codegen::{GenerationRequest, Generator, GeneratorConfig, lint_request};
use cbgen_core::{DirClaim, claim_dir};
use eyre::Result;

use crate::reports::{NewReport, NewResult};

/// Options for the new operation.
pub struct NewOptions<'a> {
    /// Project root; the destination is resolved below it.
    pub root: &'a Path,
    /// Whether to preview without touching the filesystem.
    pub dry_run: bool,
}

/// Execute the new operation.
///
/// The destination directory is claimed atomically. When it already exists,
/// `confirm_overwrite` decides whether to write into it; declining leaves the
/// filesystem untouched.
pub fn new_structure<F>(
    request: &GenerationRequest,
    config: &GeneratorConfig,
    opts: NewOptions,
    confirm_overwrite: F,
) -> Result<NewReport>
where
    F: FnOnce(&Path) -> Result<bool>,
{
    let warnings = lint_request(request)
        .into_iter()
        .map(|d| d.message)
        .collect();

    let generator = Generator::new(request, config);
    let symbols = generator.symbols();
    let destination = config.destination(opts.root, &symbols.file_base);

    let result = if opts.dry_run {
        NewResult::Preview {
            files: generator.preview(),
        }
    } else {
        let claim = claim_dir(&destination)?;
        if claim == DirClaim::Existing && !confirm_overwrite(&destination)? {
            NewResult::Declined
        } else {
            NewResult::Written {
                created_dir: claim.is_created(),
                files: generator.write(&destination)?,
            }
        }
    };

    Ok(NewReport {
        type_name: symbols.type_name.clone(),
        destination,
        warnings,
        result,
    })
}
