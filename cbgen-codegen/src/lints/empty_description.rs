//! Lint for empty descriptions.

use crate::{Diagnostic, GenerationRequest, lint::Lint};

/// Warns when the `@brief` would only say "Inherits CBObject".
pub struct EmptyDescriptionLint;

impl Lint for EmptyDescriptionLint {
    fn name(&self) -> &'static str {
        "empty-description"
    }

    fn check(&self, request: &GenerationRequest, diagnostics: &mut Vec<Diagnostic>) {
        if request.description.trim().is_empty() {
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!("structure '{}' has no description", request.short_name),
                )
                .at("description"),
            );
        }
    }
}
