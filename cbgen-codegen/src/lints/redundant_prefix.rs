//! Lint for short names that already carry the `CB` prefix.

use crate::{Diagnostic, GenerationRequest, lint::Lint, naming::PREFIX};

/// Warns when the short name starts with `CB`, which yields `CBCB...` symbols.
pub struct RedundantPrefixLint;

impl Lint for RedundantPrefixLint {
    fn name(&self) -> &'static str {
        "redundant-prefix"
    }

    fn check(&self, request: &GenerationRequest, diagnostics: &mut Vec<Diagnostic>) {
        if let Some(rest) = request.short_name.strip_prefix(PREFIX)
            && !rest.is_empty()
        {
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "'{}' already starts with {}; the type will be named '{}{}' (did you mean '{}'?)",
                        request.short_name, PREFIX, PREFIX, request.short_name, rest
                    ),
                )
                .at("name"),
            );
        }
    }
}
