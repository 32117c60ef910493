//! Lints run over a request before rendering.

use crate::{
    Diagnostic, GenerationRequest,
    lints::{CommentBreakingTextLint, EmptyDescriptionLint, RedundantPrefixLint},
};

/// A check over a generation request.
pub trait Lint: Send + Sync {
    fn name(&self) -> &'static str;

    /// Check the request and add any diagnostics.
    fn check(&self, request: &GenerationRequest, diagnostics: &mut Vec<Diagnostic>);
}

/// The built-in lints, in reporting order.
pub fn default_lints() -> Vec<Box<dyn Lint>> {
    vec![
        Box::new(RedundantPrefixLint),
        Box::new(EmptyDescriptionLint),
        Box::new(CommentBreakingTextLint),
    ]
}

/// Run every built-in lint over `request`.
pub fn lint_request(request: &GenerationRequest) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for lint in default_lints() {
        lint.check(request, &mut diagnostics);
    }
    diagnostics
}
