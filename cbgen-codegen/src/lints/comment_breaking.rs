//! Lint for free text that breaks the generated comments.
//!
//! Author and description are spliced into comments without escaping, so
//! the generated output keeps byte-compatibility with hand-written files.

use crate::{Diagnostic, GenerationRequest, lint::Lint};

/// Warns when author or description would end a comment early.
pub struct CommentBreakingTextLint;

fn breaks_comment(text: &str) -> Option<&'static str> {
    if text.contains("*/") {
        Some("contains '*/'")
    } else if text.contains(['\n', '\r']) {
        Some("contains a line break")
    } else {
        None
    }
}

impl Lint for CommentBreakingTextLint {
    fn name(&self) -> &'static str {
        "comment-breaking-text"
    }

    fn check(&self, request: &GenerationRequest, diagnostics: &mut Vec<Diagnostic>) {
        for (field, text) in [
            ("author", &request.author),
            ("description", &request.description),
        ] {
            if let Some(reason) = breaks_comment(text) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("{} {}; the generated comment will be broken", field, reason),
                    )
                    .at(field),
                );
            }
        }
    }
}
