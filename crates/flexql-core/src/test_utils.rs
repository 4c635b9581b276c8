//! Test helpers shared by the unit tests of this crate.

use crate::escape::{EscapeContext, EscapeQuerySyntax};

/// Escaper that marks what it escaped, so tests can see which context was used.
///
/// Normal text is returned as-is; quoted text has `"` prefixed with `\`.
pub struct MarkingEscaper;

impl EscapeQuerySyntax for MarkingEscaper {
    fn escape(&self, text: &str, context: EscapeContext) -> String {
        match context {
            EscapeContext::Normal => text.to_owned(),
            EscapeContext::Quoted => text.replace('"', "\\\""),
        }
    }
}
