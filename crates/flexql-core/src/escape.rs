//! Escaping capability used when re-rendering nodes to query syntax.

/// Where the escaped text will be placed in the rendered query.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum EscapeContext {
    /// Bare term, e.g. `title:cat`.
    #[default]
    Normal,
    /// Inside a quoted phrase, e.g. `body:"life is great"`.
    Quoted,
}

/// Converts raw node text into syntax-safe text.
///
/// Nodes never fail to render: characters that cannot be expressed are the
/// escaper's problem.
pub trait EscapeQuerySyntax {
    fn escape(&self, text: &str, context: EscapeContext) -> String;
}

impl<T: EscapeQuerySyntax + ?Sized> EscapeQuerySyntax for &T {
    fn escape(&self, text: &str, context: EscapeContext) -> String {
        (*self).escape(text, context)
    }
}
