//! Rendering nodes back into query syntax.

use crate::escape::{EscapeContext, EscapeQuerySyntax};

use super::{FieldNode, NodeId, NodeKind, QueryTree};

impl QueryTree {
    /// Render the subtree under `id` as a re-parseable query fragment.
    ///
    /// `id` is treated as the root of the rendering: a boolean node at `id`
    /// is not wrapped in parentheses.
    pub fn to_query_string(&self, id: NodeId, escaper: &dyn EscapeQuerySyntax) -> String {
        self.render(id, None, escaper)
    }

    fn render(
        &self,
        id: NodeId,
        parent: Option<&NodeKind>,
        escaper: &dyn EscapeQuerySyntax,
    ) -> String {
        let node = self.node(id);
        let kind = node.kind();

        match kind {
            NodeKind::Field(field) => render_field(field, EscapeContext::Normal, escaper),
            NodeKind::QuotedField(field) => render_field(field, EscapeContext::Quoted, escaper),
            NodeKind::Modifier(modifier) => {
                let Some(&child) = node.children().first() else {
                    return String::new();
                };
                let child_kind = self.kind(child);
                let (open, close) = match child_kind {
                    NodeKind::Modifier(_) => ("(", ")"),
                    _ => ("", ""),
                };
                let prefix = match child_kind {
                    NodeKind::Boolean(_) => modifier.keyword(),
                    _ => modifier.symbol(),
                };
                let inner = self.render(child, Some(kind), escaper);
                format!("{prefix}{open}{inner}{close}")
            }
            NodeKind::Boolean(op) => {
                if node.children().is_empty() {
                    return String::new();
                }
                let joined = node
                    .children()
                    .iter()
                    .map(|&child| self.render(child, Some(kind), escaper))
                    .collect::<Vec<_>>()
                    .join(op.separator());
                match parent {
                    None | Some(NodeKind::Group) => joined,
                    Some(_) => format!("( {joined} )"),
                }
            }
            NodeKind::Group => {
                let Some(&child) = node.children().first() else {
                    return String::new();
                };
                format!("( {} )", self.render(child, Some(kind), escaper))
            }
            NodeKind::Boost(value) => {
                let Some(&child) = node.children().first() else {
                    return String::new();
                };
                format!("{}^{value}", self.render(child, Some(kind), escaper))
            }
        }
    }
}

fn render_field(
    field: &FieldNode,
    context: EscapeContext,
    escaper: &dyn EscapeQuerySyntax,
) -> String {
    let escaped = escaper.escape(field.text(), context);
    let term = match context {
        EscapeContext::Normal => escaped,
        EscapeContext::Quoted => format!("\"{escaped}\""),
    };

    if field.is_default_field() {
        term
    } else {
        format!("{}:{term}", field.field())
    }
}
