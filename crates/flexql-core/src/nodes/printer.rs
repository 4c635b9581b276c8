use std::fmt::Write;

use super::{NodeId, NodeKind, QueryTree};

/// Indented, one-line-per-node dump of a query tree.
pub struct TreePrinter<'t> {
    tree: &'t QueryTree,
    spans: bool,
}

impl<'t> TreePrinter<'t> {
    pub fn new(tree: &'t QueryTree) -> Self {
        Self { tree, spans: false }
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    /// Dump the tree from its root. An unrooted tree dumps as the empty string.
    pub fn dump(&self) -> String {
        match self.tree.root() {
            Some(root) => self.dump_node(root),
            None => String::new(),
        }
    }

    pub fn dump_node(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.format(id, &mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, id: NodeId, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(id, 0, w)
    }

    fn format_node(&self, id: NodeId, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let node = self.tree.node(id);
        let prefix = "  ".repeat(indent);

        write!(w, "{prefix}{}", node.kind().label())?;
        if self.spans {
            write!(w, " [{}..{}]", node.begin(), node.end())?;
        }

        match node.kind() {
            NodeKind::Field(field) if field.is_default_field() => write!(w, " {}", field.text())?,
            NodeKind::Field(field) => write!(w, " {}:{}", field.field(), field.text())?,
            NodeKind::QuotedField(field) if field.is_default_field() => {
                write!(w, " \"{}\"", field.text())?
            }
            NodeKind::QuotedField(field) => {
                write!(w, " {}:\"{}\"", field.field(), field.text())?
            }
            NodeKind::Modifier(modifier) => write!(w, " {}", modifier.name())?,
            NodeKind::Boost(value) => write!(w, " {value}")?,
            NodeKind::Boolean(_) | NodeKind::Group => {}
        }
        writeln!(w)?;

        for &child in node.children() {
            self.format_node(child, indent + 1, w)?;
        }
        Ok(())
    }
}

impl QueryTree {
    pub fn printer(&self) -> TreePrinter<'_> {
        TreePrinter::new(self)
    }

    /// Diagnostic dump of the subtree under `id`, spans included.
    pub fn to_debug_string(&self, id: NodeId) -> String {
        self.printer().with_spans(true).dump_node(id)
    }
}
