use flexql_core::QueryTree;

use crate::escape::StandardEscaper;

/// Render the whole tree with the standard escaper.
pub fn render(tree: &QueryTree) -> String {
    match tree.root() {
        Some(root) => tree.to_query_string(root, &StandardEscaper),
        None => String::new(),
    }
}
