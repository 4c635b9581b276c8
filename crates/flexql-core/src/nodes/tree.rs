//! Arena storage and structural operations of a query tree.

use crate::{Error, Result};

use super::{BooleanOp, ChildArity, FieldNode, Modifier, Node, NodeId, NodeKind, Span};

/// Arena of query nodes plus the current root.
///
/// Rewrites leave replaced nodes in the arena; they are unreachable from the
/// root and ignored by equality, rendering and `clone_tree`.
#[derive(Clone, Debug, Default)]
pub struct QueryTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl QueryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of arena slots, reachable or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// # Panics
    /// Panics if `root` was not allocated by this tree.
    pub fn set_root(&mut self, root: NodeId) {
        self.ensure_node(root);
        self.root = Some(root);
    }

    /// Allocate a node as produced by an upstream parser.
    ///
    /// No arity check is made here; passes report `InvalidTreeShape` when they
    /// meet a node that breaks its variant's shape.
    pub fn push(&mut self, kind: NodeKind, span: Span, children: Vec<NodeId>) -> NodeId {
        let id = NodeId::from_raw(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            span,
            children,
        });
        id
    }

    pub fn field(
        &mut self,
        field: impl Into<String>,
        text: impl Into<String>,
        span: Span,
    ) -> NodeId {
        self.push(
            NodeKind::Field(FieldNode::new(field, text)),
            span,
            Vec::new(),
        )
    }

    pub fn quoted_field(
        &mut self,
        field: impl Into<String>,
        text: impl Into<String>,
        span: Span,
    ) -> NodeId {
        self.push(
            NodeKind::QuotedField(FieldNode::new(field, text)),
            span,
            Vec::new(),
        )
    }

    /// Wrap `child` in a modifier node spanning the child.
    pub fn modifier(&mut self, child: NodeId, modifier: Modifier) -> NodeId {
        let span = self.node(child).span;
        self.push(NodeKind::Modifier(modifier), span, vec![child])
    }

    pub fn boolean(&mut self, op: BooleanOp, children: Vec<NodeId>) -> NodeId {
        let span = self.cover(&children);
        self.push(NodeKind::Boolean(op), span, children)
    }

    pub fn and(&mut self, children: Vec<NodeId>) -> NodeId {
        self.boolean(BooleanOp::And, children)
    }

    pub fn or(&mut self, children: Vec<NodeId>) -> NodeId {
        self.boolean(BooleanOp::Or, children)
    }

    pub fn group(&mut self, child: NodeId) -> NodeId {
        let span = self.node(child).span;
        self.push(NodeKind::Group, span, vec![child])
    }

    pub fn boost(&mut self, child: NodeId, value: f32) -> NodeId {
        let span = self.node(child).span;
        self.push(NodeKind::Boost(value), span, vec![child])
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// # Panics
    /// Panics if `id` was not allocated by this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        self.ensure_node(id)
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Replace the child list of `id` in one step.
    ///
    /// The new list must fit the variant: none for leaves, exactly one for
    /// modifier, group and boost nodes. Nothing changes on error.
    pub fn set_children(&mut self, id: NodeId, children: Vec<NodeId>) -> Result<()> {
        let kind = self.kind(id);
        match (kind.arity(), children.len()) {
            (ChildArity::Leaf, 0) | (ChildArity::Single, 1) | (ChildArity::Many, _) => {}
            (ChildArity::Leaf, n) => {
                return Err(Error::invalid_shape(
                    id,
                    format!("{} node cannot have children, got {n}", kind.label()),
                ));
            }
            (ChildArity::Single, n) => {
                return Err(Error::invalid_shape(
                    id,
                    format!("{} node needs exactly one child, got {n}", kind.label()),
                ));
            }
        }

        if let Some(unknown) = children.iter().find(|c| self.get(**c).is_none()) {
            return Err(Error::invalid_shape(
                id,
                format!("child {} is not part of this tree", unknown.as_u32()),
            ));
        }

        self.nodes[id.index()].children = children;
        Ok(())
    }

    /// The only child of a modifier, group or boost node.
    pub fn single_child(&self, id: NodeId) -> Result<NodeId> {
        match self.children(id) {
            [child] => Ok(*child),
            other => Err(Error::invalid_shape(
                id,
                format!(
                    "{} node needs exactly one child, got {}",
                    self.kind(id).label(),
                    other.len()
                ),
            )),
        }
    }

    /// Deep-copy the subtree under `id` into a new, compact tree rooted at the copy.
    ///
    /// The copy shares nothing with `self`. Variant data and spans are preserved.
    pub fn clone_tree(&self, id: NodeId) -> QueryTree {
        let mut out = QueryTree::new();
        let root = self.copy_into(id, &mut out);
        out.root = Some(root);
        out
    }

    fn copy_into(&self, id: NodeId, out: &mut QueryTree) -> NodeId {
        let node = self.node(id);
        let children = node
            .children
            .iter()
            .map(|&child| self.copy_into(child, out))
            .collect();
        out.push(node.kind.clone(), node.span, children)
    }

    /// Compare the subtree under `a` with the subtree under `b` in `other`.
    ///
    /// Kinds, spans and child order must match; arena positions do not matter.
    pub fn same_structure(&self, a: NodeId, other: &QueryTree, b: NodeId) -> bool {
        let (left, right) = (self.node(a), other.node(b));
        left.kind == right.kind
            && left.span == right.span
            && left.children.len() == right.children.len()
            && left
                .children
                .iter()
                .zip(&right.children)
                .all(|(&l, &r)| self.same_structure(l, other, r))
    }

    /// Node ids reachable from `id`, parents before children.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    fn cover(&self, children: &[NodeId]) -> Span {
        children
            .iter()
            .map(|&child| self.node(child).span)
            .reduce(Span::cover)
            .unwrap_or_default()
    }
}

impl PartialEq for QueryTree {
    fn eq(&self, other: &Self) -> bool {
        match (self.root, other.root) {
            (None, None) => true,
            (Some(a), Some(b)) => self.same_structure(a, other, b),
            _ => false,
        }
    }
}
