use flexql_core::{
    BooleanOp, Error, Modifier, NodeId, NodeKind, ProcessCtx, QueryConfigHandler,
    QueryNodeProcessor, Result,
};

use crate::config::Operator;
use crate::config::keys::DEFAULT_OPERATOR;

/// Marks every clause of a conjunction as required.
///
/// Children of an `AND` node are wrapped in a `Required` modifier. A boolean
/// node with no explicit operator gets the same treatment when the default
/// operator is `AND`; `OR` nodes are never touched.
///
/// A child already carrying `Required` or `Prohibited` keeps it. A `None`
/// modifier is replaced by a `Required` one around the same inner node.
/// Running the pass on its own output changes nothing.
///
/// `DEFAULT_OPERATOR` must be set; `prepare` fails with
/// `Error::ConfigurationMissing` otherwise.
#[derive(Debug, Default)]
pub struct BooleanModifiersProcessor {
    default_operator: Option<Operator>,
}

impl BooleanModifiersProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_conjunctive(&self, kind: &NodeKind) -> bool {
        match kind {
            NodeKind::Boolean(BooleanOp::And) => true,
            NodeKind::Boolean(BooleanOp::Unspecified) => {
                self.default_operator == Some(Operator::And)
            }
            NodeKind::Boolean(BooleanOp::Or)
            | NodeKind::Field(_)
            | NodeKind::QuotedField(_)
            | NodeKind::Modifier(_)
            | NodeKind::Group
            | NodeKind::Boost(_) => false,
        }
    }
}

impl QueryNodeProcessor for BooleanModifiersProcessor {
    fn name(&self) -> &'static str {
        "BooleanModifiersProcessor"
    }

    fn prepare(&mut self, config: &QueryConfigHandler) -> Result<()> {
        self.default_operator = None;
        let operator = config
            .get(&DEFAULT_OPERATOR)
            .copied()
            .ok_or(Error::ConfigurationMissing {
                key: DEFAULT_OPERATOR.name(),
                processor: self.name(),
            })?;

        tracing::debug!(
            processor = self.name(),
            default_operator = operator.as_str(),
            "default operator resolved"
        );
        self.default_operator = Some(operator);
        Ok(())
    }

    fn post_process_node(&mut self, cx: &mut ProcessCtx<'_>, node: NodeId) -> Result<NodeId> {
        if !self.is_conjunctive(cx.tree().kind(node)) {
            return Ok(node);
        }

        let children = cx.tree().children(node).to_vec();
        let mut rewritten = Vec::with_capacity(children.len());
        for child in children {
            rewritten.push(apply_modifier(cx, child, Modifier::Required)?);
        }
        cx.tree_mut().set_children(node, rewritten)?;
        Ok(node)
    }
}

fn apply_modifier(cx: &mut ProcessCtx<'_>, node: NodeId, target: Modifier) -> Result<NodeId> {
    match cx.tree().kind(node) {
        NodeKind::Modifier(Modifier::None) => {
            let inner = cx.tree().single_child(node)?;
            let span = cx.tree().node(node).span();
            tracing::trace!(
                node = node.as_u32(),
                modifier = target.name(),
                "upgrading unspecified modifier"
            );
            Ok(cx
                .tree_mut()
                .push(NodeKind::Modifier(target), span, vec![inner]))
        }
        NodeKind::Modifier(Modifier::Required | Modifier::Prohibited) => Ok(node),
        NodeKind::Field(_)
        | NodeKind::QuotedField(_)
        | NodeKind::Boolean(_)
        | NodeKind::Group
        | NodeKind::Boost(_) => {
            tracing::trace!(
                node = node.as_u32(),
                modifier = target.name(),
                "wrapping clause in modifier"
            );
            Ok(cx.tree_mut().modifier(node, target))
        }
    }
}
