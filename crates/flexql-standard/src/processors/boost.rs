use flexql_core::{
    NodeId, NodeKind, ProcessCtx, QueryConfigHandler, QueryNodeProcessor, QueryTree, Result,
    walk_node,
};

use crate::config::keys::BOOST;

/// Wraps field and phrase nodes in a `Boost` node when their field config
/// carries `BOOST`.
///
/// A field that already sits directly under a `Boost` node keeps the boost it
/// has, so the pass can run repeatedly.
#[derive(Debug, Default)]
pub struct BoostProcessor;

impl BoostProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl QueryNodeProcessor for BoostProcessor {
    fn name(&self) -> &'static str {
        "BoostProcessor"
    }

    fn post_process_node(&mut self, cx: &mut ProcessCtx<'_>, node: NodeId) -> Result<NodeId> {
        if matches!(cx.tree().kind(node), NodeKind::Boost(_)) {
            return Ok(node);
        }

        let children = cx.tree().children(node).to_vec();
        let mut boosted = Vec::with_capacity(children.len());
        for &child in &children {
            boosted.push(boost_field(cx, child)?);
        }
        if boosted != children {
            cx.tree_mut().set_children(node, boosted)?;
        }
        Ok(node)
    }

    fn rewrite(
        &mut self,
        tree: &mut QueryTree,
        root: NodeId,
        config: &QueryConfigHandler,
    ) -> Result<NodeId> {
        let mut cx = ProcessCtx::new(tree, config);
        let root = walk_node(self, &mut cx, root)?;
        // the root has no parent to wrap it
        boost_field(&mut cx, root)
    }
}

fn boost_field(cx: &mut ProcessCtx<'_>, node: NodeId) -> Result<NodeId> {
    let field = match cx.tree().kind(node) {
        NodeKind::Field(field) | NodeKind::QuotedField(field) => field.field().to_owned(),
        NodeKind::Modifier(_) | NodeKind::Boolean(_) | NodeKind::Group | NodeKind::Boost(_) => {
            return Ok(node);
        }
    };

    let field_config = cx.config().get_field_config(&field)?;
    let Some(&boost) = field_config.get(&BOOST) else {
        return Ok(node);
    };

    tracing::trace!(
        node = node.as_u32(),
        field = field.as_str(),
        boost,
        "boosting field"
    );
    Ok(cx.tree_mut().boost(node, boost))
}
