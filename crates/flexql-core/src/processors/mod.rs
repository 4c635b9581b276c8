//! Tree-rewriting passes.
//!
//! # Usage
//!
//! Implement `QueryNodeProcessor` and override the hooks you need. The
//! provided `rewrite` walks the tree depth-first:
//!
//! ```text
//! pre_process_node(node)
//!   for each child, left to right: walk(child)
//!   set_children_order(processed children)   // interior nodes only
//!   set_children(node, ordered children)
//! post_process_node(node)
//! ```
//!
//! A hook returns the id that replaces the node it was given; returning a
//! freshly allocated node splices it into the parent's child list.
//!
//! Configuration preconditions belong in `prepare`, which `process` runs
//! before the first node is visited.

mod pipeline;


use crate::config::QueryConfigHandler;
use crate::nodes::{NodeId, QueryTree};
use crate::{Error, Result};

pub use pipeline::QueryNodeProcessorPipeline;

/// State borrowed by a pass for one traversal.
pub struct ProcessCtx<'a> {
    tree: &'a mut QueryTree,
    config: &'a QueryConfigHandler,
}

impl<'a> ProcessCtx<'a> {
    pub fn new(tree: &'a mut QueryTree, config: &'a QueryConfigHandler) -> Self {
        Self { tree, config }
    }

    pub fn tree(&self) -> &QueryTree {
        &*self.tree
    }

    pub fn tree_mut(&mut self) -> &mut QueryTree {
        &mut *self.tree
    }

    pub fn config(&self) -> &'a QueryConfigHandler {
        self.config
    }
}

pub trait QueryNodeProcessor {
    /// Name used in logs and configuration errors.
    fn name(&self) -> &'static str;

    /// Validate and capture configuration. Must not touch the tree.
    fn prepare(&mut self, _config: &QueryConfigHandler) -> Result<()> {
        Ok(())
    }

    fn pre_process_node(&mut self, _cx: &mut ProcessCtx<'_>, node: NodeId) -> Result<NodeId> {
        Ok(node)
    }

    fn post_process_node(&mut self, _cx: &mut ProcessCtx<'_>, node: NodeId) -> Result<NodeId> {
        Ok(node)
    }

    /// Reorder the processed children of an interior node before they are reattached.
    fn set_children_order(
        &mut self,
        _cx: &mut ProcessCtx<'_>,
        children: Vec<NodeId>,
    ) -> Result<Vec<NodeId>> {
        Ok(children)
    }

    /// Traverse the tree under `root`, assuming `prepare` succeeded.
    fn rewrite(
        &mut self,
        tree: &mut QueryTree,
        root: NodeId,
        config: &QueryConfigHandler,
    ) -> Result<NodeId> {
        let mut cx = ProcessCtx::new(tree, config);
        walk_node(self, &mut cx, root)
    }

    /// Validate configuration, then rewrite. Returns the new root.
    fn process(
        &mut self,
        tree: &mut QueryTree,
        root: NodeId,
        config: &QueryConfigHandler,
    ) -> Result<NodeId> {
        self.prepare(config)?;
        self.rewrite(tree, root, config)
    }

    /// `process` from the tree's root, storing the new root back.
    fn process_tree(&mut self, tree: &mut QueryTree, config: &QueryConfigHandler) -> Result<()> {
        let root = tree.root().ok_or_else(|| Error::InvalidTreeShape {
            node: None,
            reason: "tree has no root".to_owned(),
        })?;
        let root = self.process(tree, root, config)?;
        tree.set_root(root);
        Ok(())
    }
}

impl<P: QueryNodeProcessor + ?Sized> QueryNodeProcessor for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn prepare(&mut self, config: &QueryConfigHandler) -> Result<()> {
        (**self).prepare(config)
    }

    fn pre_process_node(&mut self, cx: &mut ProcessCtx<'_>, node: NodeId) -> Result<NodeId> {
        (**self).pre_process_node(cx, node)
    }

    fn post_process_node(&mut self, cx: &mut ProcessCtx<'_>, node: NodeId) -> Result<NodeId> {
        (**self).post_process_node(cx, node)
    }

    fn set_children_order(
        &mut self,
        cx: &mut ProcessCtx<'_>,
        children: Vec<NodeId>,
    ) -> Result<Vec<NodeId>> {
        (**self).set_children_order(cx, children)
    }

    fn rewrite(
        &mut self,
        tree: &mut QueryTree,
        root: NodeId,
        config: &QueryConfigHandler,
    ) -> Result<NodeId> {
        (**self).rewrite(tree, root, config)
    }
}

/// Visit `node` and its subtree with `processor`. Returns the replacement id.
pub fn walk_node<P: QueryNodeProcessor + ?Sized>(
    processor: &mut P,
    cx: &mut ProcessCtx<'_>,
    node: NodeId,
) -> Result<NodeId> {
    let node = processor.pre_process_node(cx, node)?;
    walk_children(processor, cx, node)?;
    processor.post_process_node(cx, node)
}

/// Process every child of `node` and reattach them.
///
/// The child list is rebuilt from scratch on each call.
pub fn walk_children<P: QueryNodeProcessor + ?Sized>(
    processor: &mut P,
    cx: &mut ProcessCtx<'_>,
    node: NodeId,
) -> Result<()> {
    let children = cx.tree().children(node).to_vec();
    if children.is_empty() {
        return Ok(());
    }

    let mut processed = Vec::with_capacity(children.len());
    for child in children {
        processed.push(walk_node(processor, cx, child)?);
    }

    let ordered = processor.set_children_order(cx, processed)?;
    cx.tree_mut().set_children(node, ordered)
}
