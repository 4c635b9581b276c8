use crate::Result;
use crate::config::QueryConfigHandler;
use crate::nodes::{NodeId, QueryTree};

use super::QueryNodeProcessor;

/// Ordered chain of passes, itself usable as a pass.
///
/// Every member is prepared before any member rewrites, so a missing
/// configuration key fails the whole run with the tree untouched. Passes
/// share nothing but the tree and the configuration registry.
#[derive(Default)]
pub struct QueryNodeProcessorPipeline {
    processors: Vec<Box<dyn QueryNodeProcessor>>,
}

impl QueryNodeProcessorPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pass; it runs after every pass already added.
    pub fn add(&mut self, processor: impl QueryNodeProcessor + 'static) {
        self.processors.push(Box::new(processor));
    }

    pub fn with(mut self, processor: impl QueryNodeProcessor + 'static) -> Self {
        self.add(processor);
        self
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Names of the member passes, in run order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.processors.iter().map(|p| p.name())
    }
}

impl QueryNodeProcessor for QueryNodeProcessorPipeline {
    fn name(&self) -> &'static str {
        "QueryNodeProcessorPipeline"
    }

    fn prepare(&mut self, config: &QueryConfigHandler) -> Result<()> {
        for processor in &mut self.processors {
            processor.prepare(config)?;
        }
        Ok(())
    }

    fn rewrite(
        &mut self,
        tree: &mut QueryTree,
        root: NodeId,
        config: &QueryConfigHandler,
    ) -> Result<NodeId> {
        let total = self.processors.len();
        let mut root = root;
        for (position, processor) in self.processors.iter_mut().enumerate() {
            tracing::debug!(
                processor = processor.name(),
                position = position + 1,
                total,
                "running query node processor"
            );
            root = processor.rewrite(tree, root, config)?;
        }
        Ok(root)
    }
}

impl std::fmt::Debug for QueryNodeProcessorPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
