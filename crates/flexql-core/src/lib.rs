#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for flexql query trees.
//!
//! Three layers:
//! - **Nodes**: arena-backed query tree (`QueryTree`) with a closed set of node
//!   variants, re-rendering to query syntax through a pluggable escaper
//! - **Config**: typed key/value registry with lazily built per-field configs
//! - **Processors**: pre/post-order rewriting passes and the pipeline that chains them
//!
//! Concrete configuration keys, escaping rules and passes live in `flexql-standard`.

pub mod config;
pub mod escape;
pub mod nodes;
pub mod processors;

mod invariants;

#[cfg(test)]
mod test_utils;

pub use config::{ConfigKey, ConfigMap, FieldConfig, FieldConfigListener, QueryConfigHandler};
pub use escape::{EscapeContext, EscapeQuerySyntax};
pub use nodes::{
    BooleanOp, FieldNode, Modifier, Node, NodeId, NodeKind, PLAINTEXT_FIELD, QueryTree, Span,
    TreePrinter,
};
pub use processors::{
    ProcessCtx, QueryNodeProcessor, QueryNodeProcessorPipeline, walk_children, walk_node,
};

/// Errors raised while configuring or rewriting a query tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A pass requires a configuration key that was never set.
    #[error("configuration key `{key}` must be set before running {processor}")]
    ConfigurationMissing {
        key: &'static str,
        processor: &'static str,
    },

    /// A node violates the structural invariant of its variant.
    #[error("invalid tree shape: {reason}")]
    InvalidTreeShape {
        node: Option<NodeId>,
        reason: String,
    },

    /// A typed registry read asked for a different type than the one stored.
    #[error("configuration key `{key}` holds `{stored}`, requested `{requested}`")]
    TypeMismatch {
        key: &'static str,
        requested: &'static str,
        stored: &'static str,
    },

    /// A field config listener refused to build a field's configuration.
    #[error("field config listener failed for field `{field}`: {message}")]
    Listener { field: String, message: String },
}

impl Error {
    pub fn invalid_shape(node: NodeId, reason: impl Into<String>) -> Self {
        Self::InvalidTreeShape {
            node: Some(node),
            reason: reason.into(),
        }
    }
}

/// Result type for tree and configuration operations.
pub type Result<T> = std::result::Result<T, Error>;
