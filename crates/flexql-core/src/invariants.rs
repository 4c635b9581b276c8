//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::config::ConfigKey;
use crate::nodes::{Node, NodeId, QueryTree};
use crate::Error;

impl QueryTree {
    pub(crate) fn ensure_node(&self, id: NodeId) -> &Node {
        self.get(id).unwrap_or_else(|| {
            panic!(
                "QueryTree: node {} not found (ids are only valid in the tree that allocated them)",
                id.as_u32()
            )
        })
    }
}

/// Unwrap a typed registry read; a type mismatch is a programming error.
pub(crate) fn ensure_typed<'a, T>(
    key: &ConfigKey<T>,
    read: Result<Option<&'a T>, Error>,
) -> Option<&'a T> {
    read.unwrap_or_else(|err| panic!("config key `{}`: {err}", key.name()))
}
