//! Standard flavour of the flexql front end.
//!
//! Builds on `flexql-core` with:
//! - `config` - well-known keys, the field boost listener and a registry builder
//! - `escape` - the standard escaping rules and their inverse
//! - `processors` - boolean-modifier and boost passes, and the pipeline chaining them

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod escape;
pub mod processors;

#[cfg(test)]
mod test_utils;

pub use config::{FieldBoostMapListener, Operator, StandardQueryConfig, keys};
pub use escape::{EscapeError, StandardEscaper, discard_escape_chars};
pub use processors::{BooleanModifiersProcessor, BoostProcessor, precedence_pipeline};
