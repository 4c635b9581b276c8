//! Standard configuration: well-known keys, the boost listener and a
//! registry builder.

mod field_boost;
pub mod keys;

#[cfg(test)]
mod config_tests;

use flexql_core::QueryConfigHandler;
use indexmap::IndexMap;

pub use field_boost::FieldBoostMapListener;
pub use keys::Operator;

/// Builder for a registry with the standard settings and listeners.
#[derive(Clone, Debug, Default)]
pub struct StandardQueryConfig {
    default_operator: Operator,
    field_boosts: IndexMap<String, f32>,
}

impl StandardQueryConfig {
    /// Default operator `OR`, no field boosts.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_operator(mut self, value: Operator) -> Self {
        self.default_operator = value;
        self
    }

    /// Boost one field. A later boost for the same field replaces the earlier one.
    pub fn field_boost(mut self, field: impl Into<String>, boost: f32) -> Self {
        self.field_boosts.insert(field.into(), boost);
        self
    }

    pub fn field_boosts<I, S>(mut self, boosts: I) -> Self
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        self.field_boosts
            .extend(boosts.into_iter().map(|(field, boost)| (field.into(), boost)));
        self
    }

    /// Registry with `DEFAULT_OPERATOR` and `FIELD_BOOST_MAP` set and
    /// `FieldBoostMapListener` registered.
    pub fn build(self) -> QueryConfigHandler {
        let mut config = QueryConfigHandler::new();
        config.set(&keys::DEFAULT_OPERATOR, self.default_operator);
        config.set(&keys::FIELD_BOOST_MAP, self.field_boosts);
        config.add_field_config_listener(FieldBoostMapListener);
        config
    }
}
