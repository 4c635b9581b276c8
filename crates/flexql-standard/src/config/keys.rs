//! Well-known configuration keys.

use flexql_core::ConfigKey;
use indexmap::IndexMap;

/// Operator implied between clauses that carry no explicit operator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Operator {
    And,
    #[default]
    Or,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// Default boolean operator. Registry level.
pub const DEFAULT_OPERATOR: ConfigKey<Operator> = ConfigKey::new("default_operator");

/// Field name to boost. Registry level.
pub const FIELD_BOOST_MAP: ConfigKey<IndexMap<String, f32>> = ConfigKey::new("field_boost_map");

/// Relevance boost of one field. Field level, filled in by `FieldBoostMapListener`.
pub const BOOST: ConfigKey<f32> = ConfigKey::new("boost");
