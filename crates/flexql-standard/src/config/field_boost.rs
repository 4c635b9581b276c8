use flexql_core::{FieldConfig, FieldConfigListener, QueryConfigHandler, Result};

use super::keys::{BOOST, FIELD_BOOST_MAP};

/// Copies a field's entry from `FIELD_BOOST_MAP` into its `BOOST`.
///
/// A missing map or a field without an entry leaves the config untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldBoostMapListener;

impl FieldConfigListener for FieldBoostMapListener {
    fn build_field_config(
        &self,
        field_config: &mut FieldConfig,
        config: &QueryConfigHandler,
    ) -> Result<()> {
        let Some(boosts) = config.get(&FIELD_BOOST_MAP) else {
            return Ok(());
        };
        if let Some(&boost) = boosts.get(field_config.field()) {
            tracing::trace!(field = field_config.field(), boost, "field boost assigned");
            field_config.set(&BOOST, boost);
        }
        Ok(())
    }
}
