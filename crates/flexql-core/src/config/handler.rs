//! Per-session configuration registry and field-config listeners.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::Result;

use super::{ConfigKey, ConfigMap, FieldConfig};

/// Observer invoked the first time a field's configuration is requested.
///
/// Listeners run in registration order; a later listener sees what earlier
/// ones wrote and may overwrite it.
pub trait FieldConfigListener: Send + Sync {
    fn build_field_config(
        &self,
        field_config: &mut FieldConfig,
        config: &QueryConfigHandler,
    ) -> Result<()>;
}

impl<F> FieldConfigListener for F
where
    F: Fn(&mut FieldConfig, &QueryConfigHandler) -> Result<()> + Send + Sync,
{
    fn build_field_config(
        &self,
        field_config: &mut FieldConfig,
        config: &QueryConfigHandler,
    ) -> Result<()> {
        self(field_config, config)
    }
}

/// Configuration registry for one parse session.
///
/// Populated by the caller before processing; passes only read from it.
/// Field configs are built lazily and cached. Any write through `&mut self`
/// drops the cache, so cached configs always reflect the current settings.
///
/// The cache uses a `RefCell`: a handler can move between threads but must
/// not be shared by concurrent pipeline runs.
#[derive(Default)]
pub struct QueryConfigHandler {
    values: ConfigMap,
    listeners: Vec<Box<dyn FieldConfigListener>>,
    field_configs: RefCell<IndexMap<String, Arc<FieldConfig>>>,
}

impl QueryConfigHandler {
    /// Empty registry: no settings, no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    /// Panics if the key holds a value of another type.
    pub fn get<T: Any>(&self, key: &ConfigKey<T>) -> Option<&T> {
        self.values.get(key)
    }

    pub fn try_get<T: Any>(&self, key: &ConfigKey<T>) -> Result<Option<&T>> {
        self.values.try_get(key)
    }

    pub fn has<T>(&self, key: &ConfigKey<T>) -> bool {
        self.values.has(key)
    }

    pub fn set<T: Any + Send + Sync>(&mut self, key: &ConfigKey<T>, value: T) {
        self.values.set(key, value);
        self.field_configs.get_mut().clear();
    }

    pub fn unset<T>(&mut self, key: &ConfigKey<T>) -> bool {
        let removed = self.values.unset(key);
        self.field_configs.get_mut().clear();
        removed
    }

    pub fn values(&self) -> &ConfigMap {
        &self.values
    }

    /// Append a listener. Order of registration is order of invocation.
    pub fn add_field_config_listener(&mut self, listener: impl FieldConfigListener + 'static) {
        self.listeners.push(Box::new(listener));
        self.field_configs.get_mut().clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of fields whose config is currently cached.
    pub fn cached_field_count(&self) -> usize {
        self.field_configs.borrow().len()
    }

    /// Configuration of `field`, built by the listeners on first request.
    ///
    /// A listener error aborts construction, is returned unchanged and leaves
    /// nothing cached for the field.
    pub fn get_field_config(&self, field: &str) -> Result<Arc<FieldConfig>> {
        if let Some(cached) = self.field_configs.borrow().get(field) {
            tracing::trace!(field, "field config served from cache");
            return Ok(Arc::clone(cached));
        }

        tracing::trace!(
            field,
            listeners = self.listeners.len(),
            "building field config"
        );

        let mut field_config = FieldConfig::new(field);
        for listener in &self.listeners {
            listener.build_field_config(&mut field_config, self)?;
        }

        let mut cache = self.field_configs.borrow_mut();
        let cached = cache
            .entry(field.to_owned())
            .or_insert_with(|| Arc::new(field_config));
        Ok(Arc::clone(cached))
    }
}

impl fmt::Debug for QueryConfigHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryConfigHandler")
            .field("values", &self.values)
            .field("listeners", &self.listeners.len())
            .field("cached_fields", &self.field_configs.borrow().len())
            .finish()
    }
}
