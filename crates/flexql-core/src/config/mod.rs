//! Typed configuration registry.
//!
//! - `ConfigKey<T>` names a setting and fixes its value type
//! - `ConfigMap` stores values under keys; reads are type-checked
//! - `FieldConfig` is the per-field map built on demand by listeners
//! - `QueryConfigHandler` is the per-session registry passes read from

mod handler;

#[cfg(test)]
mod config_tests;

use std::any::{Any, type_name};
use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;

use crate::invariants::ensure_typed;
use crate::{Error, Result};

pub use handler::{FieldConfigListener, QueryConfigHandler};

/// Name of a configuration setting, typed by the value it holds.
pub struct ConfigKey<T> {
    name: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> ConfigKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _value: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for ConfigKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ConfigKey<T> {}

impl<T> fmt::Debug for ConfigKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConfigKey").field(&self.name).finish()
    }
}

struct StoredValue {
    value: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

/// Key/value store with type-checked reads.
///
/// Absent keys read as `None`; there are no implicit defaults and no coercion.
#[derive(Default)]
pub struct ConfigMap {
    values: IndexMap<&'static str, StoredValue>,
}

impl ConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a value.
    ///
    /// # Panics
    /// Panics if the key holds a value of another type.
    pub fn get<T: Any>(&self, key: &ConfigKey<T>) -> Option<&T> {
        ensure_typed(key, self.try_get(key))
    }

    /// Read a value, reporting a type mismatch as `Error::TypeMismatch`.
    pub fn try_get<T: Any>(&self, key: &ConfigKey<T>) -> Result<Option<&T>> {
        let Some(stored) = self.values.get(key.name()) else {
            return Ok(None);
        };

        let value: &(dyn Any + Send + Sync) = &*stored.value;
        value
            .downcast_ref::<T>()
            .map(Some)
            .ok_or(Error::TypeMismatch {
                key: key.name(),
                requested: type_name::<T>(),
                stored: stored.type_name,
            })
    }

    /// Write a value, replacing any previous one.
    pub fn set<T: Any + Send + Sync>(&mut self, key: &ConfigKey<T>, value: T) {
        self.values.insert(
            key.name(),
            StoredValue {
                value: Box::new(value),
                type_name: type_name::<T>(),
            },
        );
    }

    pub fn has<T>(&self, key: &ConfigKey<T>) -> bool {
        self.values.contains_key(key.name())
    }

    /// Remove a value. Returns whether the key was set.
    pub fn unset<T>(&mut self, key: &ConfigKey<T>) -> bool {
        self.values.shift_remove(key.name()).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Key names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }
}

impl fmt::Debug for ConfigMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.values.iter().map(|(name, v)| (name, v.type_name)))
            .finish()
    }
}

/// Resolved settings of one field, e.g. its boost.
///
/// Built by `QueryConfigHandler::get_field_config`; listeners are the only
/// code that writes to it.
#[derive(Debug)]
pub struct FieldConfig {
    field: String,
    values: ConfigMap,
}

impl FieldConfig {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            values: ConfigMap::new(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// # Panics
    /// Panics if the key holds a value of another type.
    pub fn get<T: Any>(&self, key: &ConfigKey<T>) -> Option<&T> {
        self.values.get(key)
    }

    pub fn try_get<T: Any>(&self, key: &ConfigKey<T>) -> Result<Option<&T>> {
        self.values.try_get(key)
    }

    pub fn set<T: Any + Send + Sync>(&mut self, key: &ConfigKey<T>, value: T) {
        self.values.set(key, value);
    }

    pub fn has<T>(&self, key: &ConfigKey<T>) -> bool {
        self.values.has(key)
    }

    pub fn unset<T>(&mut self, key: &ConfigKey<T>) -> bool {
        self.values.unset(key)
    }

    pub fn values(&self) -> &ConfigMap {
        &self.values
    }
}
