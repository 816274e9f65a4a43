//! # Generic Attribute Storage
//!
//! [`AttributeStore`] is the map every owner embeds. It answers the storage
//! half of the attribute contract; override dispatch lives in
//! [`HasAttributes`](crate::HasAttributes).
//!
//! ## Presence vs. Value
//!
//! A key's presence is the only signal that an attribute exists:
//!
//! | State | `has_attribute` | `get_attribute` |
//! |-------|-----------------|-----------------|
//! | never set | `false` | `None` |
//! | held | `true` | `Some(&Null)` |
//! | set | `true` | `Some(&value)` |
//!
//! Every operation is total. Missing keys are never an error.

use std::collections::HashMap;
use std::ops::Index;

use crate::config::StoreConfig;
use crate::value::AttrValue;

static NULL: AttrValue = AttrValue::Null;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeStore {
    attributes: HashMap<String, AttrValue>,
}

impl AttributeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` attributes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            attributes: HashMap::with_capacity(capacity),
        }
    }

    /// Create an empty store sized by `config`.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Insert or overwrite `name`.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Get the stored value, or `None` if `name` was never set or held.
    pub fn get_attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// True iff `name` is a key, whatever its value (including `Null`).
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Remove `name` if present. Removing a missing name is a no-op.
    pub fn remove_attribute(&mut self, name: &str) -> Option<AttrValue> {
        self.attributes.remove(name)
    }

    /// Remove every attribute, held ones included.
    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
    }

    /// Declare `name` without giving it a value.
    ///
    /// Inserts `Null` when `name` is missing. An existing value, including an
    /// explicit `Null`, is left as is.
    pub fn hold(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.has_attribute(&name) {
            log::trace!("holding attribute `{name}`");
            self.attributes.insert(name, AttrValue::Null);
        }
    }

    /// Number of present attributes, held ones included.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True if no attribute is present.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Names of all present attributes, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// All `(name, value)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// `store["name"]` reads like `get_attribute`, yielding `Null` for a missing
/// name instead of panicking.
impl Index<&str> for AttributeStore {
    type Output = AttrValue;

    fn index(&self, name: &str) -> &AttrValue {
        self.get_attribute(name).unwrap_or(&NULL)
    }
}
