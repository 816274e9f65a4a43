//! # Accessor Resolution
//!
//! [`HasAttributes`] is what an owner implements to get attribute access.
//! The owner embeds an [`AttributeStore`] and, optionally, names the
//! attributes it wants to handle itself.
//!
//! ## Resolution Rules
//!
//! | Operation | Specialized accessor? | Falls back to |
//! |-----------|-----------------------|---------------|
//! | [`set`](HasAttributes::set) | [`setter`](HasAttributes::setter) | `set_attribute` |
//! | [`get`](HasAttributes::get) | [`getter`](HasAttributes::getter) | `get_attribute` |
//! | [`has`](HasAttributes::has) | never consulted | `has_attribute` |
//! | [`delete`](HasAttributes::delete) | never consulted | `remove_attribute` |
//!
//! When a setter exists the store is not written at all, so whatever the
//! setter does is the whole effect. `has` answers only from the store: an
//! owner that holds `foo` and also overrides `getfoo` still reports `foo`
//! as present, and one that overrides `getfoo` without storing anything
//! reports it absent.
//!
//! The hooks take `&self` and are asked on every call, so two values of the
//! same type can expose different accessor sets.
//!
//! ## Example
//!
//! ```
//! use attrstore::{AttrValue, AttributeStore, HasAttributes, Result, Setter};
//!
//! #[derive(Default)]
//! struct Example {
//!     attrs: AttributeStore,
//! }
//!
//! impl Example {
//!     fn set_baz(&mut self, value: AttrValue) -> Result<()> {
//!         let upper = value.as_str().unwrap_or_default().to_uppercase();
//!         self.set_attribute("baz", upper);
//!         Ok(())
//!     }
//! }
//!
//! impl HasAttributes for Example {
//!     fn attributes(&self) -> &AttributeStore {
//!         &self.attrs
//!     }
//!
//!     fn attributes_mut(&mut self) -> &mut AttributeStore {
//!         &mut self.attrs
//!     }
//!
//!     fn setter(&self, name: &str) -> Option<Setter<Self>> {
//!         match name {
//!             "baz" => Some(Self::set_baz),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut example = Example::default();
//! example.set("foo", "bar").unwrap();
//! example.set("baz", "qux").unwrap();
//!
//! assert_eq!(example.get("foo").unwrap(), Some(AttrValue::from("bar")));
//! assert_eq!(example.get("baz").unwrap(), Some(AttrValue::from("QUX")));
//! ```

use crate::accessors::{AccessorKind, Getter, Setter};
use crate::error::Result;
use crate::store::AttributeStore;
use crate::value::AttrValue;

pub trait HasAttributes: Sized {
    fn attributes(&self) -> &AttributeStore;

    fn attributes_mut(&mut self) -> &mut AttributeStore;

    /// Specialized reader for `name`, if the owner has one.
    fn getter(&self, _name: &str) -> Option<Getter<Self>> {
        None
    }

    /// Specialized writer for `name`, if the owner has one.
    fn setter(&self, _name: &str) -> Option<Setter<Self>> {
        None
    }

    /// Write `name`, through the owner's setter when it has one.
    ///
    /// Errors come only from a specialized setter and are returned as is.
    fn set(&mut self, name: &str, value: impl Into<AttrValue>) -> Result<()> {
        let value = value.into();
        match self.setter(name) {
            Some(setter) => {
                log::trace!("`{name}` handled by {}", AccessorKind::Set.method_name(name));
                setter(self, value).inspect_err(|err| {
                    log::debug!("{} failed: {err}", AccessorKind::Set.method_name(name));
                })
            }
            None => {
                log::trace!("`{name}` written to attribute store");
                self.set_attribute(name, value);
                Ok(())
            }
        }
    }

    /// Read `name`, through the owner's getter when it has one.
    ///
    /// Without a getter this is a copy of [`get_attribute`](Self::get_attribute):
    /// `Ok(None)` for a missing name.
    fn get(&self, name: &str) -> Result<Option<AttrValue>> {
        match self.getter(name) {
            Some(getter) => {
                log::trace!("`{name}` handled by {}", AccessorKind::Get.method_name(name));
                getter(self).inspect_err(|err| {
                    log::debug!("{} failed: {err}", AccessorKind::Get.method_name(name));
                })
            }
            None => Ok(self.get_attribute(name).cloned()),
        }
    }

    /// Presence check. Always answered by the store, never by accessors.
    fn has(&self, name: &str) -> bool {
        self.has_attribute(name)
    }

    /// Remove `name` from the store. There is no specialized deleter.
    fn delete(&mut self, name: &str) {
        self.remove_attribute(name);
    }

    fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes_mut().set_attribute(name, value);
    }

    fn get_attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes().get_attribute(name)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attributes().has_attribute(name)
    }

    fn remove_attribute(&mut self, name: &str) -> Option<AttrValue> {
        self.attributes_mut().remove_attribute(name)
    }

    fn clear_attributes(&mut self) {
        self.attributes_mut().clear_attributes();
    }

    fn hold(&mut self, name: impl Into<String>) {
        self.attributes_mut().hold(name);
    }
}
