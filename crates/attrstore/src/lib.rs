//! # attrstore
//!
//! Dynamic named attributes for any type.
//!
//! A type embeds an [`AttributeStore`] and implements [`HasAttributes`] to
//! gain ad hoc attributes: values can be set, read, checked and removed by
//! name at runtime without declaring them up front. Individual names can be
//! taken over by the type's own getter or setter, while everything else falls
//! through to the store.
//!
//! ## Modules
//!
//! - [`store`]: the generic name → value map and its total operations
//! - [`holder`]: the resolution layer deciding accessor vs. store
//! - [`accessors`]: getter/setter signatures and the [`Accessors`] registry
//! - [`value`]: [`AttrValue`], the dynamically typed value
//! - [`config`]: [`StoreConfig`], loaded with confique
//! - [`error`]: [`AttrError`] and the crate [`Result`]
//!
//! ## Declared but Unset
//!
//! [`hold`](AttributeStore::hold) marks a name as present with a
//! [`Null`](AttrValue::Null) value without touching an existing one. Presence
//! is always answered by the store, so `hold` followed by
//! [`has`](HasAttributes::has) reports the name even when a getter for it
//! exists.
//!
//! ## Logging
//!
//! Resolution decisions are emitted through the [`log`] facade at `trace`
//! level, accessor failures at `debug`. No logger is installed here.

pub mod accessors;
pub mod config;
pub mod error;
pub mod holder;
pub mod store;
pub mod value;

pub use accessors::{AccessorKind, Accessors, Getter, Setter};
pub use config::StoreConfig;
pub use error::{AttrError, Result};
pub use holder::HasAttributes;
pub use store::AttributeStore;
pub use value::{AttrValue, ValueKind};
