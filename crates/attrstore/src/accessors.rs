//! Specialized accessors and their registry.
//!
//! An owner overrides generic storage for a name by handing back a plain
//! function pointer from [`HasAttributes::getter`](crate::HasAttributes::getter)
//! or [`HasAttributes::setter`](crate::HasAttributes::setter). Small owners
//! answer with a `match`; owners with many overrides declare an
//! [`Accessors`] table once and look names up in it.
//!
//! ```ignore
//! static ACCESSORS: Lazy<Accessors<Example>> = Lazy::new(|| {
//!     Accessors::new()
//!         .getter("baz", Example::get_baz)
//!         .setter("baz", Example::set_baz)
//! });
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::error::Result;
use crate::value::AttrValue;

/// Reads one attribute on behalf of the owner.
pub type Getter<T> = fn(&T) -> Result<Option<AttrValue>>;

/// Writes one attribute on behalf of the owner.
pub type Setter<T> = fn(&mut T, AttrValue) -> Result<()>;

/// Which direction an accessor serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    Get,
    Set,
}

impl AccessorKind {
    pub fn prefix(self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Set => "set",
        }
    }

    /// Conventional method name for `name`: the prefix joined to the name
    /// as written, with no case folding (`"baz"` -> `"setbaz"`).
    pub fn method_name(self, name: &str) -> String {
        format!("{}{}", self.prefix(), name)
    }
}

struct Entry<T> {
    getter: Option<Getter<T>>,
    setter: Option<Setter<T>>,
}

/// Name-keyed table of specialized accessors for owner type `T`.
///
/// Registering a name twice in the same direction replaces the earlier
/// function.
pub struct Accessors<T> {
    entries: HashMap<&'static str, Entry<T>>,
}

impl<T> Default for Accessors<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> fmt::Debug for Accessors<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("Accessors").field("names", &names).finish()
    }
}

impl<T> Accessors<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, name: &'static str) -> &mut Entry<T> {
        self.entries.entry(name).or_insert(Entry {
            getter: None,
            setter: None,
        })
    }

    pub fn getter(mut self, name: &'static str, getter: Getter<T>) -> Self {
        self.entry(name).getter = Some(getter);
        self
    }

    pub fn setter(mut self, name: &'static str, setter: Setter<T>) -> Self {
        self.entry(name).setter = Some(setter);
        self
    }

    pub fn get(&self, name: &str) -> Option<Getter<T>> {
        self.entries.get(name).and_then(|e| e.getter)
    }

    pub fn set(&self, name: &str) -> Option<Setter<T>> {
        self.entries.get(name).and_then(|e| e.setter)
    }

    /// True if `name` has an accessor in either direction.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}
