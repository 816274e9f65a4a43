//! Attribute value types.
//!
//! The store places no constraints on what an attribute holds, so values are
//! carried as a small dynamically typed enum. [`AttrValue::Null`] is a real
//! stored value (what [`hold`](crate::AttributeStore::hold) writes), distinct
//! from a missing key.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Runtime representation of an attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Declared but empty.
    Null,

    Bool(bool),

    Int(i64),

    Float(f64),

    Str(String),

    /// Ordered list of nested values.
    List(Vec<AttrValue>),

    /// Point in time (e.g. `created_at`).
    Timestamp(DateTime<Utc>),

    /// Reference to some other object by id.
    Ref(Uuid),
}

/// The variant tag of an [`AttrValue`], used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    List,
    Timestamp,
    Ref,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "string",
            ValueKind::List => "list",
            ValueKind::Timestamp => "timestamp",
            ValueKind::Ref => "ref",
        };
        f.write_str(name)
    }
}

impl AttrValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            AttrValue::Null => ValueKind::Null,
            AttrValue::Bool(_) => ValueKind::Bool,
            AttrValue::Int(_) => ValueKind::Int,
            AttrValue::Float(_) => ValueKind::Float,
            AttrValue::Str(_) => ValueKind::Str,
            AttrValue::List(_) => ValueKind::List,
            AttrValue::Timestamp(_) => ValueKind::Timestamp,
            AttrValue::Ref(_) => ValueKind::Ref,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value as a float. Integers are converted with `as`, so values
    /// beyond 2^53 in magnitude round to the nearest representable float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(v) => Some(*v),
            AttrValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            AttrValue::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    pub fn as_ref_id(&self) -> Option<Uuid> {
        match self {
            AttrValue::Ref(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Int(v.into())
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Str(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Str(v)
    }
}

impl From<DateTime<Utc>> for AttrValue {
    fn from(v: DateTime<Utc>) -> Self {
        AttrValue::Timestamp(v)
    }
}

impl From<Uuid> for AttrValue {
    fn from(v: Uuid) -> Self {
        AttrValue::Ref(v)
    }
}

impl<T: Into<AttrValue>> From<Vec<T>> for AttrValue {
    fn from(v: Vec<T>) -> Self {
        AttrValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(AttrValue::Null, Into::into)
    }
}
