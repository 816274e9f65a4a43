use thiserror::Error;

use crate::value::ValueKind;

/// Errors surfaced through the attribute API.
///
/// The store itself never fails. These variants exist for specialized
/// accessors to report problems; `get`/`set` hand them back untouched.
#[derive(Error, Debug)]
pub enum AttrError {
    #[error("Attribute `{name}` expects {expected}, got {found}")]
    TypeMismatch {
        name: String,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("Attribute `{name}` rejected value: {reason}")]
    Rejected { name: String, reason: String },

    #[error("Attribute `{0}` is read-only")]
    ReadOnly(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

impl AttrError {
    pub fn type_mismatch(name: impl Into<String>, expected: ValueKind, found: ValueKind) -> Self {
        AttrError::TypeMismatch {
            name: name.into(),
            expected,
            found,
        }
    }

    pub fn rejected(name: impl Into<String>, reason: impl Into<String>) -> Self {
        AttrError::Rejected {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AttrError>;
