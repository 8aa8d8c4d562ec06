use thiserror::Error;

use crate::cell::FieldType;

/// A record type's factory could not produce an instance.
///
/// Treated by the binding engine as a row-level failure, not a fatal error.
#[derive(Debug, Clone, Error)]
#[error("record instantiation failed: {reason}")]
pub struct InstantiationError {
    reason: String,
}

impl InstantiationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A converted value could not be written into a record field.
#[derive(Debug, Clone, Error)]
pub enum AssignError {
    /// The converter produced a value of the wrong shape for the field.
    #[error("field '{field}': expected {expected}, got {got}")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        got: &'static str,
    },

    /// The boxed record does not have the concrete type this descriptor
    /// was built for.
    #[error("record value does not match the descriptor's concrete type")]
    WrongRecordType,

    /// Assignment was requested for a field registered as non-bindable.
    #[error("field '{field}' is not bindable")]
    NotBindable { field: String },
}
