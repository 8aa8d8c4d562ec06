//! Value conversion for the row binding engine.
//!
//! A [`ValueConverter`] turns one raw cell into a value matching a field's
//! declared type. The engine hands the converter the full row mapping so a
//! policy may consult sibling columns (a unit column next to a measurement,
//! a locale column next to a date). [`ScalarConverter`] is the default
//! single-cell policy.

use std::collections::BTreeMap;

use rowbind_model::{CellValue, FieldSpec, FieldValue};

pub mod error;
pub mod scalar;

pub use error::ConvertError;
pub use scalar::ScalarConverter;

/// Conversion collaborator consumed by the binding engine.
pub trait ValueConverter: Send + Sync {
    /// Convert `raw` for `field`, with the row's full mapping as context.
    fn convert(
        &self,
        raw: &CellValue,
        field: &FieldSpec,
        row: &BTreeMap<String, CellValue>,
    ) -> Result<FieldValue, ConvertError>;
}
