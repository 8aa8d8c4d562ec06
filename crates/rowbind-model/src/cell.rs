//! Raw and converted value representations.
//!
//! A [`CellValue`] is what a tabular source hands us for one column of one
//! row: loosely typed, possibly absent. A [`FieldValue`] is what a converter
//! produces for one target field: matched against the field's declared
//! [`FieldType`] by the descriptor's assignment closure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared scalar type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    Int,
    Float,
    Bool,
    Date,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::Date => "date",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One raw cell as read from a tabular source.
///
/// Absent columns are modelled as [`CellValue::Empty`], never as an error;
/// whether emptiness is acceptable is a converter policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Short tag for log lines and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Text(_) => "text",
            CellValue::Number(_) => "number",
            CellValue::Bool(_) => "bool",
            CellValue::Date(_) => "date",
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

/// A converted value ready for assignment into a record field.
///
/// [`FieldValue::None`] means "nothing to assign" and is only accepted by
/// optional fields.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    None,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
}

impl FieldValue {
    /// Short tag for mismatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::None => "none",
            FieldValue::Text(_) => "text",
            FieldValue::Int(_) => "int",
            FieldValue::Float(_) => "float",
            FieldValue::Bool(_) => "bool",
            FieldValue::Date(_) => "date",
        }
    }
}
