//! Default scalar conversion policy.
//!
//! [`ScalarConverter`] coerces one raw cell to a field's declared scalar
//! type. It never consults sibling columns; context-sensitive policies
//! implement [`ValueConverter`](crate::ValueConverter) themselves.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use rowbind_model::{CellValue, FieldSpec, FieldType, FieldValue};

use crate::ValueConverter;
use crate::error::ConvertError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stateless per-cell converter used when no custom converter is injected.
///
/// Empty cells convert to [`FieldValue::None`] for optional fields and fail
/// with [`ConvertError::Missing`] for required ones; the binding engine
/// itself imposes no presence requirement.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarConverter;

impl ValueConverter for ScalarConverter {
    fn convert(
        &self,
        raw: &CellValue,
        field: &FieldSpec,
        _row: &BTreeMap<String, CellValue>,
    ) -> Result<FieldValue, ConvertError> {
        if raw.is_empty() {
            return if field.optional {
                Ok(FieldValue::None)
            } else {
                Err(ConvertError::Missing {
                    field: field.name.clone(),
                })
            };
        }
        match field.data_type {
            FieldType::Text => Ok(to_text(raw)),
            FieldType::Int => to_int(raw, field),
            FieldType::Float => to_float(raw, field),
            FieldType::Bool => to_bool(raw, field),
            FieldType::Date => to_date(raw, field),
        }
    }
}

fn to_text(raw: &CellValue) -> FieldValue {
    let text = match raw {
        CellValue::Text(text) => text.clone(),
        CellValue::Number(n) => format_number(*n),
        CellValue::Bool(b) => b.to_string(),
        CellValue::Date(d) => d.format(DATE_FORMAT).to_string(),
        // Empty cells are resolved before per-type coercion.
        CellValue::Empty => String::new(),
    };
    FieldValue::Text(text)
}

fn to_int(raw: &CellValue, field: &FieldSpec) -> Result<FieldValue, ConvertError> {
    match raw {
        CellValue::Number(n) => {
            if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n <= i64::MAX as f64 {
                Ok(FieldValue::Int(*n as i64))
            } else {
                Err(parse_error(field, &format_number(*n)))
            }
        }
        CellValue::Text(text) => {
            let trimmed = text.trim();
            trimmed
                .parse::<i64>()
                .map(FieldValue::Int)
                .map_err(|_| parse_error(field, trimmed))
        }
        other => Err(unsupported(field, other)),
    }
}

fn to_float(raw: &CellValue, field: &FieldSpec) -> Result<FieldValue, ConvertError> {
    match raw {
        CellValue::Number(n) => Ok(FieldValue::Float(*n)),
        CellValue::Text(text) => {
            let trimmed = text.trim();
            trimmed
                .parse::<f64>()
                .map(FieldValue::Float)
                .map_err(|_| parse_error(field, trimmed))
        }
        other => Err(unsupported(field, other)),
    }
}

fn to_bool(raw: &CellValue, field: &FieldSpec) -> Result<FieldValue, ConvertError> {
    match raw {
        CellValue::Bool(b) => Ok(FieldValue::Bool(*b)),
        CellValue::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Ok(FieldValue::Bool(true)),
            "false" | "no" | "n" | "0" => Ok(FieldValue::Bool(false)),
            other => Err(parse_error(field, other)),
        },
        other => Err(unsupported(field, other)),
    }
}

fn to_date(raw: &CellValue, field: &FieldSpec) -> Result<FieldValue, ConvertError> {
    match raw {
        CellValue::Date(d) => Ok(FieldValue::Date(*d)),
        CellValue::Text(text) => {
            let trimmed = text.trim();
            NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                .map(FieldValue::Date)
                .map_err(|_| parse_error(field, trimmed))
        }
        other => Err(unsupported(field, other)),
    }
}

/// Render a numeric cell without a trailing fractional part
/// (`30.0` becomes `"30"`, `1.50` becomes `"1.5"`).
fn format_number(n: f64) -> String {
    let mut text = format!("{n}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}

fn parse_error(field: &FieldSpec, value: &str) -> ConvertError {
    ConvertError::Parse {
        field: field.name.clone(),
        value: value.to_string(),
        expected: field.data_type,
    }
}

fn unsupported(field: &FieldSpec, raw: &CellValue) -> ConvertError {
    ConvertError::Unsupported {
        field: field.name.clone(),
        got: raw.kind(),
        expected: field.data_type,
    }
}
