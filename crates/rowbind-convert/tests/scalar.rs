//! Tests for the default scalar conversion policy.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use rowbind_convert::{ConvertError, ScalarConverter, ValueConverter};
use rowbind_model::{CellValue, FieldSpec, FieldType, FieldValue};

fn spec(name: &str, data_type: FieldType, optional: bool) -> FieldSpec {
    FieldSpec {
        name: name.to_string(),
        column: None,
        data_type,
        optional,
        bindable: true,
    }
}

fn convert(raw: CellValue, data_type: FieldType) -> Result<FieldValue, ConvertError> {
    ScalarConverter.convert(&raw, &spec("field", data_type, false), &BTreeMap::new())
}

#[test]
fn int_accepts_text_and_integral_numbers() {
    assert_eq!(
        convert(CellValue::from("30"), FieldType::Int).unwrap(),
        FieldValue::Int(30)
    );
    assert_eq!(
        convert(CellValue::from(" 30 "), FieldType::Int).unwrap(),
        FieldValue::Int(30)
    );
    assert_eq!(
        convert(CellValue::from(30.0), FieldType::Int).unwrap(),
        FieldValue::Int(30)
    );
}

#[test]
fn int_rejects_words_and_fractions() {
    assert!(matches!(
        convert(CellValue::from("thirty"), FieldType::Int),
        Err(ConvertError::Parse { .. })
    ));
    assert!(matches!(
        convert(CellValue::from(30.5), FieldType::Int),
        Err(ConvertError::Parse { .. })
    ));
    assert!(matches!(
        convert(CellValue::from(true), FieldType::Int),
        Err(ConvertError::Unsupported { .. })
    ));
}

#[test]
fn text_renders_non_text_cells() {
    assert_eq!(
        convert(CellValue::from("Alice"), FieldType::Text).unwrap(),
        FieldValue::Text("Alice".to_string())
    );
    assert_eq!(
        convert(CellValue::from(30.0), FieldType::Text).unwrap(),
        FieldValue::Text("30".to_string())
    );
    assert_eq!(
        convert(CellValue::from(true), FieldType::Text).unwrap(),
        FieldValue::Text("true".to_string())
    );
    let date = NaiveDate::from_ymd_opt(2017, 6, 27).unwrap();
    assert_eq!(
        convert(CellValue::from(date), FieldType::Text).unwrap(),
        FieldValue::Text("2017-06-27".to_string())
    );
}

#[test]
fn float_parses_text() {
    assert_eq!(
        convert(CellValue::from("1.5"), FieldType::Float).unwrap(),
        FieldValue::Float(1.5)
    );
    assert_eq!(
        convert(CellValue::from(1.5), FieldType::Float).unwrap(),
        FieldValue::Float(1.5)
    );
    assert!(convert(CellValue::from("one"), FieldType::Float).is_err());
}

#[test]
fn bool_accepts_common_synonyms() {
    for raw in ["true", "YES", "y", "1"] {
        assert_eq!(
            convert(CellValue::from(raw), FieldType::Bool).unwrap(),
            FieldValue::Bool(true),
            "raw = {raw}"
        );
    }
    for raw in ["false", "No", "n", "0"] {
        assert_eq!(
            convert(CellValue::from(raw), FieldType::Bool).unwrap(),
            FieldValue::Bool(false),
            "raw = {raw}"
        );
    }
    assert!(convert(CellValue::from("maybe"), FieldType::Bool).is_err());
}

#[test]
fn date_parses_iso_text() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    assert_eq!(
        convert(CellValue::from("2024-01-31"), FieldType::Date).unwrap(),
        FieldValue::Date(date)
    );
    assert_eq!(
        convert(CellValue::from(date), FieldType::Date).unwrap(),
        FieldValue::Date(date)
    );
    assert!(convert(CellValue::from("31/01/2024"), FieldType::Date).is_err());
}

#[test]
fn empty_cell_defers_to_optionality() {
    let converter = ScalarConverter;
    let row = BTreeMap::new();
    let required = spec("age", FieldType::Int, false);
    assert!(matches!(
        converter.convert(&CellValue::Empty, &required, &row),
        Err(ConvertError::Missing { .. })
    ));

    let optional = spec("age", FieldType::Int, true);
    assert_eq!(
        converter.convert(&CellValue::Empty, &optional, &row).unwrap(),
        FieldValue::None
    );
}
