use thiserror::Error;

use rowbind_model::FieldType;

/// A raw cell could not be coerced to a field's declared type.
#[derive(Debug, Clone, Error)]
pub enum ConvertError {
    /// The cell is empty and the field does not accept absence.
    #[error("field '{field}' has no value")]
    Missing { field: String },

    /// The cell's text could not be parsed as the declared type.
    #[error("field '{field}': cannot parse '{value}' as {expected}")]
    Parse {
        field: String,
        value: String,
        expected: FieldType,
    },

    /// The cell's shape has no defined coercion to the declared type.
    #[error("field '{field}': {got} cell is not convertible to {expected}")]
    Unsupported {
        field: String,
        got: &'static str,
        expected: FieldType,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = ConvertError::Parse {
            field: "age".to_string(),
            value: "thirty".to_string(),
            expected: FieldType::Int,
        };
        assert_eq!(err.to_string(), "field 'age': cannot parse 'thirty' as int");
    }
}
