//! Data model for the row binding engine.
//!
//! - **cell**: raw cell values and converted field values
//! - **row**: rows, binding outcomes, and bound-record storage
//! - **record**: record-type descriptors built as field accessor tables
//! - **error**: instantiation and assignment errors

pub mod cell;
pub mod error;
pub mod record;
pub mod row;

pub use cell::{CellValue, FieldType, FieldValue};
pub use error::{AssignError, InstantiationError};
pub use record::{FieldBinding, FieldSpec, RecordType, RecordTypeBuilder};
pub use row::{BindStatus, Outcome, Row};
