//! Row-to-record binding engine.
//!
//! Binds rows of named raw cell values into instances of registered record
//! types, tolerating row-level failures without aborting the batch:
//!
//! - **binder**: the [`RowBinder`] engine and batch orchestration
//! - **resolver**: the field-to-column resolution seam
//! - **error**: call-fatal errors and per-attempt failure causes
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use rowbind_engine::{CellValue, FieldType, RecordType, Row, RowBinder};
//!
//! #[derive(Default)]
//! struct Person {
//!     name: String,
//!     age: i64,
//! }
//!
//! let person = RecordType::builder::<Person>("Person")
//!     .text("name", |p, v| p.name = v)
//!     .from_column("Name")
//!     .int("age", |p, v| p.age = v)
//!     .from_column("Age")
//!     .build();
//!
//! let mut cells = BTreeMap::new();
//! cells.insert("Name".to_string(), CellValue::from("Alice"));
//! cells.insert("Age".to_string(), CellValue::from("30"));
//! let mut row = Row::new(cells, 1);
//!
//! let binder = RowBinder::new();
//! let all_bound = binder.bind_row(&mut row, std::slice::from_ref(&person)).unwrap();
//! assert!(all_bound);
//! assert_eq!(row.record::<Person>().unwrap().age, 30);
//! ```

pub mod binder;
pub mod error;
pub mod resolver;

pub use binder::{BINDING_ERROR, RowBinder};
pub use error::{BindError, FailureCause};
pub use resolver::{ColumnResolver, FieldNameResolver};

// Re-export the collaborator contracts and the data model so embedding
// pipelines depend on one crate.
pub use rowbind_convert::{ConvertError, ScalarConverter, ValueConverter};
pub use rowbind_model::{
    AssignError, BindStatus, CellValue, FieldSpec, FieldType, FieldValue, InstantiationError,
    Outcome, RecordType, Row,
};
