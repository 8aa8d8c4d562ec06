//! Record-type descriptors: registered per-type field accessor tables.
//!
//! A [`RecordType`] describes one target record type to the binding engine:
//! how to construct an empty instance and, for every field, its name, its
//! declared type, whether it is bindable, and a closure that writes a
//! converted value into it. Descriptors are built once at startup and treated
//! as immutable configuration for the life of a batch; no runtime
//! introspection is involved. Because the assignment closures are created
//! where the field is visible, they can populate fields regardless of the
//! declared visibility at the registration site.
//!
//! # Example
//!
//! ```
//! use rowbind_model::{FieldType, RecordType};
//!
//! #[derive(Default)]
//! struct Person {
//!     name: String,
//!     age: i64,
//!     cache: String,
//! }
//!
//! let person = RecordType::builder::<Person>("Person")
//!     .text("name", |p, v| p.name = v)
//!     .from_column("Name")
//!     .int("age", |p, v| p.age = v)
//!     .from_column("Age")
//!     .skip("cache", FieldType::Text)
//!     .build();
//!
//! assert_eq!(person.fields().len(), 3);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::fmt;
use std::marker::PhantomData;

use crate::cell::{FieldType, FieldValue};
use crate::error::{AssignError, InstantiationError};

type Factory = Box<dyn Fn() -> Result<Box<dyn Any + Send>, InstantiationError> + Send + Sync>;
type Assign = Box<dyn Fn(&mut dyn Any, FieldValue) -> Result<(), AssignError> + Send + Sync>;

/// Static description of one record field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field identity as registered on the record type.
    pub name: String,
    /// Explicit source column title, when pinned at registration.
    /// Resolution policy for unpinned fields belongs to the column resolver.
    pub column: Option<String>,
    /// Declared scalar type.
    pub data_type: FieldType,
    /// Optional fields accept an absent value; required fields leave that
    /// decision to the converter.
    pub optional: bool,
    /// Non-bindable fields are skipped entirely: no column lookup, no
    /// conversion, no assignment.
    pub bindable: bool,
}

/// One field of a record type: its spec plus, for bindable fields, the
/// assignment accessor.
pub struct FieldBinding {
    pub spec: FieldSpec,
    assign: Option<Assign>,
}

impl FieldBinding {
    /// Write a converted value into this field of `record`.
    pub fn assign(&self, record: &mut dyn Any, value: FieldValue) -> Result<(), AssignError> {
        match &self.assign {
            Some(assign) => assign(record, value),
            None => Err(AssignError::NotBindable {
                field: self.spec.name.clone(),
            }),
        }
    }
}

impl fmt::Debug for FieldBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

/// Descriptor for one target record type.
pub struct RecordType {
    name: String,
    type_id: TypeId,
    instantiate: Factory,
    fields: Vec<FieldBinding>,
}

impl RecordType {
    /// Start a descriptor for a default-constructible record type.
    pub fn builder<T: Default + Send + 'static>(name: impl Into<String>) -> RecordTypeBuilder<T> {
        Self::builder_with(name, || Ok(T::default()))
    }

    /// Start a descriptor with a custom, possibly fallible factory.
    pub fn builder_with<T, F>(name: impl Into<String>, factory: F) -> RecordTypeBuilder<T>
    where
        T: Send + 'static,
        F: Fn() -> Result<T, InstantiationError> + Send + Sync + 'static,
    {
        RecordTypeBuilder {
            name: name.into(),
            instantiate: Box::new(move || {
                factory().map(|record| Box::new(record) as Box<dyn Any + Send>)
            }),
            fields: Vec::new(),
            marker: PhantomData,
        }
    }

    /// Display name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identity of the concrete Rust type, used to key bound records on a row.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Construct a fresh, empty instance.
    pub fn instantiate(&self) -> Result<Box<dyn Any + Send>, InstantiationError> {
        (self.instantiate)()
    }

    /// Fields in registration order.
    pub fn fields(&self) -> &[FieldBinding] {
        &self.fields
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordType")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

/// Builder for [`RecordType`] accessor tables.
pub struct RecordTypeBuilder<T> {
    name: String,
    instantiate: Factory,
    fields: Vec<FieldBinding>,
    marker: PhantomData<fn() -> T>,
}

impl<T: 'static> RecordTypeBuilder<T> {
    /// Register a required text field.
    pub fn text(self, name: &str, set: impl Fn(&mut T, String) + Send + Sync + 'static) -> Self {
        self.bindable(name, FieldType::Text, false, move |record, value, field| {
            match value {
                FieldValue::Text(text) => {
                    set(record, text);
                    Ok(())
                }
                other => Err(mismatch(field, FieldType::Text, &other)),
            }
        })
    }

    /// Register an optional text field.
    pub fn opt_text(
        self,
        name: &str,
        set: impl Fn(&mut T, Option<String>) + Send + Sync + 'static,
    ) -> Self {
        self.bindable(name, FieldType::Text, true, move |record, value, field| {
            match value {
                FieldValue::Text(text) => {
                    set(record, Some(text));
                    Ok(())
                }
                FieldValue::None => {
                    set(record, None);
                    Ok(())
                }
                other => Err(mismatch(field, FieldType::Text, &other)),
            }
        })
    }

    /// Register a required integer field.
    pub fn int(self, name: &str, set: impl Fn(&mut T, i64) + Send + Sync + 'static) -> Self {
        self.bindable(name, FieldType::Int, false, move |record, value, field| {
            match value {
                FieldValue::Int(n) => {
                    set(record, n);
                    Ok(())
                }
                other => Err(mismatch(field, FieldType::Int, &other)),
            }
        })
    }

    /// Register an optional integer field.
    pub fn opt_int(
        self,
        name: &str,
        set: impl Fn(&mut T, Option<i64>) + Send + Sync + 'static,
    ) -> Self {
        self.bindable(name, FieldType::Int, true, move |record, value, field| {
            match value {
                FieldValue::Int(n) => {
                    set(record, Some(n));
                    Ok(())
                }
                FieldValue::None => {
                    set(record, None);
                    Ok(())
                }
                other => Err(mismatch(field, FieldType::Int, &other)),
            }
        })
    }

    /// Register a required float field.
    pub fn float(self, name: &str, set: impl Fn(&mut T, f64) + Send + Sync + 'static) -> Self {
        self.bindable(name, FieldType::Float, false, move |record, value, field| {
            match value {
                FieldValue::Float(x) => {
                    set(record, x);
                    Ok(())
                }
                other => Err(mismatch(field, FieldType::Float, &other)),
            }
        })
    }

    /// Register an optional float field.
    pub fn opt_float(
        self,
        name: &str,
        set: impl Fn(&mut T, Option<f64>) + Send + Sync + 'static,
    ) -> Self {
        self.bindable(name, FieldType::Float, true, move |record, value, field| {
            match value {
                FieldValue::Float(x) => {
                    set(record, Some(x));
                    Ok(())
                }
                FieldValue::None => {
                    set(record, None);
                    Ok(())
                }
                other => Err(mismatch(field, FieldType::Float, &other)),
            }
        })
    }

    /// Register a required boolean field.
    pub fn bool(self, name: &str, set: impl Fn(&mut T, bool) + Send + Sync + 'static) -> Self {
        self.bindable(name, FieldType::Bool, false, move |record, value, field| {
            match value {
                FieldValue::Bool(b) => {
                    set(record, b);
                    Ok(())
                }
                other => Err(mismatch(field, FieldType::Bool, &other)),
            }
        })
    }

    /// Register an optional boolean field.
    pub fn opt_bool(
        self,
        name: &str,
        set: impl Fn(&mut T, Option<bool>) + Send + Sync + 'static,
    ) -> Self {
        self.bindable(name, FieldType::Bool, true, move |record, value, field| {
            match value {
                FieldValue::Bool(b) => {
                    set(record, Some(b));
                    Ok(())
                }
                FieldValue::None => {
                    set(record, None);
                    Ok(())
                }
                other => Err(mismatch(field, FieldType::Bool, &other)),
            }
        })
    }

    /// Register a required date field.
    pub fn date(self, name: &str, set: impl Fn(&mut T, NaiveDate) + Send + Sync + 'static) -> Self {
        self.bindable(name, FieldType::Date, false, move |record, value, field| {
            match value {
                FieldValue::Date(d) => {
                    set(record, d);
                    Ok(())
                }
                other => Err(mismatch(field, FieldType::Date, &other)),
            }
        })
    }

    /// Register an optional date field.
    pub fn opt_date(
        self,
        name: &str,
        set: impl Fn(&mut T, Option<NaiveDate>) + Send + Sync + 'static,
    ) -> Self {
        self.bindable(name, FieldType::Date, true, move |record, value, field| {
            match value {
                FieldValue::Date(d) => {
                    set(record, Some(d));
                    Ok(())
                }
                FieldValue::None => {
                    set(record, None);
                    Ok(())
                }
                other => Err(mismatch(field, FieldType::Date, &other)),
            }
        })
    }

    /// Pin the most recently registered field to an explicit column title.
    pub fn from_column(mut self, title: &str) -> Self {
        if let Some(binding) = self.fields.last_mut() {
            binding.spec.column = Some(title.to_string());
        }
        self
    }

    /// Register a non-bindable field: declared on the type but never
    /// populated from row data.
    pub fn skip(mut self, name: &str, data_type: FieldType) -> Self {
        self.fields.push(FieldBinding {
            spec: FieldSpec {
                name: name.to_string(),
                column: None,
                data_type,
                optional: false,
                bindable: false,
            },
            assign: None,
        });
        self
    }

    pub fn build(self) -> RecordType {
        RecordType {
            name: self.name,
            type_id: TypeId::of::<T>(),
            instantiate: self.instantiate,
            fields: self.fields,
        }
    }

    fn bindable(
        mut self,
        name: &str,
        data_type: FieldType,
        optional: bool,
        apply: impl Fn(&mut T, FieldValue, &str) -> Result<(), AssignError> + Send + Sync + 'static,
    ) -> Self {
        let spec = FieldSpec {
            name: name.to_string(),
            column: None,
            data_type,
            optional,
            bindable: true,
        };
        let field_name = spec.name.clone();
        let assign: Assign = Box::new(move |record, value| {
            let record = record
                .downcast_mut::<T>()
                .ok_or(AssignError::WrongRecordType)?;
            apply(record, value, &field_name)
        });
        self.fields.push(FieldBinding {
            spec,
            assign: Some(assign),
        });
        self
    }
}

fn mismatch(field: &str, expected: FieldType, got: &FieldValue) -> AssignError {
    AssignError::TypeMismatch {
        field: field.to_string(),
        expected,
        got: got.kind(),
    }
}
