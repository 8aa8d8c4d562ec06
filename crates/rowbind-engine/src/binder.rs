//! The binder and batch orchestrator.
//!
//! [`RowBinder`] populates record instances from rows, one (row, type) pair
//! at a time, and aggregates per-row results over a batch. Per-field errors
//! are caught at the single-type boundary: they become a warning log entry
//! carrying the cause plus a generic failure outcome on the row, and never
//! reach the caller as `Err`. Only an empty record-type set is fatal to a
//! call.
//!
//! Binding is synchronous and touches no state outside the row being bound;
//! rows are mutually independent, so callers may shard a batch across
//! threads and re-sort by row index afterwards if display order matters.

use std::any::Any;
use tracing::warn;

use rowbind_convert::{ScalarConverter, ValueConverter};
use rowbind_model::{Outcome, RecordType, Row};

use crate::error::{BindError, FailureCause};
use crate::resolver::{ColumnResolver, FieldNameResolver};

/// Fixed outcome message recorded for every row-level binding failure.
/// The underlying cause goes to the log, not to the outcome.
pub const BINDING_ERROR: &str = "binding error";

/// Binds rows to record types using injected resolution and conversion
/// collaborators.
pub struct RowBinder {
    resolver: Box<dyn ColumnResolver>,
    converter: Box<dyn ValueConverter>,
}

impl RowBinder {
    /// Binder with the default collaborators: field-name column resolution
    /// and scalar conversion.
    pub fn new() -> Self {
        Self {
            resolver: Box::new(FieldNameResolver),
            converter: Box::new(ScalarConverter),
        }
    }

    /// Replace the column resolution policy.
    pub fn with_resolver(mut self, resolver: impl ColumnResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Replace the value conversion policy.
    pub fn with_converter(mut self, converter: impl ValueConverter + 'static) -> Self {
        self.converter = Box::new(converter);
        self
    }

    /// Bind every row against every record type.
    ///
    /// Full-batch attempt: a failing row never stops later rows, and each
    /// row/type pair is attempted exactly once. Returns true iff every
    /// row's result was true.
    pub fn bind_rows(&self, rows: &mut [Row], types: &[RecordType]) -> Result<bool, BindError> {
        if types.is_empty() {
            return Err(BindError::NoRecordTypes);
        }
        let mut all_success = true;
        for row in rows.iter_mut() {
            if !self.bind_types(row, types) {
                all_success = false;
            }
        }
        Ok(all_success)
    }

    /// Bind one row against every record type.
    pub fn bind_row(&self, row: &mut Row, types: &[RecordType]) -> Result<bool, BindError> {
        if types.is_empty() {
            return Err(BindError::NoRecordTypes);
        }
        Ok(self.bind_types(row, types))
    }

    /// Bind one row against one record type.
    ///
    /// Sets the row's outcome and attaches the record (replacing any prior
    /// record and outcome for a re-invocation). On failure the record is
    /// still attached when instantiation succeeded, populated up to the
    /// failing field; such a record must be treated as unusable.
    pub fn bind_record(&self, row: &mut Row, record_type: &RecordType) -> bool {
        match self.try_bind(row, record_type) {
            Ok(()) => {
                row.set_outcome(Outcome::success());
                true
            }
            Err(cause) => {
                warn!(
                    row = row.index(),
                    record = record_type.name(),
                    error = %cause,
                    "record binding failed"
                );
                row.set_outcome(Outcome::failure(BINDING_ERROR));
                false
            }
        }
    }

    /// Sequential per-type binding. The row's outcome and the returned
    /// boolean reflect the last type processed; earlier types' results
    /// survive only in the log.
    fn bind_types(&self, row: &mut Row, types: &[RecordType]) -> bool {
        let mut success = true;
        for record_type in types {
            success = self.bind_record(row, record_type);
        }
        success
    }

    fn try_bind(&self, row: &mut Row, record_type: &RecordType) -> Result<(), FailureCause> {
        let mut record = record_type.instantiate()?;
        let populated = self.populate(row, record_type, record.as_mut());
        // Attached even when a field failed partway: downstream consumers
        // always get a record reference once instantiation has succeeded.
        row.attach_record(record_type.type_id(), record);
        populated
    }

    fn populate(
        &self,
        row: &Row,
        record_type: &RecordType,
        record: &mut dyn Any,
    ) -> Result<(), FailureCause> {
        for field in record_type.fields() {
            if !field.spec.bindable {
                continue;
            }
            let title = self.resolver.column_title(&field.spec);
            let raw = row.cell(&title);
            let value = self.converter.convert(raw, &field.spec, row.cells())?;
            field.assign(record, value)?;
        }
        Ok(())
    }
}

impl Default for RowBinder {
    fn default() -> Self {
        Self::new()
    }
}
