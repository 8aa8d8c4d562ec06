//! Rows and binding outcomes.
//!
//! A [`Row`] carries one unit of tabular input (column title → raw cell),
//! its 1-based position in the source, and the mutable results of binding
//! attempts: an [`Outcome`] and the records bound so far, keyed by record
//! type. Rows are independent of one another; nothing on a row references
//! another row's state.

use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::cell::CellValue;

/// Status of the most recent binding attempt for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BindStatus {
    Success,
    Failure,
}

/// Result of a binding attempt: status and message are always set together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub status: BindStatus,
    pub message: Option<String>,
}

impl Outcome {
    pub fn success() -> Self {
        Self {
            status: BindStatus::Success,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: BindStatus::Failure,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == BindStatus::Success
    }
}

/// One unit of tabular input plus its binding state.
///
/// Records are stored `Send` so whole rows can move across worker threads
/// when a caller shards a batch.
pub struct Row {
    index: u32,
    cells: BTreeMap<String, CellValue>,
    outcome: Option<Outcome>,
    records: HashMap<TypeId, Box<dyn Any + Send>>,
}

impl Row {
    /// Create a row from its raw column mapping and 1-based source index.
    pub fn new(cells: BTreeMap<String, CellValue>, index: u32) -> Self {
        Self {
            index,
            cells,
            outcome: None,
            records: HashMap::new(),
        }
    }

    /// 1-based position of this row in the source.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Raw value for a column title; absent columns read as [`CellValue::Empty`].
    pub fn cell(&self, title: &str) -> &CellValue {
        self.cells.get(title).unwrap_or(&CellValue::Empty)
    }

    /// The full raw mapping, for converters that consult sibling columns.
    pub fn cells(&self) -> &BTreeMap<String, CellValue> {
        &self.cells
    }

    /// Outcome of the most recent binding attempt, if any.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Record the outcome of a binding attempt, replacing any earlier one.
    pub fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }

    /// Attach a bound record under its type identity, replacing any record
    /// previously bound for that type.
    pub fn attach_record(&mut self, type_id: TypeId, record: Box<dyn Any + Send>) {
        self.records.insert(type_id, record);
    }

    /// Borrow the record bound for `T`, if a binding attempt attached one.
    pub fn record<T: 'static>(&self) -> Option<&T> {
        self.records
            .get(&TypeId::of::<T>())
            .and_then(|record| record.downcast_ref::<T>())
    }

    /// Take ownership of the record bound for `T`.
    pub fn take_record<T: 'static>(&mut self) -> Option<T> {
        self.records
            .remove(&TypeId::of::<T>())
            .and_then(|record| record.downcast::<T>().ok())
            .map(|record| *record)
    }

    /// True once any record has been attached for the given type identity.
    pub fn has_record(&self, type_id: TypeId) -> bool {
        self.records.contains_key(&type_id)
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("index", &self.index)
            .field("cells", &self.cells)
            .field("outcome", &self.outcome)
            .field("records", &self.records.len())
            .finish()
    }
}
