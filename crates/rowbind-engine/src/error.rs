use thiserror::Error;

use rowbind_convert::ConvertError;
use rowbind_model::{AssignError, InstantiationError};

/// Errors fatal to a binding call, as opposed to per-row failures.
#[derive(Debug, Error)]
pub enum BindError {
    /// The caller supplied an empty record-type set. Reported before any
    /// row is touched.
    #[error("no record types supplied")]
    NoRecordTypes,
}

/// Why one row/type binding attempt failed.
///
/// Captured at the single-type binding boundary, logged with the warning,
/// and recorded on the row as a generic failure outcome; never propagated
/// to orchestrator callers.
#[derive(Debug, Error)]
pub enum FailureCause {
    #[error(transparent)]
    Instantiation(#[from] InstantiationError),
    #[error(transparent)]
    Conversion(#[from] ConvertError),
    #[error(transparent)]
    Assignment(#[from] AssignError),
}
