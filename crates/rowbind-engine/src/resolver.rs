//! Field-to-column resolution seam.

use rowbind_model::FieldSpec;

/// Maps a field's identity to the column title it reads from.
///
/// Resolution policy is a collaborator concern: naming-convention lookups,
/// localized headers, or alias tables all live behind this trait.
pub trait ColumnResolver: Send + Sync {
    fn column_title(&self, field: &FieldSpec) -> String;
}

/// Default policy: a column title pinned at registration wins, otherwise the
/// field name is used verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldNameResolver;

impl ColumnResolver for FieldNameResolver {
    fn column_title(&self, field: &FieldSpec) -> String {
        field
            .column
            .clone()
            .unwrap_or_else(|| field.name.clone())
    }
}
