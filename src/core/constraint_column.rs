use serde::{Deserialize, Serialize};

/// Pairs a constraint with one referenced table column.
/// The column is referenced by name (non-owning), the owning table resolves it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConstraintColumn {
    pub column_name: String,
    /// Position within the constraint key, order is semantically meaningful
    pub ordinal_position: usize,
}

impl ConstraintColumn {
    #[must_use]
    pub fn new(column_name: String, ordinal_position: usize) -> Self {
        Self {
            column_name,
            ordinal_position,
        }
    }
}
