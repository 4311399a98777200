use super::constraint_type::ConstraintKind;
use super::error::MetadataError;
use crate::runtime::ProgressMonitor;

/// One enumerated reference of a source entity to a column attribute.
/// `attribute` can be absent when the source carries malformed catalog data.
#[derive(Debug, Clone)]
pub struct AttributeRef {
    pub attribute: Option<AttributeInfo>,
}

/// Name and key position of a referenced attribute
#[derive(Debug, Clone)]
pub struct AttributeInfo {
    pub name: String,
    pub ordinal_position: usize,
}

/// A table-level constraint of any origin, usable as a copy-construction source
pub trait EntityConstraint {
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn kind(&self) -> ConstraintKind;
    fn check_clause(&self) -> Option<&str> {
        None
    }
    /// Capability test: Some when the constraint can enumerate its column
    /// references, None otherwise (e.g. a bare check constraint)
    fn as_referrer(&self) -> Option<&dyn AttributeReferrer> {
        None
    }
}

pub trait AttributeReferrer {
    /// Ordered column references of this entity.
    /// May block on catalog I/O and must honor the monitor's cancellation.
    fn attribute_references(
        &self,
        monitor: &ProgressMonitor,
    ) -> Result<Vec<AttributeRef>, MetadataError>;
}
