use crate::core::constraint::TableConstraint;
use crate::core::datasource::DataSourceInfo;

/// Descriptor of one presentable property of an entity.
///
/// The presentation layer consults `is_visible` before showing or editing
/// the property; the validator is a plain function registered here at
/// schema-definition time.
pub struct PropertyDescriptor<T> {
    pub id: &'static str,
    pub display_name: &'static str,
    pub viewable: bool,
    pub editable: bool,
    pub order: u32,
    /// Capability validator; None means always visible
    pub visible_if: Option<fn(&T, &DataSourceInfo) -> bool>,
}

impl<T> PropertyDescriptor<T> {
    /// Synchronous and non-blocking, safe to call from the UI thread
    #[must_use]
    pub fn is_visible(&self, object: &T, datasource: &DataSourceInfo) -> bool {
        match self.visible_if {
            Some(validator) => validator(object, datasource),
            None => true,
        }
    }
}

/// Property sheet of a table constraint
#[must_use]
pub fn constraint_properties() -> Vec<PropertyDescriptor<TableConstraint>> {
    vec![
        PropertyDescriptor {
            id: "name",
            display_name: "Name",
            viewable: true,
            editable: true,
            order: 1,
            visible_if: None,
        },
        PropertyDescriptor {
            id: "kind",
            display_name: "Type",
            viewable: true,
            editable: false,
            order: 2,
            visible_if: None,
        },
        PropertyDescriptor {
            id: "description",
            display_name: "Comment",
            viewable: true,
            editable: true,
            order: 3,
            visible_if: None,
        },
        PropertyDescriptor {
            id: "check_clause",
            display_name: "Check clause",
            viewable: true,
            editable: true,
            order: 4,
            visible_if: Some(check_clause_visible),
        },
    ]
}

/// Visibility is a connection capability, independent of the clause value
fn check_clause_visible(_constraint: &TableConstraint, datasource: &DataSourceInfo) -> bool {
    datasource.supports_check_constraints()
}
