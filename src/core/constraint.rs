use serde::{Deserialize, Serialize};
use super::constraint_column::ConstraintColumn;
use super::constraint_type::ConstraintKind;
use super::column::TableColumn;
use super::error::MetadataError;
use super::fields;
use super::referrer::{AttributeRef, AttributeReferrer, EntityConstraint};
use super::row::CatalogRow;
use super::table::Table;
use crate::parser::qualified_name::quote_ident;
use crate::runtime::ProgressMonitor;

/// Table-level constraint (primary key, unique, check, foreign key).
///
/// Owns an ordered list of column references. The list is only mutated
/// through the methods below; a rebuild replaces the whole list in one
/// assignment, so readers never observe a partially built state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConstraint {
    pub name: String,
    pub description: Option<String>,
    pub kind: ConstraintKind,
    /// false for constraints created in-memory and not yet committed as DDL
    pub persisted: bool,
    check_clause: Option<String>,
    columns: Vec<ConstraintColumn>,
}

impl TableConstraint {
    #[must_use]
    pub const fn new(name: String, kind: ConstraintKind, persisted: bool) -> Self {
        Self {
            name,
            description: None,
            kind,
            persisted,
            check_clause: None,
            columns: Vec::new(),
        }
    }

    /// Builds a constraint from one row of the constraint catalog cursor.
    /// Column references are filled by the loader's separate key-column pass.
    #[must_use]
    pub fn from_row(name: String, kind: ConstraintKind, persisted: bool, row: &CatalogRow) -> Self {
        let mut constraint = Self::new(name, kind, persisted);
        constraint.check_clause = row
            .safe_get_string(fields::COL_CHECK_CLAUSE)
            .map(ToString::to_string);
        constraint
    }

    /// Copy-constructs a constraint of `table` from a source constraint of
    /// any origin. Non-referrer sources yield an empty column list.
    pub fn copy_from(
        monitor: &ProgressMonitor,
        table: &Table,
        source: &dyn EntityConstraint,
    ) -> Result<Self, MetadataError> {
        let mut constraint = Self::new(source.name().to_string(), source.kind(), false);
        constraint.description = source.description().map(ToString::to_string);
        constraint.check_clause = source.check_clause().map(ToString::to_string);
        constraint.resolve_references_from(monitor, table, source)?;
        Ok(constraint)
    }

    /// Re-derives the column references from `source`, resolving each
    /// referenced attribute against `table` by exact name.
    ///
    /// All-or-nothing: on cancellation or lookup failure the current list is
    /// left untouched. A reference without an attribute is skipped.
    pub fn resolve_references_from(
        &mut self,
        monitor: &ProgressMonitor,
        table: &Table,
        source: &dyn EntityConstraint,
    ) -> Result<(), MetadataError> {
        let referrer = match source.as_referrer() {
            Some(r) => r,
            None => return Ok(()),
        };
        let references = referrer.attribute_references(monitor)?;
        monitor.check_cancelled()?;

        let mut columns = Vec::with_capacity(references.len());
        for reference in references {
            if let Some(attribute) = reference.attribute {
                let own_column = table.attribute(monitor, &attribute.name)?;
                columns.push(ConstraintColumn::new(
                    own_column.name.clone(),
                    attribute.ordinal_position,
                ));
            }
        }
        self.set_attribute_references(columns);
        Ok(())
    }

    /// Current column references in key order; empty when unpopulated
    #[must_use]
    pub fn attribute_references(&self) -> &[ConstraintColumn] {
        &self.columns
    }

    /// Appends a reference to `column`, assigning the next key position.
    /// Duplicate detection is the caller's responsibility.
    pub fn add_attribute_reference(&mut self, column: &TableColumn) {
        self.columns
            .push(ConstraintColumn::new(column.name.clone(), self.columns.len()));
    }

    /// Appends a prebuilt reference carrying an externally-supplied position
    /// (loader path, the catalog reports the ordinal itself)
    pub fn add_column(&mut self, column: ConstraintColumn) {
        self.columns.push(column);
    }

    /// Replaces the whole reference list in one assignment
    pub fn set_attribute_references(&mut self, columns: Vec<ConstraintColumn>) {
        self.columns = columns;
    }

    #[must_use]
    pub fn check_clause(&self) -> Option<&str> {
        self.check_clause.as_deref()
    }

    pub fn set_check_clause(&mut self, clause: Option<String>) {
        self.check_clause = clause;
    }

    #[must_use]
    pub fn fully_qualified_name(&self, schema_name: &str, table_name: &str) -> String {
        format!(
            "{}.{}.{}",
            quote_ident(schema_name),
            quote_ident(table_name),
            quote_ident(&self.name)
        )
    }
}

impl EntityConstraint for TableConstraint {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn kind(&self) -> ConstraintKind {
        self.kind
    }

    fn check_clause(&self) -> Option<&str> {
        self.check_clause.as_deref()
    }

    fn as_referrer(&self) -> Option<&dyn AttributeReferrer> {
        Some(self)
    }
}

impl AttributeReferrer for TableConstraint {
    fn attribute_references(
        &self,
        monitor: &ProgressMonitor,
    ) -> Result<Vec<AttributeRef>, MetadataError> {
        monitor.check_cancelled()?;
        Ok(self
            .columns
            .iter()
            .map(|column| AttributeRef {
                attribute: Some(super::referrer::AttributeInfo {
                    name: column.column_name.clone(),
                    ordinal_position: column.ordinal_position,
                }),
            })
            .collect())
    }
}
