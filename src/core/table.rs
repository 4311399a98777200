use serde::{Deserialize, Serialize};
use super::column::TableColumn;
use super::constraint::TableConstraint;
use super::error::MetadataError;
use crate::parser::qualified_name::quote_ident;
use crate::runtime::ProgressMonitor;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub owner: String,
    pub comment: Option<String>,
    /// false for tables created in-memory and not yet committed as DDL
    pub persisted: bool,
    /// Columns in catalog order (ordinal_position is 1-based)
    pub columns: Vec<TableColumn>,
    constraints: Vec<TableConstraint>,
}

impl Table {
    #[must_use]
    pub const fn new(name: String, owner: String) -> Self {
        Self {
            name,
            owner,
            comment: None,
            persisted: false,
            columns: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Resolves a column by exact name (case- and identity-sensitive).
    /// Fails with `ColumnNotFound`; a miss here during constraint resolution
    /// means the catalog is inconsistent.
    pub fn attribute(
        &self,
        monitor: &ProgressMonitor,
        name: &str,
    ) -> Result<&TableColumn, MetadataError> {
        monitor.check_cancelled()?;
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| MetadataError::ColumnNotFound(name.to_string()))
    }

    #[must_use]
    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn add_constraint(&mut self, constraint: TableConstraint) -> Result<(), MetadataError> {
        if self.constraints.iter().any(|c| c.name == constraint.name) {
            return Err(MetadataError::ConstraintAlreadyExists(constraint.name));
        }
        self.constraints.push(constraint);
        Ok(())
    }

    #[must_use]
    pub fn constraints(&self) -> &[TableConstraint] {
        &self.constraints
    }

    #[must_use]
    pub fn get_constraint(&self, name: &str) -> Option<&TableConstraint> {
        self.constraints.iter().find(|c| c.name == name)
    }

    pub fn get_constraint_mut(&mut self, name: &str) -> Option<&mut TableConstraint> {
        self.constraints.iter_mut().find(|c| c.name == name)
    }

    pub fn drop_constraint(&mut self, name: &str) -> Result<(), MetadataError> {
        let index = self
            .constraints
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| MetadataError::ConstraintNotFound(name.to_string()))?;
        self.constraints.remove(index);
        Ok(())
    }

    /// Deep copy under a new name: columns are cloned, constraints go through
    /// the copy-construction path so their references resolve against the
    /// duplicate's own columns. The duplicate is not persisted.
    pub fn duplicate(
        &self,
        monitor: &ProgressMonitor,
        new_name: &str,
    ) -> Result<Self, MetadataError> {
        let mut copy = Self::new(new_name.to_string(), self.owner.clone());
        copy.comment = self.comment.clone();
        copy.columns = self
            .columns
            .iter()
            .map(|column| {
                let mut column = column.clone();
                column.persisted = false;
                column
            })
            .collect();

        for source in &self.constraints {
            let constraint = TableConstraint::copy_from(monitor, &copy, source)?;
            copy.add_constraint(constraint)?;
        }
        Ok(copy)
    }

    #[must_use]
    pub fn fully_qualified_name(&self, schema_name: &str) -> String {
        format!("{}.{}", quote_ident(schema_name), quote_ident(&self.name))
    }
}
