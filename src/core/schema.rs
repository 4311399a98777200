use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use super::error::MetadataError;
use super::table::Table;
use crate::runtime::ProgressMonitor;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    pub name: String,
    pub owner: String,
    pub tables: HashMap<String, Table>,
}

impl Schema {
    #[must_use]
    pub fn new(name: String, owner: String) -> Self {
        Self {
            name,
            owner,
            tables: HashMap::new(),
        }
    }

    pub fn create_table(&mut self, table: Table) -> Result<(), MetadataError> {
        if self.tables.contains_key(&table.name) {
            return Err(MetadataError::TableAlreadyExists(table.name));
        }
        self.tables.insert(table.name.clone(), table);
        Ok(())
    }

    #[must_use]
    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn get_table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.get_mut(name)
    }

    pub fn drop_table(&mut self, name: &str) -> Result<(), MetadataError> {
        self.tables
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| MetadataError::TableNotFound(name.to_string()))
    }

    /// Duplicate-table operation: deep copy with constraints re-resolved
    /// against the copy, registered under `new_name`
    pub fn duplicate_table(
        &mut self,
        monitor: &ProgressMonitor,
        name: &str,
        new_name: &str,
    ) -> Result<(), MetadataError> {
        if self.tables.contains_key(new_name) {
            return Err(MetadataError::TableAlreadyExists(new_name.to_string()));
        }
        let source = self
            .tables
            .get(name)
            .ok_or_else(|| MetadataError::TableNotFound(name.to_string()))?;
        let copy = source.duplicate(monitor, new_name)?;
        self.tables.insert(new_name.to_string(), copy);
        Ok(())
    }
}
