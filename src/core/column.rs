use serde::{Deserialize, Serialize};
use super::data_type::DataType;
use super::value::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableColumn {
    pub name: String,
    /// 1-based position within the owning table, as the catalog reports it
    pub ordinal_position: usize,
    pub data_type: DataType,
    pub nullable: bool,
    pub auto_increment: bool,
    pub default_value: Option<Value>,
    pub comment: Option<String>,
    /// false for columns created in-memory and not yet committed as DDL
    pub persisted: bool,
}

impl TableColumn {
    #[must_use]
    pub fn new(name: String, ordinal_position: usize, data_type: DataType) -> Self {
        Self {
            name,
            ordinal_position,
            data_type,
            nullable: true,
            auto_increment: false,
            default_value: None,
            comment: None,
            persisted: false,
        }
    }
}
