use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use super::datasource::DataSourceInfo;
use super::error::MetadataError;
use super::schema::Schema;

/// Корневой объект каталога - все схемы одного источника данных.
///
/// Живет до инвалидации кэша: перезагрузка каталога создает новый Catalog
/// с новым snapshot_id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub datasource: DataSourceInfo,
    /// Все схемы: name -> Schema
    pub schemas: HashMap<String, Schema>,
    /// Идентификатор снимка каталога
    pub snapshot_id: Uuid,
    /// Момент загрузки каталога из источника
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    #[must_use]
    pub fn new(datasource: DataSourceInfo) -> Self {
        Self {
            datasource,
            schemas: HashMap::new(),
            snapshot_id: Uuid::new_v4(),
            loaded_at: Utc::now(),
        }
    }

    /// Создает схему
    pub fn create_schema(&mut self, schema: Schema) -> Result<(), MetadataError> {
        if self.schemas.contains_key(&schema.name) {
            return Err(MetadataError::SchemaAlreadyExists(schema.name));
        }
        self.schemas.insert(schema.name.clone(), schema);
        Ok(())
    }

    /// Получает схему
    #[must_use]
    pub fn get_schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Получает мутабельную схему
    pub fn get_schema_mut(&mut self, name: &str) -> Option<&mut Schema> {
        self.schemas.get_mut(name)
    }

    /// Удаляет схему
    pub fn drop_schema(&mut self, name: &str) -> Result<(), MetadataError> {
        self.schemas
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| MetadataError::SchemaNotFound(name.to_string()))
    }
}
