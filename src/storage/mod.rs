use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use crate::core::catalog::Catalog;
use crate::core::error::MetadataError;

const SNAPSHOT_FILE: &str = "catalog.db";
const CHECKSUM_FILE: &str = "catalog.db.sha256";

/// Дисковый кэш снимков каталога.
///
/// Снимок хранится в binary формате рядом с контрольной суммой; при
/// загрузке сумма сверяется, чтобы не поднять поврежденный кэш.
pub struct CatalogCache {
    cache_dir: PathBuf,
}

impl CatalogCache {
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self, MetadataError> {
        let cache_dir = cache_dir.as_ref().to_path_buf();
        fs::create_dir_all(&cache_dir)?;
        Ok(Self { cache_dir })
    }

    /// Каталог кэша по умолчанию (~/.local/share/metagrust и аналоги)
    #[must_use]
    pub fn default_cache_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("metagrust")
    }

    /// Сохраняет snapshot каталога в binary формате
    pub fn save_snapshot(&self, catalog: &Catalog) -> Result<(), MetadataError> {
        let encoded = bincode::serialize(catalog)
            .map_err(|e| MetadataError::BinarySerialization(e.to_string()))?;
        let digest = Sha256::digest(&encoded);
        fs::write(self.cache_dir.join(SNAPSHOT_FILE), &encoded)?;
        fs::write(self.cache_dir.join(CHECKSUM_FILE), hex::encode(digest))?;
        Ok(())
    }

    /// Загружает snapshot каталога; None - кэш еще не создавался
    pub fn load_snapshot(&self) -> Result<Option<Catalog>, MetadataError> {
        let snapshot_path = self.cache_dir.join(SNAPSHOT_FILE);
        if !snapshot_path.exists() {
            return Ok(None);
        }
        let data = fs::read(&snapshot_path)?;

        let checksum_path = self.cache_dir.join(CHECKSUM_FILE);
        if checksum_path.exists() {
            let recorded = fs::read_to_string(&checksum_path)?;
            if recorded.trim() != hex::encode(Sha256::digest(&data)) {
                return Err(MetadataError::ChecksumMismatch);
            }
        }

        let catalog = bincode::deserialize(&data)
            .map_err(|e| MetadataError::BinarySerialization(e.to_string()))?;
        Ok(Some(catalog))
    }

    /// Экспортирует каталог в читаемый JSON
    pub fn export_json<P: AsRef<Path>>(
        catalog: &Catalog,
        path: P,
    ) -> Result<(), MetadataError> {
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(file, catalog)?;
        Ok(())
    }
}
