use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Operation cancelled")]
    Cancelled,
    #[error("Resolution failed: {0}")]
    Resolution(String),
    #[error("Schema '{0}' not found")]
    SchemaNotFound(String),
    #[error("Schema '{0}' already exists")]
    SchemaAlreadyExists(String),
    #[error("Table '{0}' not found")]
    TableNotFound(String),
    #[error("Table '{0}' already exists")]
    TableAlreadyExists(String),
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),
    #[error("Constraint '{0}' not found")]
    ConstraintNotFound(String),
    #[error("Constraint '{0}' already exists")]
    ConstraintAlreadyExists(String),
    #[error("Duplicate column reference '{0}'")]
    DuplicateColumnReference(String),
    #[error("UI task failed: {0}")]
    Ui(String),
    #[error("Snapshot checksum mismatch")]
    ChecksumMismatch,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Binary Serialization error: {0}")]
    BinarySerialization(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}
