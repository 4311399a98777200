use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DataType {
    // Numeric types
    SmallInt,
    Integer,
    Real,
    Numeric { precision: u8, scale: u8 }, // NUMERIC(p, s)
    // String types
    Text,
    Varchar { max_length: usize },  // VARCHAR(n)
    Char { length: usize },         // CHAR(n)
    // Boolean
    Boolean,
    // Date/Time types
    Date,
    Timestamp,
    TimestampTz,
    // Special types
    Uuid,
    Json,
    Bytea,
    Enum { name: String, values: Vec<String> },
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SmallInt => write!(f, "smallint"),
            Self::Integer => write!(f, "integer"),
            Self::Real => write!(f, "real"),
            Self::Numeric { precision, scale } => write!(f, "numeric({precision},{scale})"),
            Self::Text => write!(f, "text"),
            Self::Varchar { max_length } => write!(f, "varchar({max_length})"),
            Self::Char { length } => write!(f, "char({length})"),
            Self::Boolean => write!(f, "boolean"),
            Self::Date => write!(f, "date"),
            Self::Timestamp => write!(f, "timestamp"),
            Self::TimestampTz => write!(f, "timestamptz"),
            Self::Uuid => write!(f, "uuid"),
            Self::Json => write!(f, "json"),
            Self::Bytea => write!(f, "bytea"),
            Self::Enum { name, .. } => write!(f, "{name}"),
        }
    }
}
