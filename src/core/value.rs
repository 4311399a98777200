use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, NaiveDateTime, DateTime, Utc};
use uuid::Uuid;
use rust_decimal::Decimal;
use std::str::FromStr;
use super::data_type::DataType;
use super::error::MetadataError;

/// Typed column default value as reported by the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Null,
    // Numeric types
    SmallInt(i16),
    Integer(i64),
    Real(f64),
    Numeric(Decimal),
    // String types
    Text(String),
    // Boolean
    Boolean(bool),
    // Date/Time types
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<Utc>),
    // Special types
    Uuid(Uuid),
    Json(String),
    Bytea(Vec<u8>),
    Enum(String, String), // (enum_name, value)
}

impl Value {
    /// Parses a default value from the raw text the catalog reports.
    /// Quoted string literals keep catalog form ('abc'), bytea comes as \xDEADBEEF.
    pub fn from_catalog_text(data_type: &DataType, text: &str) -> Result<Self, MetadataError> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("null") {
            return Ok(Self::Null);
        }
        match data_type {
            DataType::SmallInt => trimmed
                .parse::<i16>()
                .map(Self::SmallInt)
                .map_err(|e| MetadataError::ParseError(format!("smallint default '{trimmed}': {e}"))),
            DataType::Integer => trimmed
                .parse::<i64>()
                .map(Self::Integer)
                .map_err(|e| MetadataError::ParseError(format!("integer default '{trimmed}': {e}"))),
            DataType::Real => trimmed
                .parse::<f64>()
                .map(Self::Real)
                .map_err(|e| MetadataError::ParseError(format!("real default '{trimmed}': {e}"))),
            DataType::Numeric { .. } => Decimal::from_str(trimmed)
                .map(Self::Numeric)
                .map_err(|e| MetadataError::ParseError(format!("numeric default '{trimmed}': {e}"))),
            DataType::Text | DataType::Varchar { .. } | DataType::Char { .. } => {
                Ok(Self::Text(unquote(trimmed).to_string()))
            }
            DataType::Boolean => match trimmed.to_ascii_lowercase().as_str() {
                "1" | "t" | "true" | "yes" | "on" => Ok(Self::Boolean(true)),
                "0" | "f" | "false" | "no" | "off" => Ok(Self::Boolean(false)),
                other => Err(MetadataError::ParseError(format!("boolean default '{other}'"))),
            },
            DataType::Date => NaiveDate::parse_from_str(unquote(trimmed), "%Y-%m-%d")
                .map(Self::Date)
                .map_err(|e| MetadataError::ParseError(format!("date default '{trimmed}': {e}"))),
            DataType::Timestamp => {
                NaiveDateTime::parse_from_str(unquote(trimmed), "%Y-%m-%d %H:%M:%S")
                    .map(Self::Timestamp)
                    .map_err(|e| {
                        MetadataError::ParseError(format!("timestamp default '{trimmed}': {e}"))
                    })
            }
            DataType::TimestampTz => DateTime::parse_from_rfc3339(unquote(trimmed))
                .map(|dt| Self::TimestampTz(dt.with_timezone(&Utc)))
                .map_err(|e| {
                    MetadataError::ParseError(format!("timestamptz default '{trimmed}': {e}"))
                }),
            DataType::Uuid => Uuid::parse_str(unquote(trimmed))
                .map(Self::Uuid)
                .map_err(|e| MetadataError::ParseError(format!("uuid default '{trimmed}': {e}"))),
            DataType::Json => Ok(Self::Json(unquote(trimmed).to_string())),
            DataType::Bytea => {
                let body = unquote(trimmed);
                let body = body.strip_prefix("\\x").unwrap_or(body);
                hex::decode(body)
                    .map(Self::Bytea)
                    .map_err(|e| MetadataError::ParseError(format!("bytea default '{trimmed}': {e}")))
            }
            DataType::Enum { name, values } => {
                let v = unquote(trimmed);
                if values.iter().any(|allowed| allowed == v) {
                    Ok(Self::Enum(name.clone(), v.to_string()))
                } else {
                    Err(MetadataError::ParseError(format!(
                        "'{v}' is not a value of enum '{name}'"
                    )))
                }
            }
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// Strips one pair of surrounding single quotes, if present
fn unquote(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('\'') && s.ends_with('\'') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::SmallInt(i) => write!(f, "{i}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Numeric(d) => write!(f, "{d}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Timestamp(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S")),
            Self::TimestampTz(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S %Z")),
            Self::Uuid(u) => write!(f, "{u}"),
            Self::Json(j) => write!(f, "{j}"),
            Self::Bytea(b) => write!(f, "\\x{}", hex::encode(b)),
            Self::Enum(_, v) => write!(f, "{v}"),
        }
    }
}
