use serde::{Deserialize, Serialize};

/// Kind of a table-level constraint as reported by the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    PrimaryKey,
    Unique,
    Check,
    ForeignKey,
}

impl ConstraintKind {
    /// Parses the CONSTRAINT_TYPE text of information_schema
    #[must_use]
    pub fn from_catalog_text(text: &str) -> Option<Self> {
        match text.trim().to_ascii_uppercase().as_str() {
            "PRIMARY KEY" => Some(Self::PrimaryKey),
            "UNIQUE" => Some(Self::Unique),
            "CHECK" => Some(Self::Check),
            "FOREIGN KEY" => Some(Self::ForeignKey),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_check(self) -> bool {
        matches!(self, Self::Check)
    }
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PrimaryKey => write!(f, "PRIMARY KEY"),
            Self::Unique => write!(f, "UNIQUE"),
            Self::Check => write!(f, "CHECK"),
            Self::ForeignKey => write!(f, "FOREIGN KEY"),
        }
    }
}
