use serde::{Deserialize, Serialize};
use std::str::FromStr;
use super::error::MetadataError;

/// Движок базы данных, чей каталог отражается в памяти
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Engine {
    MySql,
    MariaDb,
    PostgreSql,
    Generic,
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MySql => write!(f, "mysql"),
            Self::MariaDb => write!(f, "mariadb"),
            Self::PostgreSql => write!(f, "postgresql"),
            Self::Generic => write!(f, "generic"),
        }
    }
}

impl FromStr for Engine {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Self::MySql),
            "mariadb" => Ok(Self::MariaDb),
            "postgresql" | "postgres" => Ok(Self::PostgreSql),
            "generic" => Ok(Self::Generic),
            other => Err(MetadataError::ParseError(format!("unknown engine '{other}'"))),
        }
    }
}

/// Версия сервера в виде major.minor.patch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ServerVersion {
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    #[must_use]
    pub const fn at_least(self, major: u32, minor: u32, patch: u32) -> bool {
        if self.major != major {
            return self.major > major;
        }
        if self.minor != minor {
            return self.minor > minor;
        }
        self.patch >= patch
    }
}

impl FromStr for ServerVersion {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(3, '.');
        let mut next = |name: &str| -> Result<u32, MetadataError> {
            match parts.next() {
                None | Some("") => Ok(0),
                Some(p) => p
                    .parse()
                    .map_err(|e| MetadataError::ParseError(format!("{name} in version '{s}': {e}"))),
            }
        };
        let major = next("major")?;
        let minor = next("minor")?;
        let patch = next("patch")?;
        Ok(Self::new(major, minor, patch))
    }
}

impl std::fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Флаги возможностей подключения. Вычисляются один раз при создании
/// источника и дальше читаются синхронно, без запросов к серверу.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Capabilities {
    pub supports_check_constraints: bool,
    pub supports_column_comments: bool,
    pub supports_schema_owners: bool,
}

impl Capabilities {
    /// CHECK-ограничения: MySQL с 8.0.16, MariaDB с 10.2.1
    #[must_use]
    pub fn derive(engine: Engine, version: ServerVersion) -> Self {
        let supports_check_constraints = match engine {
            Engine::MySql => version.at_least(8, 0, 16),
            Engine::MariaDb => version.at_least(10, 2, 1),
            Engine::PostgreSql => true,
            Engine::Generic => false,
        };
        Self {
            supports_check_constraints,
            supports_column_comments: !matches!(engine, Engine::Generic),
            supports_schema_owners: matches!(engine, Engine::PostgreSql),
        }
    }
}

/// Описание источника данных: движок, версия и кэшированные возможности
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourceInfo {
    pub engine: Engine,
    pub version: ServerVersion,
    pub capabilities: Capabilities,
}

impl DataSourceInfo {
    #[must_use]
    pub fn new(engine: Engine, version: ServerVersion) -> Self {
        Self {
            engine,
            version,
            capabilities: Capabilities::derive(engine, version),
        }
    }

    /// Синхронный кэшированный флаг, безопасен для вызова из UI-потока
    #[must_use]
    pub const fn supports_check_constraints(&self) -> bool {
        self.capabilities.supports_check_constraints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v: ServerVersion = "8.0.16".parse().unwrap();
        assert_eq!(v, ServerVersion::new(8, 0, 16));
        let v: ServerVersion = "10.2".parse().unwrap();
        assert_eq!(v, ServerVersion::new(10, 2, 0));
        assert!("8.x.1".parse::<ServerVersion>().is_err());
    }

    #[test]
    fn test_version_at_least() {
        let v = ServerVersion::new(8, 0, 16);
        assert!(v.at_least(8, 0, 16));
        assert!(v.at_least(8, 0, 15));
        assert!(v.at_least(5, 7, 0));
        assert!(!v.at_least(8, 0, 17));
        assert!(!v.at_least(8, 1, 0));
    }

    #[test]
    fn test_check_constraint_capability_by_engine() {
        let old_mysql = DataSourceInfo::new(Engine::MySql, ServerVersion::new(5, 7, 44));
        assert!(!old_mysql.supports_check_constraints());

        let mysql = DataSourceInfo::new(Engine::MySql, ServerVersion::new(8, 0, 16));
        assert!(mysql.supports_check_constraints());

        let mariadb = DataSourceInfo::new(Engine::MariaDb, ServerVersion::new(10, 2, 1));
        assert!(mariadb.supports_check_constraints());

        let postgres = DataSourceInfo::new(Engine::PostgreSql, ServerVersion::new(12, 0, 0));
        assert!(postgres.supports_check_constraints());
    }
}
