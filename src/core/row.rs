use serde::{Deserialize, Serialize};

/// Одна строка курсора каталожного запроса (аналог строки information_schema).
/// Доступ к полям по имени, отсутствующее поле - это None, а не ошибка.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRow {
    /// Пары (имя поля, значение); NULL в каталоге представлен как None
    pub fields: Vec<(String, Option<String>)>,
}

impl CatalogRow {
    #[must_use]
    pub fn new(fields: Vec<(String, Option<String>)>) -> Self {
        Self { fields }
    }

    /// Возвращает текст поля или None (поле отсутствует либо NULL).
    /// Никогда не падает - no-throw семантика курсора.
    #[must_use]
    pub fn safe_get_string(&self, field_name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field_name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Числовое поле; нечисловой текст трактуется как отсутствие значения
    #[must_use]
    pub fn safe_get_usize(&self, field_name: &str) -> Option<usize> {
        self.safe_get_string(field_name)
            .and_then(|s| s.trim().parse().ok())
    }

    /// Булево поле в каталожной нотации (YES/NO, 1/0, true/false)
    #[must_use]
    pub fn safe_get_bool(&self, field_name: &str) -> Option<bool> {
        match self.safe_get_string(field_name)?.to_ascii_lowercase().as_str() {
            "yes" | "y" | "1" | "t" | "true" => Some(true),
            "no" | "n" | "0" | "f" | "false" => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> CatalogRow {
        CatalogRow::new(vec![
            ("CONSTRAINT_NAME".to_string(), Some("pk_users".to_string())),
            ("CHECK_CLAUSE".to_string(), None),
            ("ORDINAL_POSITION".to_string(), Some("2".to_string())),
            ("IS_NULLABLE".to_string(), Some("NO".to_string())),
        ])
    }

    #[test]
    fn test_safe_get_string() {
        let r = row();
        assert_eq!(r.safe_get_string("CONSTRAINT_NAME"), Some("pk_users"));
        assert_eq!(r.safe_get_string("CHECK_CLAUSE"), None);
        assert_eq!(r.safe_get_string("NO_SUCH_FIELD"), None);
    }

    #[test]
    fn test_safe_get_usize() {
        let r = row();
        assert_eq!(r.safe_get_usize("ORDINAL_POSITION"), Some(2));
        assert_eq!(r.safe_get_usize("CONSTRAINT_NAME"), None);
    }

    #[test]
    fn test_safe_get_bool() {
        let r = row();
        assert_eq!(r.safe_get_bool("IS_NULLABLE"), Some(false));
        assert_eq!(r.safe_get_bool("CHECK_CLAUSE"), None);
    }
}
