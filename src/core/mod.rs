// Module declarations
pub mod error;
pub mod value;
pub mod data_type;
pub mod fields;
pub mod row;
pub mod column;
pub mod constraint_type;
pub mod constraint_column;
pub mod referrer;
pub mod constraint;
pub mod table;
pub mod schema;
pub mod datasource;
pub mod catalog;

// Re-exports for convenience
pub use error::MetadataError;
pub use value::Value;
pub use data_type::DataType;
pub use row::CatalogRow;
pub use column::TableColumn;
pub use constraint_type::ConstraintKind;
pub use constraint_column::ConstraintColumn;
pub use referrer::{AttributeInfo, AttributeRef, AttributeReferrer, EntityConstraint};
pub use constraint::TableConstraint;
pub use table::Table;
pub use schema::Schema;
pub use datasource::{Capabilities, DataSourceInfo, Engine, ServerVersion};
pub use catalog::Catalog;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::ProgressMonitor;

    /// Source constraint with scriptable reference enumeration
    struct StubConstraint {
        name: String,
        kind: ConstraintKind,
        description: Option<String>,
        check_clause: Option<String>,
        references: Option<Vec<AttributeRef>>,
        fail_fetch: bool,
    }

    impl StubConstraint {
        fn referrer(name: &str, kind: ConstraintKind, references: Vec<AttributeRef>) -> Self {
            Self {
                name: name.to_string(),
                kind,
                description: None,
                check_clause: None,
                references: Some(references),
                fail_fetch: false,
            }
        }

        fn plain(name: &str, kind: ConstraintKind) -> Self {
            Self {
                name: name.to_string(),
                kind,
                description: None,
                check_clause: None,
                references: None,
                fail_fetch: false,
            }
        }
    }

    impl EntityConstraint for StubConstraint {
        fn name(&self) -> &str {
            &self.name
        }

        fn description(&self) -> Option<&str> {
            self.description.as_deref()
        }

        fn kind(&self) -> ConstraintKind {
            self.kind
        }

        fn check_clause(&self) -> Option<&str> {
            self.check_clause.as_deref()
        }

        fn as_referrer(&self) -> Option<&dyn AttributeReferrer> {
            if self.references.is_some() {
                Some(self)
            } else {
                None
            }
        }
    }

    impl AttributeReferrer for StubConstraint {
        fn attribute_references(
            &self,
            monitor: &ProgressMonitor,
        ) -> Result<Vec<AttributeRef>, MetadataError> {
            monitor.check_cancelled()?;
            if self.fail_fetch {
                return Err(MetadataError::Resolution(
                    "source connection dropped".to_string(),
                ));
            }
            Ok(self.references.clone().unwrap_or_default())
        }
    }

    fn attr_ref(name: &str, position: usize) -> AttributeRef {
        AttributeRef {
            attribute: Some(AttributeInfo {
                name: name.to_string(),
                ordinal_position: position,
            }),
        }
    }

    fn users_table() -> Table {
        let mut table = Table::new("users".to_string(), "admin".to_string());
        table.columns = vec![
            TableColumn::new("id".to_string(), 1, DataType::Integer),
            TableColumn::new("tenant".to_string(), 2, DataType::Integer),
            TableColumn::new("email".to_string(), 3, DataType::Varchar { max_length: 255 }),
        ];
        table
    }

    #[test]
    fn test_copy_fidelity() {
        let monitor = ProgressMonitor::new();
        let table = users_table();
        let source = StubConstraint::referrer(
            "pk_users",
            ConstraintKind::PrimaryKey,
            vec![attr_ref("tenant", 1), attr_ref("id", 2)],
        );

        let copy = TableConstraint::copy_from(&monitor, &table, &source).unwrap();

        assert_eq!(copy.name, "pk_users");
        assert_eq!(copy.kind, ConstraintKind::PrimaryKey);
        assert!(!copy.persisted);
        let refs = copy.attribute_references();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].column_name, "tenant");
        assert_eq!(refs[0].ordinal_position, 1);
        assert_eq!(refs[1].column_name, "id");
        assert_eq!(refs[1].ordinal_position, 2);
    }

    #[test]
    fn test_copy_from_non_referrer_source_yields_no_columns() {
        let monitor = ProgressMonitor::new();
        let table = users_table();
        let source = StubConstraint::plain("chk_email", ConstraintKind::Check);

        let copy = TableConstraint::copy_from(&monitor, &table, &source).unwrap();
        assert!(copy.attribute_references().is_empty());
    }

    #[test]
    fn test_copy_cancellation_aborts_without_mutation() {
        let monitor = ProgressMonitor::new();
        monitor.cancel();
        let table = users_table();
        let source = StubConstraint::referrer(
            "pk_users",
            ConstraintKind::PrimaryKey,
            vec![attr_ref("id", 1)],
        );

        let result = TableConstraint::copy_from(&monitor, &table, &source);
        assert!(matches!(result, Err(MetadataError::Cancelled)));

        // Resolution into an existing target leaves its list untouched as well
        let mut target = TableConstraint::new(
            "pk_users".to_string(),
            ConstraintKind::PrimaryKey,
            false,
        );
        target.set_attribute_references(vec![ConstraintColumn::new("email".to_string(), 0)]);
        let result = target.resolve_references_from(&monitor, &table, &source);
        assert!(matches!(result, Err(MetadataError::Cancelled)));
        assert_eq!(target.attribute_references().len(), 1);
        assert_eq!(target.attribute_references()[0].column_name, "email");
    }

    #[test]
    fn test_copy_skips_reference_with_missing_attribute() {
        let monitor = ProgressMonitor::new();
        let table = users_table();
        let source = StubConstraint::referrer(
            "uq_tenant_email",
            ConstraintKind::Unique,
            vec![
                attr_ref("tenant", 1),
                AttributeRef { attribute: None },
                attr_ref("email", 3),
            ],
        );

        let copy = TableConstraint::copy_from(&monitor, &table, &source).unwrap();
        let refs = copy.attribute_references();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].column_name, "tenant");
        assert_eq!(refs[1].column_name, "email");
        assert_eq!(refs[1].ordinal_position, 3);
    }

    #[test]
    fn test_copy_propagates_source_fetch_failure() {
        let monitor = ProgressMonitor::new();
        let table = users_table();
        let mut source =
            StubConstraint::referrer("pk_users", ConstraintKind::PrimaryKey, vec![attr_ref("id", 1)]);
        source.fail_fetch = true;

        let result = TableConstraint::copy_from(&monitor, &table, &source);
        assert!(matches!(result, Err(MetadataError::Resolution(_))));
    }

    #[test]
    fn test_copy_unknown_column_is_a_consistency_error() {
        let monitor = ProgressMonitor::new();
        let table = users_table();
        let source = StubConstraint::referrer(
            "pk_users",
            ConstraintKind::PrimaryKey,
            vec![attr_ref("no_such_column", 1)],
        );

        let result = TableConstraint::copy_from(&monitor, &table, &source);
        assert!(matches!(result, Err(MetadataError::ColumnNotFound(_))));
    }

    #[test]
    fn test_copy_carries_check_clause() {
        let monitor = ProgressMonitor::new();
        let table = users_table();
        let mut source = StubConstraint::plain("chk_email", ConstraintKind::Check);
        source.check_clause = Some("email <> ''".to_string());
        source.description = Some("non-empty email".to_string());

        let copy = TableConstraint::copy_from(&monitor, &table, &source).unwrap();
        assert_eq!(copy.check_clause(), Some("email <> ''"));
        assert_eq!(copy.description.as_deref(), Some("non-empty email"));
    }

    #[test]
    fn test_column_lookup_is_case_sensitive() {
        let monitor = ProgressMonitor::new();
        let table = users_table();
        assert!(table.attribute(&monitor, "id").is_ok());
        assert!(matches!(
            table.attribute(&monitor, "ID"),
            Err(MetadataError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_table_rebuilds_constraints_in_order() {
        let monitor = ProgressMonitor::new();
        let mut table = users_table();
        let mut pk = TableConstraint::new(
            "pk_users".to_string(),
            ConstraintKind::PrimaryKey,
            true,
        );
        pk.set_attribute_references(vec![
            ConstraintColumn::new("tenant".to_string(), 1),
            ConstraintColumn::new("id".to_string(), 2),
        ]);
        table.add_constraint(pk).unwrap();

        let copy = table.duplicate(&monitor, "users_copy").unwrap();
        assert_eq!(copy.name, "users_copy");
        assert!(!copy.persisted);
        assert_eq!(copy.columns.len(), 3);
        assert!(copy.columns.iter().all(|c| !c.persisted));

        let pk_copy = copy.get_constraint("pk_users").unwrap();
        assert!(!pk_copy.persisted);
        let refs = pk_copy.attribute_references();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].column_name, "tenant");
        assert_eq!(refs[1].column_name, "id");
    }

    #[test]
    fn test_duplicate_constraint_name_rejected() {
        let mut table = users_table();
        table
            .add_constraint(TableConstraint::new(
                "pk_users".to_string(),
                ConstraintKind::PrimaryKey,
                true,
            ))
            .unwrap();
        let result = table.add_constraint(TableConstraint::new(
            "pk_users".to_string(),
            ConstraintKind::Unique,
            false,
        ));
        assert!(matches!(
            result,
            Err(MetadataError::ConstraintAlreadyExists(_))
        ));
    }

    #[test]
    fn test_schema_duplicate_table() {
        let monitor = ProgressMonitor::new();
        let mut schema = Schema::new("shop".to_string(), "admin".to_string());
        schema.create_table(users_table()).unwrap();

        schema.duplicate_table(&monitor, "users", "users_backup").unwrap();
        assert!(schema.get_table("users_backup").is_some());
        assert!(matches!(
            schema.duplicate_table(&monitor, "users", "users_backup"),
            Err(MetadataError::TableAlreadyExists(_))
        ));
        assert!(matches!(
            schema.duplicate_table(&monitor, "missing", "other"),
            Err(MetadataError::TableNotFound(_))
        ));
    }

    #[test]
    fn test_catalog_schema_lifecycle() {
        let ds = DataSourceInfo::new(Engine::MySql, ServerVersion::new(8, 0, 36));
        let mut catalog = Catalog::new(ds);
        catalog
            .create_schema(Schema::new("shop".to_string(), "admin".to_string()))
            .unwrap();
        assert!(catalog.get_schema("shop").is_some());
        assert!(matches!(
            catalog.create_schema(Schema::new("shop".to_string(), "admin".to_string())),
            Err(MetadataError::SchemaAlreadyExists(_))
        ));
        catalog.drop_schema("shop").unwrap();
        assert!(matches!(
            catalog.drop_schema("shop"),
            Err(MetadataError::SchemaNotFound(_))
        ));
    }

    #[test]
    fn test_default_value_parsing() {
        let v = Value::from_catalog_text(&DataType::Integer, "42").unwrap();
        assert_eq!(v.as_int(), Some(42));
        let v = Value::from_catalog_text(&DataType::Boolean, "1").unwrap();
        assert_eq!(v.as_bool(), Some(true));
        let v = Value::from_catalog_text(&DataType::Text, "'guest'").unwrap();
        assert_eq!(v.as_text(), Some("guest"));
        let v = Value::from_catalog_text(&DataType::Integer, "NULL").unwrap();
        assert_eq!(v, Value::Null);
        assert!(Value::from_catalog_text(&DataType::Integer, "abc").is_err());
    }
}
