use std::collections::VecDeque;
use crate::core::column::TableColumn;
use crate::core::constraint::TableConstraint;
use crate::core::constraint_column::ConstraintColumn;
use crate::core::constraint_type::ConstraintKind;
use crate::core::error::MetadataError;
use crate::core::fields;
use crate::core::row::CatalogRow;
use crate::core::table::Table;
use crate::core::value::Value;
use crate::parser::type_name::parse_type_name;
use crate::runtime::ProgressMonitor;

/// Cursor over rows of one catalog query. Implementations may block on
/// I/O and must honor the monitor's cancellation.
pub trait RowSource {
    fn next_row(&mut self, monitor: &ProgressMonitor)
        -> Result<Option<CatalogRow>, MetadataError>;
}

/// In-memory cursor over prefetched rows
pub struct VecRowSource {
    rows: VecDeque<CatalogRow>,
}

impl VecRowSource {
    #[must_use]
    pub fn new(rows: Vec<CatalogRow>) -> Self {
        Self {
            rows: rows.into(),
        }
    }
}

impl RowSource for VecRowSource {
    fn next_row(
        &mut self,
        monitor: &ProgressMonitor,
    ) -> Result<Option<CatalogRow>, MetadataError> {
        monitor.check_cancelled()?;
        Ok(self.rows.pop_front())
    }
}

/// Populates a table's columns from a column-catalog cursor.
/// Returns the number of columns loaded.
pub fn load_columns(
    monitor: &ProgressMonitor,
    table: &mut Table,
    source: &mut dyn RowSource,
) -> Result<usize, MetadataError> {
    monitor.begin_task(&format!("Load columns of '{}'", table.name));
    let mut loaded = 0;
    while let Some(row) = source.next_row(monitor)? {
        let name = require_field(&row, fields::COL_COLUMN_NAME)?;
        let ordinal = row
            .safe_get_usize(fields::COL_ORDINAL_POSITION)
            .unwrap_or(table.columns.len() + 1);
        let type_text = row
            .safe_get_string(fields::COL_COLUMN_TYPE)
            .unwrap_or("text");
        let mut column = TableColumn::new(name.to_string(), ordinal, parse_type_name(type_text)?);
        column.nullable = row.safe_get_bool(fields::COL_IS_NULLABLE).unwrap_or(true);
        column.auto_increment = row
            .safe_get_string(fields::COL_EXTRA)
            .is_some_and(|extra| extra.contains("auto_increment"));
        if let Some(text) = row.safe_get_string(fields::COL_COLUMN_DEFAULT) {
            column.default_value = Some(Value::from_catalog_text(&column.data_type, text)?);
        }
        column.comment = row
            .safe_get_string(fields::COL_COLUMN_COMMENT)
            .map(ToString::to_string);
        column.persisted = true;
        table.columns.push(column);
        loaded += 1;
    }
    Ok(loaded)
}

/// Populates a table's constraints from a constraint-catalog cursor.
/// Key columns come separately, see `load_key_columns`.
pub fn load_constraints(
    monitor: &ProgressMonitor,
    table: &mut Table,
    source: &mut dyn RowSource,
) -> Result<usize, MetadataError> {
    monitor.begin_task(&format!("Load constraints of '{}'", table.name));
    let mut loaded = 0;
    while let Some(row) = source.next_row(monitor)? {
        let name = require_field(&row, fields::COL_CONSTRAINT_NAME)?;
        let kind_text = require_field(&row, fields::COL_CONSTRAINT_TYPE)?;
        let kind = ConstraintKind::from_catalog_text(kind_text).ok_or_else(|| {
            MetadataError::ParseError(format!("unknown constraint type '{kind_text}'"))
        })?;
        let constraint = TableConstraint::from_row(name.to_string(), kind, true, &row);
        table.add_constraint(constraint)?;
        loaded += 1;
    }
    Ok(loaded)
}

/// Attaches key columns to already loaded constraints. The catalog supplies
/// the ordinal positions; rows arrive in key order per constraint.
pub fn load_key_columns(
    monitor: &ProgressMonitor,
    table: &mut Table,
    source: &mut dyn RowSource,
) -> Result<usize, MetadataError> {
    monitor.begin_task(&format!("Load key columns of '{}'", table.name));
    let mut loaded = 0;
    while let Some(row) = source.next_row(monitor)? {
        let constraint_name = require_field(&row, fields::COL_CONSTRAINT_NAME)?.to_string();
        let column_name = require_field(&row, fields::COL_COLUMN_NAME)?.to_string();
        let ordinal = row
            .safe_get_usize(fields::COL_ORDINAL_POSITION)
            .unwrap_or(loaded + 1);

        // A key column naming a column the table does not have means the
        // catalog is inconsistent
        table.attribute(monitor, &column_name)?;
        let constraint = table
            .get_constraint_mut(&constraint_name)
            .ok_or(MetadataError::ConstraintNotFound(constraint_name))?;
        constraint.add_column(ConstraintColumn::new(column_name, ordinal));
        loaded += 1;
    }
    Ok(loaded)
}

fn require_field<'a>(row: &'a CatalogRow, field: &str) -> Result<&'a str, MetadataError> {
    row.safe_get_string(field)
        .ok_or_else(|| MetadataError::ParseError(format!("catalog row without {field}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data_type::DataType;

    fn field(name: &str, value: &str) -> (String, Option<String>) {
        (name.to_string(), Some(value.to_string()))
    }

    fn column_rows() -> Vec<CatalogRow> {
        vec![
            CatalogRow::new(vec![
                field(fields::COL_COLUMN_NAME, "id"),
                field(fields::COL_ORDINAL_POSITION, "1"),
                field(fields::COL_COLUMN_TYPE, "int"),
                field(fields::COL_IS_NULLABLE, "NO"),
                field(fields::COL_EXTRA, "auto_increment"),
            ]),
            CatalogRow::new(vec![
                field(fields::COL_COLUMN_NAME, "total"),
                field(fields::COL_ORDINAL_POSITION, "2"),
                field(fields::COL_COLUMN_TYPE, "numeric(10,2)"),
                field(fields::COL_IS_NULLABLE, "NO"),
                field(fields::COL_COLUMN_DEFAULT, "0"),
            ]),
            CatalogRow::new(vec![
                field(fields::COL_COLUMN_NAME, "status"),
                field(fields::COL_ORDINAL_POSITION, "3"),
                field(fields::COL_COLUMN_TYPE, "enum('new','paid')"),
                field(fields::COL_IS_NULLABLE, "YES"),
                field(fields::COL_COLUMN_COMMENT, "order state"),
            ]),
        ]
    }

    #[test]
    fn test_load_columns() {
        let monitor = ProgressMonitor::new();
        let mut table = Table::new("orders".to_string(), "admin".to_string());
        let mut source = VecRowSource::new(column_rows());

        let loaded = load_columns(&monitor, &mut table, &mut source).unwrap();
        assert_eq!(loaded, 3);
        assert_eq!(table.columns.len(), 3);

        let id = &table.columns[0];
        assert_eq!(id.name, "id");
        assert!(!id.nullable);
        assert!(id.auto_increment);
        assert!(id.persisted);

        let total = &table.columns[1];
        assert_eq!(total.data_type, DataType::Numeric { precision: 10, scale: 2 });
        assert!(total.default_value.is_some());

        let status = &table.columns[2];
        assert_eq!(status.comment.as_deref(), Some("order state"));
    }

    #[test]
    fn test_load_constraints_and_key_columns() {
        let monitor = ProgressMonitor::new();
        let mut table = Table::new("orders".to_string(), "admin".to_string());
        let mut columns = VecRowSource::new(column_rows());
        load_columns(&monitor, &mut table, &mut columns).unwrap();

        let mut constraints = VecRowSource::new(vec![
            CatalogRow::new(vec![
                field(fields::COL_CONSTRAINT_NAME, "pk_orders"),
                field(fields::COL_CONSTRAINT_TYPE, "PRIMARY KEY"),
            ]),
            CatalogRow::new(vec![
                field(fields::COL_CONSTRAINT_NAME, "chk_total"),
                field(fields::COL_CONSTRAINT_TYPE, "CHECK"),
                field(fields::COL_CHECK_CLAUSE, "total >= 0"),
            ]),
        ]);
        assert_eq!(load_constraints(&monitor, &mut table, &mut constraints).unwrap(), 2);

        let mut keys = VecRowSource::new(vec![CatalogRow::new(vec![
            field(fields::COL_CONSTRAINT_NAME, "pk_orders"),
            field(fields::COL_COLUMN_NAME, "id"),
            field(fields::COL_ORDINAL_POSITION, "1"),
        ])]);
        assert_eq!(load_key_columns(&monitor, &mut table, &mut keys).unwrap(), 1);

        let pk = table.get_constraint("pk_orders").unwrap();
        assert_eq!(pk.attribute_references().len(), 1);
        assert_eq!(pk.attribute_references()[0].column_name, "id");
        assert_eq!(pk.attribute_references()[0].ordinal_position, 1);

        let chk = table.get_constraint("chk_total").unwrap();
        assert_eq!(chk.check_clause(), Some("total >= 0"));
    }

    #[test]
    fn test_key_column_for_unknown_constraint_fails() {
        let monitor = ProgressMonitor::new();
        let mut table = Table::new("orders".to_string(), "admin".to_string());
        let mut columns = VecRowSource::new(column_rows());
        load_columns(&monitor, &mut table, &mut columns).unwrap();

        let mut keys = VecRowSource::new(vec![CatalogRow::new(vec![
            field(fields::COL_CONSTRAINT_NAME, "no_such_constraint"),
            field(fields::COL_COLUMN_NAME, "id"),
            field(fields::COL_ORDINAL_POSITION, "1"),
        ])]);
        assert!(matches!(
            load_key_columns(&monitor, &mut table, &mut keys),
            Err(MetadataError::ConstraintNotFound(_))
        ));
    }

    #[test]
    fn test_cancellation_stops_loading() {
        let monitor = ProgressMonitor::new();
        monitor.cancel();
        let mut table = Table::new("orders".to_string(), "admin".to_string());
        let mut source = VecRowSource::new(column_rows());
        assert!(matches!(
            load_columns(&monitor, &mut table, &mut source),
            Err(MetadataError::Cancelled)
        ));
        assert!(table.columns.is_empty());
    }

    #[test]
    fn test_unknown_constraint_type_fails() {
        let monitor = ProgressMonitor::new();
        let mut table = Table::new("orders".to_string(), "admin".to_string());
        let mut source = VecRowSource::new(vec![CatalogRow::new(vec![
            field(fields::COL_CONSTRAINT_NAME, "x"),
            field(fields::COL_CONSTRAINT_TYPE, "EXCLUSION"),
        ])]);
        assert!(matches!(
            load_constraints(&monitor, &mut table, &mut source),
            Err(MetadataError::ParseError(_))
        ));
    }
}
