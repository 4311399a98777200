//! Field names of catalog cursor rows (information_schema naming)

pub const COL_TABLE_NAME: &str = "TABLE_NAME";
pub const COL_COLUMN_NAME: &str = "COLUMN_NAME";
pub const COL_ORDINAL_POSITION: &str = "ORDINAL_POSITION";
pub const COL_COLUMN_TYPE: &str = "COLUMN_TYPE";
pub const COL_IS_NULLABLE: &str = "IS_NULLABLE";
pub const COL_COLUMN_DEFAULT: &str = "COLUMN_DEFAULT";
pub const COL_COLUMN_COMMENT: &str = "COLUMN_COMMENT";
/// Holds "auto_increment" for serial-like columns
pub const COL_EXTRA: &str = "EXTRA";
pub const COL_CONSTRAINT_NAME: &str = "CONSTRAINT_NAME";
pub const COL_CONSTRAINT_TYPE: &str = "CONSTRAINT_TYPE";
pub const COL_CHECK_CLAUSE: &str = "CHECK_CLAUSE";
