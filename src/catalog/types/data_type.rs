//! Resolved data type entities.
//!
//! A `DataType` is what a column's declared type name resolves to, either a
//! built-in type from the data source's type cache or a user-defined type
//! owned by a schema.

use std::fmt;

use crate::catalog::constants::{
    SQL_TYPE_BIGINT, SQL_TYPE_BINARY, SQL_TYPE_BIT, SQL_TYPE_BLOB, SQL_TYPE_CHAR, SQL_TYPE_CLOB,
    SQL_TYPE_DATE, SQL_TYPE_DECIMAL, SQL_TYPE_DOUBLE, SQL_TYPE_INTEGER, SQL_TYPE_NUMERIC,
    SQL_TYPE_SMALLINT, SQL_TYPE_STRUCT, SQL_TYPE_TIME, SQL_TYPE_TIMESTAMP, SQL_TYPE_VARBINARY,
    SQL_TYPE_VARCHAR, PG_SYSTEM_SCHEMA, SYSTEM_TYPE_SCHEMA,
};

/// Broad classification of a type's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    Boolean,
    Numeric,
    String,
    Datetime,
    Binary,
    /// Opaque content (LOBs, `FOR BIT DATA` character columns).
    Content,
    Struct,
    Array,
    Object,
    Unknown,
}

impl DataKind {
    /// Classify a SQL type code.
    pub fn from_sql_type(type_id: i32) -> Self {
        match type_id {
            SQL_TYPE_BIT => DataKind::Boolean,
            SQL_TYPE_SMALLINT | SQL_TYPE_INTEGER | SQL_TYPE_BIGINT | SQL_TYPE_NUMERIC
            | SQL_TYPE_DECIMAL | SQL_TYPE_DOUBLE => DataKind::Numeric,
            SQL_TYPE_CHAR | SQL_TYPE_VARCHAR => DataKind::String,
            SQL_TYPE_DATE | SQL_TYPE_TIME | SQL_TYPE_TIMESTAMP => DataKind::Datetime,
            SQL_TYPE_BINARY | SQL_TYPE_VARBINARY => DataKind::Binary,
            SQL_TYPE_BLOB | SQL_TYPE_CLOB => DataKind::Content,
            SQL_TYPE_STRUCT => DataKind::Struct,
            _ => DataKind::Unknown,
        }
    }
}

/// A data type known to the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataType {
    /// Type name as declared in the catalog (e.g. `VARCHAR`).
    pub name: String,
    /// Owning schema name, `None` for types without one.
    pub schema: Option<String>,
    /// SQL type code.
    pub type_id: i32,
    /// Value classification.
    pub kind: DataKind,
    /// Object id for dialects that key types by oid.
    pub object_id: Option<u32>,
}

impl DataType {
    /// Create a built-in type whose kind follows its SQL type code.
    pub fn new(name: impl Into<String>, type_id: i32) -> Self {
        Self {
            name: name.into(),
            schema: Some(SYSTEM_TYPE_SCHEMA.to_string()),
            type_id,
            kind: DataKind::from_sql_type(type_id),
            object_id: None,
        }
    }

    /// Create a user-defined type owned by `schema`.
    pub fn user_defined(
        schema: impl Into<String>,
        name: impl Into<String>,
        type_id: i32,
        kind: DataKind,
    ) -> Self {
        Self {
            name: name.into(),
            schema: Some(schema.into()),
            type_id,
            kind,
            object_id: None,
        }
    }

    /// Override the value classification.
    pub fn with_kind(mut self, kind: DataKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the owning schema.
    pub fn with_schema(mut self, schema: Option<String>) -> Self {
        self.schema = schema;
        self
    }

    /// Set the dialect object id.
    pub fn with_object_id(mut self, oid: u32) -> Self {
        self.object_id = Some(oid);
        self
    }

    /// Whether this type is built into the server (`SYSIBM` or `pg_catalog`).
    pub fn is_system(&self) -> bool {
        self.schema
            .as_deref()
            .map_or(true, |s| s == SYSTEM_TYPE_SCHEMA || s == PG_SYSTEM_SCHEMA)
    }

    /// Name usable in DML.
    ///
    /// Built-in types are referenced by bare name; user-defined types are
    /// qualified with their schema.
    pub fn fully_qualified_name(&self) -> String {
        match self.schema.as_deref() {
            Some(schema) if !self.is_system() => format!("{}.{}", schema, self.name),
            _ => self.name.clone(),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_type() {
        let t = DataType::new("INTEGER", SQL_TYPE_INTEGER);
        assert_eq!(t.kind, DataKind::Numeric);
        assert!(t.is_system());
        assert_eq!(t.fully_qualified_name(), "INTEGER");
    }

    #[test]
    fn test_user_defined_type() {
        let t = DataType::user_defined("APP", "MONEY", SQL_TYPE_DECIMAL, DataKind::Numeric);
        assert!(!t.is_system());
        assert_eq!(t.fully_qualified_name(), "APP.MONEY");
        assert_eq!(format!("{}", t), "APP.MONEY");
    }

    #[test]
    fn test_pg_catalog_type_is_system() {
        let t = DataType::new("numeric", SQL_TYPE_NUMERIC)
            .with_schema(Some(PG_SYSTEM_SCHEMA.to_string()));
        assert_eq!(t.kind, DataKind::Numeric);
        assert!(t.is_system());
        assert_eq!(t.fully_qualified_name(), "numeric");
    }

    #[test]
    fn test_kind_from_sql_type() {
        assert_eq!(DataKind::from_sql_type(SQL_TYPE_VARCHAR), DataKind::String);
        assert_eq!(DataKind::from_sql_type(SQL_TYPE_BLOB), DataKind::Content);
        assert_eq!(DataKind::from_sql_type(SQL_TYPE_TIMESTAMP), DataKind::Datetime);
        assert_eq!(DataKind::from_sql_type(1111), DataKind::Unknown);
    }
}
