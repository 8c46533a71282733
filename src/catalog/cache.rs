//! Type cache and schema lookup used for type resolution.
//!
//! Both are read-only once built. They are shared between concurrent column
//! builds through `Arc` and need no locking.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;

use super::constants::{
    SQL_TYPE_BIGINT, SQL_TYPE_BINARY, SQL_TYPE_BIT, SQL_TYPE_BLOB, SQL_TYPE_CHAR, SQL_TYPE_CLOB,
    SQL_TYPE_DATE, SQL_TYPE_DECIMAL, SQL_TYPE_DOUBLE, SQL_TYPE_INTEGER, SQL_TYPE_SMALLINT,
    SQL_TYPE_TIME, SQL_TYPE_TIMESTAMP, SQL_TYPE_VARBINARY, SQL_TYPE_VARCHAR,
};
use super::types::DataType;

/// Data types of one data source, keyed by exact type name.
#[derive(Debug, Clone, Default)]
pub struct DataTypeCache {
    types: HashMap<String, Arc<DataType>>,
}

impl DataTypeCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache pre-filled with the DB2 LUW built-in types.
    pub fn db2_builtins() -> Self {
        [
            ("SMALLINT", SQL_TYPE_SMALLINT),
            ("INTEGER", SQL_TYPE_INTEGER),
            ("BIGINT", SQL_TYPE_BIGINT),
            ("DECIMAL", SQL_TYPE_DECIMAL),
            ("DOUBLE", SQL_TYPE_DOUBLE),
            ("BOOLEAN", SQL_TYPE_BIT),
            ("CHARACTER", SQL_TYPE_CHAR),
            ("VARCHAR", SQL_TYPE_VARCHAR),
            ("CLOB", SQL_TYPE_CLOB),
            ("BLOB", SQL_TYPE_BLOB),
            ("BINARY", SQL_TYPE_BINARY),
            ("VARBINARY", SQL_TYPE_VARBINARY),
            ("DATE", SQL_TYPE_DATE),
            ("TIME", SQL_TYPE_TIME),
            ("TIMESTAMP", SQL_TYPE_TIMESTAMP),
        ]
        .into_iter()
        .map(|(name, type_id)| DataType::new(name, type_id))
        .collect()
    }

    /// Add a type, replacing any type with the same name.
    pub fn insert(&mut self, data_type: DataType) -> Arc<DataType> {
        let data_type = Arc::new(data_type);
        self.types
            .insert(data_type.name.clone(), Arc::clone(&data_type));
        data_type
    }

    /// Look up a type by exact name.
    pub fn get(&self, name: &str) -> Option<Arc<DataType>> {
        self.types.get(name).cloned()
    }

    /// Get the number of cached types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<DataType> for DataTypeCache {
    fn from_iter<I: IntoIterator<Item = DataType>>(iter: I) -> Self {
        let mut cache = Self::new();
        for data_type in iter {
            cache.insert(data_type);
        }
        cache
    }
}

/// A schema and the user-defined types it owns.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Schema name.
    pub name: String,
    udts: HashMap<String, Arc<DataType>>,
}

impl Schema {
    /// Create a schema with no types.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            udts: HashMap::new(),
        }
    }

    /// Add a user-defined type. Its schema is set to this schema.
    pub fn with_udt(mut self, data_type: DataType) -> Self {
        let data_type = data_type.with_schema(Some(self.name.clone()));
        self.udts
            .insert(data_type.name.clone(), Arc::new(data_type));
        self
    }

    /// Look up a user-defined type by exact name.
    pub fn get_udt(&self, name: &str) -> Option<Arc<DataType>> {
        self.udts.get(name).cloned()
    }
}

/// Schema resolution by name.
///
/// `Ok(None)` means the schema does not exist. `Err` means the lookup itself
/// failed and aborts column construction.
pub trait SchemaLookup {
    fn schema(&self, name: &str) -> Result<Option<Arc<Schema>>>;
}

impl<F> SchemaLookup for F
where
    F: Fn(&str) -> Result<Option<Arc<Schema>>>,
{
    fn schema(&self, name: &str) -> Result<Option<Arc<Schema>>> {
        self(name)
    }
}

/// In-memory schema lookup.
#[derive(Debug, Clone, Default)]
pub struct SchemaMap {
    schemas: HashMap<String, Arc<Schema>>,
}

impl SchemaMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a schema.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schemas.insert(schema.name.clone(), Arc::new(schema));
        self
    }
}

impl SchemaLookup for SchemaMap {
    fn schema(&self, name: &str) -> Result<Option<Arc<Schema>>> {
        Ok(self.schemas.get(name).cloned())
    }
}
