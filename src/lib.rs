//! DB2 catalog column model for Rust
//!
//! Builds typed column descriptors from rows of the DB2 `SYSCAT.COLUMNS`
//! catalog view. Declared type names are resolved against a shared type
//! cache and schema user-defined types; version-dependent catalog fields
//! are read only when the server supports them.
//!
//! # Example
//!
//! ```
//! use db2_catalog_rs::{
//!     BuildContext, CatalogRow, CatalogValue, DataKind, DataTypeCache, SchemaMap,
//!     ServerVersion, TableColumn, TableRef,
//! };
//!
//! # fn main() -> db2_catalog_rs::Result<()> {
//! let types = DataTypeCache::db2_builtins();
//! let schemas = SchemaMap::new();
//! let version = ServerVersion::parse("SQL11059")?;
//! let ctx = BuildContext::new(&types, &schemas, &version);
//!
//! let row = CatalogRow::from_pairs([
//!     ("COLNAME", CatalogValue::from("PAYLOAD")),
//!     ("COLNO", 4.into()),
//!     ("TYPENAME", "VARCHAR".into()),
//!     ("LENGTH", 32.into()),
//!     ("CODEPAGE", 0.into()),
//! ]);
//! let column = TableColumn::from_row(&TableRef::new("APP", "EVENTS"), &row, &ctx)?;
//!
//! assert_eq!(column.data_kind(), DataKind::Content);
//! assert_eq!(column.full_type_name(), "VARCHAR(32) FOR BIT DATA");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod column;
pub mod error;
pub mod format;
pub mod loader;
pub mod options;
pub mod property;

// Re-export main types
pub use catalog::{
    CatalogRow, CatalogValue, DataKind, DataType, DataTypeCache, FeatureFlags, RowColumns,
    Schema, SchemaLookup, SchemaMap, ServerVersion, VersionCapabilities,
};
pub use catalog::types::{Compression, GeneratedKind, HiddenState};
pub use column::{
    BuildContext, ColumnListener, RedshiftAttributes, TableColumn, TableRef, TypeResolution,
};
pub use error::{Error, Result};
pub use format::{
    Db2TypeNameFormatter, Dialect, PostgresTypeNameFormatter, RedshiftTypeNameFormatter,
    TypeNameFormatter,
};
pub use loader::{build_columns, ColumnStreamExt};
pub use options::CatalogOptions;
pub use property::{
    column_properties, find_property, properties, set_property, PropertyDescriptor,
    PropertyValue, ValueRenderer,
};
