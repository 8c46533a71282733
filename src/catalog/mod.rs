//! DB2 catalog model: raw rows, resolved types and version capabilities.

pub mod cache;
pub mod constants;
pub mod types;
pub mod version;

pub use cache::{DataTypeCache, Schema, SchemaLookup, SchemaMap};
pub use types::{CatalogRow, CatalogValue, DataKind, DataType, RowColumns};
pub use version::{FeatureFlags, ServerVersion, VersionCapabilities};
