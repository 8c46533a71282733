//! Error types for the DB2 catalog model.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for catalog model operations.
///
/// Missing or mistyped catalog fields never produce an error; they decode to
/// a default. Only failures of collaborators (schema lookup) and explicit
/// misuse of the editing API surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// Schema lookup failed while resolving a user-defined type.
    #[error("Failed to look up schema '{schema}': {message}")]
    SchemaLookup { schema: String, message: String },

    /// No default data type available for a new column.
    #[error("Default data type '{type_name}' not found in type cache")]
    DefaultTypeMissing { type_name: String },

    /// Server version string could not be parsed.
    #[error("Invalid server version: {version}")]
    InvalidVersion { version: String },

    /// Property id is not part of the column property table.
    #[error("Property not found: {id}")]
    PropertyNotFound { id: String },

    /// Property exists but cannot be edited.
    #[error("Property '{id}' is read-only")]
    PropertyNotEditable { id: String },

    /// Value passed for a property has the wrong shape.
    #[error("Invalid value for property '{id}': expected {expected}")]
    PropertyType { id: String, expected: &'static str },

    /// Row value count does not match its column list.
    #[error("Row has {values} values but {columns} columns")]
    RowShape { values: usize, columns: usize },
}

impl Error {
    /// Create a schema lookup error.
    pub fn schema_lookup(schema: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaLookup {
            schema: schema.into(),
            message: message.into(),
        }
    }

    /// Create a property type error.
    pub fn property_type(id: impl Into<String>, expected: &'static str) -> Self {
        Self::PropertyType {
            id: id.into(),
            expected,
        }
    }
}
