//! Options controlling column construction.

use crate::catalog::constants::{DEFAULT_MAX_LENGTH, DEFAULT_TYPE_NAME};

/// Column construction options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Type given to new columns (default: `VARCHAR`).
    pub default_type_name: String,
    /// Length given to new columns (default: 50).
    pub default_max_length: i64,
    /// Fail new-column construction when the default type is not cached
    /// (default: false, the type is left unset).
    pub strict_default_type: bool,
}

impl CatalogOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self {
            default_type_name: DEFAULT_TYPE_NAME.to_string(),
            default_max_length: DEFAULT_MAX_LENGTH,
            strict_default_type: false,
        }
    }

    /// Set the default type name for new columns.
    ///
    /// # Example
    ///
    /// ```
    /// use db2_catalog_rs::CatalogOptions;
    ///
    /// let options = CatalogOptions::new()
    ///     .with_default_type("CHARACTER")
    ///     .with_default_max_length(10);
    /// assert_eq!(options.default_type_name, "CHARACTER");
    /// ```
    pub fn with_default_type(mut self, type_name: impl Into<String>) -> Self {
        self.default_type_name = type_name.into();
        self
    }

    /// Set the default length for new columns.
    pub fn with_default_max_length(mut self, max_length: i64) -> Self {
        self.default_max_length = max_length;
        self
    }

    /// Require the default type to resolve when creating new columns.
    pub fn with_strict_default_type(mut self, strict: bool) -> Self {
        self.strict_default_type = strict;
        self
    }
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CatalogOptions::default();
        assert_eq!(options.default_type_name, "VARCHAR");
        assert_eq!(options.default_max_length, 50);
        assert!(!options.strict_default_type);
    }

    #[test]
    fn test_builder() {
        let options = CatalogOptions::new().with_strict_default_type(true);
        assert!(options.strict_default_type);
        assert_eq!(options.default_max_length, 50);
    }
}
