//! Catalog row type with defensive field accessors.
//!
//! Every accessor returns a safe default (`None`, `0`, `false`) when the
//! field is missing from the row, NULL, or cannot be coerced. Catalog views
//! differ between server versions, so a missing field is normal.

use std::str::FromStr;
use std::sync::Arc;

use crate::error::{Error, Result};

use super::value::CatalogValue;

/// Field names shared by all rows of one catalog query.
#[derive(Debug, Clone, Default)]
pub struct RowColumns {
    /// Field names in select order.
    pub names: Vec<String>,
}

impl RowColumns {
    /// Create from field names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Find field index by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n.eq_ignore_ascii_case(name))
    }
}

/// One materialized row of a catalog metadata query.
#[derive(Debug, Clone)]
pub struct CatalogRow {
    /// Field values.
    values: Vec<CatalogValue>,
    /// Shared field names (reference counted).
    columns: Arc<RowColumns>,
}

impl CatalogRow {
    /// Create a row with values and shared field names.
    ///
    /// Fails if the value count differs from the field count.
    pub fn new(values: Vec<CatalogValue>, columns: Arc<RowColumns>) -> Result<Self> {
        if values.len() != columns.len() {
            return Err(Error::RowShape {
                values: values.len(),
                columns: columns.len(),
            });
        }
        Ok(Self { values, columns })
    }

    /// Build a row from `(name, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CatalogValue>,
    {
        let (names, values): (Vec<String>, Vec<CatalogValue>) = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();
        Self {
            values,
            columns: Arc::new(RowColumns { names }),
        }
    }

    /// Get value by field index (0-based).
    pub fn get(&self, index: usize) -> Option<&CatalogValue> {
        self.values.get(index)
    }

    /// Get value by field name (case-insensitive).
    pub fn get_by_name(&self, name: &str) -> Option<&CatalogValue> {
        self.columns
            .find_by_name(name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get field names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.names.iter().map(String::as_str).collect()
    }

    /// String value, `None` if absent or NULL.
    pub fn get_string(&self, name: &str) -> Option<String> {
        self.get_by_name(name).and_then(CatalogValue::to_text)
    }

    /// String value with surrounding blanks removed.
    ///
    /// DB2 pads fixed-length CHAR catalog columns such as `TYPESCHEMA`.
    pub fn get_string_trimmed(&self, name: &str) -> Option<String> {
        self.get_string(name).map(|s| s.trim().to_string())
    }

    /// Integer value, `0` if absent, NULL or malformed.
    pub fn get_int(&self, name: &str) -> i32 {
        self.get_integer(name).unwrap_or(0)
    }

    /// Nullable integer value.
    pub fn get_integer(&self, name: &str) -> Option<i32> {
        self.get_by_name(name).and_then(CatalogValue::to_i32)
    }

    /// Nullable 64-bit integer value.
    pub fn get_long(&self, name: &str) -> Option<i64> {
        self.get_by_name(name).and_then(CatalogValue::to_i64)
    }

    /// Boolean value, `false` if absent or not a boolean.
    pub fn get_bool(&self, name: &str) -> bool {
        match self.get_by_name(name) {
            Some(CatalogValue::Boolean(b)) => *b,
            Some(CatalogValue::String(s)) => matches!(s.trim(), "t" | "true" | "Y"),
            Some(v) => v.to_i64().is_some_and(|n| n != 0),
            None => false,
        }
    }

    /// Flag stored as a character code: `true` when it equals `true_value`.
    pub fn get_flag(&self, name: &str, true_value: &str) -> bool {
        match self.get_by_name(name) {
            Some(CatalogValue::Boolean(b)) => *b,
            Some(v) => v.to_text().is_some_and(|s| s.trim() == true_value),
            None => false,
        }
    }

    /// Dictionary value parsed from a character code.
    ///
    /// Blank and unknown codes yield `None`.
    pub fn get_enum<T: FromStr>(&self, name: &str) -> Option<T> {
        let raw = self.get_string_trimmed(name)?;
        if raw.is_empty() {
            return None;
        }
        raw.parse().ok()
    }

    /// Iterate over values.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogValue> {
        self.values.iter()
    }
}

impl<'a> IntoIterator for &'a CatalogRow {
    type Item = &'a CatalogValue;
    type IntoIter = std::slice::Iter<'a, CatalogValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
