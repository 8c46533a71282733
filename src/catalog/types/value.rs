//! Raw catalog field values.

use chrono::NaiveDateTime;
use std::fmt;

/// A single field value of a catalog row, as materialized by the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogValue {
    /// NULL value.
    Null,
    /// Character value (VARCHAR, CHAR, CLOB text).
    String(String),
    /// Numeric value as text (preserves precision).
    /// Parsed on access into the integer width the field needs.
    Number(String),
    /// Boolean value.
    Boolean(bool),
    /// Timestamp value.
    Timestamp(NaiveDateTime),
}

impl CatalogValue {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, CatalogValue::Null)
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CatalogValue::String(s) => Some(s),
            CatalogValue::Number(s) => Some(s),
            _ => None,
        }
    }

    /// Try to convert to i64.
    ///
    /// Character values holding digits are accepted, since some catalog
    /// views expose counters as CHAR columns. Integral decimals such as
    /// `"42.0"` are accepted; anything with a fraction is not.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            CatalogValue::Number(s) | CatalogValue::String(s) => parse_integral(s.trim()),
            CatalogValue::Boolean(b) => Some(*b as i64),
            _ => None,
        }
    }

    /// Try to convert to i32. Out-of-range values yield `None`.
    pub fn to_i32(&self) -> Option<i32> {
        self.to_i64().and_then(|v| i32::try_from(v).ok())
    }

    /// Try to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CatalogValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as a NaiveDateTime.
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            CatalogValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Text form used by string accessors.
    ///
    /// Returns `None` for NULL. Timestamps render in the DB2 external
    /// format so temporal columns stay readable.
    pub fn to_text(&self) -> Option<String> {
        match self {
            CatalogValue::Null => None,
            CatalogValue::String(s) | CatalogValue::Number(s) => Some(s.clone()),
            CatalogValue::Boolean(b) => Some(if *b { "Y" } else { "N" }.to_string()),
            CatalogValue::Timestamp(ts) => Some(ts.format("%Y-%m-%d-%H.%M.%S").to_string()),
        }
    }
}

fn parse_integral(s: &str) -> Option<i64> {
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    let (whole, frac) = s.split_once('.')?;
    if !frac.is_empty() && frac.bytes().all(|b| b == b'0') {
        whole.parse().ok()
    } else {
        None
    }
}

impl fmt::Display for CatalogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogValue::Null => write!(f, "NULL"),
            other => write!(f, "{}", other.to_text().unwrap_or_default()),
        }
    }
}

impl From<&str> for CatalogValue {
    fn from(s: &str) -> Self {
        CatalogValue::String(s.to_string())
    }
}

impl From<String> for CatalogValue {
    fn from(s: String) -> Self {
        CatalogValue::String(s)
    }
}

impl From<i64> for CatalogValue {
    fn from(v: i64) -> Self {
        CatalogValue::Number(v.to_string())
    }
}

impl From<i32> for CatalogValue {
    fn from(v: i32) -> Self {
        CatalogValue::Number(v.to_string())
    }
}

impl From<bool> for CatalogValue {
    fn from(v: bool) -> Self {
        CatalogValue::Boolean(v)
    }
}

impl<T: Into<CatalogValue>> From<Option<T>> for CatalogValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CatalogValue::Null)
    }
}
