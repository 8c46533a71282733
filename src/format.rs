//! Full type name formatting, selected per dialect.

use std::fmt;
use std::sync::Arc;

use crate::catalog::constants::{PG_OID_BPCHAR, PG_TYPE_CHAR};
use crate::catalog::types::DataKind;
use crate::column::TableColumn;

/// Renders a column's type with its length, scale or modifiers.
pub trait TypeNameFormatter: fmt::Debug + Send + Sync {
    fn full_type_name(&self, column: &TableColumn) -> String;
}

/// SQL dialect of the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Db2,
    Redshift,
}

impl Dialect {
    /// Type name formatter for this dialect.
    pub fn formatter(&self) -> Arc<dyn TypeNameFormatter> {
        match self {
            Dialect::Db2 => Arc::new(Db2TypeNameFormatter),
            Dialect::Redshift => Arc::new(RedshiftTypeNameFormatter),
        }
    }
}

/// Length and scale in parentheses after the type name.
///
/// - `VARCHAR(20)`, `BLOB(1048576)` for sized types
/// - `DECIMAL(12,2)` for exact numerics
/// - `VARCHAR(16) FOR BIT DATA` for character columns holding bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct Db2TypeNameFormatter;

impl TypeNameFormatter for Db2TypeNameFormatter {
    fn full_type_name(&self, column: &TableColumn) -> String {
        let type_name = column.type_name();
        let Some(data_type) = column.data_type() else {
            return type_name.to_string();
        };
        let length = column.max_length();

        match data_type.kind {
            DataKind::Numeric if is_exact_numeric(&data_type.name) && length > 0 => {
                format!("{}({},{})", type_name, length, column.scale().unwrap_or(0))
            }
            DataKind::String if length > 0 => {
                if column.data_kind() == DataKind::Content {
                    format!("{}({}) FOR BIT DATA", type_name, length)
                } else {
                    format!("{}({})", type_name, length)
                }
            }
            DataKind::Binary | DataKind::Content if length > 0 => {
                format!("{}({})", type_name, length)
            }
            _ => type_name.to_string(),
        }
    }
}

fn is_exact_numeric(name: &str) -> bool {
    ["DECIMAL", "NUMERIC", "DECFLOAT"]
        .iter()
        .any(|n| name.eq_ignore_ascii_case(n))
}

/// PostgreSQL family formatting.
///
/// Modifiers come from the attribute's type modifier when the catalog
/// reports one, otherwise from the column length and scale.
///
/// - `varchar(64)` from typmod 68
/// - `numeric(10,2)` from typmod `(10 << 16 | 2) + 4`
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresTypeNameFormatter;

impl TypeNameFormatter for PostgresTypeNameFormatter {
    fn full_type_name(&self, column: &TableColumn) -> String {
        let type_name = column.type_name();
        let Some(data_type) = column.data_type() else {
            return type_name.to_string();
        };
        let type_mod = column.type_mod();
        let length = column.max_length();

        match data_type.kind {
            DataKind::Numeric if is_exact_numeric(&data_type.name) => {
                if type_mod >= 4 {
                    let packed = type_mod - 4;
                    format!("{}({},{})", type_name, (packed >> 16) & 0xffff, packed & 0xffff)
                } else if length > 0 {
                    format!("{}({},{})", type_name, length, column.scale().unwrap_or(0))
                } else {
                    type_name.to_string()
                }
            }
            DataKind::String if type_mod >= 4 => format!("{}({})", type_name, type_mod - 4),
            DataKind::String if length > 0 => format!("{}({})", type_name, length),
            _ => type_name.to_string(),
        }
    }
}

/// Redshift formatting.
///
/// Redshift reports CHAR columns with the `bpchar` type id but only accepts
/// `char` in DDL, so those are renamed; everything else uses the PostgreSQL
/// rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedshiftTypeNameFormatter;

impl TypeNameFormatter for RedshiftTypeNameFormatter {
    fn full_type_name(&self, column: &TableColumn) -> String {
        match column.data_type() {
            Some(data_type) if data_type.object_id == Some(PG_OID_BPCHAR) => {
                format!("{}{}", PG_TYPE_CHAR, bpchar_modifiers(column.type_mod()))
            }
            _ => PostgresTypeNameFormatter.full_type_name(column),
        }
    }
}

/// `(n)` for a bpchar type modifier, which stores the length plus the
/// 4-byte varlena header.
fn bpchar_modifiers(type_mod: i32) -> String {
    if type_mod >= 4 {
        format!("({})", type_mod - 4)
    } else {
        String::new()
    }
}
