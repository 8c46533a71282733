//! Catalog constants.
//!
//! Field names follow the DB2 `SYSCAT.COLUMNS` view. SQL type codes match
//! the JDBC `java.sql.Types` numbering so value types stay comparable with
//! other drivers.

// SYSCAT.COLUMNS fields
pub const COL_NAME: &str = "COLNAME";
pub const COL_NO: &str = "COLNO";
pub const COL_NULLS: &str = "NULLS";
pub const COL_DEFAULT: &str = "DEFAULT";
pub const COL_LENGTH: &str = "LENGTH";
pub const COL_SCALE: &str = "SCALE";
pub const COL_TYPE_NAME: &str = "TYPENAME";
pub const COL_TYPE_SCHEMA: &str = "TYPESCHEMA";
pub const COL_HIDDEN: &str = "HIDDEN";
pub const COL_IDENTITY: &str = "IDENTITY";
pub const COL_COMPACT: &str = "COMPACT";
pub const COL_GENERATED: &str = "GENERATED";
pub const COL_TEXT: &str = "TEXT";
pub const COL_COMPRESS: &str = "COMPRESS";
pub const COL_COLCARD: &str = "COLCARD";
pub const COL_HIGH2KEY: &str = "HIGH2KEY";
pub const COL_LOW2KEY: &str = "LOW2KEY";
pub const COL_AVG_LENGTH: &str = "AVGCOLLEN";
pub const COL_NUM_NULLS: &str = "NUMNULLS";
pub const COL_KEY_SEQ: &str = "KEYSEQ";
pub const COL_PART_KEY_SEQ: &str = "PARTKEYSEQ";
pub const COL_REMARKS: &str = "REMARKS";
pub const COL_CODE_PAGE: &str = "CODEPAGE";

// v9.5
pub const COL_COLLATION_SCHEMA: &str = "COLLATIONSCHEMA";
pub const COL_COLLATION_NAME: &str = "COLLATIONNAME";
pub const COL_N_QUANTILES: &str = "NQUANTILES";
pub const COL_N_MOST_FREQ: &str = "NMOSTFREQ";

// v9.7
pub const COL_PCT_INLINED: &str = "PCTINLINED";

// v10.1
pub const COL_ROW_BEGIN: &str = "ROWBEGIN";
pub const COL_ROW_END: &str = "ROWEND";
pub const COL_TRANSACTION_START_ID: &str = "TRANSACTIONSTARTID";

// v10.5
pub const COL_TYPE_STRING_UNITS: &str = "TYPESTRINGUNITS";
pub const COL_STRING_UNITS_LENGTH: &str = "STRINGUNITSLENGTH";
pub const COL_PCT_ENCODED: &str = "PCTENCODED";

// Redshift pg_attribute extras
pub const COL_RS_ENCODING: &str = "encoding";
pub const COL_RS_DIST_KEY: &str = "attisdistkey";
pub const COL_RS_SORT_KEY: &str = "attsortkeyord";
pub const COL_RS_TYPE_MOD: &str = "atttypmod";

// SQL type codes (java.sql.Types numbering)
pub const SQL_TYPE_BIT: i32 = -7;
pub const SQL_TYPE_SMALLINT: i32 = 5;
pub const SQL_TYPE_INTEGER: i32 = 4;
pub const SQL_TYPE_BIGINT: i32 = -5;
pub const SQL_TYPE_NUMERIC: i32 = 2;
pub const SQL_TYPE_DECIMAL: i32 = 3;
pub const SQL_TYPE_DOUBLE: i32 = 8;
pub const SQL_TYPE_CHAR: i32 = 1;
pub const SQL_TYPE_VARCHAR: i32 = 12;
pub const SQL_TYPE_DATE: i32 = 91;
pub const SQL_TYPE_TIME: i32 = 92;
pub const SQL_TYPE_TIMESTAMP: i32 = 93;
pub const SQL_TYPE_BINARY: i32 = -2;
pub const SQL_TYPE_VARBINARY: i32 = -3;
pub const SQL_TYPE_BLOB: i32 = 2004;
pub const SQL_TYPE_CLOB: i32 = 2005;
pub const SQL_TYPE_STRUCT: i32 = 2002;
pub const SQL_TYPE_OTHER: i32 = 1111;

// PostgreSQL type oids
pub const PG_OID_BPCHAR: u32 = 1042;
pub const PG_TYPE_CHAR: &str = "char";

/// Schema holding DB2 built-in types.
pub const SYSTEM_TYPE_SCHEMA: &str = "SYSIBM";
/// Schema holding PostgreSQL and Redshift built-in types.
pub const PG_SYSTEM_SCHEMA: &str = "pg_catalog";

// Defaults for new, not yet persisted columns
pub const DEFAULT_TYPE_NAME: &str = "VARCHAR";
pub const DEFAULT_MAX_LENGTH: i64 = 50;
pub const UNRESOLVED_ORDINAL: i32 = -1;
pub const UNKNOWN_TYPE_MOD: i32 = -1;

// Property categories
pub const CAT_OWNER: &str = "Owner";
pub const CAT_TEMPORAL: &str = "Temporal";
pub const CAT_STATISTICS: &str = "Statistics";
pub const CAT_COLLATION: &str = "Collation";
pub const CAT_REDSHIFT: &str = "Redshift";
