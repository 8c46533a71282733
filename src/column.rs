//! Table column descriptors built from DB2 catalog rows.
//!
//! A `TableColumn` is built once from a `SYSCAT.COLUMNS` row (or as a blank
//! template for a new column). Most fields are fixed at construction; only
//! the data type, description, default value, length and nullability can be
//! edited afterwards.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::catalog::cache::{DataTypeCache, SchemaLookup};
use crate::catalog::constants::*;
use crate::catalog::types::{
    CatalogRow, Compression, DataKind, DataType, GeneratedKind, HiddenState, YesNo,
};
use crate::catalog::version::VersionCapabilities;
use crate::error::{Error, Result};
use crate::format::{Dialect, TypeNameFormatter};
use crate::options::CatalogOptions;

/// The table or view owning a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableRef {
    pub schema: String,
    pub name: String,
}

impl TableRef {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema, self.name)
    }
}

/// How a column's declared type name was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeResolution {
    /// Found in the data source's type cache.
    Cached,
    /// Found among the user-defined types of the type schema.
    UserDefined,
    /// Not found; only the raw type name is known.
    Unresolved,
}

/// Observer of column edits.
pub trait ColumnListener: fmt::Debug + Send + Sync {
    /// Called after the column's data type was replaced.
    fn on_data_type_changed(&self, column: &str, old: Option<&DataType>, new: &DataType);
}

/// Attributes Redshift adds to `pg_attribute`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedshiftAttributes {
    /// Column compression encoding.
    pub encoding: Option<String>,
    /// Whether the column is the distribution key.
    pub dist_key: bool,
    /// Position in the sort key, 0 if not part of it.
    pub sort_key: i32,
}

/// Shared inputs for building columns of one data source.
#[derive(Clone)]
pub struct BuildContext<'a> {
    pub types: &'a DataTypeCache,
    pub schemas: &'a dyn SchemaLookup,
    pub version: &'a dyn VersionCapabilities,
    pub dialect: Dialect,
    pub formatter: Arc<dyn TypeNameFormatter>,
    pub options: CatalogOptions,
}

impl<'a> BuildContext<'a> {
    /// Create a DB2 context with default options.
    pub fn new(
        types: &'a DataTypeCache,
        schemas: &'a dyn SchemaLookup,
        version: &'a dyn VersionCapabilities,
    ) -> Self {
        Self {
            types,
            schemas,
            version,
            dialect: Dialect::Db2,
            formatter: Dialect::Db2.formatter(),
            options: CatalogOptions::default(),
        }
    }

    /// Switch dialect; also selects the dialect's type name formatter.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self.formatter = dialect.formatter();
        self
    }

    /// Inject a custom type name formatter.
    pub fn with_formatter(mut self, formatter: Arc<dyn TypeNameFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_options(mut self, options: CatalogOptions) -> Self {
        self.options = options;
        self
    }
}

/// A field group read only when a version gate holds.
struct VersionGate {
    name: &'static str,
    applies: fn(&dyn VersionCapabilities) -> bool,
    populate: fn(&mut TableColumn, &CatalogRow),
}

/// Version gates in ascending version order.
static VERSION_GATES: [VersionGate; 4] = [
    VersionGate {
        name: "v9.5",
        applies: gate_v9_5,
        populate: populate_v9_5,
    },
    VersionGate {
        name: "v9.7",
        applies: gate_v9_7,
        populate: populate_v9_7,
    },
    VersionGate {
        name: "v10.1",
        applies: gate_v10_1,
        populate: populate_v10_1,
    },
    VersionGate {
        name: "v10.5",
        applies: gate_v10_5,
        populate: populate_v10_5,
    },
];

fn gate_v9_5(caps: &dyn VersionCapabilities) -> bool {
    caps.is_at_least_v9_5()
}

fn gate_v9_7(caps: &dyn VersionCapabilities) -> bool {
    caps.is_at_least_v9_7()
}

fn gate_v10_1(caps: &dyn VersionCapabilities) -> bool {
    caps.is_at_least_v10_1()
}

fn gate_v10_5(caps: &dyn VersionCapabilities) -> bool {
    caps.is_at_least_v10_5()
}

fn populate_v9_5(column: &mut TableColumn, row: &CatalogRow) {
    column.collation_schema = row.get_string_trimmed(COL_COLLATION_SCHEMA);
    column.collation_name = row.get_string(COL_COLLATION_NAME);
    column.nb_quantiles = row.get_integer(COL_N_QUANTILES);
    column.nb_most_freq = row.get_integer(COL_N_MOST_FREQ);
}

fn populate_v9_7(column: &mut TableColumn, row: &CatalogRow) {
    column.pct_inlined = row.get_integer(COL_PCT_INLINED);
}

fn populate_v10_1(column: &mut TableColumn, row: &CatalogRow) {
    column.row_begin = row.get_string(COL_ROW_BEGIN);
    column.row_end = row.get_string(COL_ROW_END);
    column.transaction_start_id = row.get_string_trimmed(COL_TRANSACTION_START_ID);
}

fn populate_v10_5(column: &mut TableColumn, row: &CatalogRow) {
    column.type_string_units = row
        .get_string_trimmed(COL_TYPE_STRING_UNITS)
        .filter(|units| !units.is_empty());
    column.string_units_length = row.get_integer(COL_STRING_UNITS_LENGTH);
    column.pct_encoded = row.get_integer(COL_PCT_ENCODED);
    column.string_length = Some(match &column.type_string_units {
        Some(units) => match column.string_units_length {
            Some(len) => format!("{} {}", len, units),
            // NULL length renders as the units alone, never as a "null" token.
            None => units.clone(),
        },
        None => String::new(),
    });
}

/// A column of a DB2 table or view.
#[derive(Debug, Clone)]
pub struct TableColumn {
    table: TableRef,
    persisted: bool,
    dialect: Dialect,

    name: String,
    ordinal_position: i32,
    required: bool,
    default_value: Option<String>,
    max_length: i64,
    scale: Option<i32>,
    precision: Option<i32>,
    description: Option<String>,

    data_type: Option<Arc<DataType>>,
    type_name: String,
    value_type: i32,
    type_schema: Option<String>,
    type_resolution: TypeResolution,
    type_mod: i32,

    hidden: Option<HiddenState>,
    hidden_state: bool,
    identity: bool,
    lob_compact: bool,
    generated: Option<GeneratedKind>,
    generated_text: Option<String>,
    compress: Option<Compression>,
    code_page: i32,
    key_seq: Option<i32>,
    part_key_seq: Option<i32>,

    collation_schema: Option<String>,
    collation_name: Option<String>,

    row_begin: Option<String>,
    row_end: Option<String>,
    transaction_start_id: Option<String>,

    type_string_units: Option<String>,
    string_units_length: Option<i32>,
    string_length: Option<String>,

    colcard: Option<i64>,
    high2key: Option<String>,
    low2key: Option<String>,
    avg_length: Option<i32>,
    nb_quantiles: Option<i32>,
    nb_most_freq: Option<i32>,
    nb_nulls: Option<i64>,
    pct_inlined: Option<i32>,
    pct_encoded: Option<i32>,

    redshift: Option<RedshiftAttributes>,

    formatter: Arc<dyn TypeNameFormatter>,
    listeners: Vec<Arc<dyn ColumnListener>>,
}

impl TableColumn {
    fn empty(table: &TableRef, ctx: &BuildContext<'_>, persisted: bool) -> Self {
        Self {
            table: table.clone(),
            persisted,
            dialect: ctx.dialect,
            name: String::new(),
            ordinal_position: 0,
            required: false,
            default_value: None,
            max_length: 0,
            scale: None,
            precision: None,
            description: None,
            data_type: None,
            type_name: String::new(),
            value_type: SQL_TYPE_OTHER,
            type_schema: None,
            type_resolution: TypeResolution::Unresolved,
            type_mod: UNKNOWN_TYPE_MOD,
            hidden: None,
            hidden_state: false,
            identity: false,
            lob_compact: false,
            generated: None,
            generated_text: None,
            compress: None,
            code_page: 0,
            key_seq: None,
            part_key_seq: None,
            collation_schema: None,
            collation_name: None,
            row_begin: None,
            row_end: None,
            transaction_start_id: None,
            type_string_units: None,
            string_units_length: None,
            string_length: None,
            colcard: None,
            high2key: None,
            low2key: None,
            avg_length: None,
            nb_quantiles: None,
            nb_most_freq: None,
            nb_nulls: None,
            pct_inlined: None,
            pct_encoded: None,
            redshift: None,
            formatter: Arc::clone(&ctx.formatter),
            listeners: Vec::new(),
        }
    }

    /// Build a column from one catalog row.
    ///
    /// Missing or malformed fields decode to defaults. An unresolvable type
    /// name is logged and kept as raw text. Only a failing schema lookup is
    /// returned as an error.
    pub fn from_row(table: &TableRef, row: &CatalogRow, ctx: &BuildContext<'_>) -> Result<Self> {
        let mut column = Self::empty(table, ctx, true);

        column.name = row.get_string(COL_NAME).unwrap_or_default();
        column.ordinal_position = row.get_int(COL_NO);
        column.required = row.get_flag(COL_NULLS, YesNo::No.code());
        column.default_value = row.get_string(COL_DEFAULT);
        column.max_length = row.get_long(COL_LENGTH).unwrap_or(0);
        column.scale = row.get_integer(COL_SCALE);

        column.hidden = row.get_enum(COL_HIDDEN);
        column.identity = row.get_flag(COL_IDENTITY, YesNo::Yes.code());
        column.lob_compact = row.get_flag(COL_COMPACT, YesNo::Yes.code());
        column.generated = row.get_enum(COL_GENERATED);
        column.generated_text = row.get_string(COL_TEXT);
        column.compress = row.get_enum(COL_COMPRESS);
        column.colcard = row.get_long(COL_COLCARD);
        column.high2key = row.get_string(COL_HIGH2KEY);
        column.low2key = row.get_string(COL_LOW2KEY);
        column.avg_length = row.get_integer(COL_AVG_LENGTH);
        column.nb_nulls = row.get_long(COL_NUM_NULLS);
        column.key_seq = row.get_integer(COL_KEY_SEQ);
        column.part_key_seq = row.get_integer(COL_PART_KEY_SEQ);
        column.description = row.get_string(COL_REMARKS);
        column.code_page = row.get_int(COL_CODE_PAGE);

        for gate in &VERSION_GATES {
            if (gate.applies)(ctx.version) {
                trace!("Column {}: reading {} fields", column.name, gate.name);
                (gate.populate)(&mut column, row);
            }
        }

        column.hidden_state = column.hidden.is_some_and(|h| h.is_hidden());

        if ctx.dialect == Dialect::Redshift {
            column.type_mod = row.get_integer(COL_RS_TYPE_MOD).unwrap_or(UNKNOWN_TYPE_MOD);
            column.redshift = Some(RedshiftAttributes {
                encoding: row.get_string(COL_RS_ENCODING),
                dist_key: row.get_bool(COL_RS_DIST_KEY),
                sort_key: row.get_int(COL_RS_SORT_KEY),
            });
        }

        let type_name = row.get_string(COL_TYPE_NAME).unwrap_or_default();
        column.resolve_type(&type_name, row, ctx)?;

        Ok(column)
    }

    /// Look up the declared type: type cache first, then the user-defined
    /// types of the row's type schema.
    fn resolve_type(
        &mut self,
        type_name: &str,
        row: &CatalogRow,
        ctx: &BuildContext<'_>,
    ) -> Result<()> {
        if let Some(data_type) = ctx.types.get(type_name) {
            self.apply_data_type(data_type, TypeResolution::Cached);
            return Ok(());
        }

        let schema_name = row.get_string_trimmed(COL_TYPE_SCHEMA).unwrap_or_default();
        if !schema_name.is_empty() {
            if let Some(schema) = ctx.schemas.schema(&schema_name)? {
                self.type_schema = Some(schema.name.clone());
                if let Some(udt) = schema.get_udt(type_name) {
                    self.apply_data_type(udt, TypeResolution::UserDefined);
                    return Ok(());
                }
            }
        }

        debug!(
            "Data type '{}' of column {}.{} wasn't resolved",
            type_name, self.table, self.name
        );
        self.data_type = None;
        self.type_name = type_name.to_string();
        self.value_type = SQL_TYPE_OTHER;
        self.type_resolution = TypeResolution::Unresolved;
        Ok(())
    }

    fn apply_data_type(&mut self, data_type: Arc<DataType>, resolution: TypeResolution) {
        self.type_schema = data_type.schema.clone();
        self.type_name = data_type.fully_qualified_name();
        self.value_type = data_type.type_id;
        self.type_resolution = resolution;
        self.data_type = Some(data_type);
    }

    /// Create a template for a new, not yet persisted column of `table`.
    ///
    /// Uses the default type from the options. If that type is not cached
    /// the type is left unset, unless `strict_default_type` is enabled.
    pub fn blank(table: &TableRef, ctx: &BuildContext<'_>) -> Result<Self> {
        let mut column = Self::empty(table, ctx, false);
        column.max_length = ctx.options.default_max_length;
        column.ordinal_position = UNRESOLVED_ORDINAL;
        column.required = false;

        let default_type = &ctx.options.default_type_name;
        match ctx.types.get(default_type) {
            Some(data_type) => column.apply_data_type(data_type, TypeResolution::Cached),
            None if ctx.options.strict_default_type => {
                return Err(Error::DefaultTypeMissing {
                    type_name: default_type.clone(),
                })
            }
            None => debug!(
                "Default data type '{}' not cached, new column in {} has no type",
                default_type, table
            ),
        }
        Ok(column)
    }

    /// Value classification of this column.
    ///
    /// DB2 character columns with code page 0 are `FOR BIT DATA` and hold
    /// binary content, whatever their declared type says. A NULL code page
    /// reads as 0.
    pub fn data_kind(&self) -> DataKind {
        let Some(data_type) = &self.data_type else {
            return DataKind::Unknown;
        };
        let bit_data = self.dialect == Dialect::Db2 && self.code_page == 0;
        if bit_data && data_type.kind == DataKind::String {
            return DataKind::Content;
        }
        data_type.kind
    }

    /// Replace the data type and notify listeners.
    pub fn set_data_type(&mut self, data_type: Arc<DataType>) {
        let old = self.data_type.take();
        for listener in &self.listeners {
            listener.on_data_type_changed(&self.name, old.as_deref(), &data_type);
        }
        let resolution = if data_type.is_system() {
            TypeResolution::Cached
        } else {
            TypeResolution::UserDefined
        };
        self.apply_data_type(data_type, resolution);
        if let Some(data_type) = &self.data_type {
            self.type_name = data_type.name.clone();
        }
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn set_default_value(&mut self, default_value: Option<String>) {
        self.default_value = default_value;
    }

    pub fn set_max_length(&mut self, max_length: i64) {
        self.max_length = max_length;
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Register a listener for edits.
    pub fn add_listener(&mut self, listener: Arc<dyn ColumnListener>) {
        self.listeners.push(listener);
    }

    /// Type name with length, scale or dialect modifiers.
    pub fn full_type_name(&self) -> String {
        self.formatter.full_type_name(self)
    }

    /// Whether INSERT statements must leave this column out.
    ///
    /// Only GENERATED ALWAYS columns qualify; BY DEFAULT columns accept
    /// explicit values.
    pub fn is_auto_generated(&self) -> bool {
        self.generated == Some(GeneratedKind::Always)
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden_state
    }

    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    pub fn table(&self) -> &TableRef {
        &self.table
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ordinal_position(&self) -> i32 {
        self.ordinal_position
    }

    /// Whether the column is NOT NULL.
    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn max_length(&self) -> i64 {
        self.max_length
    }

    pub fn scale(&self) -> Option<i32> {
        self.scale
    }

    pub fn precision(&self) -> Option<i32> {
        self.precision
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn data_type(&self) -> Option<&Arc<DataType>> {
        self.data_type.as_ref()
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// SQL type code, `SQL_TYPE_OTHER` when unresolved.
    pub fn value_type(&self) -> i32 {
        self.value_type
    }

    pub fn type_schema(&self) -> Option<&str> {
        self.type_schema.as_deref()
    }

    pub fn type_resolution(&self) -> TypeResolution {
        self.type_resolution
    }

    /// Dialect type modifier, -1 if unknown.
    pub fn type_mod(&self) -> i32 {
        self.type_mod
    }

    pub fn hidden(&self) -> Option<HiddenState> {
        self.hidden
    }

    pub fn identity(&self) -> bool {
        self.identity
    }

    pub fn lob_compact(&self) -> bool {
        self.lob_compact
    }

    pub fn generated(&self) -> Option<GeneratedKind> {
        self.generated
    }

    pub fn generated_text(&self) -> Option<&str> {
        self.generated_text.as_deref()
    }

    pub fn compress(&self) -> Option<Compression> {
        self.compress
    }

    pub fn code_page(&self) -> i32 {
        self.code_page
    }

    pub fn key_seq(&self) -> Option<i32> {
        self.key_seq
    }

    pub fn part_key_seq(&self) -> Option<i32> {
        self.part_key_seq
    }

    pub fn collation_schema(&self) -> Option<&str> {
        self.collation_schema.as_deref()
    }

    pub fn collation_name(&self) -> Option<&str> {
        self.collation_name.as_deref()
    }

    pub fn row_begin(&self) -> Option<&str> {
        self.row_begin.as_deref()
    }

    pub fn row_end(&self) -> Option<&str> {
        self.row_end.as_deref()
    }

    pub fn transaction_start_id(&self) -> Option<&str> {
        self.transaction_start_id.as_deref()
    }

    pub fn type_string_units(&self) -> Option<&str> {
        self.type_string_units.as_deref()
    }

    pub fn string_units_length(&self) -> Option<i32> {
        self.string_units_length
    }

    /// String length with units (e.g. `"20 OCTETS"`).
    ///
    /// `Some("")` when the server reports no units, `None` on servers
    /// without string units.
    pub fn string_length(&self) -> Option<&str> {
        self.string_length.as_deref()
    }

    pub fn colcard(&self) -> Option<i64> {
        self.colcard
    }

    pub fn high2key(&self) -> Option<&str> {
        self.high2key.as_deref()
    }

    pub fn low2key(&self) -> Option<&str> {
        self.low2key.as_deref()
    }

    pub fn avg_length(&self) -> Option<i32> {
        self.avg_length
    }

    pub fn nb_quantiles(&self) -> Option<i32> {
        self.nb_quantiles
    }

    pub fn nb_most_freq(&self) -> Option<i32> {
        self.nb_most_freq
    }

    pub fn nb_nulls(&self) -> Option<i64> {
        self.nb_nulls
    }

    pub fn pct_inlined(&self) -> Option<i32> {
        self.pct_inlined
    }

    pub fn pct_encoded(&self) -> Option<i32> {
        self.pct_encoded
    }

    pub fn redshift(&self) -> Option<&RedshiftAttributes> {
        self.redshift.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::cache::{Schema, SchemaMap};
    use crate::catalog::types::CatalogValue;
    use crate::catalog::version::FeatureFlags;
    use std::sync::Mutex;

    fn table() -> TableRef {
        TableRef::new("APP", "ORDERS")
    }

    fn base_row(type_name: &str) -> Vec<(&'static str, CatalogValue)> {
        vec![
            (COL_NAME, "AMOUNT".into()),
            (COL_NO, 3.into()),
            (COL_NULLS, "N".into()),
            (COL_DEFAULT, CatalogValue::Null),
            (COL_LENGTH, 12.into()),
            (COL_SCALE, 2.into()),
            (COL_TYPE_NAME, type_name.into()),
            (COL_TYPE_SCHEMA, "APP     ".into()),
            (COL_CODE_PAGE, 1208.into()),
        ]
    }

    fn schemas() -> SchemaMap {
        SchemaMap::new().with_schema(Schema::new("APP").with_udt(DataType::user_defined(
            "APP",
            "MONEY",
            SQL_TYPE_DECIMAL,
            DataKind::Numeric,
        )))
    }

    #[test]
    fn test_cached_type() {
        let types = DataTypeCache::db2_builtins();
        let schemas = schemas();
        let caps = FeatureFlags::none();
        let ctx = BuildContext::new(&types, &schemas, &caps);

        let row = CatalogRow::from_pairs(base_row("DECIMAL"));
        let col = TableColumn::from_row(&table(), &row, &ctx).unwrap();

        assert_eq!(col.name(), "AMOUNT");
        assert_eq!(col.ordinal_position(), 3);
        assert!(col.is_required());
        assert_eq!(col.max_length(), 12);
        assert_eq!(col.scale(), Some(2));
        assert_eq!(col.type_resolution(), TypeResolution::Cached);
        assert!(Arc::ptr_eq(col.data_type().unwrap(), &types.get("DECIMAL").unwrap()));
        assert_eq!(col.type_schema(), Some(SYSTEM_TYPE_SCHEMA));
        assert_eq!(col.value_type(), SQL_TYPE_DECIMAL);
        assert!(col.is_persisted());
    }

    #[test]
    fn test_user_defined_type() {
        let types = DataTypeCache::db2_builtins();
        let schemas = schemas();
        let caps = FeatureFlags::none();
        let ctx = BuildContext::new(&types, &schemas, &caps);

        let row = CatalogRow::from_pairs(base_row("MONEY"));
        let col = TableColumn::from_row(&table(), &row, &ctx).unwrap();

        assert_eq!(col.type_resolution(), TypeResolution::UserDefined);
        assert_eq!(col.data_type().unwrap().name, "MONEY");
        assert_eq!(col.type_schema(), Some("APP"));
        assert_eq!(col.type_name(), "APP.MONEY");
        assert_eq!(col.data_kind(), DataKind::Numeric);
    }

    #[test]
    fn test_unresolved_type() {
        let types = DataTypeCache::db2_builtins();
        let schemas = schemas();
        let caps = FeatureFlags::none();
        let ctx = BuildContext::new(&types, &schemas, &caps);

        let row = CatalogRow::from_pairs(base_row("XMLSOMETHING"));
        let col = TableColumn::from_row(&table(), &row, &ctx).unwrap();

        assert_eq!(col.type_resolution(), TypeResolution::Unresolved);
        assert!(col.data_type().is_none());
        assert_eq!(col.type_name(), "XMLSOMETHING");
        assert_eq!(col.value_type(), SQL_TYPE_OTHER);
        assert_eq!(col.data_kind(), DataKind::Unknown);
    }

    #[test]
    fn test_unknown_schema_is_unresolved() {
        let types = DataTypeCache::new();
        let schemas = SchemaMap::new();
        let caps = FeatureFlags::none();
        let ctx = BuildContext::new(&types, &schemas, &caps);

        let row = CatalogRow::from_pairs(base_row("MONEY"));
        let col = TableColumn::from_row(&table(), &row, &ctx).unwrap();
        assert_eq!(col.type_resolution(), TypeResolution::Unresolved);
        assert_eq!(col.type_schema(), None);
    }

    #[test]
    fn test_schema_lookup_failure_propagates() {
        let types = DataTypeCache::new();
        let schemas = |name: &str| -> Result<Option<Arc<Schema>>> {
            Err(Error::schema_lookup(name, "catalog unavailable"))
        };
        let caps = FeatureFlags::none();
        let ctx = BuildContext::new(&types, &schemas, &caps);

        let row = CatalogRow::from_pairs(base_row("MONEY"));
        match TableColumn::from_row(&table(), &row, &ctx) {
            Err(Error::SchemaLookup { schema, .. }) => assert_eq!(schema, "APP"),
            other => panic!("Expected SchemaLookup error, got {:?}", other),
        }
    }

    #[test]
    fn test_for_bit_data_is_content() {
        let types = DataTypeCache::db2_builtins();
        let schemas = SchemaMap::new();
        let caps = FeatureFlags::none();
        let ctx = BuildContext::new(&types, &schemas, &caps);

        let mut pairs = base_row("VARCHAR");
        pairs.retain(|(k, _)| *k != COL_CODE_PAGE);
        pairs.push((COL_CODE_PAGE, 0.into()));
        let col = TableColumn::from_row(&table(), &CatalogRow::from_pairs(pairs), &ctx).unwrap();
        assert_eq!(col.data_kind(), DataKind::Content);

        let col = TableColumn::from_row(
            &table(),
            &CatalogRow::from_pairs(base_row("VARCHAR")),
            &ctx,
        )
        .unwrap();
        assert_eq!(col.data_kind(), DataKind::String);
    }

    #[test]
    fn test_null_code_page_is_bit_data() {
        let types = DataTypeCache::db2_builtins();
        let schemas = SchemaMap::new();
        let caps = FeatureFlags::all();
        let ctx = BuildContext::new(&types, &schemas, &caps);

        let mut pairs = base_row("VARCHAR");
        pairs.retain(|(k, _)| *k != COL_CODE_PAGE);
        pairs.push((COL_CODE_PAGE, CatalogValue::Null));
        let col = TableColumn::from_row(&table(), &CatalogRow::from_pairs(pairs), &ctx).unwrap();
        assert_eq!(col.code_page(), 0);
        assert_eq!(col.data_kind(), DataKind::Content);

        let mut pairs = base_row("VARCHAR");
        pairs.retain(|(k, _)| *k != COL_CODE_PAGE);
        let col = TableColumn::from_row(&table(), &CatalogRow::from_pairs(pairs), &ctx).unwrap();
        assert_eq!(col.data_kind(), DataKind::Content);
    }

    #[test]
    fn test_redshift_ignores_code_page() {
        let mut types = DataTypeCache::new();
        types.insert(DataType::new("varchar", SQL_TYPE_VARCHAR));
        let schemas = SchemaMap::new();
        let caps = FeatureFlags::none();
        let ctx = BuildContext::new(&types, &schemas, &caps).with_dialect(Dialect::Redshift);

        let row = CatalogRow::from_pairs([(COL_NAME, "NOTE"), (COL_TYPE_NAME, "varchar")]);
        let col = TableColumn::from_row(&table(), &row, &ctx).unwrap();
        assert_eq!(col.code_page(), 0);
        assert_eq!(col.data_kind(), DataKind::String);
    }

    #[test]
    fn test_integer_with_zero_code_page_stays_numeric() {
        let types = DataTypeCache::db2_builtins();
        let schemas = SchemaMap::new();
        let caps = FeatureFlags::none();
        let ctx = BuildContext::new(&types, &schemas, &caps);

        let row = CatalogRow::from_pairs([
            (COL_NAME, CatalogValue::from("ID")),
            (COL_TYPE_NAME, "INTEGER".into()),
            (COL_CODE_PAGE, 0.into()),
            (COL_HIDDEN, CatalogValue::Null),
            (COL_GENERATED, CatalogValue::Null),
        ]);
        let col = TableColumn::from_row(&table(), &row, &ctx).unwrap();
        assert_eq!(col.data_kind(), DataKind::Numeric);
        assert!(!col.is_hidden());
        assert!(!col.is_auto_generated());
    }

    #[test]
    fn test_hidden_and_generated() {
        let types = DataTypeCache::db2_builtins();
        let schemas = SchemaMap::new();
        let caps = FeatureFlags::none();
        let ctx = BuildContext::new(&types, &schemas, &caps);

        let row = CatalogRow::from_pairs([
            (COL_NAME, CatalogValue::from("SYS_START")),
            (COL_TYPE_NAME, "TIMESTAMP".into()),
            (COL_HIDDEN, "I".into()),
            (COL_GENERATED, "A".into()),
            (COL_TEXT, "AS ROW BEGIN".into()),
            (COL_IDENTITY, "N".into()),
        ]);
        let col = TableColumn::from_row(&table(), &row, &ctx).unwrap();
        assert!(col.is_hidden());
        assert_eq!(col.hidden(), Some(HiddenState::Implicit));
        assert!(col.is_auto_generated());
        assert_eq!(col.generated_text(), Some("AS ROW BEGIN"));
        assert!(!col.identity());

        let row = CatalogRow::from_pairs([(COL_GENERATED, "D"), (COL_IDENTITY, "Y")]);
        let col = TableColumn::from_row(&table(), &row, &ctx).unwrap();
        assert_eq!(col.generated(), Some(GeneratedKind::ByDefault));
        assert!(!col.is_auto_generated());
        assert!(col.identity());
    }

    #[test]
    fn test_version_gates_closed_leave_fields_absent() {
        let types = DataTypeCache::db2_builtins();
        let schemas = SchemaMap::new();
        let caps = FeatureFlags::none();
        let ctx = BuildContext::new(&types, &schemas, &caps);

        let mut pairs = base_row("VARCHAR");
        pairs.extend([
            (COL_N_QUANTILES, 20.into()),
            (COL_PCT_INLINED, 0.into()),
            (COL_ROW_BEGIN, "N".into()),
            (COL_TYPE_STRING_UNITS, "OCTETS".into()),
            (COL_STRING_UNITS_LENGTH, 12.into()),
        ]);
        let col = TableColumn::from_row(&table(), &CatalogRow::from_pairs(pairs), &ctx).unwrap();
        assert_eq!(col.nb_quantiles(), None);
        assert_eq!(col.pct_inlined(), None);
        assert_eq!(col.row_begin(), None);
        assert_eq!(col.type_string_units(), None);
        assert_eq!(col.string_length(), None);
    }

    #[test]
    fn test_version_gates_open() {
        let types = DataTypeCache::db2_builtins();
        let schemas = SchemaMap::new();
        let caps = FeatureFlags::all();
        let ctx = BuildContext::new(&types, &schemas, &caps);

        let mut pairs = base_row("VARCHAR");
        pairs.extend([
            (COL_COLLATION_SCHEMA, "SYSIBM  ".into()),
            (COL_COLLATION_NAME, "IDENTITY".into()),
            (COL_N_QUANTILES, 20.into()),
            (COL_N_MOST_FREQ, 10.into()),
            (COL_PCT_INLINED, 0.into()),
            (COL_ROW_BEGIN, "N".into()),
            (COL_ROW_END, "N".into()),
            (COL_TRANSACTION_START_ID, "N ".into()),
            (COL_TYPE_STRING_UNITS, "OCTETS".into()),
            (COL_STRING_UNITS_LENGTH, 12.into()),
            (COL_PCT_ENCODED, (-1).into()),
        ]);
        let col = TableColumn::from_row(&table(), &CatalogRow::from_pairs(pairs), &ctx).unwrap();
        assert_eq!(col.collation_schema(), Some("SYSIBM"));
        assert_eq!(col.collation_name(), Some("IDENTITY"));
        assert_eq!(col.nb_quantiles(), Some(20));
        assert_eq!(col.nb_most_freq(), Some(10));
        assert_eq!(col.pct_inlined(), Some(0));
        assert_eq!(col.row_begin(), Some("N"));
        assert_eq!(col.transaction_start_id(), Some("N"));
        assert_eq!(col.string_length(), Some("12 OCTETS"));
        assert_eq!(col.pct_encoded(), Some(-1));
    }

    #[test]
    fn test_string_length_without_units() {
        let types = DataTypeCache::db2_builtins();
        let schemas = SchemaMap::new();
        let caps = FeatureFlags::all();
        let ctx = BuildContext::new(&types, &schemas, &caps);

        let col = TableColumn::from_row(
            &table(),
            &CatalogRow::from_pairs(base_row("INTEGER")),
            &ctx,
        )
        .unwrap();
        assert_eq!(col.string_length(), Some(""));
    }

    #[test]
    fn test_string_length_with_null_units_length() {
        let types = DataTypeCache::db2_builtins();
        let schemas = SchemaMap::new();
        let caps = FeatureFlags::all();
        let ctx = BuildContext::new(&types, &schemas, &caps);

        let mut pairs = base_row("VARCHAR");
        pairs.extend([
            (COL_TYPE_STRING_UNITS, "OCTETS  ".into()),
            (COL_STRING_UNITS_LENGTH, CatalogValue::Null),
        ]);
        let col = TableColumn::from_row(&table(), &CatalogRow::from_pairs(pairs), &ctx).unwrap();
        assert_eq!(col.type_string_units(), Some("OCTETS"));
        assert_eq!(col.string_units_length(), None);
        assert_eq!(col.string_length(), Some("OCTETS"));
    }

    #[test]
    fn test_empty_row_is_defaulted() {
        let types = DataTypeCache::new();
        let schemas = SchemaMap::new();
        let caps = FeatureFlags::all();
        let ctx = BuildContext::new(&types, &schemas, &caps);

        let row = CatalogRow::from_pairs(Vec::<(&str, CatalogValue)>::new());
        let col = TableColumn::from_row(&table(), &row, &ctx).unwrap();
        assert_eq!(col.name(), "");
        assert_eq!(col.ordinal_position(), 0);
        assert!(!col.is_required());
        assert_eq!(col.max_length(), 0);
        assert_eq!(col.scale(), None);
        assert_eq!(col.colcard(), None);
        assert_eq!(col.code_page(), 0);
        assert_eq!(col.type_resolution(), TypeResolution::Unresolved);
    }

    #[test]
    fn test_blank_column() {
        let types = DataTypeCache::db2_builtins();
        let schemas = SchemaMap::new();
        let caps = FeatureFlags::none();
        let ctx = BuildContext::new(&types, &schemas, &caps);

        let col = TableColumn::blank(&table(), &ctx).unwrap();
        assert_eq!(col.ordinal_position(), -1);
        assert_eq!(col.max_length(), 50);
        assert!(!col.is_required());
        assert!(!col.is_persisted());
        assert_eq!(col.data_type().unwrap().name, "VARCHAR");
        assert_eq!(col.type_name(), "VARCHAR");
        assert_eq!(col.code_page(), 0);
        assert_eq!(col.data_kind(), DataKind::Content);
    }

    #[test]
    fn test_blank_column_without_default_type() {
        let types = DataTypeCache::new();
        let schemas = SchemaMap::new();
        let caps = FeatureFlags::none();
        let ctx = BuildContext::new(&types, &schemas, &caps);

        let col = TableColumn::blank(&table(), &ctx).unwrap();
        assert!(col.data_type().is_none());
        assert_eq!(col.max_length(), 50);

        let strict = ctx.with_options(CatalogOptions::new().with_strict_default_type(true));
        match TableColumn::blank(&table(), &strict) {
            Err(Error::DefaultTypeMissing { type_name }) => assert_eq!(type_name, "VARCHAR"),
            other => panic!("Expected DefaultTypeMissing, got {:?}", other),
        }
    }

    #[derive(Debug, Default)]
    struct RecordingListener {
        events: Mutex<Vec<(String, Option<String>, String)>>,
    }

    impl ColumnListener for RecordingListener {
        fn on_data_type_changed(&self, column: &str, old: Option<&DataType>, new: &DataType) {
            self.events.lock().unwrap().push((
                column.to_string(),
                old.map(|t| t.name.clone()),
                new.name.clone(),
            ));
        }
    }

    #[test]
    fn test_set_data_type_notifies() {
        let types = DataTypeCache::db2_builtins();
        let schemas = schemas();
        let caps = FeatureFlags::none();
        let ctx = BuildContext::new(&types, &schemas, &caps);

        let mut col =
            TableColumn::from_row(&table(), &CatalogRow::from_pairs(base_row("DECIMAL")), &ctx)
                .unwrap();
        let listener = Arc::new(RecordingListener::default());
        col.add_listener(listener.clone());

        let money = schemas.schema("APP").unwrap().unwrap().get_udt("MONEY").unwrap();
        col.set_data_type(money);

        assert_eq!(col.type_name(), "MONEY");
        assert_eq!(col.type_schema(), Some("APP"));
        assert_eq!(col.type_resolution(), TypeResolution::UserDefined);
        let events = listener.events.lock().unwrap();
        assert_eq!(
            *events,
            vec![(
                "AMOUNT".to_string(),
                Some("DECIMAL".to_string()),
                "MONEY".to_string()
            )]
        );
    }

    #[test]
    fn test_editable_fields() {
        let types = DataTypeCache::db2_builtins();
        let schemas = SchemaMap::new();
        let caps = FeatureFlags::none();
        let ctx = BuildContext::new(&types, &schemas, &caps);

        let mut col = TableColumn::blank(&table(), &ctx).unwrap();
        col.set_description(Some("Order total".to_string()));
        col.set_default_value(Some("0".to_string()));
        col.set_max_length(120);
        col.set_required(true);

        assert_eq!(col.description(), Some("Order total"));
        assert_eq!(col.default_value(), Some("0"));
        assert_eq!(col.max_length(), 120);
        assert!(col.is_required());
    }
}
