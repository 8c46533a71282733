//! Building all columns of a table from a catalog result.
//!
//! The catalog query itself runs elsewhere; these helpers take rows that
//! are already materialized, either as a slice or as a stream.

use futures::Stream;

use crate::catalog::types::CatalogRow;
use crate::column::{BuildContext, TableColumn, TableRef};
use crate::error::Result;

/// Build one column per row, ordered by ordinal position.
///
/// Stops at the first construction error.
pub fn build_columns<'r, I>(
    table: &TableRef,
    rows: I,
    ctx: &BuildContext<'_>,
) -> Result<Vec<TableColumn>>
where
    I: IntoIterator<Item = &'r CatalogRow>,
{
    let mut columns = rows
        .into_iter()
        .map(|row| TableColumn::from_row(table, row, ctx))
        .collect::<Result<Vec<_>>>()?;
    columns.sort_by_key(TableColumn::ordinal_position);
    Ok(columns)
}

/// Extension trait for turning a stream of catalog rows into columns.
///
/// # Example
///
/// ```
/// use db2_catalog_rs::{
///     BuildContext, CatalogRow, ColumnStreamExt, DataTypeCache, FeatureFlags, SchemaMap,
///     TableRef,
/// };
/// use futures::stream::{self, TryStreamExt};
///
/// # futures::executor::block_on(async {
/// let types = DataTypeCache::db2_builtins();
/// let schemas = SchemaMap::new();
/// let caps = FeatureFlags::all();
/// let ctx = BuildContext::new(&types, &schemas, &caps);
///
/// let rows = vec![Ok(CatalogRow::from_pairs([("COLNAME", "ID"), ("TYPENAME", "INTEGER")]))];
/// let names: Vec<String> = stream::iter(rows)
///     .into_columns(TableRef::new("APP", "T"), ctx)
///     .map_ok(|col| col.name().to_string())
///     .try_collect()
///     .await?;
/// assert_eq!(names, vec!["ID"]);
/// # Ok::<(), db2_catalog_rs::Error>(())
/// # }).unwrap();
/// ```
pub trait ColumnStreamExt: Stream<Item = Result<CatalogRow>> + Sized {
    /// Map each row to a column. Row errors pass through unchanged.
    fn into_columns<'a>(
        self,
        table: TableRef,
        ctx: BuildContext<'a>,
    ) -> impl Stream<Item = Result<TableColumn>> + 'a
    where
        Self: 'a;
}

impl<S> ColumnStreamExt for S
where
    S: Stream<Item = Result<CatalogRow>>,
{
    fn into_columns<'a>(
        self,
        table: TableRef,
        ctx: BuildContext<'a>,
    ) -> impl Stream<Item = Result<TableColumn>> + 'a
    where
        Self: 'a,
    {
        use futures::StreamExt;

        self.map(move |row| row.and_then(|row| TableColumn::from_row(&table, &row, &ctx)))
    }
}
