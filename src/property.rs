//! Declarative property table for column descriptors.
//!
//! Property sheets and DDL editors read columns through this table instead
//! of per-field code: each entry names a property, where it is shown, whether
//! it can be edited, and how to read (and optionally write) it.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::catalog::constants::{
    CAT_COLLATION, CAT_OWNER, CAT_REDSHIFT, CAT_STATISTICS, CAT_TEMPORAL,
};
use crate::catalog::types::DataType;
use crate::column::TableColumn;
use crate::error::{Error, Result};

/// A property value as shown in a property sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Null,
    Text(String),
    Integer(i64),
    Bool(bool),
    DataType(Arc<DataType>),
}

impl PropertyValue {
    fn text(value: Option<&str>) -> Self {
        value.map_or(PropertyValue::Null, |s| PropertyValue::Text(s.to_string()))
    }

    fn int<T: Into<i64>>(value: Option<T>) -> Self {
        value.map_or(PropertyValue::Null, |v| PropertyValue::Integer(v.into()))
    }

    fn display<T: fmt::Display>(value: Option<T>) -> Self {
        value.map_or(PropertyValue::Null, |v| PropertyValue::Text(v.to_string()))
    }

    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Null => Ok(()),
            PropertyValue::Text(s) => f.write_str(s),
            PropertyValue::Integer(n) => write!(f, "{}", n),
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::DataType(t) => write!(f, "{}", t),
        }
    }
}

/// How a value is rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRenderer {
    Plain,
    /// Zero and negative numbers render empty (unset scale/precision).
    PositiveNumber,
}

impl ValueRenderer {
    pub fn render(&self, value: &PropertyValue) -> String {
        match (self, value) {
            (ValueRenderer::PositiveNumber, PropertyValue::Integer(n)) if *n <= 0 => String::new(),
            _ => value.to_string(),
        }
    }
}

type Getter = fn(&TableColumn) -> PropertyValue;
/// `Err` names the expected value shape.
type SetResult = std::result::Result<(), &'static str>;
type Setter = fn(&mut TableColumn, PropertyValue) -> SetResult;

/// One entry of the property table.
#[derive(Clone, Copy)]
pub struct PropertyDescriptor {
    /// Stable property id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Sort position in the property sheet.
    pub order: u32,
    /// Property sheet category, `None` for the main group.
    pub category: Option<&'static str>,
    /// Shown in the default view.
    pub viewable: bool,
    /// Editable on persisted columns (new columns only need `setter`).
    pub updatable: bool,
    /// Edited in a multi-line field.
    pub multiline: bool,
    pub renderer: ValueRenderer,
    /// Only present on Redshift columns.
    pub redshift_only: bool,
    getter: Getter,
    setter: Option<Setter>,
}

impl PropertyDescriptor {
    fn new(id: &'static str, name: &'static str, order: u32, getter: Getter) -> Self {
        Self {
            id,
            name,
            order,
            category: None,
            viewable: true,
            updatable: false,
            multiline: false,
            renderer: ValueRenderer::Plain,
            redshift_only: false,
            getter,
            setter: None,
        }
    }

    fn category(mut self, category: &'static str) -> Self {
        self.category = Some(category);
        self
    }

    fn hidden(mut self) -> Self {
        self.viewable = false;
        self
    }

    fn editable(mut self, setter: Setter) -> Self {
        self.setter = Some(setter);
        self
    }

    fn updatable(mut self) -> Self {
        self.updatable = true;
        self
    }

    fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    fn positive(mut self) -> Self {
        self.renderer = ValueRenderer::PositiveNumber;
        self
    }

    fn redshift(mut self) -> Self {
        self.redshift_only = true;
        self.category = Some(CAT_REDSHIFT);
        self
    }

    /// Whether the property can be edited on new columns.
    pub fn is_editable(&self) -> bool {
        self.setter.is_some()
    }

    /// Read the property from a column.
    pub fn get(&self, column: &TableColumn) -> PropertyValue {
        (self.getter)(column)
    }

    /// Read and render the property for display.
    pub fn render(&self, column: &TableColumn) -> String {
        self.renderer.render(&self.get(column))
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("id", &self.id)
            .field("order", &self.order)
            .field("category", &self.category)
            .field("viewable", &self.viewable)
            .field("editable", &self.is_editable())
            .field("updatable", &self.updatable)
            .finish()
    }
}

fn set_data_type(column: &mut TableColumn, value: PropertyValue) -> SetResult {
    match value {
        PropertyValue::DataType(t) => {
            column.set_data_type(t);
            Ok(())
        }
        _ => Err("data type"),
    }
}

fn set_max_length(column: &mut TableColumn, value: PropertyValue) -> SetResult {
    match value {
        PropertyValue::Integer(n) if n >= 0 => {
            column.set_max_length(n);
            Ok(())
        }
        _ => Err("non-negative integer"),
    }
}

fn set_required(column: &mut TableColumn, value: PropertyValue) -> SetResult {
    match value {
        PropertyValue::Bool(b) => {
            column.set_required(b);
            Ok(())
        }
        _ => Err("boolean"),
    }
}

fn optional_text(value: PropertyValue) -> std::result::Result<Option<String>, &'static str> {
    match value {
        PropertyValue::Null => Ok(None),
        PropertyValue::Text(s) => Ok(Some(s)),
        _ => Err("text or null"),
    }
}

fn set_default_value(column: &mut TableColumn, value: PropertyValue) -> SetResult {
    column.set_default_value(optional_text(value)?);
    Ok(())
}

fn set_description(column: &mut TableColumn, value: PropertyValue) -> SetResult {
    column.set_description(optional_text(value)?);
    Ok(())
}

fn build_table() -> Vec<PropertyDescriptor> {
    use PropertyDescriptor as P;
    use PropertyValue as V;

    let mut table = vec![
        P::new("name", "Name", 1, |c| V::Text(c.name().to_string())),
        P::new("ordinalPosition", "Position", 2, |c| {
            V::Integer(c.ordinal_position().into())
        }),
        P::new("owner", "Owner", 19, |c| V::Text(c.table().to_string())).category(CAT_OWNER),
        P::new("typeSchema", "Type Schema", 20, |c| V::text(c.type_schema())).category(CAT_OWNER),
        P::new("dataType", "Data Type", 21, |c| match c.data_type() {
            Some(t) => V::DataType(Arc::clone(t)),
            None => V::Text(c.type_name().to_string()),
        })
        .editable(set_data_type)
        .updatable(),
        P::new("maxLength", "Length", 38, |c| V::Integer(c.max_length()))
            .editable(set_max_length)
            .updatable(),
        P::new("scale", "Scale", 39, |c| V::int(c.scale())).positive(),
        P::new("stringLength", "String Length", 40, |c| V::text(c.string_length())),
        P::new("precision", "Precision", 42, |c| V::int(c.precision()))
            .hidden()
            .positive(),
        P::new("required", "Not Null", 43, |c| V::Bool(c.is_required()))
            .editable(set_required)
            .updatable(),
        P::new("defaultValue", "Default", 44, |c| V::text(c.default_value()))
            .editable(set_default_value),
        P::new("identity", "Identity", 45, |c| V::Bool(c.identity())),
        P::new("generated", "Generated", 46, |c| V::display(c.generated())).hidden(),
        P::new("generatedText", "Generated Text", 47, |c| V::text(c.generated_text())).hidden(),
        P::new("keySeq", "Key Sequence", 120, |c| V::int(c.key_seq())).hidden(),
        P::new("partKeySeq", "Partitioning Key Sequence", 121, |c| V::int(c.part_key_seq()))
            .hidden(),
        P::new("lobCompact", "LOB Compact", 134, |c| V::Bool(c.lob_compact())).hidden(),
        P::new("compress", "Compress", 136, |c| V::display(c.compress())).hidden(),
        P::new("hidden", "Hidden", 137, |c| V::display(c.hidden())).hidden(),
        P::new("rowBegin", "Row Begin", 138, |c| V::text(c.row_begin()))
            .hidden()
            .category(CAT_TEMPORAL),
        P::new("rowEnd", "Row End", 139, |c| V::text(c.row_end()))
            .hidden()
            .category(CAT_TEMPORAL),
        P::new("transactionStartId", "Transaction Start Id", 140, |c| {
            V::text(c.transaction_start_id())
        })
        .hidden()
        .category(CAT_TEMPORAL),
        P::new("colcard", "Cardinality", 150, |c| V::int(c.colcard()))
            .hidden()
            .category(CAT_STATISTICS),
        P::new("avgLength", "Average Length", 152, |c| V::int(c.avg_length()))
            .hidden()
            .category(CAT_STATISTICS),
        P::new("low2key", "Second Lowest Value", 153, |c| V::text(c.low2key()))
            .hidden()
            .category(CAT_STATISTICS),
        P::new("high2key", "Second Highest Value", 154, |c| V::text(c.high2key()))
            .hidden()
            .category(CAT_STATISTICS),
        P::new("pctInlined", "Percent Inlined", 155, |c| V::int(c.pct_inlined()))
            .hidden()
            .category(CAT_STATISTICS),
        P::new("pctEncoded", "Percent Encoded", 156, |c| V::int(c.pct_encoded()))
            .hidden()
            .category(CAT_STATISTICS),
        P::new("nbQuantiles", "Quantiles", 157, |c| V::int(c.nb_quantiles()))
            .hidden()
            .category(CAT_STATISTICS),
        P::new("nbMostFreq", "Most Frequent Values", 158, |c| V::int(c.nb_most_freq()))
            .hidden()
            .category(CAT_STATISTICS),
        P::new("nbNulls", "Nulls", 159, |c| V::int(c.nb_nulls()))
            .hidden()
            .category(CAT_STATISTICS),
        P::new("collationSchema", "Collation Schema", 180, |c| V::text(c.collation_schema()))
            .hidden()
            .category(CAT_COLLATION),
        P::new("collationName", "Collation Name", 181, |c| V::text(c.collation_name()))
            .hidden()
            .category(CAT_COLLATION),
        P::new("columnEncoding", "Encoding", 200, |c| {
            V::text(c.redshift().and_then(|r| r.encoding.as_deref()))
        })
        .redshift(),
        P::new("distKey", "Distribution Key", 201, |c| {
            V::Bool(c.redshift().is_some_and(|r| r.dist_key))
        })
        .hidden()
        .redshift(),
        P::new("sortKey", "Sort Key", 202, |c| {
            V::Integer(c.redshift().map_or(0, |r| r.sort_key).into())
        })
        .hidden()
        .redshift(),
        P::new("description", "Description", 999, |c| V::text(c.description()))
            .editable(set_description)
            .updatable()
            .multiline(),
    ];
    table.sort_by_key(|p| p.order);
    table
}

/// The column property table, ordered by `order`.
pub fn column_properties() -> &'static [PropertyDescriptor] {
    static TABLE: OnceLock<Vec<PropertyDescriptor>> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

/// Find a property by id.
pub fn find_property(id: &str) -> Option<&'static PropertyDescriptor> {
    column_properties().iter().find(|p| p.id == id)
}

/// Properties applicable to `column` with their current values, in order.
pub fn properties(column: &TableColumn) -> Vec<(&'static PropertyDescriptor, PropertyValue)> {
    column_properties()
        .iter()
        .filter(|p| !p.redshift_only || column.redshift().is_some())
        .map(|p| (p, p.get(column)))
        .collect()
}

/// Edit a property.
///
/// New columns accept any editable property; persisted columns only those
/// marked updatable.
pub fn set_property(column: &mut TableColumn, id: &str, value: PropertyValue) -> Result<()> {
    let descriptor = find_property(id).ok_or_else(|| Error::PropertyNotFound {
        id: id.to_string(),
    })?;
    let setter = match descriptor.setter {
        Some(setter) if !column.is_persisted() || descriptor.updatable => setter,
        _ => {
            return Err(Error::PropertyNotEditable {
                id: id.to_string(),
            })
        }
    };
    setter(column, value).map_err(|expected| Error::property_type(id, expected))
}
