//! Catalog row and type model.

mod data_type;
mod dict;
mod row;
mod value;

pub use data_type::{DataKind, DataType};
pub use dict::{Compression, GeneratedKind, HiddenState, UnknownCode, YesNo};
pub use row::{CatalogRow, RowColumns};
pub use value::CatalogValue;
