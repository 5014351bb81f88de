//! Column definitions.
//!
//! - `ColDef`: a complete column definition with its behavior hooks
//! - `ColDefPatch`: a partial definition, the unit of layered merging
//! - `ColumnLookup`: column definitions keyed by field
//! - comparators shared by the built-in column types

mod col_def;
mod comparator;
mod lookup;

pub use col_def::{
    ColDef, ColDefPatch, ColumnAlign, RenderCellFn, SortComparatorFn, ValueGetterFn,
    DEFAULT_COLUMN_MIN_WIDTH, DEFAULT_COLUMN_WIDTH,
};
pub use comparator::{compare_nil, number_comparator, string_number_comparator, value_comparator};
pub use lookup::ColumnLookup;
