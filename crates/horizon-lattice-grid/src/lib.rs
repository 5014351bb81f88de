//! Data grid columns for Horizon Lattice.
//!
//! This crate holds the column logic of the data grid, independent of any
//! rendering:
//!
//! - **Column definitions**: `ColDef` with its render, value, sort and filter
//!   hooks, and `ColDefPatch` for layered overrides
//! - **Row grouping columns**: synthesized columns that show group rows and
//!   their leaves, borrowing sort and filter rules from the grouped columns
//! - **Filter operators**: typed operator lists for string, numeric and
//!   boolean columns
//! - **Row proxy**: a sort and filter pass driving column hooks over rows
//! - **Locale text**: replaceable user-visible strings, loadable from TOML or
//!   JSON
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_lattice_grid::prelude::*;
//!
//! let lookup = ColumnLookup::from_columns([
//!     ColDef::string("company").with_header_name("Company"),
//!     ColDef::string("name").with_header_name("Name"),
//! ]);
//! let model = vec!["company".to_string()];
//! let config = GroupingColDefOverride::new().with_leaf_field("name");
//!
//! let columns = create_grouping_columns(
//!     &lookup,
//!     &model,
//!     GroupingColumnMode::Single,
//!     Some(&config),
//!     &LocaleText::default(),
//! )?;
//! let group_column = &columns[0];
//!
//! let snapshot = GridSnapshot::new()
//!     .with_grouping_model(["company"])
//!     .with_row(RowNode::group("acme", "company", "Acme"), Vec::<(String, CellValue)>::new())
//!     .with_row(RowNode::leaf(1).with_parent("acme"), [("name", CellValue::from("Ada"))]);
//! let rows = snapshot.row_ids().to_vec();
//!
//! let proxy = RowProxy::new(Arc::new(snapshot), rows);
//! proxy.sort_by_column(group_column, SortDirection::Asc);
//! assert_eq!(proxy.visible_rows(), [RowId::from(1), RowId::from("acme")]);
//! # Ok::<(), horizon_lattice_grid::GridError>(())
//! ```

pub mod filter;
pub mod grouping;
pub mod locale;
pub mod logging;

mod api;
mod column;
mod error;
mod proxy;
mod render;
mod row;
mod value;

pub use api::{CellParams, GridApi, GridSnapshot, ValueGetterParams};
pub use column::{
    compare_nil, number_comparator, string_number_comparator, value_comparator, ColDef,
    ColDefPatch, ColumnAlign, ColumnLookup, RenderCellFn, SortComparatorFn, ValueGetterFn,
    DEFAULT_COLUMN_MIN_WIDTH, DEFAULT_COLUMN_WIDTH,
};
pub use error::{GridError, Result};
pub use proxy::{RowProxy, SortDirection};
pub use render::{GroupingCriteriaCell, LeafCell, RenderedCell};
pub use row::{RowEditStartReason, RowEditStopReason, RowId, RowNode, RowParams, RowSpacing};
pub use value::{parse_loose_number, CellValue};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::api::{CellParams, GridApi, GridSnapshot, ValueGetterParams};
    pub use crate::column::{ColDef, ColDefPatch, ColumnLookup};
    pub use crate::filter::{
        grid_boolean_operators, grid_numeric_operators, grid_string_operators, FilterItem,
        FilterOperator, FilterValue,
    };
    pub use crate::grouping::{
        create_grouping_col_def_for_all_criteria, create_grouping_col_def_for_one_criteria,
        create_grouping_columns, AllCriteriaParams, GroupingColDefOverride, GroupingColumnMode,
        OneCriteriaParams,
    };
    pub use crate::locale::{LocaleText, LocaleTextLookup};
    pub use crate::proxy::{RowProxy, SortDirection};
    pub use crate::render::RenderedCell;
    pub use crate::row::{RowId, RowNode};
    pub use crate::value::CellValue;
}
