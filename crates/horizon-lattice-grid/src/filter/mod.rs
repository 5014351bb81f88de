//! Filter operators.
//!
//! An operator pairs a tag (`=`, `contains`, `isEmpty`, ...) with a factory
//! that turns a [`FilterItem`] into a predicate over cells. Factories return
//! `None` when the item does not carry a usable value; the grid then skips
//! that filter instead of hiding rows.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_grid::{CellParams, CellValue, ColDef, GridSnapshot, RowNode};
//! use horizon_lattice_grid::filter::{find_operator, grid_numeric_operators, FilterItem};
//!
//! let column = ColDef::number("price");
//! let operators = grid_numeric_operators();
//! let greater = find_operator(&operators, ">").unwrap();
//!
//! // Incomplete item: no predicate
//! assert!(greater.apply_filter_fn(&FilterItem::new("price", ">"), &column).is_none());
//!
//! let predicate = greater
//!     .apply_filter_fn(&FilterItem::new("price", ">").with_value(10), &column)
//!     .unwrap();
//! let snapshot = GridSnapshot::new();
//! let node = RowNode::leaf(1);
//! assert!(predicate(&CellParams::new(&snapshot, &node, "price", CellValue::Int(12))));
//! ```

mod boolean;
mod item;
mod numeric;
mod operator;
mod string;

pub use boolean::grid_boolean_operators;
pub use item::{FilterItem, FilterValue};
#[allow(deprecated)]
pub use numeric::{grid_numeric_column_operators, grid_numeric_operators, parse_numeric_value};
pub use operator::{
    find_operator, ApplyFilterFn, FilterInput, FilterOperator, GetApplyFilterFn, InputComponent,
};
pub use string::grid_string_operators;
