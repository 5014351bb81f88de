//! Column definitions.
//!
//! A [`ColDef`] describes one displayable field: its size, capabilities and
//! the hooks that render, read, sort and filter its cells. A [`ColDefPatch`]
//! carries a subset of those properties and is the unit of layered merging:
//! patches are applied in order, each present property overwriting the
//! previous value.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::{CellParams, ValueGetterParams};
use crate::filter::{
    grid_boolean_operators, grid_numeric_operators, grid_string_operators, FilterOperator,
};
use crate::render::RenderedCell;
use crate::value::CellValue;

use super::comparator::{number_comparator, string_number_comparator, value_comparator};

/// Renders a cell.
pub type RenderCellFn = Arc<dyn Fn(&CellParams<'_>) -> RenderedCell + Send + Sync>;

/// Computes a cell value.
pub type ValueGetterFn = Arc<dyn Fn(&ValueGetterParams<'_>) -> CellValue + Send + Sync>;

/// Compares two cells of the same column: `(value1, value2, params1, params2)`.
pub type SortComparatorFn = Arc<
    dyn Fn(&CellValue, &CellValue, &CellParams<'_>, &CellParams<'_>) -> Ordering + Send + Sync,
>;

/// Default column width in pixels.
pub const DEFAULT_COLUMN_WIDTH: f64 = 100.0;

/// Default minimum column width in pixels.
pub const DEFAULT_COLUMN_MIN_WIDTH: f64 = 50.0;

/// Horizontal alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAlign {
    /// Align to the left edge.
    #[default]
    Left,
    /// Align to the center.
    Center,
    /// Align to the right edge.
    Right,
}

/// Definition of a grid column.
///
/// # Example
///
/// ```
/// use horizon_lattice_grid::ColDef;
///
/// let price = ColDef::number("price").with_header_name("Price").with_width(120.0);
/// assert_eq!(price.col_type, "number");
/// assert_eq!(price.header_name_or_field(), "Price");
/// assert!(price.filter_operators.is_some());
/// ```
#[derive(Clone)]
pub struct ColDef {
    /// Unique key of the column.
    pub field: String,
    /// Column type, e.g. `string` or `number`.
    pub col_type: String,
    /// Header text. Falls back to the field.
    pub header_name: Option<String>,
    /// Width in pixels.
    pub width: f64,
    /// Minimum width in pixels.
    pub min_width: f64,
    /// Whether the column can be sorted.
    pub sortable: bool,
    /// Whether the column can be filtered.
    pub filterable: bool,
    /// Whether cells can be edited.
    pub editable: bool,
    /// Whether rows can be grouped by this column.
    pub groupable: bool,
    /// Whether the column can be hidden.
    pub hideable: bool,
    /// Whether the column is fixed in place.
    pub disable_reorder: bool,
    /// Cell content alignment.
    pub align: ColumnAlign,
    /// Cell renderer. The view shows the value as text when unset.
    pub render_cell: Option<RenderCellFn>,
    /// Value getter. The raw cell value is used when unset.
    pub value_getter: Option<ValueGetterFn>,
    /// Sort comparator.
    pub sort_comparator: Option<SortComparatorFn>,
    /// Filter operators offered for this column.
    pub filter_operators: Option<Vec<FilterOperator>>,
}

impl ColDef {
    /// Creates a string column.
    pub fn string(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            col_type: "string".to_string(),
            header_name: None,
            width: DEFAULT_COLUMN_WIDTH,
            min_width: DEFAULT_COLUMN_MIN_WIDTH,
            sortable: true,
            filterable: true,
            editable: false,
            groupable: true,
            hideable: true,
            disable_reorder: false,
            align: ColumnAlign::Left,
            render_cell: None,
            value_getter: None,
            sort_comparator: Some(value_comparator(string_number_comparator)),
            filter_operators: Some(grid_string_operators()),
        }
    }

    /// Creates a number column.
    pub fn number(field: impl Into<String>) -> Self {
        Self {
            col_type: "number".to_string(),
            align: ColumnAlign::Right,
            sort_comparator: Some(value_comparator(number_comparator)),
            filter_operators: Some(grid_numeric_operators()),
            ..Self::string(field)
        }
    }

    /// Creates a boolean column.
    pub fn boolean(field: impl Into<String>) -> Self {
        Self {
            col_type: "boolean".to_string(),
            align: ColumnAlign::Center,
            filter_operators: Some(grid_boolean_operators()),
            ..Self::string(field)
        }
    }

    /// Sets the header name.
    pub fn with_header_name(mut self, header_name: impl Into<String>) -> Self {
        self.header_name = Some(header_name.into());
        self
    }

    /// Sets the width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the sortable flag.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets the filterable flag.
    pub fn with_filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Sets the editable flag.
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Sets the reorder lock.
    pub fn with_disable_reorder(mut self, disable_reorder: bool) -> Self {
        self.disable_reorder = disable_reorder;
        self
    }

    /// Sets the cell renderer.
    pub fn with_render_cell<F>(mut self, render_cell: F) -> Self
    where
        F: Fn(&CellParams<'_>) -> RenderedCell + Send + Sync + 'static,
    {
        self.render_cell = Some(Arc::new(render_cell));
        self
    }

    /// Sets the value getter.
    pub fn with_value_getter<F>(mut self, value_getter: F) -> Self
    where
        F: Fn(&ValueGetterParams<'_>) -> CellValue + Send + Sync + 'static,
    {
        self.value_getter = Some(Arc::new(value_getter));
        self
    }

    /// Sets the sort comparator.
    pub fn with_sort_comparator<F>(mut self, sort_comparator: F) -> Self
    where
        F: Fn(&CellValue, &CellValue, &CellParams<'_>, &CellParams<'_>) -> Ordering
            + Send
            + Sync
            + 'static,
    {
        self.sort_comparator = Some(Arc::new(sort_comparator));
        self
    }

    /// Sets the filter operators.
    pub fn with_filter_operators(mut self, filter_operators: Vec<FilterOperator>) -> Self {
        self.filter_operators = Some(filter_operators);
        self
    }

    /// Returns the header name, or the field when none is set.
    pub fn header_name_or_field(&self) -> &str {
        self.header_name.as_deref().unwrap_or(&self.field)
    }

    /// Computes the value of this column's cell in a row.
    ///
    /// Runs the value getter when set, otherwise reads the raw cell value.
    pub fn cell_value(&self, params: &ValueGetterParams<'_>) -> CellValue {
        match &self.value_getter {
            Some(value_getter) => value_getter(params),
            None => params.api.cell_value(params.id, params.field),
        }
    }

    /// Applies a patch, overwriting every property the patch carries.
    pub fn patched(mut self, patch: ColDefPatch) -> Self {
        let ColDefPatch {
            col_type,
            header_name,
            width,
            min_width,
            sortable,
            filterable,
            editable,
            groupable,
            hideable,
            disable_reorder,
            align,
            render_cell,
            value_getter,
            sort_comparator,
            filter_operators,
        } = patch;

        if let Some(col_type) = col_type {
            self.col_type = col_type;
        }
        if header_name.is_some() {
            self.header_name = header_name;
        }
        if let Some(width) = width {
            self.width = width;
        }
        if let Some(min_width) = min_width {
            self.min_width = min_width;
        }
        if let Some(sortable) = sortable {
            self.sortable = sortable;
        }
        if let Some(filterable) = filterable {
            self.filterable = filterable;
        }
        if let Some(editable) = editable {
            self.editable = editable;
        }
        if let Some(groupable) = groupable {
            self.groupable = groupable;
        }
        if let Some(hideable) = hideable {
            self.hideable = hideable;
        }
        if let Some(disable_reorder) = disable_reorder {
            self.disable_reorder = disable_reorder;
        }
        if let Some(align) = align {
            self.align = align;
        }
        if render_cell.is_some() {
            self.render_cell = render_cell;
        }
        if value_getter.is_some() {
            self.value_getter = value_getter;
        }
        if sort_comparator.is_some() {
            self.sort_comparator = sort_comparator;
        }
        if filter_operators.is_some() {
            self.filter_operators = filter_operators;
        }
        self
    }

    /// Folds patches over this definition, later patches winning.
    pub fn merged<I>(self, patches: I) -> Self
    where
        I: IntoIterator<Item = ColDefPatch>,
    {
        patches.into_iter().fold(self, ColDef::patched)
    }
}

impl fmt::Debug for ColDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColDef")
            .field("field", &self.field)
            .field("col_type", &self.col_type)
            .field("header_name", &self.header_name)
            .field("width", &self.width)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("editable", &self.editable)
            .field("groupable", &self.groupable)
            .field("render_cell", &self.render_cell.is_some())
            .field("value_getter", &self.value_getter.is_some())
            .field("sort_comparator", &self.sort_comparator.is_some())
            .field("filter_operators", &self.filter_operators)
            .finish_non_exhaustive()
    }
}

/// A partial column definition.
///
/// `None` means "not set by this layer". The field is not part of a patch:
/// column identity is never overridable.
///
/// Patches deserialize from camelCase keys; hooks can only be set in code.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColDefPatch {
    /// Column type.
    #[serde(rename = "type")]
    pub col_type: Option<String>,
    /// Header text.
    pub header_name: Option<String>,
    /// Width in pixels.
    pub width: Option<f64>,
    /// Minimum width in pixels.
    pub min_width: Option<f64>,
    /// Sortable flag.
    pub sortable: Option<bool>,
    /// Filterable flag.
    pub filterable: Option<bool>,
    /// Editable flag.
    pub editable: Option<bool>,
    /// Groupable flag.
    pub groupable: Option<bool>,
    /// Hideable flag.
    pub hideable: Option<bool>,
    /// Reorder lock.
    pub disable_reorder: Option<bool>,
    /// Cell alignment.
    pub align: Option<ColumnAlign>,
    /// Cell renderer.
    #[serde(skip)]
    pub render_cell: Option<RenderCellFn>,
    /// Value getter.
    #[serde(skip)]
    pub value_getter: Option<ValueGetterFn>,
    /// Sort comparator.
    #[serde(skip)]
    pub sort_comparator: Option<SortComparatorFn>,
    /// Filter operators.
    #[serde(skip)]
    pub filter_operators: Option<Vec<FilterOperator>>,
}

impl ColDefPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header name.
    pub fn with_header_name(mut self, header_name: impl Into<String>) -> Self {
        self.header_name = Some(header_name.into());
        self
    }

    /// Sets the width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the editable flag.
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = Some(editable);
        self
    }

    /// Sets the column type.
    pub fn with_col_type(mut self, col_type: impl Into<String>) -> Self {
        self.col_type = Some(col_type.into());
        self
    }

    /// Sets the cell renderer.
    pub fn with_render_cell<F>(mut self, render_cell: F) -> Self
    where
        F: Fn(&CellParams<'_>) -> RenderedCell + Send + Sync + 'static,
    {
        self.render_cell = Some(Arc::new(render_cell));
        self
    }

    /// Sets the sort comparator.
    pub fn with_sort_comparator<F>(mut self, sort_comparator: F) -> Self
    where
        F: Fn(&CellValue, &CellValue, &CellParams<'_>, &CellParams<'_>) -> Ordering
            + Send
            + Sync
            + 'static,
    {
        self.sort_comparator = Some(Arc::new(sort_comparator));
        self
    }
}

impl fmt::Debug for ColDefPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColDefPatch")
            .field("col_type", &self.col_type)
            .field("header_name", &self.header_name)
            .field("width", &self.width)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("editable", &self.editable)
            .field("groupable", &self.groupable)
            .field("render_cell", &self.render_cell.is_some())
            .field("value_getter", &self.value_getter.is_some())
            .field("sort_comparator", &self.sort_comparator.is_some())
            .field("filter_operators", &self.filter_operators)
            .finish_non_exhaustive()
    }
}
