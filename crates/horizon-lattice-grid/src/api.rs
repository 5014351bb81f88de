//! The grid engine as seen from column hooks.
//!
//! Column hooks (renderers, value getters, comparators and filter
//! predicates) receive a parameter bundle that carries a reference to the
//! grid through the [`GridApi`] trait. Through it a hook can fetch the value
//! of any other cell of the row and the current row grouping model.

use std::collections::HashMap;
use std::fmt;

use crate::row::{RowId, RowNode};
use crate::value::CellValue;

/// Read access to grid state needed by column hooks.
pub trait GridApi {
    /// Returns the rendered row with the given id, if any.
    fn row_node(&self, id: &RowId) -> Option<&RowNode>;

    /// Returns the raw value of a cell.
    ///
    /// Unknown rows and fields yield `CellValue::None`.
    fn cell_value(&self, id: &RowId, field: &str) -> CellValue;

    /// Returns the current row grouping model, outermost criteria first.
    fn row_grouping_model(&self) -> &[String];
}

/// Parameters passed to cell level hooks.
#[derive(Clone)]
pub struct CellParams<'a> {
    /// The row id.
    pub id: &'a RowId,
    /// The column field.
    pub field: &'a str,
    /// The cell value.
    pub value: CellValue,
    /// The rendered row.
    pub row_node: &'a RowNode,
    /// The grid.
    pub api: &'a dyn GridApi,
}

impl<'a> CellParams<'a> {
    /// Creates parameters from their parts.
    pub fn new(
        api: &'a dyn GridApi,
        row_node: &'a RowNode,
        field: &'a str,
        value: CellValue,
    ) -> Self {
        Self {
            id: &row_node.id,
            field,
            value,
            row_node,
            api,
        }
    }

    /// Fetches the parameter bundle of an arbitrary cell.
    ///
    /// Returns `None` when the grid has no rendered row with this id.
    pub fn for_cell(api: &'a dyn GridApi, id: &RowId, field: &'a str) -> Option<Self> {
        let row_node = api.row_node(id)?;
        let value = api.cell_value(id, field);
        Some(Self::new(api, row_node, field, value))
    }
}

impl fmt::Debug for CellParams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellParams")
            .field("id", self.id)
            .field("field", &self.field)
            .field("value", &self.value)
            .field("row_node", self.row_node)
            .finish_non_exhaustive()
    }
}

/// Parameters passed to value getters.
///
/// Unlike [`CellParams`], the row node may be missing during transient grid
/// states.
#[derive(Clone)]
pub struct ValueGetterParams<'a> {
    /// The row id.
    pub id: &'a RowId,
    /// The column field.
    pub field: &'a str,
    /// The rendered row, if the grid has one.
    pub row_node: Option<&'a RowNode>,
    /// The grid.
    pub api: &'a dyn GridApi,
}

impl<'a> ValueGetterParams<'a> {
    /// Creates value getter parameters, looking up the row node.
    pub fn new(api: &'a dyn GridApi, id: &'a RowId, field: &'a str) -> Self {
        Self {
            id,
            field,
            row_node: api.row_node(id),
            api,
        }
    }
}

impl fmt::Debug for ValueGetterParams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueGetterParams")
            .field("id", self.id)
            .field("field", &self.field)
            .field("row_node", &self.row_node)
            .finish_non_exhaustive()
    }
}

/// An in-memory snapshot of grid state.
///
/// Holds rendered rows, their raw cell values and the grouping model. Useful
/// for driving column hooks outside of a live grid.
///
/// # Example
///
/// ```
/// use horizon_lattice_grid::{GridApi, GridSnapshot, RowNode, CellValue};
///
/// let snapshot = GridSnapshot::new()
///     .with_grouping_model(["company"])
///     .with_row(RowNode::leaf(1), [("name", CellValue::from("Ada"))]);
///
/// assert_eq!(snapshot.cell_value(&1.into(), "name"), CellValue::from("Ada"));
/// assert_eq!(snapshot.row_grouping_model(), ["company".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GridSnapshot {
    nodes: HashMap<RowId, RowNode>,
    values: HashMap<RowId, HashMap<String, CellValue>>,
    order: Vec<RowId>,
    grouping_model: Vec<String>,
}

impl GridSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row grouping model.
    pub fn with_grouping_model<I, S>(mut self, model: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grouping_model = model.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a row and its cell values.
    pub fn with_row<I, S>(mut self, node: RowNode, values: I) -> Self
    where
        I: IntoIterator<Item = (S, CellValue)>,
        S: Into<String>,
    {
        self.insert_row(node, values);
        self
    }

    /// Inserts a row and its cell values, replacing any row with the same id.
    pub fn insert_row<I, S>(&mut self, node: RowNode, values: I)
    where
        I: IntoIterator<Item = (S, CellValue)>,
        S: Into<String>,
    {
        let id = node.id.clone();
        if !self.nodes.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.nodes.insert(id.clone(), node);
        self.values.insert(
            id,
            values.into_iter().map(|(field, value)| (field.into(), value)).collect(),
        );
    }

    /// Sets the value of a single cell.
    pub fn set_value(&mut self, id: &RowId, field: impl Into<String>, value: CellValue) {
        self.values
            .entry(id.clone())
            .or_default()
            .insert(field.into(), value);
    }

    /// Returns the row ids in insertion order.
    pub fn row_ids(&self) -> &[RowId] {
        &self.order
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the snapshot has no rows.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl GridApi for GridSnapshot {
    fn row_node(&self, id: &RowId) -> Option<&RowNode> {
        self.nodes.get(id)
    }

    fn cell_value(&self, id: &RowId, field: &str) -> CellValue {
        self.values
            .get(id)
            .and_then(|row| row.get(field))
            .cloned()
            .unwrap_or_default()
    }

    fn row_grouping_model(&self) -> &[String] {
        &self.grouping_model
    }
}
