//! Sort and filter pass over rendered rows.
//!
//! `RowProxy` drives a column definition's hooks the way the grid engine
//! does: it reads each row's value through the column's value getter, keeps
//! the rows accepted by the active filter predicate and orders them with the
//! column's sort comparator.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::api::{CellParams, GridApi, ValueGetterParams};
use crate::column::{string_number_comparator, value_comparator, ColDef};
use crate::error::{GridError, Result};
use crate::filter::{find_operator, ApplyFilterFn, FilterItem};
use crate::logging::targets;
use crate::row::RowId;
use crate::value::CellValue;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

/// Internal row mapping from proxy to source.
struct RowMapping {
    /// Mapping from proxy row index to source row index.
    proxy_to_source: Vec<usize>,
    /// Mapping from source row index to proxy row index (None if filtered out).
    source_to_proxy: Vec<Option<usize>>,
}

impl RowMapping {
    fn new() -> Self {
        Self {
            proxy_to_source: Vec::new(),
            source_to_proxy: Vec::new(),
        }
    }

    fn clear(&mut self) {
        self.proxy_to_source.clear();
        self.source_to_proxy.clear();
    }
}

struct ActiveSort {
    column: ColDef,
    direction: SortDirection,
}

struct ActiveFilter {
    column: ColDef,
    predicate: ApplyFilterFn,
}

/// A sorted and filtered view over a list of rendered rows.
///
/// Source rows are identified by id; rows the grid has no node for are never
/// visible.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use horizon_lattice_grid::{CellValue, ColDef, GridSnapshot, RowId, RowNode, RowProxy, SortDirection};
///
/// let snapshot = GridSnapshot::new()
///     .with_row(RowNode::leaf(1), [("name", CellValue::from("Grace"))])
///     .with_row(RowNode::leaf(2), [("name", CellValue::from("Ada"))]);
/// let rows = snapshot.row_ids().to_vec();
///
/// let proxy = RowProxy::new(Arc::new(snapshot), rows);
/// proxy.sort_by_column(&ColDef::string("name"), SortDirection::Asc);
/// assert_eq!(proxy.visible_rows(), [RowId::from(2), RowId::from(1)]);
/// ```
pub struct RowProxy<A: GridApi> {
    source: Arc<A>,
    rows: RwLock<Vec<RowId>>,
    sort: RwLock<Option<ActiveSort>>,
    filter: RwLock<Option<ActiveFilter>>,
    mapping: RwLock<RowMapping>,
}

impl<A: GridApi + 'static> RowProxy<A> {
    /// Creates a proxy over the given source rows, in source order.
    pub fn new(source: Arc<A>, rows: Vec<RowId>) -> Self {
        let proxy = Self {
            source,
            rows: RwLock::new(rows),
            sort: RwLock::new(None),
            filter: RwLock::new(None),
            mapping: RwLock::new(RowMapping::new()),
        };
        proxy.rebuild_mapping();
        proxy
    }

    /// Returns a reference to the grid.
    pub fn source(&self) -> &Arc<A> {
        &self.source
    }

    /// Replaces the source rows.
    pub fn set_rows(&self, rows: Vec<RowId>) {
        *self.rows.write() = rows;
        self.rebuild_mapping();
    }

    /// Sorts rows with a column's comparator.
    ///
    /// Columns without a comparator sort by value with
    /// [`string_number_comparator`]. Descending order reverses the comparator.
    pub fn sort_by_column(&self, column: &ColDef, direction: SortDirection) {
        *self.sort.write() = Some(ActiveSort {
            column: column.clone(),
            direction,
        });
        self.rebuild_mapping();
    }

    /// Clears sorting, restoring source order.
    pub fn clear_sort(&self) {
        *self.sort.write() = None;
        self.rebuild_mapping();
    }

    /// Filters rows with one of a column's filter operators.
    ///
    /// An item the operator cannot turn into a predicate (an incomplete
    /// value, for instance) clears the filter: every row stays visible.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnknownOperator`] when the column does not offer
    /// the item's operator.
    pub fn set_filter(&self, column: &ColDef, item: &FilterItem) -> Result<()> {
        let operator = column
            .filter_operators
            .as_deref()
            .and_then(|operators| find_operator(operators, &item.operator_value))
            .ok_or_else(|| GridError::unknown_operator(&column.field, &item.operator_value))?;

        let active = operator.apply_filter_fn(item, column).map(|predicate| ActiveFilter {
            column: column.clone(),
            predicate,
        });
        if active.is_none() {
            tracing::debug!(
                target: targets::PROXY,
                field = %column.field,
                operator = %item.operator_value,
                "filter item is incomplete, showing every row"
            );
        }

        *self.filter.write() = active;
        self.rebuild_mapping();
        Ok(())
    }

    /// Clears the filter, showing all rows.
    pub fn clear_filter(&self) {
        *self.filter.write() = None;
        self.rebuild_mapping();
    }

    /// Forces a rebuild of the mapping.
    ///
    /// Call this when the grid state behind the source changes.
    pub fn invalidate(&self) {
        self.rebuild_mapping();
    }

    /// Returns the number of visible rows.
    pub fn row_count(&self) -> usize {
        self.mapping.read().proxy_to_source.len()
    }

    /// Returns the id of a visible row.
    pub fn row_id(&self, proxy_row: usize) -> Option<RowId> {
        let source_row = self.map_to_source(proxy_row)?;
        self.rows.read().get(source_row).cloned()
    }

    /// Returns the ids of the visible rows, in display order.
    pub fn visible_rows(&self) -> Vec<RowId> {
        let rows = self.rows.read();
        self.mapping
            .read()
            .proxy_to_source
            .iter()
            .filter_map(|&source_row| rows.get(source_row).cloned())
            .collect()
    }

    /// Maps a visible row to its source row.
    pub fn map_to_source(&self, proxy_row: usize) -> Option<usize> {
        self.mapping.read().proxy_to_source.get(proxy_row).copied()
    }

    /// Maps a source row to its visible row, `None` if filtered out.
    pub fn map_from_source(&self, source_row: usize) -> Option<usize> {
        self.mapping
            .read()
            .source_to_proxy
            .get(source_row)
            .and_then(|&row| row)
    }

    /// Computes a cell value through the column's value getter.
    fn value_of(&self, column: &ColDef, id: &RowId) -> CellValue {
        column.cell_value(&ValueGetterParams::new(&*self.source, id, &column.field))
    }

    /// Rebuilds the internal mapping based on filter and sort.
    fn rebuild_mapping(&self) {
        let api: &dyn GridApi = &*self.source;
        let rows = self.rows.read();

        let mut mapping = self.mapping.write();
        mapping.clear();
        mapping.source_to_proxy.resize(rows.len(), None);

        // First, collect rows that have a node and pass the filter
        let filter_guard = self.filter.read();
        let mut visible_rows: Vec<usize> = (0..rows.len())
            .filter(|&row| {
                let id = &rows[row];
                let Some(node) = api.row_node(id) else {
                    return false;
                };
                match filter_guard.as_ref() {
                    Some(filter) => {
                        let field = filter.column.field.as_str();
                        let value = self.value_of(&filter.column, id);
                        (filter.predicate)(&CellParams::new(api, node, field, value))
                    }
                    None => true,
                }
            })
            .collect();
        drop(filter_guard);

        // Then, sort if a column is selected
        if let Some(sort) = self.sort.read().as_ref() {
            let comparator = sort
                .column
                .sort_comparator
                .clone()
                .unwrap_or_else(|| value_comparator(string_number_comparator));
            let field = sort.column.field.as_str();

            // Values are computed once per row, not once per comparison
            let mut keyed: Vec<(usize, CellParams<'_>)> = visible_rows
                .iter()
                .filter_map(|&row| {
                    let id = &rows[row];
                    let node = api.row_node(id)?;
                    let value = self.value_of(&sort.column, id);
                    Some((row, CellParams::new(api, node, field, value)))
                })
                .collect();

            keyed.sort_by(|(_, a), (_, b)| {
                let ordering = comparator(&a.value, &b.value, a, b);
                match sort.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
            visible_rows = keyed.into_iter().map(|(row, _)| row).collect();
        }

        // Build the mapping
        for (proxy_row, &source_row) in visible_rows.iter().enumerate() {
            mapping.proxy_to_source.push(source_row);
            mapping.source_to_proxy[source_row] = Some(proxy_row);
        }

        tracing::debug!(
            target: targets::PROXY,
            visible = visible_rows.len(),
            total = rows.len(),
            "rebuilt row mapping"
        );
    }
}
