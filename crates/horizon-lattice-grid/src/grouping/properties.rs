//! Property layers shared by both grouping column synthesizers.

use std::sync::Arc;

use crate::api::{CellParams, ValueGetterParams};
use crate::column::{
    string_number_comparator, value_comparator, ColDef, ColDefPatch, ColumnLookup,
    SortComparatorFn,
};
use crate::filter::{grid_string_operators, ApplyFilterFn, FilterOperator};
use crate::logging::targets;
use crate::render::{LeafCell, RenderedCell};
use crate::value::CellValue;

use super::row_kind::{compare_grouping_depth, Jurisdiction};
use super::GROUPING_COLUMN_TYPE;

/// Lowest layer: a string column that cannot be reordered.
pub(crate) fn grouping_col_def_defaults(field: &str) -> ColDef {
    ColDef::string(field).with_disable_reorder(true)
}

/// Highest layer: identity and type, never overridable.
pub(crate) fn apply_forced_properties(mut column: ColDef, field: String) -> ColDef {
    column.field = field;
    column.col_type = GROUPING_COLUMN_TYPE.to_string();
    column.editable = false;
    column.groupable = false;
    column
}

/// The column that renders and supplies leaf rows.
#[derive(Debug, Clone)]
pub(crate) struct LeafColumn {
    field: String,
    col_def: ColDef,
}

impl LeafColumn {
    /// Resolves the leaf field against the lookup.
    ///
    /// An unknown leaf field is treated as no leaf field.
    pub(crate) fn resolve(lookup: &ColumnLookup, leaf_field: Option<&str>) -> Option<Self> {
        let field = leaf_field?;
        match lookup.get(field) {
            Some(col_def) => Some(Self {
                field: field.to_string(),
                col_def: col_def.clone(),
            }),
            None => {
                tracing::warn!(
                    target: targets::GROUPING,
                    leaf_field = field,
                    "leaf field is not a known column, leaves will render empty"
                );
                None
            }
        }
    }

    pub(crate) fn col_def(&self) -> &ColDef {
        &self.col_def
    }

    pub(crate) fn width(&self) -> f64 {
        self.col_def.width
    }

    /// Renders the leaf cell of a row with the leaf column's renderer, or the
    /// leaf cell presenter when it has none.
    pub(crate) fn render(&self, params: &CellParams<'_>) -> RenderedCell {
        let Some(leaf_params) = CellParams::for_cell(params.api, params.id, &self.field) else {
            return RenderedCell::Empty;
        };

        match &self.col_def.render_cell {
            Some(render_cell) => render_cell(&leaf_params),
            None => RenderedCell::Leaf(LeafCell::from_params(&leaf_params)),
        }
    }

    /// Reads the leaf value of a row.
    pub(crate) fn value(&self, params: &ValueGetterParams<'_>) -> CellValue {
        params.api.cell_value(params.id, &self.field)
    }
}

/// Renders a leaf row: through the leaf column if any, empty otherwise.
pub(crate) fn render_leaf(leaf: Option<&LeafColumn>, params: &CellParams<'_>) -> RenderedCell {
    leaf.map_or(RenderedCell::Empty, |leaf| leaf.render(params))
}

/// Reads the value of a leaf row: from the leaf column if any.
pub(crate) fn leaf_value(leaf: Option<&LeafColumn>, params: &ValueGetterParams<'_>) -> CellValue {
    leaf.map_or(CellValue::None, |leaf| leaf.value(params))
}

/// Sort and filter rules of `source`, restricted to `jurisdiction`.
///
/// Rows outside the jurisdiction are ordered by [`compare_grouping_depth`]
/// and always pass the filters.
fn scoped_properties(source: &ColDef, jurisdiction: Jurisdiction) -> ColDefPatch {
    let comparator = source
        .sort_comparator
        .clone()
        .unwrap_or_else(|| value_comparator(string_number_comparator));
    let sort_scope = jurisdiction.clone();
    let sort_comparator: SortComparatorFn = Arc::new(
        move |v1: &CellValue, v2: &CellValue, p1: &CellParams<'_>, p2: &CellParams<'_>| {
            if sort_scope.covers(p1.row_node) && sort_scope.covers(p2.row_node) {
                comparator(v1, v2, p1, p2)
            } else {
                compare_grouping_depth(p1, p2)
            }
        },
    );

    let filter_operators: Vec<FilterOperator> = source
        .filter_operators
        .clone()
        .unwrap_or_else(grid_string_operators)
        .iter()
        .map(|operator| scope_filter_operator(operator, jurisdiction.clone()))
        .collect();

    ColDefPatch {
        sortable: Some(source.sortable),
        filterable: Some(source.filterable),
        sort_comparator: Some(sort_comparator),
        filter_operators: Some(filter_operators),
        ..ColDefPatch::default()
    }
}

/// Wraps an operator so rows outside `jurisdiction` always pass.
fn scope_filter_operator(operator: &FilterOperator, jurisdiction: Jurisdiction) -> FilterOperator {
    operator.wrap_apply_filter_fn(move |apply: ApplyFilterFn| {
        let scope = jurisdiction.clone();
        let scoped: ApplyFilterFn = Arc::new(move |params: &CellParams<'_>| {
            !scope.covers(params.row_node) || apply(params)
        });
        scoped
    })
}

/// Source properties delegating sort and filter to the leaf column.
pub(crate) fn leaf_properties(leaf: &LeafColumn) -> ColDefPatch {
    let col_def = leaf.col_def();
    ColDefPatch {
        header_name: Some(col_def.header_name_or_field().to_string()),
        ..scoped_properties(col_def, Jurisdiction::Leaves)
    }
}

/// Source properties delegating sort and filter to a grouped-by column.
pub(crate) fn grouping_criteria_properties(
    grouped_by: &ColDef,
    apply_header_name: bool,
) -> ColDefPatch {
    let properties = scoped_properties(grouped_by, Jurisdiction::Criteria(grouped_by.field.clone()));
    if apply_header_name {
        ColDefPatch {
            header_name: Some(grouped_by.header_name_or_field().to_string()),
            ..properties
        }
    } else {
        properties
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;
    use crate::api::{GridApi, GridSnapshot};
    use crate::filter::{find_operator, FilterItem};
    use crate::row::{RowId, RowNode};

    fn snapshot() -> GridSnapshot {
        GridSnapshot::new()
            .with_grouping_model(["company"])
            .with_row(RowNode::group("g1", "company", "Acme"), Vec::<(String, CellValue)>::new())
            .with_row(RowNode::leaf(1), [("name", CellValue::from("Ada"))])
    }

    #[test]
    fn test_forced_properties() {
        let column = grouping_col_def_defaults("x")
            .patched(ColDefPatch::new().with_editable(true).with_col_type("string"));
        let column = apply_forced_properties(column, "forced".to_string());
        assert_eq!(column.field, "forced");
        assert_eq!(column.col_type, GROUPING_COLUMN_TYPE);
        assert!(!column.editable);
        assert!(!column.groupable);
        assert!(column.disable_reorder);
    }

    #[test]
    fn test_unknown_leaf_field_resolves_to_none() {
        let lookup = ColumnLookup::from_columns([ColDef::string("name")]);
        assert!(LeafColumn::resolve(&lookup, Some("missing")).is_none());
        assert!(LeafColumn::resolve(&lookup, None).is_none());
        assert!(LeafColumn::resolve(&lookup, Some("name")).is_some());
    }

    #[test]
    fn test_leaf_render_uses_default_presenter() {
        let snapshot = snapshot();
        let lookup = ColumnLookup::from_columns([ColDef::string("name")]);
        let leaf = LeafColumn::resolve(&lookup, Some("name")).unwrap();

        let node = snapshot.row_node(&RowId::from(1)).unwrap();
        let params = CellParams::new(&snapshot, node, "group", CellValue::None);
        match leaf.render(&params) {
            RenderedCell::Leaf(cell) => {
                assert_eq!(cell.field, "name");
                assert_eq!(cell.value, CellValue::from("Ada"));
            }
            other => panic!("expected a leaf cell, got {other:?}"),
        }
    }

    #[test]
    fn test_leaf_filter_passes_group_rows() {
        let snapshot = snapshot();
        let leaf_col = ColDef::string("name");
        let lookup = ColumnLookup::from_columns([leaf_col.clone()]);
        let leaf = LeafColumn::resolve(&lookup, Some("name")).unwrap();
        let patch = leaf_properties(&leaf);
        assert_eq!(patch.header_name.as_deref(), Some("name"));

        let operators = patch.filter_operators.unwrap();
        let equals = find_operator(&operators, "equals").unwrap();
        let predicate = equals
            .apply_filter_fn(&FilterItem::new("group", "equals").with_value("nobody"), &leaf_col)
            .unwrap();

        let group = snapshot.row_node(&RowId::from("g1")).unwrap();
        let leaf_node = snapshot.row_node(&RowId::from(1)).unwrap();
        assert!(predicate(&CellParams::new(&snapshot, group, "group", CellValue::from("Acme"))));
        assert!(!predicate(&CellParams::new(&snapshot, leaf_node, "group", CellValue::from("Ada"))));
    }

    #[test]
    fn test_criteria_header_is_optional() {
        let grouped = ColDef::string("company").with_header_name("Company");
        assert_eq!(
            grouping_criteria_properties(&grouped, true).header_name.as_deref(),
            Some("Company")
        );
        assert!(grouping_criteria_properties(&grouped, false).header_name.is_none());
    }

    #[test]
    fn test_criteria_sort_defers_for_other_rows() {
        let snapshot = snapshot();
        let reversed = ColDef::string("company").with_sort_comparator(|a, b, _, _| {
            string_number_comparator(b, a)
        });
        let sort = grouping_criteria_properties(&reversed, true).sort_comparator.unwrap();

        let group = RowNode::group("g2", "company", "Beta");
        let other = snapshot.row_node(&RowId::from("g1")).unwrap();
        let leaf = snapshot.row_node(&RowId::from(1)).unwrap();
        let a = CellValue::from("Acme");
        let b = CellValue::from("Beta");

        let p_other = CellParams::new(&snapshot, other, "g", a.clone());
        let p_group = CellParams::new(&snapshot, &group, "g", b.clone());
        assert_eq!(sort(&a, &b, &p_other, &p_group), Ordering::Greater);

        let p_leaf = CellParams::new(&snapshot, leaf, "g", CellValue::None);
        assert_eq!(sort(&CellValue::None, &a, &p_leaf, &p_other), Ordering::Less);
    }
}
