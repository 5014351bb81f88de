//! Grouping column covering one grouping criteria.

use std::sync::Arc;

use crate::api::{CellParams, ValueGetterParams};
use crate::column::{ColDef, ColDefPatch, ColumnLookup, RenderCellFn, ValueGetterFn};
use crate::render::{GroupingCriteriaCell, RenderedCell};
use crate::value::CellValue;

use super::col_def_override::GroupingColDefOverride;
use super::properties::{
    apply_forced_properties, grouping_col_def_defaults, grouping_criteria_properties,
    leaf_properties, leaf_value, render_leaf, LeafColumn,
};
use super::row_kind::RowKind;
use super::{grouping_field_for_criteria, GROUPING_COLUMN_EXTRA_WIDTH};

/// Inputs of [`create_grouping_col_def_for_one_criteria`].
#[derive(Debug, Clone, Copy)]
pub struct OneCriteriaParams<'a> {
    /// Every column of the grid, by field.
    pub columns_lookup: &'a ColumnLookup,
    /// The criteria this column groups by.
    pub grouping_criteria: &'a str,
    /// The column of the criteria.
    pub grouped_by_col_def: &'a ColDef,
    /// User overrides of the synthesized column.
    pub col_def_override: Option<&'a GroupingColDefOverride>,
}

/// Synthesizes the grouping column of a single criteria.
///
/// The column renders groups of `grouping_criteria` and, when a leaf field
/// is set, the leaves. Groups of other criteria render empty.
///
/// Sorting and filtering follow the grouped-by column, or the leaf column
/// when a leaf field is set and the main grouping criteria is not this
/// one. Either way the borrowed rules only judge rows they are meant for.
///
/// The criteria is expected to be present in the lookup; callers that have
/// not checked should go through [`create_grouping_columns`].
///
/// [`create_grouping_columns`]: super::create_grouping_columns
pub fn create_grouping_col_def_for_one_criteria(params: OneCriteriaParams<'_>) -> ColDef {
    let OneCriteriaParams {
        columns_lookup,
        grouping_criteria,
        grouped_by_col_def,
        col_def_override,
    } = params;

    let (directives, override_properties) = GroupingColDefOverride::split(col_def_override);
    let leaf = LeafColumn::resolve(columns_lookup, directives.leaf_field.as_deref());
    let field = grouping_field_for_criteria(grouping_criteria);

    let common = common_properties(
        grouping_criteria,
        grouped_by_col_def,
        leaf.clone(),
        directives.hide_descendant_count,
    );

    let source = if directives.main_grouping_criteria.as_deref() == Some(grouping_criteria) {
        grouping_criteria_properties(grouped_by_col_def, true)
    } else if let Some(leaf) = &leaf {
        leaf_properties(leaf)
    } else {
        grouping_criteria_properties(grouped_by_col_def, true)
    };

    let column = grouping_col_def_defaults(&field).merged([common, source, override_properties]);
    apply_forced_properties(column, field)
}

fn common_properties(
    grouping_criteria: &str,
    grouped_by_col_def: &ColDef,
    leaf: Option<LeafColumn>,
    hide_descendant_count: bool,
) -> ColDefPatch {
    let width = (grouped_by_col_def.width + GROUPING_COLUMN_EXTRA_WIDTH)
        .max(leaf.as_ref().map_or(0.0, LeafColumn::width));

    let render_criteria = grouping_criteria.to_string();
    let render_leaf_column = leaf.clone();
    let render_cell: RenderCellFn = Arc::new(move |params: &CellParams<'_>| {
        match RowKind::of(params.row_node) {
            RowKind::Leaf => render_leaf(render_leaf_column.as_ref(), params),
            RowKind::Group(criteria) if criteria == render_criteria => {
                RenderedCell::GroupingCriteria(GroupingCriteriaCell::from_params(
                    params,
                    hide_descendant_count,
                ))
            }
            RowKind::Group(_) => RenderedCell::Empty,
        }
    });

    let value_criteria = grouping_criteria.to_string();
    let value_getter: ValueGetterFn = Arc::new(move |params: &ValueGetterParams<'_>| {
        let Some(node) = params.row_node else {
            return CellValue::None;
        };
        match RowKind::of(node) {
            RowKind::Leaf => leaf_value(leaf.as_ref(), params),
            RowKind::Group(criteria) if criteria == value_criteria => {
                node.grouping_key.clone().unwrap_or_default()
            }
            RowKind::Group(_) => CellValue::None,
        }
    });

    ColDefPatch {
        width: Some(width),
        render_cell: Some(render_cell),
        value_getter: Some(value_getter),
        ..ColDefPatch::default()
    }
}
