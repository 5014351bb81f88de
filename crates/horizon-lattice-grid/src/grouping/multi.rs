//! Grouping column covering every grouping criteria.

use std::sync::Arc;

use crate::api::{CellParams, ValueGetterParams};
use crate::column::{ColDef, ColDefPatch, ColumnLookup, RenderCellFn, ValueGetterFn};
use crate::error::{GridError, Result};
use crate::locale::{LocaleTextLookup, GROUPING_COLUMN_HEADER_NAME};
use crate::render::{GroupingCriteriaCell, RenderedCell};
use crate::value::CellValue;

use super::col_def_override::GroupingColDefOverride;
use super::properties::{
    apply_forced_properties, grouping_col_def_defaults, grouping_criteria_properties,
    leaf_properties, leaf_value, render_leaf, LeafColumn,
};
use super::row_kind::RowKind;
use super::{GROUPING_COLUMN_EXTRA_WIDTH, GROUPING_COLUMN_SINGLE_FIELD};

/// Inputs of [`create_grouping_col_def_for_all_criteria`].
#[derive(Clone, Copy)]
pub struct AllCriteriaParams<'a> {
    /// Every column of the grid, by field.
    pub columns_lookup: &'a ColumnLookup,
    /// The grouping model, outermost criteria first.
    pub row_grouping_model: &'a [String],
    /// User overrides of the synthesized column.
    pub col_def_override: Option<&'a GroupingColDefOverride>,
    /// Source of the default header.
    pub locale: &'a dyn LocaleTextLookup,
}

/// Synthesizes the single grouping column of a whole grouping model.
///
/// Every group row renders as a group cell; leaves render through the leaf
/// column when a leaf field is set. The header defaults to the
/// `groupingColumnHeaderName` locale text.
///
/// Sorting and filtering follow, in order of preference: the main grouping
/// criteria when it belongs to the model, the leaf column, then the first
/// criteria of the model. The first criteria only names the column when it
/// is the only one.
///
/// # Errors
///
/// Returns [`GridError::EmptyGroupingModel`] for an empty model and
/// [`GridError::UnknownColumn`] when a criteria is not in the lookup.
pub fn create_grouping_col_def_for_all_criteria(params: AllCriteriaParams<'_>) -> Result<ColDef> {
    let AllCriteriaParams {
        columns_lookup,
        row_grouping_model,
        col_def_override,
        locale,
    } = params;

    let grouped_by_col_defs = row_grouping_model
        .iter()
        .map(|criteria| {
            columns_lookup
                .get(criteria)
                .ok_or_else(|| GridError::unknown_column(criteria))
        })
        .collect::<Result<Vec<_>>>()?;
    let first_col_def = grouped_by_col_defs
        .first()
        .copied()
        .ok_or(GridError::EmptyGroupingModel)?;

    let (directives, override_properties) = GroupingColDefOverride::split(col_def_override);
    let leaf = LeafColumn::resolve(columns_lookup, directives.leaf_field.as_deref());

    let width = grouped_by_col_defs
        .iter()
        .map(|col_def| col_def.width + GROUPING_COLUMN_EXTRA_WIDTH)
        .chain(leaf.as_ref().map(LeafColumn::width))
        .fold(0.0, f64::max);

    let mut common = common_properties(leaf.clone(), directives.hide_descendant_count);
    common.width = Some(width);
    common.header_name = locale.locale_text(GROUPING_COLUMN_HEADER_NAME);

    let main_col_def = directives
        .main_grouping_criteria
        .as_deref()
        .filter(|criteria| row_grouping_model.iter().any(|field| field == criteria))
        .and_then(|criteria| columns_lookup.get(criteria));

    let source = match (main_col_def, &leaf) {
        (Some(main), _) => grouping_criteria_properties(main, true),
        (None, Some(leaf)) => leaf_properties(leaf),
        (None, None) => grouping_criteria_properties(first_col_def, row_grouping_model.len() == 1),
    };

    let field = GROUPING_COLUMN_SINGLE_FIELD.to_string();
    let column = grouping_col_def_defaults(&field).merged([common, source, override_properties]);
    Ok(apply_forced_properties(column, field))
}

fn common_properties(leaf: Option<LeafColumn>, hide_descendant_count: bool) -> ColDefPatch {
    let render_leaf_column = leaf.clone();
    let render_cell: RenderCellFn = Arc::new(move |params: &CellParams<'_>| {
        match RowKind::of(params.row_node) {
            RowKind::Leaf => render_leaf(render_leaf_column.as_ref(), params),
            RowKind::Group(_) => RenderedCell::GroupingCriteria(GroupingCriteriaCell::from_params(
                params,
                hide_descendant_count,
            )),
        }
    });

    let value_getter: ValueGetterFn = Arc::new(move |params: &ValueGetterParams<'_>| {
        let Some(node) = params.row_node else {
            return CellValue::None;
        };
        match RowKind::of(node) {
            RowKind::Leaf => leaf_value(leaf.as_ref(), params),
            RowKind::Group(_) => node.grouping_key.clone().unwrap_or_default(),
        }
    });

    ColDefPatch {
        render_cell: Some(render_cell),
        value_getter: Some(value_getter),
        ..ColDefPatch::default()
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;
    use crate::api::{GridApi, GridSnapshot};
    use crate::grouping::GROUPING_COLUMN_TYPE;
    use crate::locale::LocaleText;
    use crate::row::{RowId, RowNode};

    fn lookup() -> ColumnLookup {
        ColumnLookup::from_columns([
            ColDef::string("company").with_header_name("Company").with_width(150.0),
            ColDef::string("country").with_header_name("Country").with_width(220.0),
            ColDef::string("name").with_width(120.0),
        ])
    }

    fn model(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|field| field.to_string()).collect()
    }

    fn column(model: &[String], config: Option<&GroupingColDefOverride>) -> Result<ColDef> {
        let lookup = lookup();
        create_grouping_col_def_for_all_criteria(AllCriteriaParams {
            columns_lookup: &lookup,
            row_grouping_model: model,
            col_def_override: config,
            locale: &LocaleText::default(),
        })
    }

    fn snapshot() -> GridSnapshot {
        GridSnapshot::new()
            .with_grouping_model(["company", "country"])
            .with_row(
                RowNode::group("g/acme", "company", "Acme"),
                Vec::<(String, CellValue)>::new(),
            )
            .with_row(
                RowNode::group("g/acme/fr", "country", "FR").with_depth(1),
                Vec::<(String, CellValue)>::new(),
            )
            .with_row(RowNode::leaf(1).with_depth(2), [("name", CellValue::from("Ada"))])
    }

    #[test]
    fn test_identity() {
        let column = column(&model(&["company", "country"]), None).unwrap();
        assert_eq!(column.field, "__row_group_by_columns_group__");
        assert_eq!(column.col_type, GROUPING_COLUMN_TYPE);
        assert_eq!(column.width, 260.0);
        assert!(column.disable_reorder);
    }

    #[test]
    fn test_header_name() {
        let several = column(&model(&["company", "country"]), None).unwrap();
        assert_eq!(several.header_name.as_deref(), Some("Group"));

        let one = column(&model(&["company"]), None).unwrap();
        assert_eq!(one.header_name.as_deref(), Some("Company"));

        let localized = LocaleText::from_toml_str(r#"groupingColumnHeaderName = "Gruppe""#).unwrap();
        let lookup = lookup();
        let model = model(&["company", "country"]);
        let column = create_grouping_col_def_for_all_criteria(AllCriteriaParams {
            columns_lookup: &lookup,
            row_grouping_model: &model,
            col_def_override: None,
            locale: &localized,
        })
        .unwrap();
        assert_eq!(column.header_name.as_deref(), Some("Gruppe"));
    }

    #[test]
    fn test_main_grouping_criteria_must_be_in_model() {
        let config = GroupingColDefOverride::new().with_main_grouping_criteria("country");
        let column_with_main = column(&model(&["company", "country"]), Some(&config)).unwrap();
        assert_eq!(column_with_main.header_name.as_deref(), Some("Country"));

        let ignored = column(&model(&["company"]), Some(&config)).unwrap();
        assert_eq!(ignored.header_name.as_deref(), Some("Company"));
    }

    #[test]
    fn test_leaf_source_when_no_main_criteria() {
        let config = GroupingColDefOverride::new().with_leaf_field("name");
        let column = column(&model(&["company", "country"]), Some(&config)).unwrap();
        assert_eq!(column.header_name.as_deref(), Some("name"));
        assert_eq!(column.width, 260.0);
    }

    #[test]
    fn test_rendering_and_values() {
        let snapshot = snapshot();
        let config = GroupingColDefOverride::new().with_leaf_field("name");
        let column = column(&model(&["company", "country"]), Some(&config)).unwrap();
        let render_cell = column.render_cell.as_ref().unwrap();

        for id in [RowId::from("g/acme"), RowId::from("g/acme/fr")] {
            let node = snapshot.row_node(&id).unwrap();
            let rendered = render_cell(&CellParams::new(&snapshot, node, &column.field, CellValue::None));
            assert!(matches!(rendered, RenderedCell::GroupingCriteria(_)));
        }

        let id = RowId::from("g/acme/fr");
        let params = ValueGetterParams::new(&snapshot, &id, &column.field);
        assert_eq!(column.cell_value(&params), CellValue::from("FR"));

        let id = RowId::from(1);
        let params = ValueGetterParams::new(&snapshot, &id, &column.field);
        assert_eq!(column.cell_value(&params), CellValue::from("Ada"));
    }

    #[test]
    fn test_first_criteria_rules_apply_only_to_its_groups() {
        let snapshot = snapshot();
        let column = column(&model(&["company", "country"]), None).unwrap();
        let sort = column.sort_comparator.as_ref().unwrap();

        let company = snapshot.row_node(&RowId::from("g/acme")).unwrap();
        let country = snapshot.row_node(&RowId::from("g/acme/fr")).unwrap();
        let z = CellValue::from("Zeta");
        let a = CellValue::from("Alpha");
        let p_company = CellParams::new(&snapshot, company, "g", z.clone());
        let p_country = CellParams::new(&snapshot, country, "g", a.clone());

        // Outer criteria first, whatever the keys
        assert_eq!(sort(&z, &a, &p_company, &p_country), Ordering::Less);
    }

    #[test]
    fn test_invalid_models() {
        assert!(matches!(column(&[], None), Err(GridError::EmptyGroupingModel)));
        assert!(matches!(
            column(&model(&["company", "missing"]), None),
            Err(GridError::UnknownColumn { field }) if field == "missing"
        ));
    }
}
