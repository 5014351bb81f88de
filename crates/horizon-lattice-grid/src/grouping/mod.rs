//! Row grouping columns.
//!
//! When rows are grouped, the grid shows synthesized columns in front of the
//! data columns. Each grouping column renders group rows with the group cell
//! presenter and, when a leaf field is configured, renders leaf rows the way
//! the leaf column does. Sorting and filtering are borrowed from one of the
//! underlying columns and restricted to the rows that column can judge.
//!
//! Two layouts are available:
//!
//! - one column per criteria, see [`create_grouping_col_def_for_one_criteria`]
//! - one column for the whole model, see
//!   [`create_grouping_col_def_for_all_criteria`]
//!
//! Properties are layered from lowest to highest precedence: string column
//! defaults, computed rendering and width, the borrowed sort and filter
//! rules, the user override, and finally the column identity and type.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_grid::{ColDef, ColumnLookup};
//! use horizon_lattice_grid::grouping::{
//!     create_grouping_columns, GroupingColDefOverride, GroupingColumnMode,
//! };
//! use horizon_lattice_grid::locale::LocaleText;
//!
//! let lookup = ColumnLookup::from_columns([
//!     ColDef::string("company").with_header_name("Company"),
//!     ColDef::string("name"),
//! ]);
//! let model = vec!["company".to_string()];
//! let config = GroupingColDefOverride::new().with_leaf_field("name");
//!
//! let columns = create_grouping_columns(
//!     &lookup,
//!     &model,
//!     GroupingColumnMode::Multiple,
//!     Some(&config),
//!     &LocaleText::default(),
//! )
//! .unwrap();
//! assert_eq!(columns.len(), 1);
//! assert_eq!(columns[0].field, "__row_group_by_columns_group_company");
//! ```

mod col_def_override;
mod multi;
mod properties;
mod row_kind;
mod single;

use serde::{Deserialize, Serialize};

use crate::column::{ColDef, ColumnLookup};
use crate::error::{GridError, Result};
use crate::locale::LocaleTextLookup;
use crate::logging::targets;

pub use col_def_override::GroupingColDefOverride;
pub use multi::{create_grouping_col_def_for_all_criteria, AllCriteriaParams};
pub use row_kind::{compare_grouping_depth, Jurisdiction, RowKind};
pub use single::{create_grouping_col_def_for_one_criteria, OneCriteriaParams};

/// Prefix of the field of single-criteria grouping columns.
pub const GROUPING_COLUMN_PREFIX: &str = "__row_group_by_columns_group_";

/// Field of the grouping column covering every criteria.
pub const GROUPING_COLUMN_SINGLE_FIELD: &str = "__row_group_by_columns_group__";

/// Column type of every grouping column.
pub const GROUPING_COLUMN_TYPE: &str = "rowGroupByColumnsGroup";

/// Room left for the group toggle and indentation.
pub(crate) const GROUPING_COLUMN_EXTRA_WIDTH: f64 = 40.0;

/// Returns the field of the grouping column of a criteria.
pub fn grouping_field_for_criteria(criteria: &str) -> String {
    format!("{GROUPING_COLUMN_PREFIX}{criteria}")
}

/// Returns the criteria of a single-criteria grouping column field.
///
/// The field of the column covering every criteria has no criteria.
pub fn criteria_from_grouping_field(field: &str) -> Option<&str> {
    if field == GROUPING_COLUMN_SINGLE_FIELD {
        return None;
    }
    field.strip_prefix(GROUPING_COLUMN_PREFIX)
}

/// Returns `true` for the field of any grouping column.
pub fn is_grouping_column(field: &str) -> bool {
    field.starts_with(GROUPING_COLUMN_PREFIX)
}

/// How grouping criteria are laid out in columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupingColumnMode {
    /// One column for the whole grouping model.
    #[default]
    Single,
    /// One column per criteria.
    Multiple,
}

/// Synthesizes the grouping columns of a grouping model.
///
/// An empty model needs no grouping column and yields an empty list.
///
/// # Errors
///
/// Returns [`GridError::UnknownColumn`] when a criteria is not in the lookup.
pub fn create_grouping_columns(
    columns_lookup: &ColumnLookup,
    row_grouping_model: &[String],
    mode: GroupingColumnMode,
    col_def_override: Option<&GroupingColDefOverride>,
    locale: &dyn LocaleTextLookup,
) -> Result<Vec<ColDef>> {
    if row_grouping_model.is_empty() {
        return Ok(Vec::new());
    }

    let columns = match mode {
        GroupingColumnMode::Single => {
            vec![create_grouping_col_def_for_all_criteria(AllCriteriaParams {
                columns_lookup,
                row_grouping_model,
                col_def_override,
                locale,
            })?]
        }
        GroupingColumnMode::Multiple => row_grouping_model
            .iter()
            .map(|criteria| -> Result<ColDef> {
                let grouped_by_col_def = columns_lookup
                    .get(criteria)
                    .ok_or_else(|| GridError::unknown_column(criteria))?;
                Ok(create_grouping_col_def_for_one_criteria(OneCriteriaParams {
                    columns_lookup,
                    grouping_criteria: criteria,
                    grouped_by_col_def,
                    col_def_override,
                }))
            })
            .collect::<Result<Vec<_>>>()?,
    };

    tracing::debug!(
        target: targets::GROUPING,
        ?mode,
        criteria = row_grouping_model.len(),
        columns = columns.len(),
        "synthesized grouping columns"
    );
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleText;

    fn lookup() -> ColumnLookup {
        ColumnLookup::from_columns([ColDef::string("company"), ColDef::string("country")])
    }

    fn model() -> Vec<String> {
        vec!["company".to_string(), "country".to_string()]
    }

    #[test]
    fn test_grouping_fields() {
        assert_eq!(grouping_field_for_criteria("company"), "__row_group_by_columns_group_company");
        assert_eq!(
            criteria_from_grouping_field("__row_group_by_columns_group_company"),
            Some("company")
        );
        assert_eq!(criteria_from_grouping_field(GROUPING_COLUMN_SINGLE_FIELD), None);
        assert_eq!(criteria_from_grouping_field("company"), None);
        assert!(is_grouping_column(GROUPING_COLUMN_SINGLE_FIELD));
        assert!(is_grouping_column("__row_group_by_columns_group_company"));
        assert!(!is_grouping_column("company"));
    }

    #[test]
    fn test_single_mode() {
        let columns = create_grouping_columns(
            &lookup(),
            &model(),
            GroupingColumnMode::Single,
            None,
            &LocaleText::default(),
        )
        .unwrap();
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].field, GROUPING_COLUMN_SINGLE_FIELD);
    }

    #[test]
    fn test_multiple_mode() {
        let columns = create_grouping_columns(
            &lookup(),
            &model(),
            GroupingColumnMode::Multiple,
            None,
            &LocaleText::default(),
        )
        .unwrap();
        let fields: Vec<_> = columns.iter().map(|column| column.field.as_str()).collect();
        assert_eq!(
            fields,
            ["__row_group_by_columns_group_company", "__row_group_by_columns_group_country"]
        );
    }

    #[test]
    fn test_empty_model() {
        for mode in [GroupingColumnMode::Single, GroupingColumnMode::Multiple] {
            let columns =
                create_grouping_columns(&lookup(), &[], mode, None, &LocaleText::default()).unwrap();
            assert!(columns.is_empty());
        }
    }

    #[test]
    fn test_unknown_criteria() {
        let model = vec!["region".to_string()];
        for mode in [GroupingColumnMode::Single, GroupingColumnMode::Multiple] {
            let err = create_grouping_columns(&lookup(), &model, mode, None, &LocaleText::default())
                .unwrap_err();
            assert!(matches!(err, GridError::UnknownColumn { .. }));
        }
    }

    #[test]
    fn test_mode_from_json() {
        let mode: GroupingColumnMode = serde_json::from_str(r#""multiple""#).unwrap();
        assert_eq!(mode, GroupingColumnMode::Multiple);
        assert_eq!(GroupingColumnMode::default(), GroupingColumnMode::Single);
    }
}
