//! User overrides of grouping columns.

use serde::Deserialize;

use crate::column::ColDefPatch;

/// Overrides applied to synthesized grouping columns.
///
/// Besides regular column properties, three directives steer synthesis and
/// are removed before the properties are merged:
///
/// - `leaf_field`: the column whose values and renderer are used for leaf rows
/// - `main_grouping_criteria`: the criteria whose sort and filter rules the
///   grouping column adopts, even when a leaf field is set
/// - `hide_descendant_count`: passed to the group cell presenter
///
/// # Example
///
/// ```
/// use horizon_lattice_grid::grouping::GroupingColDefOverride;
///
/// let config: GroupingColDefOverride = serde_json::from_str(
///     r#"{"leafField": "name", "hideDescendantCount": true, "headerName": "Who"}"#,
/// ).unwrap();
/// assert_eq!(config.leaf_field.as_deref(), Some("name"));
/// assert!(config.hide_descendant_count);
/// assert_eq!(config.properties.header_name.as_deref(), Some("Who"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupingColDefOverride {
    /// Column supplying leaf rendering and values.
    #[serde(default)]
    pub leaf_field: Option<String>,
    /// Criteria whose sort and filter rules apply.
    #[serde(default)]
    pub main_grouping_criteria: Option<String>,
    /// Hide the descendant count in group cells.
    #[serde(default)]
    pub hide_descendant_count: bool,
    /// Column properties to override.
    #[serde(flatten)]
    pub properties: ColDefPatch,
}

/// Synthesis directives extracted from an override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct GroupingDirectives {
    pub leaf_field: Option<String>,
    pub main_grouping_criteria: Option<String>,
    pub hide_descendant_count: bool,
}

impl GroupingColDefOverride {
    /// Creates an empty override.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the leaf field.
    pub fn with_leaf_field(mut self, leaf_field: impl Into<String>) -> Self {
        self.leaf_field = Some(leaf_field.into());
        self
    }

    /// Sets the main grouping criteria.
    pub fn with_main_grouping_criteria(mut self, criteria: impl Into<String>) -> Self {
        self.main_grouping_criteria = Some(criteria.into());
        self
    }

    /// Sets whether group cells hide their descendant count.
    pub fn with_hide_descendant_count(mut self, hide: bool) -> Self {
        self.hide_descendant_count = hide;
        self
    }

    /// Sets the column properties to override.
    pub fn with_properties(mut self, properties: ColDefPatch) -> Self {
        self.properties = properties;
        self
    }

    /// Splits an optional override into directives and properties.
    pub(crate) fn split(config: Option<&Self>) -> (GroupingDirectives, ColDefPatch) {
        let Some(config) = config else {
            return Default::default();
        };

        let directives = GroupingDirectives {
            // An empty leaf field means no leaf field.
            leaf_field: config.leaf_field.clone().filter(|field| !field.is_empty()),
            main_grouping_criteria: config
                .main_grouping_criteria
                .clone()
                .filter(|criteria| !criteria.is_empty()),
            hide_descendant_count: config.hide_descendant_count,
        };
        (directives, config.properties.clone())
    }
}
