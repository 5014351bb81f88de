//! Locale text of the grid.
//!
//! The grid never hardcodes user-visible strings; it asks a
//! [`LocaleTextLookup`] by key. [`LocaleText`] is the default table: English
//! strings that can be replaced wholesale or in part from TOML or JSON.
//!
//! ```
//! use horizon_lattice_grid::locale::{LocaleText, LocaleTextLookup, GROUPING_COLUMN_HEADER_NAME};
//!
//! let locale = LocaleText::from_toml_str(r#"groupingColumnHeaderName = "Gruppe""#).unwrap();
//! assert_eq!(locale.locale_text(GROUPING_COLUMN_HEADER_NAME).as_deref(), Some("Gruppe"));
//! // Keys missing from the file keep their defaults
//! assert_eq!(locale.locale_text("filterOperatorIs").as_deref(), Some("is"));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Key of the multi-criteria grouping column header.
pub const GROUPING_COLUMN_HEADER_NAME: &str = "groupingColumnHeaderName";

/// Lookup of locale text by key.
pub trait LocaleTextLookup {
    /// Returns the text of a key, or `None` for unknown keys.
    fn locale_text(&self, key: &str) -> Option<String>;
}

/// Table of grid locale strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleText {
    /// Header of the grouping column covering every criteria.
    pub grouping_column_header_name: String,
    /// `contains` operator.
    pub filter_operator_contains: String,
    /// `equals` operator.
    pub filter_operator_equals: String,
    /// `startsWith` operator.
    pub filter_operator_starts_with: String,
    /// `endsWith` operator.
    pub filter_operator_ends_with: String,
    /// `is` operator.
    pub filter_operator_is: String,
    /// `isEmpty` operator.
    pub filter_operator_is_empty: String,
    /// `isNotEmpty` operator.
    pub filter_operator_is_not_empty: String,
    /// `isAnyOf` operator.
    pub filter_operator_is_any_of: String,
    /// Boolean filter input: any value.
    pub filter_value_any: String,
    /// Boolean filter input: true.
    pub filter_value_true: String,
    /// Boolean filter input: false.
    pub filter_value_false: String,
}

impl Default for LocaleText {
    fn default() -> Self {
        Self {
            grouping_column_header_name: "Group".to_string(),
            filter_operator_contains: "contains".to_string(),
            filter_operator_equals: "equals".to_string(),
            filter_operator_starts_with: "starts with".to_string(),
            filter_operator_ends_with: "ends with".to_string(),
            filter_operator_is: "is".to_string(),
            filter_operator_is_empty: "is empty".to_string(),
            filter_operator_is_not_empty: "is not empty".to_string(),
            filter_operator_is_any_of: "is any of".to_string(),
            filter_value_any: "any".to_string(),
            filter_value_true: "true".to_string(),
            filter_value_false: "false".to_string(),
        }
    }
}

impl LocaleText {
    /// Parses locale text from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| GridError::LocaleParse(e.to_string()))
    }

    /// Parses locale text from JSON. Missing keys keep their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| GridError::LocaleParse(e.to_string()))
    }

    fn get(&self, key: &str) -> Option<&str> {
        let text = match key {
            GROUPING_COLUMN_HEADER_NAME => &self.grouping_column_header_name,
            "filterOperatorContains" => &self.filter_operator_contains,
            "filterOperatorEquals" => &self.filter_operator_equals,
            "filterOperatorStartsWith" => &self.filter_operator_starts_with,
            "filterOperatorEndsWith" => &self.filter_operator_ends_with,
            "filterOperatorIs" => &self.filter_operator_is,
            "filterOperatorIsEmpty" => &self.filter_operator_is_empty,
            "filterOperatorIsNotEmpty" => &self.filter_operator_is_not_empty,
            "filterOperatorIsAnyOf" => &self.filter_operator_is_any_of,
            "filterValueAny" => &self.filter_value_any,
            "filterValueTrue" => &self.filter_value_true,
            "filterValueFalse" => &self.filter_value_false,
            _ => return None,
        };
        Some(text.as_str())
    }
}

impl LocaleTextLookup for LocaleText {
    fn locale_text(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let locale = LocaleText::default();
        assert_eq!(locale.locale_text(GROUPING_COLUMN_HEADER_NAME).as_deref(), Some("Group"));
        assert_eq!(locale.locale_text("filterOperatorIsAnyOf").as_deref(), Some("is any of"));
        assert_eq!(locale.locale_text("unknownKey"), None);
    }

    #[test]
    fn test_from_json() {
        let locale = LocaleText::from_json_str(r#"{"filterValueTrue": "oui"}"#).unwrap();
        assert_eq!(locale.filter_value_true, "oui");
        assert_eq!(locale.grouping_column_header_name, "Group");
    }

    #[test]
    fn test_parse_error() {
        let err = LocaleText::from_toml_str("groupingColumnHeaderName = [").unwrap_err();
        assert!(matches!(err, GridError::LocaleParse(_)));
    }
}
