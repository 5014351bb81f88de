//! Filter items.

use serde::{Deserialize, Serialize};

use crate::value::{parse_loose_number, CellValue};

/// The value entered in a filter panel input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// No value entered yet.
    #[default]
    None,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
    /// Several values (for `isAnyOf`).
    List(Vec<FilterValue>),
}

impl FilterValue {
    /// Returns `true` if no value is set.
    pub fn is_none(&self) -> bool {
        matches!(self, FilterValue::None)
    }

    /// Returns the truthiness of the value.
    ///
    /// `None`, `false`, zero, `NaN` and empty text are falsy. Lists are
    /// always truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            FilterValue::None => false,
            FilterValue::Bool(b) => *b,
            FilterValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FilterValue::Text(s) => !s.is_empty(),
            FilterValue::List(_) => true,
        }
    }

    /// Returns the value as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the values of a list.
    pub fn as_list(&self) -> Option<&[FilterValue]> {
        match self {
            FilterValue::List(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    /// Returns the value as a usable number.
    ///
    /// Numbers are returned as is and text is parsed; `None` is returned for
    /// missing, non numeric or `NaN` values.
    pub fn as_number(&self) -> Option<f64> {
        let number = match self {
            FilterValue::Number(n) => *n,
            FilterValue::Text(s) => parse_loose_number(s),
            _ => return None,
        };
        (!number.is_nan()).then_some(number)
    }

    /// Converts the value to the cell value it would compare against.
    pub fn to_cell_value(&self) -> CellValue {
        match self {
            FilterValue::None | FilterValue::List(_) => CellValue::None,
            FilterValue::Bool(b) => CellValue::Bool(*b),
            FilterValue::Number(n) => CellValue::Float(*n),
            FilterValue::Text(s) => CellValue::String(s.clone()),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Text(s)
    }
}

impl From<f64> for FilterValue {
    fn from(n: f64) -> Self {
        FilterValue::Number(n)
    }
}

impl From<i32> for FilterValue {
    fn from(n: i32) -> Self {
        FilterValue::Number(n as f64)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        FilterValue::Bool(b)
    }
}

impl<T: Into<FilterValue>> From<Vec<T>> for FilterValue {
    fn from(values: Vec<T>) -> Self {
        FilterValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// One filter condition: a column, an operator and a value.
///
/// # Example
///
/// ```
/// use horizon_lattice_grid::filter::{FilterItem, FilterValue};
///
/// let item = FilterItem::new("price", ">").with_value(10);
/// assert_eq!(item.value.as_number(), Some(10.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterItem {
    /// Optional id of the item inside a filter model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Field of the filtered column.
    pub column_field: String,
    /// Tag of the operator to apply.
    pub operator_value: String,
    /// The entered value.
    #[serde(default)]
    pub value: FilterValue,
}

impl FilterItem {
    /// Creates a filter item without a value.
    pub fn new(column_field: impl Into<String>, operator_value: impl Into<String>) -> Self {
        Self {
            id: None,
            column_field: column_field.into(),
            operator_value: operator_value.into(),
            value: FilterValue::None,
        }
    }

    /// Sets the value.
    pub fn with_value(mut self, value: impl Into<FilterValue>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_number() {
        assert_eq!(FilterValue::from(5).as_number(), Some(5.0));
        assert_eq!(FilterValue::from("2.5").as_number(), Some(2.5));
        assert_eq!(FilterValue::from("abc").as_number(), None);
        assert_eq!(FilterValue::Number(f64::NAN).as_number(), None);
        assert_eq!(FilterValue::None.as_number(), None);
        assert_eq!(FilterValue::from(true).as_number(), None);
    }

    #[test]
    fn test_truthiness() {
        assert!(!FilterValue::None.is_truthy());
        assert!(!FilterValue::from("").is_truthy());
        assert!(!FilterValue::from(false).is_truthy());
        assert!(FilterValue::from("false").is_truthy());
        assert!(FilterValue::List(Vec::new()).is_truthy());
    }

    #[test]
    fn test_filter_item_from_json() {
        let item: FilterItem = serde_json::from_str(
            r#"{"columnField": "price", "operatorValue": "isAnyOf", "value": [1, "2"]}"#,
        )
        .unwrap();
        assert_eq!(item.column_field, "price");
        assert_eq!(
            item.value,
            FilterValue::List(vec![FilterValue::Number(1.0), FilterValue::from("2")])
        );

        let item: FilterItem =
            serde_json::from_str(r#"{"columnField": "a", "operatorValue": "isEmpty"}"#).unwrap();
        assert!(item.value.is_none());
    }
}
